//! Tenant/site-wide settings: the middle layer of every cascade.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::enums::PageCategory;

/// Site-wide configuration for one tenant.
///
/// Read-mostly. Builders never mutate it; changes go through
/// [`SiteSettings::apply_update`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteSettings {
    pub site_url: String,
    pub site_name: String,
    pub site_description: Option<String>,
    pub organization: OrganizationSettings,

    /// Fallback Open Graph / Twitter image when a page has none.
    pub default_og_image: Option<String>,
    pub default_og_image_alt: Option<String>,

    /// Primary locale in `language_REGION` or BCP-47 form (e.g. `ar_SA`).
    pub default_locale: Option<String>,
    /// Comma-separated alternate locales used for hreflang (e.g. `en_US,fr_FR`).
    pub alternate_locales: Option<String>,
    /// Languages the site publishes in. Drives `inLanguage` on graph nodes.
    pub languages: Vec<String>,

    pub twitter_site: Option<String>,
    pub twitter_creator: Option<String>,
    pub twitter_card: Option<String>,

    pub default_robots: Option<String>,
    pub default_googlebot: Option<String>,
    pub default_sitemap_priority: Option<f64>,
    pub default_sitemap_frequency: Option<String>,

    /// Search URL template containing `{search_term_string}`.
    pub search_url_template: Option<String>,
    pub default_author: Option<String>,

    /// Slugs registered as "site pages"; they render as `AboutPage`.
    pub site_pages: Vec<String>,

    /// Per-category SEO title/description fallbacks.
    pub page_seo: BTreeMap<PageCategory, CategorySeo>,
}

/// SEO defaults for one page category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CategorySeo {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// The publishing organization behind the site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrganizationSettings {
    pub legal_name: Option<String>,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub email: Option<String>,
    pub telephone: Option<String>,
    pub contact_type: Option<String>,
    pub area_served: Option<String>,
    pub street_address: Option<String>,
    pub address_locality: Option<String>,
    pub address_region: Option<String>,
    pub postal_code: Option<String>,
    pub address_country: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub same_as: Vec<String>,
}

impl SiteSettings {
    /// SEO defaults for `category`, if configured.
    #[must_use]
    pub fn category_seo(&self, category: PageCategory) -> Option<&CategorySeo> {
        self.page_seo.get(&category)
    }

    /// Whether `slug` is registered as a site page.
    #[must_use]
    pub fn is_site_page(&self, slug: &str) -> bool {
        let slug = slug.trim_matches('/');
        self.site_pages
            .iter()
            .any(|registered| registered.trim_matches('/').eq_ignore_ascii_case(slug))
    }

    /// Apply a settings update: every non-null top-level field in `update`
    /// replaces the current value, nested objects are merged key by key.
    ///
    /// # Errors
    ///
    /// Returns the deserialization error if the merged document no longer
    /// describes valid settings; `self` is left untouched in that case.
    pub fn apply_update(&mut self, update: &serde_json::Value) -> Result<(), serde_json::Error> {
        let mut current = serde_json::to_value(&*self)?;
        merge_json(&mut current, update);
        *self = serde_json::from_value(current)?;
        Ok(())
    }
}

impl OrganizationSettings {
    /// Both coordinates, when set.
    #[must_use]
    pub fn geo(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }

    /// Whether any contact-point field is set.
    #[must_use]
    pub fn has_contact(&self) -> bool {
        [&self.email, &self.telephone]
            .iter()
            .any(|field| field.as_deref().is_some_and(|v| !v.trim().is_empty()))
    }
}

fn merge_json(target: &mut serde_json::Value, update: &serde_json::Value) {
    match (target, update) {
        (serde_json::Value::Object(target), serde_json::Value::Object(update)) => {
            for (key, value) in update {
                if value.is_null() {
                    continue;
                }
                let nested = value.is_object()
                    && target.get(key).is_some_and(serde_json::Value::is_object);
                if nested {
                    if let Some(existing) = target.get_mut(key) {
                        merge_json(existing, value);
                    }
                } else {
                    target.insert(key.clone(), value.clone());
                }
            }
        }
        (target, update) => *target = update.clone(),
    }
}
