//! The settings cascade: page override → site settings → hardcoded fallback.
//!
//! Every field that appears in both the meta-tag bag and the JSON-LD graph is
//! resolved exactly once, here, into a [`ResolvedPage`]. Both builders read
//! the resolved view instead of re-deriving values from the raw records.

use std::fmt::Debug;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::PageCategory;
use crate::error::BuildError;
use crate::locale;
use crate::page::PageEntity;
use crate::settings::SiteSettings;
use crate::url;

pub const FALLBACK_LOCALE: &str = "en_US";
pub const FALLBACK_ROBOTS: &str = "index, follow";
pub const FALLBACK_SITEMAP_PRIORITY: f64 = 0.5;

/// Which layer of the cascade supplied a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Page,
    Settings,
    Fallback,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// First of `values` that is set and not blank.
#[must_use]
pub fn first_set<'a>(values: &[Option<&'a str>]) -> Option<&'a str> {
    values.iter().copied().find_map(non_blank)
}

/// Resolve a string field and report which layer won.
///
/// A non-blank page value wins verbatim. A settings value is trimmed and
/// counts as unset when empty. Otherwise `fallback` is returned.
#[must_use]
pub fn resolve_layer<'a>(
    page: Option<&'a str>,
    settings: Option<&'a str>,
    fallback: &'a str,
) -> (&'a str, Layer) {
    if let Some(value) = non_blank(page) {
        return (value, Layer::Page);
    }
    if let Some(value) = settings.map(str::trim).filter(|v| !v.is_empty()) {
        return (value, Layer::Settings);
    }
    (fallback, Layer::Fallback)
}

/// Resolve a string field through the cascade.
#[must_use]
pub fn resolve<'a>(
    field: &str,
    page: Option<&'a str>,
    settings: Option<&'a str>,
    fallback: &'a str,
) -> &'a str {
    let (value, layer) = resolve_layer(page, settings, fallback);
    tracing::trace!(field, ?layer, "resolved field");
    value
}

/// Resolve a string field that has no hardcoded fallback.
#[must_use]
pub fn resolve_opt<'a>(
    field: &str,
    page: Option<&'a str>,
    settings: Option<&'a str>,
) -> Option<&'a str> {
    Some(resolve(field, page, settings, "")).filter(|v| !v.is_empty())
}

/// Resolve a non-string field. `accept` decides whether a layer's value
/// counts as set (e.g. a priority outside `0.0..=1.0` does not).
#[must_use]
pub fn resolve_value<T: Copy + Debug>(
    field: &str,
    page: Option<T>,
    settings: Option<T>,
    fallback: T,
    accept: impl Fn(&T) -> bool,
) -> T {
    let (value, layer) = match (page.filter(&accept), settings.filter(&accept)) {
        (Some(value), _) => (value, Layer::Page),
        (None, Some(value)) => (value, Layer::Settings),
        (None, None) => (fallback, Layer::Fallback),
    };
    tracing::trace!(field, ?layer, ?value, "resolved field");
    value
}

/// Image chosen for a page, already absolute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedImage {
    pub url: String,
    pub alt: String,
}

/// The cascade applied once to one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedPage {
    pub category: PageCategory,
    /// `https://host` without trailing slash.
    pub site_url: String,
    pub site_name: String,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub canonical_url: String,
    /// Primary locale as configured (e.g. `ar_SA`).
    pub locale: String,
    pub image: Option<ResolvedImage>,
    pub updated_at: DateTime<Utc>,
}

impl ResolvedPage {
    /// Resolve `page` against `settings` for a page of `category`.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::MissingSetting`] when the site URL or site name
    /// is unset, and [`BuildError::InvalidInput`] for a static page without
    /// a slug or a malformed site URL.
    pub fn resolve(
        page: &PageEntity,
        settings: &SiteSettings,
        category: PageCategory,
    ) -> Result<Self, BuildError> {
        let site_url = url::normalize_site_url(&settings.site_url)?;
        let site_name = settings.site_name.trim();
        if site_name.is_empty() {
            return Err(BuildError::MissingSetting("siteName"));
        }

        let slug = match category.listing_slug() {
            Some(listing) if page.slug.trim().is_empty() => listing.to_string(),
            _ => page.slug.trim().trim_matches('/').to_string(),
        };
        if category == PageCategory::Static && slug.is_empty() {
            return Err(BuildError::invalid("slug", "static pages need a slug"));
        }

        let seo = settings.category_seo(category);
        let title = resolve(
            "title",
            first_set(&[page.seo_title.as_deref(), Some(page.title.as_str())]),
            seo.and_then(|s| s.title.as_deref()),
            site_name,
        );
        let description = resolve(
            "description",
            first_set(&[page.seo_description.as_deref(), page.description.as_deref()]),
            first_set(&[
                seo.and_then(|s| s.description.as_deref()),
                settings.site_description.as_deref(),
            ]),
            "",
        );
        let canonical_url = url::canonical_url(page.canonical_url.as_deref(), &site_url, &slug);
        let locale = resolve(
            "locale",
            page.locale.as_deref(),
            settings.default_locale.as_deref(),
            FALLBACK_LOCALE,
        );

        let image = resolve_opt(
            "image",
            first_set(&[page.og_image.as_deref(), page.hero_image.as_deref()]),
            settings.default_og_image.as_deref(),
        )
        .map(|image| ResolvedImage {
            url: url::absolute_url(image, &site_url),
            alt: resolve(
                "imageAlt",
                first_set(&[page.og_image_alt.as_deref(), page.hero_image_alt.as_deref()]),
                settings.default_og_image_alt.as_deref(),
                "",
            )
            .to_string(),
        });

        Ok(Self {
            category,
            site_name: site_name.to_string(),
            slug,
            title: title.to_string(),
            description: description.to_string(),
            canonical_url,
            locale: locale.to_string(),
            image,
            updated_at: page.updated_at,
            site_url,
        })
    }

    /// BCP-47 form of the primary locale.
    #[must_use]
    pub fn language_tag(&self) -> String {
        locale::to_bcp47(&self.locale)
            .or_else(|| locale::to_bcp47(FALLBACK_LOCALE))
            .unwrap_or_default()
    }
}

/// Languages the site publishes in, BCP-47, deduplicated in configured order.
/// Falls back to the language of `primary_locale` when none are configured.
#[must_use]
pub fn site_languages(settings: &SiteSettings, primary_locale: &str) -> Vec<String> {
    let mut languages: Vec<String> = Vec::new();
    for code in settings.languages.iter().filter_map(|l| locale::to_bcp47(l)) {
        if !languages.contains(&code) {
            languages.push(code);
        }
    }
    if languages.is_empty() {
        languages.extend(locale::to_bcp47(primary_locale));
    }
    languages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::CategorySeo;
    use pretty_assertions::assert_eq;

    fn settings() -> SiteSettings {
        let mut settings = SiteSettings {
            site_url: "https://modonty.com/".into(),
            site_name: "Modonty".into(),
            site_description: Some("Arabic content platform".into()),
            default_locale: Some("ar_SA".into()),
            default_og_image: Some("/og/default.png".into()),
            default_og_image_alt: Some("Modonty".into()),
            ..SiteSettings::default()
        };
        settings.page_seo.insert(
            PageCategory::Clients,
            CategorySeo {
                title: Some("  Our clients ".into()),
                description: Some(String::new()),
            },
        );
        settings
    }

    #[test]
    fn page_override_always_wins() {
        for settings_value in [None, Some(""), Some("settings")] {
            for fallback in ["", "fallback"] {
                assert_eq!(resolve("f", Some("page"), settings_value, fallback), "page");
            }
        }
    }

    #[test]
    fn settings_value_is_trimmed_and_blank_is_unset() {
        assert_eq!(resolve_layer(None, Some("  s  "), "f"), ("s", Layer::Settings));
        assert_eq!(resolve_layer(Some(" "), Some("   "), "f"), ("f", Layer::Fallback));
    }

    #[test]
    fn resolve_value_honours_acceptance() {
        let in_range = |p: &f64| (0.0..=1.0).contains(p);
        assert!((resolve_value("p", Some(3.0), Some(0.8), 0.5, in_range) - 0.8).abs() < f64::EPSILON);
        assert!((resolve_value("p", None, None, 0.5, in_range) - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn static_page_derives_canonical_from_slug() {
        let page = PageEntity {
            slug: "about".into(),
            title: "About Modonty".into(),
            ..PageEntity::default()
        };
        let resolved = ResolvedPage::resolve(&page, &settings(), PageCategory::Static).unwrap();

        assert_eq!(resolved.site_url, "https://modonty.com");
        assert_eq!(resolved.canonical_url, "https://modonty.com/about");
        assert_eq!(resolved.title, "About Modonty");
        assert_eq!(resolved.description, "Arabic content platform");
        assert_eq!(resolved.language_tag(), "ar-SA");
        assert_eq!(
            resolved.image,
            Some(ResolvedImage {
                url: "https://modonty.com/og/default.png".into(),
                alt: "Modonty".into(),
            })
        );
    }

    #[test]
    fn listing_page_resolves_from_category_settings() {
        let page = PageEntity::listing("", Utc::now());
        let resolved = ResolvedPage::resolve(&page, &settings(), PageCategory::Clients).unwrap();

        assert_eq!(resolved.slug, "clients");
        assert_eq!(resolved.title, "Our clients");
        assert_eq!(resolved.canonical_url, "https://modonty.com/clients");
        // blank category description falls through to the site description
        assert_eq!(resolved.description, "Arabic content platform");
    }

    #[test]
    fn seo_title_beats_title() {
        let page = PageEntity {
            slug: "about".into(),
            title: "About".into(),
            seo_title: Some("About | Modonty".into()),
            ..PageEntity::default()
        };
        let resolved = ResolvedPage::resolve(&page, &settings(), PageCategory::Static).unwrap();
        assert_eq!(resolved.title, "About | Modonty");
    }

    #[test]
    fn missing_site_settings_are_errors() {
        let page = PageEntity {
            slug: "about".into(),
            ..PageEntity::default()
        };
        let mut no_name = settings();
        no_name.site_name = " ".into();
        assert_eq!(
            ResolvedPage::resolve(&page, &no_name, PageCategory::Static),
            Err(BuildError::MissingSetting("siteName"))
        );

        let unnamed = PageEntity::default();
        assert!(ResolvedPage::resolve(&unnamed, &settings(), PageCategory::Static).is_err());
    }

    #[test]
    fn site_languages_dedupes_and_falls_back() {
        let mut settings = settings();
        assert_eq!(site_languages(&settings, "ar_SA"), vec!["ar-SA".to_string()]);

        settings.languages = vec!["ar".into(), "en_us".into(), "AR".into()];
        assert_eq!(
            site_languages(&settings, "ar_SA"),
            vec!["ar".to_string(), "en-US".to_string()]
        );
    }
}
