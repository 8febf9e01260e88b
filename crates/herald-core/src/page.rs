//! Page-like input records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A content unit as edited by the external CMS. The core only reads it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageEntity {
    pub slug: String,
    pub title: String,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub description: Option<String>,
    pub canonical_url: Option<String>,

    pub hero_image: Option<String>,
    pub hero_image_alt: Option<String>,

    pub og_title: Option<String>,
    pub og_description: Option<String>,
    pub og_type: Option<String>,
    pub og_image: Option<String>,
    pub og_image_alt: Option<String>,

    pub twitter_title: Option<String>,
    pub twitter_description: Option<String>,
    pub twitter_card: Option<String>,
    pub twitter_image: Option<String>,
    pub twitter_image_alt: Option<String>,

    pub locale: Option<String>,
    /// Comma-separated alternate locales; used when `alternates` is empty.
    pub alternate_locales: Option<String>,
    /// Explicit alternate-language URLs. Takes precedence over `alternate_locales`.
    pub alternates: Vec<AlternateLink>,

    pub robots: Option<String>,
    pub googlebot: Option<String>,
    pub sitemap_priority: Option<f64>,
    pub sitemap_frequency: Option<String>,

    pub author: Option<String>,
    pub keywords: Vec<String>,
    pub updated_at: DateTime<Utc>,
}

/// An explicit `{locale, url}` hreflang alternate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlternateLink {
    pub locale: String,
    pub url: String,
}

impl PageEntity {
    /// A bare record for a listing page (home, clients, ...). Titles and
    /// descriptions are left unset so they resolve from category settings.
    #[must_use]
    pub fn listing(slug: &str, updated_at: DateTime<Utc>) -> Self {
        Self {
            slug: slug.to_string(),
            updated_at,
            ..Self::default()
        }
    }
}
