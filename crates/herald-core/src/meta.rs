//! The resolved meta-tag bag for one page.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ChangeFrequency;

/// Document head, Open Graph, Twitter Card, hreflang, and sitemap hints.
///
/// Built fresh on every generation call and never patched afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MetaTagBag {
    pub charset: String,
    pub viewport: String,
    pub title: String,
    pub description: String,
    pub robots: String,
    pub googlebot: String,
    pub canonical: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
    pub hreflang: Vec<HreflangLink>,
    pub sitemap: SitemapHints,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub og_type: String,
    pub url: String,
    pub site_name: String,
    /// `language_TERRITORY` form, as Open Graph expects.
    pub locale: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locale_alternate: Vec<String>,
    pub images: Vec<OgImage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OgImage {
    pub url: String,
    pub secure_url: String,
    pub width: u32,
    pub height: u32,
    #[serde(rename = "type")]
    pub mime_type: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TwitterCard {
    pub card: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_alt: Option<String>,
}

/// `<link rel="alternate" hreflang="..." href="...">`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct HreflangLink {
    pub hreflang: String,
    pub href: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SitemapHints {
    pub priority: f64,
    pub change_frequency: ChangeFrequency,
}

/// Length limits applied to resolved titles and descriptions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaLimits {
    pub title_max_length: usize,
    pub description_max_length: usize,
    pub truncation_suffix: String,
}

impl Default for MetaLimits {
    fn default() -> Self {
        Self {
            title_max_length: 60,
            description_max_length: 160,
            truncation_suffix: crate::text::DEFAULT_TRUNCATION_SUFFIX.to_string(),
        }
    }
}

impl MetaTagBag {
    /// Number of `x-default` entries in the hreflang list.
    #[must_use]
    pub fn x_default_count(&self) -> usize {
        self.hreflang
            .iter()
            .filter(|link| link.hreflang == crate::locale::X_DEFAULT)
            .count()
    }
}
