//! Bounded collections supplied by the query layer for listing pages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An ordered, bounded window of items plus the true total.
///
/// `items.len()` and `total_count` are independent: the query layer may hand
/// over more or fewer items than the builder displays, and `total_count`
/// reflects the full collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPageSource<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

impl<T> ListPageSource<T> {
    #[must_use]
    pub const fn new(items: Vec<T>, total_count: u64) -> Self {
        Self {
            items,
            total_count,
            last_updated: None,
        }
    }

    /// The first `window` items, in source order.
    #[must_use]
    pub fn window(&self, window: usize) -> &[T] {
        &self.items[..self.items.len().min(window)]
    }
}

impl<T> Default for ListPageSource<T> {
    fn default() -> Self {
        Self::new(Vec::new(), 0)
    }
}

/// An organization-like entity or generic thing shown on an entity list page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CollectionEntity {
    pub name: String,
    pub slug: String,
    pub url: Option<String>,
    pub description: Option<String>,
    pub logo: Option<String>,
    /// schema.org type from the entity's configured category
    /// (e.g. `LocalBusiness`). Organization-like lists default to `Organization`.
    pub schema_type: Option<String>,

    pub email: Option<String>,
    pub telephone: Option<String>,
    pub street_address: Option<String>,
    pub address_locality: Option<String>,
    pub address_region: Option<String>,
    pub postal_code: Option<String>,
    pub address_country: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,

    /// Commercial registration / tax number, emitted as `identifier`.
    pub identifier: Option<String>,
    pub same_as: Vec<String>,
}

/// An article shown on the home feed or an article list page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArticleSummary {
    pub title: String,
    pub slug: String,
    pub url: Option<String>,
    pub excerpt: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub author: ArticleAuthor,
    pub publisher: ArticlePublisher,
    pub image: Option<ArticleImage>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArticleAuthor {
    pub name: String,
    pub url: Option<String>,
}

/// The entity that owns an article. Not the site-wide organization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArticlePublisher {
    pub name: String,
    pub url: Option<String>,
    pub logo: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArticleImage {
    pub url: String,
    pub alt: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl CollectionEntity {
    #[must_use]
    pub fn geo(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }
}
