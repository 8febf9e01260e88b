//! What a stored record belongs to.

use std::fmt;

use herald_core::PageCategory;
use serde::{Deserialize, Serialize};

/// One persisted unit: a static page by slug, or a whole listing category.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PublishTarget {
    pub category: PageCategory,
    /// Page slug for static pages, the category name for listings.
    pub slug: String,
}

impl PublishTarget {
    /// Target for a page of `category`. Listings ignore `slug`.
    #[must_use]
    pub fn new(category: PageCategory, slug: &str) -> Self {
        if category.is_collection() {
            Self::listing(category)
        } else {
            Self::page(slug)
        }
    }

    #[must_use]
    pub fn page(slug: &str) -> Self {
        Self {
            category: PageCategory::Static,
            slug: slug.trim().trim_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn listing(category: PageCategory) -> Self {
        Self {
            category,
            slug: category.as_str().to_string(),
        }
    }

    /// Public path the site serves this target at.
    #[must_use]
    pub fn public_path(&self) -> String {
        self.category.public_path(&self.slug)
    }
}

impl fmt::Display for PublishTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.category.is_collection() {
            write!(f, "{}", self.category)
        } else {
            write!(f, "{}:{}", self.category, self.slug)
        }
    }
}
