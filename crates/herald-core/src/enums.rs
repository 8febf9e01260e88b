//! Page categories and sitemap change frequencies.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::BuildError;

// ---------------------------------------------------------------------------
// PageCategory
// ---------------------------------------------------------------------------

/// Which builder and which business rules apply to a page.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum PageCategory {
    /// About/legal style pages backed by a [`crate::PageEntity`].
    Static,
    /// The home feed of recent articles.
    Home,
    /// List page of client organizations.
    Clients,
    /// List page of content categories.
    Categories,
    /// List page of trending articles.
    Trending,
}

impl PageCategory {
    pub const ALL: [Self; 5] = [
        Self::Static,
        Self::Home,
        Self::Clients,
        Self::Categories,
        Self::Trending,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Home => "home",
            Self::Clients => "clients",
            Self::Categories => "categories",
            Self::Trending => "trending",
        }
    }

    /// Whether pages of this category render a `CollectionPage` graph.
    #[must_use]
    pub const fn is_collection(self) -> bool {
        !matches!(self, Self::Static)
    }

    /// Slug of the listing page itself. Static pages carry their own slug.
    #[must_use]
    pub const fn listing_slug(self) -> Option<&'static str> {
        match self {
            Self::Static => None,
            Self::Home => Some(""),
            Self::Clients => Some("clients"),
            Self::Categories => Some("categories"),
            Self::Trending => Some("trending"),
        }
    }

    /// Public path to revalidate after a save.
    #[must_use]
    pub fn public_path(self, slug: &str) -> String {
        match self.listing_slug() {
            Some("") => "/".to_string(),
            Some(listing) => format!("/{listing}"),
            None => format!("/{}", slug.trim_matches('/')),
        }
    }
}

impl fmt::Display for PageCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageCategory {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s.trim().to_ascii_lowercase())
            .ok_or_else(|| BuildError::invalid("category", format!("unknown page category '{s}'")))
    }
}

// ---------------------------------------------------------------------------
// ChangeFrequency
// ---------------------------------------------------------------------------

/// Sitemap `<changefreq>` hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }

    /// Parse a free-form frequency string. Unknown values yield `None`
    /// so the cascade falls through to the next layer.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "always" => Some(Self::Always),
            "hourly" => Some(Self::Hourly),
            "daily" => Some(Self::Daily),
            "weekly" => Some(Self::Weekly),
            "monthly" => Some(Self::Monthly),
            "yearly" => Some(Self::Yearly),
            "never" => Some(Self::Never),
            _ => None,
        }
    }
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
