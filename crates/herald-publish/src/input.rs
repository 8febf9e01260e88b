//! What a generation call is asked to render.

use herald_core::{ArticleSummary, CollectionEntity, ListPageSource, PageCategory, PageEntity};

/// A page plus, for listings, the window of items it shows.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationInput {
    /// A static page such as about or privacy.
    Page(PageEntity),
    /// The home feed of recent articles.
    Home {
        page: PageEntity,
        source: ListPageSource<ArticleSummary>,
    },
    /// The clients or categories listing.
    Entities {
        category: PageCategory,
        page: PageEntity,
        source: ListPageSource<CollectionEntity>,
    },
    /// The trending articles listing.
    Trending {
        page: PageEntity,
        source: ListPageSource<ArticleSummary>,
    },
}

impl GenerationInput {
    #[must_use]
    pub const fn category(&self) -> PageCategory {
        match self {
            Self::Page(_) => PageCategory::Static,
            Self::Home { .. } => PageCategory::Home,
            Self::Entities { category, .. } => *category,
            Self::Trending { .. } => PageCategory::Trending,
        }
    }

    #[must_use]
    pub const fn page(&self) -> &PageEntity {
        match self {
            Self::Page(page)
            | Self::Home { page, .. }
            | Self::Entities { page, .. }
            | Self::Trending { page, .. } => page,
        }
    }
}
