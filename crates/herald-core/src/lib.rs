//! # herald-core
//!
//! Core types, the settings cascade, and error types for Herald.
//!
//! This crate provides the foundational types shared across all Herald crates:
//! - Input records: [`SiteSettings`], [`PageEntity`], [`ListPageSource`]
//! - Output records: [`MetaTagBag`] and [`ValidationReport`]
//! - Page category and sitemap enums
//! - The settings resolver (page override → settings → hardcoded fallback)
//!   and the [`ResolvedPage`] view both builders consume
//! - URL, locale, and text helpers used by every builder

pub mod enums;
pub mod error;
pub mod list;
pub mod locale;
pub mod meta;
pub mod page;
pub mod report;
pub mod resolve;
pub mod settings;
pub mod text;
pub mod url;

pub use enums::{ChangeFrequency, PageCategory};
pub use error::BuildError;
pub use list::{
    ArticleAuthor, ArticleImage, ArticlePublisher, ArticleSummary, CollectionEntity, ListPageSource,
};
pub use meta::{HreflangLink, MetaLimits, MetaTagBag, OgImage, OpenGraph, SitemapHints, TwitterCard};
pub use page::{AlternateLink, PageEntity};
pub use report::{Issue, IssueSeverity, LabeledIssue, ReportSource, SubReport, ValidationReport};
pub use resolve::{ResolvedImage, ResolvedPage};
pub use settings::{CategorySeo, OrganizationSettings, SiteSettings};
