//! # herald-meta
//!
//! Builds the meta-tag bag for one page: document head, Open Graph, Twitter
//! Card, hreflang alternates, and sitemap hints.
//!
//! Every value comes out of the settings cascade in `herald_core::resolve`.
//! Titles and descriptions are truncated to the configured limits; the
//! JSON-LD builder receives the same resolved (untruncated) values.

mod builder;
pub mod hreflang;

pub use builder::{
    CHARSET, FALLBACK_IMAGE_HEIGHT, FALLBACK_IMAGE_TYPE, FALLBACK_IMAGE_WIDTH, MetaTagBuilder,
    VIEWPORT,
};
