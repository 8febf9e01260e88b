//! # herald-graph
//!
//! schema.org JSON-LD graphs for Herald pages.
//!
//! - [`JsonLdGraphBuilder`] renders the four page graph variants (static
//!   page, home feed, entity collection, article collection) on top of the
//!   shared Organization/WebSite nodes from [`build_org_and_website`].
//! - [`jsonld`] implements expansion and compaction against the schema.org
//!   vocabulary, and [`normalize`] combines them into the canonical form the
//!   validators consume.

mod builder;
pub mod error;
pub mod graph;
pub mod jsonld;
mod node;
mod normalize;
pub mod site;

pub use builder::JsonLdGraphBuilder;
pub use error::{GraphError, JsonLdError};
pub use graph::{JsonLdGraph, SCHEMA_CONTEXT};
pub use normalize::normalize;
pub use site::{SiteNodes, build_org_and_website};
