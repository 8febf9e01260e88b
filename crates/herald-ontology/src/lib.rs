//! # herald-ontology
//!
//! The schema.org vocabulary as a validation input.
//!
//! - [`Ontology`]: classes with their parents and properties with their
//!   domains, parsed from the official JSON-LD release
//! - [`OntologySource`] / [`HttpOntologySource`]: where snapshots come from
//! - [`SnapshotCache`] and [`OntologyService`]: a single process-wide
//!   snapshot with a TTL, checked against an injected [`Clock`]
//! - [`validate_structure`]: per-node type and property conformance

pub mod cache;
pub mod clock;
mod error;
pub mod service;
pub mod snapshot;
pub mod source;
pub mod structural;

pub use cache::SnapshotCache;
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::OntologyError;
pub use service::OntologyService;
pub use snapshot::Ontology;
pub use source::{HttpOntologySource, OntologySource};
pub use structural::validate_structure;
