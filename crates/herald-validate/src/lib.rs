//! # herald-validate
//!
//! The four-stage validation pipeline for published JSON-LD graphs:
//!
//! 1. structural: node types and properties against the schema.org snapshot
//! 2. schema: the fixed envelope/shape schema
//! 3. linked data: the graph must expand
//! 4. business rules: category-specific required nodes
//!
//! Each stage reports a [`herald_core::SubReport`]; [`ValidationPipeline`]
//! aggregates them into a [`herald_core::ValidationReport`].

pub mod business;
pub mod linked_data;
mod pipeline;

pub use business::validate_business_rules;
pub use linked_data::validate_linked_data;
pub use pipeline::ValidationPipeline;
