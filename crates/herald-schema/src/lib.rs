//! # herald-schema
//!
//! JSON Schema definitions and validation for Herald.
//!
//! - [`ShapeValidator`]: the fixed envelope/shape check applied to every
//!   JSON-LD graph before publication
//! - [`SchemaRegistry`]: named schemas for the graph shape and the persisted
//!   output records (`MetaTagBag`, `ValidationReport`), generated from the
//!   `herald-core` types with schemars

pub mod error;
pub mod registry;
pub mod shape;

pub use error::SchemaError;
pub use registry::{META_TAG_BAG, SchemaRegistry, VALIDATION_REPORT};
pub use shape::{GRAPH_SHAPE, ShapeValidator, graph_shape_schema};
