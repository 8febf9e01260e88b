//! Graph builder and linked-data error types.

use herald_core::BuildError;
use thiserror::Error;

/// Errors from the JSON-LD graph builders.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// Settings or page data could not be resolved.
    #[error(transparent)]
    Build(#[from] BuildError),

    /// Two top-level nodes were given the same `@id`.
    #[error("Duplicate node @id in graph: {0}")]
    DuplicateId(String),

    /// A builder was handed a list for a category it does not render.
    #[error("Page category '{category}' cannot be rendered as {expected}")]
    WrongCategory {
        category: String,
        expected: &'static str,
    },
}

/// Errors raised by linked-data expansion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JsonLdError {
    /// The document is not a JSON object or array.
    #[error("Invalid JSON-LD document: {0}")]
    InvalidDocument(String),

    /// A `@context` entry is malformed.
    #[error("Invalid @context at {path}: {reason}")]
    InvalidContext { path: String, reason: String },

    /// A remote context other than schema.org was referenced.
    #[error("Remote context '{iri}' at {path} cannot be loaded")]
    RemoteContext { path: String, iri: String },

    /// `@id` is not a string.
    #[error("Invalid @id at {path}: expected a string")]
    InvalidId { path: String },

    /// `@type` is not a string or an array of strings.
    #[error("Invalid @type at {path}: expected a string or an array of strings")]
    InvalidType { path: String },

    /// A `@value` object is malformed.
    #[error("Invalid value object at {path}: {reason}")]
    InvalidValueObject { path: String, reason: String },
}
