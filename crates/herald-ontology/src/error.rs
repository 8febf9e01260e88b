//! Ontology error types.

use thiserror::Error;

/// Errors that can occur while loading a vocabulary snapshot.
#[derive(Debug, Error)]
pub enum OntologyError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The vocabulary endpoint returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the endpoint.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The response was not a usable vocabulary document.
    #[error("parse error: {0}")]
    Parse(String),
}
