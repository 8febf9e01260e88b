//! Publish and store error types.

use std::path::PathBuf;

use herald_core::BuildError;
use herald_graph::GraphError;
use thiserror::Error;

/// Errors that can occur while generating or persisting SEO output.
#[derive(Debug, Error)]
pub enum PublishError {
    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Re-validation was requested for a target that was never persisted.
    #[error("no stored SEO record for {0}")]
    NotFound(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// HTTP transport error talking to the revalidation endpoint.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The revalidation endpoint answered with a non-success status.
    #[error("revalidation endpoint returned {status}: {message}")]
    Revalidation { status: u16, message: String },
}

/// Errors raised by [`crate::SeoStore`] implementations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("corrupt record at {}: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid target: {0}")]
    InvalidTarget(String),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
