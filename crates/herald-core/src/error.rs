//! Builder-level error types.
//!
//! Validation verdicts are data ([`crate::ValidationReport`]), not errors.
//! `BuildError` covers only inputs that make generation impossible.

use thiserror::Error;

/// Errors raised while turning entity + settings data into metadata.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// A setting without which no output can be produced is unset.
    #[error("Missing required setting: {0}")]
    MissingSetting(&'static str),

    /// An input record carries a value that cannot be used.
    #[error("Invalid value for '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
}

impl BuildError {
    pub(crate) fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
