//! Generated and persisted SEO output.

use chrono::{DateTime, Utc};
use herald_core::{MetaTagBag, ValidationReport};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::target::PublishTarget;

/// Everything one generation call produces, before persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Generated {
    pub target: PublishTarget,
    pub meta_tags: MetaTagBag,
    pub json_ld: Value,
    pub report: ValidationReport,
    pub generated_at: DateTime<Utc>,
}

/// The record stored per page or listing category.
///
/// `meta_tags` is kept as plain JSON so that records written by older
/// builds can still be loaded and checked against the current schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoRecord {
    pub meta_tags: Value,
    /// The raw graph, serialized.
    pub json_ld_structured_data: String,
    pub json_ld_last_generated: DateTime<Utc>,
    pub json_ld_validation_report: ValidationReport,
}

impl SeoRecord {
    /// # Errors
    ///
    /// Returns a serialization error if the meta tags or graph cannot be
    /// written as JSON.
    pub fn from_generated(generated: &Generated) -> Result<Self, serde_json::Error> {
        Ok(Self {
            meta_tags: serde_json::to_value(&generated.meta_tags)?,
            json_ld_structured_data: serde_json::to_string(&generated.json_ld)?,
            json_ld_last_generated: generated.generated_at,
            json_ld_validation_report: generated.report.clone(),
        })
    }

    /// # Errors
    ///
    /// Returns an error if the stored meta tags no longer deserialize.
    pub fn meta_tag_bag(&self) -> Result<MetaTagBag, serde_json::Error> {
        MetaTagBag::deserialize(&self.meta_tags)
    }

    /// # Errors
    ///
    /// Returns an error if the stored JSON-LD is not valid JSON.
    pub fn json_ld(&self) -> Result<Value, serde_json::Error> {
        serde_json::from_str(&self.json_ld_structured_data)
    }
}
