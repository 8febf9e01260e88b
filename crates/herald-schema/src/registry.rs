//! Central schema registry for Herald's JSON documents.
//!
//! Output records are described by schemars-generated schemas built from the
//! `herald-core` types; the JSON-LD envelope uses the hand-written shape
//! schema from [`crate::shape`].

use std::collections::HashMap;

use herald_core::Issue;
use schemars::schema_for;
use serde_json::Value;

use crate::error::SchemaError;
use crate::shape::{self, GRAPH_SHAPE};

/// Registry name of the meta-tag bag schema.
pub const META_TAG_BAG: &str = "meta_tag_bag";
/// Registry name of the validation report schema.
pub const VALIDATION_REPORT: &str = "validation_report";

/// Insert a schemars-generated schema into the map under `$name`.
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, schema_for!($ty).to_value());
    };
}

/// Store of every JSON Schema Herald validates against.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, Value>,
}

impl SchemaRegistry {
    /// Build the registry: the graph shape plus the persisted output records.
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        schemas.insert(GRAPH_SHAPE, shape::graph_shape_schema());
        register!(schemas, META_TAG_BAG, herald_core::MetaTagBag);
        register!(schemas, VALIDATION_REPORT, herald_core::ValidationReport);

        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.schemas.get(name)
    }

    /// Every violation of the named schema, with its location.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::Compilation` if the schema does not compile.
    pub fn issues(&self, name: &str, instance: &Value) -> Result<Vec<Issue>, SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator =
            jsonschema::validator_for(schema).map_err(|e| SchemaError::Compilation(format!("{e}")))?;

        Ok(shape::collect_issues(&validator, instance))
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` if validation produces errors.
    pub fn validate(&self, name: &str, instance: &Value) -> Result<(), SchemaError> {
        let errors: Vec<String> = self
            .issues(name, instance)?
            .iter()
            .map(ToString::to_string)
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// List all registered schema names.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use herald_core::{SubReport, ValidationReport};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn registry_lists_names_sorted() {
        let reg = SchemaRegistry::new();
        assert_eq!(reg.list(), vec!["jsonld_graph", "meta_tag_bag", "validation_report"]);
        assert_eq!(reg.schema_count(), 3);
    }

    #[test]
    fn validates_a_serialized_report() {
        let report = ValidationReport::aggregate(
            SubReport::passed(),
            SubReport::failed("bad shape"),
            SubReport::passed(),
            SubReport::passed(),
            Utc::now(),
        );
        let json = serde_json::to_value(&report).unwrap();
        assert!(SchemaRegistry::new().validate(VALIDATION_REPORT, &json).is_ok());
    }

    #[test]
    fn rejects_report_missing_a_section() {
        let invalid = json!({
            "structural": { "valid": true, "errors": [], "warnings": [] },
            "overallValid": true,
            "validatedAt": "2026-03-01T09:30:00Z"
        });
        let result = SchemaRegistry::new().validate(VALIDATION_REPORT, &invalid);
        assert!(matches!(result, Err(SchemaError::ValidationFailed { errors }) if !errors.is_empty()));
    }

    #[test]
    fn unknown_schema_is_not_found() {
        let result = SchemaRegistry::new().validate("bogus", &json!({}));
        assert!(matches!(result, Err(SchemaError::NotFound(_))));
    }
}
