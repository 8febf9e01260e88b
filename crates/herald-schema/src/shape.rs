//! The fixed shape every emitted JSON-LD document must have.
//!
//! Only the envelope and a few high-value node fields are checked here;
//! vocabulary conformance is the structural validator's job.

use herald_core::Issue;
use jsonschema::Validator;
use serde_json::{Value, json};

use crate::error::SchemaError;

/// Registry name of the shape schema.
pub const GRAPH_SHAPE: &str = "jsonld_graph";

/// `@context` present, non-empty `@graph`, every member typed, and
/// well-formed `url` / `inLanguage` / `dateModified` when present.
#[must_use]
pub fn graph_shape_schema() -> Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": "JSON-LD graph",
        "type": "object",
        "required": ["@context", "@graph"],
        "properties": {
            "@context": {
                "anyOf": [
                    { "type": "string", "minLength": 1 },
                    { "type": "object" },
                    { "type": "array", "minItems": 1 }
                ]
            },
            "@graph": {
                "type": "array",
                "minItems": 1,
                "items": { "$ref": "#/$defs/node" }
            }
        },
        "$defs": {
            "node": {
                "type": "object",
                "required": ["@type"],
                "properties": {
                    "@id": { "type": "string", "minLength": 1 },
                    "@type": {
                        "anyOf": [
                            { "type": "string", "minLength": 1 },
                            {
                                "type": "array",
                                "minItems": 1,
                                "items": { "type": "string", "minLength": 1 }
                            }
                        ]
                    },
                    "url": { "$ref": "#/$defs/url" },
                    "inLanguage": {
                        "anyOf": [
                            { "$ref": "#/$defs/language" },
                            {
                                "type": "array",
                                "minItems": 1,
                                "items": { "$ref": "#/$defs/language" }
                            }
                        ]
                    },
                    "dateModified": { "$ref": "#/$defs/dateTime" }
                }
            },
            "url": {
                "type": "string",
                "pattern": "^https?://[^\\s/?#]+[^\\s]*$"
            },
            "language": {
                "type": "string",
                "pattern": "^[A-Za-z]{2,3}(-[A-Za-z0-9]{2,8})*$"
            },
            "dateTime": {
                "type": "string",
                "pattern": "^\\d{4}-\\d{2}-\\d{2}(T\\d{2}:\\d{2}(:\\d{2}(\\.\\d+)?)?(Z|[+-]\\d{2}:\\d{2})?)?$"
            }
        }
    })
}

/// Compiled shape validator. Build once and share.
pub struct ShapeValidator {
    validator: Validator,
}

impl std::fmt::Debug for ShapeValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShapeValidator").finish_non_exhaustive()
    }
}

impl ShapeValidator {
    /// Compile the shape schema.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Compilation`] if the schema does not compile.
    pub fn new() -> Result<Self, SchemaError> {
        let validator = jsonschema::validator_for(&graph_shape_schema())
            .map_err(|e| SchemaError::Compilation(format!("{e}")))?;
        Ok(Self { validator })
    }

    /// Every shape violation in `document`, with its location.
    #[must_use]
    pub fn check(&self, document: &Value) -> Vec<Issue> {
        collect_issues(&self.validator, document)
    }
}

pub(crate) fn collect_issues(validator: &Validator, instance: &Value) -> Vec<Issue> {
    validator
        .iter_errors(instance)
        .map(|e| {
            let message = format!("{e}");
            match pointer_to_path(&e.instance_path.to_string()) {
                Some(path) => Issue::at(message, path),
                None => Issue::new(message),
            }
        })
        .collect()
}

/// `/@graph/0/url` → `@graph[0].url`; `None` for the document root.
#[must_use]
pub fn pointer_to_path(pointer: &str) -> Option<String> {
    let mut path = String::new();
    for segment in pointer.split('/').skip(1) {
        let segment = segment.replace("~1", "/").replace("~0", "~");
        if !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit()) {
            path.push('[');
            path.push_str(&segment);
            path.push(']');
        } else {
            if !path.is_empty() {
                path.push('.');
            }
            path.push_str(&segment);
        }
    }
    (!path.is_empty()).then_some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn check(document: &Value) -> Vec<Issue> {
        ShapeValidator::new().unwrap().check(document)
    }

    fn paths(issues: &[Issue]) -> Vec<Option<&str>> {
        issues.iter().map(|i| i.path.as_deref()).collect()
    }

    #[test]
    fn accepts_a_well_formed_graph() {
        let doc = json!({
            "@context": "https://schema.org",
            "@graph": [{
                "@type": "WebPage",
                "@id": "https://modonty.com/about#webpage",
                "url": "https://modonty.com/about",
                "inLanguage": "ar-SA",
                "dateModified": "2026-03-01T09:30:00Z"
            }, {
                "@type": ["Organization"],
                "inLanguage": ["ar", "en"],
                "dateModified": "2026-03-01"
            }]
        });
        assert_eq!(check(&doc), vec![]);
    }

    #[test]
    fn missing_context_and_empty_graph_are_reported() {
        let issues = check(&json!({ "@graph": [] }));
        assert_eq!(issues.len(), 2);
    }

    #[test]
    fn untyped_node_is_reported_at_its_index() {
        let doc = json!({
            "@context": "https://schema.org",
            "@graph": [{ "@type": "Thing" }, { "name": "untyped" }]
        });
        assert_eq!(paths(&check(&doc)), vec![Some("@graph[1]")]);
    }

    #[rstest]
    #[case("url", json!("ftp://modonty.com"))]
    #[case("url", json!("/relative"))]
    #[case("inLanguage", json!("arabic language"))]
    #[case("inLanguage", json!([]))]
    #[case("dateModified", json!("March 1st"))]
    #[case("dateModified", json!(20_260_301))]
    fn malformed_fields_are_reported(#[case] field: &str, #[case] value: Value) {
        let mut node = json!({ "@type": "WebPage" });
        node[field] = value;
        let doc = json!({ "@context": "https://schema.org", "@graph": [node] });
        let issues = check(&doc);
        assert!(!issues.is_empty());
        let expected = format!("@graph[0].{field}");
        assert!(issues.iter().all(|i| i.path.as_deref() == Some(expected.as_str())));
    }

    #[rstest]
    #[case("", None)]
    #[case("/@graph", Some("@graph"))]
    #[case("/@graph/3/address/streetAddress", Some("@graph[3].address.streetAddress"))]
    #[case("/a~1b/0", Some("a/b[0]"))]
    fn converts_pointers(#[case] pointer: &str, #[case] expected: Option<&str>) {
        assert_eq!(pointer_to_path(pointer).as_deref(), expected);
    }
}
