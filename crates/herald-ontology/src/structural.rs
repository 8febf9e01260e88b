//! Vocabulary conformance of a graph's nodes.
//!
//! Unknown types and properties are errors; a known property used on a type
//! outside its declared domains is a warning. Foreign (non-schema.org) IRIs
//! are left alone.

use herald_core::{Issue, SubReport};
use serde_json::{Map, Value};

use crate::snapshot::{Ontology, local_name};

/// Keys that are valid in practice but absent from the published vocabulary.
const UNCHECKED_PROPERTIES: [&str; 1] = ["query-input"];

/// Check every node of a `@graph` document (or a single root node).
#[must_use]
pub fn validate_structure(document: &Value, ontology: &Ontology) -> SubReport {
    let mut checker = Checker {
        ontology,
        errors: Vec::new(),
        warnings: Vec::new(),
    };
    match document.get("@graph") {
        Some(Value::Array(nodes)) => {
            for (index, node) in nodes.iter().enumerate() {
                checker.value(node, &format!("@graph[{index}]"));
            }
        }
        _ => checker.value(document, "$"),
    }
    tracing::debug!(
        errors = checker.errors.len(),
        warnings = checker.warnings.len(),
        "structural check finished"
    );
    SubReport::from_issues(checker.errors, checker.warnings)
}

/// schema.org local name, the bare term itself, or `None` for foreign IRIs.
fn schema_name(raw: &str) -> Option<&str> {
    local_name(raw).or_else(|| (!raw.contains(':')).then_some(raw))
}

struct Checker<'a> {
    ontology: &'a Ontology,
    errors: Vec<Issue>,
    warnings: Vec<Issue>,
}

impl Checker<'_> {
    fn value(&mut self, value: &Value, path: &str) {
        match value {
            Value::Object(map) if !is_leaf(map) => self.node(map, path),
            Value::Array(items) => {
                for (index, item) in items.iter().enumerate() {
                    self.value(item, &format!("{path}[{index}]"));
                }
            }
            _ => {}
        }
    }

    fn node(&mut self, map: &Map<String, Value>, path: &str) {
        let mut known = Vec::new();
        for raw in type_names(map.get("@type")) {
            match schema_name(raw) {
                Some(name) if self.ontology.is_class(name) => known.push(name),
                Some(name) => self
                    .errors
                    .push(Issue::at(format!("Unknown schema.org type '{name}'"), path)),
                None => {}
            }
        }

        for (key, value) in map {
            if key.starts_with('@') || UNCHECKED_PROPERTIES.contains(&key.as_str()) {
                continue;
            }
            let Some(property) = schema_name(key) else {
                continue;
            };
            let property_path = format!("{path}.{key}");

            if !self.ontology.has_property(property) {
                self.errors.push(Issue::at(
                    format!("Unknown schema.org property '{property}'"),
                    property_path.as_str(),
                ));
            } else if !known.is_empty()
                && !known.iter().any(|class| self.ontology.applies_to(property, class))
            {
                self.warnings.push(Issue::at(
                    format!(
                        "Property '{property}' is not expected on type '{}'",
                        known.join(", ")
                    ),
                    property_path.as_str(),
                ));
            }

            self.value(value, &property_path);
        }
    }
}

/// References and value objects carry no checkable properties.
fn is_leaf(map: &Map<String, Value>) -> bool {
    map.contains_key("@value") || (map.len() == 1 && map.contains_key("@id"))
}

fn type_names(value: Option<&Value>) -> Vec<&str> {
    match value {
        Some(Value::String(name)) => vec![name.as_str()],
        Some(Value::Array(names)) => names.iter().filter_map(Value::as_str).collect(),
        _ => Vec::new(),
    }
}
