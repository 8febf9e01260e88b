//! The `@graph` document produced by the builders.

use std::collections::BTreeSet;

use serde_json::{Value, json};

use crate::error::GraphError;

/// The fixed schema.org context every emitted graph uses.
pub const SCHEMA_CONTEXT: &str = "https://schema.org";

/// An ordered list of top-level nodes under the schema.org context.
///
/// Every node that defines an `@id` (top-level or embedded) is tracked so a
/// second definition is rejected at insertion time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonLdGraph {
    nodes: Vec<Value>,
    ids: BTreeSet<String>,
}

impl JsonLdGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateId`] if the node defines an `@id`
    /// already defined elsewhere in the graph.
    pub fn push(&mut self, node: Value) -> Result<(), GraphError> {
        let defined = defined_ids(&node);
        let mut seen = BTreeSet::new();
        for id in &defined {
            if self.ids.contains(*id) || !seen.insert(*id) {
                return Err(GraphError::DuplicateId((*id).to_string()));
            }
        }
        self.ids.extend(defined.into_iter().map(str::to_string));
        self.nodes.push(node);
        Ok(())
    }

    #[must_use]
    pub fn nodes(&self) -> &[Value] {
        &self.nodes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Top-level node with the given `@id`.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Value> {
        self.nodes.iter().find(|node| node_id(node) == Some(id))
    }

    /// First top-level node whose `@type` is or includes `schema_type`.
    #[must_use]
    pub fn find_type(&self, schema_type: &str) -> Option<&Value> {
        self.nodes.iter().find(|node| has_type(node, schema_type))
    }

    /// `{"@context": "https://schema.org", "@graph": [...]}`
    #[must_use]
    pub fn to_value(&self) -> Value {
        json!({ "@context": SCHEMA_CONTEXT, "@graph": self.nodes })
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        json!({ "@context": SCHEMA_CONTEXT, "@graph": self.nodes })
    }
}

/// The `@id` of a node object.
#[must_use]
pub fn node_id(node: &Value) -> Option<&str> {
    node.get("@id").and_then(Value::as_str)
}

/// Whether `@type` is `schema_type` or an array containing it.
#[must_use]
pub fn has_type(node: &Value, schema_type: &str) -> bool {
    match node.get("@type") {
        Some(Value::String(t)) => t == schema_type,
        Some(Value::Array(types)) => types.iter().any(|t| t.as_str() == Some(schema_type)),
        _ => false,
    }
}

/// Whether the object is a bare `{"@id": ...}` reference.
fn is_reference(map: &serde_json::Map<String, Value>) -> bool {
    map.len() == 1 && map.get("@id").is_some_and(Value::is_string)
}

/// Every `@id` defined by a node object anywhere under `value`.
#[must_use]
pub fn defined_ids(value: &Value) -> Vec<&str> {
    let mut ids = Vec::new();
    walk(value, &mut |map| {
        if !is_reference(map) {
            if let Some(id) = map.get("@id").and_then(Value::as_str) {
                ids.push(id);
            }
        }
    });
    ids
}

/// Every `@id` used as a bare reference anywhere under `value`.
#[must_use]
pub fn referenced_ids(value: &Value) -> Vec<&str> {
    let mut ids = Vec::new();
    walk(value, &mut |map| {
        if is_reference(map) {
            if let Some(id) = map.get("@id").and_then(Value::as_str) {
                ids.push(id);
            }
        }
    });
    ids
}

fn walk<'a>(value: &'a Value, visit: &mut impl FnMut(&'a serde_json::Map<String, Value>)) {
    match value {
        Value::Object(map) => {
            visit(map);
            for child in map.values() {
                walk(child, visit);
            }
        }
        Value::Array(items) => {
            for item in items {
                walk(item, visit);
            }
        }
        _ => {}
    }
}
