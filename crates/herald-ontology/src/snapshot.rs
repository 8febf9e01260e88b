//! In-memory view of the schema.org vocabulary.
//!
//! Parsed from the official JSON-LD release, where every class and property
//! is a `@graph` entry keyed by a `schema:`-prefixed `@id`:
//!
//! ```json
//! { "@id": "schema:Organization", "@type": "rdfs:Class",
//!   "rdfs:subClassOf": { "@id": "schema:Thing" } }
//! { "@id": "schema:legalName", "@type": "rdf:Property",
//!   "schema:domainIncludes": { "@id": "schema:Organization" } }
//! ```

use std::collections::{BTreeSet, HashMap};

use serde_json::Value;

use crate::error::OntologyError;

const SCHEMA_PREFIXES: [&str; 3] = ["schema:", "https://schema.org/", "http://schema.org/"];
const CLASS_TYPES: [&str; 2] = ["rdfs:Class", "http://www.w3.org/2000/01/rdf-schema#Class"];
const PROPERTY_TYPES: [&str; 2] = [
    "rdf:Property",
    "http://www.w3.org/1999/02/22-rdf-syntax-ns#Property",
];

/// Local schema.org name of an IRI (`schema:Thing` → `Thing`).
#[must_use]
pub fn local_name(iri: &str) -> Option<&str> {
    SCHEMA_PREFIXES
        .iter()
        .find_map(|prefix| iri.strip_prefix(prefix))
        .filter(|name| !name.is_empty())
}

/// Classes with their direct parents, properties with their declared domains.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ontology {
    classes: HashMap<String, Vec<String>>,
    properties: HashMap<String, Vec<String>>,
}

impl Ontology {
    /// Parse the schema.org JSON-LD release.
    ///
    /// # Errors
    ///
    /// Returns [`OntologyError::Parse`] if the document has no `@graph` or
    /// defines no classes.
    pub fn from_jsonld(document: &Value) -> Result<Self, OntologyError> {
        let graph = document
            .get("@graph")
            .and_then(Value::as_array)
            .ok_or_else(|| OntologyError::Parse("vocabulary document has no @graph".into()))?;

        let mut ontology = Self::default();
        for entry in graph {
            let Some(name) = entry.get("@id").and_then(Value::as_str).and_then(local_name) else {
                continue;
            };
            let types = strings(entry.get("@type"));
            if types.iter().any(|t| CLASS_TYPES.contains(t)) {
                ontology
                    .classes
                    .insert(name.to_string(), references(entry.get("rdfs:subClassOf")));
            } else if types.iter().any(|t| PROPERTY_TYPES.contains(t)) {
                ontology
                    .properties
                    .insert(name.to_string(), references(entry.get("schema:domainIncludes")));
            }
        }

        if ontology.classes.is_empty() {
            return Err(OntologyError::Parse("vocabulary defines no classes".into()));
        }
        Ok(ontology)
    }

    /// Register a class. Parents need not be registered first.
    #[must_use]
    pub fn with_class(mut self, name: &str, parents: &[&str]) -> Self {
        self.classes
            .insert(name.to_string(), parents.iter().map(ToString::to_string).collect());
        self
    }

    /// Register a property; an empty domain list allows it on any class.
    #[must_use]
    pub fn with_property(mut self, name: &str, domains: &[&str]) -> Self {
        self.properties
            .insert(name.to_string(), domains.iter().map(ToString::to_string).collect());
        self
    }

    #[must_use]
    pub fn is_class(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    #[must_use]
    pub fn has_property(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    #[must_use]
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    #[must_use]
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    /// `class` and every class it inherits from. Cycles are tolerated.
    #[must_use]
    pub fn lineage(&self, class: &str) -> BTreeSet<&str> {
        let mut seen = BTreeSet::new();
        let mut pending = vec![class];
        while let Some(next) = pending.pop() {
            let Some((name, parents)) = self.classes.get_key_value(next) else {
                continue;
            };
            if seen.insert(name.as_str()) {
                pending.extend(parents.iter().map(String::as_str));
            }
        }
        seen
    }

    /// Whether `property` is declared on `class` or one of its ancestors.
    ///
    /// Properties without declared domains apply everywhere.
    #[must_use]
    pub fn applies_to(&self, property: &str, class: &str) -> bool {
        let Some(domains) = self.properties.get(property) else {
            return false;
        };
        if domains.is_empty() {
            return true;
        }
        let lineage = self.lineage(class);
        domains.iter().any(|domain| lineage.contains(domain.as_str()))
    }
}

fn strings(value: Option<&Value>) -> Vec<&str> {
    match value {
        Some(Value::String(s)) => vec![s.as_str()],
        Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
        _ => Vec::new(),
    }
}

/// Local names of `{"@id": ...}` references (single or array).
fn references(value: Option<&Value>) -> Vec<String> {
    let ids = match value {
        Some(Value::Array(items)) => items.iter().collect(),
        Some(other) => vec![other],
        None => Vec::new(),
    };
    ids.into_iter()
        .filter_map(|item| item.get("@id").and_then(Value::as_str).and_then(local_name))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn release() -> Value {
        json!({
            "@context": { "schema": "https://schema.org/" },
            "@graph": [
                { "@id": "schema:Thing", "@type": "rdfs:Class" },
                { "@id": "schema:CreativeWork", "@type": "rdfs:Class", "rdfs:subClassOf": { "@id": "schema:Thing" } },
                { "@id": "schema:WebPage", "@type": "rdfs:Class", "rdfs:subClassOf": { "@id": "schema:CreativeWork" } },
                { "@id": "schema:Text", "@type": ["schema:DataType", "rdfs:Class"] },
                { "@id": "schema:name", "@type": "rdf:Property", "schema:domainIncludes": { "@id": "schema:Thing" } },
                {
                    "@id": "schema:breadcrumb",
                    "@type": "rdf:Property",
                    "schema:domainIncludes": [{ "@id": "schema:WebPage" }]
                },
                { "@id": "schema:Monday", "@type": "schema:DayOfWeek" },
                { "@id": "rdfs:label", "@type": "rdf:Property" }
            ]
        })
    }

    #[test]
    fn parses_classes_and_properties() {
        let ontology = Ontology::from_jsonld(&release()).unwrap();
        assert_eq!(ontology.class_count(), 4);
        assert_eq!(ontology.property_count(), 2);
        assert!(ontology.is_class("Text"));
        assert!(!ontology.is_class("Monday"));
        assert!(!ontology.has_property("label"));
    }

    #[test]
    fn domains_are_inherited() {
        let ontology = Ontology::from_jsonld(&release()).unwrap();
        assert!(ontology.applies_to("name", "WebPage"));
        assert!(ontology.applies_to("breadcrumb", "WebPage"));
        assert!(!ontology.applies_to("breadcrumb", "CreativeWork"));
        assert!(!ontology.applies_to("missing", "WebPage"));
    }

    #[test]
    fn lineage_survives_cycles() {
        let ontology = Ontology::default()
            .with_class("A", &["B"])
            .with_class("B", &["A"]);
        assert_eq!(ontology.lineage("A").into_iter().collect::<Vec<_>>(), vec!["A", "B"]);
    }

    #[test]
    fn rejects_documents_without_classes() {
        assert!(Ontology::from_jsonld(&json!({ "name": "x" })).is_err());
        assert!(Ontology::from_jsonld(&json!({ "@graph": [] })).is_err());
    }

    #[test]
    fn local_names_strip_known_prefixes() {
        assert_eq!(local_name("schema:Thing"), Some("Thing"));
        assert_eq!(local_name("https://schema.org/Thing"), Some("Thing"));
        assert_eq!(local_name("rdfs:Class"), None);
        assert_eq!(local_name("schema:"), None);
    }
}
