//! JSON-LD expansion and compaction against the schema.org vocabulary.
//!
//! Supports the subset of JSON-LD 1.1 that publishing graphs use: a string
//! schema.org context, inline object contexts (`@vocab`, plain and compact-IRI
//! term definitions, `"@type": "@id"` coercion), arrays of contexts, nested
//! contexts, node/value/list objects, and `@graph`. Remote contexts other
//! than schema.org are rejected rather than fetched.

use std::borrow::Cow;
use std::collections::HashMap;

use serde_json::{Map, Value, json};

use crate::error::JsonLdError;
use crate::graph::SCHEMA_CONTEXT;

/// IRI prefix every schema.org term expands to.
pub const SCHEMA_VOCAB: &str = "https://schema.org/";

const SCHEMA_CONTEXT_ALIASES: [&str; 4] = [
    "https://schema.org",
    "https://schema.org/",
    "http://schema.org",
    "http://schema.org/",
];

#[derive(Debug, Clone)]
struct TermDefinition {
    iri: String,
    coerce_id: bool,
}

#[derive(Debug, Clone, Default)]
struct ActiveContext {
    vocab: Option<String>,
    terms: HashMap<String, TermDefinition>,
}

impl ActiveContext {
    fn process(&self, local: &Value, path: &str) -> Result<Self, JsonLdError> {
        let mut result = self.clone();
        let entries: Vec<&Value> = match local {
            Value::Array(items) => items.iter().collect(),
            other => vec![other],
        };

        for entry in entries {
            match entry {
                Value::Null => result = Self::default(),
                Value::String(iri) => {
                    if SCHEMA_CONTEXT_ALIASES.contains(&iri.as_str()) {
                        result.vocab = Some(SCHEMA_VOCAB.to_string());
                    } else {
                        return Err(JsonLdError::RemoteContext {
                            path: path.to_string(),
                            iri: iri.clone(),
                        });
                    }
                }
                Value::Object(definitions) => result.define_all(definitions, path)?,
                _ => {
                    return Err(invalid_context(
                        path,
                        "expected a string, object, array, or null",
                    ));
                }
            }
        }
        Ok(result)
    }

    fn define_all(&mut self, definitions: &Map<String, Value>, path: &str) -> Result<(), JsonLdError> {
        for (key, value) in definitions {
            match key.as_str() {
                "@vocab" => match value {
                    Value::Null => self.vocab = None,
                    Value::String(vocab) => {
                        let vocab = self.expand_iri(vocab).unwrap_or_else(|| vocab.clone());
                        self.vocab = Some(vocab);
                    }
                    _ => return Err(invalid_context(path, "@vocab must be a string or null")),
                },
                "@version" | "@language" | "@base" | "@protected" | "@propagate" => {}
                keyword if keyword.starts_with('@') => {
                    return Err(invalid_context(path, format!("unsupported keyword '{keyword}'")));
                }
                term => {
                    match value {
                        Value::Null => {
                            self.terms.remove(term);
                        }
                        Value::String(iri) => {
                            let iri = self.expand_iri(iri).unwrap_or_else(|| iri.clone());
                            self.terms.insert(
                                term.to_string(),
                                TermDefinition {
                                    iri,
                                    coerce_id: false,
                                },
                            );
                        }
                        Value::Object(definition) => {
                            let iri = match definition.get("@id") {
                                Some(Value::String(iri)) => {
                                    self.expand_iri(iri).unwrap_or_else(|| iri.clone())
                                }
                                None => self.expand_iri(term).ok_or_else(|| {
                                    invalid_context(path, format!("term '{term}' has no @id"))
                                })?,
                                Some(_) => {
                                    return Err(invalid_context(
                                        path,
                                        format!("@id of term '{term}' must be a string"),
                                    ));
                                }
                            };
                            let coerce_id = matches!(
                                definition.get("@type").and_then(Value::as_str),
                                Some("@id" | "@vocab")
                            );
                            self.terms
                                .insert(term.to_string(), TermDefinition { iri, coerce_id });
                        }
                        _ => {
                            return Err(invalid_context(
                                path,
                                format!("definition of term '{term}' must be a string or object"),
                            ));
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Expand a term or compact IRI to an absolute IRI, if the context allows it.
    fn expand_iri(&self, value: &str) -> Option<String> {
        if let Some(definition) = self.terms.get(value) {
            return Some(definition.iri.clone());
        }
        if value.contains("://") || value.starts_with("_:") {
            return Some(value.to_string());
        }
        if let Some((prefix, suffix)) = value.split_once(':') {
            return Some(
                self.terms
                    .get(prefix)
                    .map_or_else(|| value.to_string(), |def| format!("{}{suffix}", def.iri)),
            );
        }
        self.vocab.as_ref().map(|vocab| format!("{vocab}{value}"))
    }

    fn coerces_id(&self, term: &str) -> bool {
        self.terms.get(term).is_some_and(|def| def.coerce_id)
    }

    /// Node identifiers: compact IRIs are expanded, everything else is kept.
    fn expand_id(&self, id: &str) -> String {
        match id.split_once(':') {
            Some((prefix, suffix)) if !suffix.starts_with("//") => self
                .terms
                .get(prefix)
                .map_or_else(|| id.to_string(), |def| format!("{}{suffix}", def.iri)),
            _ => id.to_string(),
        }
    }
}

fn invalid_context(path: &str, reason: impl Into<String>) -> JsonLdError {
    JsonLdError::InvalidContext {
        path: path.to_string(),
        reason: reason.into(),
    }
}

fn into_items(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        other => vec![other],
    }
}

/// Expand a document into a flat array of context-free node objects.
///
/// A top-level `{"@context": ..., "@graph": [...]}` wrapper is unwrapped so
/// the result lists the graph's nodes directly.
///
/// # Errors
///
/// Returns a [`JsonLdError`] for non-object documents, malformed or remote
/// contexts, non-string `@id`, malformed `@type`, or malformed value objects.
pub fn expand(document: &Value) -> Result<Vec<Value>, JsonLdError> {
    if !matches!(document, Value::Object(_) | Value::Array(_)) {
        return Err(JsonLdError::InvalidDocument(
            "expected a JSON object or array".into(),
        ));
    }

    let expanded = expand_element(&ActiveContext::default(), document, "$")?;
    let mut nodes = Vec::new();
    for item in expanded.map(into_items).unwrap_or_default() {
        match item {
            Value::Object(mut map) if map.len() == 1 && map.contains_key("@graph") => {
                nodes.extend(map.remove("@graph").map(into_items).unwrap_or_default());
            }
            other => nodes.push(other),
        }
    }
    Ok(nodes)
}

fn expand_element(
    context: &ActiveContext,
    element: &Value,
    path: &str,
) -> Result<Option<Value>, JsonLdError> {
    match element {
        Value::Null => Ok(None),
        Value::Array(items) => {
            let mut out = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                match expand_element(context, item, &format!("{path}[{index}]"))? {
                    Some(Value::Array(nested)) => out.extend(nested),
                    Some(value) => out.push(value),
                    None => {}
                }
            }
            Ok(Some(Value::Array(out)))
        }
        Value::Object(map) => expand_object(context, map, path),
        scalar => Ok(Some(json!({ "@value": scalar }))),
    }
}

fn expand_object(
    context: &ActiveContext,
    map: &Map<String, Value>,
    path: &str,
) -> Result<Option<Value>, JsonLdError> {
    let context = match map.get("@context") {
        Some(local) => Cow::Owned(context.process(local, &format!("{path}.@context"))?),
        None => Cow::Borrowed(context),
    };

    if map.contains_key("@value") {
        return expand_value_object(&context, map, path);
    }

    let mut out = Map::new();
    for (key, value) in map {
        let child = format!("{path}.{key}");
        match key.as_str() {
            "@context" => {}
            "@id" => {
                let Value::String(id) = value else {
                    return Err(JsonLdError::InvalidId { path: child });
                };
                out.insert("@id".into(), Value::String(context.expand_id(id)));
            }
            "@type" => {
                let types = type_names(value).ok_or(JsonLdError::InvalidType { path: child })?;
                let expanded = types
                    .into_iter()
                    .map(|t| Value::String(context.expand_iri(t).unwrap_or_else(|| t.to_string())))
                    .collect();
                out.insert("@type".into(), Value::Array(expanded));
            }
            "@graph" | "@list" | "@set" => {
                let items = expand_element(&context, value, &child)?
                    .map(into_items)
                    .unwrap_or_default();
                if key == "@set" {
                    return Ok(Some(Value::Array(items)));
                }
                out.insert(key.clone(), Value::Array(items));
            }
            keyword if keyword.starts_with('@') => {
                tracing::trace!(keyword, path, "unsupported keyword dropped during expansion");
            }
            term => {
                let Some(iri) = context.expand_iri(term) else {
                    tracing::trace!(term, path, "term without mapping dropped during expansion");
                    continue;
                };
                let expanded = if context.coerces_id(term) {
                    coerce_ids(&context, value)
                } else {
                    expand_element(&context, value, &child)?
                };
                let Some(expanded) = expanded else { continue };
                let values = into_items(expanded);
                if let Some(Value::Array(existing)) = out.get_mut(&iri) {
                    existing.extend(values);
                } else {
                    out.insert(iri, Value::Array(values));
                }
            }
        }
    }
    Ok(Some(Value::Object(out)))
}

fn type_names(value: &Value) -> Option<Vec<&str>> {
    match value {
        Value::String(name) => Some(vec![name.as_str()]),
        Value::Array(names) => names.iter().map(Value::as_str).collect(),
        _ => None,
    }
}

/// Strings under an `@id`-typed term become node references.
fn coerce_ids(context: &ActiveContext, value: &Value) -> Option<Value> {
    match value {
        Value::Null => None,
        Value::String(id) => Some(json!({ "@id": context.expand_id(id) })),
        Value::Array(items) => Some(Value::Array(
            items.iter().filter_map(|item| coerce_ids(context, item)).collect(),
        )),
        other => Some(other.clone()),
    }
}

fn expand_value_object(
    context: &ActiveContext,
    map: &Map<String, Value>,
    path: &str,
) -> Result<Option<Value>, JsonLdError> {
    let invalid = |reason: &str| JsonLdError::InvalidValueObject {
        path: path.to_string(),
        reason: reason.to_string(),
    };

    let mut out = Map::new();
    for (key, value) in map {
        match key.as_str() {
            "@context" | "@index" => {}
            "@value" => match value {
                Value::Null => return Ok(None),
                Value::Object(_) | Value::Array(_) => {
                    return Err(invalid("@value must be a scalar"));
                }
                scalar => {
                    out.insert("@value".into(), scalar.clone());
                }
            },
            "@type" => {
                let Value::String(datatype) = value else {
                    return Err(invalid("@type must be a string"));
                };
                let iri = context.expand_iri(datatype).unwrap_or_else(|| datatype.clone());
                out.insert("@type".into(), Value::String(iri));
            }
            "@language" => {
                let Value::String(language) = value else {
                    return Err(invalid("@language must be a string"));
                };
                out.insert("@language".into(), Value::String(language.clone()));
            }
            _ => return Err(invalid("value objects may not carry other properties")),
        }
    }
    if out.contains_key("@type") && out.contains_key("@language") {
        return Err(invalid("@type and @language are mutually exclusive"));
    }
    Ok(Some(Value::Object(out)))
}

/// Compact expanded nodes into a `@graph` document under the schema.org context.
#[must_use]
pub fn compact(expanded: &[Value]) -> Value {
    let nodes: Vec<Value> = expanded.iter().map(compact_value).collect();
    json!({ "@context": SCHEMA_CONTEXT, "@graph": nodes })
}

/// `https://schema.org/name` → `name`; other IRIs are kept whole.
fn compact_iri(iri: &str) -> String {
    match iri.strip_prefix(SCHEMA_VOCAB) {
        Some(term)
            if !term.is_empty()
                && !term.contains(['/', '#', ':', '?'])
                && !term.starts_with('@') =>
        {
            term.to_string()
        }
        _ => iri.to_string(),
    }
}

fn compact_value(value: &Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.iter().map(compact_value).collect()),
        Value::Object(map) => compact_object(map),
        scalar => scalar.clone(),
    }
}

fn compact_object(map: &Map<String, Value>) -> Value {
    if let Some(literal) = map.get("@value") {
        return match (map.get("@type").and_then(Value::as_str), map.get("@language")) {
            (Some(datatype), _) => json!({ "@value": literal, "@type": compact_iri(datatype) }),
            (None, Some(language)) => json!({ "@value": literal, "@language": language }),
            (None, None) => literal.clone(),
        };
    }

    let mut out = Map::new();
    for (key, value) in map {
        match key.as_str() {
            "@id" => {
                out.insert(key.clone(), value.clone());
            }
            "@type" => {
                let mut types: Vec<Value> = value
                    .as_array()
                    .map(|types| {
                        types
                            .iter()
                            .filter_map(Value::as_str)
                            .map(|t| Value::String(compact_iri(t)))
                            .collect()
                    })
                    .unwrap_or_default();
                let compacted = if types.len() == 1 {
                    types.remove(0)
                } else {
                    Value::Array(types)
                };
                out.insert(key.clone(), compacted);
            }
            "@graph" | "@list" => {
                out.insert(key.clone(), compact_value(value));
            }
            iri => {
                let mut values = match compact_value(value) {
                    Value::Array(values) => values,
                    other => vec![other],
                };
                let compacted = if values.len() == 1 {
                    values.remove(0)
                } else {
                    Value::Array(values)
                };
                out.insert(compact_iri(iri), compacted);
            }
        }
    }
    Value::Object(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn expands_schema_terms_to_vocabulary_iris() {
        let doc = json!({
            "@context": "https://schema.org",
            "@graph": [{ "@type": "Organization", "@id": "https://a.test#org", "name": "Acme" }]
        });
        assert_eq!(
            expand(&doc).unwrap(),
            vec![json!({
                "@id": "https://a.test#org",
                "@type": ["https://schema.org/Organization"],
                "https://schema.org/name": [{ "@value": "Acme" }]
            })]
        );
    }

    #[test]
    fn terms_without_a_vocabulary_are_dropped() {
        let doc = json!({ "@type": "Thing", "name": "x", "http://example.com/p": 1 });
        assert_eq!(
            expand(&doc).unwrap(),
            vec![json!({
                "@type": ["Thing"],
                "http://example.com/p": [{ "@value": 1 }]
            })]
        );
    }

    #[test]
    fn object_contexts_define_prefixes_and_id_coercion() {
        let doc = json!({
            "@context": [
                "https://schema.org",
                { "ex": "https://example.com/ns#", "homepage": { "@id": "url", "@type": "@id" } }
            ],
            "@type": "ex:Widget",
            "homepage": "https://example.com",
            "ex:size": 3
        });
        assert_eq!(
            expand(&doc).unwrap(),
            vec![json!({
                "@type": ["https://example.com/ns#Widget"],
                "https://schema.org/url": [{ "@id": "https://example.com" }],
                "https://example.com/ns#size": [{ "@value": 3 }]
            })]
        );
    }

    #[test]
    fn rejects_remote_contexts() {
        let doc = json!({ "@context": "https://example.com/context.jsonld", "name": "x" });
        assert!(matches!(
            expand(&doc),
            Err(JsonLdError::RemoteContext { iri, .. }) if iri == "https://example.com/context.jsonld"
        ));
    }

    #[test]
    fn rejects_non_string_ids_with_a_path() {
        let doc = json!({
            "@context": "https://schema.org",
            "@graph": [{ "@type": "Thing" }, { "@type": "Thing", "@id": 7 }]
        });
        assert_eq!(
            expand(&doc).unwrap_err(),
            JsonLdError::InvalidId {
                path: "$.@graph[1].@id".into()
            }
        );
    }

    #[test]
    fn rejects_malformed_types_and_values() {
        let bad_type = json!({ "@context": "https://schema.org", "@type": { "x": 1 } });
        assert!(matches!(expand(&bad_type), Err(JsonLdError::InvalidType { .. })));

        let bad_value = json!({ "@context": "https://schema.org", "name": { "@value": [1] } });
        assert!(matches!(
            expand(&bad_value),
            Err(JsonLdError::InvalidValueObject { .. })
        ));
    }

    #[test]
    fn rejects_scalar_documents() {
        assert!(matches!(
            expand(&json!("https://schema.org")),
            Err(JsonLdError::InvalidDocument(_))
        ));
    }

    #[test]
    fn compaction_collapses_single_values_and_keeps_foreign_iris() {
        let expanded = vec![json!({
            "@type": ["https://schema.org/Thing"],
            "https://schema.org/name": [{ "@value": "x" }],
            "https://schema.org/sameAs": [{ "@value": "a" }, { "@value": "b" }],
            "https://example.com/p": [{ "@value": 1 }],
            "https://schema.org/query-input": [{ "@value": "required" }]
        })];
        assert_eq!(
            compact(&expanded),
            json!({
                "@context": "https://schema.org",
                "@graph": [{
                    "@type": "Thing",
                    "name": "x",
                    "sameAs": ["a", "b"],
                    "https://example.com/p": 1,
                    "query-input": "required"
                }]
            })
        );
    }
}
