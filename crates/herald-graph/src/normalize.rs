//! Graph normalization: `compact(expand(graph))` under the schema.org context.

use serde_json::Value;

use crate::error::JsonLdError;
use crate::jsonld;

/// Rewrite a graph into its canonical compacted form.
///
/// Structurally equivalent inputs (single values vs. one-element arrays,
/// full IRIs vs. schema.org terms, nested contexts) normalize to the same
/// value, and normalizing a normalized graph is a no-op.
///
/// # Errors
///
/// Returns [`JsonLdError`] when the graph cannot be expanded.
pub fn normalize(graph: &Value) -> Result<Value, JsonLdError> {
    let expanded = jsonld::expand(graph)?;
    tracing::trace!(nodes = expanded.len(), "expanded graph for normalization");
    Ok(jsonld::compact(&expanded))
}
