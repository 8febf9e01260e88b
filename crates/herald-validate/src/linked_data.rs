//! Linked-data expansion check.

use herald_core::SubReport;
use herald_graph::jsonld;
use serde_json::Value;

/// Passes when the document expands; otherwise reports the expansion error.
#[must_use]
pub fn validate_linked_data(document: &Value) -> SubReport {
    match jsonld::expand(document) {
        Ok(nodes) => {
            tracing::trace!(nodes = nodes.len(), "graph expanded");
            SubReport::passed()
        }
        Err(e) => SubReport::failed(e.to_string()),
    }
}
