//! JSON-LD graph builder configuration.

use serde::{Deserialize, Serialize};

/// Items shown in a collection page's `ItemList`.
const fn default_list_window() -> usize {
    20
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GraphConfig {
    /// Maximum `ListItem`s per `ItemList`. `numberOfItems` is unaffected.
    #[serde(default = "default_list_window")]
    pub list_window: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            list_window: default_list_window(),
        }
    }
}
