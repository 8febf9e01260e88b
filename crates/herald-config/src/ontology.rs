//! Ontology snapshot source configuration.

use serde::{Deserialize, Serialize};

/// Current schema.org release, JSON-LD serialization.
pub const DEFAULT_ONTOLOGY_URL: &str =
    "https://schema.org/version/latest/schemaorg-current-https.jsonld";

fn default_url() -> String {
    String::from(DEFAULT_ONTOLOGY_URL)
}

/// Default snapshot lifetime: 24 hours.
const fn default_ttl_secs() -> u64 {
    24 * 60 * 60
}

const fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OntologyConfig {
    /// Where the vocabulary snapshot is fetched from.
    #[serde(default = "default_url")]
    pub url: String,

    /// How long a fetched snapshot stays fresh, in seconds.
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,

    /// HTTP timeout for the snapshot fetch, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for OntologyConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            ttl_secs: default_ttl_secs(),
            timeout_secs: default_timeout_secs(),
        }
    }
}
