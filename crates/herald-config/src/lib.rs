//! # herald-config
//!
//! Layered configuration loading for Herald using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`HERALD_*` prefix, `__` as separator)
//! 2. Project-level `.herald/config.toml`
//! 3. User-level `~/.config/herald/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `HERALD_ONTOLOGY__TTL_SECS` -> `ontology.ttl_secs`,
//! `HERALD_REVALIDATION__SECRET` -> `revalidation.secret`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use herald_config::HeraldConfig;
//!
//! let config = HeraldConfig::load_with_dotenv().expect("config");
//!
//! if config.revalidation.is_configured() {
//!     println!("Revalidating via {}", config.revalidation.endpoint);
//! }
//! ```

mod error;
mod graph;
mod meta;
mod ontology;
mod revalidation;

pub use error::ConfigError;
pub use graph::GraphConfig;
pub use meta::MetaConfig;
pub use ontology::{DEFAULT_ONTOLOGY_URL, OntologyConfig};
pub use revalidation::RevalidationConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HeraldConfig {
    #[serde(default)]
    pub ontology: OntologyConfig,
    #[serde(default)]
    pub meta: MetaConfig,
    #[serde(default)]
    pub graph: GraphConfig,
    #[serde(default)]
    pub revalidation: RevalidationConfig,
}

impl HeraldConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when a source cannot be parsed and
    /// [`ConfigError::InvalidValue`] when the merged values are inconsistent.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Extract and check a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".herald/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("HERALD_").split("__"))
    }

    /// Reject combinations no builder can honour.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a zero list window or TTL, or
    /// a truncation suffix that does not fit inside a length limit.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.graph.list_window == 0 {
            return Err(ConfigError::invalid("graph.list_window", "must be at least 1"));
        }
        if self.ontology.ttl_secs == 0 {
            return Err(ConfigError::invalid("ontology.ttl_secs", "must be at least 1"));
        }

        let suffix_len = self.meta.truncation_suffix.chars().count();
        for (field, max) in [
            ("meta.title_max_length", self.meta.title_max_length),
            ("meta.description_max_length", self.meta.description_max_length),
        ] {
            if max <= suffix_len {
                return Err(ConfigError::invalid(
                    field,
                    format!("{max} leaves no room for the {suffix_len}-character truncation suffix"),
                ));
            }
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("herald").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) or current dir looking
    /// for a `.env` file. Silently does nothing if no `.env` is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // crate -> crates/ -> workspace root
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = HeraldConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.revalidation.is_configured());
        assert_eq!(config.graph.list_window, 20);
    }

    #[test]
    fn figment_builds_without_files() {
        let config = HeraldConfig::from_figment(&HeraldConfig::figment()).expect("defaults");
        assert_eq!(config.meta.title_max_length, 60);
        assert_eq!(config.ontology.ttl_secs, 86_400);
    }

    #[test]
    fn rejects_zero_window() {
        let mut config = HeraldConfig::default();
        config.graph.list_window = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "graph.list_window"
        ));
    }

    #[test]
    fn rejects_suffix_longer_than_limit() {
        let mut config = HeraldConfig::default();
        config.meta.title_max_length = 3;
        assert!(config.validate().is_err());
    }
}
