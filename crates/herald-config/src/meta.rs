//! Meta-tag length limits.

use herald_core::MetaLimits;
use serde::{Deserialize, Serialize};

const fn default_title_max_length() -> usize {
    60
}

const fn default_description_max_length() -> usize {
    160
}

fn default_truncation_suffix() -> String {
    String::from(herald_core::text::DEFAULT_TRUNCATION_SUFFIX)
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MetaConfig {
    /// Maximum characters in `<title>`.
    #[serde(default = "default_title_max_length")]
    pub title_max_length: usize,

    /// Maximum characters in the meta description.
    #[serde(default = "default_description_max_length")]
    pub description_max_length: usize,

    /// Appended to truncated text; counts towards the maximum.
    #[serde(default = "default_truncation_suffix")]
    pub truncation_suffix: String,
}

impl Default for MetaConfig {
    fn default() -> Self {
        Self {
            title_max_length: default_title_max_length(),
            description_max_length: default_description_max_length(),
            truncation_suffix: default_truncation_suffix(),
        }
    }
}

impl MetaConfig {
    #[must_use]
    pub fn limits(&self) -> MetaLimits {
        MetaLimits {
            title_max_length: self.title_max_length,
            description_max_length: self.description_max_length,
            truncation_suffix: self.truncation_suffix.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limits_match_core_defaults() {
        assert_eq!(MetaConfig::default().limits(), MetaLimits::default());
    }
}
