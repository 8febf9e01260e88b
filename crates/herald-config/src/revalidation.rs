//! Public-site revalidation endpoint configuration.

use serde::{Deserialize, Serialize};

const fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RevalidationConfig {
    /// Endpoint notified after a successful save (e.g. `https://modonty.com/api/revalidate`).
    #[serde(default)]
    pub endpoint: String,

    /// Shared secret sent with every notification.
    #[serde(default)]
    pub secret: String,

    /// HTTP timeout for the notification, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for RevalidationConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            secret: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl RevalidationConfig {
    /// Check if both the endpoint and the shared secret are set.
    pub fn is_configured(&self) -> bool {
        !self.endpoint.is_empty() && !self.secret.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_endpoint_and_secret() {
        let mut config = RevalidationConfig::default();
        assert!(!config.is_configured());
        config.endpoint = "https://modonty.com/api/revalidate".into();
        assert!(!config.is_configured());
        config.secret = "s3cret".into();
        assert!(config.is_configured());
    }
}
