//! Cache-busting notifications to the public site after a save.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use herald_config::RevalidationConfig;
use serde::Serialize;

use crate::error::PublishError;

/// Tells the public site that `path` has fresh SEO output.
#[async_trait]
pub trait Revalidator: Send + Sync {
    async fn revalidate(&self, path: &str) -> Result<(), PublishError>;
}

/// Used when no endpoint is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRevalidator;

#[async_trait]
impl Revalidator for NoopRevalidator {
    async fn revalidate(&self, path: &str) -> Result<(), PublishError> {
        tracing::debug!(path, "revalidation not configured; skipping");
        Ok(())
    }
}

#[derive(Serialize)]
struct RevalidateRequest<'a> {
    path: &'a str,
    secret: &'a str,
}

/// POSTs `{path, secret}` to the configured endpoint.
pub struct HttpRevalidator {
    http: reqwest::Client,
    endpoint: String,
    secret: String,
}

impl HttpRevalidator {
    /// # Errors
    ///
    /// Returns [`PublishError::Http`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn new(config: &RevalidationConfig) -> Result<Self, PublishError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("herald/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            secret: config.secret.clone(),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Revalidator for HttpRevalidator {
    async fn revalidate(&self, path: &str) -> Result<(), PublishError> {
        let body = RevalidateRequest {
            path,
            secret: &self.secret,
        };
        let resp = self.http.post(&self.endpoint).json(&body).send().await?;
        check_response(resp).await?;
        tracing::debug!(path, endpoint = %self.endpoint, "revalidation requested");
        Ok(())
    }
}

/// The HTTP notifier when `config` has both endpoint and secret, otherwise
/// the no-op one.
///
/// # Errors
///
/// Returns [`PublishError::Http`] if the HTTP client fails to build.
pub fn revalidator_from_config(
    config: &RevalidationConfig,
) -> Result<Arc<dyn Revalidator>, PublishError> {
    if config.is_configured() {
        Ok(Arc::new(HttpRevalidator::new(config)?))
    } else {
        Ok(Arc::new(NoopRevalidator))
    }
}

async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, PublishError> {
    if !resp.status().is_success() {
        return Err(PublishError::Revalidation {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}
