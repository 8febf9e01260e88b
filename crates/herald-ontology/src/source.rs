//! Where vocabulary snapshots come from.

use std::time::Duration;

use async_trait::async_trait;
use herald_config::OntologyConfig;

use crate::error::OntologyError;
use crate::snapshot::Ontology;

/// A fetchable vocabulary snapshot.
#[async_trait]
pub trait OntologySource: Send + Sync {
    async fn fetch(&self) -> Result<Ontology, OntologyError>;
}

/// Fetches the schema.org JSON-LD release over HTTP.
pub struct HttpOntologySource {
    http: reqwest::Client,
    url: String,
}

impl HttpOntologySource {
    /// Build a client for the configured vocabulary URL.
    ///
    /// # Errors
    ///
    /// Returns [`OntologyError::Http`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn new(config: &OntologyConfig) -> Result<Self, OntologyError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("herald/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            url: config.url.clone(),
        })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl OntologySource for HttpOntologySource {
    async fn fetch(&self) -> Result<Ontology, OntologyError> {
        tracing::info!(url = %self.url, "fetching schema.org vocabulary");
        let resp = check_response(self.http.get(&self.url).send().await?).await?;
        let document: serde_json::Value = resp.json().await?;
        let ontology = Ontology::from_jsonld(&document)?;
        tracing::info!(
            classes = ontology.class_count(),
            properties = ontology.property_count(),
            "vocabulary snapshot loaded"
        );
        Ok(ontology)
    }
}

/// Map a non-success status to [`OntologyError::Api`], keeping the body.
pub(crate) async fn check_response(
    resp: reqwest::Response,
) -> Result<reqwest::Response, OntologyError> {
    if !resp.status().is_success() {
        return Err(OntologyError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn check_response_api_error_keeps_body() {
        let err = check_response(mock_response(503, "maintenance"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            OntologyError::Api { status: 503, ref message } if message == "maintenance"
        ));
    }

    #[tokio::test]
    async fn check_response_success() {
        assert!(check_response(mock_response(200, "{}")).await.is_ok());
    }

    #[test]
    fn client_uses_configured_url() {
        let source = HttpOntologySource::new(&OntologyConfig::default()).unwrap();
        assert_eq!(source.url(), herald_config::DEFAULT_ONTOLOGY_URL);
    }
}
