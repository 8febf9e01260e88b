//! Cache-first access to the vocabulary snapshot.

use std::sync::Arc;

use chrono::Duration;
use herald_config::OntologyConfig;

use crate::cache::SnapshotCache;
use crate::clock::{Clock, SystemClock};
use crate::error::OntologyError;
use crate::snapshot::Ontology;
use crate::source::{HttpOntologySource, OntologySource};

/// Serves the cached snapshot, fetching a fresh one on a miss.
///
/// Concurrent misses each trigger their own fetch; the last one to finish
/// wins the slot.
pub struct OntologyService<S, C = SystemClock> {
    source: S,
    cache: SnapshotCache<C>,
}

impl OntologyService<HttpOntologySource, SystemClock> {
    /// HTTP source and wall clock, both from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`OntologyError::Http`] if the HTTP client fails to build.
    pub fn from_config(config: &OntologyConfig) -> Result<Self, OntologyError> {
        Ok(Self::new(
            HttpOntologySource::new(config)?,
            SystemClock,
            ttl_from_secs(config.ttl_secs),
        ))
    }
}

impl<S: OntologySource, C: Clock> OntologyService<S, C> {
    #[must_use]
    pub const fn new(source: S, clock: C, ttl: Duration) -> Self {
        Self {
            source,
            cache: SnapshotCache::new(clock, ttl),
        }
    }

    /// The current snapshot.
    ///
    /// # Errors
    ///
    /// Propagates the source's error when the cache is cold or expired and
    /// the fetch fails. A stale snapshot is never served.
    pub async fn snapshot(&self) -> Result<Arc<Ontology>, OntologyError> {
        if let Some(ontology) = self.cache.get() {
            return Ok(ontology);
        }
        tracing::debug!("vocabulary cache miss");
        self.refresh().await
    }

    /// Fetch unconditionally and replace the cached snapshot.
    ///
    /// # Errors
    ///
    /// Propagates the source's error; the cache is left untouched.
    pub async fn refresh(&self) -> Result<Arc<Ontology>, OntologyError> {
        let ontology = Arc::new(self.source.fetch().await?);
        self.cache.set(Arc::clone(&ontology));
        Ok(ontology)
    }

    pub const fn cache(&self) -> &SnapshotCache<C> {
        &self.cache
    }

    pub const fn source(&self) -> &S {
        &self.source
    }
}

fn ttl_from_secs(secs: u64) -> Duration {
    Duration::try_seconds(i64::try_from(secs).unwrap_or(i64::MAX)).unwrap_or(Duration::MAX)
}
