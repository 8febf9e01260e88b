//! Process-wide vocabulary snapshot with a time-to-live.
//!
//! One slot, no key. Reads check the TTL against the injected [`Clock`];
//! an expired slot reads as empty.

use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Duration, Utc};

use crate::clock::Clock;
use crate::snapshot::Ontology;

#[derive(Debug, Clone)]
struct Entry {
    ontology: Arc<Ontology>,
    fetched_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct SnapshotCache<C> {
    clock: C,
    ttl: Duration,
    slot: RwLock<Option<Entry>>,
}

impl<C: Clock> SnapshotCache<C> {
    #[must_use]
    pub const fn new(clock: C, ttl: Duration) -> Self {
        Self {
            clock,
            ttl,
            slot: RwLock::new(None),
        }
    }

    /// The cached snapshot, unless missing or expired.
    pub fn get(&self) -> Option<Arc<Ontology>> {
        let slot = self.slot.read().unwrap_or_else(PoisonError::into_inner);
        slot.as_ref()
            .filter(|entry| !self.expired_at(entry.fetched_at))
            .map(|entry| Arc::clone(&entry.ontology))
    }

    /// Replace the snapshot, stamping it with the current time.
    pub fn set(&self, ontology: Arc<Ontology>) {
        let entry = Entry {
            ontology,
            fetched_at: self.clock.now(),
        };
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = Some(entry);
    }

    /// True when the slot is empty or older than the TTL.
    pub fn is_expired(&self) -> bool {
        self.fetched_at().is_none_or(|at| self.expired_at(at))
    }

    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|entry| entry.fetched_at)
    }

    pub fn clear(&self) {
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    fn expired_at(&self, fetched_at: DateTime<Utc>) -> bool {
        self.clock.now() - fetched_at >= self.ttl
    }
}
