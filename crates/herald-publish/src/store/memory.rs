use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use super::SeoStore;
use crate::error::StoreError;
use crate::record::SeoRecord;
use crate::target::PublishTarget;

/// Process-local store, used by previews and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<BTreeMap<PublishTarget, SeoRecord>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl SeoStore for MemoryStore {
    async fn load(&self, target: &PublishTarget) -> Result<Option<SeoRecord>, StoreError> {
        Ok(self
            .records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(target)
            .cloned())
    }

    async fn save(&self, target: &PublishTarget, record: &SeoRecord) -> Result<(), StoreError> {
        self.records
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(target.clone(), record.clone());
        Ok(())
    }

    async fn targets(&self) -> Result<Vec<PublishTarget>, StoreError> {
        Ok(self
            .records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect())
    }
}
