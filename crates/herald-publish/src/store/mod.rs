//! Where generated records live.
//!
//! Each save is a full replacement of the target's record; concurrent
//! writers to one target resolve as last-write-wins.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::record::SeoRecord;
use crate::target::PublishTarget;

#[async_trait]
pub trait SeoStore: Send + Sync {
    async fn load(&self, target: &PublishTarget) -> Result<Option<SeoRecord>, StoreError>;

    async fn save(&self, target: &PublishTarget, record: &SeoRecord) -> Result<(), StoreError>;

    /// Every target with a stored record, sorted.
    async fn targets(&self) -> Result<Vec<PublishTarget>, StoreError>;
}
