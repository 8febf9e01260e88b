//! One pretty-printed JSON file per target.
//!
//! File names: `page--{slug}.json` for static pages (slug percent-encoded,
//! so nested slugs stay in one directory) and `{category}.json` for listings.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use herald_core::PageCategory;

use super::SeoStore;
use crate::error::StoreError;
use crate::record::SeoRecord;
use crate::target::PublishTarget;

const PAGE_PREFIX: &str = "page--";
const EXTENSION: &str = ".json";
const STAGING_SUFFIX: &str = ".tmp";

static STAGING_SEQUENCE: AtomicU64 = AtomicU64::new(0);

#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// # Errors
    ///
    /// Returns [`StoreError::InvalidTarget`] for empty slugs or slugs with
    /// `..` segments.
    pub fn path_for(&self, target: &PublishTarget) -> Result<PathBuf, StoreError> {
        Ok(self.root.join(file_name(target)?))
    }
}

fn file_name(target: &PublishTarget) -> Result<String, StoreError> {
    if target.category.is_collection() {
        return Ok(format!("{}{EXTENSION}", target.category));
    }
    if target.slug.is_empty() {
        return Err(StoreError::InvalidTarget("static page without a slug".into()));
    }
    if target.slug.split('/').any(|segment| segment == "..") {
        return Err(StoreError::InvalidTarget(format!(
            "slug '{}' escapes the store directory",
            target.slug
        )));
    }
    Ok(format!(
        "{PAGE_PREFIX}{}{EXTENSION}",
        urlencoding::encode(&target.slug)
    ))
}

/// A staging path unique to this save, next to `path` so the rename stays on
/// one filesystem. Concurrent saves of one target never share it.
fn staging_path(path: &Path) -> PathBuf {
    let sequence = STAGING_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    let name = path
        .file_name()
        .map_or_else(String::new, |name| name.to_string_lossy().into_owned());
    path.with_file_name(format!(
        ".{name}.{}.{sequence}{STAGING_SUFFIX}",
        std::process::id()
    ))
}

fn parse_file_name(name: &str) -> Option<PublishTarget> {
    let stem = name.strip_suffix(EXTENSION)?;
    if let Some(slug) = stem.strip_prefix(PAGE_PREFIX) {
        let slug = urlencoding::decode(slug).ok()?;
        return Some(PublishTarget::page(&slug));
    }
    let category: PageCategory = stem.parse().ok()?;
    category
        .is_collection()
        .then(|| PublishTarget::listing(category))
}

#[async_trait]
impl SeoStore for FileStore {
    async fn load(&self, target: &PublishTarget) -> Result<Option<SeoRecord>, StoreError> {
        let path = self.path_for(target)?;
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::io(path, e)),
        };
        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|source| StoreError::Corrupt { path, source })
    }

    async fn save(&self, target: &PublishTarget, record: &SeoRecord) -> Result<(), StoreError> {
        let path = self.path_for(target)?;
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| StoreError::io(&self.root, e))?;

        let bytes = serde_json::to_vec_pretty(record).map_err(|source| StoreError::Corrupt {
            path: path.clone(),
            source,
        })?;
        // Write-then-rename keeps readers from seeing a half-written record.
        let staging = staging_path(&path);
        if let Err(e) = tokio::fs::write(&staging, bytes).await {
            let _ = tokio::fs::remove_file(&staging).await;
            return Err(StoreError::io(&staging, e));
        }
        if let Err(e) = tokio::fs::rename(&staging, &path).await {
            let _ = tokio::fs::remove_file(&staging).await;
            return Err(StoreError::io(&path, e));
        }

        tracing::debug!(path = %path.display(), "record written");
        Ok(())
    }

    async fn targets(&self) -> Result<Vec<PublishTarget>, StoreError> {
        let mut entries = match tokio::fs::read_dir(&self.root).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::io(&self.root, e)),
        };

        let mut targets = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| StoreError::io(&self.root, e))?
        {
            let name = entry.file_name();
            match name.to_str().and_then(parse_file_name) {
                Some(target) => targets.push(target),
                None => tracing::debug!(file = ?name, "skipping unrecognized file"),
            }
        }
        targets.sort();
        Ok(targets)
    }
}
