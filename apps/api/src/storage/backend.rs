use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::storage::{Snapshot, StoreError};

/// Where the store document lives. Swapped at startup via `STORE_PATH`.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Returns `None` when nothing usable has been stored yet.
    async fn load(&self) -> Result<Option<Snapshot>, StoreError>;

    async fn persist(&self, snapshot: &Snapshot) -> Result<(), StoreError>;

    fn describe(&self) -> String;
}

/// Keeps nothing between runs.
pub struct MemoryBackend;

#[async_trait]
impl StorageBackend for MemoryBackend {
    async fn load(&self) -> Result<Option<Snapshot>, StoreError> {
        Ok(None)
    }

    async fn persist(&self, _snapshot: &Snapshot) -> Result<(), StoreError> {
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

/// A single pretty-printed JSON document on local disk.
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// `store.json` + `.tmp` gives `store.json.tmp`, whatever the extension.
fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}

#[async_trait]
impl StorageBackend for JsonFileBackend {
    async fn load(&self) -> Result<Option<Snapshot>, StoreError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        // An unreadable document is moved aside so the next write cannot
        // replace it, and the store starts fresh.
        match serde_json::from_str(&raw) {
            Ok(snapshot) => Ok(Some(snapshot)),
            Err(e) => {
                let aside = with_suffix(&self.path, ".corrupt");
                tokio::fs::rename(&self.path, &aside).await?;
                warn!(
                    path = %self.path.display(),
                    moved_to = %aside.display(),
                    "Unreadable store document set aside: {e}"
                );
                Ok(None)
            }
        }
    }

    async fn persist(&self, snapshot: &Snapshot) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let data = serde_json::to_vec_pretty(snapshot)?;
        let temp_path = with_suffix(&self.path, ".tmp");
        tokio::fs::write(&temp_path, data).await?;
        tokio::fs::rename(&temp_path, &self.path).await?;

        debug!(path = %self.path.display(), "Store document written");
        Ok(())
    }

    fn describe(&self) -> String {
        format!("json file {}", self.path.display())
    }
}
