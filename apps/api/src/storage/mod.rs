//! Local record store — one JSON document holding users, resumes, jobs and
//! the theme preference, read once at startup and rewritten on every change.

pub mod backend;
pub mod seed;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::models::{null_as_default, Job, Resume, User};

pub use backend::{JsonFileBackend, MemoryBackend, StorageBackend};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: u64 },

    #[error("{0}")]
    Conflict(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// The whole persisted document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    #[serde(deserialize_with = "null_as_default")]
    pub users: Vec<User>,
    #[serde(deserialize_with = "null_as_default")]
    pub resumes: Vec<Resume>,
    #[serde(deserialize_with = "null_as_default")]
    pub jobs: Vec<Job>,
    #[serde(deserialize_with = "null_as_default")]
    pub theme: Theme,
    #[serde(deserialize_with = "null_as_default")]
    pub seeded: bool,
}

/// A kind of row kept in a [`Snapshot`] table.
pub trait Record: Clone + Send + Sync + 'static {
    const KIND: &'static str;

    fn id(&self) -> u64;
    fn set_id(&mut self, id: u64);
    fn table(snapshot: &Snapshot) -> &Vec<Self>;
    fn table_mut(snapshot: &mut Snapshot) -> &mut Vec<Self>;

    /// Rejects a row that clashes with another row already in `snapshot`.
    /// Called under the write lock, before the row is stored.
    fn check_unique(&self, _snapshot: &Snapshot) -> Result<(), StoreError> {
        Ok(())
    }
}

impl Record for Resume {
    const KIND: &'static str = "resume";

    fn id(&self) -> u64 {
        self.id
    }
    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
    fn table(snapshot: &Snapshot) -> &Vec<Self> {
        &snapshot.resumes
    }
    fn table_mut(snapshot: &mut Snapshot) -> &mut Vec<Self> {
        &mut snapshot.resumes
    }
}

impl Record for Job {
    const KIND: &'static str = "job";

    fn id(&self) -> u64 {
        self.id
    }
    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
    fn table(snapshot: &Snapshot) -> &Vec<Self> {
        &snapshot.jobs
    }
    fn table_mut(snapshot: &mut Snapshot) -> &mut Vec<Self> {
        &mut snapshot.jobs
    }
}

impl Record for User {
    const KIND: &'static str = "user";

    fn id(&self) -> u64 {
        self.id
    }
    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
    fn table(snapshot: &Snapshot) -> &Vec<Self> {
        &snapshot.users
    }
    fn table_mut(snapshot: &mut Snapshot) -> &mut Vec<Self> {
        &mut snapshot.users
    }

    /// Usernames are the login key, so two accounts may not share one.
    fn check_unique(&self, snapshot: &Snapshot) -> Result<(), StoreError> {
        let taken = snapshot
            .users
            .iter()
            .any(|u| u.username == self.username && u.id != self.id);
        if taken {
            return Err(StoreError::Conflict(format!(
                "Username '{}' is already in use.",
                self.username
            )));
        }
        Ok(())
    }
}

fn next_id<T: Record>(rows: &[T]) -> u64 {
    rows.iter().map(T::id).max().map_or(1, |max| max + 1)
}

/// Gives rows stored without an id (read back as 0) a fresh one.
/// Returns how many rows were renumbered.
fn assign_missing_ids<T: Record>(rows: &mut [T]) -> usize {
    let mut repaired = 0;
    for i in 0..rows.len() {
        if rows[i].id() == 0 {
            let id = next_id(&rows[..]);
            rows[i].set_id(id);
            repaired += 1;
        }
    }
    repaired
}

pub struct LocalStore {
    backend: Arc<dyn StorageBackend>,
    snapshot: RwLock<Snapshot>,
}

impl LocalStore {
    /// Loads whatever the backend holds, or starts empty.
    pub async fn open(backend: Arc<dyn StorageBackend>) -> Result<Self, StoreError> {
        let mut snapshot = backend.load().await?.unwrap_or_default();
        let repaired = assign_missing_ids(&mut snapshot.users)
            + assign_missing_ids(&mut snapshot.resumes)
            + assign_missing_ids(&mut snapshot.jobs);
        if repaired > 0 {
            warn!(repaired, "Stored records without an id were given new ones");
        }
        info!(
            backend = %backend.describe(),
            users = snapshot.users.len(),
            resumes = snapshot.resumes.len(),
            jobs = snapshot.jobs.len(),
            "Local store opened"
        );
        Ok(Self {
            backend,
            snapshot: RwLock::new(snapshot),
        })
    }

    pub fn in_memory() -> Self {
        Self {
            backend: Arc::new(MemoryBackend),
            snapshot: RwLock::new(Snapshot::default()),
        }
    }

    /// Runs `f` against the current document under a read lock.
    pub async fn read<R>(&self, f: impl FnOnce(&Snapshot) -> R) -> R {
        let guard = self.snapshot.read().await;
        f(&guard)
    }

    /// Applies `f` to a copy of the document, persists the copy, then makes it
    /// current. A failed write leaves the in-memory state untouched.
    async fn mutate<R>(
        &self,
        f: impl FnOnce(&mut Snapshot) -> Result<R, StoreError>,
    ) -> Result<R, StoreError> {
        let mut guard = self.snapshot.write().await;
        let mut next = guard.clone();
        let out = f(&mut next)?;
        self.backend.persist(&next).await?;
        *guard = next;
        Ok(out)
    }

    pub async fn list<T: Record>(&self) -> Vec<T> {
        self.read(|s| T::table(s).clone()).await
    }

    pub async fn get<T: Record>(&self, id: u64) -> Result<T, StoreError> {
        self.read(|s| T::table(s).iter().find(|r| r.id() == id).cloned())
            .await
            .ok_or(StoreError::NotFound { kind: T::KIND, id })
    }

    /// Appends a row built from the next free id (max + 1, or 1 when empty).
    pub async fn insert<T: Record>(&self, build: impl FnOnce(u64) -> T) -> Result<T, StoreError> {
        self.mutate(|s| {
            let record = build(next_id(T::table(s).as_slice()));
            record.check_unique(s)?;
            T::table_mut(s).push(record.clone());
            Ok(record)
        })
        .await
    }

    pub async fn update<T: Record>(
        &self,
        id: u64,
        apply: impl FnOnce(&mut T),
    ) -> Result<T, StoreError> {
        self.mutate(|s| {
            let record = T::table_mut(s)
                .iter_mut()
                .find(|r| r.id() == id)
                .ok_or(StoreError::NotFound { kind: T::KIND, id })?;
            apply(record);
            let record = record.clone();
            record.check_unique(s)?;
            Ok(record)
        })
        .await
    }

    pub async fn delete<T: Record>(&self, id: u64) -> Result<T, StoreError> {
        self.mutate(|s| {
            let rows = T::table_mut(s);
            let pos = rows
                .iter()
                .position(|r| r.id() == id)
                .ok_or(StoreError::NotFound { kind: T::KIND, id })?;
            Ok(rows.remove(pos))
        })
        .await
    }

    pub async fn theme(&self) -> Theme {
        self.read(|s| s.theme).await
    }

    pub async fn set_theme(&self, theme: Theme) -> Result<Theme, StoreError> {
        self.mutate(|s| {
            s.theme = theme;
            Ok(theme)
        })
        .await
    }

    /// Writes the demo records unless they were written before.
    /// Returns whether anything was seeded. An already seeded document is
    /// left alone, including on disk.
    pub async fn seed_demo_data(&self) -> Result<bool, StoreError> {
        let mut guard = self.snapshot.write().await;
        if guard.seeded {
            return Ok(false);
        }
        let mut next = guard.clone();
        seed_into(&mut next);
        self.backend.persist(&next).await?;
        *guard = next;
        Ok(true)
    }

    /// Clears every table and preference, then seeds the demo records again.
    pub async fn reset(&self) -> Result<(), StoreError> {
        self.mutate(|s| {
            *s = Snapshot::default();
            seed_into(s);
            Ok(())
        })
        .await?;
        info!("Local store reset to demo data");
        Ok(())
    }
}

fn seed_into(snapshot: &mut Snapshot) {
    snapshot.users = seed::demo_users();
    snapshot.resumes = seed::demo_resumes();
    snapshot.jobs = seed::demo_jobs();
    snapshot.seeded = true;
}
