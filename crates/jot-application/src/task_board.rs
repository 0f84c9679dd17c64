//! Task board service.
//!
//! `TaskBoard` is the single owner of the canonical task collection. The
//! presentation layer issues commands through it and reads projections from
//! it; it never touches the collection or the store directly.
//!
//! Every successful mutation is written through to the store within the same
//! call. The write is best-effort: a failed save is logged and recorded in
//! [`PersistStatus`], but the in-memory collection remains the source of
//! truth for the session and the user is not interrupted.

use std::mem;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use jot_core::error::Result;
use jot_core::task::{
    Task, TaskCommand, TaskCounts, TaskFields, TaskFilter, TaskStore, apply, counts, project,
};
use jot_infrastructure::FileTaskStore;

/// Outcome of the most recent write-through save.
///
/// The default UI ignores persistence failures (availability over
/// durability); this status exists so the failure is still observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistStatus {
    /// The last save succeeded, or no save has been attempted yet.
    Clean,
    /// The last save failed and the write was dropped.
    Failed,
}

/// Owns the canonical task collection and coordinates engine and store.
///
/// # Thread Safety
///
/// The collection sits behind a `tokio::sync::RwLock`, so a `TaskBoard` can
/// be shared via `Arc` with a GUI shell. Mutations hold the write lock across
/// apply-and-save, so one command runs to completion before the next.
pub struct TaskBoard {
    /// Canonical in-memory task collection
    tasks: RwLock<Vec<Task>>,
    /// Persistent storage backend for the collection
    store: Arc<dyn TaskStore>,
    /// Outcome of the most recent save attempt
    persist_status: RwLock<PersistStatus>,
}

impl TaskBoard {
    /// Creates a new board with an empty collection.
    ///
    /// Call [`TaskBoard::hydrate`] once before issuing commands.
    pub fn new(store: Arc<dyn TaskStore>) -> Self {
        Self {
            tasks: RwLock::new(Vec::new()),
            store,
            persist_status: RwLock::new(PersistStatus::Clean),
        }
    }

    /// Creates a board backed by the default file store.
    ///
    /// This is the composition root a GUI shell is expected to call: it
    /// resolves the configured data directory and wires the file store in.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be resolved.
    pub fn with_default_store() -> Result<Self> {
        let store = FileTaskStore::new()?;
        Ok(Self::new(Arc::new(store)))
    }

    /// Loads the persisted collection into memory.
    ///
    /// Called exactly once, at startup, before any command is accepted. A
    /// missing or corrupt store yields an empty collection; that recovery
    /// happens inside the store and is not an error here.
    pub async fn hydrate(&self) {
        let loaded = self.store.load().await;
        let count = loaded.len();

        let mut tasks = self.tasks.write().await;
        *tasks = apply(mem::take(&mut *tasks), TaskCommand::Hydrate(loaded), now_ms());

        tracing::info!("Hydrated {} task(s) from storage", count);
    }

    /// Creates a new task and appends it to the collection.
    ///
    /// # Returns
    ///
    /// - `Ok(Task)`: The created task
    /// - `Err(JotError::Validation)`: Name or description was empty after
    ///   trimming; the collection is unchanged
    pub async fn add(&self, name: &str, description: &str) -> Result<Task> {
        let fields = TaskFields::new(name, description)?;

        let mut tasks = self.tasks.write().await;
        let next = apply(mem::take(&mut *tasks), TaskCommand::Add(fields), now_ms());
        // Safe to unwrap because Add always appends the new task at the end
        let created = next.last().unwrap().clone();
        *tasks = next;
        self.commit(&tasks).await;

        tracing::debug!("Added task {}", created.id);
        Ok(created)
    }

    /// Replaces name and description of the task with the given id.
    ///
    /// An unknown id is a silent no-op; only validation can fail.
    pub async fn update(&self, id: &str, name: &str, description: &str) -> Result<()> {
        let fields = TaskFields::new(name, description)?;

        let mut tasks = self.tasks.write().await;
        *tasks = apply(
            mem::take(&mut *tasks),
            TaskCommand::Update {
                id: id.to_string(),
                fields,
            },
            now_ms(),
        );
        self.commit(&tasks).await;

        tracing::debug!("Updated task {}", id);
        Ok(())
    }

    /// Flips the completion flag of the task with the given id.
    ///
    /// An unknown id is a silent no-op.
    pub async fn toggle(&self, id: &str) {
        let mut tasks = self.tasks.write().await;
        *tasks = apply(
            mem::take(&mut *tasks),
            TaskCommand::Toggle(id.to_string()),
            now_ms(),
        );
        self.commit(&tasks).await;

        tracing::debug!("Toggled task {}", id);
    }

    /// Removes the task with the given id.
    ///
    /// An unknown id is a silent no-op, so deleting twice is harmless.
    pub async fn delete(&self, id: &str) {
        let mut tasks = self.tasks.write().await;
        *tasks = apply(
            mem::take(&mut *tasks),
            TaskCommand::Delete(id.to_string()),
            now_ms(),
        );
        self.commit(&tasks).await;

        tracing::debug!("Deleted task {}", id);
    }

    /// Returns a snapshot of the canonical collection.
    pub async fn tasks(&self) -> Vec<Task> {
        self.tasks.read().await.clone()
    }

    /// Returns a snapshot of the visible (filtered and searched) tasks.
    pub async fn visible(&self, filter: TaskFilter, search: &str) -> Vec<Task> {
        let tasks = self.tasks.read().await;
        project(&tasks, filter, search).cloned().collect()
    }

    /// Returns derived counters over the canonical collection.
    pub async fn counts(&self) -> TaskCounts {
        counts(&self.tasks.read().await)
    }

    /// Returns the outcome of the most recent save attempt.
    pub async fn persist_status(&self) -> PersistStatus {
        *self.persist_status.read().await
    }

    /// Write-through persists the collection, recording the outcome.
    ///
    /// Failures are swallowed here: the in-memory collection stays
    /// authoritative for the session and the user is not interrupted.
    async fn commit(&self, tasks: &[Task]) {
        let status = match self.store.save(tasks).await {
            Ok(()) => PersistStatus::Clean,
            Err(e) => {
                tracing::warn!("Dropping task store write: {}", e);
                PersistStatus::Failed
            }
        };
        *self.persist_status.write().await = status;
    }
}

fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}
