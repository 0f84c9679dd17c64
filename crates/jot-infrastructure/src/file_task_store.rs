//! File-backed task store implementation.
//!
//! Stores the task collection as a single JSON document under a fixed,
//! versioned storage key. The file stem *is* the storage key: a future schema
//! change migrates by renaming the key, and content that no longer parses is
//! discarded in favor of an empty collection rather than surfaced as an
//! error.
//!
//! File location: `{data_dir}/todo.tasks.v1.json`

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use jot_core::error::Result;
use jot_core::task::{Task, TaskStore};
use jot_core::JotError;

use crate::config::JotConfig;

/// File-based task store.
///
/// Reads tolerate a missing file, an unreadable file, and corrupt or
/// unrecognized JSON by returning an empty collection; only writes can fail,
/// and the caller decides what to do with that.
pub struct FileTaskStore {
    /// Directory the collection file lives in.
    data_dir: PathBuf,
}

impl FileTaskStore {
    /// Fixed, versioned storage key the collection is kept under.
    pub const STORAGE_KEY: &'static str = "todo.tasks.v1";

    /// Creates a new FileTaskStore using the configured data directory.
    pub fn new() -> Result<Self> {
        let config = JotConfig::load();
        Ok(Self {
            data_dir: config.task_data_dir()?,
        })
    }

    /// Creates a new FileTaskStore with a custom data directory (for testing).
    pub fn with_data_dir(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Returns the path of the collection file.
    fn store_path(&self) -> PathBuf {
        self.data_dir.join(format!("{}.json", Self::STORAGE_KEY))
    }
}

#[async_trait]
impl TaskStore for FileTaskStore {
    async fn load(&self) -> Vec<Task> {
        let path = self.store_path();

        if !path.exists() {
            return Vec::new();
        }

        let content = match fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Failed to read task store at {:?}: {}", path, e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Task>>(&content) {
            Ok(tasks) => tasks,
            Err(e) => {
                // Unknown or corrupt content under the key is discarded
                tracing::warn!("Discarding unreadable task store at {:?}: {}", path, e);
                Vec::new()
            }
        }
    }

    async fn save(&self, tasks: &[Task]) -> Result<()> {
        let path = self.store_path();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| JotError::io(format!("Failed to create data directory: {}", e)))?;
        }

        let serialized = serde_json::to_string_pretty(tasks)?;

        fs::write(&path, serialized)
            .await
            .map_err(|e| JotError::io(format!("Failed to write task store at {:?}: {}", path, e)))?;

        Ok(())
    }
}
