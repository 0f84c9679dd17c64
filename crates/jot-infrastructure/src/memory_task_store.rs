//! In-memory task store implementation.
//!
//! Keeps the collection in process memory behind the same trait as the file
//! store. Used by tests and development builds where durable storage is not
//! wanted.

use async_trait::async_trait;
use tokio::sync::RwLock;

use jot_core::error::Result;
use jot_core::task::{Task, TaskStore};

/// Task store that persists nothing beyond the process lifetime.
#[derive(Default)]
pub struct MemoryTaskStore {
    tasks: RwLock<Vec<Task>>,
}

impl MemoryTaskStore {
    /// Creates a new, empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with a collection.
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks: RwLock::new(tasks),
        }
    }
}

#[async_trait]
impl TaskStore for MemoryTaskStore {
    async fn load(&self) -> Vec<Task> {
        self.tasks.read().await.clone()
    }

    async fn save(&self, tasks: &[Task]) -> Result<()> {
        *self.tasks.write().await = tasks.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jot_core::task::TaskFields;

    #[tokio::test]
    async fn test_new_store_is_empty() {
        let store = MemoryTaskStore::new();
        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let store = MemoryTaskStore::new();
        let tasks = vec![Task::create(
            TaskFields::new("Buy milk", "2%, 1 gallon").unwrap(),
            1_000,
        )];

        store.save(&tasks).await.unwrap();

        assert_eq!(store.load().await, tasks);
    }
}
