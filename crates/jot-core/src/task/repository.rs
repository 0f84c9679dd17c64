//! Task store trait.
//!
//! Defines the interface for task collection persistence.

use async_trait::async_trait;

use super::model::Task;
use crate::error::Result;

/// An abstract store for the persisted task collection.
///
/// The collection is persisted as a whole: the caller always hands over the
/// full, current list, decoupling the application's core logic from the
/// specific storage mechanism (JSON file, in-memory store for tests, etc.).
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Loads the persisted collection.
    ///
    /// This never fails: a missing value, a malformed/unparseable value, or
    /// an unavailable store all yield an empty list. Implementations log the
    /// reason instead of surfacing it.
    async fn load(&self) -> Vec<Task>;

    /// Persists the full collection, replacing whatever was stored before.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: Collection written durably
    /// - `Err(_)`: The write failed; the caller decides whether to surface
    ///   or swallow the failure
    async fn save(&self, tasks: &[Task]) -> Result<()>;
}
