//! Task view projection.
//!
//! Pure, recomputable derivations over the canonical collection: the
//! filtered/searched sequence shown in the list view, and the counters shown
//! next to it. Nothing here mutates state or caches results.

use serde::{Deserialize, Serialize};

use super::model::Task;

/// Completion filter for the task list view.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskFilter {
    /// Show every task (default)
    All,
    /// Show only uncompleted tasks
    Active,
    /// Show only completed tasks
    Completed,
}

impl Default for TaskFilter {
    fn default() -> Self {
        Self::All
    }
}

impl TaskFilter {
    fn accepts(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.completed,
            Self::Completed => task.completed,
        }
    }
}

/// Derived counters over the canonical collection.
///
/// Computed from the full collection, not the filtered view, so
/// `completed <= total` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskCounts {
    pub total: usize,
    pub completed: usize,
}

/// Projects the visible subsequence of the collection.
///
/// Filter and search compose by logical AND. Search text is trimmed and, when
/// non-empty, matched case-insensitively as a substring against name or
/// description; whitespace-only search applies no filtering. The returned
/// iterator borrows the collection, preserves its order, and can be rebuilt
/// on every state change.
pub fn project<'a>(
    tasks: &'a [Task],
    filter: TaskFilter,
    search: &str,
) -> impl Iterator<Item = &'a Task> {
    let needle = search.trim().to_lowercase();
    tasks
        .iter()
        .filter(move |task| filter.accepts(task) && (needle.is_empty() || matches_search(task, &needle)))
}

/// Counts total and completed tasks in the canonical collection.
pub fn counts(tasks: &[Task]) -> TaskCounts {
    TaskCounts {
        total: tasks.len(),
        completed: tasks.iter().filter(|task| task.completed).count(),
    }
}

fn matches_search(task: &Task, needle: &str) -> bool {
    task.name.to_lowercase().contains(needle) || task.description.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::engine::{TaskCommand, apply};
    use crate::task::model::TaskFields;

    fn board() -> Vec<Task> {
        let mut tasks = Vec::new();
        for (name, description) in [
            ("Buy milk", "2%, 1 gallon"),
            ("Buy bread", "whole wheat"),
            ("Walk dog", "around the block"),
        ] {
            tasks = apply(
                tasks,
                TaskCommand::Add(TaskFields::new(name, description).unwrap()),
                1_000,
            );
        }
        // Complete the middle task
        let id = tasks[1].id.clone();
        apply(tasks, TaskCommand::Toggle(id), 2_000)
    }

    #[test]
    fn test_filter_all_is_identity() {
        let tasks = board();
        let visible: Vec<_> = project(&tasks, TaskFilter::All, "").collect();

        assert_eq!(visible.len(), tasks.len());
        // Order preserved
        let names: Vec<_> = visible.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["Buy milk", "Buy bread", "Walk dog"]);
    }

    #[test]
    fn test_filter_active_excludes_completed() {
        let tasks = board();
        let visible: Vec<_> = project(&tasks, TaskFilter::Active, "").collect();

        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|t| !t.completed));
    }

    #[test]
    fn test_filter_completed_excludes_active() {
        let tasks = board();
        let visible: Vec<_> = project(&tasks, TaskFilter::Completed, "").collect();

        assert_eq!(visible.len(), 1);
        assert!(visible.iter().all(|t| t.completed));
        assert_eq!(visible[0].name, "Buy bread");
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let tasks = board();

        let visible: Vec<_> = project(&tasks, TaskFilter::All, "BREAD").collect();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Buy bread");

        // Matches against the description as well
        let visible: Vec<_> = project(&tasks, TaskFilter::All, "Gallon").collect();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Buy milk");
    }

    #[test]
    fn test_whitespace_search_applies_no_filter() {
        let tasks = board();
        let visible: Vec<_> = project(&tasks, TaskFilter::All, "   \t").collect();
        assert_eq!(visible.len(), tasks.len());
    }

    #[test]
    fn test_filter_and_search_compose() {
        let tasks = board();

        // "buy" matches two tasks, but only one of them is still active
        let visible: Vec<_> = project(&tasks, TaskFilter::Active, "buy").collect();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Buy milk");
    }

    #[test]
    fn test_projection_is_restartable() {
        let tasks = board();
        let first: Vec<_> = project(&tasks, TaskFilter::Active, "buy").collect();
        let second: Vec<_> = project(&tasks, TaskFilter::Active, "buy").collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_counts_cover_full_collection() {
        let tasks = board();
        let counts = counts(&tasks);

        assert_eq!(counts.total, 3);
        assert_eq!(counts.completed, 1);
        assert!(counts.completed <= counts.total);
    }

    #[test]
    fn test_counts_empty_collection() {
        let counts = counts(&[]);
        assert_eq!(counts.total, 0);
        assert_eq!(counts.completed, 0);
    }
}
