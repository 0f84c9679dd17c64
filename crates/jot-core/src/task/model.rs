//! Task domain model.
//!
//! This module contains the core Task entity and the validated input value
//! object that guards every create/edit operation in the application's
//! domain layer.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{JotError, Result};

/// A single to-do item.
///
/// This is the "pure" domain model that business logic operates on,
/// independent of any specific storage format. Serialized field names are
/// camelCase to match the persisted record layout.
///
/// # Invariants
///
/// - `id` is unique within a collection and never changes after creation
/// - `name` and `description` are trimmed and non-empty (enforced by
///   [`TaskFields`] before a task can be constructed)
/// - `updated_at >= created_at` at all times
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique task identifier (UUID format)
    pub id: String,
    /// Short task name
    pub name: String,
    /// Longer free-form description
    pub description: String,
    /// Whether the task has been completed
    pub completed: bool,
    /// Timestamp when the task was created (epoch milliseconds)
    pub created_at: i64,
    /// Timestamp when the task was last updated (epoch milliseconds)
    pub updated_at: i64,
}

impl Task {
    /// Creates a new task from validated fields.
    ///
    /// The task gets a freshly generated UUID, starts uncompleted, and has
    /// both timestamps set to `now_ms`.
    pub fn create(fields: TaskFields, now_ms: i64) -> Self {
        let (name, description) = fields.into_parts();
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            description,
            completed: false,
            created_at: now_ms,
            updated_at: now_ms,
        }
    }
}

/// Validated name/description pair for creating or editing a task.
///
/// Construction is the validation step: `TaskFields::new` trims both inputs
/// and rejects empty or whitespace-only values, so un-validated text cannot
/// reach the state engine. The fields are private on purpose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFields {
    name: String,
    description: String,
}

impl TaskFields {
    /// Validates and normalizes task input.
    ///
    /// # Returns
    ///
    /// - `Ok(TaskFields)`: Both fields are non-empty after trimming
    /// - `Err(JotError::Validation)`: The named field was empty or
    ///   whitespace-only
    pub fn new(name: &str, description: &str) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(JotError::validation("name"));
        }

        let description = description.trim();
        if description.is_empty() {
            return Err(JotError::validation("description"));
        }

        Ok(Self {
            name: name.to_string(),
            description: description.to_string(),
        })
    }

    /// Returns the trimmed task name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the trimmed task description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Consumes the fields, returning `(name, description)`.
    pub fn into_parts(self) -> (String, String) {
        (self.name, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_trim_whitespace() {
        let fields = TaskFields::new("  Buy milk  ", "\t2%, 1 gallon\n").unwrap();
        assert_eq!(fields.name(), "Buy milk");
        assert_eq!(fields.description(), "2%, 1 gallon");
    }

    #[test]
    fn test_fields_reject_empty_name() {
        let err = TaskFields::new("   ", "something").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Validation error: name must not be empty");
    }

    #[test]
    fn test_fields_reject_empty_description() {
        let err = TaskFields::new("something", "").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_create_sets_defaults() {
        let fields = TaskFields::new("Buy milk", "2%, 1 gallon").unwrap();
        let task = Task::create(fields, 1_700_000_000_000);

        assert!(!task.id.is_empty());
        assert!(!task.completed);
        assert_eq!(task.created_at, 1_700_000_000_000);
        assert_eq!(task.updated_at, task.created_at);
    }

    #[test]
    fn test_create_generates_unique_ids() {
        let a = Task::create(TaskFields::new("a", "a").unwrap(), 0);
        let b = Task::create(TaskFields::new("b", "b").unwrap(), 0);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_serialized_field_names_are_camel_case() {
        let task = Task::create(TaskFields::new("Buy milk", "2%, 1 gallon").unwrap(), 42);
        let json = serde_json::to_value(&task).unwrap();

        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert_eq!(json.get("completed"), Some(&serde_json::Value::Bool(false)));
    }
}
