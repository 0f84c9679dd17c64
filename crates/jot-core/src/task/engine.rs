//! Task state-transition engine.
//!
//! The engine is a pure function over the task collection: command in, new
//! collection out. It never touches storage and never reads a clock; the
//! caller samples the current time and passes it in, which keeps every
//! transition deterministic and unit-testable in isolation.

use super::model::{Task, TaskFields};

/// A state-transition command over the task collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskCommand {
    /// Replaces the entire collection verbatim. Used exactly once, at
    /// startup, to load persisted state. No validation is re-applied; the
    /// list was validated when it was written.
    Hydrate(Vec<Task>),
    /// Appends a new task built from validated fields.
    Add(TaskFields),
    /// Replaces name/description of the matching task. Unknown ids are a
    /// silent no-op.
    Update { id: String, fields: TaskFields },
    /// Flips the completion flag of the matching task. Unknown ids are a
    /// silent no-op.
    Toggle(String),
    /// Removes the matching task, preserving the order of the remainder.
    /// Unknown ids are a silent no-op.
    Delete(String),
}

/// Applies a command to the collection, returning the new collection.
///
/// All transitions are total: they never panic and never error. Unknown-id
/// update/toggle/delete are defined as no-ops, so callers can rely on
/// idempotent semantics. Insertion order is preserved throughout; `Add`
/// appends at the end and nothing ever reorders existing tasks.
///
/// `now_ms` is the timestamp recorded on the touched task (`created_at` and
/// `updated_at` for `Add`, `updated_at` for `Update`/`Toggle`).
pub fn apply(tasks: Vec<Task>, command: TaskCommand, now_ms: i64) -> Vec<Task> {
    match command {
        TaskCommand::Hydrate(list) => list,
        TaskCommand::Add(fields) => {
            let mut tasks = tasks;
            tasks.push(Task::create(fields, now_ms));
            tasks
        }
        TaskCommand::Update { id, fields } => tasks
            .into_iter()
            .map(|task| {
                if task.id == id {
                    let (name, description) = fields.clone().into_parts();
                    Task {
                        name,
                        description,
                        updated_at: now_ms,
                        ..task
                    }
                } else {
                    task
                }
            })
            .collect(),
        TaskCommand::Toggle(id) => tasks
            .into_iter()
            .map(|task| {
                if task.id == id {
                    Task {
                        completed: !task.completed,
                        updated_at: now_ms,
                        ..task
                    }
                } else {
                    task
                }
            })
            .collect(),
        TaskCommand::Delete(id) => tasks.into_iter().filter(|task| task.id != id).collect(),
    }
}
