//! Task domain module.
//!
//! This module contains the task domain model, the state-transition engine
//! that owns every mutation of the task collection, the view projection used
//! for display, and the repository interface for persistence.
//!
//! # Module Structure
//!
//! - `model`: Core task domain models (`Task`, `TaskFields`)
//! - `engine`: The pure state-transition function (`TaskCommand`, `apply`)
//! - `view`: Filter/search projection and derived counters
//! - `repository`: Task store trait for persistence

pub mod engine;
mod model;
pub mod repository;
pub mod view;

// Re-export public API
pub use engine::{TaskCommand, apply};
pub use model::{Task, TaskFields};
pub use repository::TaskStore;
pub use view::{TaskCounts, TaskFilter, counts, project};
