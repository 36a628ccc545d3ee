//! Shared TUI building blocks.

pub mod form;
pub mod task;

pub use form::TextField;
pub use task::{TaskCompleted, TaskId, TaskKind, TaskSeq, TaskStarted, TaskState, Tasks};
