//! UI event types.
//!
//! Events are inputs to the reducer: terminal input, the frame tick, the
//! async task lifecycle, and typed results from completed API calls.

use crossterm::event::Event;
use vitrine_core::api::{ApiError, Product};

use crate::common::{TaskCompleted, TaskKind, TaskStarted};

/// Events consumed by the reducer.
#[derive(Debug)]
pub enum UiEvent {
    /// Periodic tick (spinner advance, render cadence).
    Tick,
    /// Raw terminal input.
    Terminal(Event),

    /// An async task was spawned.
    TaskStarted { kind: TaskKind, started: TaskStarted },
    /// An async task finished; `completed.result` is re-dispatched only if
    /// the task is still the active one for its kind.
    TaskCompleted {
        kind: TaskKind,
        completed: TaskCompleted,
    },
    /// An async task observed its cancellation token. Discarded.
    TaskCancelled,

    /// Product list fetch finished.
    ProductsLoaded(Result<Vec<Product>, ApiError>),
    /// Product delete finished (the list refetches either way).
    ProductDeleted(Result<(), ApiError>),
    /// Product creation finished.
    ProductCreated(Result<(), ApiError>),
    /// Login attempt finished.
    LoginResult {
        username: String,
        result: Result<(), ApiError>,
    },
    /// Registration attempt finished.
    RegisterResult(Result<(), ApiError>),
}
