//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime
//! executes. They represent I/O and task spawning only; the reducer
//! itself never performs I/O.

use tokio_util::sync::CancellationToken;
use vitrine_core::api::NewProduct;

use crate::common::{TaskId, TaskKind};

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Fetch the product list.
    FetchProducts { task: Option<TaskId> },

    /// Delete a product by id, then refetch.
    DeleteProduct { task: Option<TaskId>, id: String },

    /// Create a product from an already-validated payload.
    SubmitProduct {
        task: Option<TaskId>,
        product: NewProduct,
    },

    /// Verify credentials against the API.
    SubmitLogin {
        task: Option<TaskId>,
        username: String,
        password: String,
    },

    /// Register a new account.
    SubmitRegister {
        task: Option<TaskId>,
        username: String,
        password: String,
    },

    /// Persist the username to the session store.
    SaveSession { username: String },

    /// Remove the persisted session (logout).
    ClearSession,

    /// Cancel an in-progress task (view teardown, Esc).
    CancelTask {
        kind: TaskKind,
        token: Option<CancellationToken>,
    },
}
