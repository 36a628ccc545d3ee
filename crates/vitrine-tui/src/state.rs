//! Application state composition.
//!
//! Top-level state hierarchy for the TUI:
//!
//! ```text
//! AppState
//! └── tui: TuiState
//!     ├── route: Route            (active view, guarded navigation)
//!     ├── session: SessionState   (authenticated flag + username)
//!     ├── products: ProductsState (list, phase, selection)
//!     ├── product_form            (add-product form)
//!     ├── login / register        (auth forms)
//!     ├── tasks: Tasks            (async task lifecycle)
//!     └── notice: Option<Notice>  (status banner)
//! ```
//!
//! The reducer in `update.rs` is the single writer for everything here;
//! the runtime and render functions only read.

use vitrine_core::api::ShopClient;

use crate::common::{TaskKind, TaskSeq, Tasks};
use crate::effects::UiEffect;
use crate::features::auth::AuthFormState;
use crate::features::product_form::ProductFormState;
use crate::features::products::{ListPhase, ProductsState};

/// Navigable views. The allowed set is a pure function of the
/// authenticated flag (see [`navigate`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Products,
    AddProduct,
    Login,
    Register,
}

/// Client-asserted identity, derived from the session store at startup.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub authenticated: bool,
    pub username: Option<String>,
}

impl SessionState {
    pub fn from_stored(username: Option<String>) -> Self {
        Self {
            authenticated: username.is_some(),
            username,
        }
    }
}

/// Severity of a status banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// Transient user-visible message shown in the status line.
#[derive(Debug, Clone)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Combined application state for the TUI.
pub struct AppState {
    pub tui: TuiState,
}

impl AppState {
    pub fn new(client: ShopClient, stored_username: Option<String>, dark_mode: bool) -> Self {
        Self {
            tui: TuiState::new(client, stored_username, dark_mode),
        }
    }
}

/// TUI application state.
pub struct TuiState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// Active view.
    pub route: Route,
    /// Authenticated flag + username (single writer: the reducer).
    pub session: SessionState,
    /// Display-only dark mode flag. Never persisted.
    pub dark_mode: bool,
    /// Product list view state.
    pub products: ProductsState,
    /// Add-product form state.
    pub product_form: ProductFormState,
    /// Login form state.
    pub login: AuthFormState,
    /// Registration form state.
    pub register: AuthFormState,
    /// Task id sequence for async operations.
    pub task_seq: TaskSeq,
    /// Task lifecycle state for async operations.
    pub tasks: Tasks,
    /// Status banner (replaced on each new outcome).
    pub notice: Option<Notice>,
    /// Shop API client, shared with spawned tasks.
    pub client: ShopClient,
    /// Spinner animation frame counter.
    pub spinner_frame: usize,
}

impl TuiState {
    pub fn new(client: ShopClient, stored_username: Option<String>, dark_mode: bool) -> Self {
        Self {
            should_quit: false,
            route: Route::Products,
            session: SessionState::from_stored(stored_username),
            dark_mode,
            products: ProductsState::default(),
            product_form: ProductFormState::default(),
            login: AuthFormState::default(),
            register: AuthFormState::default(),
            task_seq: TaskSeq::default(),
            tasks: Tasks::default(),
            notice: None,
            client,
            spinner_frame: 0,
        }
    }
}

/// Changes the active route, enforcing the guard.
///
/// The add-product route is permitted only when authenticated; any other
/// attempt lands on the login form instead (no deep-link preservation).
/// Leaving the products view cancels its in-flight fetch; entering it
/// starts a fresh one.
pub fn navigate(state: &mut TuiState, route: Route) -> Vec<UiEffect> {
    let target = if route == Route::AddProduct && !state.session.authenticated {
        Route::Login
    } else {
        route
    };

    if target == state.route {
        return vec![];
    }

    let mut effects = Vec::new();

    // Cancel whatever the view being left still has in flight.
    if state.route == Route::Products && state.tasks.product_list.is_running() {
        effects.push(UiEffect::CancelTask {
            kind: TaskKind::ProductList,
            token: state.tasks.product_list.cancel.clone(),
        });
        state.tasks.product_list.clear();
    }

    state.notice = None;
    state.route = target;

    match target {
        Route::Products => {
            state.products.phase = ListPhase::Loading;
            let task = state.task_seq.next_id();
            effects.push(UiEffect::FetchProducts { task: Some(task) });
        }
        Route::AddProduct => state.product_form.reset(),
        Route::Login => state.login.reset(),
        Route::Register => state.register.reset(),
    }

    effects
}
