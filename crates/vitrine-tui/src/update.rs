//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects. This is the single source of truth
//! for how events modify state.

use crossterm::event::{Event, KeyEvent, KeyEventKind, KeyModifiers};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::auth::update::AuthMode;
use crate::features::{auth, product_form, products};
use crate::state::{AppState, Notice, Route, TuiState};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns
/// effects for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.tui.spinner_frame = app.tui.spinner_frame.wrapping_add(1);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(&mut app.tui, &term_event),

        UiEvent::TaskStarted { kind, started } => {
            app.tui.tasks.state_mut(kind).on_started(&started);
            vec![]
        }
        UiEvent::TaskCompleted { kind, completed } => {
            // A completion for a superseded task id is dropped whole, so a
            // late response never updates a view that moved on.
            let ok = app.tui.tasks.state_mut(kind).finish_if_active(completed.id);
            if ok {
                update(app, *completed.result)
            } else {
                vec![]
            }
        }
        UiEvent::TaskCancelled => vec![],

        UiEvent::ProductsLoaded(result) => {
            products::update::handle_loaded(&mut app.tui, result);
            vec![]
        }
        UiEvent::ProductDeleted(result) => products::update::handle_deleted(&mut app.tui, result),
        UiEvent::ProductCreated(result) => {
            product_form::update::handle_created(&mut app.tui, result)
        }
        UiEvent::LoginResult { username, result } => {
            auth::update::handle_login_result(&mut app.tui, username, result)
        }
        UiEvent::RegisterResult(result) => {
            auth::update::handle_register_result(&mut app.tui, result)
        }
    }
}

/// Effects to run once at startup: the fetch-on-mount for the product
/// list the app opens on.
pub fn startup_effects(state: &mut TuiState) -> Vec<UiEffect> {
    let task = state.task_seq.next_id();
    vec![UiEffect::FetchProducts { task: Some(task) }]
}

/// Logs out: clears the persisted session and flips the in-memory flag.
/// No server-side invalidation call exists.
pub fn logout(state: &mut TuiState) -> Vec<UiEffect> {
    state.session.authenticated = false;
    state.session.username = None;
    state.notice = Some(Notice::info("Logged out."));
    vec![UiEffect::ClearSession]
}

fn handle_terminal_event(state: &mut TuiState, event: &Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(state, *key),
        _ => vec![],
    }
}

fn handle_key(state: &mut TuiState, key: KeyEvent) -> Vec<UiEffect> {
    // Ctrl+C quits from anywhere.
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && key.code == crossterm::event::KeyCode::Char('c')
    {
        return vec![UiEffect::Quit];
    }

    // Dark mode is display-only; toggling it must not touch session or
    // product state. Bound outside the forms so typing stays unaffected.
    if state.route == Route::Products && key.code == crossterm::event::KeyCode::Char('t') {
        state.dark_mode = !state.dark_mode;
        return vec![];
    }

    match state.route {
        Route::Products => products::update::handle_key(state, key),
        Route::AddProduct => product_form::update::handle_key(state, key),
        Route::Login => auth::update::handle_key(state, AuthMode::Login, key),
        Route::Register => auth::update::handle_key(state, AuthMode::Register, key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use vitrine_core::api::{ApiError, ApiErrorKind, Product, ShopClient};

    use crate::common::{TaskCompleted, TaskKind, TaskStarted};
    use crate::features::products::ListPhase;
    use crate::state::{NoticeLevel, navigate};

    fn app(stored_username: Option<&str>) -> AppState {
        AppState::new(
            ShopClient::with_base_url("http://127.0.0.1:1"),
            stored_username.map(str::to_string),
            true,
        )
    }

    fn key(code: KeyCode) -> UiEvent {
        UiEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn product(id: &str, name: &str, price: f64) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            price,
            description: String::new(),
        }
    }

    fn server_error() -> ApiError {
        ApiError::new(ApiErrorKind::Server, "boom")
    }

    #[test]
    fn test_stored_session_authenticates_at_startup() {
        let app = app(Some("alice"));
        assert!(app.tui.session.authenticated);
        assert_eq!(app.tui.session.username.as_deref(), Some("alice"));

        let app = self::app(None);
        assert!(!app.tui.session.authenticated);
    }

    #[test]
    fn test_list_failure_renders_empty_without_panic() {
        let mut app = app(None);
        let effects = update(&mut app, UiEvent::ProductsLoaded(Err(server_error())));
        assert!(effects.is_empty());
        assert!(app.tui.products.products.is_empty());
        assert_eq!(app.tui.products.phase, ListPhase::Idle);
        let notice = app.tui.notice.as_ref().unwrap();
        assert_eq!(notice.level, NoticeLevel::Error);
    }

    #[test]
    fn test_delete_refetches_even_on_failure() {
        let mut app = app(Some("alice"));
        update(
            &mut app,
            UiEvent::ProductsLoaded(Ok(vec![product("1", "Mug", 9.99)])),
        );

        let effects = update(&mut app, UiEvent::ProductDeleted(Err(server_error())));
        assert!(matches!(effects[..], [UiEffect::FetchProducts { .. }]));
        assert!(app.tui.notice.is_some());

        let effects = update(&mut app, UiEvent::ProductDeleted(Ok(())));
        assert!(matches!(effects[..], [UiEffect::FetchProducts { .. }]));
    }

    #[test]
    fn test_delete_key_requires_authentication() {
        let mut app = app(None);
        update(
            &mut app,
            UiEvent::ProductsLoaded(Ok(vec![product("1", "Mug", 9.99)])),
        );
        let effects = update(&mut app, key(KeyCode::Char('d')));
        assert!(effects.is_empty());
        assert_eq!(app.tui.products.phase, ListPhase::Idle);
    }

    #[test]
    fn test_delete_key_mutates_and_emits_effect() {
        let mut app = app(Some("alice"));
        update(
            &mut app,
            UiEvent::ProductsLoaded(Ok(vec![product("1", "Mug", 9.99)])),
        );
        let effects = update(&mut app, key(KeyCode::Char('d')));
        match &effects[..] {
            [UiEffect::DeleteProduct { id, .. }] => assert_eq!(id, "1"),
            other => panic!("unexpected effects: {other:?}"),
        }
        assert_eq!(app.tui.products.phase, ListPhase::Mutating);
    }

    #[test]
    fn test_add_product_route_guarded() {
        // Unauthenticated: any attempt lands on Login.
        let mut app = app(None);
        let effects = navigate(&mut app.tui, Route::AddProduct);
        assert_eq!(app.tui.route, Route::Login);
        assert!(effects.is_empty());

        // From another route as well.
        app.tui.route = Route::Register;
        navigate(&mut app.tui, Route::AddProduct);
        assert_eq!(app.tui.route, Route::Login);

        // Authenticated: allowed.
        let mut app = self::app(Some("alice"));
        navigate(&mut app.tui, Route::AddProduct);
        assert_eq!(app.tui.route, Route::AddProduct);
    }

    #[test]
    fn test_login_flips_flag_and_persists_session() {
        let mut app = app(None);
        app.tui.route = Route::Login;

        let effects = update(
            &mut app,
            UiEvent::LoginResult {
                username: "alice".to_string(),
                result: Ok(()),
            },
        );

        assert!(app.tui.session.authenticated);
        assert_eq!(app.tui.session.username.as_deref(), Some("alice"));
        assert_eq!(app.tui.route, Route::Products);
        assert!(
            effects
                .iter()
                .any(|e| matches!(e, UiEffect::SaveSession { username } if username == "alice"))
        );
        // Redirect to the list triggers the mount fetch.
        assert!(
            effects
                .iter()
                .any(|e| matches!(e, UiEffect::FetchProducts { .. }))
        );
    }

    #[test]
    fn test_failed_login_stays_unauthenticated() {
        let mut app = app(None);
        app.tui.route = Route::Login;
        let effects = update(
            &mut app,
            UiEvent::LoginResult {
                username: "alice".to_string(),
                result: Err(ApiError::new(ApiErrorKind::Server, "Invalid credentials")),
            },
        );
        assert!(effects.is_empty());
        assert!(!app.tui.session.authenticated);
        assert_eq!(
            app.tui.login.error.as_deref(),
            Some("Invalid credentials")
        );
    }

    #[test]
    fn test_logout_clears_session_immediately() {
        let mut app = app(Some("alice"));
        let effects = update(&mut app, key(KeyCode::Char('o')));
        assert!(!app.tui.session.authenticated);
        assert!(app.tui.session.username.is_none());
        assert!(matches!(effects[..], [UiEffect::ClearSession]));
    }

    #[test]
    fn test_register_success_redirects_to_login() {
        let mut app = app(None);
        app.tui.route = Route::Register;
        update(&mut app, UiEvent::RegisterResult(Ok(())));
        assert_eq!(app.tui.route, Route::Login);
        assert!(!app.tui.session.authenticated);
    }

    #[test]
    fn test_dark_mode_toggle_touches_nothing_else() {
        let mut app = app(Some("alice"));
        update(
            &mut app,
            UiEvent::ProductsLoaded(Ok(vec![product("1", "Mug", 9.99)])),
        );
        assert!(app.tui.dark_mode);

        update(&mut app, key(KeyCode::Char('t')));
        assert!(!app.tui.dark_mode);
        assert!(app.tui.session.authenticated);
        assert_eq!(app.tui.products.products.len(), 1);

        update(&mut app, key(KeyCode::Char('t')));
        assert!(app.tui.dark_mode);
    }

    #[test]
    fn test_stale_task_completion_is_discarded() {
        let mut app = app(None);

        // First fetch starts, then the view moves on (new fetch).
        let stale = app.tui.task_seq.next_id();
        update(
            &mut app,
            UiEvent::TaskStarted {
                kind: TaskKind::ProductList,
                started: TaskStarted {
                    id: stale,
                    cancel: None,
                },
            },
        );
        let fresh = app.tui.task_seq.next_id();
        update(
            &mut app,
            UiEvent::TaskStarted {
                kind: TaskKind::ProductList,
                started: TaskStarted {
                    id: fresh,
                    cancel: None,
                },
            },
        );

        // Stale result arrives late and must not touch state.
        let effects = update(
            &mut app,
            UiEvent::TaskCompleted {
                kind: TaskKind::ProductList,
                completed: TaskCompleted {
                    id: stale,
                    result: Box::new(UiEvent::ProductsLoaded(Ok(vec![product(
                        "zombie", "Old", 1.0,
                    )]))),
                },
            },
        );
        assert!(effects.is_empty());
        assert!(app.tui.products.products.is_empty());

        // Fresh result applies.
        update(
            &mut app,
            UiEvent::TaskCompleted {
                kind: TaskKind::ProductList,
                completed: TaskCompleted {
                    id: fresh,
                    result: Box::new(UiEvent::ProductsLoaded(Ok(vec![product(
                        "1", "Mug", 9.99,
                    )]))),
                },
            },
        );
        assert_eq!(app.tui.products.products.len(), 1);
    }

    #[test]
    fn test_form_submit_validates_price_before_any_request() {
        let mut app = app(Some("alice"));
        navigate(&mut app.tui, Route::AddProduct);

        for c in "Mug".chars() {
            update(&mut app, key(KeyCode::Char(c)));
        }
        update(&mut app, key(KeyCode::Tab));
        for c in "abc".chars() {
            update(&mut app, key(KeyCode::Char(c)));
        }

        let effects = update(&mut app, key(KeyCode::Enter));
        assert!(effects.is_empty());
        assert!(app.tui.product_form.error.as_deref().unwrap().contains("Invalid price"));
        assert!(!app.tui.product_form.submitting);
    }

    #[test]
    fn test_form_submit_emits_parsed_decimal() {
        let mut app = app(Some("alice"));
        navigate(&mut app.tui, Route::AddProduct);

        for c in "Mug".chars() {
            update(&mut app, key(KeyCode::Char(c)));
        }
        update(&mut app, key(KeyCode::Tab));
        for c in "19.99".chars() {
            update(&mut app, key(KeyCode::Char(c)));
        }

        let effects = update(&mut app, key(KeyCode::Enter));
        match &effects[..] {
            [UiEffect::SubmitProduct { product, .. }] => {
                assert_eq!(product.name, "Mug");
                assert_eq!(product.price, 19.99);
            }
            other => panic!("unexpected effects: {other:?}"),
        }
        assert!(app.tui.product_form.submitting);
    }

    #[test]
    fn test_create_failure_shows_generic_banner() {
        let mut app = app(Some("alice"));
        navigate(&mut app.tui, Route::AddProduct);
        app.tui.product_form.submitting = true;

        update(&mut app, UiEvent::ProductCreated(Err(server_error())));
        assert_eq!(
            app.tui.product_form.error.as_deref(),
            Some("Failed to add product. Please try again.")
        );
        assert_eq!(app.tui.route, Route::AddProduct);
    }

    #[test]
    fn test_create_success_returns_to_products() {
        let mut app = app(Some("alice"));
        navigate(&mut app.tui, Route::AddProduct);
        app.tui.product_form.submitting = true;

        let effects = update(&mut app, UiEvent::ProductCreated(Ok(())));
        assert_eq!(app.tui.route, Route::Products);
        assert!(
            effects
                .iter()
                .any(|e| matches!(e, UiEffect::FetchProducts { .. }))
        );
    }

    #[test]
    fn test_leaving_products_cancels_inflight_fetch() {
        let mut app = app(None);
        let id = app.tui.task_seq.next_id();
        update(
            &mut app,
            UiEvent::TaskStarted {
                kind: TaskKind::ProductList,
                started: TaskStarted { id, cancel: None },
            },
        );

        let effects = navigate(&mut app.tui, Route::Login);
        assert!(
            effects
                .iter()
                .any(|e| matches!(e, UiEffect::CancelTask { kind: TaskKind::ProductList, .. }))
        );
        assert!(!app.tui.tasks.product_list.is_running());
    }
}
