//! Auth feature reducer.
//!
//! Key handling for the login/register forms and their result handlers.
//! A successful login writes the session store, flips the in-memory
//! authenticated flag, and redirects to the product list. Registration
//! never logs the user in; it hands off to the login form.

use crossterm::event::{KeyCode, KeyEvent};
use vitrine_core::api::ApiError;

use crate::effects::UiEffect;
use crate::state::{Notice, Route, TuiState, navigate};

/// Which auth form a key event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

/// Handles a key event while an auth form is active.
pub fn handle_key(state: &mut TuiState, mode: AuthMode, key: KeyEvent) -> Vec<UiEffect> {
    let form = match mode {
        AuthMode::Login => &mut state.login,
        AuthMode::Register => &mut state.register,
    };

    if form.submitting {
        return vec![];
    }

    match key.code {
        KeyCode::Esc => navigate(state, Route::Products),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Down | KeyCode::Up => {
            form.focus = form.focus.toggle();
            vec![]
        }
        KeyCode::Enter => submit(state, mode),
        KeyCode::Char(c) => {
            form.focused_field_mut().insert(c);
            vec![]
        }
        KeyCode::Backspace => {
            form.focused_field_mut().backspace();
            vec![]
        }
        KeyCode::Left => {
            form.focused_field_mut().move_left();
            vec![]
        }
        KeyCode::Right => {
            form.focused_field_mut().move_right();
            vec![]
        }
        _ => vec![],
    }
}

fn submit(state: &mut TuiState, mode: AuthMode) -> Vec<UiEffect> {
    let task = state.task_seq.next_id();
    let form = match mode {
        AuthMode::Login => &mut state.login,
        AuthMode::Register => &mut state.register,
    };

    let username = form.username.text().trim().to_string();
    let password = form.password.text().to_string();
    if username.is_empty() || password.is_empty() {
        form.error = Some("Username and password are required".to_string());
        return vec![];
    }

    form.error = None;
    form.submitting = true;

    match mode {
        AuthMode::Login => vec![UiEffect::SubmitLogin {
            task: Some(task),
            username,
            password,
        }],
        AuthMode::Register => vec![UiEffect::SubmitRegister {
            task: Some(task),
            username,
            password,
        }],
    }
}

/// Applies the login result.
///
/// On success the session is persisted and the authenticated flag flips
/// immediately, independent of any pending fetch.
pub fn handle_login_result(
    state: &mut TuiState,
    username: String,
    result: Result<(), ApiError>,
) -> Vec<UiEffect> {
    state.login.submitting = false;
    match result {
        Ok(()) => {
            state.session.authenticated = true;
            state.session.username = Some(username.clone());
            let mut effects = vec![UiEffect::SaveSession {
                username: username.clone(),
            }];
            effects.extend(navigate(state, Route::Products));
            state.notice = Some(Notice::info(format!("Welcome, {username}")));
            effects
        }
        Err(err) => {
            state.login.error = Some(err.message);
            vec![]
        }
    }
}

/// Applies the registration result.
pub fn handle_register_result(state: &mut TuiState, result: Result<(), ApiError>) -> Vec<UiEffect> {
    state.register.submitting = false;
    match result {
        Ok(()) => {
            let effects = navigate(state, Route::Login);
            state.notice = Some(Notice::info("Registration successful. Please log in."));
            effects
        }
        Err(err) => {
            state.register.error = Some(err.message);
            vec![]
        }
    }
}
