//! Add-product form reducer.

use crossterm::event::{KeyCode, KeyEvent};
use vitrine_core::api::{ApiError, ApiErrorKind, NewProduct, parse_price};

use crate::effects::UiEffect;
use crate::state::{Notice, Route, TuiState, navigate};

/// Generic banner for server-side creation failures, matching the policy
/// of one message with no detail or retry affordance.
const CREATE_FAILED_MESSAGE: &str = "Failed to add product. Please try again.";

/// Handles a key event while the add-product form is active.
pub fn handle_key(state: &mut TuiState, key: KeyEvent) -> Vec<UiEffect> {
    if state.product_form.submitting {
        // Only Esc is honored mid-submit; it abandons the form but does
        // not abort the request (the result lands on a stale task id).
        if key.code == KeyCode::Esc {
            state.tasks.product_create.clear();
            return navigate(state, Route::Products);
        }
        return vec![];
    }

    match key.code {
        KeyCode::Esc => navigate(state, Route::Products),
        KeyCode::Tab | KeyCode::Down => {
            state.product_form.focus = state.product_form.focus.next();
            vec![]
        }
        KeyCode::BackTab | KeyCode::Up => {
            state.product_form.focus = state.product_form.focus.prev();
            vec![]
        }
        KeyCode::Enter => submit(state),
        KeyCode::Char(c) => {
            state.product_form.focused_field_mut().insert(c);
            vec![]
        }
        KeyCode::Backspace => {
            state.product_form.focused_field_mut().backspace();
            vec![]
        }
        KeyCode::Delete => {
            state.product_form.focused_field_mut().delete();
            vec![]
        }
        KeyCode::Left => {
            state.product_form.focused_field_mut().move_left();
            vec![]
        }
        KeyCode::Right => {
            state.product_form.focused_field_mut().move_right();
            vec![]
        }
        KeyCode::Home => {
            state.product_form.focused_field_mut().move_home();
            vec![]
        }
        KeyCode::End => {
            state.product_form.focused_field_mut().move_end();
            vec![]
        }
        _ => vec![],
    }
}

/// Validates the form and emits the create effect.
///
/// Price text is parsed here so the wire always carries a decimal.
fn submit(state: &mut TuiState) -> Vec<UiEffect> {
    let form = &mut state.product_form;

    let payload = parse_price(form.price.text()).and_then(|price| {
        NewProduct::new(form.name.text(), price, form.description.text())
    });

    match payload {
        Ok(product) => {
            form.error = None;
            form.submitting = true;
            let task = state.task_seq.next_id();
            vec![UiEffect::SubmitProduct {
                task: Some(task),
                product,
            }]
        }
        Err(err) => {
            form.error = Some(err.message);
            vec![]
        }
    }
}

/// Applies the creation result.
pub fn handle_created(state: &mut TuiState, result: Result<(), ApiError>) -> Vec<UiEffect> {
    state.product_form.submitting = false;
    match result {
        Ok(()) => {
            let effects = navigate(state, Route::Products);
            state.notice = Some(Notice::info("Product added."));
            effects
        }
        Err(err) => {
            tracing::warn!(error = %err, "product creation failed");
            let message = if err.kind == ApiErrorKind::Validation {
                err.message
            } else {
                CREATE_FAILED_MESSAGE.to_string()
            };
            state.product_form.error = Some(message);
            vec![]
        }
    }
}
