//! Product list reducer.
//!
//! Key handling for the list view plus the fetch/delete result handlers.
//! Deletion always triggers a wholesale refetch, success or not.

use crossterm::event::{KeyCode, KeyEvent};
use vitrine_core::api::{ApiError, Product};

use crate::common::TaskKind;
use crate::effects::UiEffect;
use crate::state::{Notice, Route, TuiState, navigate};
use crate::update::logout;

use super::state::ListPhase;

/// Handles a key event while the products view is active.
pub fn handle_key(state: &mut TuiState, key: KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Char('q') => vec![UiEffect::Quit],
        KeyCode::Up | KeyCode::Char('k') => {
            state.products.select_prev();
            vec![]
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.products.select_next();
            vec![]
        }
        KeyCode::Char('g') => refresh(state),
        KeyCode::Char('a') => navigate(state, Route::AddProduct),
        KeyCode::Char('l') if !state.session.authenticated => navigate(state, Route::Login),
        KeyCode::Char('r') if !state.session.authenticated => navigate(state, Route::Register),
        KeyCode::Char('o') if state.session.authenticated => logout(state),
        KeyCode::Char('d') | KeyCode::Delete if state.session.authenticated => {
            delete_selected(state)
        }
        _ => vec![],
    }
}

/// Starts a fresh fetch, cancelling any fetch already in flight.
pub fn refresh(state: &mut TuiState) -> Vec<UiEffect> {
    let mut effects = Vec::new();
    if state.tasks.product_list.is_running() {
        effects.push(UiEffect::CancelTask {
            kind: TaskKind::ProductList,
            token: state.tasks.product_list.cancel.clone(),
        });
        state.tasks.product_list.clear();
    }
    let task = state.task_seq.next_id();
    effects.push(UiEffect::FetchProducts { task: Some(task) });
    effects
}

fn delete_selected(state: &mut TuiState) -> Vec<UiEffect> {
    if state.products.phase == ListPhase::Mutating {
        return vec![];
    }
    let Some(product) = state.products.selected_product() else {
        return vec![];
    };
    let id = product.id.clone();
    state.products.phase = ListPhase::Mutating;
    let task = state.task_seq.next_id();
    vec![UiEffect::DeleteProduct {
        task: Some(task),
        id,
    }]
}

/// Applies a finished list fetch.
///
/// Failures degrade to an empty list with an error notice; the view never
/// crashes on a fetch error.
pub fn handle_loaded(state: &mut TuiState, result: Result<Vec<Product>, ApiError>) {
    match result {
        Ok(products) => {
            state.products.set_products(products);
        }
        Err(err) => {
            tracing::warn!(error = %err, "product list fetch failed");
            state.products.set_products(Vec::new());
            state.notice = Some(Notice::error(format!("Could not load products: {err}")));
        }
    }
}

/// Applies a finished delete and unconditionally refetches.
pub fn handle_deleted(state: &mut TuiState, result: Result<(), ApiError>) -> Vec<UiEffect> {
    if let Err(err) = result {
        tracing::warn!(error = %err, "product delete failed");
        state.notice = Some(Notice::error(format!("Could not delete product: {err}")));
    }
    // Refetch regardless of outcome; the response is the source of truth.
    let task = state.task_seq.next_id();
    vec![UiEffect::FetchProducts { task: Some(task) }]
}
