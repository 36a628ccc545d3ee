//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState` by immutable reference, draw to a
//! ratatui frame, and never mutate state or return effects.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::features::auth::update::AuthMode;
use crate::features::{auth, navbar, product_form, products};
use crate::state::{AppState, NoticeLevel, Route, TuiState};
use crate::theme::Theme;

/// Height of the navigation bar (content + bottom border).
const NAVBAR_HEIGHT: u16 = 2;

/// Height of the status line at the bottom.
const STATUS_HEIGHT: u16 = 1;

/// Spinner frames for status line animation.
const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let state = &app.tui;
    let theme = Theme::for_dark_mode(state.dark_mode);

    frame.render_widget(
        Block::default().style(Style::default().bg(theme.bg).fg(theme.fg)),
        frame.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(NAVBAR_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(frame.area());

    navbar::render(state, frame, chunks[0], &theme);

    match state.route {
        Route::Products => products::render::render(state, frame, chunks[1], &theme),
        Route::AddProduct => product_form::render::render(state, frame, chunks[1], &theme),
        Route::Login => auth::render::render(state, frame, chunks[1], AuthMode::Login, &theme),
        Route::Register => {
            auth::render::render(state, frame, chunks[1], AuthMode::Register, &theme);
        }
    }

    render_status_line(state, frame, chunks[2], &theme);
}

/// Bottom status line: spinner while work is in flight, then the latest
/// notice, then route-specific key hints.
fn render_status_line(state: &TuiState, frame: &mut Frame, area: Rect, theme: &Theme) {
    let mut spans = Vec::new();

    if state.tasks.is_any_running() {
        let spinner = SPINNER_FRAMES[state.spinner_frame % SPINNER_FRAMES.len()];
        spans.push(Span::styled(
            format!("{spinner} "),
            Style::default().fg(theme.accent),
        ));
    }

    if let Some(notice) = &state.notice {
        let color = match notice.level {
            NoticeLevel::Info => theme.success,
            NoticeLevel::Error => theme.error,
        };
        spans.push(Span::styled(
            notice.message.clone(),
            Style::default().fg(color),
        ));
        spans.push(Span::raw("  "));
    }

    spans.push(Span::styled(
        key_hints(state).to_string(),
        Style::default().fg(theme.dim),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn key_hints(state: &TuiState) -> &'static str {
    match state.route {
        Route::Products => {
            if state.session.authenticated {
                "j/k move  d delete  a add  g refresh  t theme  o logout  q quit"
            } else {
                "j/k move  g refresh  t theme  l login  r register  q quit"
            }
        }
        Route::AddProduct => "Tab next field  Enter submit  Esc back",
        Route::Login | Route::Register => "Tab switch field  Enter submit  Esc back",
    }
}
