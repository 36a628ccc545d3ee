//! Login and registration form views.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::features::product_form::render::render_field;
use crate::state::TuiState;
use crate::theme::Theme;

use super::state::{AuthField, AuthFormState};
use super::update::AuthMode;

/// Renders the login or registration form.
pub fn render(state: &TuiState, frame: &mut Frame, area: Rect, mode: AuthMode, theme: &Theme) {
    let (form, title, submit_label) = match mode {
        AuthMode::Login => (&state.login, " Sign In ", "Signing in..."),
        AuthMode::Register => (&state.register, " Create Account ", "Registering..."),
    };

    let outer = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.dim))
        .title(Span::styled(title, Style::default().fg(theme.accent)));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // username
            Constraint::Length(3), // password
            Constraint::Length(1), // error / hint
            Constraint::Min(0),
        ])
        .split(inner);

    render_field(
        frame,
        chunks[0],
        "Username",
        &form.username,
        form.focus == AuthField::Username,
        false,
        theme,
    );
    render_field(
        frame,
        chunks[1],
        "Password",
        &form.password,
        form.focus == AuthField::Password,
        true,
        theme,
    );

    frame.render_widget(Paragraph::new(status_line(form, submit_label, theme)), chunks[2]);
}

fn status_line(form: &AuthFormState, submit_label: &str, theme: &Theme) -> Line<'static> {
    if form.submitting {
        Line::from(Span::styled(
            submit_label.to_string(),
            Style::default().fg(theme.accent),
        ))
    } else if let Some(error) = &form.error {
        Line::from(Span::styled(
            error.clone(),
            Style::default().fg(theme.error),
        ))
    } else {
        Line::from(Span::styled(
            "Tab switch field  Enter submit  Esc back",
            Style::default().fg(theme.dim),
        ))
    }
}
