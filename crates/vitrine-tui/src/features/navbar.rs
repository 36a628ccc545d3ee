//! Top navigation bar.
//!
//! Reflects the session: shop brand on the left, either the welcome +
//! logout affordance or the login/register links on the right.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::state::TuiState;
use crate::theme::Theme;

/// Renders the navigation bar.
pub fn render(state: &TuiState, frame: &mut Frame, area: Rect, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(theme.dim));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(20), Constraint::Min(0)])
        .split(inner);

    let brand = Paragraph::new(Line::from(Span::styled(
        "🛍 Vitrine Shop",
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(brand, chunks[0]);

    let links = if state.session.authenticated {
        let username = state.session.username.as_deref().unwrap_or("");
        Line::from(vec![
            Span::styled("[a]", Style::default().fg(theme.accent)),
            Span::styled(" add product  ", Style::default().fg(theme.fg)),
            Span::styled(
                format!("Welcome, {username}  "),
                Style::default().fg(theme.fg),
            ),
            Span::styled("[o]", Style::default().fg(theme.accent)),
            Span::styled(" logout", Style::default().fg(theme.fg)),
        ])
    } else {
        Line::from(vec![
            Span::styled("[l]", Style::default().fg(theme.accent)),
            Span::styled(" login  ", Style::default().fg(theme.fg)),
            Span::styled("[r]", Style::default().fg(theme.accent)),
            Span::styled(" register", Style::default().fg(theme.fg)),
        ])
    };

    frame.render_widget(Paragraph::new(links).alignment(Alignment::Right), chunks[1]);
}
