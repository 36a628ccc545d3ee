//! Product list view.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use crate::state::TuiState;
use crate::theme::Theme;

use super::state::ListPhase;

/// Renders the product list view.
pub fn render(state: &TuiState, frame: &mut Frame, area: Rect, theme: &Theme) {
    let title = match state.products.phase {
        ListPhase::Loading => " Our Products (loading...) ",
        ListPhase::Mutating => " Our Products (updating...) ",
        ListPhase::Idle => " Our Products ",
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.dim))
        .title(Span::styled(title, Style::default().fg(theme.accent)));

    if state.products.products.is_empty() {
        let message = match state.products.phase {
            ListPhase::Loading => "Fetching products...",
            _ => "No products available.",
        };
        let empty = Paragraph::new(Line::from(Span::styled(
            message,
            Style::default().fg(theme.dim),
        )))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = state
        .products
        .products
        .iter()
        .map(|product| {
            let mut spans = vec![
                Span::styled(
                    format!("{:<24}", truncate(&product.name, 24)),
                    Style::default().fg(theme.fg),
                ),
                Span::styled(
                    format!("{:>10}", format_price(product.price)),
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
            ];
            if !product.description.is_empty() {
                spans.push(Span::raw("  "));
                spans.push(Span::styled(
                    truncate(&product.description, 48),
                    Style::default().fg(theme.dim),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(theme.highlight_bg)
            .fg(theme.highlight_fg),
    );

    let mut list_state = ListState::default();
    list_state.select(Some(state.products.selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{kept}...")
}
