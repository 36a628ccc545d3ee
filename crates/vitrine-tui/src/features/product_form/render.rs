//! Add-product form view.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::common::TextField;
use crate::state::TuiState;
use crate::theme::Theme;

use super::state::ProductField;

/// Renders the add-product form.
pub fn render(state: &TuiState, frame: &mut Frame, area: Rect, theme: &Theme) {
    let form = &state.product_form;

    let outer = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.dim))
        .title(Span::styled(
            " Add New Product ",
            Style::default().fg(theme.accent),
        ));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // name
            Constraint::Length(3), // price
            Constraint::Length(3), // description
            Constraint::Length(1), // error / hint
            Constraint::Min(0),
        ])
        .split(inner);

    render_field(
        frame,
        chunks[0],
        "Product Name",
        &form.name,
        form.focus == ProductField::Name,
        false,
        theme,
    );
    render_field(
        frame,
        chunks[1],
        "Price",
        &form.price,
        form.focus == ProductField::Price,
        false,
        theme,
    );
    render_field(
        frame,
        chunks[2],
        "Description",
        &form.description,
        form.focus == ProductField::Description,
        false,
        theme,
    );

    let status = if form.submitting {
        Line::from(Span::styled(
            "Adding product...",
            Style::default().fg(theme.accent),
        ))
    } else if let Some(error) = &form.error {
        Line::from(Span::styled(
            error.clone(),
            Style::default().fg(theme.error),
        ))
    } else {
        Line::from(Span::styled(
            "Tab next field  Enter submit  Esc back",
            Style::default().fg(theme.dim),
        ))
    };
    frame.render_widget(Paragraph::new(status), chunks[3]);
}

/// Renders one bordered input field, with the cursor when focused.
pub fn render_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    field: &TextField,
    focused: bool,
    masked: bool,
    theme: &Theme,
) {
    let border_color = if focused { theme.accent } else { theme.dim };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {label} "));
    let inner = block.inner(area);

    let text = if masked {
        field.masked()
    } else {
        field.text().to_string()
    };
    let paragraph = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(theme.fg),
    )))
    .block(block);
    frame.render_widget(paragraph, area);

    if focused && inner.width > 0 {
        let x = inner.x + field.cursor_display_col().min(inner.width - 1);
        frame.set_cursor_position((x, inner.y));
    }
}
