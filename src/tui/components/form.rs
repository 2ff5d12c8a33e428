//! Identity and trade entry form.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::models::Side;
use crate::tui::app::{App, Focus, Mode};
use crate::tui::input::TextInput;

/// Width of the field label column, including the separator.
const LABEL_WIDTH: u16 = 11;

/// Renders the form and, in insert mode, places the cursor.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let border_style = if app.focus == Focus::History {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Cyan)
    };
    let block = Block::default()
        .title(" Submit Trade ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let draft = app.session.draft();
    let mut lines = vec![
        text_field_line(app, Focus::UserId, "User ID", &app.user_id_input, None),
        Line::raw(""),
        text_field_line(app, Focus::Ticker, "Ticker", &app.ticker_input, None),
        side_line(app),
        text_field_line(
            app,
            Focus::Price,
            "Price",
            &app.price_input,
            Some(draft.price.to_string()),
        ),
        text_field_line(
            app,
            Focus::Volume,
            "Volume",
            &app.volume_input,
            Some(draft.volume.to_string()),
        ),
        Line::raw(""),
        submit_line(app),
        Line::raw(""),
    ];

    if let Some(confirmation) = app.session.confirmation() {
        lines.push(Line::from(Span::styled(
            confirmation.to_string(),
            Style::default().fg(Color::Green),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);

    if app.mode == Mode::Insert
        && let Some((row, input)) = cursor_target(app)
    {
        frame.set_cursor_position((cursor_x(inner, input), inner.y.saturating_add(row)));
    }
}

/// Cursor column for `input`, clamped to the last column of `inner`.
fn cursor_x(inner: Rect, input: &TextInput) -> u16 {
    inner
        .x
        .saturating_add(LABEL_WIDTH)
        .saturating_add(input.display_cursor())
        .min(inner.right().saturating_sub(1))
}

/// Row of the focused text field inside the form, with its input.
fn cursor_target(app: &App) -> Option<(u16, &TextInput)> {
    match app.focus {
        Focus::UserId => Some((0, &app.user_id_input)),
        Focus::Ticker => Some((2, &app.ticker_input)),
        Focus::Price => Some((4, &app.price_input)),
        Focus::Volume => Some((5, &app.volume_input)),
        _ => None,
    }
}

fn label_span(app: &App, focus: Focus, label: &str) -> Span<'static> {
    let style = if app.focus == focus {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    Span::styled(
        format!("{label:<width$}", width = usize::from(LABEL_WIDTH)),
        style,
    )
}

/// A text field line. `parsed` is shown dimmed when the stored value
/// differs from what was typed.
fn text_field_line<'a>(
    app: &App,
    focus: Focus,
    label: &str,
    input: &'a TextInput,
    parsed: Option<String>,
) -> Line<'a> {
    let mut spans = vec![label_span(app, focus, label)];
    if input.is_empty() {
        let placeholder = parsed.unwrap_or_default();
        spans.push(Span::styled(placeholder, Style::default().fg(Color::DarkGray)));
    } else {
        spans.push(Span::raw(input.as_str()));
        if let Some(value) = parsed
            && value != input.as_str().trim()
        {
            spans.push(Span::styled(
                format!("  = {value}"),
                Style::default().fg(Color::DarkGray),
            ));
        }
    }
    Line::from(spans)
}

fn side_line(app: &App) -> Line<'static> {
    let side = app.session.draft().side;
    let value_style = match side {
        Side::Buy => Style::default().fg(Color::Green),
        Side::Sell => Style::default().fg(Color::Red),
        Side::Unset => Style::default().fg(Color::DarkGray),
    };
    Line::from(vec![
        label_span(app, Focus::Side, "Side"),
        Span::raw("< "),
        Span::styled(side.label(), value_style),
        Span::raw(" >"),
    ])
}

fn submit_line(app: &App) -> Line<'static> {
    let style = if app.focus == Focus::Submit {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    Line::from(Span::styled(" [ Submit Trade ] ", style))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_follows_input_after_label() {
        let inner = Rect::new(2, 1, 40, 10);
        let input = TextInput::with_content("abc");
        assert_eq!(cursor_x(inner, &input), 2 + LABEL_WIDTH + 3);
    }

    #[test]
    fn cursor_clamps_to_panel_for_huge_input() {
        let inner = Rect::new(10, 1, 40, 10);
        let input = TextInput::with_content("x".repeat(usize::from(u16::MAX) + 10));
        assert_eq!(input.display_cursor(), u16::MAX);
        assert_eq!(cursor_x(inner, &input), inner.right() - 1);
    }
}
