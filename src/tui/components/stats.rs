//! Per-ticker statistics panel.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::tui::app::App;

/// Renders the trading stats panel.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Trading Stats ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let lines: Vec<Line> = match app.session.stats() {
        Some(stats) if !stats.is_empty() => {
            let mut lines = Vec::with_capacity(stats.len() * 3);
            for (ticker, s) in stats {
                lines.push(Line::from(Span::styled(
                    ticker.clone(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(vec![
                    Span::raw("  High: "),
                    Span::styled(s.highest_price.to_string(), Style::default().fg(Color::Green)),
                    Span::raw("  Low: "),
                    Span::styled(s.lowest_price.to_string(), Style::default().fg(Color::Red)),
                    Span::raw("  VWAP: "),
                    Span::styled(s.vwap.to_string(), Style::default().fg(Color::Cyan)),
                ]));
                lines.push(Line::raw(format!(
                    "  Total Value: {}  Total Volume: {}",
                    s.total_value, s.total_volume
                )));
            }
            lines
        }
        _ => vec![Line::from(Span::styled(
            "No trading stats available",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
