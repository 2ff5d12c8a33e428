//! Historical trades panel.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::tui::app::{App, Focus};

/// Renders the historical trades panel, one trade per row.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus == Focus::History;
    let border_style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let trades = app.session.history();
    let title = format!(" Historical Trades ({}) ", trades.len());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if trades.is_empty() {
        let para = Paragraph::new(Span::styled(
            "No historical trades available",
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(para, inner);
        return;
    }

    if inner.height < 2 {
        return;
    }

    let header = Line::from(Span::styled(
        format!(
            "{:<26} {:<8} {:<5} {:>12} {:>10}  {}",
            "Timestamp", "Ticker", "Side", "Price", "Volume", "Status"
        ),
        Style::default().add_modifier(Modifier::BOLD),
    ));

    let rows: Vec<Line> = trades
        .iter()
        .map(|t| {
            let side_color = match t.side.as_str() {
                "buy" => Color::Green,
                "sell" => Color::Red,
                _ => Color::White,
            };
            Line::from(vec![
                Span::raw(format!("{:<26} {:<8} ", t.timestamp, t.ticker)),
                Span::styled(format!("{:<5}", t.side), Style::default().fg(side_color)),
                Span::raw(format!(" {:>12} {:>10}  {}", t.price, t.volume, t.status)),
            ])
        })
        .collect();

    let header_area = Rect { height: 1, ..inner };
    let rows_area = Rect {
        y: inner.y + 1,
        height: inner.height.saturating_sub(1),
        ..inner
    };
    frame.render_widget(Paragraph::new(header), header_area);
    frame.render_widget(
        Paragraph::new(rows).scroll((app.history_scroll, 0)),
        rows_area,
    );
}
