//! Status bar component.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::tui::app::{App, Mode};

/// Renders the status bar.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let mode_style = match app.mode {
        Mode::Normal => Style::default().fg(Color::Black).bg(Color::Cyan),
        Mode::Insert => Style::default().fg(Color::Black).bg(Color::Yellow),
    };

    let identity = app.session.identity();
    let identity_label = if identity.is_empty() {
        Span::styled(" User: (empty) ", Style::default().fg(Color::Gray))
    } else {
        Span::styled(
            format!(" User: {identity} "),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
    };

    let pending_span = if app.pending_requests > 0 {
        Span::styled(
            format!(" Loading ({}) ", app.pending_requests),
            Style::default().fg(Color::Yellow),
        )
    } else {
        Span::styled(" Idle ", Style::default().fg(Color::Green))
    };

    // A fresh error outranks an older confirmation.
    let message_span = if let Some(ref error) = app.error_message {
        Span::styled(
            format!(" {} ", error.message),
            Style::default().fg(Color::Red),
        )
    } else if let Some(confirmation) = app.session.confirmation() {
        Span::styled(
            format!(" {confirmation} "),
            Style::default().fg(Color::Green),
        )
    } else {
        Span::raw("")
    };

    let line = Line::from(vec![
        Span::styled(format!(" {} ", app.mode.label()), mode_style),
        identity_label,
        Span::raw("│"),
        pending_span,
        Span::raw("│"),
        message_span,
    ]);

    let para = Paragraph::new(line).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(para, area);
}
