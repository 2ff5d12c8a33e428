//! Main UI rendering coordinator.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app::{App, Focus, Mode};
use super::components::{form, history, stats, status_bar};

/// Renders the entire application UI.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Length(1), // Status bar
            Constraint::Min(10),   // Form | Stats
            Constraint::Min(6),    // History
            Constraint::Length(1), // Keybindings help
        ])
        .split(area);

    render_title(frame, main_layout[0], app);
    status_bar::render(frame, main_layout[1], app);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(main_layout[2]);

    form::render(frame, top[0], app);
    stats::render(frame, top[1], app);
    history::render(frame, main_layout[3], app);

    render_keybindings(frame, main_layout[4], app);
}

/// Renders the title line with the service address.
fn render_title(frame: &mut Frame, area: Rect, app: &App) {
    let line = Line::from(vec![
        Span::styled(
            " Trading App ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} ", app.service_url),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Renders the keybindings help line.
fn render_keybindings(frame: &mut Frame, area: Rect, app: &App) {
    let help = match (app.mode, app.focus) {
        (Mode::Insert, _) => "[Esc/Enter]done editing",
        (Mode::Normal, Focus::Side) => "[Space/l]next side [h]previous side [Tab]next field [s]ubmit [r]efresh [q]uit",
        (Mode::Normal, Focus::History) => "[j/k]scroll [Tab]next field [s]ubmit [r]efresh [q]uit",
        (Mode::Normal, Focus::Submit) => "[Enter]submit trade [Tab]next field [r]efresh [q]uit",
        (Mode::Normal, _) => "[i/Enter]edit [Tab/j/k]move [s]ubmit [r]efresh [q]uit",
    };

    let para = Paragraph::new(help).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(para, area);
}
