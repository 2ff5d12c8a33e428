//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
};
use tokio::sync::mpsc;
use tracing::debug;

use crate::session::{Completion, Outcome, Request};

use super::app::{App, Focus, Mode};

/// Events that can occur in the application.
#[derive(Debug)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// Terminal was resized.
    Resize(u16, u16),
    /// Periodic tick for UI updates.
    Tick,
}

/// Messages that update application state.
#[derive(Debug)]
pub enum Message {
    /// Input event from terminal.
    Input(Event),
    /// A request to the trade service finished.
    Completed(Completion),
}

/// Spawns a task that polls for terminal events and sends them to a channel.
pub fn spawn_event_reader(tx: mpsc::UnboundedSender<Message>) {
    tokio::spawn(async move {
        loop {
            // Poll for events with a 50ms timeout
            match tokio::task::spawn_blocking(|| {
                if event::poll(Duration::from_millis(50)).unwrap_or(false) {
                    event::read().ok()
                } else {
                    None
                }
            })
            .await
            {
                Ok(Some(CrosstermEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                    if tx.send(Message::Input(Event::Key(key))).is_err() {
                        break;
                    }
                }
                Ok(Some(CrosstermEvent::Resize(w, h))) => {
                    if tx.send(Message::Input(Event::Resize(w, h))).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(_) => break,
            }
        }
    });
}

/// Spawns a task that sends periodic tick events.
pub fn spawn_tick_timer(tx: mpsc::UnboundedSender<Message>, interval_ms: u64) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(interval_ms));
        loop {
            interval.tick().await;
            if tx.send(Message::Input(Event::Tick)).is_err() {
                break;
            }
        }
    });
}

/// Updates application state based on a message.
///
/// Returns the requests the caller must run; they are counted as pending
/// until their completions come back.
pub fn update(app: &mut App, message: Message) -> Vec<Request> {
    let requests = match message {
        Message::Input(event) => handle_input(app, event),
        Message::Completed(completion) => {
            app.pending_requests = app.pending_requests.saturating_sub(1);
            let label = completion_label(&completion);
            let (outcome, follow_up) = app.session.apply(completion);
            match outcome {
                Outcome::Failed(reason) => app.show_error(format!("{label} failed: {reason}")),
                Outcome::Stale => debug!("{label} response superseded"),
                Outcome::Applied => {}
            }
            follow_up
        }
    };
    app.pending_requests += requests.len();
    requests
}

fn completion_label(completion: &Completion) -> &'static str {
    match completion {
        Completion::TradeSubmitted { .. } => "submit trade",
        Completion::StatsLoaded { .. } => "fetch stats",
        Completion::HistoryLoaded { .. } => "fetch historical trades",
    }
}

/// Handles input events and updates application state.
fn handle_input(app: &mut App, event: Event) -> Vec<Request> {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Resize(_, _) => Vec::new(),
        Event::Tick => {
            app.clear_stale_errors();
            Vec::new()
        }
    }
}

/// Handles key press events.
fn handle_key(app: &mut App, key: KeyEvent) -> Vec<Request> {
    // Global keys (work in any mode)
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
            return Vec::new();
        }
        KeyCode::Char('q') if key.modifiers.is_empty() && app.mode == Mode::Normal => {
            app.should_quit = true;
            return Vec::new();
        }
        KeyCode::Esc => {
            app.mode = Mode::Normal;
            return Vec::new();
        }
        _ => {}
    }

    match app.mode {
        Mode::Normal => handle_normal_mode(app, key),
        Mode::Insert => handle_insert_mode(app, key),
    }
}

/// Handles keys in normal mode.
fn handle_normal_mode(app: &mut App, key: KeyEvent) -> Vec<Request> {
    match key.code {
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.focus = app.focus.previous();
            } else {
                app.focus = app.focus.next();
            }
            Vec::new()
        }
        KeyCode::BackTab => {
            app.focus = app.focus.previous();
            Vec::new()
        }

        // History scrolling takes j/k while the panel has focus
        KeyCode::Char('j') | KeyCode::Down if app.focus == Focus::History => {
            app.scroll_history_down();
            Vec::new()
        }
        KeyCode::Char('k') | KeyCode::Up if app.focus == Focus::History => {
            app.scroll_history_up();
            Vec::new()
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.focus = app.focus.next();
            Vec::new()
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.focus = app.focus.previous();
            Vec::new()
        }

        // Side selector
        KeyCode::Char(' ' | 'l') | KeyCode::Right | KeyCode::Enter
            if app.focus == Focus::Side =>
        {
            app.cycle_side(true);
            Vec::new()
        }
        KeyCode::Char('h') | KeyCode::Left if app.focus == Focus::Side => {
            app.cycle_side(false);
            Vec::new()
        }

        KeyCode::Enter if app.focus == Focus::Submit => vec![app.session.submit_trade()],
        KeyCode::Char('s') => vec![app.session.submit_trade()],
        KeyCode::Char('r') => app.session.refresh_all(),

        KeyCode::Char('i') | KeyCode::Enter if app.focus.is_text_field() => {
            app.mode = Mode::Insert;
            Vec::new()
        }

        _ => Vec::new(),
    }
}

/// Handles keys in insert mode (text input).
fn handle_insert_mode(app: &mut App, key: KeyEvent) -> Vec<Request> {
    if !app.focus.is_text_field() {
        app.mode = Mode::Normal;
        return Vec::new();
    }

    if key.code == KeyCode::Enter {
        app.mode = Mode::Normal;
        return Vec::new();
    }

    let Some(input) = app.focused_input() else {
        return Vec::new();
    };
    let changed = match key.code {
        KeyCode::Char(c) => {
            input.insert(c);
            true
        }
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => {
            input.move_left();
            false
        }
        KeyCode::Right => {
            input.move_right();
            false
        }
        KeyCode::Home => {
            input.move_home();
            false
        }
        KeyCode::End => {
            input.move_end();
            false
        }
        _ => false,
    };

    if changed {
        app.commit_focused_field()
    } else {
        Vec::new()
    }
}
