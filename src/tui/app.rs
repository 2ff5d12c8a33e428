//! Application state for the TUI.

use std::time::{Duration, Instant};

use crate::models::DraftField;
use crate::session::{Request, Session};

use super::input::TextInput;

/// How long a failure stays in the status bar.
const ERROR_DISPLAY_DURATION: Duration = Duration::from_secs(5);

/// Central application state container.
pub struct App {
    /// Identity, draft, and server-derived views.
    pub session: Session,
    /// Base URL of the service, shown in the title bar.
    pub service_url: String,

    // -- Form Inputs --
    pub user_id_input: TextInput,
    pub ticker_input: TextInput,
    pub price_input: TextInput,
    pub volume_input: TextInput,

    // -- UI State --
    /// Form element or panel with keyboard focus.
    pub focus: Focus,
    /// Current input mode.
    pub mode: Mode,
    /// First visible row of the history panel.
    pub history_scroll: u16,
    /// Requests issued but not yet completed.
    pub pending_requests: usize,
    /// Last failure to display (clears after timeout).
    pub error_message: Option<ErrorDisplay>,

    // -- Internal --
    /// Flag to signal application should quit.
    pub should_quit: bool,
}

impl App {
    /// Creates a new App whose identity field is prefilled with `initial_user_id`.
    pub fn new(service_url: impl Into<String>, initial_user_id: &str) -> Self {
        Self {
            session: Session::new(),
            service_url: service_url.into(),

            user_id_input: TextInput::with_content(initial_user_id),
            ticker_input: TextInput::new(),
            price_input: TextInput::new(),
            volume_input: TextInput::new(),

            focus: Focus::UserId,
            mode: Mode::Normal,
            history_scroll: 0,
            pending_requests: 0,
            error_message: None,

            should_quit: false,
        }
    }

    /// Activates the identity in the User ID field and returns the initial fetches.
    pub fn start(&mut self) -> Vec<Request> {
        let identity = self.user_id_input.as_str().to_string();
        let requests = self.session.set_identity(identity);
        self.pending_requests += requests.len();
        requests
    }

    /// Returns the text input behind the focused element, if it is one.
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            Focus::UserId => Some(&mut self.user_id_input),
            Focus::Ticker => Some(&mut self.ticker_input),
            Focus::Price => Some(&mut self.price_input),
            Focus::Volume => Some(&mut self.volume_input),
            Focus::Side | Focus::Submit | Focus::History => None,
        }
    }

    /// Pushes the focused field's text into the session.
    ///
    /// Editing User ID re-identifies on every change, which refetches both
    /// views. Draft fields are coerced and stored without any I/O.
    pub fn commit_focused_field(&mut self) -> Vec<Request> {
        match self.focus {
            Focus::UserId => {
                let identity = self.user_id_input.as_str().to_string();
                self.history_scroll = 0;
                self.session.set_identity(identity)
            }
            Focus::Ticker => {
                self.session
                    .update_draft_field(DraftField::Ticker, self.ticker_input.as_str());
                Vec::new()
            }
            Focus::Price => {
                self.session
                    .update_draft_field(DraftField::Price, self.price_input.as_str());
                Vec::new()
            }
            Focus::Volume => {
                self.session
                    .update_draft_field(DraftField::Volume, self.volume_input.as_str());
                Vec::new()
            }
            Focus::Side | Focus::Submit | Focus::History => Vec::new(),
        }
    }

    /// Moves the side selector forward (`true`) or backward.
    pub fn cycle_side(&mut self, forward: bool) {
        let current = self.session.draft().side;
        let next = if forward {
            current.next()
        } else {
            current.previous()
        };
        self.session
            .update_draft_field(DraftField::Side, next.as_str());
    }

    /// Scrolls the history panel down by one row.
    pub fn scroll_history_down(&mut self) {
        let last = self.session.history().len().saturating_sub(1);
        let max = u16::try_from(last).unwrap_or(u16::MAX);
        if self.history_scroll < max {
            self.history_scroll += 1;
        }
    }

    /// Scrolls the history panel up by one row.
    pub fn scroll_history_up(&mut self) {
        self.history_scroll = self.history_scroll.saturating_sub(1);
    }

    /// Sets an error message to display.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(ErrorDisplay {
            message: message.into(),
            timestamp: Instant::now(),
        });
    }

    /// Clears error messages older than [`ERROR_DISPLAY_DURATION`].
    pub fn clear_stale_errors(&mut self) {
        if let Some(ref error) = self.error_message
            && error.timestamp.elapsed() > ERROR_DISPLAY_DURATION
        {
            self.error_message = None;
        }
    }
}

/// Focusable elements, in Tab order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    UserId,
    Ticker,
    Side,
    Price,
    Volume,
    Submit,
    History,
}

impl Focus {
    const ORDER: [Focus; 7] = [
        Focus::UserId,
        Focus::Ticker,
        Focus::Side,
        Focus::Price,
        Focus::Volume,
        Focus::Submit,
        Focus::History,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    /// Returns the next element, wrapping around.
    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    /// Returns the previous element, wrapping around.
    pub fn previous(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }

    /// Returns whether the element is an editable text field.
    pub fn is_text_field(self) -> bool {
        matches!(
            self,
            Focus::UserId | Focus::Ticker | Focus::Price | Focus::Volume
        )
    }
}

/// Input mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Normal,
    Insert,
}

impl Mode {
    /// Returns the status bar label.
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Normal => "NORMAL",
            Mode::Insert => "INSERT",
        }
    }
}

/// Error message with timestamp for auto-clear.
#[derive(Clone, Debug)]
pub struct ErrorDisplay {
    /// The error message.
    pub message: String,
    /// When the error was shown.
    pub timestamp: Instant,
}
