//! Terminal setup and teardown utilities.

use std::io::{self, IsTerminal, Stdout};

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::Result;

/// Type alias for our terminal backend.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initializes the terminal for TUI rendering.
///
/// Enables raw mode, switches to the alternate screen buffer, and installs
/// a panic hook that puts the terminal back before the panic is reported.
///
/// # Errors
///
/// Returns an error if terminal initialization fails or if stdout is not a TTY.
pub fn setup_terminal() -> Result<Tui> {
    if !io::stdout().is_terminal() {
        return Err(crate::TradedeskError::Io(
            "the dashboard requires an interactive terminal (TTY)".to_string(),
        ));
    }

    enable_raw_mode()
        .map_err(|e| crate::TradedeskError::Io(format!("failed to enable raw mode: {e}")))?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| {
        let _ = disable_raw_mode();
        crate::TradedeskError::Io(format!("failed to enter alternate screen: {e}"))
    })?;

    let terminal = Terminal::new(CrosstermBackend::new(stdout)).map_err(|e| {
        let _ = leave_screen();
        crate::TradedeskError::Io(format!("failed to create terminal: {e}"))
    })?;

    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = leave_screen();
        previous_hook(info);
    }));

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// # Errors
///
/// Returns an error if terminal restoration fails.
pub fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    leave_screen()?;
    terminal
        .show_cursor()
        .map_err(|e| crate::TradedeskError::Io(e.to_string()))?;
    Ok(())
}

/// Disables raw mode and returns to the main screen buffer.
fn leave_screen() -> Result<()> {
    disable_raw_mode().map_err(|e| crate::TradedeskError::Io(e.to_string()))?;
    execute!(io::stdout(), LeaveAlternateScreen)
        .map_err(|e| crate::TradedeskError::Io(e.to_string()))?;
    Ok(())
}
