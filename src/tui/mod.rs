//! Terminal User Interface for the trading dashboard.
//!
//! A single screen: the identity and trade form, per-ticker stats, and the
//! historical trade log, driven by one message loop.

pub mod app;
pub mod components;
pub mod event;
pub mod input;
pub mod terminal;
pub mod ui;

pub use app::App;
pub use event::{Event, Message, update};
pub use terminal::{Tui, restore_terminal, setup_terminal};
pub use ui::render;
