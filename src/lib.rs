//! Trading dashboard client library.
//!
//! Submits trades to a trade-processing service and keeps per-ticker
//! statistics and the historical trade log in sync with the active user.
//! The [`session`] module holds the state and the request/response
//! bookkeeping; [`client`] talks HTTP; [`tui`] renders it.

pub mod client;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod models;
pub mod session;
pub mod tui;

pub use error::{Result, TradedeskError};
