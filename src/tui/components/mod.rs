//! Reusable panels of the dashboard screen.

pub mod form;
pub mod history;
pub mod stats;
pub mod status_bar;
