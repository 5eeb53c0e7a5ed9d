//! Event handling module.
//!
//! Terminal events: key input polled on a background thread and dispatched
//! to state through the configured hotkeys.

pub mod terminal;
