//! Application state management module.
//!
//! This module contains the core state management for the application, including:
//! - Main `State` struct that holds the active section, focus and modes
//! - Sidebar navigation tree and cursor
//! - Section id to panel dispatch
//! - State error handling

mod error;
pub mod navigation;
mod panel;

pub use error::StateError;
pub use navigation::{Activation, Focus, NavRow, Sidebar};
pub use panel::Panel;

// State struct, methods and Default impl are in state_impl.rs
#[path = "state_impl.rs"]
mod state_impl;

pub use state_impl::{State, LOG_CAPACITY};
