//! Terminal admin dashboard for the FreelanceHub marketplace.
//!
//! Business data is in-memory sample data; only the theme and hotkey
//! preferences are persisted.

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod logger;
pub mod marketplace;
pub mod panels;
pub mod state;
pub mod ui;
pub mod utils;
