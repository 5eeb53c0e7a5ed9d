//! Reusable UI widget components.
//!
//! Styling helpers and the small building blocks shared by the panel
//! renderers: badges, stat cards and data tables.

pub mod styling;
pub mod chart;
pub mod table;
