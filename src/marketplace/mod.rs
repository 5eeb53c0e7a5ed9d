//! Marketplace domain module.
//!
//! This module contains everything the dashboard knows about the marketplace:
//! - Entity models and their closed enumerations
//! - Static sample collections
//! - The generic filter/sort engine
//! - Table-driven badge mapping
//! - The platform settings form and its validation

pub mod badge;
mod error;
pub mod filter;
pub mod models;
pub mod sample;
pub mod settings;

pub use badge::{Badge, Badged, BadgeTable, Tone};
pub use error::ValidationError;
pub use filter::{Choice, Query, Searchable, Selection, TextFilter};
