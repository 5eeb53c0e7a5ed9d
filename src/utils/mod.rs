//! Display helpers shared by the render functions.

pub mod format;
