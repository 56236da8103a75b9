//! UI-agnostic view models.
//!
//! Presentation data is built here without any dependency on ratatui; the
//! TUI widgets only map these models to framework widgets for rendering.

pub mod chart;
pub mod table;
