//! finview - Financial-inclusion indicator viewer library.
//!
//! This library provides the core functionality behind the `finview` binary:
//! - fetching the indicator dataset from the remote API (or a local file)
//! - UI-agnostic table and chart view models
//! - the interactive TUI viewer

pub mod collector;
pub mod model;
pub mod provider;
pub mod tui;
pub mod util;
pub mod view;
