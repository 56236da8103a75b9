//! Utility modules for finview.

mod format;

pub use format::format_number;
