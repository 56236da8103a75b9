//! Application state management.

use crate::view::chart::ChartSurface;

/// Mutable UI state for the viewer.
///
/// The record collection itself lives in the provider; state holds only
/// presentation concerns on top of it.
pub struct AppState {
    /// Drawing surface owning the current chart model.
    pub chart: ChartSurface,
    /// Selected table row index.
    pub selected: usize,
    /// Unix timestamp of the last successful refresh.
    pub last_refresh: Option<i64>,
    /// True while the quit confirmation popup is open.
    pub show_quit_confirm: bool,
    /// True while the help popup is open.
    pub show_help: bool,
    /// True when records come from the remote API.
    pub is_live: bool,
}

impl AppState {
    pub fn new(is_live: bool) -> Self {
        Self {
            chart: ChartSurface::new(),
            selected: 0,
            last_refresh: None,
            show_quit_confirm: false,
            show_help: false,
            is_live,
        }
    }

    /// Moves the table selection up.
    pub fn select_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Moves the table selection down, clamped to the row count.
    pub fn select_down(&mut self, row_count: usize) {
        let max = row_count.saturating_sub(1);
        if self.selected < max {
            self.selected += 1;
        }
    }

    /// Clamps the selection after the collection is replaced.
    pub fn clamp_selection(&mut self, row_count: usize) {
        if row_count == 0 {
            self.selected = 0;
        } else if self.selected >= row_count {
            self.selected = row_count - 1;
        }
    }
}
