//! Main rendering logic for the viewer.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::provider::RecordProvider;
use crate::view::table::TableViewModel;

use super::state::AppState;
use super::widgets::{
    render_chart, render_header, render_help, render_indicators, render_quit_confirm,
};

/// Main render function: header bar, indicators table, bar chart.
pub fn render(frame: &mut Frame, state: &AppState, provider: &dyn RecordProvider) {
    let area = frame.area();

    let table = TableViewModel::from_records(provider.records());

    // Table pane: borders + header row + one line per record, capped at half
    // the frame so the chart keeps room.
    let table_height = (table.rows.len().max(1) as u16 + 3).min(area.height / 2);

    let chunks = Layout::vertical([
        Constraint::Length(1),            // Header bar
        Constraint::Length(table_height), // Indicators table
        Constraint::Min(8),               // Chart
    ])
    .split(area);

    render_header(frame, chunks[0], state, provider);
    render_indicators(frame, chunks[1], state, &table);
    render_chart(frame, chunks[2], state);

    // Popups overlay everything.
    if state.show_help {
        render_help(frame, area);
    }
    if state.show_quit_confirm {
        render_quit_confirm(frame, area);
    }
}
