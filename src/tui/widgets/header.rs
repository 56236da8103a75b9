//! Header bar showing refresh time, mode, and source.

use chrono::{DateTime, Local, TimeZone};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::Paragraph;

use crate::provider::RecordProvider;
use crate::tui::state::AppState;
use crate::tui::style::Styles;

/// Renders the header bar.
pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState, provider: &dyn RecordProvider) {
    let chunks = Layout::horizontal([
        Constraint::Length(22), // Refresh time
        Constraint::Length(8),  // Mode
        Constraint::Min(20),    // Source
        Constraint::Length(12), // Record count
    ])
    .split(area);

    // Last successful refresh, local time. "--" until the first one lands.
    let time_str = state
        .last_refresh
        .and_then(|ts| Local.timestamp_opt(ts, 0).single())
        .map(|dt: DateTime<Local>| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "--".to_string());
    frame.render_widget(Paragraph::new(time_str).style(Styles::header()), chunks[0]);

    let mode_str = if state.is_live { " LIVE " } else { " FILE " };
    frame.render_widget(Paragraph::new(mode_str).style(Styles::header()), chunks[1]);

    frame.render_widget(
        Paragraph::new(provider.source()).style(Styles::header()),
        chunks[2],
    );

    let count = provider.records().len();
    let count_str = match count {
        1 => " 1 year".to_string(),
        n => format!(" {} years", n),
    };
    frame.render_widget(Paragraph::new(count_str).style(Styles::header()), chunks[3]);
}
