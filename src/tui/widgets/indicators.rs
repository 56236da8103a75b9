//! Indicators table widget.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};

use crate::view::table::{EMPTY_TEXT, TableViewModel};

use crate::tui::state::AppState;
use crate::tui::style::Styles;

/// Renders the 13-column indicators table.
///
/// With no records held, a single full-width row carries the empty-state
/// text instead; a failed fetch is indistinguishable from "no data yet".
pub fn render_indicators(frame: &mut Frame, area: Rect, state: &AppState, table: &TableViewModel) {
    let block = Block::default()
        .title(" Financial Inclusion Indicators ")
        .borders(Borders::ALL)
        .style(Styles::default());

    if table.is_empty() {
        frame.render_widget(Paragraph::new(EMPTY_TEXT).block(block), area);
        return;
    }

    let header =
        Row::new(table.headers.iter().map(|h| Cell::from(*h))).style(Styles::table_header());

    let rows = table.rows.iter().enumerate().map(|(i, row)| {
        let style = if i == state.selected {
            Styles::selected()
        } else {
            Styles::default()
        };
        Row::new(row.cells.iter().map(|c| Cell::from(c.as_str()))).style(style)
    });

    let widget = Table::new(rows, column_widths(&table.headers))
        .header(header)
        .block(block)
        .column_spacing(1);
    frame.render_widget(widget, area);
}

/// Year stays narrow; the indicator columns share the remaining width.
fn column_widths(headers: &[&'static str]) -> Vec<Constraint> {
    let mut widths = Vec::with_capacity(headers.len());
    widths.push(Constraint::Length(5));
    widths.extend(headers.iter().skip(1).map(|_| Constraint::Fill(1)));
    widths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_width_per_column() {
        let table = TableViewModel::from_records(&[]);
        let widths = column_widths(&table.headers);
        assert_eq!(widths.len(), 13);
        assert_eq!(widths[0], Constraint::Length(5));
        assert_eq!(widths[1], Constraint::Fill(1));
    }
}
