//! Grouped bar chart widget.
//!
//! One bar group per year, twelve bars per group in indicator field order.
//! Missing values render as zero-height bars with no printed value.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph};

use crate::model::Indicator;
use crate::util::format_number;
use crate::view::chart::ChartModel;
use crate::view::table::EMPTY_TEXT;

use crate::tui::state::AppState;
use crate::tui::style::{SERIES_COLORS, Styles};

/// Gap between year groups, in cells.
const GROUP_GAP: u16 = 2;

/// Renders the bar chart pane with a legend underneath.
pub fn render_chart(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Indicators by Year ")
        .borders(Borders::ALL)
        .style(Styles::default());

    let Some(model) = state.chart.current() else {
        frame.render_widget(Paragraph::new(EMPTY_TEXT).block(block), area);
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Min(5),    // Bars
        Constraint::Length(3), // Legend
    ])
    .split(area);

    let inner_width = chunks[0].width.saturating_sub(2);
    let width = bar_width(inner_width, model.labels.len(), model.series.len());

    let mut chart = BarChart::default()
        .block(block)
        .bar_width(width)
        .bar_gap(0)
        .group_gap(GROUP_GAP)
        .label_style(Styles::dim());

    for (year_idx, label) in model.labels.iter().enumerate() {
        let bars: Vec<Bar> = model
            .series
            .iter()
            .enumerate()
            .map(|(series_idx, series)| {
                let value = series.values[year_idx];
                Bar::default()
                    .value(value.map(|v| v.round().max(0.0) as u64).unwrap_or(0))
                    .text_value(value.map(format_number).unwrap_or_default())
                    .style(Style::default().fg(SERIES_COLORS[series_idx % SERIES_COLORS.len()]))
            })
            .collect();
        chart = chart.data(BarGroup::default().label(Line::from(label.as_str())).bars(&bars));
    }

    frame.render_widget(chart, chunks[0]);
    render_legend(frame, chunks[1]);
}

/// Bar width so every group fits the pane. Bars within a group touch
/// (`bar_gap` 0); groups are separated by [`GROUP_GAP`].
fn bar_width(avail: u16, groups: usize, bars_per_group: usize) -> u16 {
    if groups == 0 || bars_per_group == 0 {
        return 1;
    }
    let gaps = GROUP_GAP * groups.saturating_sub(1) as u16;
    let usable = avail.saturating_sub(gaps);
    (usable / (groups * bars_per_group) as u16).max(1)
}

/// Color key for the twelve series, four per line.
fn render_legend(frame: &mut Frame, area: Rect) {
    let entries: Vec<(usize, Indicator)> = Indicator::ALL.into_iter().enumerate().collect();
    let lines: Vec<Line> = entries
        .chunks(4)
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .flat_map(|&(idx, indicator)| {
                    [
                        Span::styled("■ ", Style::default().fg(SERIES_COLORS[idx])),
                        Span::styled(indicator.label(), Styles::dim()),
                        Span::raw("  "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_width_fits_single_group() {
        // One year, twelve bars, 60 usable cells: 5 cells per bar.
        assert_eq!(bar_width(60, 1, 12), 5);
    }

    #[test]
    fn test_bar_width_never_zero() {
        assert_eq!(bar_width(10, 6, 12), 1);
        assert_eq!(bar_width(0, 0, 0), 1);
    }

    #[test]
    fn test_bar_width_accounts_for_group_gaps() {
        // Three groups of twelve with two 2-cell gaps: (76 - 4) / 36 = 2.
        assert_eq!(bar_width(76, 3, 12), 2);
    }
}
