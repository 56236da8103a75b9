//! Help popup widget.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

/// Renders a centered help popup listing the keybindings.
pub fn render_help(frame: &mut Frame, area: Rect) {
    let popup_width = (area.width * 50 / 100).clamp(34, 48);
    let popup_height = area.height.clamp(9, 12);

    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let bindings = [
        ("r", "reload the dataset"),
        ("↑/k ↓/j", "select row"),
        ("Home/End", "first/last row"),
        ("h or ?", "toggle this help"),
        ("Esc", "close popup"),
        ("q", "quit"),
    ];

    let content: Vec<Line> = bindings
        .iter()
        .map(|(keys, action)| {
            Line::from(vec![
                Span::styled(format!("{:>9}", keys), Style::default().fg(Color::Yellow)),
                Span::styled(format!("  {}", action), Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Left)
        .style(Style::default().fg(Color::White));
    frame.render_widget(paragraph, inner);
}
