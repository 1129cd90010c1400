//! Tail of the match narration log.

use battle_core::TurnLog;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

pub fn render(frame: &mut Frame, area: Rect, log: &TurnLog, tail: usize) {
    let entries = log.tail(tail);
    let last = entries.len().saturating_sub(1);

    let lines: Vec<Line> = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let style = if index == last {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::styled(entry.to_string(), style)
        })
        .collect();

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Battle log"));

    frame.render_widget(paragraph, area);
}
