//! Title banner and vertical selection menu.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

pub fn render_title(frame: &mut Frame, area: Rect, subtitle: &str) {
    let title = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![Span::styled(
            "MINIMON",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(vec![Span::styled(
            subtitle.to_string(),
            Style::default().fg(Color::Gray),
        )]),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(title, area);
}

/// Render `items` as a list with the `selected` entry highlighted.
pub fn render_menu(frame: &mut Frame, area: Rect, title: &str, items: &[String], selected: usize) {
    let items: Vec<ListItem> = items
        .iter()
        .map(|item| ListItem::new(Line::from(item.as_str())))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
        .style(Style::default().fg(Color::Cyan))
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .highlight_symbol("► ");

    let mut state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, area, &mut state);
}

pub fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(vec![
        Span::styled("↑/↓ j/k", Style::default().fg(Color::Yellow)),
        Span::raw(" move  "),
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::raw(" select  "),
        Span::styled("q/Esc", Style::default().fg(Color::Yellow)),
        Span::raw(" quit"),
    ]))
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::Gray));

    frame.render_widget(footer, area);
}
