//! Move table for one monster.

use battle_core::{Monster, MoveChoice};
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Row, Table, TableState},
};

use crate::presentation::theme;

/// Render `entries` for `monster`. Entries the monster cannot afford are
/// dimmed; `selected` highlights the cursor row when picking.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    monster: &Monster,
    entries: &[MoveChoice],
    selected: Option<usize>,
) {
    let rows: Vec<Row> = entries.iter().map(|entry| row(monster, entry)).collect();

    let header = Row::new(["Move", "Effect", "Cost", "Affinity"])
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));

    let table = Table::new(
        rows,
        [
            Constraint::Length(18),
            Constraint::Min(28),
            Constraint::Length(6),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title(title.to_string()))
    .row_highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    .highlight_symbol("► ");

    let mut state = TableState::default().with_selected(selected);
    frame.render_stateful_widget(table, area, &mut state);
}

/// Every known move followed by `Skip`, for read-only display.
pub fn moveset(monster: &Monster) -> Vec<MoveChoice> {
    monster
        .move_names()
        .map(MoveChoice::from)
        .chain(std::iter::once(MoveChoice::Skip))
        .collect()
}

fn row<'a>(monster: &Monster, entry: &MoveChoice) -> Row<'a> {
    let name = entry.name().to_string();
    let Some(mv) = monster.find_move(entry.name()).filter(|_| !entry.is_skip()) else {
        return Row::new(vec![
            Cell::from(name),
            Cell::from("Pass the turn"),
            Cell::from("0"),
            Cell::from(""),
        ]);
    };

    let style = if monster.can_afford(mv) {
        Style::default()
    } else {
        Style::default().fg(Color::DarkGray)
    };

    Row::new(vec![
        Cell::from(name),
        Cell::from(mv.describe()),
        Cell::from(mv.cost.to_string()),
        Cell::from(Span::styled(
            mv.affinity.to_string(),
            Style::default().fg(theme::affinity_color(mv.affinity)),
        )),
    ])
    .style(style)
}
