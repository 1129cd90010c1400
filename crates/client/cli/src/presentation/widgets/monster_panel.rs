//! Monster panel: affinities plus health, shield, and energy gauges.

use battle_core::Monster;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};

use crate::presentation::theme;

/// Rows needed inside the border.
pub const HEIGHT: u16 = 6;

pub fn render(frame: &mut Frame, area: Rect, title: &str, monster: &Monster, is_current: bool) {
    let mut border = Style::default().fg(Color::Gray);
    if is_current {
        border = theme::emphasize_current(border.fg(Color::Cyan));
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(format!("{title}: {}", monster.name()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Affinities
            Constraint::Length(1), // Health
            Constraint::Length(1), // Shield
            Constraint::Length(1), // Energy
            Constraint::Min(0),
        ])
        .split(inner);

    let mut affinities = vec![Span::raw("Affinity: ")];
    for (index, &affinity) in monster.affinities().iter().enumerate() {
        if index > 0 {
            affinities.push(Span::raw(" / "));
        }
        affinities.push(theme::affinity_span(affinity));
    }
    frame.render_widget(Paragraph::new(Line::from(affinities)), rows[0]);

    render_gauge(
        frame,
        rows[1],
        "Health",
        monster.health(),
        monster.max_health(),
        theme::style_health(monster.health(), monster.max_health()),
    );
    render_gauge(
        frame,
        rows[2],
        "Shield",
        monster.shield(),
        monster.max_shield(),
        theme::style_shield(),
    );
    render_gauge(
        frame,
        rows[3],
        "Energy",
        monster.energy(),
        monster.max_energy(),
        theme::style_energy(monster.energy(), monster.max_energy()),
    );
}

fn render_gauge(frame: &mut Frame, area: Rect, label: &str, current: u32, maximum: u32, style: Style) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(8), Constraint::Min(0)])
        .split(area);

    frame.render_widget(Paragraph::new(label.to_string()), columns[0]);

    let gauge = Gauge::default()
        .gauge_style(style)
        .ratio(theme::ratio(current, maximum))
        .label(format!("{current}/{maximum}"));
    frame.render_widget(gauge, columns[1]);
}
