//! Header widget displaying the turn counter and whose move it is.

use battle_core::BattleState;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the header panel. `prompt` replaces the default status text.
pub fn render(frame: &mut Frame, area: Rect, state: &BattleState, prompt: Option<&str>) {
    let status = match (prompt, state.winner(), state.active_side()) {
        (Some(prompt), _, _) => prompt.to_string(),
        (None, Some(winner), _) => winner.victory_message().to_string(),
        (None, None, Some(side)) => {
            format!("{side} is up with {}", state.monster(side).name())
        }
        (None, None, None) => String::new(),
    };

    let text = vec![Line::from(vec![
        Span::raw("Turn: "),
        Span::styled(
            state.turn().to_string(),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw(" | "),
        Span::styled(
            status,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ])];

    let paragraph =
        Paragraph::new(text).block(Block::default().borders(Borders::ALL).title("Minimon"));

    frame.render_widget(paragraph, area);
}
