//! Screens of the terminal client.
//!
//! Every screen is a blocking loop over `crossterm` key events. Menus return
//! `None` when the user quits so callers can unwind and exit.

use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::Result;
use battle_content::Roster;
use battle_core::{BattleState, Monster, MoveChoice, Side};
use crossterm::event::{self, Event};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::app::GameMode;
use crate::input::{MenuAction, MenuCursor};
use crate::presentation::terminal::Tui;
use crate::presentation::widgets::{header, menu, monster_panel, moves, narration};

/// Terminal shared between the app loop and interactive move providers.
pub type SharedUi = Arc<Mutex<Ui>>;

pub fn lock(ui: &SharedUi) -> Result<MutexGuard<'_, Ui>> {
    ui.lock()
        .map_err(|_| anyhow::anyhow!("terminal lock poisoned"))
}

pub struct Ui {
    terminal: Tui,
    log_tail: usize,
}

/// What fills the lower half of the battle screen.
enum BattlePane<'a> {
    /// Read-only move list of the side about to act.
    Moveset,
    /// Cursor over the allowed choices.
    Picking {
        side: Side,
        choices: &'a [MoveChoice],
        selected: usize,
    },
    /// Post-match prompt.
    Rematch { options: &'a [String], selected: usize },
}

impl Ui {
    pub fn new(terminal: Tui, log_tail: usize) -> Self {
        Self { terminal, log_tail }
    }

    pub fn select_mode(&mut self) -> Result<Option<GameMode>> {
        let options: Vec<String> = GameMode::ALL.iter().map(|m| m.to_string()).collect();

        let picked = run_menu(&mut self.terminal, options.len(), |frame, selected| {
            let [title, body, footer] = title_layout(frame.area());
            menu::render_title(frame, title, "Monster battles in the terminal");
            menu::render_menu(frame, body, "Mode", &options, selected);
            menu::render_footer(frame, footer);
        })?;

        Ok(picked.map(|index| GameMode::ALL[index]))
    }

    /// Lets `chooser` pick a monster from the roster. Returns its name.
    pub fn select_monster(&mut self, roster: &Roster, chooser: &str) -> Result<Option<String>> {
        let previews: Vec<Monster> = roster
            .names()
            .map(|name| roster.spawn(name))
            .collect::<Result<_>>()?;
        let names: Vec<String> = roster.names().map(str::to_string).collect();
        let prompt = format!("{chooser}, choose your monster");

        let picked = run_menu(&mut self.terminal, names.len(), |frame, selected| {
            let [title, body, footer] = title_layout(frame.area());
            menu::render_title(frame, title, &prompt);

            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(24), Constraint::Min(0)])
                .split(body);
            menu::render_menu(frame, columns[0], "Roster", &names, selected);

            let preview = &previews[selected];
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(monster_panel::HEIGHT + 2),
                    Constraint::Min(0),
                ])
                .split(columns[1]);
            monster_panel::render(frame, rows[0], "Preview", preview, false);
            moves::render(
                frame,
                rows[1],
                "Moves",
                preview,
                &moves::moveset(preview),
                None,
            );

            menu::render_footer(frame, footer);
        })?;

        Ok(picked.map(|index| names[index].clone()))
    }

    /// Redraws the battle without waiting for input.
    pub fn show_battle(&mut self, state: &BattleState) -> Result<()> {
        let log_tail = self.log_tail;
        self.terminal
            .draw(|frame| render_battle(frame, state, None, BattlePane::Moveset, log_tail))?;
        Ok(())
    }

    /// Asks `label` to choose among the allowed choices for `side`.
    pub fn pick_move(
        &mut self,
        side: Side,
        state: &BattleState,
        label: &str,
    ) -> Result<Option<MoveChoice>> {
        // Moves first, Skip last.
        let mut choices = state.allowed_choices(side);
        choices.rotate_left(1);

        let prompt = format!("{label}: choose a move for {}", state.monster(side).name());
        let log_tail = self.log_tail;

        let picked = run_menu(&mut self.terminal, choices.len(), |frame, selected| {
            let pane = BattlePane::Picking {
                side,
                choices: &choices,
                selected,
            };
            render_battle(frame, state, Some(&prompt), pane, log_tail);
        })?;

        Ok(picked.map(|index| choices[index].clone()))
    }

    /// Final screen of a match. Returns `true` for a rematch.
    pub fn play_again(&mut self, state: &BattleState) -> Result<bool> {
        let options = vec!["Play again".to_string(), "Quit".to_string()];
        let log_tail = self.log_tail;

        let picked = run_menu(&mut self.terminal, options.len(), |frame, selected| {
            let pane = BattlePane::Rematch {
                options: &options,
                selected,
            };
            render_battle(frame, state, None, pane, log_tail);
        })?;

        Ok(picked == Some(0))
    }
}

fn run_menu<F>(terminal: &mut Tui, len: usize, mut draw: F) -> Result<Option<usize>>
where
    F: FnMut(&mut Frame, usize),
{
    let mut cursor = MenuCursor::new(len);

    loop {
        terminal.draw(|frame| draw(frame, cursor.selected()))?;

        if let Event::Key(key) = event::read()? {
            match MenuAction::from_key(key) {
                MenuAction::Select => return Ok(Some(cursor.selected())),
                MenuAction::Quit => {
                    tracing::info!("user quit from menu");
                    return Ok(None);
                }
                action => cursor.apply(action),
            }
        }
    }
}

fn title_layout(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Title banner
            Constraint::Min(0),    // Menu
            Constraint::Length(1), // Footer
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

fn render_battle(
    frame: &mut Frame,
    state: &BattleState,
    prompt: Option<&str>,
    pane: BattlePane<'_>,
    log_tail: usize,
) {
    let log_height = u16::try_from(log_tail).unwrap_or(u16::MAX).saturating_add(2);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                         // Header
            Constraint::Length(monster_panel::HEIGHT + 2), // Monsters
            Constraint::Min(6),                            // Moves / menu
            Constraint::Length(log_height),                // Narration
            Constraint::Length(1),                         // Footer
        ])
        .split(frame.area());

    header::render(frame, chunks[0], state, prompt);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    for (side, area) in [(Side::One, panels[0]), (Side::Two, panels[1])] {
        let is_current = state.active_side() == Some(side);
        monster_panel::render(frame, area, side.as_str(), state.monster(side), is_current);
    }

    match pane {
        BattlePane::Moveset => {
            if let Some(side) = state.active_side() {
                let monster = state.monster(side);
                let title = format!("{} moves", monster.name());
                moves::render(
                    frame,
                    chunks[2],
                    &title,
                    monster,
                    &moves::moveset(monster),
                    None,
                );
            }
        }
        BattlePane::Picking {
            side,
            choices,
            selected,
        } => {
            let monster = state.monster(side);
            let title = format!("{} moves", monster.name());
            moves::render(frame, chunks[2], &title, monster, choices, Some(selected));
        }
        BattlePane::Rematch { options, selected } => {
            menu::render_menu(frame, chunks[2], "Match over", options, selected);
        }
    }

    narration::render(frame, chunks[3], state.log(), log_tail);
    menu::render_footer(frame, chunks[4]);
}
