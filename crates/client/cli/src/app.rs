//! Application loop: mode selection, monster selection, battle, rematch.

use std::fmt;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use battle_content::Roster;
use battle_core::{BattleState, Side};
use battle_runtime::{RandomMoveProvider, Runtime, RuntimeConfig};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::CliConfig;
use crate::input::InteractiveMoveProvider;
use crate::presentation::terminal;
use crate::presentation::ui::{self, SharedUi, Ui};

/// Pause after an automated move so the player can read it.
const OPPONENT_PAUSE: Duration = Duration::from_millis(600);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    SinglePlayer,
    Multiplayer,
}

impl GameMode {
    pub const ALL: [GameMode; 2] = [GameMode::SinglePlayer, GameMode::Multiplayer];

    /// Sides driven by a provider that is not a human.
    fn is_automated(self, side: Side) -> bool {
        self == GameMode::SinglePlayer && side == Side::Two
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::SinglePlayer => f.write_str("Single-player"),
            GameMode::Multiplayer => f.write_str("Multiplayer"),
        }
    }
}

/// How a match ended from the client's point of view.
enum Flow {
    Finished(BattleState),
    Quit,
}

pub struct CliApp {
    config: CliConfig,
    roster: Roster,
    rng: StdRng,
}

impl CliApp {
    pub fn new(config: CliConfig) -> Result<Self> {
        let roster = match &config.roster_path {
            Some(path) => Roster::load(path)?,
            None => Roster::builtin()?,
        };
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            config,
            roster,
            rng,
        })
    }

    pub async fn run(mut self) -> Result<()> {
        let (tui, _guard) = terminal::init()?;
        let ui: SharedUi = Arc::new(Mutex::new(Ui::new(tui, self.config.log_tail)));

        loop {
            let Some(mode) = ui::lock(&ui)?.select_mode()? else {
                break;
            };
            let Some(state) = self.setup_match(mode, &ui)? else {
                break;
            };

            match self.play(mode, state, &ui).await? {
                Flow::Quit => break,
                Flow::Finished(state) => {
                    if !ui::lock(&ui)?.play_again(&state)? {
                        break;
                    }
                }
            }
        }

        tracing::info!("exiting");
        Ok(())
    }

    fn setup_match(&mut self, mode: GameMode, ui: &SharedUi) -> Result<Option<BattleState>> {
        let mut screen = ui::lock(ui)?;

        let chooser = match mode {
            GameMode::SinglePlayer => "Player",
            GameMode::Multiplayer => "Player one",
        };
        let Some(first) = screen.select_monster(&self.roster, chooser)? else {
            return Ok(None);
        };
        let one = self.roster.spawn(&first)?;

        let two = match mode {
            GameMode::SinglePlayer => self
                .roster
                .spawn_random_except(&first, &mut self.rng)?
                .map_or_else(|| self.roster.spawn(&first), Ok)?,
            GameMode::Multiplayer => {
                let Some(second) = screen.select_monster(&self.roster, "Player two")? else {
                    return Ok(None);
                };
                self.roster.spawn(&second)?
            }
        };

        Ok(Some(BattleState::new(one, two)))
    }

    async fn play(&mut self, mode: GameMode, mut state: BattleState, ui: &SharedUi) -> Result<Flow> {
        let runtime_config = RuntimeConfig {
            turn_limit: None,
            seed: self.config.seed,
        };
        let mut builder = Runtime::builder().config(runtime_config.clone());
        builder = match mode {
            GameMode::SinglePlayer => builder
                .player_one(InteractiveMoveProvider::new(Arc::clone(ui), Side::One.as_str()))
                .player_two(RandomMoveProvider::from_config(&runtime_config)),
            GameMode::Multiplayer => builder
                .player_one(InteractiveMoveProvider::new(Arc::clone(ui), Side::One.as_str()))
                .player_two(InteractiveMoveProvider::new(Arc::clone(ui), Side::Two.as_str())),
        };
        let mut runtime = builder.build();

        tracing::info!(
            %mode,
            one = state.monster(Side::One).name(),
            two = state.monster(Side::Two).name(),
            "match started"
        );

        while !state.is_finished() {
            ui::lock(ui)?.show_battle(&state)?;

            let outcome = match runtime.step(&mut state).await {
                Ok(outcome) => outcome,
                Err(err) if err.is_cancelled() => {
                    tracing::info!("match abandoned: {err}");
                    return Ok(Flow::Quit);
                }
                Err(err) => return Err(err.into()),
            };

            if mode.is_automated(outcome.side) && outcome.winner.is_none() {
                ui::lock(ui)?.show_battle(&state)?;
                tokio::time::sleep(OPPONENT_PAUSE).await;
            }
        }

        if let Some(winner) = state.winner() {
            tracing::info!(%winner, turns = state.turn(), "match finished");
        }
        Ok(Flow::Finished(state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_side_two_is_automated_in_single_player() {
        assert!(GameMode::SinglePlayer.is_automated(Side::Two));
        assert!(!GameMode::SinglePlayer.is_automated(Side::One));
        assert!(!GameMode::Multiplayer.is_automated(Side::Two));
    }

    #[test]
    fn mode_labels() {
        let labels: Vec<_> = GameMode::ALL.iter().map(|m| m.to_string()).collect();
        assert_eq!(labels, vec!["Single-player", "Multiplayer"]);
    }
}
