//! Uniform random opponent.

use async_trait::async_trait;
use battle_core::{BattleState, MoveChoice, Side};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tokio::sync::Mutex;

use crate::api::{MoveProvider, Result};
use crate::runtime::RuntimeConfig;

/// Picks uniformly among the acting monster's usable moves.
///
/// `Skip` joins the candidates whenever at least one known move is
/// unaffordable, and is the only candidate when nothing is affordable.
pub struct RandomMoveProvider {
    rng: Mutex<StdRng>,
}

impl RandomMoveProvider {
    /// Deterministic provider for reproducible matches.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Uses the configured seed when one is set.
    pub fn from_config(config: &RuntimeConfig) -> Self {
        match config.seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    /// Candidate choices for `side`, in menu order.
    pub fn candidates(side: Side, state: &BattleState) -> Vec<MoveChoice> {
        let monster = state.monster(side);
        let usable = monster.usable_moves();

        let mut choices: Vec<MoveChoice> = usable
            .iter()
            .map(|name| MoveChoice::Use((*name).to_string()))
            .collect();
        if usable.len() < monster.moves().len() {
            choices.push(MoveChoice::Skip);
        }
        choices
    }
}

impl Default for RandomMoveProvider {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[async_trait]
impl MoveProvider for RandomMoveProvider {
    async fn choose_move(&self, side: Side, state: &BattleState) -> Result<MoveChoice> {
        let candidates = Self::candidates(side, state);
        let mut rng = self.rng.lock().await;
        let choice = candidates
            .choose(&mut *rng)
            .cloned()
            .unwrap_or(MoveChoice::Skip);

        tracing::debug!(%side, %choice, options = candidates.len(), "random move chosen");
        Ok(choice)
    }
}
