//! High-level match orchestrator.
//!
//! The runtime owns one move provider per side and drives a [`BattleState`]
//! through the [`BattleEngine`], asking the acting side's provider for a
//! choice each turn. It exposes a builder-based API for clients.

use battle_core::{
    BattleEngine, BattlePhase, BattleState, EngineError, Side, TurnLog, TurnOutcome,
};

use crate::api::{MoveProvider, Result, RuntimeError};

/// Runtime configuration.
#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    /// Stop with [`RuntimeError::TurnLimitReached`] after this many turns.
    /// `None` plays until a monster faints.
    pub turn_limit: Option<u32>,
    /// Seed for random providers built from this config.
    pub seed: Option<u64>,
}

/// Summary of a finished match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchReport {
    pub winner: Side,
    pub winner_name: String,
    pub turns: u32,
    pub log: TurnLog,
}

impl MatchReport {
    fn from_state(state: &BattleState, winner: Side) -> Self {
        Self {
            winner,
            winner_name: state.monster(winner).name().to_string(),
            turns: state.turn(),
            log: state.log().clone(),
        }
    }
}

/// Main runtime that drives matches.
pub struct Runtime {
    config: RuntimeConfig,
    providers: [Option<Box<dyn MoveProvider>>; 2],
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Set the provider for `side`, replacing any previous one.
    pub fn set_provider(&mut self, side: Side, provider: impl MoveProvider + 'static) {
        self.providers[side.index()] = Some(Box::new(provider));
    }

    /// Execute a single turn.
    ///
    /// Requires a provider for the acting side. If a previous step was
    /// interrupted while waiting on the provider, the pending turn is resumed
    /// instead of starting a new one.
    pub async fn step(&mut self, state: &mut BattleState) -> Result<TurnOutcome> {
        let side = match state.phase() {
            BattlePhase::AwaitingMove(side) => side,
            BattlePhase::TurnStart(side) => {
                if let Some(limit) = self.config.turn_limit.filter(|&limit| state.turn() >= limit) {
                    return Err(RuntimeError::TurnLimitReached { limit });
                }
                self.provider(side)?;
                BattleEngine::new(state).begin_turn()?
            }
            BattlePhase::Finished { winner } => {
                return Err(EngineError::MatchFinished { winner }.into());
            }
        };

        let choice = self.provider(side)?.choose_move(side, state).await?;
        let outcome = BattleEngine::new(state).resolve(choice)?;
        Ok(outcome)
    }

    /// Play `state` to completion and report the result.
    pub async fn run_match(&mut self, mut state: BattleState) -> Result<MatchReport> {
        tracing::info!(
            one = state.monster(Side::One).name(),
            two = state.monster(Side::Two).name(),
            "match started"
        );

        loop {
            let outcome = self.step(&mut state).await?;
            if let Some(winner) = outcome.winner {
                return Ok(MatchReport::from_state(&state, winner));
            }
        }
    }

    fn provider(&self, side: Side) -> Result<&dyn MoveProvider> {
        self.providers[side.index()]
            .as_deref()
            .ok_or(RuntimeError::ProviderNotSet { side })
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    providers: [Option<Box<dyn MoveProvider>>; 2],
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            providers: [None, None],
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the provider for the side that acts first
    pub fn player_one(mut self, provider: impl MoveProvider + 'static) -> Self {
        self.providers[Side::One.index()] = Some(Box::new(provider));
        self
    }

    /// Set the provider for the side that acts second
    pub fn player_two(mut self, provider: impl MoveProvider + 'static) -> Self {
        self.providers[Side::Two.index()] = Some(Box::new(provider));
        self
    }

    /// Build the runtime. Missing providers are reported when a turn needs
    /// them, so a half-configured runtime can still be completed with
    /// [`Runtime::set_provider`].
    pub fn build(self) -> Runtime {
        Runtime {
            config: self.config,
            providers: self.providers,
        }
    }
}
