//! Error types for the battle engine.

use crate::error::{ErrorSeverity, GameError};
use crate::state::Side;

/// Errors surfaced while driving a match through the battle engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// A provider returned a choice outside `{Skip} ∪ usable_moves`.
    #[error("illegal move '{choice}' for {monster} ({side}): not in the allowed set")]
    IllegalMove {
        side: Side,
        monster: String,
        choice: String,
    },

    #[error("{monster} does not know a move named '{name}'")]
    UnknownMove { monster: String, name: String },

    #[error("{monster} cannot afford a move costing {cost} with {energy} energy")]
    InsufficientEnergy {
        monster: String,
        cost: u32,
        energy: u32,
    },

    #[error("match already finished: {winner} won")]
    MatchFinished { winner: Side },

    #[error("{side} must begin its turn before choosing a move")]
    TurnNotStarted { side: Side },

    #[error("{side} already began its turn and must choose a move")]
    TurnAlreadyStarted { side: Side },
}

impl GameError for EngineError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::IllegalMove { .. } => ErrorSeverity::Fatal,
            Self::MatchFinished { .. } => ErrorSeverity::Validation,
            Self::UnknownMove { .. }
            | Self::InsufficientEnergy { .. }
            | Self::TurnNotStarted { .. }
            | Self::TurnAlreadyStarted { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::IllegalMove { .. } => "ENGINE_ILLEGAL_MOVE",
            Self::UnknownMove { .. } => "ENGINE_UNKNOWN_MOVE",
            Self::InsufficientEnergy { .. } => "ENGINE_INSUFFICIENT_ENERGY",
            Self::MatchFinished { .. } => "ENGINE_MATCH_FINISHED",
            Self::TurnNotStarted { .. } => "ENGINE_TURN_NOT_STARTED",
            Self::TurnAlreadyStarted { .. } => "ENGINE_TURN_ALREADY_STARTED",
        }
    }
}
