//! Unified error types surfaced by the runtime API.
//!
//! Wraps engine failures and move-provider interruptions so clients can
//! bubble them up with consistent context.
use battle_core::{EngineError, Side};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("{side} move provider not set")]
    ProviderNotSet { side: Side },

    /// The provider can never produce another choice (script exhausted,
    /// input channel gone).
    #[error("{side} move provider closed")]
    ProviderClosed { side: Side },

    /// The provider was interrupted on purpose, e.g. the user quit.
    #[error("{side} move provider cancelled")]
    ProviderCancelled { side: Side },

    #[error("move provider failed: {0}")]
    Provider(String),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("turn limit of {limit} reached without a winner")]
    TurnLimitReached { limit: u32 },
}

impl RuntimeError {
    /// True when the match was stopped by the user rather than by a fault.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::ProviderCancelled { .. })
    }
}
