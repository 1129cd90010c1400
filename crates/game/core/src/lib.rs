//! Deterministic battle rules shared by every client.
//!
//! `battle-core` defines the affinity chart, moves, monsters, and the turn
//! engine. It performs no I/O and draws no randomness; move selection lives in
//! `battle-runtime` behind the `MoveProvider` trait. All state mutation flows
//! through [`engine::BattleEngine`], and supporting crates depend on the types
//! re-exported here.
pub mod action;
pub mod affinity;
pub mod config;
pub mod engine;
pub mod error;
pub mod state;

pub use action::{ActionRecord, Move, MoveChoice, MoveKind, MoveOutcome, MoveTarget};
pub use affinity::{Affinity, MULTIPLIER_CHART, Multiplier};
pub use config::GameConfig;
pub use engine::{BattleEngine, EngineError, TurnOutcome};
pub use error::{ConfigError, ErrorSeverity, GameError};
pub use state::{
    BattlePhase, BattleState, LogEntry, Monster, MonsterSpec, MoveSlot, Side, TurnLog,
};
