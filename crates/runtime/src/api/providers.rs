//! Asynchronous abstraction for sourcing move choices.
//!
//! Runtime users plug in [`MoveProvider`] implementations so a match can run
//! with human input, scripted fixtures, or random opponents.
use async_trait::async_trait;
use battle_core::{BattleState, MoveChoice, Side};

use super::errors::Result;

/// Trait for choosing a move based on the current match state.
///
/// Different implementations can handle:
/// - Player input (from a terminal UI)
/// - Random opponents
/// - Scripted/replayed choices
///
/// The engine rejects any choice outside
/// [`BattleState::allowed_choices`], so implementations should pick from it.
#[async_trait]
pub trait MoveProvider: Send + Sync {
    /// Choose a move for `side`, whose monster has already regenerated for
    /// this turn.
    async fn choose_move(&self, side: Side, state: &BattleState) -> Result<MoveChoice>;
}

#[async_trait]
impl<P: MoveProvider + ?Sized> MoveProvider for Box<P> {
    async fn choose_move(&self, side: Side, state: &BattleState) -> Result<MoveChoice> {
        (**self).choose_move(side, state).await
    }
}

#[async_trait]
impl<P: MoveProvider + ?Sized> MoveProvider for std::sync::Arc<P> {
    async fn choose_move(&self, side: Side, state: &BattleState) -> Result<MoveChoice> {
        (**self).choose_move(side, state).await
    }
}
