//! Fixed-sequence provider for tests and replays.

use std::collections::VecDeque;

use async_trait::async_trait;
use battle_core::{BattleState, MoveChoice, Side};
use tokio::sync::Mutex;

use crate::api::{MoveProvider, Result, RuntimeError};

/// Replays a queue of choices, one per call. Once the queue is empty every
/// further call fails with [`RuntimeError::ProviderClosed`].
pub struct ScriptedMoveProvider {
    script: Mutex<VecDeque<MoveChoice>>,
}

impl ScriptedMoveProvider {
    pub fn new<I, C>(choices: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<MoveChoice>,
    {
        Self {
            script: Mutex::new(choices.into_iter().map(Into::into).collect()),
        }
    }

    pub async fn remaining(&self) -> usize {
        self.script.lock().await.len()
    }
}

#[async_trait]
impl MoveProvider for ScriptedMoveProvider {
    async fn choose_move(&self, side: Side, _state: &BattleState) -> Result<MoveChoice> {
        self.script
            .lock()
            .await
            .pop_front()
            .ok_or(RuntimeError::ProviderClosed { side })
    }
}
