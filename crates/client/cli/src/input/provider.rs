use std::sync::Arc;

use async_trait::async_trait;
use battle_core::{BattleState, MoveChoice, Side};
use battle_runtime::{MoveProvider, RuntimeError};

use crate::presentation::ui::{self, SharedUi};

/// Move provider that asks a human at the terminal.
///
/// Quitting from the menu cancels the provider, which stops the match.
pub struct InteractiveMoveProvider {
    ui: SharedUi,
    label: String,
}

impl InteractiveMoveProvider {
    pub fn new(ui: SharedUi, label: impl Into<String>) -> Self {
        Self {
            ui,
            label: label.into(),
        }
    }
}

#[async_trait]
impl MoveProvider for InteractiveMoveProvider {
    async fn choose_move(
        &self,
        side: Side,
        state: &BattleState,
    ) -> battle_runtime::Result<MoveChoice> {
        let shared = Arc::clone(&self.ui);
        let snapshot = state.clone();
        let label = self.label.clone();

        // Key reads block, so keep them off the async workers.
        let picked = tokio::task::spawn_blocking(move || {
            let mut screen = ui::lock(&shared)?;
            screen.pick_move(side, &snapshot, &label)
        })
        .await
        .map_err(|e| RuntimeError::Provider(e.to_string()))?
        .map_err(|e| RuntimeError::Provider(e.to_string()))?;

        match picked {
            Some(choice) => {
                tracing::debug!(%side, %choice, "player chose move");
                Ok(choice)
            }
            None => Err(RuntimeError::ProviderCancelled { side }),
        }
    }
}
