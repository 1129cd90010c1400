use core::fmt;

use crate::affinity::Multiplier;

/// What a single move did to its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveOutcome {
    Damage {
        /// Health actually removed after shield and multiplier.
        dealt: u32,
        /// Portion of the raw hit soaked by the shield.
        absorbed: u32,
        multiplier: Multiplier,
    },
    Heal {
        /// Listed heal amount.
        amount: u32,
        /// Health actually restored after the cap.
        restored: u32,
    },
    Block {
        /// Listed shield amount.
        amount: u32,
        /// Shield actually gained after the ceiling.
        gained: u32,
    },
}

impl MoveOutcome {
    pub fn dealt(&self) -> Option<u32> {
        match self {
            Self::Damage { dealt, .. } => Some(*dealt),
            _ => None,
        }
    }
}

impl fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Damage { dealt, .. } => write!(f, "dealing {dealt} damage"),
            Self::Heal { amount, .. } => write!(f, "healing {amount} health"),
            Self::Block { amount, .. } => write!(f, "Prevented the next {amount} damage"),
        }
    }
}

/// Narration-ready record of one resolved turn action.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionRecord {
    Skipped {
        actor: String,
    },
    Used {
        actor: String,
        move_name: String,
        target: String,
        outcome: MoveOutcome,
    },
}

impl ActionRecord {
    pub fn actor(&self) -> &str {
        match self {
            Self::Skipped { actor } | Self::Used { actor, .. } => actor,
        }
    }

    pub fn outcome(&self) -> Option<&MoveOutcome> {
        match self {
            Self::Skipped { .. } => None,
            Self::Used { outcome, .. } => Some(outcome),
        }
    }
}

impl fmt::Display for ActionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skipped { actor } => write!(f, "{actor} skipped"),
            Self::Used {
                actor,
                move_name,
                target,
                outcome,
            } => write!(f, "{actor} used {move_name} on {target} {outcome}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narration_text() {
        let record = ActionRecord::Used {
            actor: "Piki".into(),
            move_name: "Zap".into(),
            target: "WaterBoo".into(),
            outcome: MoveOutcome::Damage {
                dealt: 150,
                absorbed: 0,
                multiplier: Multiplier::new(3, 2),
            },
        };
        assert_eq!(record.to_string(), "Piki used Zap on WaterBoo dealing 150 damage");

        let skipped = ActionRecord::Skipped {
            actor: "Planty".into(),
        };
        assert_eq!(skipped.to_string(), "Planty skipped");
        assert!(skipped.outcome().is_none());
    }

    #[test]
    fn heal_and_block_report_listed_amounts() {
        let heal = MoveOutcome::Heal {
            amount: 300,
            restored: 12,
        };
        assert_eq!(heal.to_string(), "healing 300 health");

        let block = MoveOutcome::Block {
            amount: 40,
            gained: 40,
        };
        assert_eq!(block.to_string(), "Prevented the next 40 damage");
        assert_eq!(block.dealt(), None);
    }
}
