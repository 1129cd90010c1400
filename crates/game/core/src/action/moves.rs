use crate::affinity::Affinity;
use crate::state::Monster;

use super::outcome::MoveOutcome;

/// Effect family of a move. Fixes who the move lands on.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum MoveKind {
    /// Hits the opponent; shield absorbs first, affinities scale the rest.
    Damage,
    /// Restores the user's health up to its maximum.
    Heal,
    /// Adds to the user's shield.
    Block,
}

/// Who a move affects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveTarget {
    User,
    Opponent,
}

impl MoveKind {
    pub const fn target(self) -> MoveTarget {
        match self {
            MoveKind::Damage => MoveTarget::Opponent,
            MoveKind::Heal | MoveKind::Block => MoveTarget::User,
        }
    }
}

/// Immutable move definition.
///
/// `amount` is the raw damage, healing, or shield value depending on `kind`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub kind: MoveKind,
    pub cost: u32,
    pub amount: u32,
    pub affinity: Affinity,
}

impl Move {
    pub const fn new(kind: MoveKind, cost: u32, amount: u32, affinity: Affinity) -> Self {
        Self {
            kind,
            cost,
            amount,
            affinity,
        }
    }

    pub const fn damage(cost: u32, damage: u32, affinity: Affinity) -> Self {
        Self::new(MoveKind::Damage, cost, damage, affinity)
    }

    pub const fn heal(cost: u32, health: u32, affinity: Affinity) -> Self {
        Self::new(MoveKind::Heal, cost, health, affinity)
    }

    pub const fn block(cost: u32, shield: u32, affinity: Affinity) -> Self {
        Self::new(MoveKind::Block, cost, shield, affinity)
    }

    pub const fn target(&self) -> MoveTarget {
        self.kind.target()
    }

    /// Menu text describing what the move does.
    pub fn describe(&self) -> String {
        match self.kind {
            MoveKind::Damage => format!("Deals {} damage", self.amount),
            MoveKind::Heal => format!("Heal {} health", self.amount),
            MoveKind::Block => format!("Prevents the next {} damage", self.amount),
        }
    }

    /// Resolves this move against `target` and reports what happened.
    ///
    /// The caller is responsible for picking the target that matches
    /// [`Move::target`] and for charging the energy cost.
    pub fn apply(&self, target: &mut Monster) -> MoveOutcome {
        match self.kind {
            MoveKind::Damage => self.apply_damage(target),
            MoveKind::Heal => {
                let restored = target.restore_health(self.amount);
                MoveOutcome::Heal {
                    amount: self.amount,
                    restored,
                }
            }
            MoveKind::Block => {
                let gained = target.add_shield(self.amount);
                MoveOutcome::Block {
                    amount: self.amount,
                    gained,
                }
            }
        }
    }

    // Shield soaks the raw hit before affinities scale it. The shield loses
    // the full raw amount (floored at zero), not just the absorbed part.
    fn apply_damage(&self, target: &mut Monster) -> MoveOutcome {
        let shield = target.shield();
        let absorbed = self.amount.min(shield);
        let unblocked = self.amount.saturating_sub(shield);
        target.drain_shield(self.amount);

        let multiplier = self.affinity.multiplier_against(target.affinities());
        let dealt = multiplier.apply(unblocked);
        target.take_damage(dealt);

        MoveOutcome::Damage {
            dealt,
            absorbed,
            multiplier,
        }
    }
}
