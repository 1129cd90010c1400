//! Match state: the two combatants, turn counter, phase, and narration log.
//!
//! [`BattleState`] is owned by the driver of a match and mutated only
//! through [`crate::engine::BattleEngine`]. Move providers receive it by
//! shared reference to inspect both sides.

mod log;
mod monster;
mod spec;

pub use log::{LogEntry, TurnLog};
pub use monster::{Monster, MoveSlot};
pub use spec::MonsterSpec;

use core::fmt;

use crate::action::MoveChoice;

/// One of the two sides of a match. Side one acts first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    One,
    Two,
}

impl Side {
    pub const fn opponent(self) -> Side {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Side::One => 0,
            Side::Two => 1,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Side::One => "player one",
            Side::Two => "player two",
        }
    }

    /// Log line announcing this side as the winner.
    pub fn victory_message(self) -> &'static str {
        match self {
            Side::One => "Player one wins",
            Side::Two => "Player two wins",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the match is in its turn cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattlePhase {
    /// Between turns; `side` acts next.
    TurnStart(Side),
    /// `side` has regenerated and must pick a move.
    AwaitingMove(Side),
    /// Terminal: `winner` reduced the other side to zero health.
    Finished { winner: Side },
}

/// Full state of a single match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BattleState {
    monsters: [Monster; 2],
    turn: u32,
    phase: BattlePhase,
    log: TurnLog,
}

impl BattleState {
    /// Starts a fresh match: turn 0, empty log, side one to act.
    pub fn new(one: Monster, two: Monster) -> Self {
        Self {
            monsters: [one, two],
            turn: 0,
            phase: BattlePhase::TurnStart(Side::One),
            log: TurnLog::new(),
        }
    }

    pub fn monster(&self, side: Side) -> &Monster {
        &self.monsters[side.index()]
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    pub fn log(&self) -> &TurnLog {
        &self.log
    }

    /// The side whose turn is starting or in progress; `None` once finished.
    pub fn active_side(&self) -> Option<Side> {
        match self.phase {
            BattlePhase::TurnStart(side) | BattlePhase::AwaitingMove(side) => Some(side),
            BattlePhase::Finished { .. } => None,
        }
    }

    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            BattlePhase::Finished { winner } => Some(winner),
            _ => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.winner().is_some()
    }

    /// Choices `side` may legally make right now: `Skip` first, then every
    /// affordable move in declaration order.
    pub fn allowed_choices(&self, side: Side) -> Vec<MoveChoice> {
        core::iter::once(MoveChoice::Skip)
            .chain(
                self.monster(side)
                    .usable_moves()
                    .into_iter()
                    .map(|name| MoveChoice::Use(name.to_string())),
            )
            .collect()
    }

    pub fn is_allowed(&self, side: Side, choice: &MoveChoice) -> bool {
        match choice {
            MoveChoice::Skip => true,
            MoveChoice::Use(name) => self
                .monster(side)
                .find_move(name)
                .is_some_and(|mv| self.monster(side).can_afford(mv)),
        }
    }

    pub(crate) fn monster_mut(&mut self, side: Side) -> &mut Monster {
        &mut self.monsters[side.index()]
    }

    /// Mutable access to `(actor, opponent)`.
    pub(crate) fn pair_mut(&mut self, actor: Side) -> (&mut Monster, &mut Monster) {
        let [one, two] = &mut self.monsters;
        match actor {
            Side::One => (one, two),
            Side::Two => (two, one),
        }
    }

    pub(crate) fn advance_turn(&mut self) -> u32 {
        self.turn += 1;
        self.turn
    }

    pub(crate) fn set_phase(&mut self, phase: BattlePhase) {
        self.phase = phase;
    }

    pub(crate) fn log_mut(&mut self) -> &mut TurnLog {
        &mut self.log
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Move;
    use crate::affinity::Affinity;

    fn monster(name: &str) -> Monster {
        MonsterSpec::new(name, 100)
            .with_affinity(Affinity::None)
            .with_move("Jab", Move::damage(20, 10, Affinity::None))
            .with_move("Haymaker", Move::damage(150, 90, Affinity::None))
            .spawn()
            .unwrap()
    }

    #[test]
    fn fresh_match_starts_with_side_one() {
        let state = BattleState::new(monster("A"), monster("B"));
        assert_eq!(state.turn(), 0);
        assert_eq!(state.phase(), BattlePhase::TurnStart(Side::One));
        assert_eq!(state.active_side(), Some(Side::One));
        assert!(state.log().is_empty());
        assert_eq!(state.winner(), None);
    }

    #[test]
    fn allowed_choices_start_with_skip() {
        let state = BattleState::new(monster("A"), monster("B"));
        assert_eq!(
            state.allowed_choices(Side::One),
            vec![MoveChoice::Skip, MoveChoice::from("Jab")]
        );
        assert!(state.is_allowed(Side::Two, &MoveChoice::Skip));
        assert!(!state.is_allowed(Side::Two, &MoveChoice::from("Haymaker")));
        assert!(!state.is_allowed(Side::Two, &MoveChoice::from("Kick")));
    }

    #[test]
    fn pair_mut_orders_actor_first() {
        let mut state = BattleState::new(monster("A"), monster("B"));
        let (actor, opponent) = state.pair_mut(Side::Two);
        assert_eq!(actor.name(), "B");
        assert_eq!(opponent.name(), "A");
    }

    #[test]
    fn side_labels() {
        assert_eq!(Side::One.opponent(), Side::Two);
        assert_eq!(Side::Two.to_string(), "player two");
        assert_eq!(Side::One.victory_message(), "Player one wins");
    }
}
