//! Turn sequencing and win detection.
//!
//! The [`BattleEngine`] is the authoritative reducer for [`BattleState`].
//! A turn runs in two calls so the driver can consult a move provider in
//! between:
//!
//! ```text
//! TurnStart(side) --begin_turn--> AwaitingMove(side) --resolve--> TurnStart(other)
//!                                                               \-> Finished { winner }
//! ```
//!
//! `begin_turn` increments the turn counter and regenerates the acting
//! monster's energy. `resolve` validates the choice against the allowed set,
//! applies it, appends narration, and checks both monsters for a knockout.

mod errors;

pub use errors::EngineError;

use crate::action::{ActionRecord, MoveChoice};
use crate::state::{BattlePhase, BattleState, Side};

/// Result of resolving one turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnOutcome {
    pub turn: u32,
    pub side: Side,
    pub record: ActionRecord,
    /// Set when this turn ended the match.
    pub winner: Option<Side>,
}

/// Engine that applies turn transitions to a borrowed [`BattleState`].
pub struct BattleEngine<'a> {
    state: &'a mut BattleState,
}

impl<'a> BattleEngine<'a> {
    pub fn new(state: &'a mut BattleState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &BattleState {
        self.state
    }

    /// Opens the next turn: bumps the turn counter and lets the acting
    /// monster regenerate. Returns the acting side.
    pub fn begin_turn(&mut self) -> Result<Side, EngineError> {
        let side = match self.state.phase() {
            BattlePhase::TurnStart(side) => side,
            BattlePhase::AwaitingMove(side) => {
                return Err(EngineError::TurnAlreadyStarted { side });
            }
            BattlePhase::Finished { winner } => {
                return Err(EngineError::MatchFinished { winner });
            }
        };

        let turn = self.state.advance_turn();
        let gained = self.state.monster_mut(side).take_turn();
        self.state.set_phase(BattlePhase::AwaitingMove(side));

        tracing::debug!(turn, %side, gained, "turn started");
        Ok(side)
    }

    /// Resolves the acting side's choice and checks for a knockout.
    ///
    /// A choice outside [`BattleState::allowed_choices`] is rejected before
    /// any state is touched.
    pub fn resolve(&mut self, choice: MoveChoice) -> Result<TurnOutcome, EngineError> {
        let side = match self.state.phase() {
            BattlePhase::AwaitingMove(side) => side,
            BattlePhase::TurnStart(side) => return Err(EngineError::TurnNotStarted { side }),
            BattlePhase::Finished { winner } => {
                return Err(EngineError::MatchFinished { winner });
            }
        };

        if !self.state.is_allowed(side, &choice) {
            tracing::warn!(%side, %choice, "rejected choice outside the allowed set");
            return Err(EngineError::IllegalMove {
                side,
                monster: self.state.monster(side).name().to_string(),
                choice: choice.to_string(),
            });
        }

        let turn = self.state.turn();
        let (actor, opponent) = self.state.pair_mut(side);
        let record = actor.use_move(&choice, opponent)?;
        self.state.log_mut().push(turn, record.to_string());

        let winner = self.check_winner();
        match winner {
            Some(winner) => {
                self.state.log_mut().push(turn, winner.victory_message());
                self.state.set_phase(BattlePhase::Finished { winner });
                tracing::info!(turn, %winner, "match finished");
            }
            None => self.state.set_phase(BattlePhase::TurnStart(side.opponent())),
        }

        Ok(TurnOutcome {
            turn,
            side,
            record,
            winner,
        })
    }

    /// Runs a whole turn with a synchronous chooser.
    pub fn play_turn<F>(&mut self, choose: F) -> Result<TurnOutcome, EngineError>
    where
        F: FnOnce(Side, &BattleState) -> MoveChoice,
    {
        let side = self.begin_turn()?;
        let choice = choose(side, self.state);
        self.resolve(choice)
    }

    // Side one's monster is checked first, so a double knockout reports
    // side two as the winner.
    fn check_winner(&self) -> Option<Side> {
        if self.state.monster(Side::One).is_fainted() {
            Some(Side::Two)
        } else if self.state.monster(Side::Two).is_fainted() {
            Some(Side::One)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Move;
    use crate::affinity::Affinity;
    use crate::error::{ErrorSeverity, GameError};
    use crate::state::MonsterSpec;

    fn fighter(name: &str, health: u32) -> crate::state::Monster {
        MonsterSpec::new(name, health)
            .with_energy(100, 20)
            .with_affinity(Affinity::None)
            .with_move("Punch", Move::damage(20, 40, Affinity::None))
            .with_move("Bandage", Move::heal(10, 30, Affinity::None))
            .with_move("Nuke", Move::damage(100, 500, Affinity::None))
            .spawn()
            .unwrap()
    }

    #[test]
    fn begin_turn_counts_and_regenerates() {
        let mut state = BattleState::new(fighter("A", 100), fighter("B", 100));
        let mut engine = BattleEngine::new(&mut state);

        assert_eq!(engine.begin_turn(), Ok(Side::One));
        assert_eq!(engine.state().turn(), 1);
        assert_eq!(engine.state().phase(), BattlePhase::AwaitingMove(Side::One));
        // already full; regen is capped
        assert_eq!(engine.state().monster(Side::One).energy(), 100);
    }

    #[test]
    fn sides_alternate_each_turn() {
        let mut state = BattleState::new(fighter("A", 100), fighter("B", 100));
        let mut engine = BattleEngine::new(&mut state);

        let first = engine.play_turn(|_, _| MoveChoice::Skip).unwrap();
        let second = engine.play_turn(|_, _| MoveChoice::Skip).unwrap();
        let third = engine.play_turn(|_, _| MoveChoice::Skip).unwrap();

        assert_eq!(
            (first.side, second.side, third.side),
            (Side::One, Side::Two, Side::One)
        );
        assert_eq!((first.turn, second.turn, third.turn), (1, 2, 3));
        assert_eq!(
            state.log().lines().collect::<Vec<_>>(),
            vec!["Turn 1: A skipped", "Turn 2: B skipped", "Turn 3: A skipped"]
        );
    }

    #[test]
    fn illegal_choice_is_rejected_without_mutation() {
        let mut state = BattleState::new(fighter("A", 100), fighter("B", 100));
        let mut engine = BattleEngine::new(&mut state);
        engine.begin_turn().unwrap();

        let err = engine.resolve(MoveChoice::from("Kick")).unwrap_err();
        assert_eq!(err.severity(), ErrorSeverity::Fatal);
        assert_eq!(err.error_code(), "ENGINE_ILLEGAL_MOVE");
        assert_eq!(engine.state().phase(), BattlePhase::AwaitingMove(Side::One));
        assert!(engine.state().log().is_empty());
        assert_eq!(engine.state().monster(Side::Two).health(), 100);
    }

    #[test]
    fn unaffordable_choice_is_illegal() {
        let tired = MonsterSpec::new("A", 100)
            .with_energy(100, 0)
            .with_affinity(Affinity::None)
            .with_move("Punch", Move::damage(20, 40, Affinity::None))
            .with_move("Nuke", Move::damage(100, 500, Affinity::None))
            .spawn()
            .unwrap();
        let mut state = BattleState::new(tired, fighter("B", 1000));
        let mut engine = BattleEngine::new(&mut state);

        engine.play_turn(|_, _| MoveChoice::from("Punch")).unwrap();
        engine.play_turn(|_, _| MoveChoice::Skip).unwrap();

        engine.begin_turn().unwrap();
        assert_eq!(engine.state().monster(Side::One).energy(), 80);
        let err = engine.resolve(MoveChoice::from("Nuke")).unwrap_err();
        assert!(matches!(err, EngineError::IllegalMove { side: Side::One, .. }));
        assert_eq!(engine.state().monster(Side::Two).health(), 960);
    }

    #[test]
    fn phase_misuse_is_reported() {
        let mut state = BattleState::new(fighter("A", 100), fighter("B", 100));
        let mut engine = BattleEngine::new(&mut state);

        assert_eq!(
            engine.resolve(MoveChoice::Skip),
            Err(EngineError::TurnNotStarted { side: Side::One })
        );
        engine.begin_turn().unwrap();
        assert_eq!(
            engine.begin_turn(),
            Err(EngineError::TurnAlreadyStarted { side: Side::One })
        );
    }

    #[test]
    fn knockout_finishes_match_and_blocks_further_turns() {
        let mut state = BattleState::new(fighter("A", 100), fighter("B", 300));
        let mut engine = BattleEngine::new(&mut state);

        let outcome = engine.play_turn(|_, _| MoveChoice::from("Nuke")).unwrap();
        assert_eq!(outcome.winner, Some(Side::One));
        assert_eq!(engine.state().winner(), Some(Side::One));
        assert_eq!(
            engine.begin_turn(),
            Err(EngineError::MatchFinished { winner: Side::One })
        );

        let lines: Vec<_> = state.log().lines().collect();
        assert_eq!(
            lines,
            vec![
                "Turn 1: A used Nuke on B dealing 500 damage",
                "Turn 1: Player one wins",
            ]
        );
    }

    #[test]
    fn side_two_can_win() {
        let mut state = BattleState::new(fighter("A", 100), fighter("B", 100));
        let mut engine = BattleEngine::new(&mut state);

        engine.play_turn(|_, _| MoveChoice::Skip).unwrap();
        let outcome = engine.play_turn(|_, _| MoveChoice::from("Nuke")).unwrap();

        assert_eq!(outcome.winner, Some(Side::Two));
        assert_eq!(
            state.log().last().map(|e| e.message.as_str()),
            Some("Player two wins")
        );
    }
}
