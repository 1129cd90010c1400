//! Mutable combat entity.
//!
//! Invariants held by every mutation in this module:
//! - `0 <= health <= max_health`
//! - `0 <= energy <= max_energy`
//! - `0 <= shield <= max_health`

use arrayvec::ArrayVec;

use crate::action::{ActionRecord, Move, MoveChoice, MoveTarget};
use crate::affinity::Affinity;
use crate::config::GameConfig;
use crate::engine::EngineError;

/// A named move known by a monster.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveSlot {
    pub name: String,
    pub spec: Move,
}

/// A monster taking part in a match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Monster {
    name: String,
    health: u32,
    max_health: u32,
    energy: u32,
    max_energy: u32,
    energy_regen: u32,
    shield: u32,
    affinities: ArrayVec<Affinity, { GameConfig::MAX_AFFINITIES }>,
    moves: ArrayVec<MoveSlot, { GameConfig::MAX_MOVES }>,
}

impl Monster {
    /// Assembles an already-validated monster. Use [`super::MonsterSpec::spawn`].
    pub(crate) fn from_parts(
        name: String,
        max_health: u32,
        max_energy: u32,
        energy_regen: u32,
        affinities: ArrayVec<Affinity, { GameConfig::MAX_AFFINITIES }>,
        moves: ArrayVec<MoveSlot, { GameConfig::MAX_MOVES }>,
    ) -> Self {
        Self {
            name,
            health: max_health,
            max_health,
            energy: max_energy,
            max_energy,
            energy_regen,
            shield: 0,
            affinities,
            moves,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    pub fn energy(&self) -> u32 {
        self.energy
    }

    pub fn max_energy(&self) -> u32 {
        self.max_energy
    }

    pub fn energy_regen(&self) -> u32 {
        self.energy_regen
    }

    pub fn shield(&self) -> u32 {
        self.shield
    }

    /// Shield ceiling, equal to max health.
    pub fn max_shield(&self) -> u32 {
        self.max_health
    }

    pub fn affinities(&self) -> &[Affinity] {
        &self.affinities
    }

    /// Known moves in declaration order.
    pub fn moves(&self) -> &[MoveSlot] {
        &self.moves
    }

    pub fn move_names(&self) -> impl Iterator<Item = &str> {
        self.moves.iter().map(|slot| slot.name.as_str())
    }

    pub fn find_move(&self, name: &str) -> Option<&Move> {
        self.moves
            .iter()
            .find(|slot| slot.name == name)
            .map(|slot| &slot.spec)
    }

    pub fn is_fainted(&self) -> bool {
        self.health == 0
    }

    pub fn can_afford(&self, mv: &Move) -> bool {
        mv.cost <= self.energy
    }

    /// Names of moves whose cost does not exceed current energy, in declaration order.
    pub fn usable_moves(&self) -> Vec<&str> {
        self.moves
            .iter()
            .filter(|slot| self.can_afford(&slot.spec))
            .map(|slot| slot.name.as_str())
            .collect()
    }

    /// Start-of-turn bookkeeping for the acting monster: regenerates energy
    /// up to the pool maximum. Returns the energy actually gained.
    pub fn take_turn(&mut self) -> u32 {
        let before = self.energy;
        self.energy = self
            .energy
            .saturating_add(self.energy_regen)
            .min(self.max_energy);
        self.energy - before
    }

    /// Resolves `choice` with this monster as the actor.
    ///
    /// `Skip` changes nothing. Otherwise the cost is charged, the move is
    /// applied to its target (this monster or `opponent`), and a narration
    /// record is returned. Fails without mutating anything when the move is
    /// unknown or unaffordable.
    pub fn use_move(
        &mut self,
        choice: &MoveChoice,
        opponent: &mut Monster,
    ) -> Result<ActionRecord, EngineError> {
        let name = match choice {
            MoveChoice::Skip => {
                return Ok(ActionRecord::Skipped {
                    actor: self.name.clone(),
                });
            }
            MoveChoice::Use(name) => name,
        };

        let mv = *self
            .find_move(name)
            .ok_or_else(|| EngineError::UnknownMove {
                monster: self.name.clone(),
                name: name.clone(),
            })?;

        if !self.can_afford(&mv) {
            return Err(EngineError::InsufficientEnergy {
                monster: self.name.clone(),
                cost: mv.cost,
                energy: self.energy,
            });
        }
        self.energy -= mv.cost;

        let (target, outcome) = match mv.target() {
            MoveTarget::User => (self.name.clone(), mv.apply(self)),
            MoveTarget::Opponent => (opponent.name.clone(), mv.apply(opponent)),
        };

        tracing::debug!(
            actor = %self.name,
            move_name = %name,
            %target,
            cost = mv.cost,
            ?outcome,
            "move resolved"
        );

        Ok(ActionRecord::Used {
            actor: self.name.clone(),
            move_name: name.clone(),
            target,
            outcome,
        })
    }

    /// Removes health, floored at zero.
    pub(crate) fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }

    /// Adds health up to the maximum. Returns the health actually restored.
    pub(crate) fn restore_health(&mut self, amount: u32) -> u32 {
        let before = self.health;
        self.health = self.health.saturating_add(amount).min(self.max_health);
        self.health - before
    }

    /// Adds shield up to the ceiling. Returns the shield actually gained.
    pub(crate) fn add_shield(&mut self, amount: u32) -> u32 {
        let before = self.shield;
        self.shield = self.shield.saturating_add(amount).min(self.max_shield());
        self.shield - before
    }

    /// Removes shield, floored at zero.
    pub(crate) fn drain_shield(&mut self, amount: u32) {
        self.shield = self.shield.saturating_sub(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::MoveOutcome;
    use crate::state::MonsterSpec;

    fn planty() -> Monster {
        MonsterSpec::new("Planty", 1000)
            .with_affinity(Affinity::Plant)
            .with_move("Leaf Slash", Move::damage(20, 100, Affinity::Plant))
            .with_move("Regrow", Move::heal(40, 300, Affinity::Plant))
            .with_move("Slap", Move::damage(10, 60, Affinity::None))
            .with_move("Seed Spit", Move::damage(50, 160, Affinity::Plant))
            .spawn()
            .unwrap()
    }

    fn boulder() -> Monster {
        MonsterSpec::new("BolderGuy", 1500)
            .with_energy(200, 10)
            .with_affinity(Affinity::Rock)
            .with_move("Avalanche", Move::damage(50, 120, Affinity::Rock))
            .with_move("Granite Skin", Move::block(50, 500, Affinity::Rock))
            .spawn()
            .unwrap()
    }

    #[test]
    fn usable_moves_filter_by_energy_in_declaration_order() {
        let mut monster = planty();
        assert_eq!(
            monster.usable_moves(),
            vec!["Leaf Slash", "Regrow", "Slap", "Seed Spit"]
        );

        monster.energy = 40;
        assert_eq!(monster.usable_moves(), vec!["Leaf Slash", "Regrow", "Slap"]);

        monster.energy = 10;
        assert_eq!(monster.usable_moves(), vec!["Slap"]);

        monster.energy = 9;
        assert!(monster.usable_moves().is_empty());
    }

    #[test]
    fn take_turn_regenerates_up_to_max() {
        let mut monster = planty();
        monster.energy = 30;
        assert_eq!(monster.take_turn(), 20);
        assert_eq!(monster.energy(), 50);

        monster.energy = 95;
        assert_eq!(monster.take_turn(), 5);
        assert_eq!(monster.energy(), 100);

        assert_eq!(monster.take_turn(), 0);
    }

    #[test]
    fn skip_changes_nothing() {
        let mut monster = planty();
        let mut other = boulder();
        let (before_self, before_other) = (monster.clone(), other.clone());

        let record = monster.use_move(&MoveChoice::Skip, &mut other).unwrap();

        assert_eq!(record.to_string(), "Planty skipped");
        assert_eq!(monster, before_self);
        assert_eq!(other, before_other);
    }

    #[test]
    fn damage_targets_opponent_and_charges_cost() {
        let mut monster = planty();
        let mut other = boulder();

        let record = monster
            .use_move(&MoveChoice::from("Leaf Slash"), &mut other)
            .unwrap();

        // Plant -> Rock is 2x
        assert_eq!(
            record.to_string(),
            "Planty used Leaf Slash on BolderGuy dealing 200 damage"
        );
        assert_eq!(monster.energy(), 80);
        assert_eq!(other.health(), 1300);
    }

    #[test]
    fn block_targets_user() {
        let mut monster = boulder();
        let mut other = planty();

        let record = monster
            .use_move(&MoveChoice::from("Granite Skin"), &mut other)
            .unwrap();

        assert!(matches!(
            record,
            ActionRecord::Used {
                ref target,
                outcome: MoveOutcome::Block { gained: 500, .. },
                ..
            } if target == "BolderGuy"
        ));
        assert_eq!(monster.shield(), 500);
        assert_eq!(monster.energy(), 150);
        assert_eq!(other.shield(), 0);
    }

    #[test]
    fn unaffordable_or_unknown_moves_are_rejected_without_mutation() {
        let mut monster = planty();
        let mut other = boulder();
        monster.energy = 5;
        let before = monster.clone();

        let err = monster
            .use_move(&MoveChoice::from("Seed Spit"), &mut other)
            .unwrap_err();
        assert!(matches!(
            err,
            EngineError::InsufficientEnergy {
                cost: 50,
                energy: 5,
                ..
            }
        ));

        let err = monster
            .use_move(&MoveChoice::from("Flamethrower"), &mut other)
            .unwrap_err();
        assert!(matches!(err, EngineError::UnknownMove { .. }));

        assert_eq!(monster, before);
        assert_eq!(other.health(), other.max_health());
    }

    #[test]
    fn exact_energy_is_enough() {
        let mut monster = planty();
        monster.energy = 50;
        assert!(monster.usable_moves().contains(&"Seed Spit"));

        let mut other = boulder();
        monster
            .use_move(&MoveChoice::from("Seed Spit"), &mut other)
            .unwrap();
        assert_eq!(monster.energy(), 0);
    }
}
