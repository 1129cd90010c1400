//! Static monster definitions as they appear in roster data.

use arrayvec::ArrayVec;

use crate::action::{Move, MoveChoice};
use crate::affinity::Affinity;
use crate::config::GameConfig;
use crate::error::ConfigError;

use super::monster::{Monster, MoveSlot};

/// Blueprint for a monster: everything needed to spawn a fresh combatant.
///
/// `max_energy` and `energy_regen` fall back to [`GameConfig`] defaults when
/// omitted. Moves keep their declaration order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterSpec {
    pub name: String,
    pub max_health: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_energy: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub energy_regen: Option<u32>,
    pub affinities: Vec<Affinity>,
    pub moves: Vec<(String, Move)>,
}

impl MonsterSpec {
    pub fn new(name: impl Into<String>, max_health: u32) -> Self {
        Self {
            name: name.into(),
            max_health,
            max_energy: None,
            energy_regen: None,
            affinities: Vec::new(),
            moves: Vec::new(),
        }
    }

    /// Sets the energy pool and per-turn regeneration (builder pattern).
    #[must_use]
    pub fn with_energy(mut self, max_energy: u32, energy_regen: u32) -> Self {
        self.max_energy = Some(max_energy);
        self.energy_regen = Some(energy_regen);
        self
    }

    /// Appends an affinity (builder pattern).
    #[must_use]
    pub fn with_affinity(mut self, affinity: Affinity) -> Self {
        self.affinities.push(affinity);
        self
    }

    /// Appends a named move (builder pattern).
    #[must_use]
    pub fn with_move(mut self, name: impl Into<String>, mv: Move) -> Self {
        self.moves.push((name.into(), mv));
        self
    }

    /// Spawns a monster using the default [`GameConfig`].
    pub fn spawn(&self) -> Result<Monster, ConfigError> {
        self.spawn_with(&GameConfig::default())
    }

    /// Validates the blueprint and spawns a monster at full health and
    /// energy with no shield.
    pub fn spawn_with(&self, config: &GameConfig) -> Result<Monster, ConfigError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ConfigError::EmptyName);
        }
        let monster = || name.to_string();

        if self.max_health == 0 {
            return Err(ConfigError::ZeroHealth { monster: monster() });
        }

        let max_energy = self.max_energy.unwrap_or(config.default_max_energy);
        if max_energy == 0 {
            return Err(ConfigError::ZeroEnergy { monster: monster() });
        }
        let energy_regen = self.energy_regen.unwrap_or(config.default_energy_regen);

        let affinities = self.validated_affinities(name)?;
        let moves = self.validated_moves(name)?;

        Ok(Monster::from_parts(
            name.to_string(),
            self.max_health,
            max_energy,
            energy_regen,
            affinities,
            moves,
        ))
    }

    fn validated_affinities(
        &self,
        name: &str,
    ) -> Result<ArrayVec<Affinity, { GameConfig::MAX_AFFINITIES }>, ConfigError> {
        if self.affinities.is_empty() {
            return Err(ConfigError::NoAffinities {
                monster: name.to_string(),
            });
        }
        if self.affinities.len() > GameConfig::MAX_AFFINITIES {
            return Err(ConfigError::TooManyAffinities {
                monster: name.to_string(),
                count: self.affinities.len(),
            });
        }

        let mut affinities = ArrayVec::new();
        for &affinity in &self.affinities {
            if affinities.contains(&affinity) {
                return Err(ConfigError::DuplicateAffinity {
                    monster: name.to_string(),
                    affinity: affinity.to_string(),
                });
            }
            affinities.push(affinity);
        }
        Ok(affinities)
    }

    fn validated_moves(
        &self,
        name: &str,
    ) -> Result<ArrayVec<MoveSlot, { GameConfig::MAX_MOVES }>, ConfigError> {
        if self.moves.is_empty() {
            return Err(ConfigError::NoMoves {
                monster: name.to_string(),
            });
        }
        if self.moves.len() > GameConfig::MAX_MOVES {
            return Err(ConfigError::TooManyMoves {
                monster: name.to_string(),
                count: self.moves.len(),
            });
        }

        let mut moves: ArrayVec<MoveSlot, { GameConfig::MAX_MOVES }> = ArrayVec::new();
        for (move_name, mv) in &self.moves {
            if move_name.trim().is_empty() {
                return Err(ConfigError::EmptyMoveName {
                    monster: name.to_string(),
                });
            }
            if move_name == MoveChoice::SKIP {
                return Err(ConfigError::ReservedMoveName {
                    monster: name.to_string(),
                    name: move_name.clone(),
                });
            }
            if moves.iter().any(|slot| slot.name == *move_name) {
                return Err(ConfigError::DuplicateMove {
                    monster: name.to_string(),
                    name: move_name.clone(),
                });
            }
            moves.push(MoveSlot {
                name: move_name.clone(),
                spec: *mv,
            });
        }
        Ok(moves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn piki() -> MonsterSpec {
        MonsterSpec::new("Piki", 750)
            .with_affinity(Affinity::Electric)
            .with_move("Shock", Move::damage(50, 150, Affinity::Electric))
            .with_move("Zap", Move::damage(20, 100, Affinity::Electric))
    }

    #[test]
    fn spawns_at_full_resources_with_defaults() {
        let monster = piki().spawn().unwrap();
        assert_eq!(monster.name(), "Piki");
        assert_eq!(monster.health(), 750);
        assert_eq!(monster.max_health(), 750);
        assert_eq!(monster.energy(), GameConfig::DEFAULT_MAX_ENERGY);
        assert_eq!(monster.energy_regen(), GameConfig::DEFAULT_ENERGY_REGEN);
        assert_eq!(monster.shield(), 0);
        assert_eq!(monster.move_names().collect::<Vec<_>>(), vec!["Shock", "Zap"]);
    }

    #[test]
    fn explicit_energy_overrides_defaults() {
        let monster = piki().with_energy(200, 10).spawn().unwrap();
        assert_eq!(monster.max_energy(), 200);
        assert_eq!(monster.energy(), 200);
        assert_eq!(monster.energy_regen(), 10);
    }

    #[test]
    fn rejects_missing_affinities() {
        let spec = MonsterSpec::new("Blank", 10).with_move("Poke", Move::damage(0, 1, Affinity::None));
        assert_eq!(
            spec.spawn().unwrap_err(),
            ConfigError::NoAffinities {
                monster: "Blank".into()
            }
        );
    }

    #[test]
    fn rejects_duplicate_and_reserved_move_names() {
        let dup = piki().with_move("Zap", Move::damage(1, 1, Affinity::None));
        assert!(matches!(dup.spawn(), Err(ConfigError::DuplicateMove { .. })));

        let reserved = piki().with_move("Skip", Move::block(1, 1, Affinity::None));
        assert!(matches!(
            reserved.spawn(),
            Err(ConfigError::ReservedMoveName { .. })
        ));
    }

    #[test]
    fn rejects_degenerate_numbers() {
        assert!(matches!(
            MonsterSpec { max_health: 0, ..piki() }.spawn(),
            Err(ConfigError::ZeroHealth { .. })
        ));
        assert!(matches!(
            piki().with_energy(0, 5).spawn(),
            Err(ConfigError::ZeroEnergy { .. })
        ));
        assert_eq!(
            MonsterSpec { name: "  ".into(), ..piki() }.spawn(),
            Err(ConfigError::EmptyName)
        );
    }

    #[test]
    fn rejects_capacity_overflow() {
        let mut spec = piki();
        for idx in 0..GameConfig::MAX_MOVES {
            spec = spec.with_move(format!("Extra {idx}"), Move::damage(1, 1, Affinity::None));
        }
        assert!(matches!(spec.spawn(), Err(ConfigError::TooManyMoves { .. })));

        let crowded = piki()
            .with_affinity(Affinity::Water)
            .with_affinity(Affinity::Fire)
            .with_affinity(Affinity::Rock)
            .with_affinity(Affinity::Plant);
        assert!(matches!(
            crowded.spawn(),
            Err(ConfigError::TooManyAffinities { count: 5, .. })
        ));

        let repeated = piki().with_affinity(Affinity::Electric);
        assert!(matches!(
            repeated.spawn(),
            Err(ConfigError::DuplicateAffinity { .. })
        ));
    }
}
