/// Battle configuration constants and tunable defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Energy pool given to monsters whose roster entry omits `max_energy`.
    pub default_max_energy: u32,
    /// Per-turn energy gain given to monsters whose roster entry omits `energy_regen`.
    pub default_energy_regen: u32,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of moves a single monster can know.
    pub const MAX_MOVES: usize = 8;
    /// Maximum number of affinities a single monster can carry.
    pub const MAX_AFFINITIES: usize = 4;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_ENERGY: u32 = 100;
    pub const DEFAULT_ENERGY_REGEN: u32 = 20;

    pub fn new() -> Self {
        Self {
            default_max_energy: Self::DEFAULT_MAX_ENERGY,
            default_energy_regen: Self::DEFAULT_ENERGY_REGEN,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
