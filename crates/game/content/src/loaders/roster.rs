//! Monster roster loader.
//!
//! Loads monster blueprints from RON files.

use std::path::Path;

use battle_core::MonsterSpec;

use crate::loaders::{LoadResult, read_file};

/// Embedded roster shipped with the binary.
pub(crate) const BUILTIN_ROSTER: &str = include_str!("../../data/monsters.ron");

/// Loader for monster blueprints from RON files.
pub struct RosterLoader;

impl RosterLoader {
    /// Load monster blueprints from a RON file.
    ///
    /// RON format: `Vec<MonsterSpec>`
    pub fn load(path: &Path) -> LoadResult<Vec<MonsterSpec>> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load roster {}: {}", path.display(), e))
    }

    /// Parse monster blueprints from RON text.
    pub fn parse(content: &str) -> LoadResult<Vec<MonsterSpec>> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))
    }

    /// Blueprints of the built-in roster.
    pub fn builtin() -> LoadResult<Vec<MonsterSpec>> {
        Self::parse(BUILTIN_ROSTER)
    }
}
