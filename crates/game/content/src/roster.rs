//! Validated monster roster.
//!
//! A [`Roster`] is a list of [`MonsterSpec`]s that have all been checked to
//! spawn successfully, with unique names. Spawning always yields a fresh
//! monster at full health and energy with no shield.

use std::path::Path;

use battle_core::{Monster, MonsterSpec};
use rand::Rng;
use rand::seq::IteratorRandom;

use crate::loaders::{LoadResult, RosterLoader};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Roster {
    specs: Vec<MonsterSpec>,
}

impl Roster {
    /// The preset roster embedded in the crate.
    pub fn builtin() -> LoadResult<Self> {
        Self::from_specs(RosterLoader::builtin()?)
    }

    pub fn from_ron_str(content: &str) -> LoadResult<Self> {
        Self::from_specs(RosterLoader::parse(content)?)
    }

    pub fn load(path: &Path) -> LoadResult<Self> {
        let roster = Self::from_specs(RosterLoader::load(path)?)
            .map_err(|e| anyhow::anyhow!("Invalid roster {}: {}", path.display(), e))?;
        tracing::info!(path = %path.display(), monsters = roster.len(), "loaded roster");
        Ok(roster)
    }

    /// Validates every blueprint and rejects duplicate names.
    pub fn from_specs(specs: Vec<MonsterSpec>) -> LoadResult<Self> {
        if specs.is_empty() {
            anyhow::bail!("Roster must contain at least one monster");
        }

        for (index, spec) in specs.iter().enumerate() {
            spec.spawn()
                .map_err(|e| anyhow::anyhow!("Invalid monster #{}: {}", index + 1, e))?;

            let name = spec.name.trim();
            if specs[..index].iter().any(|other| other.name.trim() == name) {
                anyhow::bail!("Duplicate monster name '{}'", name);
            }
        }

        Ok(Self { specs })
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Monster names in roster order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.specs.iter().map(|spec| spec.name.trim())
    }

    pub fn specs(&self) -> &[MonsterSpec] {
        &self.specs
    }

    pub fn get(&self, name: &str) -> Option<&MonsterSpec> {
        self.specs.iter().find(|spec| spec.name.trim() == name)
    }

    /// Spawns a fresh copy of the named monster.
    pub fn spawn(&self, name: &str) -> LoadResult<Monster> {
        let spec = self
            .get(name)
            .ok_or_else(|| anyhow::anyhow!("Unknown monster '{}'", name))?;
        spec.spawn()
            .map_err(|e| anyhow::anyhow!("Failed to spawn '{}': {}", name, e))
    }

    /// Spawns a uniformly chosen monster whose name differs from `name`.
    ///
    /// Returns `None` when the roster has no other monster.
    pub fn spawn_random_except<R: Rng + ?Sized>(
        &self,
        name: &str,
        rng: &mut R,
    ) -> LoadResult<Option<Monster>> {
        let Some(pick) = self.names().filter(|other| *other != name).choose(rng) else {
            return Ok(None);
        };
        self.spawn(pick).map(Some)
    }
}
