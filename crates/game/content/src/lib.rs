//! Data-driven roster definitions and loaders.
//!
//! This crate houses the monster roster and provides loaders for RON data files:
//! - Built-in roster (embedded from `data/monsters.ron`)
//! - Custom rosters loaded from disk
//!
//! Loaders deserialize `battle-core` types directly with serde; every entry is
//! validated by spawning it once before the roster is handed out.

pub mod loaders;
pub mod roster;

pub use loaders::{LoadResult, RosterLoader};
pub use roster::Roster;
