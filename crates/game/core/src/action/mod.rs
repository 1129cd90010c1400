//! Move definitions, move choices, and the records produced when they resolve.
//!
//! Moves are a closed sum type ([`MoveKind`]) dispatched through a single
//! [`Move::apply`] function. A [`MoveChoice`] is what a move provider hands
//! back to the engine: either a named move or the `Skip` sentinel.

mod moves;
mod outcome;

pub use moves::{Move, MoveKind, MoveTarget};
pub use outcome::{ActionRecord, MoveOutcome};

use core::fmt;

/// A move selection for the acting monster.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveChoice {
    /// Pass the turn: no energy spent, no effect.
    Skip,
    /// Use the move registered under this name on the acting monster.
    Use(String),
}

impl MoveChoice {
    /// Display name of the skip sentinel.
    pub const SKIP: &'static str = "Skip";

    /// Builds a choice from a display name, mapping `"Skip"` to [`MoveChoice::Skip`].
    pub fn from_name(name: impl Into<String>) -> Self {
        let name = name.into();
        if name == Self::SKIP {
            Self::Skip
        } else {
            Self::Use(name)
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Skip => Self::SKIP,
            Self::Use(name) => name,
        }
    }

    pub fn is_skip(&self) -> bool {
        matches!(self, Self::Skip)
    }
}

impl From<&str> for MoveChoice {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl fmt::Display for MoveChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skip_sentinel_round_trips_through_name() {
        assert_eq!(MoveChoice::from_name("Skip"), MoveChoice::Skip);
        assert_eq!(MoveChoice::Skip.name(), "Skip");
        assert!(MoveChoice::from("Skip").is_skip());
    }

    #[test]
    fn named_moves_are_case_sensitive() {
        assert_eq!(MoveChoice::from("skip"), MoveChoice::Use("skip".into()));
        assert_eq!(MoveChoice::from("Zap").to_string(), "Zap");
    }
}
