//! Common error infrastructure for battle-core.
//!
//! This module provides the shared severity model and the [`GameError`] trait
//! implemented by every error enum in the crate. Domain-specific errors live
//! next to the code that raises them ([`crate::engine::EngineError`]) or here
//! when they are shared across modules ([`ConfigError`]).
//!
//! # Design Principles
//!
//! - **Type Safety**: Each failure surface has its own error type with specific variants
//! - **Severity Classification**: Errors are categorized for recovery strategies
//! - **Fail Early**: Bad roster data is rejected at construction time, never mid-match

use crate::config::GameConfig;

/// Severity level of an error, used for categorization and recovery strategies.
///
/// Errors are classified by their recoverability and expected handling:
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: Unexpected state inconsistencies that require investigation
/// - **Fatal**: Contract violations after which the match cannot continue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: malformed roster entry, acting after the match ended
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: energy spent beyond the pool, engine phase misuse
    /// These indicate bugs and should be investigated.
    Internal,

    /// Fatal error - the match cannot continue.
    ///
    /// Examples: a move provider returned a choice outside the allowed set
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all battle-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Errors raised while building a monster from roster data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConfigError {
    #[error("monster name must not be empty")]
    EmptyName,

    #[error("monster '{monster}' must have a positive max health")]
    ZeroHealth { monster: String },

    #[error("monster '{monster}' must have a positive max energy")]
    ZeroEnergy { monster: String },

    #[error("monster '{monster}' must have at least one affinity")]
    NoAffinities { monster: String },

    #[error("monster '{monster}' lists affinity {affinity} more than once")]
    DuplicateAffinity { monster: String, affinity: String },

    #[error("monster '{monster}' has {count} affinities (max: {max})", max = GameConfig::MAX_AFFINITIES)]
    TooManyAffinities { monster: String, count: usize },

    #[error("monster '{monster}' must know at least one move")]
    NoMoves { monster: String },

    #[error("monster '{monster}' has {count} moves (max: {max})", max = GameConfig::MAX_MOVES)]
    TooManyMoves { monster: String, count: usize },

    #[error("monster '{monster}' defines move '{name}' more than once")]
    DuplicateMove { monster: String, name: String },

    #[error("monster '{monster}' uses the reserved move name '{name}'")]
    ReservedMoveName { monster: String, name: String },

    #[error("monster '{monster}' has a move with an empty name")]
    EmptyMoveName { monster: String },
}

impl GameError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyName => "CONFIG_EMPTY_NAME",
            Self::ZeroHealth { .. } => "CONFIG_ZERO_HEALTH",
            Self::ZeroEnergy { .. } => "CONFIG_ZERO_ENERGY",
            Self::NoAffinities { .. } => "CONFIG_NO_AFFINITIES",
            Self::DuplicateAffinity { .. } => "CONFIG_DUPLICATE_AFFINITY",
            Self::TooManyAffinities { .. } => "CONFIG_TOO_MANY_AFFINITIES",
            Self::NoMoves { .. } => "CONFIG_NO_MOVES",
            Self::TooManyMoves { .. } => "CONFIG_TOO_MANY_MOVES",
            Self::DuplicateMove { .. } => "CONFIG_DUPLICATE_MOVE",
            Self::ReservedMoveName { .. } => "CONFIG_RESERVED_MOVE_NAME",
            Self::EmptyMoveName { .. } => "CONFIG_EMPTY_MOVE_NAME",
        }
    }
}
