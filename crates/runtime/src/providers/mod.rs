//! Move provider implementations for automated play and fixtures.

pub mod random;
pub mod scripted;

pub use random::RandomMoveProvider;
pub use scripted::ScriptedMoveProvider;
