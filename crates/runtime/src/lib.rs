//! Runtime orchestration for battle matches.
//!
//! This crate wires the move-provider abstraction to the deterministic
//! `battle-core` engine. Consumers embed [`Runtime`] to drive a match turn by
//! turn or to completion.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`providers`] holds ready-made move providers
pub mod api;
pub mod providers;
pub mod runtime;

pub use api::{MoveProvider, Result, RuntimeError};
pub use providers::{RandomMoveProvider, ScriptedMoveProvider};
pub use runtime::{MatchReport, Runtime, RuntimeBuilder, RuntimeConfig};
