//! Reusable battle widgets.

pub mod header;
pub mod menu;
pub mod monster_panel;
pub mod moves;
pub mod narration;
