//! Presentation layer for the terminal client.

pub mod terminal;
pub mod theme;
pub mod ui;
pub mod widgets;
