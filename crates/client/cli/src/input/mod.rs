//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the screens can remain
//! agnostic about concrete key bindings or the specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub mod provider;
pub use provider::InteractiveMoveProvider;

/// High-level outcome of a key press inside a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Up,
    Down,
    Select,
    /// Abort the whole program.
    Quit,
    None,
}

impl MenuAction {
    /// Converts a raw key event into a menu command.
    pub fn from_key(key: KeyEvent) -> Self {
        if key.kind == KeyEventKind::Release {
            return Self::None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('C') => Self::Quit,
                _ => Self::None,
            };
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => Self::Up,
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => Self::Down,
            KeyCode::Enter | KeyCode::Char(' ') => Self::Select,
            KeyCode::Esc | KeyCode::Char('q') => Self::Quit,
            _ => Self::None,
        }
    }
}

/// Cursor over a fixed number of menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuCursor {
    selected: usize,
    len: usize,
}

impl MenuCursor {
    pub fn new(len: usize) -> Self {
        Self { selected: 0, len }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Moves the cursor; stops at both ends.
    pub fn apply(&mut self, action: MenuAction) {
        match action {
            MenuAction::Up => self.selected = self.selected.saturating_sub(1),
            MenuAction::Down if self.selected + 1 < self.len => self.selected += 1,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn maps_navigation_keys() {
        assert_eq!(MenuAction::from_key(key(KeyCode::Up)), MenuAction::Up);
        assert_eq!(MenuAction::from_key(key(KeyCode::Char('k'))), MenuAction::Up);
        assert_eq!(MenuAction::from_key(key(KeyCode::Down)), MenuAction::Down);
        assert_eq!(MenuAction::from_key(key(KeyCode::Char('j'))), MenuAction::Down);
        assert_eq!(MenuAction::from_key(key(KeyCode::Enter)), MenuAction::Select);
    }

    #[test]
    fn maps_quit_keys() {
        assert_eq!(MenuAction::from_key(key(KeyCode::Esc)), MenuAction::Quit);
        assert_eq!(MenuAction::from_key(key(KeyCode::Char('q'))), MenuAction::Quit);

        let mut ctrl_c = key(KeyCode::Char('c'));
        ctrl_c.modifiers = KeyModifiers::CONTROL;
        assert_eq!(MenuAction::from_key(ctrl_c), MenuAction::Quit);
    }

    #[test]
    fn ignores_unknown_keys_and_releases() {
        assert_eq!(MenuAction::from_key(key(KeyCode::Char('x'))), MenuAction::None);

        let mut release = key(KeyCode::Enter);
        release.kind = KeyEventKind::Release;
        assert_eq!(MenuAction::from_key(release), MenuAction::None);
    }

    #[test]
    fn cursor_is_clamped_to_the_menu() {
        let mut cursor = MenuCursor::new(3);
        cursor.apply(MenuAction::Up);
        assert_eq!(cursor.selected(), 0);

        for _ in 0..5 {
            cursor.apply(MenuAction::Down);
        }
        assert_eq!(cursor.selected(), 2);

        cursor.apply(MenuAction::Select);
        assert_eq!(cursor.selected(), 2);
    }
}
