//! Maps key events to commands.
//!
//! Priority:
//! 1. Ctrl+C always quits
//! 2. While the search box has focus it takes every other key
//! 3. Global bindings
//! 4. Screen-specific bindings

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::command::Command;
use super::context::InputContext;
use crate::app::Screen;

#[derive(Debug, Clone, Copy, Default)]
pub struct CommandRegistry;

impl CommandRegistry {
    pub fn new() -> Self {
        Self
    }

    /// Returns `None` when the key means nothing in this context.
    pub fn dispatch(&self, key: KeyEvent, context: &InputContext) -> Option<Command> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if ctrl && key.code == KeyCode::Char('c') {
            return Some(Command::Quit);
        }

        if context.is_searching() {
            return self.dispatch_search(key, ctrl);
        }

        match key.code {
            KeyCode::Char('q') => return Some(Command::Quit),
            KeyCode::Esc | KeyCode::Backspace => return Some(Command::Back),
            KeyCode::Home | KeyCode::Char('g') => return Some(Command::GoHome),
            _ => {}
        }

        match context.screen? {
            Screen::Home => match key.code {
                KeyCode::Up | KeyCode::Char('k') => Some(Command::MoveUp),
                KeyCode::Down | KeyCode::Char('j') => Some(Command::MoveDown),
                KeyCode::Enter => Some(Command::OpenSelected),
                KeyCode::Char('r') => Some(Command::Reload),
                KeyCode::Char('/') => Some(Command::FocusSearch),
                _ => None,
            },
            Screen::Detail => match key.code {
                KeyCode::Char('r') => Some(Command::Reload),
                _ => None,
            },
            Screen::NotFound => None,
        }
    }

    fn dispatch_search(&self, key: KeyEvent, ctrl: bool) -> Option<Command> {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(Command::LeaveSearch),
            KeyCode::Backspace => Some(Command::DeleteChar),
            KeyCode::Char('u') if ctrl => Some(Command::ClearSearch),
            KeyCode::Char(_) if ctrl => None,
            KeyCode::Char(c) => Some(Command::InsertChar(c)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Focus;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn plain(code: KeyCode) -> KeyEvent {
        key(code, KeyModifiers::NONE)
    }

    fn home() -> InputContext {
        InputContext::new(Some(Screen::Home), Focus::List)
    }

    fn searching() -> InputContext {
        InputContext::new(Some(Screen::Home), Focus::Search)
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let registry = CommandRegistry::new();
        let ctrl_c = key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(registry.dispatch(ctrl_c, &home()), Some(Command::Quit));
        assert_eq!(registry.dispatch(ctrl_c, &searching()), Some(Command::Quit));
        assert_eq!(
            registry.dispatch(ctrl_c, &InputContext::default()),
            Some(Command::Quit)
        );
    }

    #[test]
    fn test_home_bindings() {
        let registry = CommandRegistry::new();
        assert_eq!(registry.dispatch(plain(KeyCode::Down), &home()), Some(Command::MoveDown));
        assert_eq!(registry.dispatch(plain(KeyCode::Char('k')), &home()), Some(Command::MoveUp));
        assert_eq!(registry.dispatch(plain(KeyCode::Enter), &home()), Some(Command::OpenSelected));
        assert_eq!(registry.dispatch(plain(KeyCode::Char('/')), &home()), Some(Command::FocusSearch));
        assert_eq!(registry.dispatch(plain(KeyCode::Char('r')), &home()), Some(Command::Reload));
        assert_eq!(registry.dispatch(plain(KeyCode::Char('q')), &home()), Some(Command::Quit));
    }

    #[test]
    fn test_search_box_captures_letters() {
        let registry = CommandRegistry::new();
        assert_eq!(
            registry.dispatch(plain(KeyCode::Char('q')), &searching()),
            Some(Command::InsertChar('q'))
        );
        assert_eq!(
            registry.dispatch(plain(KeyCode::Backspace), &searching()),
            Some(Command::DeleteChar)
        );
        assert_eq!(
            registry.dispatch(key(KeyCode::Char('u'), KeyModifiers::CONTROL), &searching()),
            Some(Command::ClearSearch)
        );
        assert_eq!(
            registry.dispatch(plain(KeyCode::Esc), &searching()),
            Some(Command::LeaveSearch)
        );
    }

    #[test]
    fn test_detail_bindings() {
        let registry = CommandRegistry::new();
        let detail = InputContext::new(Some(Screen::Detail), Focus::List);
        assert_eq!(registry.dispatch(plain(KeyCode::Esc), &detail), Some(Command::Back));
        assert_eq!(registry.dispatch(plain(KeyCode::Char('r')), &detail), Some(Command::Reload));
        assert_eq!(registry.dispatch(plain(KeyCode::Enter), &detail), None);
    }

    #[test]
    fn test_nothing_mounted_only_globals() {
        let registry = CommandRegistry::new();
        let idle = InputContext::default();
        assert_eq!(registry.dispatch(plain(KeyCode::Down), &idle), None);
        assert_eq!(registry.dispatch(plain(KeyCode::Char('g')), &idle), Some(Command::GoHome));
    }
}
