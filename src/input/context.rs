//! The slice of app state key dispatch depends on.

use crate::app::{App, Focus, Screen};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputContext {
    /// `None` before the first view is mounted
    pub screen: Option<Screen>,
    pub focus: Focus,
}

impl InputContext {
    pub fn new(screen: Option<Screen>, focus: Focus) -> Self {
        Self { screen, focus }
    }

    pub fn from_app(app: &App) -> Self {
        Self::new(app.screen(), app.focus)
    }

    pub fn is_searching(&self) -> bool {
        self.focus == Focus::Search && self.screen == Some(Screen::Home)
    }
}
