//! Keyboard input handling.
//!
//! ```text
//! KeyEvent -> CommandRegistry::dispatch() -> Command -> App::execute_command()
//! ```
//!
//! - [`command`] - The [`Command`] enum with all possible user actions
//! - [`context`] - [`InputContext`] for the state dispatch depends on
//! - [`registry`] - [`CommandRegistry`] for mapping keys to commands

pub mod command;
pub mod context;
pub mod registry;

pub use command::Command;
pub use context::InputContext;
pub use registry::CommandRegistry;

use crate::app::{ActiveView, App, Focus};

impl App {
    /// Apply a command. Returns `false` when it had nothing to act on.
    pub fn execute_command(&mut self, command: Command) -> bool {
        tracing::trace!("Executing {:?}", command);
        self.mark_dirty();
        match command {
            Command::Quit => {
                self.quit();
                true
            }
            Command::Back => self.back(),
            Command::GoHome => self.navigate("/").is_ok(),
            Command::MoveUp => self.update_home(|s| s.select_previous()),
            Command::MoveDown => self.update_home(|s| s.select_next()),
            Command::OpenSelected => self.open_selected(),
            Command::Reload => self.reload(),
            Command::FocusSearch => {
                self.focus = Focus::Search;
                true
            }
            Command::LeaveSearch => {
                self.focus = Focus::List;
                true
            }
            Command::InsertChar(c) => self.update_home(|s| s.keyword.push(c)),
            Command::DeleteChar => self.update_home(|s| {
                s.keyword.pop();
            }),
            Command::ClearSearch => self.update_home(|s| s.keyword.clear()),
        }
    }

    /// Bracketed paste into the search box. Line breaks become spaces.
    pub fn handle_paste(&mut self, text: &str) -> bool {
        if self.focus != Focus::Search {
            return false;
        }
        let cleaned: String = text
            .chars()
            .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
            .collect();
        self.mark_dirty();
        self.update_home(move |s| s.keyword.push_str(&cleaned))
    }

    /// Replace the search input in one change.
    pub fn set_keyword(&mut self, keyword: &str) -> bool {
        let keyword = keyword.to_string();
        self.update_home(move |s| s.keyword = keyword)
    }

    /// Refetch the mounted view's data with unchanged inputs.
    pub fn reload(&mut self) -> bool {
        match &mut self.view {
            ActiveView::Home(view) => {
                view.update(|s| s.reload = s.reload.wrapping_add(1));
                true
            }
            ActiveView::Detail(view) => {
                view.update(|s| s.reload = s.reload.wrapping_add(1));
                true
            }
            ActiveView::Idle | ActiveView::NotFound { .. } => false,
        }
    }

    /// Change the list view's state if it is mounted.
    pub fn update_home(&mut self, change: impl FnOnce(&mut crate::view_state::HomeState)) -> bool {
        match &mut self.view {
            ActiveView::Home(view) => {
                view.update(change);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MockHttpClient;
    use crate::app::Screen;
    use crate::config::FlicksConfig;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
    use serde_json::json;
    use std::sync::Arc;

    const LIST: &str = "http://movies.test/list";

    fn create_test_app() -> (App, MockHttpClient) {
        let client = MockHttpClient::new();
        client.set_json(LIST, json!([]));
        let config = FlicksConfig::new()
            .with_list_url(LIST)
            .with_detail_url("http://movies.test/detail/{id}");
        let app = App::new(config, Arc::new(client.clone())).unwrap();
        (app, client)
    }

    fn press(app: &mut App, code: KeyCode) {
        let key = KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        };
        let context = InputContext::from_app(app);
        if let Some(command) = CommandRegistry::new().dispatch(key, &context) {
            app.execute_command(command);
        }
    }

    #[tokio::test]
    async fn test_typing_updates_keyword() {
        let (mut app, _client) = create_test_app();
        app.navigate("/").unwrap();

        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.focus, Focus::Search);
        for c in "heat".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.focus, Focus::List);
        assert_eq!(app.home_state().map(|s| s.keyword.as_str()), Some("hea"));
    }

    #[tokio::test]
    async fn test_paste_only_in_search() {
        let (mut app, _client) = create_test_app();
        app.navigate("/").unwrap();

        assert!(!app.handle_paste("ignored"));
        app.focus = Focus::Search;
        assert!(app.handle_paste("blade\nrunner"));
        assert_eq!(
            app.home_state().map(|s| s.keyword.as_str()),
            Some("blade runner")
        );
    }

    #[tokio::test]
    async fn test_quit_key() {
        let (mut app, _client) = create_test_app();
        app.navigate("/").unwrap();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn test_reload_bumps_counter() {
        let (mut app, _client) = create_test_app();
        app.navigate("/").unwrap();
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.home_state().map(|s| s.reload), Some(1));
        assert_eq!(app.screen(), Some(Screen::Home));
    }

    #[test]
    fn test_commands_without_view_are_noops() {
        let (mut app, _client) = create_test_app();
        assert!(!app.execute_command(Command::MoveDown));
        assert!(!app.execute_command(Command::Reload));
        assert!(!app.execute_command(Command::Back));
    }
}
