//! AppMessage enum for async communication within the application.

use crate::effects::Commit;
use crate::view_state::{DetailState, HomeState};

/// Results sent back to the UI task by spawned fetches
#[derive(Debug)]
pub enum AppMessage {
    /// A list fetch finished
    Home(Commit<HomeState>),
    /// A detail fetch finished
    Detail(Commit<DetailState>),
}

impl AppMessage {
    pub fn source(&self) -> &'static str {
        match self {
            AppMessage::Home(commit) => commit.source(),
            AppMessage::Detail(commit) => commit.source(),
        }
    }
}
