//! Message handling for the App.

use super::{ActiveView, App, AppMessage};

impl App {
    /// Route a fetch result to the mounted view. Returns whether it was
    /// applied; results for an unmounted view or a superseded fetch are
    /// dropped.
    pub fn handle_message(&mut self, message: AppMessage) -> bool {
        let applied = match (message, &mut self.view) {
            (AppMessage::Home(commit), ActiveView::Home(view)) => view.commit(commit),
            (AppMessage::Detail(commit), ActiveView::Detail(view)) => view.commit(commit),
            (message, _) => {
                tracing::debug!(
                    "Dropping result from '{}': its view is no longer mounted",
                    message.source()
                );
                false
            }
        };
        if applied {
            self.mark_dirty();
        }
        applied
    }

    /// Drain every result already queued, without waiting.
    pub fn drain_messages(&mut self) -> usize {
        let Some(mut rx) = self.message_rx.take() else {
            return 0;
        };
        let mut applied = 0;
        while let Ok(message) = rx.try_recv() {
            if self.handle_message(message) {
                applied += 1;
            }
        }
        self.message_rx = Some(rx);
        applied
    }
}
