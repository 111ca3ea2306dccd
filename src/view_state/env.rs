//! Shared handles the view effects need to start fetches.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::app::AppMessage;
use crate::config::FlicksConfig;
use crate::fetch::FetchPipeline;

/// Everything a view's effects capture: the pipeline, the configuration and
/// the channel results come back on.
#[derive(Clone)]
pub struct ViewEnv {
    pub pipeline: FetchPipeline,
    pub config: Arc<FlicksConfig>,
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
}

impl ViewEnv {
    pub fn new(
        pipeline: FetchPipeline,
        config: Arc<FlicksConfig>,
        message_tx: mpsc::UnboundedSender<AppMessage>,
    ) -> Self {
        Self {
            pipeline,
            config,
            message_tx,
        }
    }

    /// Hand a finished fetch back to the UI task. A closed channel means the
    /// app is shutting down, so the result is dropped.
    pub(crate) fn deliver(&self, message: AppMessage) {
        if self.message_tx.send(message).is_err() {
            tracing::debug!("App channel closed; dropping fetch result");
        }
    }
}
