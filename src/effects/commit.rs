//! Results travelling back from spawned fetches.

use std::fmt;

use super::LivenessToken;

/// A state change produced off the UI task, applied only while its token is
/// live.
pub struct Commit<S> {
    token: LivenessToken,
    source: &'static str,
    apply: Box<dyn FnOnce(&mut S) + Send>,
}

impl<S> Commit<S> {
    pub fn new(
        token: LivenessToken,
        source: &'static str,
        apply: impl FnOnce(&mut S) + Send + 'static,
    ) -> Self {
        Self {
            token,
            source,
            apply: Box::new(apply),
        }
    }

    pub fn is_live(&self) -> bool {
        self.token.is_live()
    }

    /// Effect identity that spawned the fetch.
    pub fn source(&self) -> &'static str {
        self.source
    }

    pub fn generation(&self) -> u64 {
        self.token.generation()
    }

    pub(crate) fn into_apply(self) -> Box<dyn FnOnce(&mut S) + Send> {
        self.apply
    }
}

impl<S> fmt::Debug for Commit<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Commit")
            .field("source", &self.source)
            .field("generation", &self.token.generation())
            .field("live", &self.token.is_live())
            .finish()
    }
}
