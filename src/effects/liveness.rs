//! Liveness tokens for in-flight fetches.
//!
//! A [`LivenessGuard`] owns a generation counter. Each fetch takes a
//! [`LivenessToken`] stamped with a fresh generation; issuing another token or
//! invalidating the guard moves the counter on, and every older token stops
//! being live. Results are committed only while their token is live.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::Cleanup;

/// Issues and revokes liveness tokens for one state slot.
#[derive(Debug, Clone, Default)]
pub struct LivenessGuard {
    current: Arc<AtomicU64>,
}

impl LivenessGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new generation. Every previously issued token goes stale.
    pub fn issue(&self) -> LivenessToken {
        let generation = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        LivenessToken {
            generation,
            current: Arc::clone(&self.current),
        }
    }

    /// Revoke every issued token.
    pub fn invalidate(&self) {
        self.current.fetch_add(1, Ordering::SeqCst);
    }

    pub fn generation(&self) -> u64 {
        self.current.load(Ordering::SeqCst)
    }

    /// A cleanup that invalidates this guard, for returning from effect work.
    pub fn cleanup(&self) -> Cleanup {
        let guard = self.clone();
        Box::new(move || guard.invalidate())
    }
}

/// Captured at fetch start, checked before the result is committed.
#[derive(Debug, Clone)]
pub struct LivenessToken {
    generation: u64,
    current: Arc<AtomicU64>,
}

impl LivenessToken {
    pub fn is_live(&self) -> bool {
        self.current.load(Ordering::SeqCst) == self.generation
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
