//! A view's state store bound to its effect units.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::effects::{Commit, EffectScheduler};

use super::ViewStore;

/// Upper bound on effect re-evaluation after a single change.
pub const MAX_SETTLE_PASSES: usize = 16;

static NEXT_MOUNT_ID: AtomicU64 = AtomicU64::new(1);

/// A mounted view: the store, its effects, and the settle loop between them.
///
/// Every state change is followed by effect evaluation; patches requested by
/// effect work are applied as one batch and evaluation repeats until no unit
/// runs. Dropping the view retires its effects, which invalidates any fetch
/// still in flight.
pub struct MountedView<S> {
    store: ViewStore<S>,
    effects: EffectScheduler<S>,
    mount_id: u64,
}

impl<S: Clone + 'static> MountedView<S> {
    pub fn mount(initial: S, effects: EffectScheduler<S>) -> Self {
        let mount_id = NEXT_MOUNT_ID.fetch_add(1, Ordering::Relaxed);
        tracing::debug!("Mounting view #{} with {} effect(s)", mount_id, effects.len());
        let mut view = Self {
            store: ViewStore::new(initial),
            effects,
            mount_id,
        };
        view.settle();
        view
    }

    pub fn state(&self) -> &S {
        self.store.get()
    }

    pub fn snapshot(&self) -> Arc<S> {
        self.store.snapshot()
    }

    pub fn revision(&self) -> u64 {
        self.store.revision()
    }

    pub fn mount_id(&self) -> u64 {
        self.mount_id
    }

    pub fn effects(&self) -> &EffectScheduler<S> {
        &self.effects
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(&S) + 'static) {
        self.store.subscribe(subscriber);
    }

    pub fn take_dirty(&mut self) -> bool {
        self.store.take_dirty()
    }

    /// Apply a user-driven change, then run whatever effects it triggers.
    pub fn update(&mut self, change: impl FnOnce(&mut S)) {
        self.store.update(change);
        self.settle();
    }

    /// Apply a fetch result if its token is still live. Returns whether it
    /// was applied.
    pub fn commit(&mut self, commit: Commit<S>) -> bool {
        if !commit.is_live() {
            tracing::debug!(
                "Discarding stale result from '{}' (generation {}) on view #{}",
                commit.source(),
                commit.generation(),
                self.mount_id
            );
            return false;
        }
        let apply = commit.into_apply();
        self.update(apply);
        true
    }

    /// Retire the view's effects and drop its state.
    pub fn unmount(self) {
        tracing::debug!("Unmounting view #{}", self.mount_id);
    }

    fn settle(&mut self) {
        for _ in 0..MAX_SETTLE_PASSES {
            let patches = self.effects.evaluate(self.store.get());
            if !self.store.apply_batch(patches) {
                return;
            }
        }
        tracing::warn!(
            "View #{} still changing after {} effect passes; giving up",
            self.mount_id,
            MAX_SETTLE_PASSES
        );
    }
}

impl<S> Drop for MountedView<S> {
    fn drop(&mut self) {
        self.effects.retire_all();
    }
}
