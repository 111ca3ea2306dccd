//! Snapshot store for one view's state.

use std::sync::Arc;

type Subscriber<S> = Box<dyn FnMut(&S)>;

/// Holds the current state as an immutable snapshot.
///
/// Every change builds a new value and swaps it in, so a snapshot taken
/// before a change never observes it. Subscribers are told about each new
/// snapshot; a batch of changes produces one notification.
pub struct ViewStore<S> {
    state: Arc<S>,
    revision: u64,
    dirty: bool,
    subscribers: Vec<Subscriber<S>>,
}

impl<S: Clone> ViewStore<S> {
    pub fn new(initial: S) -> Self {
        Self {
            state: Arc::new(initial),
            revision: 0,
            dirty: true,
            subscribers: Vec::new(),
        }
    }

    pub fn get(&self) -> &S {
        &self.state
    }

    pub fn snapshot(&self) -> Arc<S> {
        Arc::clone(&self.state)
    }

    /// Bumped once per applied change or batch.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn update(&mut self, change: impl FnOnce(&mut S)) {
        let mut next = S::clone(&self.state);
        change(&mut next);
        self.replace(next);
    }

    /// Apply `changes` in order as a single replacement. Returns `false` and
    /// leaves the state untouched when there is nothing to apply.
    pub fn apply_batch<I, F>(&mut self, changes: I) -> bool
    where
        I: IntoIterator<Item = F>,
        F: FnOnce(&mut S),
    {
        let mut changes = changes.into_iter().peekable();
        if changes.peek().is_none() {
            return false;
        }
        let mut next = S::clone(&self.state);
        for change in changes {
            change(&mut next);
        }
        self.replace(next);
        true
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(&S) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Whether anything changed since the last call.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    fn replace(&mut self, next: S) {
        self.state = Arc::new(next);
        self.revision += 1;
        self.dirty = true;
        for subscriber in &mut self.subscribers {
            subscriber(&self.state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Form {
        items: Vec<u32>,
        loading: bool,
    }

    #[test]
    fn test_update_replaces_snapshot() {
        let mut store = ViewStore::new(Form::default());
        let before = store.snapshot();

        store.update(|s| s.items.push(1));

        assert!(before.items.is_empty());
        assert_eq!(store.get().items, vec![1]);
        assert_eq!(store.revision(), 1);
        assert!(!Arc::ptr_eq(&before, &store.snapshot()));
    }

    #[test]
    fn test_batch_notifies_once() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = ViewStore::new(Form::default());
        let sink = Rc::clone(&seen);
        store.subscribe(move |s: &Form| sink.borrow_mut().push(s.clone()));

        let changes: Vec<Box<dyn FnOnce(&mut Form)>> = vec![
            Box::new(|s| s.loading = true),
            Box::new(|s| s.items = vec![1, 2]),
        ];
        assert!(store.apply_batch(changes));

        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(
            seen[0],
            Form {
                items: vec![1, 2],
                loading: true
            }
        );
        assert_eq!(store.revision(), 1);
    }

    #[test]
    fn test_empty_batch_is_noop() {
        let mut store = ViewStore::new(Form::default());
        let none: Vec<Box<dyn FnOnce(&mut Form)>> = Vec::new();
        assert!(!store.apply_batch(none));
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_dirty_flag() {
        let mut store = ViewStore::new(Form::default());
        assert!(store.take_dirty());
        assert!(!store.take_dirty());
        store.update(|s| s.loading = true);
        assert!(store.take_dirty());
    }
}
