//! Dependency-keyed effect scheduling.
//!
//! Each registered unit declares a dependency function over the view state.
//! After every state change the scheduler evaluates all units in registration
//! order: a unit runs on its first evaluation and again only when its
//! dependency value differs from the one it last ran with. Before a rerun (and
//! at retirement) the cleanup from the previous run is invoked.
//!
//! Dependencies are plain values compared with `PartialEq`. `()` means "run
//! once"; a tuple reruns when any member changes.

use std::fmt::Debug;
use std::marker::PhantomData;

/// Released before a unit reruns and when the view unmounts.
pub type Cleanup = Box<dyn FnOnce()>;

/// A deferred state change produced by effect work.
pub type Patch<S> = Box<dyn FnOnce(&mut S)>;

/// What an evaluation did with one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectOutcome {
    FirstRun,
    Rerun,
    Skipped,
}

impl EffectOutcome {
    pub fn ran(self) -> bool {
        !matches!(self, EffectOutcome::Skipped)
    }
}

/// Collects state changes requested by effect work during one evaluation.
///
/// Work never mutates the state it is evaluated against; its patches are
/// applied afterwards as one batch.
pub struct EffectContext<S> {
    patches: Vec<Patch<S>>,
}

impl<S> EffectContext<S> {
    fn new() -> Self {
        Self {
            patches: Vec::new(),
        }
    }

    pub fn update(&mut self, patch: impl FnOnce(&mut S) + 'static) {
        self.patches.push(Box::new(patch));
    }

    pub fn pending(&self) -> usize {
        self.patches.len()
    }
}

trait ErasedUnit<S> {
    fn evaluate(&mut self, state: &S, ctx: &mut EffectContext<S>) -> EffectOutcome;
    fn retire(&mut self);
}

struct Unit<S, D, F, W> {
    deps: F,
    work: W,
    last: Option<D>,
    cleanup: Option<Cleanup>,
    _state: PhantomData<fn(&S)>,
}

impl<S, D, F, W> ErasedUnit<S> for Unit<S, D, F, W>
where
    D: PartialEq + Debug,
    F: Fn(&S) -> D,
    W: FnMut(&D, &mut EffectContext<S>) -> Option<Cleanup>,
{
    fn evaluate(&mut self, state: &S, ctx: &mut EffectContext<S>) -> EffectOutcome {
        let next = (self.deps)(state);
        let outcome = match &self.last {
            None => EffectOutcome::FirstRun,
            Some(previous) if *previous != next => {
                tracing::trace!("Dependencies changed: {:?} -> {:?}", previous, next);
                EffectOutcome::Rerun
            }
            Some(_) => return EffectOutcome::Skipped,
        };

        if let Some(cleanup) = self.cleanup.take() {
            cleanup();
        }
        self.cleanup = (self.work)(&next, ctx);
        self.last = Some(next);
        outcome
    }

    fn retire(&mut self) {
        if let Some(cleanup) = self.cleanup.take() {
            cleanup();
        }
        self.last = None;
    }
}

/// A dependency function paired with the work it guards.
pub struct EffectUnit<S> {
    inner: Box<dyn ErasedUnit<S>>,
}

impl<S: 'static> EffectUnit<S> {
    pub fn new<D, F, W>(deps: F, work: W) -> Self
    where
        D: PartialEq + Debug + 'static,
        F: Fn(&S) -> D + 'static,
        W: FnMut(&D, &mut EffectContext<S>) -> Option<Cleanup> + 'static,
    {
        Self {
            inner: Box::new(Unit {
                deps,
                work,
                last: None,
                cleanup: None,
                _state: PhantomData,
            }),
        }
    }

    /// A unit with empty dependencies: runs at mount, cleans up at unmount.
    pub fn once<W>(mut work: W) -> Self
    where
        W: FnMut(&mut EffectContext<S>) -> Option<Cleanup> + 'static,
    {
        Self::new(|_: &S| (), move |_: &(), ctx| work(ctx))
    }
}

struct Registered<S> {
    identity: String,
    unit: Box<dyn ErasedUnit<S>>,
    runs: usize,
}

/// The ordered set of effect units for one mounted view.
pub struct EffectScheduler<S> {
    units: Vec<Registered<S>>,
}

impl<S> Default for EffectScheduler<S> {
    fn default() -> Self {
        Self { units: Vec::new() }
    }
}

impl<S> EffectScheduler<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `unit` under `identity`. A second unit with the same identity
    /// is ignored and `false` is returned.
    pub fn register(&mut self, identity: impl Into<String>, unit: EffectUnit<S>) -> bool {
        let identity = identity.into();
        if self.is_registered(&identity) {
            tracing::warn!("Effect '{}' already registered; ignoring duplicate", identity);
            return false;
        }
        self.units.push(Registered {
            identity,
            unit: unit.inner,
            runs: 0,
        });
        true
    }

    pub fn is_registered(&self, identity: &str) -> bool {
        self.units.iter().any(|u| u.identity == identity)
    }

    /// How many times the unit's work has run, if it is registered.
    pub fn runs(&self, identity: &str) -> Option<usize> {
        self.units
            .iter()
            .find(|u| u.identity == identity)
            .map(|u| u.runs)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Evaluate every unit against `state` and return the patches their work
    /// requested, in registration order.
    pub fn evaluate(&mut self, state: &S) -> Vec<Patch<S>> {
        let mut ctx = EffectContext::new();
        for registered in &mut self.units {
            let outcome = registered.unit.evaluate(state, &mut ctx);
            if outcome.ran() {
                registered.runs += 1;
                tracing::debug!(
                    "Effect '{}' {:?} (run {})",
                    registered.identity,
                    outcome,
                    registered.runs
                );
            }
        }
        ctx.patches
    }

    /// Invoke every outstanding cleanup. Units evaluate as first runs again
    /// afterwards.
    pub fn retire_all(&mut self) {
        for registered in &mut self.units {
            registered.unit.retire();
        }
    }
}
