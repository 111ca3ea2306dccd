//! Side effects keyed on view-state dependencies.
//!
//! - [`scheduler`] decides when effect work runs and when its cleanup fires
//! - [`liveness`] marks in-flight fetches stale once their effect is cleaned up
//! - [`commit`] carries fetch results back to the owning view

pub mod commit;
pub mod liveness;
pub mod scheduler;

pub use commit::Commit;
pub use liveness::{LivenessGuard, LivenessToken};
pub use scheduler::{Cleanup, EffectContext, EffectOutcome, EffectScheduler, EffectUnit, Patch};
