//! Per-view state and the effects that keep it in sync with its inputs.
//!
//! ```text
//!   user input ──► MountedView::update ──► ViewStore (new snapshot)
//!                        │                        │
//!                        ▼                        ▼
//!                 EffectScheduler ◄──── deps(snapshot) changed?
//!                        │
//!                        ▼ spawn
//!                  FetchPipeline ──► AppMessage ──► MountedView::commit
//!                                                    (token still live?)
//! ```
//!
//! - [`ViewStore`]: snapshot store with subscribers
//! - [`MountedView`]: store + effects + settle loop
//! - [`HomeState`] / [`mount_home`]: the list view
//! - [`DetailState`] / [`mount_detail`]: the detail view

pub mod detail;
mod env;
pub mod home;
mod mount;
mod store;

pub use detail::{mount_detail, parse_movie_id, DetailState};
pub use env::ViewEnv;
pub use home::{mount_home, search_term, HomeState};
pub use mount::{MountedView, MAX_SETTLE_PASSES};
pub use store::ViewStore;
