//! The detail view, keyed by the route's `id` parameter.

use std::sync::Arc;

use crate::app::AppMessage;
use crate::effects::{Cleanup, Commit, EffectScheduler, EffectUnit, LivenessGuard};
use crate::error::{FetchError, ValidationError, ViewError};
use crate::fetch::with_timeout;
use crate::models::DetailItem;
use crate::router::parse_param_value;

use super::{MountedView, ViewEnv};

pub const DETAIL_EFFECT: &str = "detail.fetch";
pub const LIFECYCLE_EFFECT: &str = "detail.lifecycle";

#[derive(Debug, Clone)]
pub struct DetailState {
    /// The raw `id` route parameter
    pub route_id: String,
    pub loading: bool,
    pub detail: Option<Arc<DetailItem>>,
    pub error: Option<ViewError>,
    /// Bumped to retry the same id
    pub reload: u32,
}

impl DetailState {
    pub fn new(route_id: impl Into<String>) -> Self {
        Self {
            route_id: route_id.into(),
            loading: true,
            detail: None,
            error: None,
            reload: 0,
        }
    }

    fn begin(&mut self) {
        self.loading = true;
        self.detail = None;
        self.error = None;
    }

    fn reject(&mut self, error: ValidationError) {
        self.loading = false;
        self.detail = None;
        self.error = Some(error.into());
    }

    pub fn apply_detail(&mut self, result: Result<DetailItem, FetchError>) {
        self.loading = false;
        match result {
            Ok(detail) => {
                self.detail = Some(Arc::new(detail));
                self.error = None;
            }
            Err(error) => {
                self.detail = None;
                self.error = Some(error.into());
            }
        }
    }
}

/// Movie ids are positive integers.
pub fn parse_movie_id(raw: &str) -> Result<u64, ValidationError> {
    let id: u64 = parse_param_value("id", raw)?;
    if id == 0 {
        return Err(ValidationError::new("id", raw, "must be a positive integer"));
    }
    Ok(id)
}

/// Mount the detail view for `route_id` and start its fetch.
pub fn mount_detail(env: &ViewEnv, route_id: &str) -> MountedView<DetailState> {
    let mut effects = EffectScheduler::new();

    effects.register(
        LIFECYCLE_EFFECT,
        EffectUnit::once(|_| {
            tracing::info!("Detail view mounted");
            Some(Box::new(|| tracing::info!("Detail view unmounted")) as Cleanup)
        }),
    );

    let env = env.clone();
    let guard = LivenessGuard::new();
    effects.register(
        DETAIL_EFFECT,
        EffectUnit::new(
            |s: &DetailState| (s.route_id.clone(), s.reload),
            move |(raw_id, _): &(String, u32), ctx| match parse_movie_id(raw_id) {
                Ok(id) => {
                    ctx.update(DetailState::begin);
                    spawn_detail_fetch(&env, &guard, id);
                    Some(guard.cleanup())
                }
                Err(error) => {
                    tracing::warn!("Rejected detail route: {}", error);
                    ctx.update(move |s: &mut DetailState| s.reject(error));
                    None
                }
            },
        ),
    );

    MountedView::mount(DetailState::new(route_id), effects)
}

fn spawn_detail_fetch(env: &ViewEnv, guard: &LivenessGuard, id: u64) {
    let token = guard.issue();
    let template = env.config.endpoints.detail_url.clone();
    let timeout = env.config.request_timeout;
    let env = env.clone();
    tracing::info!("Fetching detail for movie {}", id);

    tokio::spawn(async move {
        let result = with_timeout(timeout, env.pipeline.fetch_detail(&template, id)).await;
        if let Err(ref e) = result {
            tracing::warn!("Detail fetch for {} failed [{}]: {}", id, e.error_code(), e);
        }
        let commit = Commit::new(token, DETAIL_EFFECT, move |s: &mut DetailState| {
            s.apply_detail(result)
        });
        env.deliver(AppMessage::Detail(commit));
    });
}
