//! The list view.

use std::sync::Arc;

use crate::app::AppMessage;
use crate::effects::{Cleanup, Commit, EffectScheduler, EffectUnit, LivenessGuard};
use crate::error::FetchError;
use crate::fetch::with_timeout;
use crate::models::Item;

use super::{MountedView, ViewEnv};

pub const CATALOG_EFFECT: &str = "home.catalog";
pub const LIFECYCLE_EFFECT: &str = "home.lifecycle";

#[derive(Debug, Clone)]
pub struct HomeState {
    pub loading: bool,
    pub items: Arc<[Item]>,
    pub error: Option<FetchError>,
    /// Raw search input; see [`search_term`] for what is actually queried
    pub keyword: String,
    /// Bumped to refetch with unchanged search input
    pub reload: u32,
    /// Highlighted row
    pub selected: usize,
}

impl Default for HomeState {
    fn default() -> Self {
        Self {
            loading: true,
            items: Arc::from(Vec::new()),
            error: None,
            keyword: String::new(),
            reload: 0,
            selected: 0,
        }
    }
}

impl HomeState {
    pub fn selected_item(&self) -> Option<&Item> {
        self.items.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.items.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Settle a list fetch. On failure the previous items are cleared so the
    /// view never shows results for another query next to an error.
    pub fn apply_list(&mut self, result: Result<Vec<Item>, FetchError>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = Arc::from(items);
                self.error = None;
            }
            Err(error) => {
                self.items = Arc::from(Vec::new());
                self.error = Some(error);
            }
        }
        self.selected = self.selected.min(self.items.len().saturating_sub(1));
    }
}

/// The query derived from raw input: trimmed, or `None` when shorter than
/// `min_len` characters (which lists the unfiltered catalog).
pub fn search_term(keyword: &str, min_len: usize) -> Option<String> {
    let trimmed = keyword.trim();
    if trimmed.is_empty() || trimmed.chars().count() < min_len {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Mount the list view and start its first fetch.
pub fn mount_home(env: &ViewEnv) -> MountedView<HomeState> {
    let mut effects = EffectScheduler::new();

    effects.register(
        LIFECYCLE_EFFECT,
        EffectUnit::once(|_| {
            tracing::info!("List view mounted");
            Some(Box::new(|| tracing::info!("List view unmounted")) as Cleanup)
        }),
    );

    let min_len = env.config.min_search_len;
    let env = env.clone();
    let guard = LivenessGuard::new();
    effects.register(
        CATALOG_EFFECT,
        EffectUnit::new(
            move |s: &HomeState| (s.reload, search_term(&s.keyword, min_len)),
            move |(_, term): &(u32, Option<String>), ctx| {
                ctx.update(|s: &mut HomeState| {
                    s.loading = true;
                    s.error = None;
                });
                spawn_list_fetch(&env, &guard, term.as_deref());
                Some(guard.cleanup())
            },
        ),
    );

    MountedView::mount(HomeState::default(), effects)
}

fn spawn_list_fetch(env: &ViewEnv, guard: &LivenessGuard, term: Option<&str>) {
    let token = guard.issue();
    let url = env.config.endpoints.list_for(term);
    let timeout = env.config.request_timeout;
    let env = env.clone();
    tracing::info!("Fetching list: {}", url);

    tokio::spawn(async move {
        let result = with_timeout(timeout, env.pipeline.fetch_list(&url)).await;
        if let Err(ref e) = result {
            tracing::warn!("List fetch failed [{}]: {}", e.error_code(), e);
        }
        let commit = Commit::new(token, CATALOG_EFFECT, move |s: &mut HomeState| {
            s.apply_list(result)
        });
        env.deliver(AppMessage::Home(commit));
    });
}
