//! Application state and the view lifecycle.
//!
//! `App` owns the route table, the navigation history and the single mounted
//! view. Spawned fetches report back through [`AppMessage`]s which the main
//! loop feeds into [`App::handle_message`].

mod handlers;
mod messages;
mod navigation;
mod types;

pub use messages::AppMessage;
pub use navigation::app_routes;
pub use types::{Focus, Screen};

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::config::FlicksConfig;
use crate::error::FlicksResult;
use crate::fetch::FetchPipeline;
use crate::router::{Navigator, RouteTable};
use crate::traits::HttpClient;
use crate::view_state::{DetailState, HomeState, MountedView, ViewEnv};

/// The view currently on screen.
pub enum ActiveView {
    /// Nothing mounted yet
    Idle,
    Home(MountedView<HomeState>),
    Detail(MountedView<DetailState>),
    NotFound { path: String },
}

impl ActiveView {
    pub fn screen(&self) -> Option<Screen> {
        match self {
            ActiveView::Idle => None,
            ActiveView::Home(_) => Some(Screen::Home),
            ActiveView::Detail(_) => Some(Screen::Detail),
            ActiveView::NotFound { .. } => Some(Screen::NotFound),
        }
    }

    pub fn is_loading(&self) -> bool {
        match self {
            ActiveView::Home(view) => view.state().loading,
            ActiveView::Detail(view) => view.state().loading,
            ActiveView::Idle | ActiveView::NotFound { .. } => false,
        }
    }

    fn take_dirty(&mut self) -> bool {
        match self {
            ActiveView::Home(view) => view.take_dirty(),
            ActiveView::Detail(view) => view.take_dirty(),
            ActiveView::Idle | ActiveView::NotFound { .. } => false,
        }
    }

    /// Retire the view's effects. In-flight fetches become stale.
    fn unmount(self) {
        match self {
            ActiveView::Home(view) => view.unmount(),
            ActiveView::Detail(view) => view.unmount(),
            ActiveView::Idle | ActiveView::NotFound { .. } => {}
        }
    }
}

/// Main application state
pub struct App {
    /// Validated configuration shared with spawned fetches
    pub config: Arc<FlicksConfig>,
    /// Route table, validated at construction
    pub routes: RouteTable<Screen>,
    /// Visited paths for back navigation
    pub history: Navigator,
    /// The mounted view
    pub view: ActiveView,
    /// Where key presses go
    pub focus: Focus,
    /// Receiver for fetch results (taken by the main loop)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Dirty flag: set on app-level changes, cleared after each draw.
    pub needs_redraw: bool,
    /// Tick counter for the loading spinner
    pub tick_count: u64,
    /// Transient status line (navigation errors and the like)
    pub status: Option<String>,
    env: ViewEnv,
}

impl App {
    /// Validate configuration and routes and build an app with nothing
    /// mounted. Call [`App::navigate`] to show the first view.
    pub fn new(config: FlicksConfig, client: Arc<dyn HttpClient>) -> FlicksResult<Self> {
        config.validate()?;
        let routes = app_routes()?;
        let config = Arc::new(config);
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let env = ViewEnv::new(FetchPipeline::new(client), Arc::clone(&config), message_tx);

        tracing::debug!("Routes: {:?}", routes.patterns().collect::<Vec<_>>());

        Ok(Self {
            config,
            routes,
            history: Navigator::new(),
            view: ActiveView::Idle,
            focus: Focus::default(),
            message_rx: Some(message_rx),
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            status: None,
            env,
        })
    }

    pub fn screen(&self) -> Option<Screen> {
        self.view.screen()
    }

    pub fn home_state(&self) -> Option<&HomeState> {
        match &self.view {
            ActiveView::Home(view) => Some(view.state()),
            _ => None,
        }
    }

    pub fn detail_state(&self) -> Option<&DetailState> {
        match &self.view {
            ActiveView::Detail(view) => Some(view.state()),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.view.is_loading()
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Whether a redraw is due; clears the flags.
    pub fn take_redraw(&mut self) -> bool {
        let view_dirty = self.view.take_dirty();
        std::mem::take(&mut self.needs_redraw) || view_dirty
    }

    /// Advance the spinner. Only redraws while something is loading.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.is_loading() {
            self.mark_dirty();
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
