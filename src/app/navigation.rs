//! Navigation methods for the App.

use crate::error::RouteError;
use crate::router::{RouteMatch, RouteTable};
use crate::view_state::{mount_detail, mount_home};

use super::{ActiveView, App, Focus, Screen};

/// The application's routes: the list at `/`, details at `/movie/:id`, and a
/// not-found view for everything else.
pub fn app_routes() -> Result<RouteTable<Screen>, RouteError> {
    let table = RouteTable::new()
        .route("/", Screen::Home)?
        .route("/movie/:id", Screen::Detail)?
        .fallback(Screen::NotFound);
    table.validate()?;
    Ok(table)
}

impl App {
    /// Resolve `path`, record it in history and show its view.
    pub fn navigate(&mut self, path: &str) -> Result<(), RouteError> {
        let matched = self.routes.resolve(path)?;
        self.history.push(matched.path.clone());
        self.show(matched);
        Ok(())
    }

    /// Return to the previous path. Returns `false` at the start of history.
    pub fn back(&mut self) -> bool {
        let Some(path) = self.history.back().map(str::to_string) else {
            return false;
        };
        match self.routes.resolve(&path) {
            Ok(matched) => {
                self.show(matched);
                true
            }
            Err(e) => {
                tracing::warn!("History entry {} no longer resolves: {}", path, e);
                self.status = Some(e.to_string());
                false
            }
        }
    }

    /// Open the highlighted list entry.
    pub fn open_selected(&mut self) -> bool {
        let Some(id) = self.home_state().and_then(|s| s.selected_item()).map(|i| i.id) else {
            return false;
        };
        self.navigate(&format!("/movie/{}", id)).is_ok()
    }

    fn show(&mut self, matched: RouteMatch<Screen>) {
        self.focus = Focus::List;
        self.status = None;
        self.mark_dirty();

        let route_id = matched.param("id").unwrap_or_default().to_string();

        // Same view, new parameter: keep the mount and let the effect rerun.
        match (matched.view, &mut self.view) {
            (Screen::Detail, ActiveView::Detail(view)) => {
                if view.state().route_id != route_id {
                    tracing::debug!("Detail route id -> {}", route_id);
                    view.update(move |s| s.route_id = route_id);
                }
                return;
            }
            (Screen::Home, ActiveView::Home(_)) => return,
            _ => {}
        }

        std::mem::replace(&mut self.view, ActiveView::Idle).unmount();

        self.view = match matched.view {
            Screen::Home => ActiveView::Home(mount_home(&self.env)),
            Screen::Detail => ActiveView::Detail(mount_detail(&self.env, &route_id)),
            Screen::NotFound => {
                tracing::info!("No view for {}", matched.path);
                ActiveView::NotFound { path: matched.path }
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_routes() {
        let routes = app_routes().unwrap();
        assert_eq!(routes.resolve("/").unwrap().view, Screen::Home);
        assert_eq!(routes.resolve("/movie/9/").unwrap().view, Screen::Detail);
        assert_eq!(routes.resolve("/tv/9").unwrap().view, Screen::NotFound);
        assert_eq!(routes.len(), 2);
    }
}
