//! UI rendering.
//!
//! Rendering is a pure function of [`App`]: each screen reads its view's
//! current snapshot and draws it. Nothing here mutates state.

mod detail;
mod helpers;
mod home;
mod theme;

pub use helpers::wrap_text;
pub use theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR};

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{ActiveView, App, Focus, Screen};
use detail::render_detail;
use home::render_home;

/// Per-frame values the screens need besides their own state.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext {
    pub tick: u64,
    pub focus: Focus,
    pub summary_limit: usize,
    pub min_search_len: usize,
}

impl RenderContext {
    pub fn from_app(app: &App) -> Self {
        Self {
            tick: app.tick_count,
            focus: app.focus,
            summary_limit: app.config.summary_limit,
            min_search_len: app.config.min_search_len,
        }
    }
}

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the UI based on the mounted view
pub fn render(frame: &mut Frame, app: &App) {
    let ctx = RenderContext::from_app(app);
    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_header(frame, header_area, app);

    match &app.view {
        ActiveView::Home(view) => render_home(frame, body_area, view.state(), &ctx),
        ActiveView::Detail(view) => render_detail(frame, body_area, view.state(), &ctx),
        ActiveView::NotFound { path } => render_not_found(frame, body_area, path),
        ActiveView::Idle => {}
    }

    render_footer(frame, footer_area, app);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let path = app.history.current().unwrap_or("/");
    let line = Line::from(vec![
        Span::styled("flicks ", Style::default().fg(COLOR_ACCENT)),
        Span::styled(path.to_string(), Style::default().fg(COLOR_DIM)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_not_found(frame: &mut Frame, area: Rect, path: &str) {
    let lines = vec![
        Line::styled(format!("Nothing lives at {}", path), Style::default().fg(COLOR_ERROR)),
        Line::styled("Press g to go to the list.", Style::default().fg(COLOR_DIM)),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// Keybind hints for the current screen, or the status message if any.
pub fn footer_hint(app: &App) -> String {
    if let Some(status) = &app.status {
        return status.clone();
    }
    match (app.screen(), app.focus) {
        (Some(Screen::Home), Focus::Search) => "enter/esc done · ctrl+u clear".to_string(),
        (Some(Screen::Home), Focus::List) => {
            "↑↓ select · enter open · / search · r reload · q quit".to_string()
        }
        (Some(Screen::Detail), _) => "esc back · r reload · g list · q quit".to_string(),
        (Some(Screen::NotFound), _) => "esc back · g list · q quit".to_string(),
        (None, _) => "q quit".to_string(),
    }
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    frame.render_widget(
        Paragraph::new(footer_hint(app)).style(Style::default().fg(COLOR_DIM)),
        area,
    );
}
