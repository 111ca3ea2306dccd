//! List screen: search box and movie list.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::app::Focus;
use crate::models::{fit_width, truncate_summary, Item};
use crate::view_state::{search_term, HomeState};

use super::helpers::{spinner, wrap_text};
use super::theme::{
    COLOR_ACCENT, COLOR_ACTIVE, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_SELECTED_BG, COLOR_TAG,
};
use super::RenderContext;

pub(super) fn render_home(frame: &mut Frame, area: Rect, state: &HomeState, ctx: &RenderContext) {
    let [search_area, body_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(1)]).areas(area);

    render_search_box(frame, search_area, state, ctx);

    if let Some(error) = &state.error {
        let text = Text::from(vec![
            Line::styled(error.user_message(), Style::default().fg(COLOR_ERROR)),
            Line::styled(
                format!("{}  ·  press r to retry", error.error_code()),
                Style::default().fg(COLOR_DIM),
            ),
        ]);
        frame.render_widget(
            Paragraph::new(text).wrap(Wrap { trim: true }).block(list_block("Movies")),
            body_area,
        );
        return;
    }

    if state.loading && state.items.is_empty() {
        frame.render_widget(
            Paragraph::new(format!("{} Loading...", spinner(ctx.tick)))
                .style(Style::default().fg(COLOR_DIM))
                .block(list_block("Movies")),
            body_area,
        );
        return;
    }

    if state.items.is_empty() {
        frame.render_widget(
            Paragraph::new("No movies matched.")
                .style(Style::default().fg(COLOR_DIM))
                .block(list_block("Movies")),
            body_area,
        );
        return;
    }

    let title = if state.loading {
        format!("Movies ({}) {}", state.items.len(), spinner(ctx.tick))
    } else {
        format!("Movies ({})", state.items.len())
    };
    let width = body_area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = state
        .items
        .iter()
        .map(|item| ListItem::new(item_lines(item, ctx.summary_limit, width)))
        .collect();

    let list = List::new(items)
        .block(list_block(&title))
        .highlight_style(Style::default().bg(COLOR_SELECTED_BG))
        .highlight_symbol("▌");
    let mut list_state = ListState::default().with_selected(Some(state.selected));
    frame.render_stateful_widget(list, body_area, &mut list_state);
}

fn render_search_box(frame: &mut Frame, area: Rect, state: &HomeState, ctx: &RenderContext) {
    let focused = ctx.focus == Focus::Search;
    let border = if focused { COLOR_ACTIVE } else { COLOR_BORDER };

    let hint = match search_term(&state.keyword, ctx.min_search_len) {
        None if !state.keyword.trim().is_empty() => {
            format!("  (type at least {} characters)", ctx.min_search_len)
        }
        _ => String::new(),
    };
    let mut spans = vec![Span::styled(state.keyword.clone(), Style::default().fg(COLOR_ACCENT))];
    if focused {
        spans.push(Span::styled("▏", Style::default().fg(COLOR_ACTIVE)));
    } else if state.keyword.is_empty() {
        spans.push(Span::styled("press / to search", Style::default().fg(COLOR_DIM)));
    }
    spans.push(Span::styled(hint, Style::default().fg(COLOR_DIM)));

    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .title(" Search "),
        ),
        area,
    );
}

/// Title, genres, then the shortened summary wrapped to `width`.
pub(super) fn item_lines(item: &Item, summary_limit: usize, width: usize) -> Text<'static> {
    let mut lines = vec![
        Line::styled(
            fit_width(&item.title, width).into_owned(),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            fit_width(&item.genre_line(), width).into_owned(),
            Style::default().fg(COLOR_TAG),
        ),
    ];
    let summary = truncate_summary(&item.summary, summary_limit);
    lines.extend(
        wrap_text(&summary, width)
            .into_iter()
            .map(|l| Line::styled(l, Style::default().fg(COLOR_DIM))),
    );
    lines.push(Line::default());
    Text::from(lines)
}

fn list_block(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(format!(" {} ", title))
}
