//! Detail screen.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::models::DetailItem;
use crate::view_state::DetailState;

use super::helpers::spinner;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_RATING, COLOR_TAG};
use super::RenderContext;

pub(super) fn render_detail(
    frame: &mut Frame,
    area: Rect,
    state: &DetailState,
    ctx: &RenderContext,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(format!(" Movie {} ", state.route_id));

    let text = if let Some(error) = &state.error {
        Text::from(vec![
            Line::styled(error.user_message(), Style::default().fg(COLOR_ERROR)),
            Line::styled(error.to_string(), Style::default().fg(COLOR_DIM)),
        ])
    } else if let Some(detail) = &state.detail {
        detail_text(detail)
    } else if state.loading {
        Text::styled(
            format!("{} Loading...", spinner(ctx.tick)),
            Style::default().fg(COLOR_DIM),
        )
    } else {
        Text::default()
    };

    frame.render_widget(
        Paragraph::new(text).wrap(Wrap { trim: false }).block(block),
        area,
    );
}

fn meta_line(detail: &DetailItem) -> Line<'static> {
    let mut parts: Vec<Span<'static>> = Vec::new();
    let mut push = |span: Span<'static>| {
        if !parts.is_empty() {
            parts.push(Span::styled("  ·  ", Style::default().fg(COLOR_DIM)));
        }
        parts.push(span);
    };

    if let Some(year) = detail.year {
        push(Span::raw(year.to_string()));
    }
    if let Some(rating) = detail.rating {
        push(Span::styled(
            format!("★ {:.1}", rating),
            Style::default().fg(COLOR_RATING),
        ));
    }
    if let Some(runtime) = detail.runtime_label() {
        push(Span::raw(runtime));
    }
    if let Some(language) = &detail.language {
        push(Span::raw(language.to_uppercase()));
    }
    if let Some(likes) = detail.like_count {
        push(Span::styled(
            format!("♥ {}", likes),
            Style::default().fg(COLOR_DIM),
        ));
    }
    Line::from(parts)
}

pub(super) fn detail_text(detail: &DetailItem) -> Text<'static> {
    let mut lines = vec![
        Line::styled(
            detail.title.clone(),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        ),
        meta_line(detail),
    ];
    if !detail.genres.is_empty() {
        lines.push(Line::styled(
            detail.genres.join(" / "),
            Style::default().fg(COLOR_TAG),
        ));
    }
    lines.push(Line::default());
    for paragraph in detail.description.lines() {
        lines.push(Line::raw(paragraph.to_string()));
    }
    if let Some(url) = &detail.url {
        lines.push(Line::default());
        lines.push(Line::styled(url.clone(), Style::default().fg(COLOR_DIM)));
    }
    Text::from(lines)
}
