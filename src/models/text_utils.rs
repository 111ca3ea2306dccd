//! Text shaping for list rendering.

use std::borrow::Cow;
use unicode_width::UnicodeWidthChar;

/// Marker appended to shortened text.
pub const ELLIPSIS: &str = "...";

/// Cut `summary` to `limit` characters and append [`ELLIPSIS`] when it is
/// longer than `limit`. Counts chars, never splits one.
pub fn truncate_summary(summary: &str, limit: usize) -> Cow<'_, str> {
    match summary.char_indices().nth(limit) {
        Some((byte_index, _)) => Cow::Owned(format!("{}{}", &summary[..byte_index], ELLIPSIS)),
        None => Cow::Borrowed(summary),
    }
}

/// Fit `text` into `max_width` terminal columns, ending with "…" when cut.
pub fn fit_width(text: &str, max_width: usize) -> Cow<'_, str> {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return Cow::Borrowed(text);
    }
    if max_width == 0 {
        return Cow::Borrowed("");
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    Cow::Owned(out)
}
