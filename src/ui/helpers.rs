//! Text helpers shared by the screens.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::theme::SPINNER_FRAMES;

pub fn spinner(tick: u64) -> &'static str {
    SPINNER_FRAMES[(tick as usize) % SPINNER_FRAMES.len()]
}

/// Greedy word wrap by display width. Words wider than `width` are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut line = String::new();
    let mut used = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        let gap = usize::from(used > 0);

        if used + gap + word_width <= width {
            if gap == 1 {
                line.push(' ');
            }
            line.push_str(word);
            used += gap + word_width;
            continue;
        }

        if used > 0 {
            lines.push(std::mem::take(&mut line));
            used = 0;
        }

        if word_width <= width {
            line.push_str(word);
            used = word_width;
            continue;
        }

        for c in word.chars() {
            let w = c.width().unwrap_or(0);
            if used + w > width {
                lines.push(std::mem::take(&mut line));
                used = 0;
            }
            line.push(c);
            used += w;
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
