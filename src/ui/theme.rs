//! Color theme constants.

use ratatui::style::Color;

/// Primary border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Highlights and titles
pub const COLOR_ACCENT: Color = Color::White;

/// Border of the focused search box
pub const COLOR_ACTIVE: Color = Color::LightGreen;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Genre tags
pub const COLOR_TAG: Color = Color::Rgb(0, 122, 204);

/// Rating stars
pub const COLOR_RATING: Color = Color::Yellow;

pub const COLOR_ERROR: Color = Color::Red;

/// Background of the highlighted list row
pub const COLOR_SELECTED_BG: Color = Color::Rgb(30, 30, 40);

/// Braille spinner frames, advanced once per tick
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
