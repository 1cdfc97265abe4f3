//! Color palette for the branch list

use ratatui::style::Color;

// UI Chrome
pub const BORDER: Color = Color::Rgb(100, 110, 130);
pub const SURFACE_HIGHLIGHT: Color = Color::Rgb(50, 55, 70);

// Text
pub const TEXT_PRIMARY: Color = Color::Rgb(220, 220, 230);
pub const TEXT_DIM: Color = Color::Rgb(130, 135, 150);
pub const TEXT_MUTED: Color = Color::Rgb(90, 95, 110);

// Cursor row
pub const ACCENT_POSITIVE: Color = Color::Rgb(120, 180, 120);

// Detached HEAD entry
pub const ACCENT_WARNING: Color = Color::Rgb(200, 160, 80);
