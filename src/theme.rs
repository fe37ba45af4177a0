//! Color palette and shared styles.

use ratatui::style::{Color, Modifier, Style};

pub const PRIMARY_COLOR: Color = Color::Rgb(64, 156, 255);
pub const ACCENT_COLOR: Color = Color::Rgb(255, 99, 71);
pub const SUCCESS_COLOR: Color = Color::Rgb(80, 200, 120);
pub const WARNING_COLOR: Color = Color::Rgb(255, 196, 0);
pub const ERROR_COLOR: Color = Color::Rgb(235, 80, 80);
pub const MUTED_COLOR: Color = Color::DarkGray;

pub const BORDER_STYLE: Style = Style::new().fg(Color::DarkGray);
pub const FOCUSED_BORDER_STYLE: Style = Style::new().fg(PRIMARY_COLOR);
pub const FOCUSED_TITLE_STYLE: Style = Style::new()
    .fg(PRIMARY_COLOR)
    .add_modifier(Modifier::BOLD);

/// Highlight for the selected table row.
pub const SELECTED_ROW_STYLE: Style = Style::new()
    .bg(Color::Rgb(30, 50, 80))
    .add_modifier(Modifier::BOLD);

/// Style applied to rows still shown from a previous result while reloading.
pub const STALE_ROW_STYLE: Style = Style::new()
    .fg(MUTED_COLOR)
    .add_modifier(Modifier::DIM);
