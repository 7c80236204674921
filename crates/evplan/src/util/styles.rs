//! Shared styling for the decision screens

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};

/// Color for help text and hints
pub const HELP_COLOR: Color = Color::DarkGray;

/// Color for table and panel headers
pub const HEADER_COLOR: Color = Color::Cyan;

/// Color for positive payoffs and EVs
pub const POSITIVE_COLOR: Color = Color::Green;

/// Color for negative payoffs and EVs
pub const NEGATIVE_COLOR: Color = Color::Red;

/// Color for warnings such as a stale EV result
pub const WARNING_COLOR: Color = Color::Yellow;

/// Line colors for chart series, cycled per decision
pub const SERIES_COLORS: [Color; 6] = [
    Color::Cyan,
    Color::Magenta,
    Color::Green,
    Color::Yellow,
    Color::LightBlue,
    Color::LightRed,
];

pub fn series_color(index: usize) -> Color {
    SERIES_COLORS[index % SERIES_COLORS.len()]
}

/// Style a monetary value by its sign.
pub fn amount_style(value: f64) -> Style {
    if value < 0.0 {
        Style::default().fg(NEGATIVE_COLOR)
    } else if value > 0.0 {
        Style::default().fg(POSITIVE_COLOR)
    } else {
        Style::default()
    }
}

/// Bordered block with a padded title and an optional bottom hint.
pub fn titled_block(title: &str, help_text: Option<&str>) -> Block<'static> {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title));

    match help_text {
        Some(help) => block.title_bottom(Line::from(help.to_string()).fg(HELP_COLOR)),
        None => block,
    }
}
