//! Colors for the trend chart

use ratatui::prelude::*;

#[derive(Debug, Clone)]
pub struct ChartTheme {
    pub line: Color,
    pub axis: Color,
    pub border: Color,
    pub muted: Color,
    pub title_style: Style,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            line: Color::Cyan,
            axis: Color::Gray,
            border: Color::DarkGray,
            muted: Color::DarkGray,
            title_style: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        }
    }
}
