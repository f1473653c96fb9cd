pub mod chart;
pub mod theme;

pub use chart::{trend_points, y_ticks, TerminalChart, Y_TICK_STEP};
pub use theme::ChartTheme;
