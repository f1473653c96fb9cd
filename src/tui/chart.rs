use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::prelude::*;
use ratatui::symbols::Marker;
use ratatui::widgets::{Axis, Block, Chart, Dataset, GraphType, Paragraph};
use ratatui::DefaultTerminal;

use super::theme::ChartTheme;
use crate::output::{capitalize_club, format_average};
use crate::session::TrendDisplay;

/// Spacing between y axis ticks, in yards
pub const Y_TICK_STEP: u32 = 50;

/// Full-screen line chart of a club's recent shots
pub struct TerminalChart {
    theme: ChartTheme,
}

impl Default for TerminalChart {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalChart {
    pub fn new() -> Self {
        Self {
            theme: ChartTheme::default(),
        }
    }
}

impl TrendDisplay for TerminalChart {
    fn show_trend(&mut self, club: &str, shots: &[u32]) -> Result<()> {
        if shots.is_empty() {
            return Ok(());
        }

        // Init terminal (sets up panic hooks automatically)
        let mut terminal = ratatui::init();
        let result = run_chart(&mut terminal, &self.theme, club, shots);
        ratatui::restore();
        result
    }
}

/// Draw until any key is pressed
fn run_chart(
    terminal: &mut DefaultTerminal,
    theme: &ChartTheme,
    club: &str,
    shots: &[u32],
) -> Result<()> {
    let points = trend_points(shots);
    let ticks = y_ticks(shots);

    loop {
        terminal.draw(|frame| draw(frame, theme, club, shots, &points, &ticks))?;

        if let Event::Key(key) = event::read()? {
            // Filter for Press only (Windows compatibility)
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}

fn draw(
    frame: &mut Frame,
    theme: &ChartTheme,
    club: &str,
    shots: &[u32],
    points: &[(f64, f64)],
    ticks: &[u32],
) {
    let [chart_area, help_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

    let average = shots.iter().map(|&d| f64::from(d)).sum::<f64>() / shots.len() as f64;
    let title = format!(
        " {} - last {} shots (avg {} yards) ",
        capitalize_club(club),
        shots.len(),
        format_average(crate::stats::round2(average))
    );

    let dataset = Dataset::default()
        .name("Distance")
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(theme.line))
        .data(points);

    let x_labels: Vec<String> = (1..=shots.len()).map(|i| i.to_string()).collect();
    let y_labels: Vec<String> = ticks.iter().map(|t| t.to_string()).collect();
    let y_min = ticks.first().copied().unwrap_or(0);
    let y_max = ticks.last().copied().unwrap_or(Y_TICK_STEP);

    let chart = Chart::new(vec![dataset])
        .block(
            Block::bordered()
                .title(title)
                .title_style(theme.title_style)
                .border_style(Style::default().fg(theme.border)),
        )
        .x_axis(
            Axis::default()
                .title("Shot")
                .style(Style::default().fg(theme.axis))
                .bounds([1.0, shots.len().max(2) as f64])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("Yards")
                .style(Style::default().fg(theme.axis))
                .bounds([f64::from(y_min), f64::from(y_max)])
                .labels(y_labels),
        );

    frame.render_widget(chart, chart_area);
    frame.render_widget(
        Paragraph::new("Press any key to close").style(Style::default().fg(theme.muted)),
        help_area,
    );
}

/// Chart points: shot number (1-based) against distance
pub fn trend_points(shots: &[u32]) -> Vec<(f64, f64)> {
    shots
        .iter()
        .enumerate()
        .map(|(i, &d)| ((i + 1) as f64, f64::from(d)))
        .collect()
}

/// Y axis ticks every `Y_TICK_STEP` yards, covering every shot.
/// Always at least two ticks so the axis has a span.
pub fn y_ticks(shots: &[u32]) -> Vec<u32> {
    let min = shots.iter().copied().min().unwrap_or(0);
    let max = shots.iter().copied().max().unwrap_or(0);

    let low = min / Y_TICK_STEP * Y_TICK_STEP;
    let mut high = max.div_ceil(Y_TICK_STEP) * Y_TICK_STEP;
    if high <= low {
        high = low + Y_TICK_STEP;
    }

    (low..=high).step_by(Y_TICK_STEP as usize).collect()
}
