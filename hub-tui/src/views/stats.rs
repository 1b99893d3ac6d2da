//! Summary stat cards (cyber variant only).

use crate::state::App;
use crate::views::helpers::{format_optional_percent, format_thousands};
use crate::widgets::StatusIndicator;
use hub_core::Summary;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, summary: &Summary, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let theme = &app.theme;
    let cards = [
        (
            "Total Value",
            format_thousands(summary.total_value),
            theme.tertiary,
        ),
        (
            "Avg Engagement",
            format_optional_percent(summary.avg_engagement),
            theme.primary,
        ),
        (
            "Peak Growth",
            format_optional_percent(summary.max_growth),
            theme.secondary,
        ),
    ];

    for ((title, status, color), chunk) in cards.into_iter().zip(chunks.iter()) {
        StatusIndicator {
            title: title.to_string(),
            status,
            style: Style::default().fg(color),
            border_style: Style::default().fg(color),
        }
        .render(f, *chunk);
    }
}
