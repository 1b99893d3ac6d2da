//! Detail panel for the highlighted row, with its trend sparkline.

use crate::state::App;
use crate::theme::growth_color;
use crate::views::helpers::format_percent;
use crate::widgets::DetailPanel;
use hub_core::{DerivedView, Record};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Span,
    widgets::{Block, Borders, Paragraph, Sparkline},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, view: &DerivedView<'_>, area: Rect) {
    let theme = &app.theme;
    let record = app
        .selected
        .and_then(|id| view.position(id))
        .map(|index| view.rows[index]);

    let Some(record) = record else {
        let hint = Paragraph::new("Select a row with j/k")
            .style(Style::default().fg(theme.text_dim))
            .block(Block::default().title("Details").borders(Borders::ALL));
        f.render_widget(hint, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    DetailPanel {
        title: "Details",
        fields: fields(record, app),
        label_style: Style::default().fg(theme.secondary),
        border_style: Style::default().fg(theme.border),
    }
    .render(f, chunks[0]);

    let trend: Vec<u64> = record
        .trend()
        .map(|points| points.iter().map(|p| u64::from(*p)).collect())
        .unwrap_or_default();
    let sparkline = Sparkline::default()
        .block(Block::default().title("7-day Trend").borders(Borders::ALL))
        .style(Style::default().fg(theme.primary))
        .max(100)
        .data(&trend);
    f.render_widget(sparkline, chunks[1]);
}

fn fields<'a>(record: &'a Record, app: &App) -> Vec<(&'static str, Span<'a>)> {
    let mut fields = vec![
        ("Name", Span::raw(record.name.as_str())),
        ("Value", Span::raw(record.value.to_string())),
        ("Category", Span::raw(record.category.as_str())),
    ];
    if let Some(growth) = record.growth() {
        fields.push((
            "Growth",
            Span::styled(
                format_percent(growth),
                Style::default().fg(growth_color(growth, &app.theme)),
            ),
        ));
    }
    if let Some(engagement) = record.engagement() {
        fields.push(("Engagement", Span::raw(format_percent(engagement))));
    }
    fields
}
