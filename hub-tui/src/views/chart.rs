//! Chart panel: draws the active `ChartSpec` with ratatui widgets.
//!
//! Bar uses `BarChart`, line and area use `Chart`, pie is rasterised onto a
//! braille `Canvas`. Points are drawn in the order the spec holds them,
//! which is the table's sort order.

use crate::state::App;
use crate::theme::rgb;
use crate::views::helpers::format_percent;
use crate::widgets::Spinner;
use hub_core::{ChartKind, ChartSpec, PieSlice};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Points},
        Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, List, ListItem,
        Paragraph,
    },
    Frame,
};
use std::f64::consts::{FRAC_PI_2, TAU};

/// Upper bound on pie grid resolution per axis.
const MAX_PIE_RESOLUTION: usize = 160;

pub fn render(f: &mut Frame<'_>, app: &App, spec: &ChartSpec, area: Rect) {
    let theme = &app.theme;
    let block = Block::default()
        .title(format!("{} Chart", spec.kind.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));

    if app.dashboard.is_loading() {
        let text = format!("{} Loading data…", Spinner::new(app.spinner_frame).glyph());
        render_message(f, block, text, Style::default().fg(theme.text_dim), area);
        return;
    }
    if spec.is_empty() {
        render_message(
            f,
            block,
            "No matching records".to_string(),
            Style::default().fg(theme.text_dim),
            area,
        );
        return;
    }

    match spec.kind {
        ChartKind::Bar => render_bar(f, app, spec, block, area),
        ChartKind::Line => render_line(f, app, spec, block, area, false),
        ChartKind::Area => render_line(f, app, spec, block, area, true),
        ChartKind::Pie => render_pie(f, app, spec, block, area),
    }
}

fn render_message(f: &mut Frame<'_>, block: Block<'_>, text: String, style: Style, area: Rect) {
    let paragraph = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(paragraph, area);
}

fn render_bar(f: &mut Frame<'_>, app: &App, spec: &ChartSpec, block: Block<'_>, area: Rect) {
    let color = rgb(spec.series_color);
    let bars: Vec<Bar> = spec
        .points
        .iter()
        .map(|point| {
            Bar::default()
                .value(u64::from(point.value))
                .label(Line::from(point.label.clone()))
                .text_value(point.value.to_string())
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .bar_style(Style::default().fg(color))
        .value_style(Style::default().fg(app.theme.text).add_modifier(Modifier::BOLD))
        .label_style(Style::default().fg(app.theme.text_dim))
        .max(u64::from(spec.max_value().max(1)))
        .data(BarGroup::default().bars(&bars));
    f.render_widget(chart, area);
}

fn render_line(
    f: &mut Frame<'_>,
    app: &App,
    spec: &ChartSpec,
    block: Block<'_>,
    area: Rect,
    filled: bool,
) {
    let theme = &app.theme;
    let color = rgb(spec.series_color);
    let values: Vec<f64> = spec.points.iter().map(|p| f64::from(p.value)).collect();
    let line: Vec<(f64, f64)> = values
        .iter()
        .enumerate()
        .map(|(index, value)| (index as f64, *value))
        .collect();

    let x_max = (values.len().saturating_sub(1)).max(1) as f64;
    let y_max = (f64::from(spec.max_value()) * 1.1).max(1.0);

    let fill = if filled {
        let columns = usize::from(area.width.saturating_sub(2)) * 2;
        let rows = usize::from(area.height.saturating_sub(2)) * 4;
        area_fill(&values, columns, rows, y_max)
    } else {
        Vec::new()
    };

    let mut datasets = Vec::with_capacity(2);
    if filled {
        datasets.push(
            Dataset::default()
                .marker(Marker::Braille)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(dim(color)))
                .data(&fill),
        );
    }
    datasets.push(
        Dataset::default()
            .name("value")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(color))
            .data(&line),
    );

    let first = spec.points.first().map(|p| p.label.clone()).unwrap_or_default();
    let last = spec.points.last().map(|p| p.label.clone()).unwrap_or_default();
    let label_style = Style::default().fg(theme.text_dim);

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .style(label_style)
                .bounds([0.0, x_max])
                .labels(vec![Span::raw(first), Span::raw(last)]),
        )
        .y_axis(
            Axis::default()
                .style(label_style)
                .bounds([0.0, y_max])
                .labels(vec![
                    Span::raw("0"),
                    Span::raw(format!("{:.0}", y_max / 2.0)),
                    Span::raw(format!("{:.0}", y_max)),
                ]),
        );
    f.render_widget(chart, area);
}

fn render_pie(f: &mut Frame<'_>, app: &App, spec: &ChartSpec, block: Block<'_>, area: Rect) {
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(inner);

    let slices = spec.slices();
    let canvas_area = chunks[0];
    let resolution = (usize::from(canvas_area.width) * 2)
        .max(usize::from(canvas_area.height) * 4)
        .min(MAX_PIE_RESOLUTION);
    let points = pie_points(&slices, resolution);
    let (x_bounds, y_bounds) = pie_bounds(canvas_area.width, canvas_area.height);
    let outline = app.theme.border;

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(|ctx| {
            if points.iter().all(|coords| coords.is_empty()) {
                ctx.draw(&Circle {
                    x: 0.0,
                    y: 0.0,
                    radius: 1.0,
                    color: outline,
                });
                return;
            }
            for (slice, coords) in slices.iter().zip(&points) {
                ctx.draw(&Points {
                    coords: coords.as_slice(),
                    color: rgb(slice.color),
                });
            }
        });
    f.render_widget(canvas, canvas_area);

    let items: Vec<ListItem> = slices
        .iter()
        .map(|slice| {
            ListItem::new(Line::from(vec![
                Span::styled("■ ", Style::default().fg(rgb(slice.color))),
                Span::styled(slice.label.clone(), Style::default().fg(app.theme.text)),
                Span::styled(
                    format!(" {} ({})", slice.value, format_percent(slice.fraction() * 100.0)),
                    Style::default().fg(app.theme.text_dim),
                ),
            ]))
        })
        .collect();
    f.render_widget(List::new(items), chunks[1]);
}

/// Canvas bounds that keep a unit circle round, given cells roughly twice
/// as tall as they are wide.
pub fn pie_bounds(width: u16, height: u16) -> ([f64; 2], [f64; 2]) {
    if width == 0 || height == 0 {
        return ([-1.0, 1.0], [-1.0, 1.0]);
    }
    let ratio = f64::from(width) / (2.0 * f64::from(height));
    if ratio >= 1.0 {
        ([-ratio, ratio], [-1.0, 1.0])
    } else {
        ([-1.0, 1.0], [-1.0 / ratio, 1.0 / ratio])
    }
}

/// Rasterise the unit disc on a `resolution` square grid and bucket each
/// point into the slice covering its angle, clockwise from twelve o'clock.
///
/// Returns one coordinate list per slice, in slice order.
pub fn pie_points(slices: &[PieSlice], resolution: usize) -> Vec<Vec<(f64, f64)>> {
    let mut buckets = vec![Vec::new(); slices.len()];
    if resolution < 2 {
        return buckets;
    }
    let step = 2.0 / (resolution - 1) as f64;
    for row in 0..resolution {
        let y = -1.0 + row as f64 * step;
        for column in 0..resolution {
            let x = -1.0 + column as f64 * step;
            if x * x + y * y > 1.0 {
                continue;
            }
            let fraction = ((FRAC_PI_2 - y.atan2(x)) / TAU).rem_euclid(1.0);
            if let Some(index) = slice_at(slices, fraction) {
                buckets[index].push((x, y));
            }
        }
    }
    buckets
}

fn slice_at(slices: &[PieSlice], fraction: f64) -> Option<usize> {
    slices
        .iter()
        .position(|s| s.fraction() > 0.0 && fraction >= s.start && fraction < s.end)
        .or_else(|| slices.iter().rposition(|s| s.fraction() > 0.0))
}

/// Points under the polyline through `values`, one braille dot apart.
pub fn area_fill(values: &[f64], columns: usize, rows: usize, y_max: f64) -> Vec<(f64, f64)> {
    if values.len() < 2 || columns < 2 || rows == 0 || y_max <= 0.0 {
        return Vec::new();
    }
    let x_max = (values.len() - 1) as f64;
    let y_step = y_max / rows as f64;
    let mut points = Vec::new();
    for column in 0..columns {
        let x = x_max * column as f64 / (columns - 1) as f64;
        let left = (x.floor() as usize).min(values.len() - 2);
        let t = x - left as f64;
        let top = values[left] + (values[left + 1] - values[left]) * t;
        let mut y = 0.0;
        while y < top {
            points.push((x, y));
            y += y_step;
        }
    }
    points
}

fn dim(color: Color) -> Color {
    match color {
        Color::Rgb(r, g, b) => Color::Rgb(r / 2, g / 2, b / 2),
        other => other,
    }
}
