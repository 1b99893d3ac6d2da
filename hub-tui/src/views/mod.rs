//! View rendering.
//!
//! One screen: header, stat cards (cyber only), search box, chart selector
//! (cyber only), then the chart beside the table, and a footer. The
//! pipeline runs once per frame and every panel reads the same view.

pub mod chart;
pub mod detail;
pub mod helpers;
pub mod search;
pub mod stats;
pub mod table;

pub use helpers::centered_rect;

use crate::nav::Focus;
use crate::notifications::NotificationLevel;
use crate::state::App;
use crate::theme::focus_border;
use crate::widgets::{FilterBar, FilterOption};
use chrono::Utc;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render_view(f: &mut Frame<'_>, app: &App) {
    let variant = app.dashboard.variant();
    let view = app.dashboard.derive();

    let mut constraints = vec![Constraint::Length(3)];
    if variant.shows_summary() {
        constraints.push(Constraint::Length(3));
    }
    constraints.push(Constraint::Length(3));
    if variant.chart_kinds().len() > 1 {
        constraints.push(Constraint::Length(3));
    }
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(3));

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(f.size());

    let mut slot = layout.iter().copied();
    let mut next = || slot.next().unwrap_or_default();

    render_header(f, app, next());
    if variant.shows_summary() {
        stats::render(f, app, &view.summary, next());
    }
    search::render(f, app, view.rows.len(), next());
    if variant.chart_kinds().len() > 1 {
        render_chart_selector(f, app, next());
    }

    let body = next();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(body);
    chart::render(f, app, &view.chart, columns[0]);

    if variant.has_insights() && !app.dashboard.is_loading() {
        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(7)])
            .split(columns[1]);
        table::render(f, app, &view, right[0]);
        detail::render(f, app, &view, right[1]);
    } else {
        table::render(f, app, &view, columns[1]);
    }

    render_footer(f, app, next());

    if app.modal.is_some() {
        render_modal(f, app);
    }
}

fn render_header(f: &mut Frame<'_>, app: &App, area: Rect) {
    let variant = app.dashboard.variant();
    let status = if app.dashboard.is_loading() {
        "loading".to_string()
    } else {
        format!("{} records", app.dashboard.records().len())
    };
    let title = Line::from(vec![
        Span::styled(
            variant.title(),
            Style::default()
                .fg(app.theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" | {} | Focus: {}", status, app.focus.title()),
            Style::default().fg(app.theme.text_dim),
        ),
    ]);
    let block = Block::default().borders(Borders::ALL).title(title);
    f.render_widget(block, area);
}

fn render_chart_selector(f: &mut Frame<'_>, app: &App, area: Rect) {
    let active = app.dashboard.view().chart;
    let options: Vec<FilterOption> = app
        .dashboard
        .variant()
        .chart_kinds()
        .iter()
        .map(|kind| FilterOption::new(kind.label(), *kind == active))
        .collect();
    let theme = &app.theme;
    FilterBar {
        title: "Chart",
        filters: &options,
        active_style: Style::default()
            .fg(theme.bg)
            .bg(theme.primary)
            .add_modifier(Modifier::BOLD),
        inactive_style: Style::default().fg(theme.text_dim),
        border_style: Style::default().fg(focus_border(app.focus == Focus::Charts, theme)),
    }
    .render(f, area);
}

fn render_footer(f: &mut Frame<'_>, app: &App, area: Rect) {
    let help = match app.focus {
        Focus::Search => "type to filter • Esc clear • Enter table • Tab next panel • ? help",
        Focus::Charts => "1-4 / b l a p chart • ←/→ cycle • Tab next panel • q quit",
        Focus::Table => "number keys sort • h/l header • Enter sort • j/k row • / search • q quit",
    };
    let fresh = app
        .latest_notification()
        .filter(|note| note.is_fresh(Utc::now()));
    let (text, style) = match fresh {
        Some(note) => {
            let color = match note.level {
                NotificationLevel::Info => app.theme.tertiary,
                NotificationLevel::Warning => app.theme.warning,
                NotificationLevel::Success => app.theme.success,
            };
            (
                format!("{}: {}", note.level.label(), note.message),
                Style::default().fg(color),
            )
        }
        None => (help.to_string(), Style::default().fg(app.theme.text_dim)),
    };
    let footer = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .style(style);
    f.render_widget(footer, area);
}

fn render_modal(f: &mut Frame<'_>, app: &App) {
    let Some(modal) = &app.modal else {
        return;
    };
    let area = centered_rect(60, 50, f.size());
    let paragraph = Paragraph::new(modal.message.as_str())
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(modal.title.as_str())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border_focus)),
        );
    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}
