//! Records table.

use crate::nav::Focus;
use crate::state::App;
use crate::theme::{focus_border, growth_color, HubTheme};
use crate::views::helpers::{format_percent, EMPTY_STAT};
use crate::widgets::Spinner;
use hub_core::{DerivedView, Record, SortField, SortSpec};
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, view: &DerivedView<'_>, area: Rect) {
    let theme = &app.theme;
    let focused = app.focus == Focus::Table;
    let block = Block::default()
        .title(format!("Records ({})", view.rows.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(focus_border(focused, theme)));

    if app.dashboard.is_loading() {
        let spinner = Spinner::new(app.spinner_frame);
        let paragraph = Paragraph::new(format!("{} Loading records…", spinner.glyph()))
            .style(Style::default().fg(theme.text_dim))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(paragraph, area);
        return;
    }

    if view.is_empty() {
        let message = format!(
            "No records match \"{}\"",
            app.dashboard.view().applied_query
        );
        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(theme.text_dim))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(paragraph, area);
        return;
    }

    let columns = app.dashboard.variant().columns();
    let cursor = focused.then_some(app.header_cursor);
    let header = Row::new(
        columns
            .iter()
            .enumerate()
            .map(|(index, field)| {
                header_cell(*field, app.dashboard.sort_spec(), cursor == Some(index), theme)
            })
            .collect::<Vec<_>>(),
    )
    .style(Style::default().fg(theme.tertiary).add_modifier(Modifier::BOLD))
    .bottom_margin(1);

    let rows: Vec<Row> = view
        .rows
        .iter()
        .map(|record| {
            Row::new(
                columns
                    .iter()
                    .map(|field| body_cell(record, *field, theme))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let widths: Vec<Constraint> = columns.iter().map(|field| column_width(*field)).collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(theme.bg_highlight)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(app.selected.and_then(|id| view.position(id)));
    f.render_stateful_widget(table, area, &mut state);
}

/// Column label, with the direction glyph on the active sort field.
pub fn header_label(field: SortField, sort: SortSpec) -> String {
    if field == sort.field {
        format!("{} {}", field.label(), sort.direction.glyph())
    } else {
        field.label().to_string()
    }
}

fn header_cell(field: SortField, sort: SortSpec, under_cursor: bool, theme: &HubTheme) -> Cell<'static> {
    let mut style = Style::default();
    if field == sort.field {
        style = style.fg(theme.primary);
    }
    if under_cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }
    Cell::from(Span::styled(header_label(field, sort), style))
}

fn body_cell(record: &Record, field: SortField, theme: &HubTheme) -> Cell<'static> {
    match field {
        SortField::Id => Cell::from(record.id.to_string()),
        SortField::Name => Cell::from(record.name.clone()),
        SortField::Value => Cell::from(record.value.to_string()),
        SortField::Category => Cell::from(record.category.to_string()),
        SortField::Growth => match record.growth() {
            Some(growth) => Cell::from(Span::styled(
                format_percent(growth),
                Style::default().fg(growth_color(growth, theme)),
            )),
            None => Cell::from(EMPTY_STAT),
        },
        SortField::Engagement => match record.engagement() {
            Some(engagement) => Cell::from(format_percent(engagement)),
            None => Cell::from(EMPTY_STAT),
        },
    }
}

fn column_width(field: SortField) -> Constraint {
    match field {
        SortField::Id => Constraint::Length(4),
        SortField::Name => Constraint::Min(12),
        SortField::Value => Constraint::Length(7),
        SortField::Category => Constraint::Length(10),
        SortField::Growth => Constraint::Length(8),
        SortField::Engagement => Constraint::Length(12),
    }
}
