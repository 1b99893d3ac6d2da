//! Search box.

use crate::nav::Focus;
use crate::state::App;
use crate::theme::focus_border;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{block::Title, Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, matches: usize, area: Rect) {
    let theme = &app.theme;
    let view = app.dashboard.view();
    let focused = app.focus == Focus::Search;

    let mut spans = vec![Span::styled("🔍 ", Style::default().fg(theme.text_dim))];
    if view.search_query.is_empty() && !focused {
        spans.push(Span::styled(
            app.dashboard.variant().search_placeholder(),
            Style::default().fg(theme.text_dim),
        ));
    } else {
        spans.push(Span::styled(
            view.search_query.clone(),
            Style::default().fg(theme.text),
        ));
    }
    if focused {
        spans.push(Span::styled(
            "▏",
            Style::default()
                .fg(theme.border_focus)
                .add_modifier(Modifier::SLOW_BLINK),
        ));
    }

    let status = if view.query_pending() {
        "filtering…".to_string()
    } else {
        format!("{} of {}", matches, app.dashboard.records().len())
    };

    let block = Block::default()
        .title("Search [/]")
        .title(
            Title::from(Span::styled(status, Style::default().fg(theme.text_dim)))
                .alignment(Alignment::Right),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(focus_border(focused, theme)));

    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
