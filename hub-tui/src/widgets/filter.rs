//! Selector bar widget: a row of labelled options, one of them active.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

#[derive(Debug, Clone)]
pub struct FilterOption {
    pub label: String,
    pub active: bool,
}

impl FilterOption {
    pub fn new(label: impl Into<String>, active: bool) -> Self {
        Self {
            label: label.into(),
            active,
        }
    }
}

pub struct FilterBar<'a> {
    pub title: &'a str,
    pub filters: &'a [FilterOption],
    pub active_style: Style,
    pub inactive_style: Style,
    pub border_style: Style,
}

impl<'a> FilterBar<'a> {
    pub fn spans(&self) -> Vec<Span<'static>> {
        self.filters
            .iter()
            .enumerate()
            .flat_map(|(index, filter)| {
                let style = if filter.active {
                    self.active_style
                } else {
                    self.inactive_style
                };
                [
                    Span::styled(format!(" {}:{} ", index + 1, filter.label), style),
                    Span::raw(" "),
                ]
            })
            .collect()
    }

    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let paragraph = Paragraph::new(Line::from(self.spans())).block(
            Block::default()
                .title(self.title)
                .borders(Borders::ALL)
                .border_style(self.border_style),
        );
        f.render_widget(paragraph, area);
    }
}
