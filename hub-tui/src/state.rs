//! Application state.
//!
//! `App` is the single owner of the dashboard. Every key action and timer
//! tick lands here, synchronously, and the renderer reads it back.

use crate::config::TuiConfig;
use crate::keys::Action;
use crate::nav::Focus;
use crate::notifications::{Notification, NotificationLevel};
use crate::theme::HubTheme;
use hub_core::{Dashboard, Record, RecordId, SortField};
use std::time::Instant;
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct Modal {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct App {
    pub config: TuiConfig,
    pub theme: HubTheme,
    pub dashboard: Dashboard,
    pub focus: Focus,
    /// Column under the header cursor, as an index into the variant's columns.
    pub header_cursor: usize,
    /// Highlighted table row, tracked by id so it survives re-sorting.
    pub selected: Option<RecordId>,
    pub notifications: Vec<Notification>,
    pub modal: Option<Modal>,
    pub spinner_frame: usize,
}

impl App {
    pub fn new(config: TuiConfig) -> Self {
        let theme = config
            .theme
            .name
            .as_deref()
            .and_then(HubTheme::from_name)
            .unwrap_or_else(|| HubTheme::for_variant(config.variant));
        let dashboard = Dashboard::new(config.variant, config.debounce())
            .with_initial_view(config.initial_sort, config.initial_chart);
        let header_cursor = config
            .variant
            .columns()
            .iter()
            .position(|f| *f == dashboard.sort_spec().field)
            .unwrap_or(0);
        Self {
            config,
            theme,
            dashboard,
            focus: Focus::Search,
            header_cursor,
            selected: None,
            notifications: Vec::new(),
            modal: None,
            spinner_frame: 0,
        }
    }

    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.notifications.push(Notification::new(level, message));
    }

    pub fn latest_notification(&self) -> Option<&Notification> {
        self.notifications.last()
    }

    pub fn on_loaded(&mut self, records: Vec<Record>) {
        let count = records.len();
        if !self.dashboard.finish_loading(records) {
            warn!(count, "Ignoring duplicate record batch");
            return;
        }
        info!(count, variant = %self.dashboard.variant(), "Records loaded");
        self.notify(NotificationLevel::Success, format!("Loaded {} records", count));
        self.keep_selection_visible();
    }

    pub fn on_tick(&mut self, now: Instant) {
        if self.dashboard.is_loading() {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
        if self.dashboard.poll(now) {
            debug!(
                query = %self.dashboard.view().applied_query,
                matches = self.dashboard.derive().rows.len(),
                "Applied search query"
            );
            self.keep_selection_visible();
        }
    }

    /// Apply one key action. Returns `true` when the app should exit.
    pub fn apply(&mut self, action: Action, now: Instant) -> bool {
        if self.modal.is_some() {
            if action == Action::Quit {
                return true;
            }
            self.modal = None;
            return false;
        }

        let variant = self.dashboard.variant();
        match action {
            Action::Quit => return true,
            Action::NextFocus => self.focus = self.focus.next(variant),
            Action::PrevFocus => self.focus = self.focus.previous(variant),
            Action::FocusSearch => self.focus = Focus::Search,
            Action::OpenHelp => self.modal = Some(help_modal()),
            Action::Confirm => self.focus = Focus::Table,
            Action::Cancel => {
                if self.focus == Focus::Search {
                    self.dashboard.clear_query(now);
                }
            }
            Action::Input(c) => self.dashboard.push_query_char(c, now),
            Action::Backspace => self.dashboard.pop_query_char(now),
            Action::SelectChart(index) => self.select_chart(index),
            Action::NextChart => {
                self.dashboard.next_chart();
                debug!(chart = %self.dashboard.view().chart, "Chart changed");
            }
            Action::PrevChart => {
                self.dashboard.previous_chart();
                debug!(chart = %self.dashboard.view().chart, "Chart changed");
            }
            Action::SortColumn(index) => self.sort_column(index),
            Action::ColumnLeft => {
                self.header_cursor = self.header_cursor.saturating_sub(1);
            }
            Action::ColumnRight => {
                let last = variant.columns().len().saturating_sub(1);
                self.header_cursor = (self.header_cursor + 1).min(last);
            }
            Action::SortAtCursor => self.sort_column(self.header_cursor),
            Action::MoveDown => self.select_next(),
            Action::MoveUp => self.select_previous(),
        }
        false
    }

    pub fn active_sort_field(&self) -> SortField {
        self.dashboard.sort_spec().field
    }

    pub fn select_next(&mut self) {
        let ids = self.dashboard.derive().ids();
        select_next_id(&ids, &mut self.selected);
    }

    pub fn select_previous(&mut self) {
        let ids = self.dashboard.derive().ids();
        select_prev_id(&ids, &mut self.selected);
    }

    fn sort_column(&mut self, index: usize) {
        let columns = self.dashboard.variant().columns();
        match columns.get(index) {
            Some(field) => {
                self.dashboard.select_sort(*field);
                self.header_cursor = index;
                let spec = self.dashboard.sort_spec();
                debug!(field = %spec.field, direction = ?spec.direction, "Sort changed");
            }
            None => self.notify(
                NotificationLevel::Warning,
                format!("No column {} (table has {})", index + 1, columns.len()),
            ),
        }
    }

    fn select_chart(&mut self, index: usize) {
        let kinds = self.dashboard.variant().chart_kinds();
        match kinds.get(index) {
            Some(kind) => {
                self.dashboard.select_chart(*kind);
                debug!(chart = %kind, "Chart changed");
            }
            None => self.notify(
                NotificationLevel::Warning,
                format!("No chart {} ({} available)", index + 1, kinds.len()),
            ),
        }
    }

    fn keep_selection_visible(&mut self) {
        let ids = self.dashboard.derive().ids();
        let visible = self.selected.is_some_and(|id| ids.contains(&id));
        if !visible {
            self.selected = ids.first().copied();
        }
    }
}

fn help_modal() -> Modal {
    Modal {
        title: "Keybindings".to_string(),
        message: [
            "Tab / Shift-Tab   cycle search, charts, table",
            "/                 jump to search",
            "Esc               clear search",
            "Charts: 1-4 or b/l/a/p select, Left/Right cycle",
            "Table: 1-6 sort by column (again to flip), h/l move header,",
            "       Enter/Space sort at header, j/k move row",
            "q quit, Ctrl-C quit from anywhere",
        ]
        .join("\n"),
    }
}

fn select_next_id(ids: &[RecordId], selected: &mut Option<RecordId>) {
    if ids.is_empty() {
        *selected = None;
        return;
    }
    let index = selected
        .and_then(|id| ids.iter().position(|item| *item == id))
        .unwrap_or(usize::MAX);
    let next = if index == usize::MAX {
        0
    } else {
        (index + 1) % ids.len()
    };
    *selected = Some(ids[next]);
}

fn select_prev_id(ids: &[RecordId], selected: &mut Option<RecordId>) {
    if ids.is_empty() {
        *selected = None;
        return;
    }
    let index = selected
        .and_then(|id| ids.iter().position(|item| *item == id))
        .unwrap_or(0);
    let prev = if index == 0 { ids.len() - 1 } else { index - 1 };
    *selected = Some(ids[prev]);
}

// ============================================================================
// TESTS
// ============================================================================


// ============================================================================
// PROPERTY-BASED TESTS
// ============================================================================
