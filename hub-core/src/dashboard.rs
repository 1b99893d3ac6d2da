//! Dashboard state: the record collection plus its view state.
//!
//! Owned by exactly one host. Every mutation goes through a method here so
//! that the query only ever reaches the filter stage via the debouncer.

use crate::chart::ChartKind;
use crate::debounce::Debouncer;
use crate::record::Record;
use crate::sort::{SortField, SortSpec};
use crate::variant::Variant;
use crate::view::{derive, DerivedView, ViewState};
use std::time::{Duration, Instant};

/// Default quiet window before typed text reaches the filter stage.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone)]
pub struct Dashboard {
    variant: Variant,
    records: Vec<Record>,
    loading: bool,
    view: ViewState,
    query_debounce: Debouncer<String>,
}

impl Dashboard {
    /// A dashboard waiting for its first (and only) batch of records.
    pub fn new(variant: Variant, debounce: Duration) -> Self {
        Self {
            variant,
            records: Vec::new(),
            loading: true,
            view: ViewState::default(),
            query_debounce: Debouncer::new(debounce),
        }
    }

    /// Start from a configured sort field and chart kind.
    ///
    /// Anything the variant does not offer falls back to the default.
    pub fn with_initial_view(mut self, field: SortField, chart: ChartKind) -> Self {
        if self.variant.supports_field(field) {
            self.view.sort.field = field;
        }
        if self.variant.supports_chart(chart) {
            self.view.chart = chart;
        }
        self
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Accept the loaded batch. Only the first batch is kept.
    ///
    /// Returns `false` when a batch was already accepted.
    pub fn finish_loading(&mut self, records: Vec<Record>) -> bool {
        if !self.loading {
            return false;
        }
        self.records = records;
        self.loading = false;
        true
    }

    /// Replace the raw query. The display updates now; the filter stage
    /// sees it after the debounce window.
    pub fn set_query(&mut self, text: impl Into<String>, now: Instant) {
        self.view.search_query = text.into();
        self.query_debounce
            .schedule(self.view.search_query.clone(), now);
    }

    pub fn push_query_char(&mut self, c: char, now: Instant) {
        let mut text = self.view.search_query.clone();
        text.push(c);
        self.set_query(text, now);
    }

    pub fn pop_query_char(&mut self, now: Instant) {
        let mut text = self.view.search_query.clone();
        if text.pop().is_some() {
            self.set_query(text, now);
        }
    }

    pub fn clear_query(&mut self, now: Instant) {
        if !self.view.search_query.is_empty() {
            self.set_query(String::new(), now);
        }
    }

    pub fn query_deadline(&self) -> Option<Instant> {
        self.query_debounce.deadline()
    }

    /// Apply the debounced query if its quiet window has elapsed.
    ///
    /// Returns `true` when the filter input changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.query_debounce.fire_due(now) {
            Some(query) if query != self.view.applied_query => {
                self.view.applied_query = query;
                true
            }
            _ => false,
        }
    }

    /// Header click on `field`.
    ///
    /// Fields outside the variant's columns are a programming error.
    pub fn select_sort(&mut self, field: SortField) -> bool {
        debug_assert!(
            self.variant.supports_field(field),
            "sort field {} not offered by {} variant",
            field,
            self.variant
        );
        if !self.variant.supports_field(field) {
            return false;
        }
        self.view.sort.select(field);
        true
    }

    pub fn sort_spec(&self) -> SortSpec {
        self.view.sort
    }

    /// Switch the active chart.
    ///
    /// Kinds outside the variant's selector are a programming error.
    pub fn select_chart(&mut self, kind: ChartKind) -> bool {
        debug_assert!(
            self.variant.supports_chart(kind),
            "chart kind {} not offered by {} variant",
            kind,
            self.variant
        );
        if !self.variant.supports_chart(kind) {
            return false;
        }
        self.view.chart = kind;
        true
    }

    pub fn next_chart(&mut self) {
        self.view.chart = cycle(self.variant.chart_kinds(), self.view.chart, 1);
    }

    pub fn previous_chart(&mut self) {
        let kinds = self.variant.chart_kinds();
        self.view.chart = cycle(kinds, self.view.chart, kinds.len().saturating_sub(1));
    }

    pub fn derive(&self) -> DerivedView<'_> {
        derive(&self.records, &self.view, self.variant)
    }
}

fn cycle(kinds: &[ChartKind], current: ChartKind, step: usize) -> ChartKind {
    if kinds.is_empty() {
        return current;
    }
    let index = kinds.iter().position(|k| *k == current).unwrap_or(0);
    kinds[(index + step) % kinds.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::generate;
    use crate::sort::SortDirection;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn loaded(variant: Variant) -> Dashboard {
        let mut dashboard = Dashboard::new(variant, DEFAULT_DEBOUNCE);
        let records = generate(variant, 20, &mut StdRng::seed_from_u64(99));
        assert!(dashboard.finish_loading(records));
        dashboard
    }

    #[test]
    fn test_starts_loading_with_defaults() {
        let dashboard = Dashboard::new(Variant::Cyber, DEFAULT_DEBOUNCE);
        assert!(dashboard.is_loading());
        assert!(dashboard.derive().is_empty());
        assert_eq!(dashboard.sort_spec(), SortSpec::default());
        assert_eq!(dashboard.view().chart, ChartKind::Bar);
    }

    #[test]
    fn test_second_batch_is_ignored() {
        let mut dashboard = loaded(Variant::Cyber);
        assert!(!dashboard.finish_loading(Vec::new()));
        assert_eq!(dashboard.records().len(), 20);
    }

    #[test]
    fn test_query_reaches_filter_only_after_window() {
        let start = Instant::now();
        let mut dashboard = loaded(Variant::Classic);

        for (i, c) in "item 1".chars().enumerate() {
            dashboard.push_query_char(c, start + Duration::from_millis(50 * i as u64));
        }
        let last = start + Duration::from_millis(250);
        assert_eq!(dashboard.view().search_query, "item 1");
        assert!(!dashboard.poll(last + Duration::from_millis(299)));
        assert_eq!(dashboard.derive().rows.len(), 20);

        assert!(dashboard.poll(last + DEFAULT_DEBOUNCE));
        assert_eq!(dashboard.view().applied_query, "item 1");
        assert_eq!(dashboard.derive().rows.len(), 11);
    }

    #[test]
    fn test_backspace_and_clear_are_debounced() {
        let start = Instant::now();
        let mut dashboard = loaded(Variant::Classic);
        dashboard.set_query("Item 2", start);
        dashboard.poll(start + DEFAULT_DEBOUNCE);
        assert_eq!(dashboard.derive().rows.len(), 2);

        dashboard.pop_query_char(start + DEFAULT_DEBOUNCE);
        assert_eq!(dashboard.view().search_query, "Item ");
        dashboard.clear_query(start + DEFAULT_DEBOUNCE);
        assert!(dashboard.view().query_pending());
        assert!(dashboard.poll(start + DEFAULT_DEBOUNCE * 2));
        assert_eq!(dashboard.derive().rows.len(), 20);
    }

    #[test]
    fn test_chart_switches_leave_rows_alone() {
        let mut dashboard = loaded(Variant::Cyber);
        dashboard.select_sort(SortField::Value);
        let before = dashboard.derive().ids();
        for kind in [ChartKind::Pie, ChartKind::Line, ChartKind::Pie] {
            assert!(dashboard.select_chart(kind));
            assert_eq!(dashboard.derive().ids(), before);
            assert_eq!(dashboard.derive().chart.kind, kind);
        }
    }

    #[test]
    fn test_chart_cycle_wraps() {
        let mut dashboard = loaded(Variant::Cyber);
        dashboard.previous_chart();
        assert_eq!(dashboard.view().chart, ChartKind::Pie);
        dashboard.next_chart();
        assert_eq!(dashboard.view().chart, ChartKind::Bar);

        let mut classic = loaded(Variant::Classic);
        classic.next_chart();
        assert_eq!(classic.view().chart, ChartKind::Bar);
    }

    #[test]
    fn test_sort_toggle_keeps_membership() {
        let mut dashboard = loaded(Variant::Cyber);
        let mut ascending = dashboard.derive().ids();
        dashboard.select_sort(SortField::Id);
        assert_eq!(dashboard.sort_spec().direction, SortDirection::Descending);
        let mut descending = dashboard.derive().ids();
        dashboard.select_sort(SortField::Id);
        assert_eq!(dashboard.sort_spec().direction, SortDirection::Ascending);
        ascending.sort_unstable();
        descending.sort_unstable();
        assert_eq!(ascending, descending);
    }

    #[test]
    fn test_initial_view_falls_back_for_classic() {
        let dashboard = Dashboard::new(Variant::Classic, DEFAULT_DEBOUNCE)
            .with_initial_view(SortField::Growth, ChartKind::Area);
        assert_eq!(dashboard.sort_spec().field, SortField::Id);
        assert_eq!(dashboard.view().chart, ChartKind::Bar);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "not offered")]
    fn test_unsupported_chart_asserts_in_debug() {
        let mut dashboard = loaded(Variant::Classic);
        dashboard.select_chart(ChartKind::Pie);
    }
}
