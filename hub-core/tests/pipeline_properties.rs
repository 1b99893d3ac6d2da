use hub_core::{derive, filter, ChartKind, Dashboard, SortDirection, SortField, SortSpec, Variant, ViewState};
use hub_test_utils::assertions::{assert_chart_follows_rows, assert_row_ids, assert_rows_match};
use hub_test_utils::fixtures::{dataset, item, items, loaded_dashboard, seeded_batch};
use hub_test_utils::generators::{arb_batch, arb_chart_kind, arb_query, arb_sort_spec, arb_variant};
use hub_test_utils::{ManualClock, DEFAULT_DEBOUNCE};
use proptest::prelude::*;

fn state(query: &str, sort: SortSpec, chart: ChartKind) -> ViewState {
    let mut state = ViewState::new(sort, chart);
    state.search_query = query.to_string();
    state.applied_query = query.to_string();
    state
}

#[test]
fn item_one_matches_eleven_records() {
    let records = items(20);
    let view = derive(&records, &state("Item 1", SortSpec::default(), ChartKind::Bar), Variant::Classic);
    assert_row_ids(&view, &[1, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19]);
    assert_rows_match(&view, "item 1");
}

#[test]
fn value_descending_tie_break_is_stable() {
    let records = vec![item(1, 5), item(2, 50), item(3, 5)];
    let sort = SortSpec::new(SortField::Value, SortDirection::Descending);
    let view = derive(&records, &state("", sort, ChartKind::Bar), Variant::Classic);
    assert_row_ids(&view, &[2, 1, 3]);
}

#[test]
fn total_value_for_three_rows() {
    let records = vec![item(1, 10), item(2, 20), item(3, 30)];
    let view = derive(&records, &ViewState::default(), Variant::Classic);
    assert_eq!(view.summary.total_value, 60);
}

#[test]
fn no_match_yields_empty_aggregates() {
    let records = seeded_batch(Variant::Cyber, 20, 3);
    let view = derive(
        &records,
        &state("zzz_no_match", SortSpec::default(), ChartKind::Pie),
        Variant::Cyber,
    );
    assert!(view.is_empty());
    assert_eq!(view.summary.total_value, 0);
    assert_eq!(view.summary.avg_engagement, None);
    assert_eq!(view.summary.max_growth, None);
    assert!(view.chart.slices().is_empty());
}

#[test]
fn peak_growth_and_engagement_follow_filter() {
    let records = vec![
        dataset(1, 100, 40.0, 10.0),
        dataset(2, 200, -10.0, 30.0),
        dataset(12, 300, 5.0, 50.0),
    ];
    let view = derive(
        &records,
        &state("dataset 1", SortSpec::default(), ChartKind::Bar),
        Variant::Cyber,
    );
    assert_row_ids(&view, &[1, 12]);
    assert_eq!(view.summary.total_value, 400);
    assert_eq!(view.summary.max_growth, Some(40.0));
    assert_eq!(view.summary.avg_engagement, Some(30.0));
}

#[test]
fn typing_fast_filters_once_with_last_value() {
    let mut clock = ManualClock::new();
    let mut dashboard = loaded_dashboard(Variant::Classic, items(20));

    for c in "Item 1".chars() {
        dashboard.push_query_char(c, clock.now());
        assert!(!dashboard.poll(clock.advance_ms(100)));
    }
    assert_eq!(dashboard.derive().rows.len(), 20);

    clock.advance(DEFAULT_DEBOUNCE);
    assert!(dashboard.poll(clock.now()));
    assert_eq!(dashboard.derive().rows.len(), 11);
    assert!(!dashboard.poll(clock.advance_ms(1_000)));
}

#[test]
fn pie_line_pie_keeps_rows() {
    let mut dashboard = Dashboard::new(Variant::Cyber, DEFAULT_DEBOUNCE);
    dashboard.finish_loading(seeded_batch(Variant::Cyber, 20, 11));
    dashboard.select_sort(SortField::Engagement);
    let rows = dashboard.derive().ids();
    for kind in [ChartKind::Pie, ChartKind::Line, ChartKind::Pie] {
        dashboard.select_chart(kind);
        let view = dashboard.derive();
        assert_eq!(view.ids(), rows);
        assert_chart_follows_rows(&view);
    }
}

proptest! {
    #[test]
    fn filter_only_returns_matches(records in arb_batch(Variant::Classic, 30), query in arb_query()) {
        let matched = filter(&records, &query);
        let needle = query.to_lowercase();
        prop_assert!(matched.iter().all(|r| r.name.to_lowercase().contains(&needle)));
        let expected = records.iter().filter(|r| r.name.to_lowercase().contains(&needle)).count();
        prop_assert_eq!(matched.len(), expected);
        if query.is_empty() {
            prop_assert_eq!(matched.len(), records.len());
        }
    }

    #[test]
    fn total_value_matches_visible_rows(
        variant in arb_variant(),
        records in arb_batch(Variant::Cyber, 30),
        query in arb_query(),
        sort in arb_sort_spec(),
        chart in arb_chart_kind(),
    ) {
        let view = derive(&records, &state(&query, sort, chart), variant);
        let expected: u64 = view.rows.iter().map(|r| u64::from(r.value)).sum();
        prop_assert_eq!(view.summary.total_value, expected);
        prop_assert_eq!(view.summary.count, view.rows.len());
    }

    #[test]
    fn rederive_is_idempotent(records in arb_batch(Variant::Cyber, 30), sort in arb_sort_spec()) {
        let view_state = state("", sort, ChartKind::Bar);
        let first = derive(&records, &view_state, Variant::Cyber);
        let second = derive(&records, &view_state, Variant::Cyber);
        prop_assert_eq!(first.ids(), second.ids());
    }

    #[test]
    fn chart_kind_never_changes_rows(
        records in arb_batch(Variant::Cyber, 30),
        sort in arb_sort_spec(),
        a in arb_chart_kind(),
        b in arb_chart_kind(),
    ) {
        let left = derive(&records, &state("", sort, a), Variant::Cyber);
        let right = derive(&records, &state("", sort, b), Variant::Cyber);
        prop_assert_eq!(left.ids(), right.ids());
        prop_assert_eq!(left.summary, right.summary);
    }
}
