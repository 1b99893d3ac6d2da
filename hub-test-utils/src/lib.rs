//! Analytics Hub Test Utilities
//!
//! Centralized test infrastructure for the workspace:
//! - A manual clock for stepping debounce windows
//! - Proptest generators for records and view state
//! - Test fixtures for common scenarios
//! - Custom assertions for derived views

// Re-export core types for convenience
pub use hub_core::{
    Category, ChartKind, Dashboard, DerivedView, Insight, Record, RecordId, SortDirection,
    SortField, SortSpec, Variant, ViewState, DEFAULT_DEBOUNCE, TREND_LEN,
};

use std::time::{Duration, Instant};

// ============================================================================
// MANUAL CLOCK
// ============================================================================

/// Deterministic time source for debounce tests.
///
/// The core takes `now` as an argument everywhere, so tests step this
/// clock instead of sleeping.
#[derive(Debug, Clone, Copy)]
pub struct ManualClock {
    origin: Instant,
    elapsed: Duration,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            elapsed: Duration::ZERO,
        }
    }

    pub fn now(&self) -> Instant {
        self.origin + self.elapsed
    }

    /// Move time forward and return the new instant.
    pub fn advance(&mut self, by: Duration) -> Instant {
        self.elapsed += by;
        self.now()
    }

    pub fn advance_ms(&mut self, ms: u64) -> Instant {
        self.advance(Duration::from_millis(ms))
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// PROPTEST GENERATORS
// ============================================================================

pub mod generators {
    //! Proptest strategies for generating hub types.

    use super::*;
    use proptest::prelude::*;

    /// Generate a Variant.
    pub fn arb_variant() -> impl Strategy<Value = Variant> {
        prop_oneof![Just(Variant::Cyber), Just(Variant::Classic)]
    }

    /// Generate a SortField offered by any variant.
    pub fn arb_sort_field() -> impl Strategy<Value = SortField> {
        prop::sample::select(SortField::ALL.to_vec())
    }

    /// Generate a SortField offered by the given variant.
    pub fn arb_sort_field_for(variant: Variant) -> impl Strategy<Value = SortField> {
        prop::sample::select(variant.columns().to_vec())
    }

    /// Generate a SortDirection.
    pub fn arb_sort_direction() -> impl Strategy<Value = SortDirection> {
        prop_oneof![Just(SortDirection::Ascending), Just(SortDirection::Descending)]
    }

    /// Generate a SortSpec.
    pub fn arb_sort_spec() -> impl Strategy<Value = SortSpec> {
        (arb_sort_field(), arb_sort_direction())
            .prop_map(|(field, direction)| SortSpec::new(field, direction))
    }

    /// Generate a ChartKind.
    pub fn arb_chart_kind() -> impl Strategy<Value = ChartKind> {
        prop::sample::select(ChartKind::ALL.to_vec())
    }

    /// Generate an Insight with every field inside its generation range.
    pub fn arb_insight() -> impl Strategy<Value = Insight> {
        (
            prop::array::uniform7(0u32..100),
            -50.0f64..50.0,
            0.0f64..100.0,
        )
            .prop_map(|(trend, growth, engagement)| Insight {
                trend,
                growth,
                engagement,
            })
    }

    /// Generate a batch shaped like the generator's output for `variant`:
    /// ids `1..=n`, names derived from ids, in-range values.
    ///
    /// Values are drawn from a narrow range so that ties are common.
    pub fn arb_batch(variant: Variant, max_len: usize) -> impl Strategy<Value = Vec<Record>> {
        let categories = variant.categories().to_vec();
        let insight = if variant.has_insights() {
            arb_insight().prop_map(Some).boxed()
        } else {
            Just(None).boxed()
        };
        prop::collection::vec(
            (0u32..50, prop::sample::select(categories), insight),
            0..=max_len,
        )
        .prop_map(move |rows| {
            rows.into_iter()
                .enumerate()
                .map(|(index, (value, category, insight))| {
                    let id = index as RecordId + 1;
                    Record {
                        id,
                        name: hub_core::record_name(variant, id),
                        value,
                        category,
                        insight,
                    }
                })
                .collect()
        })
    }

    /// Generate a search query: fragments of record names, noise, or empty.
    pub fn arb_query() -> impl Strategy<Value = String> {
        prop_oneof![
            Just(String::new()),
            "(item|dataset|ITEM|Dataset)? ?[0-9]{0,2}",
            "[a-z ]{0,6}",
        ]
    }
}

// ============================================================================
// TEST FIXTURES
// ============================================================================

pub mod fixtures {
    //! Pre-built test fixtures for common testing scenarios.

    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Deterministic RNG for generation tests.
    pub fn seeded_rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    /// A generated batch of `count` records, reproducible by seed.
    pub fn seeded_batch(variant: Variant, count: usize, seed: u64) -> Vec<Record> {
        hub_core::generate(variant, count, &mut seeded_rng(seed))
    }

    /// Plain record with no insight.
    pub fn item(id: RecordId, value: u32) -> Record {
        Record {
            id,
            name: hub_core::record_name(Variant::Classic, id),
            value,
            category: Category::A,
            insight: None,
        }
    }

    /// Record with an insight carrying the given growth and engagement.
    pub fn dataset(id: RecordId, value: u32, growth: f64, engagement: f64) -> Record {
        Record {
            id,
            name: hub_core::record_name(Variant::Cyber, id),
            value,
            category: Category::Alpha,
            insight: Some(Insight {
                trend: [10, 20, 30, 40, 50, 60, 70],
                growth,
                engagement,
            }),
        }
    }

    /// `Item 1` .. `Item {count}` with value `id * 10`.
    pub fn items(count: u32) -> Vec<Record> {
        (1..=count).map(|id| item(id, id * 10)).collect()
    }

    /// A dashboard that has already received `records`.
    pub fn loaded_dashboard(variant: Variant, records: Vec<Record>) -> Dashboard {
        let mut dashboard = Dashboard::new(variant, DEFAULT_DEBOUNCE);
        dashboard.finish_loading(records);
        dashboard
    }
}

// ============================================================================
// CUSTOM ASSERTIONS
// ============================================================================

pub mod assertions {
    //! Custom assertion functions for derived-view validation.

    use super::*;

    /// Assert that the view's rows are exactly `ids`, in order.
    #[track_caller]
    pub fn assert_row_ids(view: &DerivedView<'_>, ids: &[RecordId]) {
        assert_eq!(view.ids(), ids, "Derived rows are in the wrong order");
    }

    /// Assert that every row matches `query` case-insensitively.
    #[track_caller]
    pub fn assert_rows_match(view: &DerivedView<'_>, query: &str) {
        let needle = query.to_lowercase();
        for row in &view.rows {
            assert!(
                row.name.to_lowercase().contains(&needle),
                "Row {:?} does not match query {:?}",
                row.name,
                query
            );
        }
    }

    /// Assert that the chart points mirror the rows one to one.
    #[track_caller]
    pub fn assert_chart_follows_rows(view: &DerivedView<'_>) {
        let chart_ids: Vec<RecordId> = view.chart.points.iter().map(|p| p.id).collect();
        assert_eq!(chart_ids, view.ids(), "Chart points diverge from table rows");
    }
}
