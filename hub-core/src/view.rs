//! View state and the derived-view pipeline.
//!
//! `derive(records, state)` is the whole recomputation: filter, then sort,
//! then aggregate and build the chart specification. It runs in full on
//! every state transition and holds no cache.

use crate::chart::{ChartKind, ChartSpec};
use crate::filter::filter;
use crate::record::{Record, RecordId};
use crate::sort::{sort, SortSpec};
use crate::stats::Summary;
use crate::variant::Variant;

/// Ephemeral UI state, distinct from record data.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    /// Raw text as typed. Updates on every keystroke.
    pub search_query: String,
    /// Query the filter stage last ran with (the debounced value).
    pub applied_query: String,
    pub sort: SortSpec,
    pub chart: ChartKind,
}

impl ViewState {
    pub fn new(sort: SortSpec, chart: ChartKind) -> Self {
        Self {
            sort,
            chart,
            ..Self::default()
        }
    }

    /// True while typed text has not yet reached the filter stage.
    pub fn query_pending(&self) -> bool {
        self.search_query != self.applied_query
    }
}

/// Filtered, sorted, aggregated projection of the record collection.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedView<'a> {
    pub rows: Vec<&'a Record>,
    pub summary: Summary,
    pub chart: ChartSpec,
}

impl<'a> DerivedView<'a> {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn ids(&self) -> Vec<RecordId> {
        self.rows.iter().map(|r| r.id).collect()
    }

    pub fn position(&self, id: RecordId) -> Option<usize> {
        self.rows.iter().position(|r| r.id == id)
    }
}

pub fn derive<'a>(records: &'a [Record], state: &ViewState, variant: Variant) -> DerivedView<'a> {
    let mut rows = filter(records, &state.applied_query);
    sort(&mut rows, state.sort);
    let summary = Summary::from_rows(&rows);
    let chart = ChartSpec::build(state.chart, variant, &rows);
    DerivedView {
        rows,
        summary,
        chart,
    }
}
