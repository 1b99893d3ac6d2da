//! Analytics Hub Core - Records and the Derived-View Pipeline
//!
//! Pure data structures and the synchronous generate → filter → sort →
//! aggregate pipeline. No I/O, no async, no terminal concerns: the host
//! application owns a [`Dashboard`], feeds it input events, and draws
//! whatever [`Dashboard::derive`] returns.

pub mod chart;
pub mod dashboard;
pub mod debounce;
pub mod error;
pub mod filter;
pub mod generate;
pub mod record;
pub mod sort;
pub mod stats;
pub mod variant;
pub mod view;

pub use chart::{ChartKind, ChartPoint, ChartSpec, PieSlice, Rgb, PALETTE};
pub use dashboard::{Dashboard, DEFAULT_DEBOUNCE};
pub use debounce::Debouncer;
pub use error::ParseError;
pub use filter::filter;
pub use generate::{generate, record_name, DEFAULT_RECORD_COUNT};
pub use record::{Category, Insight, Record, RecordId, TREND_LEN};
pub use sort::{sort, SortDirection, SortField, SortSpec};
pub use stats::Summary;
pub use variant::Variant;
pub use view::{derive, DerivedView, ViewState};
