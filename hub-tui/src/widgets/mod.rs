//! Reusable widget components.

pub mod detail;
pub mod filter;
pub mod spinner;
pub mod status;

pub use detail::DetailPanel;
pub use filter::{FilterBar, FilterOption};
pub use spinner::Spinner;
pub use status::StatusIndicator;
