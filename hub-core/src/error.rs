//! Error types for textual input to the core enums.

use thiserror::Error;

/// Failure to parse a field, chart kind, or variant name.
///
/// The enums themselves are closed, so this only arises at the boundary
/// where names come from configuration files or the command line.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown sort field: {0}")]
    UnknownSortField(String),

    #[error("Unknown sort direction: {0}")]
    UnknownSortDirection(String),

    #[error("Unknown chart kind: {0}")]
    UnknownChartKind(String),

    #[error("Unknown dashboard variant: {0}")]
    UnknownVariant(String),
}
