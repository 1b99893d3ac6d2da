//! Record types.
//!
//! Records are generated once per batch and never mutated afterwards.
//! Every later "change" is a derived view that borrows them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sequential record identifier, starting at 1 within a batch.
pub type RecordId = u32;

/// Number of points in an insight trend.
pub const TREND_LEN: usize = 7;

/// Category label drawn from a variant's fixed enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    A,
    B,
    C,
    Alpha,
    Beta,
    Gamma,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::A => "A",
            Category::B => "B",
            Category::C => "C",
            Category::Alpha => "Alpha",
            Category::Beta => "Beta",
            Category::Gamma => "Gamma",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extended metrics carried by records of the richer variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    /// Sparkline points, each in `[0, 100)`.
    pub trend: [u32; TREND_LEN],
    /// Growth percentage in `[-50, 50)`.
    pub growth: f64,
    /// Engagement percentage in `[0, 100)`.
    pub engagement: f64,
}

/// One synthetic data row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub name: String,
    /// Value in `[0, 1000)`.
    pub value: u32,
    pub category: Category,
    pub insight: Option<Insight>,
}

impl Record {
    pub fn growth(&self) -> Option<f64> {
        self.insight.as_ref().map(|i| i.growth)
    }

    pub fn engagement(&self) -> Option<f64> {
        self.insight.as_ref().map(|i| i.engagement)
    }

    pub fn trend(&self) -> Option<&[u32; TREND_LEN]> {
        self.insight.as_ref().map(|i| &i.trend)
    }
}
