//! Summary statistics over a derived row set.

use crate::record::Record;
use serde::{Deserialize, Serialize};

/// Aggregates shown on the stat cards.
///
/// `avg_engagement` and `max_growth` are `None` when no row carries an
/// insight, which covers the empty set.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Summary {
    pub count: usize,
    pub total_value: u64,
    pub avg_engagement: Option<f64>,
    pub max_growth: Option<f64>,
}

impl Summary {
    pub fn from_rows(rows: &[&Record]) -> Self {
        let total_value = rows.iter().map(|r| u64::from(r.value)).sum();

        let engagements: Vec<f64> = rows.iter().filter_map(|r| r.engagement()).collect();
        let avg_engagement = if engagements.is_empty() {
            None
        } else {
            Some(engagements.iter().sum::<f64>() / engagements.len() as f64)
        };

        let max_growth = rows
            .iter()
            .filter_map(|r| r.growth())
            .reduce(f64::max);

        Self {
            count: rows.len(),
            total_value,
            avg_engagement,
            max_growth,
        }
    }
}
