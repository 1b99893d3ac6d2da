//! Synthetic record generation.

use crate::record::{Insight, Record, RecordId, TREND_LEN};
use crate::variant::Variant;
use rand::Rng;

/// Records per batch when configuration does not say otherwise.
pub const DEFAULT_RECORD_COUNT: usize = 20;

const VALUE_MAX: u32 = 1000;
const TREND_MAX: u32 = 100;
const GROWTH_SPAN: f64 = 50.0;
const ENGAGEMENT_MAX: f64 = 100.0;

/// Display name for a record; a pure function of the id within a variant.
pub fn record_name(variant: Variant, id: RecordId) -> String {
    format!("{} {}", variant.name_prefix(), id)
}

/// Produce `count` records with ids `1..=count`.
pub fn generate<R: Rng + ?Sized>(variant: Variant, count: usize, rng: &mut R) -> Vec<Record> {
    let categories = variant.categories();
    (1..=count as RecordId)
        .map(|id| {
            let value = rng.random_range(0..VALUE_MAX);
            let category = categories[rng.random_range(0..categories.len())];
            let insight = if variant.has_insights() {
                Some(generate_insight(rng))
            } else {
                None
            };
            Record {
                id,
                name: record_name(variant, id),
                value,
                category,
                insight,
            }
        })
        .collect()
}

fn generate_insight<R: Rng + ?Sized>(rng: &mut R) -> Insight {
    let mut trend = [0u32; TREND_LEN];
    for point in trend.iter_mut() {
        *point = rng.random_range(0..TREND_MAX);
    }
    Insight {
        trend,
        growth: rng.random_range(-GROWTH_SPAN..GROWTH_SPAN),
        engagement: rng.random_range(0.0..ENGAGEMENT_MAX),
    }
}


#[cfg(test)]
mod prop_tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use proptest::prelude::*;

    proptest! {
        /// Property: every generated field stays inside its range
        #[test]
        fn prop_fields_in_range(seed in any::<u64>(), count in 0usize..64) {
            let mut rng = StdRng::seed_from_u64(seed);
            let records = generate(Variant::Cyber, count, &mut rng);
            prop_assert_eq!(records.len(), count);
            for record in &records {
                prop_assert!(record.value < VALUE_MAX);
                prop_assert!(Variant::Cyber.categories().contains(&record.category));
                let insight = record.insight.as_ref();
                prop_assert!(insight.is_some());
                if let Some(insight) = insight {
                    prop_assert!(insight.trend.iter().all(|p| *p < TREND_MAX));
                    prop_assert!(insight.growth >= -GROWTH_SPAN && insight.growth < GROWTH_SPAN);
                    prop_assert!(insight.engagement >= 0.0 && insight.engagement < ENGAGEMENT_MAX);
                }
            }
        }
    }
}
