//! Sort stage.
//!
//! Sortable fields are a closed enum; [`SortField::compare`] is the
//! dispatch table from each tag to a typed comparator.
//!
//! Ordering is stable: records with equal keys keep the relative order
//! they had in the filtered input (generation order), in both directions.

use crate::error::ParseError;
use crate::record::Record;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    #[default]
    Id,
    Name,
    Value,
    Category,
    Growth,
    Engagement,
}

impl SortField {
    pub const ALL: [SortField; 6] = [
        SortField::Id,
        SortField::Name,
        SortField::Value,
        SortField::Category,
        SortField::Growth,
        SortField::Engagement,
    ];

    /// Field name as it appears in configuration.
    pub fn key(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Name => "name",
            SortField::Value => "value",
            SortField::Category => "category",
            SortField::Growth => "growth",
            SortField::Engagement => "engagement",
        }
    }

    /// Column header label.
    pub fn label(&self) -> &'static str {
        match self {
            SortField::Id => "Id",
            SortField::Name => "Name",
            SortField::Value => "Value",
            SortField::Category => "Category",
            SortField::Growth => "Growth",
            SortField::Engagement => "Engagement",
        }
    }

    /// Ascending comparison of two records on this field.
    ///
    /// Floats use a total order. Records without an insight sort before
    /// records with one.
    pub fn compare(&self, a: &Record, b: &Record) -> Ordering {
        match self {
            SortField::Id => a.id.cmp(&b.id),
            SortField::Name => a.name.cmp(&b.name),
            SortField::Value => a.value.cmp(&b.value),
            SortField::Category => a.category.as_str().cmp(b.category.as_str()),
            SortField::Growth => compare_optional(a.growth(), b.growth()),
            SortField::Engagement => compare_optional(a.engagement(), b.engagement()),
        }
    }
}

fn compare_optional(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SortField {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        SortField::ALL
            .iter()
            .copied()
            .find(|field| field.key() == key)
            .ok_or_else(|| ParseError::UnknownSortField(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggle(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Indicator shown next to the active column header.
    pub fn glyph(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }

    fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

impl FromStr for SortDirection {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(ParseError::UnknownSortDirection(s.to_string())),
        }
    }
}

/// Active sort field and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Header click semantics: the active field flips direction, a new
    /// field starts ascending.
    pub fn select(&mut self, field: SortField) {
        if field == self.field {
            self.direction = self.direction.toggle();
        } else {
            self.field = field;
            self.direction = SortDirection::Ascending;
        }
    }

    pub fn compare(&self, a: &Record, b: &Record) -> Ordering {
        self.direction.apply(self.field.compare(a, b))
    }
}

/// Order `rows` in place by `spec`.
pub fn sort(rows: &mut [&Record], spec: SortSpec) {
    rows.sort_by(|a, b| spec.compare(a, b));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Category, Insight};

    fn record(id: u32, value: u32) -> Record {
        Record {
            id,
            name: format!("Item {}", id),
            value,
            category: Category::A,
            insight: None,
        }
    }

    fn ids(rows: &[&Record]) -> Vec<u32> {
        rows.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_value_descending_keeps_ties_in_input_order() {
        let records = vec![record(1, 5), record(2, 50), record(3, 5)];
        let mut rows: Vec<&Record> = records.iter().collect();
        sort(
            &mut rows,
            SortSpec::new(SortField::Value, SortDirection::Descending),
        );
        assert_eq!(ids(&rows), vec![2, 1, 3]);
    }

    #[test]
    fn test_value_ascending_keeps_ties_in_input_order() {
        let records = vec![record(1, 5), record(2, 50), record(3, 5)];
        let mut rows: Vec<&Record> = records.iter().collect();
        sort(&mut rows, SortSpec::new(SortField::Value, SortDirection::Ascending));
        assert_eq!(ids(&rows), vec![1, 3, 2]);
    }

    #[test]
    fn test_name_sort_is_lexicographic() {
        let records = vec![record(2, 0), record(10, 0), record(1, 0)];
        let mut rows: Vec<&Record> = records.iter().collect();
        sort(&mut rows, SortSpec::new(SortField::Name, SortDirection::Ascending));
        assert_eq!(ids(&rows), vec![1, 10, 2]);
    }

    #[test]
    fn test_growth_sort_uses_total_order() {
        let mut a = record(1, 0);
        a.insight = Some(Insight {
            trend: [0; 7],
            growth: -12.5,
            engagement: 1.0,
        });
        let mut b = record(2, 0);
        b.insight = Some(Insight {
            trend: [0; 7],
            growth: 30.0,
            engagement: 1.0,
        });
        let c = record(3, 0);
        let records = vec![b, a, c];
        let mut rows: Vec<&Record> = records.iter().collect();
        sort(&mut rows, SortSpec::new(SortField::Growth, SortDirection::Ascending));
        assert_eq!(ids(&rows), vec![3, 1, 2]);
    }

    #[test]
    fn test_select_same_field_toggles() {
        let mut spec = SortSpec::default();
        spec.select(SortField::Id);
        assert_eq!(spec.direction, SortDirection::Descending);
        spec.select(SortField::Id);
        assert_eq!(spec.direction, SortDirection::Ascending);
    }

    #[test]
    fn test_select_new_field_resets_to_ascending() {
        let mut spec = SortSpec::new(SortField::Id, SortDirection::Descending);
        spec.select(SortField::Value);
        assert_eq!(spec, SortSpec::new(SortField::Value, SortDirection::Ascending));
    }

    #[test]
    fn test_parse_field_and_direction() {
        assert_eq!("Engagement".parse::<SortField>(), Ok(SortField::Engagement));
        assert_eq!("desc".parse::<SortDirection>(), Ok(SortDirection::Descending));
        assert!(matches!(
            "trend".parse::<SortField>(),
            Err(ParseError::UnknownSortField(_))
        ));
    }
}
