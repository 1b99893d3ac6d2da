//! Dashboard variants.
//!
//! Both variants share the pipeline. They differ in record shape, the
//! columns the table offers, and which chart kinds can be selected.

use crate::chart::ChartKind;
use crate::error::ParseError;
use crate::record::Category;
use crate::sort::SortField;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Richer variant: insights, four chart kinds, summary statistics.
    #[default]
    Cyber,
    /// Simpler variant: four columns and a bar chart.
    Classic,
}

impl Variant {
    pub fn title(&self) -> &'static str {
        match self {
            Variant::Cyber => "Cyber Analytics Hub",
            Variant::Classic => "Data Analysis Dashboard",
        }
    }

    pub fn name_prefix(&self) -> &'static str {
        match self {
            Variant::Cyber => "Dataset",
            Variant::Classic => "Item",
        }
    }

    pub fn search_placeholder(&self) -> &'static str {
        match self {
            Variant::Cyber => "Search datasets...",
            Variant::Classic => "Search items...",
        }
    }

    pub fn categories(&self) -> &'static [Category] {
        match self {
            Variant::Cyber => &[Category::Alpha, Category::Beta, Category::Gamma],
            Variant::Classic => &[Category::A, Category::B, Category::C],
        }
    }

    /// Table columns, in display order. Each column is also a sort field.
    pub fn columns(&self) -> &'static [SortField] {
        match self {
            Variant::Cyber => &[
                SortField::Id,
                SortField::Name,
                SortField::Value,
                SortField::Category,
                SortField::Growth,
                SortField::Engagement,
            ],
            Variant::Classic => &[
                SortField::Id,
                SortField::Name,
                SortField::Value,
                SortField::Category,
            ],
        }
    }

    pub fn chart_kinds(&self) -> &'static [ChartKind] {
        match self {
            Variant::Cyber => &ChartKind::ALL,
            Variant::Classic => &[ChartKind::Bar],
        }
    }

    pub fn has_insights(&self) -> bool {
        matches!(self, Variant::Cyber)
    }

    pub fn shows_summary(&self) -> bool {
        matches!(self, Variant::Cyber)
    }

    pub fn supports_field(&self, field: SortField) -> bool {
        self.columns().contains(&field)
    }

    pub fn supports_chart(&self, kind: ChartKind) -> bool {
        self.chart_kinds().contains(&kind)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Cyber => "cyber",
            Variant::Classic => "classic",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cyber" => Ok(Variant::Cyber),
            "classic" => Ok(Variant::Classic),
            _ => Err(ParseError::UnknownVariant(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_offers_bar_only() {
        assert_eq!(Variant::Classic.chart_kinds(), &[ChartKind::Bar]);
        assert!(!Variant::Classic.supports_chart(ChartKind::Pie));
        assert!(Variant::Cyber.supports_chart(ChartKind::Pie));
    }

    #[test]
    fn test_classic_has_no_insight_columns() {
        assert!(!Variant::Classic.supports_field(SortField::Growth));
        assert!(!Variant::Classic.supports_field(SortField::Engagement));
        assert_eq!(Variant::Cyber.columns().len(), 6);
    }

    #[test]
    fn test_parse_variant() {
        assert_eq!("Cyber".parse::<Variant>(), Ok(Variant::Cyber));
        assert_eq!(" classic ".parse::<Variant>(), Ok(Variant::Classic));
        assert!(matches!(
            "neon".parse::<Variant>(),
            Err(ParseError::UnknownVariant(_))
        ));
    }
}
