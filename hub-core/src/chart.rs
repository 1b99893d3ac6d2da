//! Declarative chart specification.
//!
//! The core never draws. It maps the sorted rows and the active chart kind
//! to a [`ChartSpec`], and the host hands that to whatever widget draws
//! pixels or cells. Points keep the Sort Stage order exactly.

use crate::error::ParseError;
use crate::record::{Record, RecordId};
use crate::variant::Variant;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 24-bit colour, independent of any terminal or graphics library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Pie slice colours, indexed cyclically by slice position.
pub const PALETTE: [Rgb; 5] = [
    Rgb(0xFF, 0x00, 0x80),
    Rgb(0x79, 0x28, 0xCA),
    Rgb(0x00, 0xD4, 0xFF),
    Rgb(0xFF, 0x4D, 0x4D),
    Rgb(0x00, 0xFF, 0x88),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    #[default]
    Bar,
    Line,
    Area,
    Pie,
}

impl ChartKind {
    pub const ALL: [ChartKind; 4] = [ChartKind::Bar, ChartKind::Line, ChartKind::Area, ChartKind::Pie];

    pub fn key(&self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
            ChartKind::Area => "area",
            ChartKind::Pie => "pie",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChartKind::Bar => "Bar",
            ChartKind::Line => "Line",
            ChartKind::Area => "Area",
            ChartKind::Pie => "Pie",
        }
    }

    /// Series colour for the non-pie kinds.
    pub fn series_color(&self, variant: Variant) -> Rgb {
        match (variant, self) {
            (Variant::Classic, _) => Rgb(0x3B, 0x82, 0xF6),
            (Variant::Cyber, ChartKind::Bar) => Rgb(0x00, 0xD4, 0xFF),
            (Variant::Cyber, ChartKind::Line) => Rgb(0xFF, 0x00, 0x80),
            (Variant::Cyber, ChartKind::Area) => Rgb(0x79, 0x28, 0xCA),
            (Variant::Cyber, ChartKind::Pie) => PALETTE[0],
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ChartKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        ChartKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.key() == key)
            .ok_or_else(|| ParseError::UnknownChartKind(s.to_string()))
    }
}

/// One category-axis entry: the record's name against its value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub id: RecordId,
    pub label: String,
    pub value: u32,
}

/// One pie slice. `start` and `end` are fractions of the full circle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub value: u32,
    pub color: Rgb,
    pub start: f64,
    pub end: f64,
}

impl PieSlice {
    pub fn fraction(&self) -> f64 {
        self.end - self.start
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub series_color: Rgb,
    pub points: Vec<ChartPoint>,
}

impl ChartSpec {
    pub fn build(kind: ChartKind, variant: Variant, rows: &[&Record]) -> Self {
        let points = rows
            .iter()
            .map(|record| ChartPoint {
                id: record.id,
                label: record.name.clone(),
                value: record.value,
            })
            .collect();
        Self {
            kind,
            series_color: kind.series_color(variant),
            points,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn max_value(&self) -> u32 {
        self.points.iter().map(|p| p.value).max().unwrap_or(0)
    }

    pub fn total_value(&self) -> u64 {
        self.points.iter().map(|p| u64::from(p.value)).sum()
    }

    /// Slices in point order. A zero total yields zero-width slices.
    pub fn slices(&self) -> Vec<PieSlice> {
        let total = self.total_value();
        let mut cursor = 0.0;
        self.points
            .iter()
            .enumerate()
            .map(|(index, point)| {
                let fraction = if total == 0 {
                    0.0
                } else {
                    f64::from(point.value) / total as f64
                };
                let start = cursor;
                cursor += fraction;
                PieSlice {
                    label: point.label.clone(),
                    value: point.value,
                    color: PALETTE[index % PALETTE.len()],
                    start,
                    end: cursor,
                }
            })
            .collect()
    }
}
