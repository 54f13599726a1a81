//! Anchor population tables and their loading

pub mod loader;

pub use loader::{
    load_anchor_table, load_anchor_table_from_path, load_anchor_table_from_reader,
    load_anchor_table_from_url, AnchorSource, DEFAULT_ANCHOR_PATH, DEFAULT_PROJECTION_PATH,
};

use serde::{Deserialize, Serialize};

/// A trusted population measurement at a calendar year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchorPoint {
    pub year: i32,
    pub population_millions: f64,
}

impl AnchorPoint {
    pub fn new(year: i32, population_millions: f64) -> Self {
        Self { year, population_millions }
    }
}

/// Ordered table of anchor points from a single source
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorTable {
    /// Where the table came from (path, URL or a caller-supplied label)
    label: String,

    /// Points sorted ascending by year
    points: Vec<AnchorPoint>,
}

impl AnchorTable {
    /// Build a table from points in any order; points are sorted by year
    pub fn new(label: impl Into<String>, mut points: Vec<AnchorPoint>) -> Self {
        // Stable sort keeps file order for duplicate years
        points.sort_by_key(|p| p.year);
        Self {
            label: label.into(),
            points,
        }
    }

    /// Convenience constructor from `(year, population_millions)` pairs
    pub fn from_pairs(label: impl Into<String>, pairs: &[(i32, f64)]) -> Self {
        let points = pairs.iter().map(|&(y, p)| AnchorPoint::new(y, p)).collect();
        Self::new(label, points)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn points(&self) -> &[AnchorPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first_year(&self) -> Option<i32> {
        self.points.first().map(|p| p.year)
    }

    pub fn last_year(&self) -> Option<i32> {
        self.points.last().map(|p| p.year)
    }

    /// Recorded value at an anchor year, if that year is an anchor
    pub fn value_at(&self, year: i32) -> Option<f64> {
        self.points
            .iter()
            .find(|p| p.year == year)
            .map(|p| p.population_millions)
    }

    /// Years that appear more than once
    pub fn duplicate_years(&self) -> Vec<i32> {
        let mut duplicates: Vec<i32> = self
            .points
            .windows(2)
            .filter(|w| w[0].year == w[1].year)
            .map(|w| w[0].year)
            .collect();
        duplicates.dedup();
        duplicates
    }
}
