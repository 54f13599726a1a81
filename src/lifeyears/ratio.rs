//! Ratio of two epochs' cumulative life-years

use super::{AnnualSeries, Epoch, EpochCumulativeSeries};
use serde::{Deserialize, Serialize};

/// Ratio at one year; `None` while the denominator epoch has accrued nothing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatioPoint {
    pub year: i32,
    pub ratio: Option<f64>,
}

impl RatioPoint {
    pub fn percent(&self) -> Option<f64> {
        self.ratio.map(|r| r * 100.0)
    }
}

/// `numerator(y) / denominator(y)` for every covered year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatioSeries {
    numerator: Epoch,
    denominator: Epoch,
    points: Vec<RatioPoint>,
}

impl RatioSeries {
    /// Divide two cumulative series year by year
    ///
    /// Both series must come from the same annual series; years are paired
    /// positionally.
    pub fn compute(numerator: &EpochCumulativeSeries, denominator: &EpochCumulativeSeries) -> Self {
        debug_assert_eq!(numerator.len(), denominator.len());

        let points = numerator
            .points()
            .iter()
            .zip(denominator.points())
            .map(|(&(year, num), &(_, den))| RatioPoint {
                year,
                ratio: if den > 0.0 { Some(num / den) } else { None },
            })
            .collect();

        Self {
            numerator: numerator.epoch().clone(),
            denominator: denominator.epoch().clone(),
            points,
        }
    }

    /// Accumulate both epochs over `series` and divide
    pub fn between(series: &AnnualSeries, numerator: &Epoch, denominator: &Epoch) -> Self {
        let num = EpochCumulativeSeries::accumulate(series, numerator);
        let den = EpochCumulativeSeries::accumulate(series, denominator);
        Self::compute(&num, &den)
    }

    pub fn numerator(&self) -> &Epoch {
        &self.numerator
    }

    pub fn denominator(&self) -> &Epoch {
        &self.denominator
    }

    pub fn points(&self) -> &[RatioPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point for `year`, if covered
    pub fn point(&self, year: i32) -> Option<&RatioPoint> {
        let first = self.points.first()?.year;
        let offset = usize::try_from(i64::from(year) - i64::from(first)).ok()?;
        self.points.get(offset)
    }

    /// Ratio at `year`; `None` when not covered or undefined
    pub fn at(&self, year: i32) -> Option<f64> {
        self.point(year).and_then(|p| p.ratio)
    }

    pub fn percent_at(&self, year: i32) -> Option<f64> {
        self.at(year).map(|r| r * 100.0)
    }

    /// Points at or after `year`
    pub fn from_year(&self, year: i32) -> &[RatioPoint] {
        let start = self.points.partition_point(|p| p.year < year);
        &self.points[start..]
    }
}
