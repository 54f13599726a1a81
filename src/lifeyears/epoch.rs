//! Epoch-gated cumulative life-years
//!
//! An epoch accrues a year's life-years only once the year reaches the
//! epoch's start. The running sum spans the whole annual series, so an epoch
//! that starts before the first covered year accrues from that first year
//! and the life-years in between are absent.

use super::AnnualSeries;
use serde::{Deserialize, Serialize};

/// Gold store-of-value clock start (700 BCE)
pub const GOLD_START_YEAR: i32 = -700;

/// Bitcoin genesis year
pub const BITCOIN_START_YEAR: i32 = 2009;

/// A named interval starting at a fixed year
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Epoch {
    pub name: String,
    pub start_year: i32,
}

impl Epoch {
    pub fn new(name: impl Into<String>, start_year: i32) -> Self {
        Self {
            name: name.into(),
            start_year,
        }
    }

    pub fn gold() -> Self {
        Self::new("Gold", GOLD_START_YEAR)
    }

    pub fn bitcoin() -> Self {
        Self::new("Bitcoin", BITCOIN_START_YEAR)
    }

    /// Whether a year's life-years count toward this epoch
    pub fn contains(&self, year: i32) -> bool {
        year >= self.start_year
    }
}

/// Running life-years total for one epoch at every covered year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochCumulativeSeries {
    epoch: Epoch,
    first_covered_year: Option<i32>,
    /// (year, cumulative life-years), ascending by year
    points: Vec<(i32, f64)>,
}

impl EpochCumulativeSeries {
    /// Accumulate life-years for `epoch` over the annual series
    pub fn accumulate(series: &AnnualSeries, epoch: &Epoch) -> Self {
        let mut running = 0.0;
        let points: Vec<(i32, f64)> = series
            .iter()
            .map(|e| {
                if epoch.contains(e.year) {
                    running += e.life_years;
                }
                (e.year, running)
            })
            .collect();

        let cumulative = Self {
            epoch: epoch.clone(),
            first_covered_year: series.first_year(),
            points,
        };

        if let Some(missing) = cumulative.truncated_years() {
            log::warn!(
                "{} epoch starts in {} but data begins in {:?}; {} years of life-years are not counted",
                epoch.name,
                epoch.start_year,
                series.first_year(),
                missing
            );
        }

        log::debug!(
            "{} cumulative life-years: {:.0}",
            epoch.name,
            cumulative.final_total()
        );

        cumulative
    }

    pub fn epoch(&self) -> &Epoch {
        &self.epoch
    }

    pub fn points(&self) -> &[(i32, f64)] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Cumulative life-years through `year`, if covered
    pub fn at(&self, year: i32) -> Option<f64> {
        let first = self.points.first()?.0;
        let offset = usize::try_from(i64::from(year) - i64::from(first)).ok()?;
        self.points.get(offset).map(|&(_, c)| c)
    }

    /// Cumulative life-years through the last covered year
    pub fn final_total(&self) -> f64 {
        self.points.last().map(|&(_, c)| c).unwrap_or(0.0)
    }

    /// Whole years between the epoch start and the first covered year when
    /// the epoch predates the data; those years contribute nothing
    pub fn truncated_years(&self) -> Option<u32> {
        let first = self.first_covered_year?;
        if self.epoch.start_year < first {
            u32::try_from(i64::from(first) - i64::from(self.epoch.start_year)).ok()
        } else {
            None
        }
    }
}
