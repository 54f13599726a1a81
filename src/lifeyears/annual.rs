//! Annual population estimates and their life-years

use serde::{Deserialize, Serialize};

/// One million people alive for a year accrue one million life-years
pub const LIFE_YEARS_PER_MILLION: f64 = 1_000_000.0;

/// Population estimate for one calendar year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnualEstimate {
    pub year: i32,
    pub population_millions: f64,
    pub life_years: f64,
}

impl AnnualEstimate {
    pub fn new(year: i32, population_millions: f64) -> Self {
        Self {
            year,
            population_millions,
            life_years: population_millions * LIFE_YEARS_PER_MILLION,
        }
    }

    /// Life-years truncated to a whole count (the `Life_Years` column)
    pub fn whole_life_years(&self) -> u64 {
        // Populations are validated non-negative at load time
        self.life_years.max(0.0).trunc() as u64
    }
}

/// Dense, ascending, gap-free run of annual estimates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnualSeries {
    estimates: Vec<AnnualEstimate>,
}

impl AnnualSeries {
    /// Build from consecutive populations starting at `first_year`
    pub fn from_populations(first_year: i32, populations: &[f64]) -> Self {
        let estimates = populations
            .iter()
            .zip(first_year..)
            .map(|(&p, year)| AnnualEstimate::new(year, p))
            .collect();
        Self { estimates }
    }

    /// Caller guarantees one estimate per year, ascending, no gaps
    pub(crate) fn from_estimates(estimates: Vec<AnnualEstimate>) -> Self {
        debug_assert!(estimates.windows(2).all(|w| w[1].year == w[0].year + 1));
        Self { estimates }
    }

    pub fn estimates(&self) -> &[AnnualEstimate] {
        &self.estimates
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnnualEstimate> {
        self.estimates.iter()
    }

    pub fn len(&self) -> usize {
        self.estimates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.estimates.is_empty()
    }

    pub fn first_year(&self) -> Option<i32> {
        self.estimates.first().map(|e| e.year)
    }

    pub fn last_year(&self) -> Option<i32> {
        self.estimates.last().map(|e| e.year)
    }

    /// Estimate for a year, if covered
    pub fn get(&self, year: i32) -> Option<&AnnualEstimate> {
        let first = self.first_year()?;
        let offset = usize::try_from(i64::from(year) - i64::from(first)).ok()?;
        self.estimates.get(offset)
    }

    /// Sum of life-years over the whole series
    pub fn total_life_years(&self) -> f64 {
        self.estimates.iter().map(|e| e.life_years).sum()
    }

    /// Sum of the per-year truncated life-years counts
    pub fn total_whole_life_years(&self) -> u64 {
        self.estimates.iter().map(|e| e.whole_life_years()).sum()
    }

    /// Get summary statistics
    pub fn summary(&self) -> SeriesSummary {
        let peak = self
            .estimates
            .iter()
            .max_by(|a, b| a.population_millions.total_cmp(&b.population_millions));

        SeriesSummary {
            years_covered: self.estimates.len(),
            first_year: self.first_year(),
            last_year: self.last_year(),
            total_life_years: self.total_life_years(),
            total_whole_life_years: self.total_whole_life_years(),
            peak_population_millions: peak.map(|e| e.population_millions).unwrap_or(0.0),
            peak_year: peak.map(|e| e.year),
        }
    }
}

/// Summary statistics for an annual series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub years_covered: usize,
    pub first_year: Option<i32>,
    pub last_year: Option<i32>,
    pub total_life_years: f64,
    pub total_whole_life_years: u64,
    pub peak_population_millions: f64,
    pub peak_year: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_life_years_per_estimate() {
        let estimate = AnnualEstimate::new(2005, 150.0);
        assert_eq!(estimate.life_years, 150_000_000.0);
        assert_eq!(estimate.whole_life_years(), 150_000_000);

        // Fractional life-years truncate
        let fractional = AnnualEstimate::new(2006, 0.5);
        assert_eq!(fractional.life_years, 500_000.0);
        let tiny = AnnualEstimate::new(2007, 2.75 / LIFE_YEARS_PER_MILLION);
        assert_eq!(tiny.whole_life_years(), 2);
    }

    #[test]
    fn test_series_lookup_by_year() {
        let series = AnnualSeries::from_populations(-2, &[1.0, 2.0, 3.0, 4.0]);

        assert_eq!(series.len(), 4);
        assert_eq!(series.first_year(), Some(-2));
        assert_eq!(series.last_year(), Some(1));
        assert_eq!(series.get(0).map(|e| e.population_millions), Some(3.0));
        assert!(series.get(-3).is_none());
        assert!(series.get(2).is_none());
    }

    #[test]
    fn test_summary_totals_and_peak() {
        let series = AnnualSeries::from_populations(2000, &[1.5, 4.0, 2.5]);
        let summary = series.summary();

        assert_eq!(summary.years_covered, 3);
        assert_eq!(summary.total_life_years, 8_000_000.0);
        assert_eq!(summary.total_whole_life_years, 8_000_000);
        assert_eq!(summary.peak_population_millions, 4.0);
        assert_eq!(summary.peak_year, Some(2001));
    }

    #[test]
    fn test_empty_summary() {
        let series = AnnualSeries::from_populations(2000, &[]);
        let summary = series.summary();
        assert_eq!(summary.years_covered, 0);
        assert_eq!(summary.first_year, None);
        assert_eq!(summary.peak_year, None);
    }
}
