//! Runner for the reporting and ratio runs
//!
//! Loads the configured tables once, then derives the annual series, the
//! epoch ratio and the chart from them without re-reading any source.

use crate::anchors::{load_anchor_table, AnchorSource, AnchorTable};
use crate::config::Config;
use crate::error::Result;
use crate::interpolation::{interpolate_annual, interpolate_chain};
use crate::lifeyears::{AnnualSeries, RatioSeries, SeriesSummary};
use crate::report::{era_year, write_annual_table_to_path, RatioChart};
use serde::Serialize;
use std::path::PathBuf;

/// Outcome of the reporting run
#[derive(Debug, Clone, Serialize)]
pub struct ReportOutcome {
    pub summary: SeriesSummary,
    pub output_path: PathBuf,
}

/// Pre-loaded runner
///
/// # Example
/// ```ignore
/// let runner = LifeYearsRunner::load_with_projection(Config::default())?;
/// let ratio = runner.ratio()?;
/// println!("{:?}", ratio.percent_at(2025));
/// ```
#[derive(Debug, Clone)]
pub struct LifeYearsRunner {
    config: Config,
    anchors: AnchorTable,
    /// Continuation table for the extended series
    projection: Option<AnchorTable>,
}

impl LifeYearsRunner {
    /// Load only the anchor table
    pub fn load(config: Config) -> Result<Self> {
        let anchors = load_anchor_table(&AnchorSource::parse(&config.anchor_source))?;
        Ok(Self::with_tables(config, anchors, None))
    }

    /// Load the anchor table and the projection table
    pub fn load_with_projection(config: Config) -> Result<Self> {
        let anchors = load_anchor_table(&AnchorSource::parse(&config.anchor_source))?;
        let projection = load_anchor_table(&AnchorSource::parse(&config.projection_source))?;
        Ok(Self::with_tables(config, anchors, Some(projection)))
    }

    /// Create runner with pre-built tables
    pub fn with_tables(config: Config, anchors: AnchorTable, projection: Option<AnchorTable>) -> Self {
        Self {
            config,
            anchors,
            projection,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn anchors(&self) -> &AnchorTable {
        &self.anchors
    }

    pub fn projection(&self) -> Option<&AnchorTable> {
        self.projection.as_ref()
    }

    /// Annual series from the first to the last anchor
    pub fn annual_series(&self) -> Result<AnnualSeries> {
        interpolate_annual(&self.anchors)
    }

    /// Annual series extended through the projection table, when loaded
    pub fn extended_series(&self) -> Result<AnnualSeries> {
        match &self.projection {
            Some(projection) => interpolate_chain(&[&self.anchors, projection]),
            None => self.annual_series(),
        }
    }

    /// Bitcoin over gold cumulative life-years on the extended series
    pub fn ratio(&self) -> Result<RatioSeries> {
        let series = self.extended_series()?;
        Ok(RatioSeries::between(&series, &self.config.bitcoin, &self.config.gold))
    }

    /// Reporting run: write the annual table and summarize it
    pub fn write_report(&self) -> Result<ReportOutcome> {
        let series = self.annual_series()?;
        let output_path = write_annual_table_to_path(&self.config.report_output, &series)?;
        Ok(ReportOutcome {
            summary: series.summary(),
            output_path,
        })
    }

    /// Chart title lines
    pub fn chart_title(&self) -> Vec<String> {
        let (numerator, denominator) = (&self.config.bitcoin, &self.config.gold);
        let mut title = vec![
            format!("{} vs {} Lindyness", numerator.name, denominator.name),
            format!(
                "Measured by Life-Years ({} clock starts {})",
                denominator.name.to_lowercase(),
                era_year(denominator.start_year)
            ),
        ];
        if let (Some(_), Some(last_anchor)) = (&self.projection, self.anchors.last_year()) {
            title.push(format!(
                "{} projection from {} onward",
                self.config.projection_name,
                last_anchor + 1
            ));
        }
        title
    }

    /// Ratio run: chart-ready data for the configured chart
    pub fn chart(&self) -> Result<RatioChart> {
        let ratio = self.ratio()?;
        RatioChart::prepare(&ratio, self.chart_title(), &self.config.chart)
    }
}
