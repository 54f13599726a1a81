//! Run configuration
//!
//! Defaults reproduce the standard runs: anchors through 2025, the UN WPP 2022
//! medium-variant projection to 2100, gold from 700 BCE and Bitcoin from 2009.
//! A JSON file may override any subset of fields.

use crate::anchors::{DEFAULT_ANCHOR_PATH, DEFAULT_PROJECTION_PATH};
use crate::error::{LifeYearsError, Result};
use crate::lifeyears::Epoch;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default annual table written by the reporting run
pub const DEFAULT_REPORT_OUTPUT: &str = "anchor_pop_annual_to_2025.csv";

/// Default chart written by the ratio run
pub const DEFAULT_CHART_OUTPUT: &str = "btc_vs_gold_lifeyears.png";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Anchor table location (path or URL)
    #[serde(default = "default_anchor_source")]
    pub anchor_source: String,

    /// Continuation table chained after the anchors for the ratio run
    #[serde(default = "default_projection_source")]
    pub projection_source: String,

    /// Name of the projection shown in the chart title
    #[serde(default = "default_projection_name")]
    pub projection_name: String,

    /// Annual table written by the reporting run
    #[serde(default = "default_report_output")]
    pub report_output: PathBuf,

    /// Denominator epoch of the ratio
    #[serde(default = "Epoch::gold")]
    pub gold: Epoch,

    /// Numerator epoch of the ratio
    #[serde(default = "Epoch::bitcoin")]
    pub bitcoin: Epoch,

    #[serde(default)]
    pub chart: ChartConfig,
}

fn default_anchor_source() -> String { DEFAULT_ANCHOR_PATH.to_string() }
fn default_projection_source() -> String { DEFAULT_PROJECTION_PATH.to_string() }
fn default_projection_name() -> String { "UN WPP 2022 medium-variant".to_string() }
fn default_report_output() -> PathBuf { PathBuf::from(DEFAULT_REPORT_OUTPUT) }

impl Default for Config {
    fn default() -> Self {
        Self {
            anchor_source: default_anchor_source(),
            projection_source: default_projection_source(),
            projection_name: default_projection_name(),
            report_output: default_report_output(),
            gold: Epoch::gold(),
            bitcoin: Epoch::bitcoin(),
            chart: ChartConfig::default(),
        }
    }
}

impl Config {
    /// Load from a JSON file; missing fields keep their defaults
    pub fn from_json_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| LifeYearsError::io(path, e))?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(text).map_err(|e| LifeYearsError::Config(e.to_string()))?;
        config.chart.validate()?;
        Ok(config)
    }
}

/// Chart layout for the ratio plot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub output: PathBuf,
    /// First plotted year
    pub plot_from: i32,
    /// Highlighted and annotated year
    pub current_year: i32,
    /// Display range of the y axis in percent
    pub y_min_pct: f64,
    pub y_max_pct: f64,
    pub y_tick_pct: f64,
    pub width: u32,
    pub height: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_CHART_OUTPUT),
            plot_from: 2009,
            current_year: 2025,
            y_min_pct: 0.0,
            y_max_pct: 50.0,
            y_tick_pct: 10.0,
            width: 1000,
            height: 600,
        }
    }
}

impl ChartConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.y_max_pct > self.y_min_pct) {
            return Err(LifeYearsError::Config(format!(
                "y range must be increasing, got {}..{}",
                self.y_min_pct, self.y_max_pct
            )));
        }
        if !(self.y_tick_pct > 0.0) {
            return Err(LifeYearsError::Config(format!(
                "y tick interval must be positive, got {}",
                self.y_tick_pct
            )));
        }
        if self.width == 0 || self.height == 0 {
            return Err(LifeYearsError::Config("chart dimensions must be non-zero".to_string()));
        }
        Ok(())
    }

    /// Keep a percentage inside the display range
    pub fn clamp_pct(&self, pct: f64) -> f64 {
        pct.clamp(self.y_min_pct, self.y_max_pct)
    }

    /// Number of tick labels from `y_min_pct` to `y_max_pct` inclusive
    pub fn y_tick_count(&self) -> usize {
        ((self.y_max_pct - self.y_min_pct) / self.y_tick_pct).floor() as usize + 1
    }
}
