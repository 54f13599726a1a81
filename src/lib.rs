//! Life-years - cumulative human life-years from world population anchors
//!
//! This library provides:
//! - Anchor table loading from local CSV files or URLs
//! - Piecewise linear interpolation to one estimate per calendar year,
//!   optionally chained with a longer-horizon projection table
//! - Epoch-gated cumulative life-years and epoch ratios (Bitcoin vs gold)
//! - Annual table output and ratio charts

pub mod anchors;
pub mod config;
pub mod error;
pub mod interpolation;
pub mod lifeyears;
pub mod pipeline;
pub mod report;

// Re-export commonly used types
pub use anchors::{AnchorPoint, AnchorSource, AnchorTable};
pub use config::{ChartConfig, Config};
pub use error::{LifeYearsError, Result};
pub use lifeyears::{AnnualEstimate, AnnualSeries, Epoch, EpochCumulativeSeries, RatioSeries};
pub use pipeline::{LifeYearsRunner, ReportOutcome};
