//! Annual life-years, epoch-gated cumulative sums and epoch ratios

mod annual;
mod epoch;
mod ratio;

pub use annual::{AnnualEstimate, AnnualSeries, SeriesSummary, LIFE_YEARS_PER_MILLION};
pub use epoch::{Epoch, EpochCumulativeSeries, BITCOIN_START_YEAR, GOLD_START_YEAR};
pub use ratio::{RatioPoint, RatioSeries};
