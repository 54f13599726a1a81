//! Error types for loading, interpolating and emitting life-years series

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used across the library
pub type Result<T> = std::result::Result<T, LifeYearsError>;

#[derive(Error, Debug)]
pub enum LifeYearsError {
    // Input
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to fetch {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Required column '{column}' missing from {source_name}")]
    MissingColumn { column: &'static str, source_name: String },

    #[error("Invalid population {value} for year {year}")]
    InvalidPopulation { year: i32, value: f64 },

    // Interpolation
    #[error("At least two anchor points are required to interpolate, {source_name} has {found}")]
    InsufficientAnchors { found: usize, source_name: String },

    #[error("Continuation table must start at year {expected}, found {found}")]
    ChainMisaligned { expected: i32, found: i32 },

    // Emitters
    #[error("Year {year} is not covered by the annual series")]
    YearNotCovered { year: i32 },

    #[error("Ratio is undefined at year {year} (denominator epoch has no life-years yet)")]
    RatioUndefined { year: i32 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Chart rendering failed: {0}")]
    Render(String),
}

impl LifeYearsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}
