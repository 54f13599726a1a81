//! Load anchor tables from `Year,Population_Millions` CSV files or URLs

use super::{AnchorPoint, AnchorTable};
use crate::error::{LifeYearsError, Result};
use csv::{ReaderBuilder, Trim};
use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Default anchor table (anchors up to 2025)
pub const DEFAULT_ANCHOR_PATH: &str = "data/anchor_populations.csv";

/// Default projection table (UN WPP 2022 medium variant, 5-year points 2025-2100)
pub const DEFAULT_PROJECTION_PATH: &str = "data/UNWPP2022_Medium_Variant_World_Pop_2025_2100.csv";

const YEAR_COLUMN: &str = "Year";
const POPULATION_COLUMN: &str = "Population_Millions";

/// Raw CSV row; any other columns in the file are ignored
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Year")]
    year: i32,
    #[serde(rename = "Population_Millions")]
    population_millions: f64,
}

impl CsvRow {
    fn into_anchor(self) -> Result<AnchorPoint> {
        if !self.population_millions.is_finite() || self.population_millions < 0.0 {
            return Err(LifeYearsError::InvalidPopulation {
                year: self.year,
                value: self.population_millions,
            });
        }
        Ok(AnchorPoint::new(self.year, self.population_millions))
    }
}

/// Where an anchor table is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnchorSource {
    Path(PathBuf),
    Url(String),
}

impl AnchorSource {
    /// Interpret a user-supplied location: `http://` and `https://` are URLs,
    /// anything else is a local path
    pub fn parse(location: &str) -> Self {
        let lower = location.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            AnchorSource::Url(location.to_string())
        } else {
            AnchorSource::Path(PathBuf::from(location))
        }
    }
}

impl From<&str> for AnchorSource {
    fn from(location: &str) -> Self {
        Self::parse(location)
    }
}

impl fmt::Display for AnchorSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnchorSource::Path(path) => write!(f, "{}", path.display()),
            AnchorSource::Url(url) => write!(f, "{}", url),
        }
    }
}

/// Load an anchor table from a path or URL
pub fn load_anchor_table(source: &AnchorSource) -> Result<AnchorTable> {
    match source {
        AnchorSource::Path(path) => load_anchor_table_from_path(path),
        AnchorSource::Url(url) => load_anchor_table_from_url(url),
    }
}

/// Load an anchor table from a local CSV file
pub fn load_anchor_table_from_path<P: AsRef<Path>>(path: P) -> Result<AnchorTable> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| LifeYearsError::io(path, e))?;
    load_anchor_table_from_reader(file, path.display().to_string())
}

/// Fetch and load an anchor table over HTTP(S)
pub fn load_anchor_table_from_url(url: &str) -> Result<AnchorTable> {
    log::info!("Fetching anchor table from {}", url);

    let body = reqwest::blocking::get(url)
        .and_then(|response| response.error_for_status())
        .and_then(|response| response.text())
        .map_err(|source| LifeYearsError::Http {
            url: url.to_string(),
            source,
        })?;

    load_anchor_table_from_reader(body.as_bytes(), url)
}

/// Load an anchor table from any reader (e.g., string buffer, network body)
pub fn load_anchor_table_from_reader<R: std::io::Read>(
    reader: R,
    label: impl Into<String>,
) -> Result<AnchorTable> {
    let label = label.into();
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    // Check required columns before touching any row
    let headers = csv_reader.headers()?.clone();
    for column in [YEAR_COLUMN, POPULATION_COLUMN] {
        if !headers.iter().any(|h| h == column) {
            return Err(LifeYearsError::MissingColumn {
                column,
                source_name: label,
            });
        }
    }

    let mut points = Vec::new();
    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        points.push(row.into_anchor()?);
    }

    let table = AnchorTable::new(label, points);

    let duplicates = table.duplicate_years();
    if !duplicates.is_empty() {
        log::warn!(
            "{} contains duplicate anchor years {:?}; interpolation keeps the last segment start",
            table.label(),
            duplicates
        );
    }

    log::info!(
        "Loaded {} anchor points from {} ({:?}..={:?})",
        table.len(),
        table.label(),
        table.first_year(),
        table.last_year()
    );

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_reader_sorts_and_ignores_extra_columns() {
        let csv = "Year,Source,Population_Millions\n\
                   1900,estimate,1650\n\
                   1800,estimate,1000\n\
                   2025,census,8100.5\n";
        let table = load_anchor_table_from_reader(csv.as_bytes(), "inline").unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.label(), "inline");
        assert_eq!(table.points()[0], AnchorPoint::new(1800, 1000.0));
        assert_eq!(table.points()[2], AnchorPoint::new(2025, 8100.5));
    }

    #[test]
    fn test_negative_years_parse() {
        let csv = "Year,Population_Millions\n-700,50\n1,200\n";
        let table = load_anchor_table_from_reader(csv.as_bytes(), "bce").unwrap();
        assert_eq!(table.first_year(), Some(-700));
    }

    #[test]
    fn test_missing_column_is_rejected() {
        let csv = "Year,Pop\n1800,1000\n1900,1650\n";
        let err = load_anchor_table_from_reader(csv.as_bytes(), "bad.csv").unwrap_err();
        match err {
            LifeYearsError::MissingColumn { column, source_name } => {
                assert_eq!(column, "Population_Millions");
                assert_eq!(source_name, "bad.csv");
            }
            other => panic!("Unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_unparsable_value_is_csv_error() {
        let csv = "Year,Population_Millions\n1800,lots\n";
        let err = load_anchor_table_from_reader(csv.as_bytes(), "bad").unwrap_err();
        assert!(matches!(err, LifeYearsError::Csv(_)));
    }

    #[test]
    fn test_negative_population_is_rejected() {
        let csv = "Year,Population_Millions\n1800,1000\n1900,-1\n";
        let err = load_anchor_table_from_reader(csv.as_bytes(), "neg").unwrap_err();
        assert!(matches!(err, LifeYearsError::InvalidPopulation { year: 1900, .. }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_anchor_table_from_path("does/not/exist.csv").unwrap_err();
        assert!(matches!(err, LifeYearsError::Io { .. }));
    }

    #[test]
    fn test_source_parse() {
        assert_eq!(
            AnchorSource::parse("https://example.org/anchor_pops.csv"),
            AnchorSource::Url("https://example.org/anchor_pops.csv".to_string())
        );
        assert_eq!(
            AnchorSource::parse("HTTP://example.org/a.csv"),
            AnchorSource::Url("HTTP://example.org/a.csv".to_string())
        );
        assert_eq!(
            AnchorSource::parse("anchor_pops.csv"),
            AnchorSource::Path(PathBuf::from("anchor_pops.csv"))
        );
    }

    #[test]
    fn test_load_default_tables() {
        let anchors = load_anchor_table_from_path(DEFAULT_ANCHOR_PATH)
            .expect("Failed to load default anchor table");
        assert!(anchors.len() >= 2);
        assert_eq!(anchors.last_year(), Some(2025));

        let projection = load_anchor_table_from_path(DEFAULT_PROJECTION_PATH)
            .expect("Failed to load default projection table");
        assert_eq!(projection.first_year(), Some(2025));
        assert_eq!(projection.last_year(), Some(2100));
    }
}
