//! Annual table output and total formatting

use crate::error::{LifeYearsError, Result};
use crate::lifeyears::AnnualSeries;
use serde::Serialize;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// One output row: `Year,Population_Millions,Life_Years`
#[derive(Debug, Serialize)]
struct TableRow {
    #[serde(rename = "Year")]
    year: i32,
    #[serde(rename = "Population_Millions")]
    population_millions: f64,
    #[serde(rename = "Life_Years")]
    life_years: u64,
}

/// Write the annual table to any writer
pub fn write_annual_table<W: Write>(writer: W, series: &AnnualSeries) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for estimate in series.iter() {
        csv_writer.serialize(TableRow {
            year: estimate.year,
            population_millions: estimate.population_millions,
            life_years: estimate.whole_life_years(),
        })?;
    }

    csv_writer
        .flush()
        .map_err(|e| LifeYearsError::Csv(e.into()))?;
    Ok(())
}

/// Write the annual table to `path` and return its resolved location
pub fn write_annual_table_to_path(path: &Path, series: &AnnualSeries) -> Result<PathBuf> {
    let file = File::create(path).map_err(|e| LifeYearsError::io(path, e))?;
    write_annual_table(file, series)?;

    let resolved = fs::canonicalize(path).map_err(|e| LifeYearsError::io(path, e))?;
    log::info!("Wrote {} annual rows to {}", series.len(), resolved.display());
    Ok(resolved)
}

/// Integer with comma thousands separators, e.g. `1,234,567`
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
