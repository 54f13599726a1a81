//! Life-years CLI
//!
//! Builds the annual world-population series from the anchor table, writes it
//! as `Year,Population_Millions,Life_Years` and prints the grand total.
//!
//! Usage:
//!   lifeyears                       # reads data/anchor_populations.csv
//!   lifeyears https://host/anchor_pops.csv --output annual.csv

use anyhow::Context;
use clap::Parser;
use lifeyears::report::format_thousands;
use lifeyears::{Config, LifeYearsRunner};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lifeyears", version, about = "Annual world population and total human life-years")]
struct Args {
    /// Anchor table path or URL (default: data/anchor_populations.csv)
    source: Option<String>,

    /// Annual CSV output path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,

    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::from_json_path(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(source) = args.source {
        config.anchor_source = source;
    }
    if let Some(output) = args.output {
        config.report_output = output;
    }

    let runner = LifeYearsRunner::load(config.clone())
        .with_context(|| format!("Failed to load anchor table {}", config.anchor_source))?;
    let outcome = runner.write_report().context("Failed to build annual table")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    let through = outcome
        .summary
        .last_year
        .map(|y| y.to_string())
        .unwrap_or_default();
    println!(
        "Total human life-years (through {}): {}",
        through,
        format_thousands(outcome.summary.total_whole_life_years)
    );
    println!("Annual CSV written to {}", outcome.output_path.display());

    Ok(())
}
