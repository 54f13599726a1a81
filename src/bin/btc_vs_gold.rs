//! Bitcoin vs gold life-years ratio chart (2009 onward)
//!
//! Chains the anchor table with the UN WPP 2022 medium-variant projection,
//! accumulates life-years since 700 BCE and since 2009, and draws the ratio
//! with the current year highlighted.

use anyhow::Context;
use clap::Parser;
use lifeyears::{Config, LifeYearsRunner};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "btc_vs_gold", version, about = "Bitcoin vs gold cumulative life-years ratio chart")]
struct Args {
    /// Anchor table path or URL
    #[arg(long)]
    anchors: Option<String>,

    /// Projection table path or URL, starting at the last anchor year
    #[arg(long)]
    projection: Option<String>,

    /// PNG output path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Year to highlight and annotate
    #[arg(long)]
    current_year: Option<i32>,

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
    if let Some(anchors) = args.anchors {
        config.anchor_source = anchors;
    }
    if let Some(projection) = args.projection {
        config.projection_source = projection;
    }
    if let Some(output) = args.output {
        config.chart.output = output;
    }
    if let Some(year) = args.current_year {
        config.chart.current_year = year;
    }

    let runner = LifeYearsRunner::load_with_projection(config.clone())
        .context("Failed to load population tables")?;
    let chart = runner.chart().context("Failed to prepare ratio chart")?;

    chart
        .render_png(&config.chart.output)
        .with_context(|| format!("Failed to write {}", config.chart.output.display()))?;

    println!("{}", chart.highlight_label());
    println!("Chart written to {}", config.chart.output.display());

    Ok(())
}
