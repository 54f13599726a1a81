//! Ratio chart: percentage line from the first plotted year, one highlighted year

use crate::config::ChartConfig;
use crate::error::{LifeYearsError, Result};
use crate::lifeyears::RatioSeries;
use plotters::prelude::*;
use std::path::Path;

const LINE_COLOR: RGBColor = RGBColor(255, 165, 0);
const HIGHLIGHT_COLOR: RGBColor = RED;

/// Chart-ready ratio data
#[derive(Debug, Clone, PartialEq)]
pub struct RatioChart {
    pub title: Vec<String>,
    pub y_desc: String,
    /// (year, percent) clamped into the display range
    pub points: Vec<(i32, f64)>,
    /// Highlighted year and its exact percentage
    pub highlight: (i32, f64),
    pub config: ChartConfig,
}

impl RatioChart {
    /// Select, scale and clamp the ratio series for display
    pub fn prepare(ratio: &RatioSeries, title: Vec<String>, config: &ChartConfig) -> Result<Self> {
        config.validate()?;

        let points: Vec<(i32, f64)> = ratio
            .from_year(config.plot_from)
            .iter()
            .filter_map(|p| p.percent().map(|pct| (p.year, config.clamp_pct(pct))))
            .collect();

        let year = config.current_year;
        let point = ratio
            .point(year)
            .filter(|p| p.year >= config.plot_from)
            .ok_or(LifeYearsError::YearNotCovered { year })?;
        let highlight_pct = point.percent().ok_or(LifeYearsError::RatioUndefined { year })?;

        Ok(Self {
            title,
            y_desc: format!(
                "{} / {} Life-Years (%)",
                ratio.numerator().name,
                ratio.denominator().name
            ),
            points,
            highlight: (year, highlight_pct),
            config: config.clone(),
        })
    }

    /// Annotation text for the highlighted year, e.g. `2025: 1.23%`
    pub fn highlight_label(&self) -> String {
        format!("{}: {:.2}%", self.highlight.0, self.highlight.1)
    }

    /// Draw the chart as a PNG
    pub fn render_png(&self, path: &Path) -> Result<()> {
        let root = BitMapBackend::new(path, (self.config.width, self.config.height)).into_drawing_area();
        root.fill(&WHITE).map_err(render_error)?;

        let mut area = root.clone();
        for line in &self.title {
            area = area.titled(line, ("sans-serif", 20)).map_err(render_error)?;
        }

        let x_min = self.points.first().map(|p| p.0).unwrap_or(self.config.plot_from);
        let x_max = self.points.last().map(|p| p.0).unwrap_or(x_min).max(x_min + 1);
        let (y_min, y_max) = (self.config.y_min_pct, self.config.y_max_pct);

        let mut chart = ChartBuilder::on(&area)
            .margin(15)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)
            .map_err(render_error)?;

        let y_label = |y: &f64| format!("{:.0}%", y);
        chart
            .configure_mesh()
            .x_desc("Year")
            .y_desc(self.y_desc.as_str())
            .y_labels(self.config.y_tick_count())
            .y_label_formatter(&y_label)
            .bold_line_style(BLACK.mix(0.15))
            .light_line_style(WHITE)
            .draw()
            .map_err(render_error)?;

        chart
            .draw_series(LineSeries::new(self.points.iter().copied(), LINE_COLOR.stroke_width(3)))
            .map_err(render_error)?;

        let (year, pct) = self.highlight;
        let marker = (year, self.config.clamp_pct(pct));
        chart
            .draw_series(std::iter::once(
                EmptyElement::at(marker)
                    + Circle::new((0, 0), 5, HIGHLIGHT_COLOR.filled())
                    + Text::new(
                        self.highlight_label(),
                        (-40, -28),
                        ("sans-serif", 16).into_font().color(&HIGHLIGHT_COLOR),
                    ),
            ))
            .map_err(render_error)?;

        root.present().map_err(render_error)?;
        log::info!("Chart written to {}", path.display());
        Ok(())
    }
}

fn render_error<E: std::fmt::Display>(err: E) -> LifeYearsError {
    LifeYearsError::Render(err.to_string())
}

/// Calendar year with an era suffix for BCE years, e.g. `700 BCE`
pub fn era_year(year: i32) -> String {
    if year < 0 {
        format!("{} BCE", -i64::from(year))
    } else {
        year.to_string()
    }
}
