//! Piecewise linear interpolation of anchor tables into annual series
//!
//! Between consecutive anchors `(y0, p0)` and `(y1, p1)` every integer year
//! `y0 <= y < y1` gets
//!
//! ```text
//! P(y) = p0 + (p1 - p0) * (y - y0) / (y1 - y0)
//! ```
//!
//! The final anchor year is appended with its recorded value. Tables can be
//! chained: each continuation table starts at the previous table's last year,
//! which stays at the earlier table's value and appears once.

use crate::anchors::{AnchorPoint, AnchorTable};
use crate::error::{LifeYearsError, Result};
use crate::lifeyears::{AnnualEstimate, AnnualSeries};

/// Population at `year` on the segment from `start` to `end`
pub fn interpolate_point(start: &AnchorPoint, end: &AnchorPoint, year: i32) -> f64 {
    if year == start.year {
        return start.population_millions;
    }
    let span = f64::from(end.year - start.year);
    let elapsed = f64::from(year - start.year);
    start.population_millions + (end.population_millions - start.population_millions) * elapsed / span
}

/// Annual series from the first to the last anchor, inclusive
pub fn interpolate_annual(table: &AnchorTable) -> Result<AnnualSeries> {
    interpolate_chain(&[table])
}

/// Annual series across chained tables
///
/// The first table covers its own span; every following table must start at
/// the previous table's last year and extends the series to its own last year.
pub fn interpolate_chain(tables: &[&AnchorTable]) -> Result<AnnualSeries> {
    if tables.is_empty() {
        return Err(LifeYearsError::InsufficientAnchors {
            found: 0,
            source_name: "empty table chain".to_string(),
        });
    }

    let mut estimates: Vec<AnnualEstimate> = Vec::new();

    for (index, table) in tables.iter().enumerate() {
        let points = table.points();
        if points.len() < 2 {
            return Err(LifeYearsError::InsufficientAnchors {
                found: points.len(),
                source_name: table.label().to_string(),
            });
        }

        if let Some(previous) = estimates.last() {
            if points[0].year != previous.year {
                return Err(LifeYearsError::ChainMisaligned {
                    expected: previous.year,
                    found: points[0].year,
                });
            }
        }

        // The first table owns every segment start, including its own first
        // year; continuation tables begin one year past the shared boundary
        let skip_boundary = index > 0;

        for segment in points.windows(2) {
            let (start, end) = (&segment[0], &segment[1]);
            log::debug!(
                "Segment {}: {} ({}) -> {} ({})",
                table.label(),
                start.year,
                start.population_millions,
                end.year,
                end.population_millions
            );

            if skip_boundary {
                // Half-open on the left: (y0, y1]
                for year in (start.year + 1)..end.year {
                    estimates.push(AnnualEstimate::new(year, interpolate_point(start, end, year)));
                }
                if end.year > start.year {
                    estimates.push(AnnualEstimate::new(end.year, end.population_millions));
                }
            } else {
                for year in start.year..end.year {
                    estimates.push(AnnualEstimate::new(year, interpolate_point(start, end, year)));
                }
            }
        }

        if !skip_boundary {
            let last = points[points.len() - 1];
            estimates.push(AnnualEstimate::new(last.year, last.population_millions));
        }

        log::info!(
            "Interpolated {} ({} anchors) through {}",
            table.label(),
            points.len(),
            points[points.len() - 1].year
        );
    }

    Ok(AnnualSeries::from_estimates(estimates))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn three_anchor_table() -> AnchorTable {
        AnchorTable::from_pairs("three", &[(1800, 1000.0), (1900, 1650.0), (2025, 8100.0)])
    }

    #[test]
    fn test_linearity_midpoint() {
        let table = AnchorTable::from_pairs("two", &[(2000, 100.0), (2010, 200.0)]);
        let series = interpolate_annual(&table).unwrap();

        assert_eq!(series.get(2005).unwrap().population_millions, 150.0);
        assert_eq!(series.get(2001).unwrap().population_millions, 110.0);
    }

    #[test]
    fn test_exact_at_anchors() {
        let table = three_anchor_table();
        let series = interpolate_annual(&table).unwrap();

        for anchor in table.points() {
            assert_eq!(
                series.get(anchor.year).unwrap().population_millions,
                anchor.population_millions,
                "anchor year {}",
                anchor.year
            );
        }
    }

    #[test]
    fn test_no_gaps_no_duplicates() {
        let series = interpolate_annual(&three_anchor_table()).unwrap();

        assert_eq!(series.len(), (2025 - 1800 + 1) as usize);
        assert_eq!(series.first_year(), Some(1800));
        assert_eq!(series.last_year(), Some(2025));
        assert!(series.estimates().windows(2).all(|w| w[1].year == w[0].year + 1));
    }

    #[test]
    fn test_grand_total_three_anchors() {
        let series = interpolate_annual(&three_anchor_table()).unwrap();

        // 1800..1900: 100 * 1000 + 6.5 * (0 + .. + 99)      = 132,175
        // 1900..2025: 125 * 1650 + 51.6 * (0 + .. + 124)    = 606,150
        // 2025:                                               8,100
        let expected_millions = 132_175.0 + 606_150.0 + 8_100.0;
        let expected = expected_millions * 1_000_000.0;
        assert_relative_eq!(series.total_life_years(), expected, max_relative = 1e-12);

        // Each row truncates by less than one life-year
        let whole = series.total_whole_life_years();
        assert!(whole <= expected as u64);
        assert!(whole >= expected as u64 - series.len() as u64);
    }

    #[test]
    fn test_grand_total_exact_with_truncation() {
        // Steps of 0.5 and 4.0 million are exact in binary
        let table = AnchorTable::from_pairs("dyadic", &[(0, 10.0), (4, 12.0), (6, 20.0)]);
        let series = interpolate_annual(&table).unwrap();

        let populations: Vec<f64> = series.iter().map(|e| e.population_millions).collect();
        assert_eq!(populations, vec![10.0, 10.5, 11.0, 11.5, 12.0, 16.0, 20.0]);
        assert_eq!(series.total_whole_life_years(), 91_000_000);
    }

    #[test]
    fn test_single_anchor_is_rejected() {
        let table = AnchorTable::from_pairs("one", &[(2000, 6000.0)]);
        let err = interpolate_annual(&table).unwrap_err();
        assert!(matches!(err, LifeYearsError::InsufficientAnchors { found: 1, .. }));

        let empty = AnchorTable::from_pairs("none", &[]);
        assert!(interpolate_annual(&empty).is_err());
    }

    #[test]
    fn test_duplicate_year_yields_empty_segment() {
        let table = AnchorTable::from_pairs("dup", &[(2000, 100.0), (2002, 120.0), (2002, 200.0), (2004, 220.0)]);
        let series = interpolate_annual(&table).unwrap();

        // No repeats and no division by zero; 2002 starts the second segment
        assert_eq!(series.len(), 5);
        assert_eq!(series.get(2002).unwrap().population_millions, 200.0);
    }

    #[test]
    fn test_chain_boundary_appears_once() {
        let anchors = AnchorTable::from_pairs("anchors", &[(2015, 7400.0), (2025, 8200.0)]);
        // Projection disagrees with the anchor at the boundary year
        let projection = AnchorTable::from_pairs("projection", &[(2025, 8000.0), (2030, 8500.0), (2035, 9000.0)]);
        let series = interpolate_chain(&[&anchors, &projection]).unwrap();

        assert_eq!(series.first_year(), Some(2015));
        assert_eq!(series.last_year(), Some(2035));
        assert_eq!(series.len(), 21);
        assert!(series.estimates().windows(2).all(|w| w[1].year == w[0].year + 1));

        // Boundary keeps the anchor table's value
        assert_eq!(series.get(2025).unwrap().population_millions, 8200.0);
        // The projection segment starts from its own 2025 value
        assert_eq!(series.get(2026).unwrap().population_millions, 8100.0);
        assert_eq!(series.get(2030).unwrap().population_millions, 8500.0);
        assert_eq!(series.get(2035).unwrap().population_millions, 9000.0);
    }

    #[test]
    fn test_chain_misaligned_tables() {
        let anchors = AnchorTable::from_pairs("anchors", &[(2015, 7400.0), (2025, 8200.0)]);

        let gap = AnchorTable::from_pairs("gap", &[(2030, 8500.0), (2035, 9000.0)]);
        let err = interpolate_chain(&[&anchors, &gap]).unwrap_err();
        assert!(matches!(err, LifeYearsError::ChainMisaligned { expected: 2025, found: 2030 }));

        let overlap = AnchorTable::from_pairs("overlap", &[(2020, 7800.0), (2035, 9000.0)]);
        assert!(interpolate_chain(&[&anchors, &overlap]).is_err());
    }

    #[test]
    fn test_empty_chain_is_rejected() {
        let err = interpolate_chain(&[]).unwrap_err();
        assert!(matches!(err, LifeYearsError::InsufficientAnchors { found: 0, .. }));
    }

    #[test]
    fn test_chain_of_one_matches_annual() {
        let table = three_anchor_table();
        assert_eq!(interpolate_chain(&[&table]).unwrap(), interpolate_annual(&table).unwrap());
    }
}
