//! Output of annual tables, totals and ratio charts

pub mod chart;
pub mod table;

pub use chart::{era_year, RatioChart};
pub use table::{format_thousands, write_annual_table, write_annual_table_to_path};
