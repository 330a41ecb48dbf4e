//! `tt-output` — output for rust_tt histograms.
//!
//! | Module    | Output                                                  |
//! |-----------|---------------------------------------------------------|
//! | [`csv`]   | `histogram.csv`, `summaries.csv` in an output directory |
//! | [`chart`] | one text bar per bin, scaled to a fixed width           |
//!
//! # Usage
//!
//! ```rust,ignore
//! use tt_output::{CsvWriter, OutputWriter, render_bars};
//!
//! let mut writer = CsvWriter::new(Path::new("./output"))?;
//! writer.write_histogram("3 lines", &hist)?;
//! writer.write_summary("3 lines", &hist.summarize()?)?;
//! writer.finish()?;
//! print!("{}", render_bars(&hist, 60));
//! ```

pub mod chart;
pub mod csv;
pub mod error;
pub mod row;
pub mod writer;


pub use chart::render_bars;
pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use row::{HistogramRow, SummaryRow};
pub use writer::OutputWriter;
