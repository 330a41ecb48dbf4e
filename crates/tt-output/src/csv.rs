//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `histogram.csv`  — `scenario,bin_index,bin_value,count`
//! - `summaries.csv`  — `scenario,trials,mean,median,p95,std_dev`

use std::fs::File;
use std::path::Path;

use csv::Writer;
use tt_stats::{HistogramAccumulator, Summary};

use crate::writer::OutputWriter;
use crate::{HistogramRow, OutputResult, SummaryRow};

/// Writes histograms and summaries to two CSV files.
pub struct CsvWriter {
    histograms: Writer<File>,
    summaries:  Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open the two CSV files and write the header
    /// rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut histograms = Writer::from_path(dir.join("histogram.csv"))?;
        histograms.write_record(["scenario", "bin_index", "bin_value", "count"])?;

        let mut summaries = Writer::from_path(dir.join("summaries.csv"))?;
        summaries.write_record(["scenario", "trials", "mean", "median", "p95", "std_dev"])?;

        Ok(Self {
            histograms,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_histogram(&mut self, scenario: &str, hist: &HistogramAccumulator) -> OutputResult<()> {
        for row in HistogramRow::from_histogram(scenario, hist) {
            self.histograms.write_record(&[
                row.scenario.to_string(),
                row.bin_index.to_string(),
                row.bin_value.to_string(),
                row.count.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_summary(&mut self, scenario: &str, summary: &Summary) -> OutputResult<()> {
        let row = SummaryRow::new(scenario, summary);
        self.summaries.write_record(&[
            row.scenario.to_string(),
            row.trials.to_string(),
            row.mean.to_string(),
            row.median.to_string(),
            row.p95.to_string(),
            row.std_dev.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.histograms.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
