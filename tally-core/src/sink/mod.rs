//! Result persistence.
//!
//! The analyzer itself performs no I/O. A [`ResultSink`] receives the ranked
//! table and the rows meant for a chart, and decides where they go.
//! [`FileSink`] writes a CSV table and a JSON chart description into a
//! directory.

mod chart;
mod file;

use std::io;
use std::path::PathBuf;

use tally_types::{AnalysisReport, FrequencyEntry};
use tracing::info;

pub use chart::{ChartBar, ChartSpec};
pub use file::{FileSink, CHART_FILE, TABLE_FILE};

/// Errors raised while persisting results.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// Creating or writing an output file failed.
    #[error("failed to write {path}: {source}")]
    Io {
        /// File or directory being written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },
    /// Encoding the chart description failed.
    #[error("failed to encode chart: {0}")]
    Json(#[from] serde_json::Error),
}

/// Destination for analysis results.
pub trait ResultSink {
    /// Stores the full ranked table.
    fn write_table(&mut self, rows: &[FrequencyEntry]) -> Result<(), SinkError>;

    /// Stores the chart for the ranked table. An empty slice means no words
    /// were found.
    fn write_chart(&mut self, rows: &[FrequencyEntry]) -> Result<(), SinkError>;
}

/// Hands a report to `sink`: the table first, then the chart.
///
/// # Errors
///
/// Returns the first error reported by the sink.
pub fn persist<S: ResultSink + ?Sized>(report: &AnalysisReport, sink: &mut S) -> Result<(), SinkError> {
    sink.write_table(report.entries())?;
    sink.write_chart(report.entries())?;
    info!(
        rows = report.entries().len(),
        total_words = report.total_words(),
        "results persisted"
    );
    Ok(())
}
