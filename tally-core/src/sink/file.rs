//! Directory-backed sink.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tally_types::FrequencyEntry;
use tempfile::NamedTempFile;
use tracing::debug;

use super::chart::ChartSpec;
use super::{ResultSink, SinkError};

/// File name of the CSV table.
pub const TABLE_FILE: &str = "word_frequencies.csv";

/// File name of the chart description.
pub const CHART_FILE: &str = "word_frequencies_chart.json";

const DEFAULT_CHART_TOP_N: usize = 10;

/// Writes [`TABLE_FILE`] and [`CHART_FILE`] into a directory.
///
/// The directory is created on first write. Each file is written to a
/// temporary file in the same directory and renamed into place, so readers
/// never see a half-written file.
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
    chart_top_n: usize,
}

impl FileSink {
    /// Creates a sink writing into `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            chart_top_n: DEFAULT_CHART_TOP_N,
        }
    }

    /// Sets how many rows the chart shows.
    #[must_use]
    pub fn with_chart_top_n(mut self, n: usize) -> Self {
        self.chart_top_n = n;
        self
    }

    /// Output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the CSV table.
    pub fn table_path(&self) -> PathBuf {
        self.dir.join(TABLE_FILE)
    }

    /// Path of the chart description.
    pub fn chart_path(&self) -> PathBuf {
        self.dir.join(CHART_FILE)
    }

    fn write_atomic<F>(&self, name: &str, fill: F) -> Result<(), SinkError>
    where
        F: FnOnce(&mut BufWriter<&NamedTempFile>) -> Result<(), SinkError>,
    {
        let io_err = |path: &Path| {
            let path = path.to_path_buf();
            move |source: io::Error| SinkError::Io { path, source }
        };

        fs::create_dir_all(&self.dir).map_err(io_err(&self.dir))?;

        let target = self.dir.join(name);
        let temp = NamedTempFile::new_in(&self.dir).map_err(io_err(&self.dir))?;
        {
            let mut writer = BufWriter::new(&temp);
            fill(&mut writer)?;
            writer.flush().map_err(io_err(&target))?;
        }
        temp.persist(&target)
            .map_err(|e| SinkError::Io {
                path: target.clone(),
                source: e.error,
            })?;

        debug!(path = %target.display(), "wrote output file");
        Ok(())
    }
}

impl ResultSink for FileSink {
    fn write_table(&mut self, rows: &[FrequencyEntry]) -> Result<(), SinkError> {
        let path = self.table_path();
        self.write_atomic(TABLE_FILE, |w| {
            write_csv(w, rows).map_err(|source| SinkError::Io { path, source })
        })
    }

    fn write_chart(&mut self, rows: &[FrequencyEntry]) -> Result<(), SinkError> {
        let chart = ChartSpec::from_entries(rows, self.chart_top_n);
        self.write_atomic(CHART_FILE, |w| {
            serde_json::to_writer_pretty(w, &chart)?;
            Ok(())
        })
    }
}

/// Writes the table as CSV: a header row, then one row per entry with the
/// percentage fixed at two decimals.
pub fn write_csv<W: Write>(out: &mut W, rows: &[FrequencyEntry]) -> io::Result<()> {
    out.write_all(b"word,frequency,percentage\n")?;
    for entry in rows {
        write_field(out, &entry.word)?;
        writeln!(out, ",{},{:.2}", entry.frequency, entry.percentage)?;
    }
    Ok(())
}

/// RFC 4180 quoting: fields holding a comma, quote or line break are wrapped
/// in quotes with inner quotes doubled.
fn write_field<W: Write>(out: &mut W, field: &str) -> io::Result<()> {
    if !field.contains([',', '"', '\n', '\r']) {
        return out.write_all(field.as_bytes());
    }
    out.write_all(b"\"")?;
    out.write_all(field.replace('"', "\"\"").as_bytes())?;
    out.write_all(b"\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn csv(rows: &[FrequencyEntry]) -> String {
        let mut out = Vec::new();
        write_csv(&mut out, rows).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn csv_has_header_and_fixed_decimals() {
        let rows = [
            FrequencyEntry::with_total("card", 2, 3),
            FrequencyEntry::with_total("הטבות", 1, 3),
        ];
        assert_eq!(
            csv(&rows),
            "word,frequency,percentage\ncard,2,66.67\nהטבות,1,33.33\n"
        );
    }

    #[test]
    fn whole_percentages_keep_two_decimals() {
        let rows = [FrequencyEntry::with_total("card", 1, 1)];
        assert_eq!(csv(&rows), "word,frequency,percentage\ncard,1,100.00\n");
    }

    #[test]
    fn empty_table_is_header_only() {
        assert_eq!(csv(&[]), "word,frequency,percentage\n");
    }

    #[test]
    fn special_fields_are_quoted() {
        let mut out = Vec::new();
        write_field(&mut out, "a,b").unwrap();
        out.push(b' ');
        write_field(&mut out, "say \"hi\"").unwrap();
        out.push(b' ');
        write_field(&mut out, "plain").unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\"a,b\" \"say \"\"hi\"\"\" plain"
        );
    }

    #[test]
    fn paths_are_inside_dir() {
        let sink = FileSink::new("out");
        assert_eq!(sink.dir(), Path::new("out"));
        assert_eq!(sink.table_path(), Path::new("out").join("word_frequencies.csv"));
        assert_eq!(
            sink.chart_path(),
            Path::new("out").join("word_frequencies_chart.json")
        );
    }
}
