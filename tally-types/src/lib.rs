//! Core types for the Tally word-frequency engine.
//!
//! This crate holds the plain data that crosses crate boundaries:
//!
//! - **Report types**: [`FrequencyEntry`] rows and the [`AnalysisReport`] that owns them
//! - **Configuration**: [`AnalyzerConfig`] with serde support for file-based overrides
//! - **Errors**: the failure modes a caller can observe from the core
//!
//! Keeping these separate lets the web layer or a sink depend on the report
//! shape without pulling in the analysis pipeline.

#![warn(missing_docs)]

use core::fmt;

use serde::{Deserialize, Serialize};

/// Rounds a percentage to two decimals, half-to-even on the scaled value.
///
/// Matches `numpy.round(x, 2)`: scale by 100, round to the nearest even
/// integer on ties, scale back.
#[inline]
pub fn round_percentage(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Share of `frequency` in `total`, in percent, rounded to two decimals.
///
/// Returns `0.0` when `total` is zero.
#[inline]
pub fn percentage_of(frequency: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round_percentage(frequency as f64 / total as f64 * 100.0)
}

/// One row of the frequency table.
///
/// Serialized field order is `word, frequency, percentage`, which is also the
/// column order of the persisted table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyEntry {
    /// Canonical word.
    pub word: String,
    /// Number of occurrences (always >= 1 inside a report).
    pub frequency: u64,
    /// `100 * frequency / total_words`, rounded to two decimals.
    pub percentage: f64,
}

impl FrequencyEntry {
    /// Creates an entry whose percentage is computed against `total`.
    pub fn with_total(word: impl Into<String>, frequency: u64, total: u64) -> Self {
        Self {
            word: word.into(),
            frequency,
            percentage: percentage_of(frequency, total),
        }
    }

    /// Recomputes the percentage against a new total.
    #[inline]
    pub fn rescale(&mut self, total: u64) {
        self.percentage = percentage_of(self.frequency, total);
    }
}

impl fmt::Display for FrequencyEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {:.2}%", self.word, self.frequency, self.percentage)
    }
}

/// Result of analyzing one text.
///
/// `total_words` is the number of tokens before consolidation. Consolidation
/// only regroups counts, so it always equals the sum of entry frequencies.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalysisReport {
    entries: Vec<FrequencyEntry>,
    total_words: u64,
    unique_words: usize,
}

impl AnalysisReport {
    /// Builds a report from ranked entries and the raw token count.
    pub fn new(entries: Vec<FrequencyEntry>, total_words: u64) -> Self {
        let unique_words = entries.len();
        Self {
            entries,
            total_words,
            unique_words,
        }
    }

    /// The degenerate report: no entries, zero words.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Ranked entries, most frequent first.
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[FrequencyEntry] {
        &self.entries
    }

    /// Consumes the report and returns its entries.
    pub fn into_entries(self) -> Vec<FrequencyEntry> {
        self.entries
    }

    /// Number of tokens counted.
    #[inline]
    #[must_use]
    pub fn total_words(&self) -> u64 {
        self.total_words
    }

    /// Number of entries after consolidation.
    #[inline]
    #[must_use]
    pub fn unique_words(&self) -> usize {
        self.unique_words
    }

    /// Returns `true` if no words were found.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The first `n` entries, or all of them if the table is shorter.
    #[inline]
    #[must_use]
    pub fn top_n(&self, n: usize) -> &[FrequencyEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// Human-readable summary showing the top `limit` rows.
    pub fn summary(&self, limit: usize) -> ReportSummary<'_> {
        ReportSummary {
            report: self,
            limit,
        }
    }
}

/// Console rendering of an [`AnalysisReport`].
///
/// Columns are padded by character count, so Hebrew words line up with
/// Latin ones in a monospace terminal.
pub struct ReportSummary<'a> {
    report: &'a AnalysisReport,
    limit: usize,
}

impl fmt::Display for ReportSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Analysis Summary:")?;
        writeln!(f, "Total words: {}", self.report.total_words)?;
        writeln!(f, "Unique words: {}", self.report.unique_words)?;
        writeln!(f)?;
        writeln!(f, "Top {} most frequent words:", self.limit)?;

        let rows = self.report.top_n(self.limit);
        if rows.is_empty() {
            return writeln!(f, "(no words found)");
        }

        let word_w = rows
            .iter()
            .map(|e| e.word.chars().count())
            .max()
            .unwrap_or(0)
            .max("word".len());
        let freq_w = rows
            .iter()
            .map(|e| e.frequency.to_string().len())
            .max()
            .unwrap_or(0)
            .max("frequency".len());

        writeln!(
            f,
            "{:>word_w$}  {:>freq_w$}  {:>10}",
            "word", "frequency", "percentage"
        )?;
        for entry in rows {
            writeln!(
                f,
                "{:>word_w$}  {:>freq_w$}  {:>10.2}",
                entry.word, entry.frequency, entry.percentage
            )?;
        }
        Ok(())
    }
}

/// Errors that can occur when analyzing a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    /// Input exceeds the configured size cap.
    #[error("input too large: {size} bytes (max: {max_size} bytes)")]
    TooLarge {
        /// The actual size of the input in bytes.
        size: usize,
        /// The maximum allowed size in bytes.
        max_size: usize,
    },
}

/// Errors raised while building a variant dictionary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VariantError {
    /// The same spelling was listed under two canonical words.
    #[error("variant {variant:?} maps to both {first:?} and {second:?}")]
    Conflict {
        /// The contested spelling.
        variant: String,
        /// Canonical word it was first assigned to.
        first: String,
        /// Canonical word that tried to claim it again.
        second: String,
    },
    /// A canonical word is itself a variant of another canonical word.
    #[error("canonical word {canonical:?} is also a variant of {target:?}")]
    Chained {
        /// The canonical word.
        canonical: String,
        /// The canonical word it would be folded into.
        target: String,
    },
}

/// A configuration value outside its allowed range.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid configuration: {field}: {reason}")]
pub struct ConfigError {
    /// Name of the offending field.
    pub field: &'static str,
    /// What is wrong with it.
    pub reason: String,
}

/// Analyzer configuration options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Similarity ratio a pair of words must exceed to be merged (0.0-1.0).
    /// Default: 0.85
    pub similarity_threshold: f64,
    /// Words with fewer characters are dropped.
    /// Default: 2
    pub min_word_chars: usize,
    /// Largest input accepted by `try_analyze`, in bytes.
    /// Default: 16 MiB
    pub max_input_bytes: usize,
    /// Number of rows handed to a chart renderer.
    /// Default: 10
    pub chart_top_n: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: 0.85,
            min_word_chars: 2,
            max_input_bytes: 16 * 1024 * 1024,
            chart_top_n: 10,
        }
    }
}

impl AnalyzerConfig {
    /// Creates a configuration that only folds the variant dictionary and
    /// exact prefixes (a ratio can never exceed 1.0).
    pub const fn prefix_only() -> Self {
        Self {
            similarity_threshold: 1.0,
            min_word_chars: 2,
            max_input_bytes: 16 * 1024 * 1024,
            chart_top_n: 10,
        }
    }

    /// Checks that every field is inside its allowed range.
    ///
    /// # Errors
    ///
    /// Returns the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(ConfigError {
                field: "similarity_threshold",
                reason: format!("{} is outside 0.0..=1.0", self.similarity_threshold),
            });
        }
        if self.min_word_chars == 0 {
            return Err(ConfigError {
                field: "min_word_chars",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.max_input_bytes == 0 {
            return Err(ConfigError {
                field: "max_input_bytes",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.chart_top_n == 0 {
            return Err(ConfigError {
                field: "chart_top_n",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
