//! Public analysis entry points.

use tally_types::{AnalysisError, AnalysisReport, FrequencyEntry};
use tracing::{debug, warn};

use crate::frequency::{count, FrequencyCounter};
use crate::pipeline::types::WordFrequencyAnalyzer;

impl WordFrequencyAnalyzer {
    /// Analyzes `text`.
    ///
    /// Accepts input of any length. Empty or whitespace-only text gives an
    /// empty report.
    pub fn analyze(&self, text: &str) -> AnalysisReport {
        if text.trim().is_empty() {
            return AnalysisReport::empty();
        }

        let mut counter = FrequencyCounter::new();
        self.tokenizer().tokenize(text, |token| counter.add(token));
        debug!(
            tokens = counter.total(),
            distinct = counter.distinct(),
            "tokenized input"
        );

        let (entries, total) = counter.finish();
        self.build_report(&entries, total)
    }

    /// Like [`analyze`](Self::analyze), but refuses input longer than
    /// `max_input_bytes`.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::TooLarge` if `text` is longer than
    /// `max_input_bytes`.
    pub fn try_analyze(&self, text: &str) -> Result<AnalysisReport, AnalysisError> {
        let max_size = self.config.max_input_bytes;
        if text.len() > max_size {
            warn!(size = text.len(), max_size, "input exceeds size cap");
            return Err(AnalysisError::TooLarge {
                size: text.len(),
                max_size,
            });
        }
        Ok(self.analyze(text))
    }

    /// Normalizes, counts and consolidates words that are already split.
    ///
    /// Words are trimmed, then dropped if shorter than `min_word_chars`.
    /// Unlike [`analyze`](Self::analyze) this sees multi-word variants such as
    /// `"cash back"` whole.
    pub fn analyze_words<I, S>(&self, words: I) -> AnalysisReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let min = self.config.min_word_chars.saturating_sub(1);
        let normalized = words.into_iter().filter_map(|word| {
            let word = word.as_ref().trim();
            word.chars()
                .nth(min)
                .map(|_| self.variants.normalize(word))
        });

        let (entries, total) = count(normalized);
        self.build_report(&entries, total)
    }

    /// Canonical tokens of `text`, in order.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.tokenizer().tokenize_to_vec(text)
    }

    fn build_report(&self, entries: &[FrequencyEntry], total: u64) -> AnalysisReport {
        if total == 0 {
            return AnalysisReport::empty();
        }
        let merged = self.consolidator.consolidate(entries);
        debug!(
            total_words = total,
            before = entries.len(),
            after = merged.len(),
            "consolidated frequency table"
        );
        AnalysisReport::new(merged, total)
    }
}
