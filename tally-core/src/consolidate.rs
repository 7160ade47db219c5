//! Near-duplicate consolidation.
//!
//! The variant dictionary only knows the spellings it was given. This pass
//! catches the rest (typos, partial compounds, plural forms) by greedily
//! folding similar entries into the most frequent one.
//!
//! ## Algorithm
//!
//! ```text
//! sort entries by frequency (desc, stable)
//! for each entry not yet absorbed, in that order:
//!     it becomes a base; running total = its frequency
//!     for every other entry not yet absorbed (before or after it):
//!         if one word is a prefix of the other, or ratio(base, other) > threshold:
//!             add its frequency to the running total, mark it absorbed
//!     emit (base word, running total)
//! recompute percentages, sort by frequency (desc, stable)
//! ```
//!
//! The pass is greedy and order-sensitive: with three mutually similar words
//! the middle one joins whichever neighbour becomes a base first. The
//! pre-sort makes that choice deterministic. Clustering by connected
//! components would give different results and is not what this does.
//!
//! A base is marked absorbed as soon as it is visited, so a later base can
//! never fold it in a second time. Without that, an asymmetric ratio could
//! count the same occurrences twice.

use smallvec::SmallVec;
use tally_types::FrequencyEntry;
use tracing::debug;

use crate::similarity::{chars_of, ratio_chars, CharBuf};

/// Default merge threshold.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.85;

/// Greedy prefix/similarity merger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Consolidator {
    threshold: f64,
}

impl Default for Consolidator {
    fn default() -> Self {
        Self::new(DEFAULT_SIMILARITY_THRESHOLD)
    }
}

impl Consolidator {
    /// Creates a consolidator merging pairs whose ratio exceeds `threshold`.
    pub const fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// The configured threshold.
    #[inline]
    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Returns `true` if `other` should fold into `base`.
    #[inline]
    fn is_near_duplicate(&self, base: &str, base_chars: &[char], other: &str, other_chars: &[char]) -> bool {
        other.starts_with(base)
            || base.starts_with(other)
            || ratio_chars(base_chars, other_chars) > self.threshold
    }

    /// Merges near-duplicate entries.
    ///
    /// The sum of frequencies is preserved; percentages are recomputed
    /// against it. Empty input gives empty output.
    pub fn consolidate(&self, entries: &[FrequencyEntry]) -> Vec<FrequencyEntry> {
        if entries.is_empty() {
            return Vec::new();
        }

        let mut order: Vec<usize> = (0..entries.len()).collect();
        order.sort_by(|&a, &b| entries[b].frequency.cmp(&entries[a].frequency));

        let words: Vec<&str> = order.iter().map(|&i| entries[i].word.as_str()).collect();
        let frequencies: Vec<u64> = order.iter().map(|&i| entries[i].frequency).collect();
        let chars: Vec<CharBuf> = words.iter().map(|w| chars_of(w)).collect();
        let mut absorbed = vec![false; words.len()];

        let mut merged: Vec<FrequencyEntry> = Vec::with_capacity(words.len());

        for base in 0..words.len() {
            if absorbed[base] {
                continue;
            }
            absorbed[base] = true;

            let mut running = frequencies[base];
            let mut folded: SmallVec<[&str; 4]> = SmallVec::new();

            for other in 0..words.len() {
                if absorbed[other] {
                    continue;
                }
                if self.is_near_duplicate(words[base], &chars[base], words[other], &chars[other]) {
                    running += frequencies[other];
                    absorbed[other] = true;
                    folded.push(words[other]);
                }
            }

            if !folded.is_empty() {
                debug!(base = words[base], merged = ?folded, total = running, "combined similar words");
            }

            merged.push(FrequencyEntry {
                word: words[base].to_owned(),
                frequency: running,
                percentage: 0.0,
            });
        }

        let total: u64 = merged.iter().map(|e| e.frequency).sum();
        for entry in &mut merged {
            entry.rescale(total);
        }
        merged.sort_by(|a, b| b.frequency.cmp(&a.frequency));

        merged
    }
}
