//! Word counting.
//!
//! Tracks occurrences per distinct token in first-seen order so that the
//! final ranking can break frequency ties deterministically.

use rustc_hash::FxHashMap;
use tally_types::FrequencyEntry;

/// Incremental token counter.
#[derive(Debug, Default)]
pub struct FrequencyCounter {
    index: FxHashMap<Box<str>, u32>,
    slots: Vec<(Box<str>, u64)>,
    total: u64,
}

impl FrequencyCounter {
    /// Creates an empty counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of `word`.
    #[inline]
    pub fn add(&mut self, word: &str) {
        self.total += 1;
        if let Some(&slot) = self.index.get(word) {
            self.slots[slot as usize].1 += 1;
            return;
        }
        let slot = self.slots.len() as u32;
        self.index.insert(word.into(), slot);
        self.slots.push((word.into(), 1));
    }

    /// Total occurrences recorded.
    #[inline]
    #[must_use]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct words recorded.
    #[inline]
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.slots.len()
    }

    /// Produces the ranked table and the total word count.
    ///
    /// Entries are sorted by frequency descending; ties keep first-seen
    /// order. A counter that saw nothing yields `([], 0)`.
    pub fn finish(self) -> (Vec<FrequencyEntry>, u64) {
        let total = self.total;
        if total == 0 {
            return (Vec::new(), 0);
        }

        let mut entries: Vec<FrequencyEntry> = self
            .slots
            .into_iter()
            .map(|(word, frequency)| FrequencyEntry::with_total(word, frequency, total))
            .collect();
        entries.sort_by(|a, b| b.frequency.cmp(&a.frequency));

        (entries, total)
    }
}

/// Counts a token sequence in one call.
pub fn count<I, S>(tokens: I) -> (Vec<FrequencyEntry>, u64)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counter = FrequencyCounter::new();
    for token in tokens {
        counter.add(token.as_ref());
    }
    counter.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(entries: &[FrequencyEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.word.as_str()).collect()
    }

    #[test]
    fn counts_occurrences() {
        let (entries, total) = count(["card", "bonus", "card", "card"]);
        assert_eq!(total, 4);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].word, "card");
        assert_eq!(entries[0].frequency, 3);
        assert_eq!(entries[0].percentage, 75.0);
        assert_eq!(entries[1].frequency, 1);
        assert_eq!(entries[1].percentage, 25.0);
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let (entries, _) = count(["zeta", "alpha", "mid", "alpha", "zeta", "mid"]);
        assert_eq!(words(&entries), ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn higher_frequency_ranks_first_regardless_of_order() {
        let (entries, _) = count(["rare", "common", "common"]);
        assert_eq!(words(&entries), ["common", "rare"]);
    }

    #[test]
    fn empty_input() {
        let (entries, total) = count(Vec::<String>::new());
        assert!(entries.is_empty());
        assert_eq!(total, 0);
    }

    #[test]
    fn percentages_rounded() {
        let (entries, _) = count(["a1", "b1", "c1"]);
        for e in &entries {
            assert_eq!(e.percentage, 33.33);
        }
    }

    #[test]
    fn incremental_counter_tracks_totals() {
        let mut counter = FrequencyCounter::new();
        counter.add("שלום");
        counter.add("שלום");
        counter.add("עולם");
        assert_eq!(counter.total(), 3);
        assert_eq!(counter.distinct(), 2);

        let (entries, total) = counter.finish();
        assert_eq!(total, 3);
        assert_eq!(entries.iter().map(|e| e.frequency).sum::<u64>(), 3);
    }
}
