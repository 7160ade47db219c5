//! The analysis pipeline: clean, tokenize, count, consolidate.
//!
//! [`WordFrequencyAnalyzer`] is immutable once built. Each call owns its
//! working state, and no call performs I/O.

mod api;
mod types;

pub use types::WordFrequencyAnalyzer;
