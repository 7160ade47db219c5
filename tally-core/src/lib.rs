//! Word-frequency analysis for mixed Hebrew and Latin text.
//!
//! Raw text goes through cleaning, script-aware tokenization, variant
//! folding, counting, and a greedy near-duplicate merge, and comes out as an
//! [`AnalysisReport`]:
//!
//! ```
//! use tally_core::WordFrequencyAnalyzer;
//!
//! let analyzer = WordFrequencyAnalyzer::new();
//! let report = analyzer.analyze("Card, cards and CASHBACK. Card!");
//!
//! assert_eq!(report.total_words(), 5);
//! assert_eq!(report.entries()[0].word, "card");
//! assert_eq!(report.entries()[0].frequency, 3);
//! ```
//!
//! Persistence lives behind [`sink::ResultSink`]; the analyzer never touches
//! the filesystem.

pub mod analyzer;
pub mod config;
pub mod consolidate;
pub mod frequency;
pub mod logging;
pub mod pipeline;
pub mod similarity;
pub mod sink;

pub use analyzer::{Tokenizer, VariantMap};
pub use consolidate::Consolidator;
pub use pipeline::WordFrequencyAnalyzer;
pub use tally_types::{
    AnalysisError, AnalysisReport, AnalyzerConfig, ConfigError, FrequencyEntry, VariantError,
};
