//! Analyzer state.

use tally_types::AnalyzerConfig;

use crate::analyzer::{Tokenizer, VariantMap};
use crate::consolidate::Consolidator;

/// Word-frequency analyzer.
///
/// Holds the variant dictionary and configuration. Every operation takes
/// `&self` and allocates its working collections per call, so one instance
/// can be shared between threads.
#[derive(Debug, Clone)]
pub struct WordFrequencyAnalyzer {
    pub(crate) variants: VariantMap,
    pub(crate) config: AnalyzerConfig,
    pub(crate) consolidator: Consolidator,
}

impl Default for WordFrequencyAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl WordFrequencyAnalyzer {
    /// Creates an analyzer with the built-in dictionary and default settings.
    pub fn new() -> Self {
        Self::with_config(AnalyzerConfig::default())
    }

    /// Creates an analyzer with the built-in dictionary and custom settings.
    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self::with_variants(VariantMap::builtin(), config)
    }

    /// Creates an analyzer with a custom dictionary.
    pub fn with_variants(variants: VariantMap, config: AnalyzerConfig) -> Self {
        Self {
            variants,
            consolidator: Consolidator::new(config.similarity_threshold),
            config,
        }
    }

    /// The variant dictionary.
    #[inline]
    pub fn variants(&self) -> &VariantMap {
        &self.variants
    }

    /// The active configuration.
    #[inline]
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// A tokenizer using this analyzer's dictionary and length filter.
    #[inline]
    pub fn tokenizer(&self) -> Tokenizer<'_> {
        Tokenizer::new(&self.variants).with_min_chars(self.config.min_word_chars)
    }
}
