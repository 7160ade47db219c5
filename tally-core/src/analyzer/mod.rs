//! Text analysis pipeline.
//!
//! This module provides the word-extraction components:
//! - **TextCleaner**: Strips punctuation, collapses whitespace, lower-cases
//! - **Tokenizer**: Splits cleaned text into words, including joined Hebrew compounds
//! - **VariantMap**: Folds known spelling variants onto canonical words

pub mod cleaner;
pub mod tokenizer;
pub mod variants;

pub use cleaner::TextCleaner;
pub use tokenizer::{split_words, Tokenizer, HEBREW_SUFFIXES};
pub use variants::{VariantMap, BUILTIN_VARIANTS};
