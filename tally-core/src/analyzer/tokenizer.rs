//! Script-Aware Tokenizer
//!
//! Turns raw text into canonical word tokens in three steps:
//!
//! 1. **Clean** with [`TextCleaner`]: strip punctuation, collapse whitespace, lower-case.
//! 2. **Split** on `;`, `,`, `.` and spaces, then break joined Hebrew words
//!    apart at common suffix morphemes.
//! 3. **Filter + normalize**: drop words shorter than the minimum length and
//!    fold the rest through the [`VariantMap`].
//!
//! ## Compound Splitting
//!
//! Hebrew text pasted from chats and forms often loses spaces between words.
//! While scanning a part character by character, the tokenizer checks whether
//! the text accumulated so far ends in one of [`HEBREW_SUFFIXES`] and is
//! longer than the suffix itself. If so, it drops as many characters from the
//! front of the whole part as the accumulated text holds; when more than one
//! character is left, the accumulated text is cut off as a word:
//!
//! ```text
//! "הטבותנקודות"       ->  "הטבות" | "נקודות"
//! "הטבות"             ->  "הטבות"            (nothing left after the suffix)
//! "ספריםמכוניותבתים"  ->  "ספרים" | "מכוניות" | "בתי" | "ם"
//! ```
//!
//! The remainder is measured from the start of the part, not from the
//! current position, so later words in a long part can be cut while the real
//! tail is a single character. Single-character pieces are then dropped by
//! the length filter.
//!
//! This is a heuristic, not a morphological analyzer. Ambiguous compounds are
//! over- or under-split and that is accepted.
//!
//! ## Usage
//!
//! ```
//! use tally_core::analyzer::{Tokenizer, VariantMap};
//!
//! let variants = VariantMap::builtin();
//! let tokenizer = Tokenizer::new(&variants);
//!
//! let tokens = tokenizer.tokenize_to_vec("Cashback, a CARD.");
//! assert_eq!(tokens, ["קאשבק", "card"]);
//! ```

use memchr::{memchr3_iter, memchr_iter};

use super::cleaner::TextCleaner;
use super::variants::VariantMap;

/// Suffix morphemes that mark a likely word end inside a joined compound.
pub const HEBREW_SUFFIXES: [&str; 9] = ["ות", "ים", "את", "תי", "נו", "כם", "הם", "תם", "יה"];

/// Default minimum token length, in characters.
pub const DEFAULT_MIN_WORD_CHARS: usize = 2;

/// Tokenizer bound to a variant dictionary.
///
/// Cheap to construct; holds only a reference to the dictionary. Reusable
/// across any number of texts.
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer<'v> {
    variants: &'v VariantMap,
    cleaner: TextCleaner,
    min_chars: usize,
}

impl<'v> Tokenizer<'v> {
    /// Creates a tokenizer that folds words through `variants`.
    #[inline]
    pub const fn new(variants: &'v VariantMap) -> Self {
        Self {
            variants,
            cleaner: TextCleaner::new(),
            min_chars: DEFAULT_MIN_WORD_CHARS,
        }
    }

    /// Sets the minimum token length in characters.
    #[inline]
    #[must_use]
    pub const fn with_min_chars(mut self, min_chars: usize) -> Self {
        self.min_chars = min_chars;
        self
    }

    /// Tokenizes raw text and emits each canonical token in order.
    pub fn tokenize<F>(&self, text: &str, emit: F)
    where
        F: FnMut(&str),
    {
        let mut buf = String::new();
        self.tokenize_with_buffer(text, &mut buf, emit);
    }

    /// Like [`tokenize`](Self::tokenize), cleaning into a caller-owned buffer.
    pub fn tokenize_with_buffer<F>(&self, text: &str, buf: &mut String, mut emit: F)
    where
        F: FnMut(&str),
    {
        self.cleaner.clean_into(text, buf);
        split_words(buf.as_str(), |word| {
            if word.chars().nth(self.min_chars.saturating_sub(1)).is_none() {
                return;
            }
            emit(self.variants.canonical(word));
        });
    }

    /// Tokenizes raw text into owned tokens.
    pub fn tokenize_to_vec(&self, text: &str) -> Vec<String> {
        let mut out = Vec::new();
        self.tokenize(text, |token| out.push(token.to_owned()));
        out
    }
}

/// Splits cleaned text into candidate words. No filtering, no normalization.
///
/// Expects [`TextCleaner`] output: parts separated by single ASCII spaces.
/// Words are emitted as slices of `cleaned`.
pub fn split_words<'a, F>(cleaned: &'a str, mut emit: F)
where
    F: FnMut(&'a str),
{
    debug_assert!(
        !cleaned.starts_with(' ') && !cleaned.ends_with(' '),
        "split_words: untrimmed input, cleaner contract violated"
    );
    debug_assert!(
        !cleaned.contains("  "),
        "split_words: consecutive spaces, cleaner contract violated"
    );

    let bytes = cleaned.as_bytes();
    let mut start = 0usize;

    for i in memchr_iter(b' ', bytes) {
        split_part(&cleaned[start..i], &mut emit);
        start = i + 1;
    }
    split_part(&cleaned[start..], &mut emit);
}

/// Splits a space-free chunk on `;`, `,` and `.`, then splits each piece on
/// Hebrew suffixes.
#[inline]
fn split_part<'a, F>(chunk: &'a str, emit: &mut F)
where
    F: FnMut(&'a str),
{
    let mut start = 0usize;
    for i in memchr3_iter(b';', b',', b'.', chunk.as_bytes()) {
        split_compound(&chunk[start..i], emit);
        start = i + 1;
    }
    split_compound(&chunk[start..], emit);
}

/// Cuts a single part at suffix boundaries.
fn split_compound<'a, F>(part: &'a str, emit: &mut F)
where
    F: FnMut(&'a str),
{
    if part.is_empty() {
        return;
    }

    let part_chars = part.chars().count();
    let mut start = 0usize;
    let mut current_chars = 0usize;

    for (i, ch) in part.char_indices() {
        let end = i + ch.len_utf8();
        current_chars += 1;
        let current = &part[start..end];
        // the remainder is counted from the start of the part, skipping as
        // many characters as the accumulated word holds
        if ends_in_suffix(current) && part_chars.saturating_sub(current_chars) > 1 {
            emit(current);
            start = end;
            current_chars = 0;
        }
    }

    if start < part.len() {
        emit(&part[start..]);
    }
}

#[inline(always)]
fn ends_in_suffix(word: &str) -> bool {
    HEBREW_SUFFIXES
        .iter()
        .any(|suffix| word.len() > suffix.len() && word.ends_with(suffix))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(input: &str) -> Vec<&str> {
        let mut out = Vec::new();
        split_words(input, |w| out.push(w));
        out
    }

    fn tokens(input: &str) -> Vec<String> {
        let variants = VariantMap::builtin();
        Tokenizer::new(&variants).tokenize_to_vec(input)
    }

    #[test]
    fn latin_words_split_on_spaces() {
        assert_eq!(split("hello world foo"), ["hello", "world", "foo"]);
    }

    #[test]
    fn separators_split_parts() {
        assert_eq!(split("one;two,three.four"), ["one", "two", "three", "four"]);
        assert_eq!(split("a,,b"), ["a", "b"]);
    }

    #[test]
    fn empty_emits_nothing() {
        assert!(split("").is_empty());
        assert!(tokens("").is_empty());
        assert!(tokens("   \n\t ").is_empty());
    }

    #[test]
    fn joined_hebrew_words_are_split() {
        assert_eq!(split("הטבותנקודות"), ["הטבות", "נקודות"]);
    }

    #[test]
    fn suffix_at_end_of_part_does_not_split() {
        assert_eq!(split("הטבות"), ["הטבות"]);
        assert_eq!(split("נקודות"), ["נקודות"]);
    }

    #[test]
    fn single_trailing_char_does_not_split() {
        // one character after the suffix is not enough
        assert_eq!(split("הטבותא"), ["הטבותא"]);
        assert_eq!(split("הטבותאב"), ["הטבות", "אב"]);
    }

    #[test]
    fn bare_suffix_is_not_a_word() {
        // "ים" alone is not longer than the suffix
        assert_eq!(split("יםאבג"), ["יםאבג"]);
    }

    #[test]
    fn splits_repeatedly() {
        assert_eq!(split("ספריםמכוניותבתים"), ["ספרים", "מכוניות", "בתי", "ם"]);
    }

    #[test]
    fn remainder_is_measured_from_part_start() {
        // after the first cut only "י" follows "ליגפתתם", but the part still
        // has more than one character past the accumulated length
        assert_eq!(
            split("תנתרביייםליגפתתםי"),
            ["תנתרבייים", "ליגפתתם", "י"]
        );
    }

    #[test]
    fn one_letter_pieces_of_compounds_are_filtered() {
        assert_eq!(tokens("ספריםמכוניותבתים"), ["ספרים", "מכוניות", "בתי"]);
    }

    #[test]
    fn latin_text_never_compound_split() {
        assert_eq!(split("cashbackcards"), ["cashbackcards"]);
    }

    #[test]
    fn words_are_slices_of_input() {
        let input = String::from("hello הטבותנקודות");
        let base = input.as_ptr() as usize;
        let end = base + input.len();

        split_words(&input, |w| {
            let ptr = w.as_ptr() as usize;
            assert!(ptr >= base && ptr < end);
        });
    }

    #[test]
    fn single_characters_filtered() {
        assert_eq!(tokens("a b I am"), ["am"]);
    }

    #[test]
    fn min_chars_is_configurable() {
        let variants = VariantMap::empty();
        let t = Tokenizer::new(&variants).with_min_chars(4);
        assert_eq!(t.tokenize_to_vec("the card is cool"), ["card", "cool"]);

        let t = Tokenizer::new(&variants).with_min_chars(1);
        assert_eq!(t.tokenize_to_vec("a bc"), ["a", "bc"]);
    }

    #[test]
    fn variants_are_folded() {
        assert_eq!(tokens("CashBack קשבק הטבה"), ["קאשבק", "קאשבק", "הטבות"]);
    }

    #[test]
    fn multi_word_variants_do_not_match_across_spaces() {
        assert_eq!(tokens("cash back"), ["cash", "back"]);
    }

    #[test]
    fn punctuation_is_stripped() {
        assert_eq!(tokens("Hello, World! (cards)"), ["hello", "world", "cards"]);
    }

    #[test]
    fn mixed_script_sentence() {
        assert_eq!(
            tokens("קיבלתי cashback על הכרטיס."),
            ["קיבלתי", "קאשבק", "על", "כרטיס"]
        );
    }

    #[test]
    fn buffer_is_reusable() {
        let variants = VariantMap::builtin();
        let t = Tokenizer::new(&variants);
        let mut buf = String::with_capacity(128);

        let mut n = 0usize;
        t.tokenize_with_buffer("hello world", &mut buf, |_| n += 1);
        assert_eq!(n, 2);

        n = 0;
        t.tokenize_with_buffer("one two three", &mut buf, |_| n += 1);
        assert_eq!(n, 3);
    }

    #[test]
    fn emit_order_is_left_to_right() {
        let words = ["one", "two", "three", "four"];
        assert_eq!(tokens(&words.join(" ")), words);
    }
}
