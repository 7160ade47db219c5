//! Text cleaning: the first stage of the tokenizer.
//!
//! Keeps word characters (Unicode alphanumerics and `_`) and everything in
//! the Hebrew block (U+0590..=U+05FF, which covers niqqud and cantillation
//! marks as well as letters). Every other character, whitespace included,
//! becomes a word boundary. Boundaries collapse to a single ASCII space, the
//! result is trimmed, and then lower-cased as a whole.
//!
//! ```
//! use tally_core::analyzer::TextCleaner;
//!
//! let cleaner = TextCleaner::new();
//! assert_eq!(cleaner.clean("  Cash-Back!!  שלום, World "), "cash back שלום world");
//! ```
//!
//! Punctuation inside a word splits it (`"don't"` becomes `"don t"`); the
//! single-character halves are dropped later by the length filter.

const HEBREW_BLOCK: core::ops::RangeInclusive<char> = '\u{0590}'..='\u{05FF}';

const ASCII_WORD: [bool; 128] = {
    let mut table = [false; 128];
    let mut b = 0;
    while b < 128 {
        let byte = b as u8;
        table[b] = byte.is_ascii_alphanumeric() || byte == b'_';
        b += 1;
    }
    table
};

/// Returns `true` for characters that survive cleaning.
#[inline(always)]
pub fn is_word_char(ch: char) -> bool {
    if ch.is_ascii() {
        ASCII_WORD[ch as usize]
    } else {
        ch.is_alphanumeric() || HEBREW_BLOCK.contains(&ch)
    }
}

/// Stateless text cleaner.
///
/// Output contract, relied on by [`Tokenizer`](super::Tokenizer):
/// - No leading or trailing space
/// - Words separated by exactly one ASCII space
/// - No `;`, `,` or `.`
#[derive(Debug, Clone, Copy, Default)]
pub struct TextCleaner;

impl TextCleaner {
    /// Creates a new cleaner.
    pub const fn new() -> Self {
        Self
    }

    /// Cleans `input` into `out`, reusing its capacity.
    ///
    /// Clears the buffer before writing.
    pub fn clean_into(&self, input: &str, out: &mut String) {
        out.clear();
        out.reserve(input.len());

        let mut pending_space = false;

        for ch in input.chars() {
            if !is_word_char(ch) {
                pending_space = !out.is_empty();
                continue;
            }

            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(ch);
        }

        if out.is_ascii() {
            out.make_ascii_lowercase();
        } else {
            // whole-string lowering keeps context rules such as final sigma
            let lowered = out.to_lowercase();
            out.clear();
            out.push_str(&lowered);
        }
    }

    /// Cleans text and returns a new String.
    #[inline]
    pub fn clean(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.clean_into(input, &mut out);
        out
    }
}
