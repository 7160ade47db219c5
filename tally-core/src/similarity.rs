//! Ratcliff/Obershelp string similarity.
//!
//! `ratio(a, b) = 2 * M / (len(a) + len(b))`, where `M` is the number of
//! characters covered by the matching blocks found by recursively taking the
//! longest common substring and repeating on the pieces to its left and
//! right. Lengths are in Unicode scalar values, so Hebrew and Latin words
//! compare on equal footing.
//!
//! The block search follows `difflib.SequenceMatcher` exactly,
//! including which of several equally long matches is picked (lowest index
//! in `a`, then lowest in `b`) and the auto-junk rule for long second
//! sequences. Tie-breaking changes which blocks are found and therefore `M`,
//! so it matters for reproducing merge decisions.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Character buffer sized for typical words; longer input spills to the heap.
pub type CharBuf = SmallVec<[char; 24]>;

/// Second sequences at least this long get the auto-junk treatment.
const AUTOJUNK_MIN_LEN: usize = 200;

/// Decodes a word into characters.
#[inline]
pub fn chars_of(word: &str) -> CharBuf {
    word.chars().collect()
}

/// Similarity ratio in `0.0..=1.0`. Two empty strings are identical (`1.0`).
pub fn ratio(a: &str, b: &str) -> f64 {
    ratio_chars(&chars_of(a), &chars_of(b))
}

/// [`ratio`] over pre-decoded characters.
pub fn ratio_chars(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * matching_characters(a, b) as f64 / total as f64
}

/// Number of characters in all matching blocks between `a` and `b`.
pub fn matching_characters(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let b2j = index_positions(b);
    let mut matched = 0usize;
    let mut queue: SmallVec<[(usize, usize, usize, usize); 8]> = SmallVec::new();
    queue.push((0, a.len(), 0, b.len()));

    while let Some((alo, ahi, blo, bhi)) = queue.pop() {
        let (i, j, k) = find_longest_match(a, b, &b2j, alo, ahi, blo, bhi);
        if k == 0 {
            continue;
        }
        matched += k;
        if alo < i && blo < j {
            queue.push((alo, i, blo, j));
        }
        if i + k < ahi && j + k < bhi {
            queue.push((i + k, ahi, j + k, bhi));
        }
    }

    matched
}

/// Positions of each character in `b`, ascending. Characters that are too
/// frequent in a long `b` are left out so they never seed a match.
fn index_positions(b: &[char]) -> FxHashMap<char, SmallVec<[usize; 4]>> {
    let mut b2j: FxHashMap<char, SmallVec<[usize; 4]>> = FxHashMap::default();
    for (j, &ch) in b.iter().enumerate() {
        b2j.entry(ch).or_default().push(j);
    }

    if b.len() >= AUTOJUNK_MIN_LEN {
        let popular = b.len() / 100 + 1;
        b2j.retain(|_, positions| positions.len() <= popular);
    }

    b2j
}

/// Longest block `a[i..i+k] == b[j..j+k]` inside the given window.
#[allow(clippy::too_many_arguments)]
fn find_longest_match(
    a: &[char],
    b: &[char],
    b2j: &FxHashMap<char, SmallVec<[usize; 4]>>,
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let (mut best_i, mut best_j, mut best_k) = (alo, blo, 0usize);

    // j2len[j] = length of the match ending at a[i-1], b[j]
    let mut j2len: FxHashMap<usize, usize> = FxHashMap::default();
    let mut next: FxHashMap<usize, usize> = FxHashMap::default();

    for i in alo..ahi {
        next.clear();
        if let Some(positions) = b2j.get(&a[i]) {
            for &j in positions {
                if j < blo {
                    continue;
                }
                if j >= bhi {
                    break;
                }
                let k = j
                    .checked_sub(1)
                    .and_then(|prev| j2len.get(&prev))
                    .copied()
                    .unwrap_or(0)
                    + 1;
                next.insert(j, k);
                if k > best_k {
                    best_i = i + 1 - k;
                    best_j = j + 1 - k;
                    best_k = k;
                }
            }
        }
        std::mem::swap(&mut j2len, &mut next);
    }

    // Only characters dropped by auto-junk can extend the block.
    while best_i > alo && best_j > blo && a[best_i - 1] == b[best_j - 1] {
        best_i -= 1;
        best_j -= 1;
        best_k += 1;
    }
    while best_i + best_k < ahi && best_j + best_k < bhi && a[best_i + best_k] == b[best_j + best_k]
    {
        best_k += 1;
    }

    (best_i, best_j, best_k)
}
