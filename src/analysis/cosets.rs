//! Coset partition of a letter stream by key position.
//!
//! For a candidate key length `L`, coset `r` holds the letters at positions
//! `i` with `i mod L == r`. Under a period-`L` key every coset is a plain
//! Caesar shift of the matching plaintext letters.

use crate::alphabet::{self, ALPHABET_LEN};
use crate::stats::LetterCounts;

/// Splits `stream` into `key_length` interleaved cosets.
///
/// Every letter lands in exactly one coset; cosets past the end of a short
/// stream are empty. A `key_length` of zero yields no cosets.
///
/// # Examples
///
/// ```
/// use vigenere::analysis::partition;
///
/// assert_eq!(partition("ABCDEFG", 3), vec!["ADG", "BE", "CF"]);
/// ```
pub fn partition(stream: &str, key_length: usize) -> Vec<String> {
    let mut cosets = vec![String::new(); key_length];
    if key_length == 0 {
        return cosets;
    }
    for (i, c) in stream.chars().enumerate() {
        cosets[i % key_length].push(c);
    }
    cosets
}

/// Letter tallies of each coset without materializing the cosets.
///
/// `stream` must already be normalized.
pub(crate) fn coset_counts(stream: &str, key_length: usize) -> Vec<LetterCounts> {
    let mut counts = vec![[0usize; ALPHABET_LEN]; key_length];
    if key_length == 0 {
        return counts;
    }
    for (i, letter) in stream.bytes().enumerate() {
        counts[i % key_length][alphabet::index_of(letter)] += 1;
    }
    counts
}
