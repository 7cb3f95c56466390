//! Key-length estimation by mean coset Index of Coincidence.
//!
//! At the true key length every coset is monoalphabetic and keeps the
//! plaintext's letter repetition, so its IC sits near the language value.
//! Wrong lengths mix several shift alphabets and pull the IC toward the
//! uniform `1/26`.

use serde::Serialize;
use tracing::trace;

use super::cosets::coset_counts;
use crate::alphabet;
use crate::stats::counts_ic;

/// Default largest key length tried.
pub const DEFAULT_MAX_KEY_LENGTH: usize = 20;

/// Mean coset IC for one candidate key length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KeyLengthScore {
    /// Candidate key length.
    pub length: usize,
    /// Average Index of Coincidence over the `length` cosets.
    pub mean_ic: f64,
}

/// Scores every key length from 1 to `max_length` (inclusive).
///
/// The result is ordered by ascending length. `max_length` values below 1
/// are raised to 1.
pub fn rank_key_lengths(ciphertext: &str, max_length: usize) -> Vec<KeyLengthScore> {
    let stream = alphabet::normalize(ciphertext);
    (1..=max_length.max(1))
        .map(|length| {
            let counts = coset_counts(&stream, length);
            let mean_ic = counts.iter().map(counts_ic).sum::<f64>() / length as f64;
            trace!(length, mean_ic, "key length candidate");
            KeyLengthScore { length, mean_ic }
        })
        .collect()
}

/// Most likely key length in `1..=max_length`.
///
/// Picks the candidate with the highest mean coset IC; on ties the
/// shortest length wins. Multiples of the true length score about as well
/// as the length itself, so a result of `2k` for a key of length `k` is
/// possible and still decrypts correctly.
///
/// # Examples
///
/// ```
/// use vigenere::find_key_length;
///
/// assert_eq!(find_key_length("", 20), 1);
/// ```
pub fn find_key_length(ciphertext: &str, max_length: usize) -> usize {
    best_length(&rank_key_lengths(ciphertext, max_length))
}

/// First maximum of a score table; `1` for an empty table.
pub(crate) fn best_length(scores: &[KeyLengthScore]) -> usize {
    let mut best: Option<KeyLengthScore> = None;
    for score in scores {
        match best {
            Some(current) if score.mean_ic <= current.mean_ic => {}
            _ => best = Some(*score),
        }
    }
    best.map_or(1, |s| s.length)
}
