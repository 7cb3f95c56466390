//! Per-coset key letter recovery by chi-squared frequency matching.
//!
//! Each coset of a correctly sized partition is a Caesar shift of plaintext.
//! All 26 shifts are tried; the one whose decryption best fits the reference
//! language profile (lowest chi-squared) gives the key letter.

use serde::Serialize;

use super::cosets::coset_counts;
use crate::alphabet::{self, ALPHABET_LEN};
use crate::cipher::Key;
use crate::error::VigenereError;
use crate::language::FrequencyTable;
use crate::stats::{chi_squared, letter_counts, LetterCounts};

/// Winning shift for one coset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShiftScore {
    /// Shift amount, `0..26`.
    pub shift: u8,
    /// Key letter for the shift (`'A' + shift`).
    pub letter: char,
    /// Chi-squared of the coset decrypted with this shift.
    pub chi_squared: f64,
}

/// Chi-squared of `coset` decrypted under every shift, indexed by shift.
pub fn shift_scores(coset: &str, table: &FrequencyTable) -> [f64; ALPHABET_LEN] {
    scores_from_counts(&letter_counts(coset), table)
}

/// Best shift for `coset` against `table`.
///
/// Ties keep the smallest shift, so an empty coset resolves to `A`.
pub fn best_shift(coset: &str, table: &FrequencyTable) -> ShiftScore {
    best_of(&scores_from_counts(&letter_counts(coset), table))
}

/// Key letter that best explains `coset` as shifted `table`-language text.
///
/// # Examples
///
/// ```
/// use vigenere::{encrypt, Language};
/// use vigenere::analysis::recover_key_letter;
///
/// let coset = encrypt("ESTAMENSAGEMESTAEMPORTUGUESEDEVESERDECIFRADA", "K").unwrap();
/// let letter = recover_key_letter(&coset, &Language::Portuguese.frequencies());
/// assert_eq!(letter, 'K');
/// ```
pub fn recover_key_letter(coset: &str, table: &FrequencyTable) -> char {
    best_shift(coset, table).letter
}

/// Recovers a full key of `key_length` letters from a normalized stream.
///
/// # Errors
/// Returns [`VigenereError::InvalidConfig`] if `key_length` is zero.
pub fn recover_key(
    stream: &str,
    key_length: usize,
    table: &FrequencyTable,
) -> Result<(Key, Vec<ShiftScore>), VigenereError> {
    if key_length == 0 {
        return Err(VigenereError::InvalidConfig(
            "key_length must be at least 1".to_string(),
        ));
    }
    let scores = coset_scores(stream, key_length, table);
    let shifts: Vec<u8> = scores.iter().map(|s| s.shift).collect();
    Ok((Key::from_nonempty_shifts(&shifts), scores))
}

/// Best shift of each coset of `stream`, in coset order.
pub(crate) fn coset_scores(
    stream: &str,
    key_length: usize,
    table: &FrequencyTable,
) -> Vec<ShiftScore> {
    coset_counts(stream, key_length)
        .iter()
        .map(|counts| best_of(&scores_from_counts(counts, table)))
        .collect()
}

/// Decrypting by `shift` moves the count of cipher letter `p + shift` onto
/// plaintext letter `p`.
fn scores_from_counts(counts: &LetterCounts, table: &FrequencyTable) -> [f64; ALPHABET_LEN] {
    let length: usize = counts.iter().sum();
    let mut scores = [0.0; ALPHABET_LEN];
    for (shift, score) in scores.iter_mut().enumerate() {
        let mut decrypted = [0usize; ALPHABET_LEN];
        for (plain, slot) in decrypted.iter_mut().enumerate() {
            *slot = counts[(plain + shift) % ALPHABET_LEN];
        }
        *score = chi_squared(&decrypted, table, length);
    }
    scores
}

fn best_of(scores: &[f64; ALPHABET_LEN]) -> ShiftScore {
    let mut best_shift = 0usize;
    for (shift, &score) in scores.iter().enumerate().skip(1) {
        if score < scores[best_shift] {
            best_shift = shift;
        }
    }
    ShiftScore {
        shift: best_shift as u8,
        letter: alphabet::letter_at(best_shift) as char,
        chi_squared: scores[best_shift],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::encrypt;
    use crate::language::Language;

    const ENGLISH_TEXT: &str = "Whether I shall turn out to be the hero of my own life, or \
        whether that station will be held by anybody else, these pages must show. To begin \
        my life with the beginning of my life, I record that I was born on a Friday, at \
        twelve o'clock at night.";

    #[test]
    fn test_recovers_every_caesar_shift() {
        let en = Language::English.frequencies();
        for shift in 0..26u8 {
            let key = ((b'A' + shift) as char).to_string();
            let coset = encrypt(ENGLISH_TEXT, &key).unwrap();
            assert_eq!(recover_key_letter(&coset, &en), key.chars().next().unwrap());
        }
    }

    #[test]
    fn test_empty_coset_resolves_to_a() {
        let pt = Language::Portuguese.frequencies();
        let best = best_shift("", &pt);
        assert_eq!(best.shift, 0);
        assert_eq!(best.letter, 'A');
        assert_eq!(best.chi_squared, 0.0);
    }

    #[test]
    fn test_best_shift_is_minimum_of_scores() {
        let en = Language::English.frequencies();
        let coset = encrypt(ENGLISH_TEXT, "Q").unwrap();
        let scores = shift_scores(&coset, &en);
        let best = best_shift(&coset, &en);
        assert!(scores.iter().all(|&s| s >= best.chi_squared));
        assert_eq!(scores[best.shift as usize], best.chi_squared);
    }

    #[test]
    fn test_ties_keep_smallest_shift() {
        let mut scores = [5.0; ALPHABET_LEN];
        scores[3] = 1.0;
        scores[7] = 1.0;
        assert_eq!(best_of(&scores).shift, 3);
        assert_eq!(best_of(&[2.0; ALPHABET_LEN]).shift, 0);
    }

    #[test]
    fn test_recover_key() {
        let en = Language::English.frequencies();
        let stream = encrypt(ENGLISH_TEXT, "CAB").unwrap();
        let (key, scores) = recover_key(&stream, 3, &en).unwrap();
        assert_eq!(key.as_str(), "CAB");
        assert_eq!(scores.len(), 3);
    }

    #[test]
    fn test_recover_key_zero_length() {
        let en = Language::English.frequencies();
        assert_eq!(
            recover_key("ABC", 0, &en).map(|(k, _)| k),
            Err(VigenereError::InvalidConfig(
                "key_length must be at least 1".to_string()
            ))
        );
    }
}
