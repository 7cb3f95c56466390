//! Kasiski examination: distances between repeated ciphertext fragments.
//!
//! When the same plaintext fragment meets the same key phase it encrypts to
//! the same ciphertext fragment, which can only happen at distances that are
//! multiples of the key length. Tabulating those distances (and their
//! factors) gives a key-length signal independent of the IC estimate.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::alphabet;

/// Default shortest repeated fragment considered.
pub const DEFAULT_MIN_PATTERN: usize = 3;

/// Fragment lengths probed by default stay below this cap (and below half
/// the ciphertext length).
pub const DEFAULT_PATTERN_CAP: usize = 10;

/// Map from distance between repeated fragments to number of occurrences.
pub type DistanceHistogram = BTreeMap<usize, usize>;

/// Kasiski examination with the default pattern cap.
///
/// Probes fragment lengths `min_length .. min(n / 2, 10)` where `n` is the
/// normalized ciphertext length. See [`kasiski_examination_range`].
///
/// # Examples
///
/// ```
/// use vigenere::kasiski_examination;
///
/// let histogram = kasiski_examination("ABCXYZABC", 3);
/// assert_eq!(histogram.get(&6), Some(&1));
/// ```
pub fn kasiski_examination(ciphertext: &str, min_length: usize) -> DistanceHistogram {
    kasiski_examination_range(ciphertext, min_length, DEFAULT_PATTERN_CAP)
}

/// Kasiski examination over fragment lengths `min_length .. min(n / 2, cap)`.
///
/// For every fragment length in range, every pair of equal fragments whose
/// occurrences do not overlap (`later_start >= start + length`) contributes
/// one count at distance `later_start - start`. A fragment repeated at
/// several lengths contributes once per length.
///
/// Cost grows with the number of repeated fragments; ciphertexts that are
/// highly repetitive (e.g. a long run of one letter) produce quadratically
/// many pairs.
pub fn kasiski_examination_range(
    ciphertext: &str,
    min_length: usize,
    cap: usize,
) -> DistanceHistogram {
    let stream = alphabet::normalize(ciphertext);
    let bytes = stream.as_bytes();
    let n = bytes.len();
    let upper = cap.min(n / 2);
    let lower = min_length.max(1);
    debug!(n, lower, upper, "kasiski probe range");

    let mut histogram = DistanceHistogram::new();
    for length in lower..upper {
        for positions in repeated_fragments(bytes, length).values() {
            for (a, &start) in positions.iter().enumerate() {
                for &later in &positions[a + 1..] {
                    let distance = later - start;
                    if distance >= length {
                        *histogram.entry(distance).or_insert(0) += 1;
                    }
                }
            }
        }
    }
    histogram
}

/// Start positions of every fragment of `length` seen more than once.
fn repeated_fragments(bytes: &[u8], length: usize) -> HashMap<&[u8], Vec<usize>> {
    let mut map: HashMap<&[u8], Vec<usize>> = HashMap::new();
    for (start, window) in bytes.windows(length).enumerate() {
        map.entry(window).or_default().push(start);
    }
    map.retain(|_, positions| positions.len() > 1);
    map
}

/// Counts, for each factor in `2..=max_factor`, the recorded distances it divides.
///
/// Each distance contributes its histogram count. The true key length and
/// its divisors rise to the top.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use vigenere::analysis::kasiski_factor_counts;
///
/// let histogram = BTreeMap::from([(12, 2), (18, 1)]);
/// let factors = kasiski_factor_counts(&histogram, 6);
/// assert_eq!(factors.get(&6), Some(&3));
/// assert_eq!(factors.get(&4), Some(&2));
/// assert_eq!(factors.get(&5), None);
/// ```
pub fn kasiski_factor_counts(
    histogram: &DistanceHistogram,
    max_factor: usize,
) -> BTreeMap<usize, usize> {
    let mut factors = BTreeMap::new();
    for (&distance, &count) in histogram {
        for factor in 2..=max_factor {
            if distance.is_multiple_of(factor) {
                *factors.entry(factor).or_insert(0) += count;
            }
        }
    }
    factors
}
