//! Ciphertext-only analysis subsystem.
//!
//! Provides the building blocks the [`Cryptanalyst`](crate::Cryptanalyst)
//! composes: coset partitioning, IC-based key-length estimation, Kasiski
//! distance analysis and chi-squared key letter recovery.

pub mod cosets;
pub mod kasiski;
pub mod key_length;
pub mod key_recovery;

pub use cosets::partition;
pub use kasiski::{
    kasiski_examination, kasiski_examination_range, kasiski_factor_counts, DistanceHistogram,
};
pub use key_length::{find_key_length, rank_key_lengths, KeyLengthScore};
pub use key_recovery::{best_shift, recover_key, recover_key_letter, shift_scores, ShiftScore};
