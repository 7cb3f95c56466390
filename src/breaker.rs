//! Cryptanalysis orchestrator: ciphertext in, key and plaintext out.
//!
//! Runs a single best-effort pass: estimate the key length from coset IC,
//! recover one key letter per coset by chi-squared, then decrypt. There is
//! no retry; a wrong length estimate simply yields a wrong answer, which
//! [`CipherBreak::verify`] and a plaintext sanity check can catch.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::alphabet;
use crate::analysis::kasiski::{DEFAULT_MIN_PATTERN, DEFAULT_PATTERN_CAP};
use crate::analysis::key_length::{best_length, rank_key_lengths, DEFAULT_MAX_KEY_LENGTH};
use crate::analysis::key_recovery::coset_scores;
use crate::analysis::{kasiski_examination_range, DistanceHistogram};
use crate::cipher::{decrypt_with, encrypt_with, Key};
use crate::error::VigenereError;
use crate::language::{FrequencyTable, Language};

/// Tunable limits for the analysis passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Largest key length the IC estimator tries.
    pub max_key_length: usize,
    /// Shortest repeated fragment the Kasiski examination records.
    pub kasiski_min_length: usize,
    /// Kasiski fragment lengths stay below this (and below half the text).
    pub kasiski_length_cap: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            max_key_length: DEFAULT_MAX_KEY_LENGTH,
            kasiski_min_length: DEFAULT_MIN_PATTERN,
            kasiski_length_cap: DEFAULT_PATTERN_CAP,
        }
    }
}

impl AnalysisConfig {
    /// Sets the largest key length tried.
    pub fn with_max_key_length(mut self, max_key_length: usize) -> Self {
        self.max_key_length = max_key_length;
        self
    }

    /// Sets the Kasiski fragment length range `min_length .. cap`.
    pub fn with_kasiski_lengths(mut self, min_length: usize, cap: usize) -> Self {
        self.kasiski_min_length = min_length;
        self.kasiski_length_cap = cap;
        self
    }

    /// Checks that every limit is usable.
    ///
    /// # Errors
    /// Returns [`VigenereError::InvalidConfig`] if `max_key_length` or
    /// `kasiski_min_length` is zero, or the Kasiski range is empty.
    pub fn validate(&self) -> Result<(), VigenereError> {
        if self.max_key_length == 0 {
            return Err(VigenereError::InvalidConfig(
                "max_key_length must be at least 1".to_string(),
            ));
        }
        if self.kasiski_min_length == 0 {
            return Err(VigenereError::InvalidConfig(
                "kasiski_min_length must be at least 1".to_string(),
            ));
        }
        if self.kasiski_min_length >= self.kasiski_length_cap {
            return Err(VigenereError::InvalidConfig(format!(
                "kasiski_min_length ({}) must be below kasiski_length_cap ({})",
                self.kasiski_min_length, self.kasiski_length_cap
            )));
        }
        Ok(())
    }
}

/// Outcome of breaking a ciphertext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CipherBreak {
    /// Recovered key, one letter per coset.
    pub key: Key,
    /// Key length chosen by the IC estimator.
    pub key_length: usize,
    /// Ciphertext decrypted with `key`.
    pub plaintext: String,
}

impl CipherBreak {
    /// Re-encrypts the recovered plaintext and compares it to `ciphertext`.
    ///
    /// Confirms internal consistency only: a wrong key still verifies, but a
    /// mismatch means the result was not produced from this ciphertext.
    /// Both sides are compared as normalized letter streams.
    pub fn verify(&self, ciphertext: &str) -> bool {
        encrypt_with(&self.plaintext, &self.key) == alphabet::normalize(ciphertext)
    }

    /// The recovered key collapsed to its shortest period.
    ///
    /// The estimator may settle on a multiple of the true length (e.g. 18
    /// for a 9-letter key); the collapsed key is then the original one.
    pub fn reduced_key(&self) -> Key {
        self.key.minimal_period()
    }
}

/// Ciphertext-only Vigenere cryptanalysis against one reference language.
///
/// # Examples
///
/// ```
/// use vigenere::{encrypt, AnalysisConfig, Cryptanalyst, Language};
///
/// let plain = "Whether I shall turn out to be the hero of my own life, or whether \
///     that station will be held by anybody else, these pages must show. To begin \
///     my life with the beginning of my life, I record that I was born on a Friday, \
///     at twelve o'clock at night. It was remarked that the clock began to strike, \
///     and I began to cry, simultaneously.";
/// let cipher = encrypt(plain, "DOG").unwrap();
///
/// let config = AnalysisConfig::default().with_max_key_length(5);
/// let result = Cryptanalyst::with_config(Language::English, config)
///     .unwrap()
///     .analyze(&cipher);
/// assert!(result.verify(&cipher));
/// assert_eq!(result.reduced_key().as_str(), "DOG");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Cryptanalyst {
    table: FrequencyTable,
    config: AnalysisConfig,
}

impl Cryptanalyst {
    /// Analyst for `language` with default limits.
    pub fn new(language: Language) -> Self {
        Cryptanalyst {
            table: language.frequencies(),
            config: AnalysisConfig::default(),
        }
    }

    /// Analyst for `language` with custom limits.
    ///
    /// # Errors
    /// Returns [`VigenereError::InvalidConfig`] if `config` fails validation.
    pub fn with_config(language: Language, config: AnalysisConfig) -> Result<Self, VigenereError> {
        Self::with_table(language.frequencies(), config)
    }

    /// Analyst for a caller-supplied frequency profile.
    ///
    /// # Errors
    /// Returns [`VigenereError::InvalidConfig`] if `config` fails validation.
    pub fn with_table(table: FrequencyTable, config: AnalysisConfig) -> Result<Self, VigenereError> {
        config.validate()?;
        Ok(Cryptanalyst { table, config })
    }

    /// Limits in use.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Reference profile in use.
    pub fn table(&self) -> &FrequencyTable {
        &self.table
    }

    /// Breaks `ciphertext` in one pass.
    ///
    /// Empty or letterless input produces key `"A"` and empty plaintext.
    pub fn analyze(&self, ciphertext: &str) -> CipherBreak {
        let stream = alphabet::normalize(ciphertext);

        let key_length = best_length(&rank_key_lengths(&stream, self.config.max_key_length));
        debug!(key_length, letters = stream.len(), "estimated key length");

        let scores = coset_scores(&stream, key_length, &self.table);
        for (position, score) in scores.iter().enumerate() {
            debug!(
                position = position + 1,
                letter = %score.letter,
                chi_squared = score.chi_squared,
                "recovered key letter"
            );
        }
        let shifts: Vec<u8> = scores.iter().map(|s| s.shift).collect();
        // best_length never returns 0, so there is one score per coset.
        let key = Key::from_nonempty_shifts(&shifts);

        let plaintext = decrypt_with(&stream, &key);
        CipherBreak {
            key,
            key_length,
            plaintext,
        }
    }

    /// Kasiski distance histogram using this analyst's fragment limits.
    pub fn kasiski(&self, ciphertext: &str) -> DistanceHistogram {
        kasiski_examination_range(
            ciphertext,
            self.config.kasiski_min_length,
            self.config.kasiski_length_cap,
        )
    }
}

impl Default for Cryptanalyst {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

/// Recovers `(key, plaintext)` from `ciphertext` written in `language`.
///
/// Best-effort: see [`Cryptanalyst::analyze`].
pub fn break_cipher(ciphertext: &str, language: Language) -> (String, String) {
    let result = Cryptanalyst::new(language).analyze(ciphertext);
    (result.key.into(), result.plaintext)
}
