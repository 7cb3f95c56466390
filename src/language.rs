//! Reference letter-frequency profiles.
//!
//! Tables give the expected share of each letter `A..=Z` in percent for a
//! natural-language corpus. Two languages are built in; callers with other
//! corpora can build their own [`FrequencyTable`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::alphabet::{ALPHABET_LEN, LETTERS};
use crate::error::VigenereError;

/// Portuguese letter frequencies (percent, `A..=Z`).
#[rustfmt::skip]
const PORTUGUESE: [f64; ALPHABET_LEN] = [
    14.63, 1.04, 3.88, 4.99, 12.57, 1.02, 1.30, 1.28, 6.18, 0.40,
     0.02, 2.78, 4.74, 5.05, 10.73, 2.52, 1.20, 6.53, 7.81, 4.34,
     4.63, 1.67, 0.01, 0.21,  0.01, 0.47,
];

/// English letter frequencies (percent, `A..=Z`).
#[rustfmt::skip]
const ENGLISH: [f64; ALPHABET_LEN] = [
     8.12, 1.49, 2.78, 4.25, 12.02, 2.23, 2.02, 6.09, 6.97, 0.15,
     0.77, 4.03, 2.41, 6.75,  7.51, 1.93, 0.10, 5.99, 6.33, 9.06,
     2.76, 0.98, 2.36, 0.15,  1.97, 0.07,
];

/// Built-in plaintext languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    /// Portuguese (`"pt"`).
    #[default]
    #[serde(rename = "pt")]
    Portuguese,
    /// English (`"en"`).
    #[serde(rename = "en")]
    English,
}

impl Language {
    /// Short identifier, `"pt"` or `"en"`.
    pub fn code(self) -> &'static str {
        match self {
            Language::Portuguese => "pt",
            Language::English => "en",
        }
    }

    /// Reference frequency table for this language.
    pub fn frequencies(self) -> FrequencyTable {
        FrequencyTable::for_language(self)
    }
}

impl FromStr for Language {
    type Err = VigenereError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pt" => Ok(Language::Portuguese),
            "en" => Ok(Language::English),
            _ => Err(VigenereError::UnknownLanguage(s.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Expected relative frequency of each letter, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrequencyTable {
    percent: [f64; ALPHABET_LEN],
}

impl FrequencyTable {
    /// Wraps a caller-supplied profile, indexed `A = 0 .. Z = 25`.
    ///
    /// Values are percentages and should sum to roughly 100. Letters with a
    /// zero entry are ignored by the chi-squared test.
    pub const fn new(percent: [f64; ALPHABET_LEN]) -> Self {
        FrequencyTable { percent }
    }

    /// Built-in table for `language`.
    pub const fn for_language(language: Language) -> Self {
        match language {
            Language::Portuguese => FrequencyTable::new(PORTUGUESE),
            Language::English => FrequencyTable::new(ENGLISH),
        }
    }

    /// Expected percentage of the letter at `index` (`A = 0`).
    ///
    /// # Panics
    /// Panics if `index >= 26`.
    pub fn percent(&self, index: usize) -> f64 {
        self.percent[index]
    }

    /// Expected percentage of `letter`, or `None` outside `A-Z`/`a-z`.
    pub fn percent_of(&self, letter: char) -> Option<f64> {
        let upper = letter.to_ascii_uppercase();
        LETTERS
            .iter()
            .position(|&l| l as char == upper)
            .map(|i| self.percent[i])
    }

    /// Iterates over `(letter, percent)` pairs in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = (char, f64)> + '_ {
        LETTERS
            .iter()
            .zip(self.percent.iter())
            .map(|(&l, &p)| (l as char, p))
    }

    /// Sum of all entries (≈ 100 for a well-formed table).
    pub fn total(&self) -> f64 {
        self.percent.iter().sum()
    }

    /// Index of Coincidence of plaintext drawn from this profile, `Σ p²`.
    ///
    /// Portuguese sits near 0.078 and English near 0.065; uniformly random
    /// letters give `1/26 ≈ 0.0385`.
    pub fn expected_ic(&self) -> f64 {
        let total = self.total();
        if total <= 0.0 {
            return 0.0;
        }
        self.percent.iter().map(|p| (p / total).powi(2)).sum()
    }
}

impl From<Language> for FrequencyTable {
    fn from(language: Language) -> Self {
        FrequencyTable::for_language(language)
    }
}
