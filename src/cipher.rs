//! Periodic (Vigenere) cipher over normalized letter streams.
//!
//! Position `i` of the text is shifted by key letter `key[i mod |key|]`:
//! `C = (P + K) mod 26` to encrypt and `P = (C - K) mod 26` to decrypt,
//! with letters numbered `A = 0 .. Z = 25`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::alphabet::{self, ALPHABET_LEN};
use crate::error::VigenereError;

/// A normalized, non-empty cipher key.
///
/// The key repeats periodically over the text. Construction normalizes
/// the raw input, so `"k e-y"` and `"KEY"` are the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Key {
    letters: String,
}

impl Key {
    /// Builds a key from arbitrary text.
    ///
    /// # Errors
    /// Returns [`VigenereError::InvalidKey`] if `raw` has no letters.
    ///
    /// # Examples
    ///
    /// ```
    /// use vigenere::Key;
    ///
    /// let key = Key::new("k-e y").unwrap();
    /// assert_eq!(key.as_str(), "KEY");
    /// assert!(Key::new("123").is_err());
    /// ```
    pub fn new(raw: &str) -> Result<Self, VigenereError> {
        let letters = alphabet::normalize(raw);
        if letters.is_empty() {
            return Err(VigenereError::InvalidKey);
        }
        Ok(Key { letters })
    }

    /// Builds a key from shift amounts (`0 = A`, each taken modulo 26).
    ///
    /// # Errors
    /// Returns [`VigenereError::InvalidKey`] if `shifts` is empty.
    pub fn from_shifts(shifts: &[u8]) -> Result<Self, VigenereError> {
        if shifts.is_empty() {
            return Err(VigenereError::InvalidKey);
        }
        Ok(Key::from_nonempty_shifts(shifts))
    }

    /// Builds a key from shifts the caller knows to be non-empty.
    pub(crate) fn from_nonempty_shifts(shifts: &[u8]) -> Self {
        debug_assert!(!shifts.is_empty());
        Key {
            letters: shifts
                .iter()
                .map(|&s| alphabet::letter_at(s as usize) as char)
                .collect(),
        }
    }

    /// The key letters.
    pub fn as_str(&self) -> &str {
        &self.letters
    }

    /// Number of letters in one period of the key.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always `false`; a `Key` cannot be empty.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Shift amount of each key letter (`A = 0 .. Z = 25`).
    pub fn shifts(&self) -> Vec<u8> {
        self.letters.bytes().map(|b| b - b'A').collect()
    }

    /// Shortest key producing the same keystream.
    ///
    /// A key that is itself a repetition of a shorter block, such as
    /// `"ABCABC"`, encrypts exactly like that block (`"ABC"`).
    ///
    /// # Examples
    ///
    /// ```
    /// use vigenere::Key;
    ///
    /// let key = Key::new("SEGURANCASEGURANCA").unwrap();
    /// assert_eq!(key.minimal_period().as_str(), "SEGURANCA");
    /// ```
    pub fn minimal_period(&self) -> Key {
        let bytes = self.letters.as_bytes();
        let n = bytes.len();
        for period in 1..n {
            if !n.is_multiple_of(period) {
                continue;
            }
            if (period..n).all(|i| bytes[i] == bytes[i % period]) {
                return Key {
                    letters: self.letters[..period].to_string(),
                };
            }
        }
        self.clone()
    }
}

impl FromStr for Key {
    type Err = VigenereError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Key::new(s)
    }
}

impl TryFrom<String> for Key {
    type Error = VigenereError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Key::new(&value)
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        key.letters
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.letters)
    }
}

/// Encrypts `text` with `key`.
///
/// Both arguments are normalized first; the output is uppercase letters only.
///
/// # Errors
/// Returns [`VigenereError::InvalidKey`] if `key` has no letters.
///
/// # Examples
///
/// ```
/// use vigenere::encrypt;
///
/// assert_eq!(encrypt("Hello World", "KEY").unwrap(), "RIJVSUYVJN");
/// assert!(encrypt("ABC", "").is_err());
/// ```
pub fn encrypt(text: &str, key: &str) -> Result<String, VigenereError> {
    let key = Key::new(key)?;
    Ok(encrypt_with(text, &key))
}

/// Decrypts `text` with `key`.
///
/// Inverse of [`encrypt`]: `decrypt(encrypt(t, k), k) == normalize(t)`.
///
/// # Errors
/// Returns [`VigenereError::InvalidKey`] if `key` has no letters.
///
/// # Examples
///
/// ```
/// use vigenere::decrypt;
///
/// assert_eq!(decrypt("RIJVSUYVJN", "KEY").unwrap(), "HELLOWORLD");
/// assert!(decrypt("ABC", "123").is_err());
/// ```
pub fn decrypt(text: &str, key: &str) -> Result<String, VigenereError> {
    let key = Key::new(key)?;
    Ok(decrypt_with(text, &key))
}

/// Encrypts `text` with a validated key.
///
/// Characters outside `A-Z`/`a-z` are skipped, so the output equals
/// `encrypt(text, key.as_str())`.
///
/// # Examples
///
/// ```
/// use vigenere::Key;
/// use vigenere::cipher::encrypt_with;
///
/// let key = Key::new("KEY").unwrap();
/// assert_eq!(encrypt_with("hello world", &key), "RIJVSUYVJN");
/// ```
pub fn encrypt_with(text: &str, key: &Key) -> String {
    shift_letters(text, &key.shifts(), Direction::Forward)
}

/// Decrypts `text` with a validated key, skipping non-letters.
pub fn decrypt_with(text: &str, key: &Key) -> String {
    shift_letters(text, &key.shifts(), Direction::Backward)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

/// Applies the periodic shift sequence to the letters of `text`.
///
/// Filtering bytes matches [`alphabet::normalize`]: multi-byte UTF-8
/// sequences never contain ASCII letters.
fn shift_letters(text: &str, shifts: &[u8], direction: Direction) -> String {
    debug_assert!(!shifts.is_empty());
    text.bytes()
        .filter(u8::is_ascii_alphabetic)
        .zip(shifts.iter().cycle())
        .map(|(letter, &shift)| {
            let value = alphabet::index_of(letter.to_ascii_uppercase());
            let shift = shift as usize % ALPHABET_LEN;
            let shifted = match direction {
                Direction::Forward => value + shift,
                Direction::Backward => value + ALPHABET_LEN - shift,
            };
            alphabet::letter_at(shifted) as char
        })
        .collect()
}
