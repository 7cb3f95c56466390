//! Alphabet normalization and letter/shift conversions.
//!
//! Every other component works on a *letter stream*: a `String` holding only
//! the 26 uppercase ASCII letters `A..=Z`. Characters outside `A-Z`/`a-z`
//! (digits, punctuation, whitespace, accented letters) are dropped.

/// Size of the Latin alphabet.
pub const ALPHABET_LEN: usize = 26;

/// The alphabet in canonical order.
pub const LETTERS: [u8; ALPHABET_LEN] = *b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Strips every non-ASCII-letter character and upper-cases the rest.
///
/// Order is preserved. Empty or letterless input yields an empty string.
///
/// # Examples
///
/// ```
/// use vigenere::normalize;
///
/// assert_eq!(normalize("Hello, World! 123"), "HELLOWORLD");
/// assert_eq!(normalize("1234"), "");
/// ```
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Maps an uppercase letter byte to its index `0..26`.
///
/// Caller guarantees `letter` is in `b'A'..=b'Z'`.
#[inline]
pub(crate) fn index_of(letter: u8) -> usize {
    debug_assert!(letter.is_ascii_uppercase());
    (letter - b'A') as usize
}

/// Maps an index (taken modulo 26) back to its uppercase letter byte.
#[inline]
pub(crate) fn letter_at(index: usize) -> u8 {
    LETTERS[index % ALPHABET_LEN]
}
