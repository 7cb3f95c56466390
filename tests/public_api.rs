//! Regression tests for the public functional surface.
//!
//! Coverage:
//! - `normalize`
//! - `encrypt` / `decrypt` / `Key`
//! - `index_of_coincidence`
//! - `kasiski_examination`
//! - `find_key_length`
//! - `VigenereError`

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use vigenere::analysis::{kasiski_factor_counts, partition};
use vigenere::{
    decrypt, encrypt, find_key_length, index_of_coincidence, kasiski_examination, normalize, Key,
    VigenereError,
};

/// Long Portuguese sample shared by the statistical tests.
const PORTUGUESE: &str = include_str!("fixtures/portuguese.txt");

/// Uniformly random letters from a seeded generator.
fn random_letters(seed: u64, len: usize) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|_| (b'A' + rng.gen_range(0..26u8)) as char)
        .collect()
}

// ═══════════════════════════════════════════════════════════════════════
// Normalization
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn normalize_drops_non_letters_and_uppercases() {
    assert_eq!(normalize("Hello, World! 123"), "HELLOWORLD");
}

#[test]
fn normalize_is_idempotent_on_sample() {
    let once = normalize(PORTUGUESE);
    assert_eq!(normalize(&once), once);
    assert!(once.bytes().all(|b| b.is_ascii_uppercase()));
}

// ═══════════════════════════════════════════════════════════════════════
// Periodic cipher
// ═══════════════════════════════════════════════════════════════════════

/// HELLOWORLD under K,E,Y,K,E,Y,K,E,Y,K.
#[test]
fn known_vector_hello_world_key() {
    let expected: String = "HELLOWORLD"
        .bytes()
        .zip(b"KEY".iter().cycle())
        .map(|(p, k)| (b'A' + (p - b'A' + k - b'A') % 26) as char)
        .collect();
    assert_eq!(expected, "RIJVSUYVJN");
    assert_eq!(encrypt("HELLOWORLD", "KEY").unwrap(), expected);
    assert_eq!(decrypt(&expected, "KEY").unwrap(), "HELLOWORLD");
}

#[test]
fn empty_key_fails_for_encrypt_and_decrypt() {
    assert_eq!(encrypt("ABC", ""), Err(VigenereError::InvalidKey));
    assert_eq!(decrypt("ABC", "123"), Err(VigenereError::InvalidKey));
    assert_eq!(Key::new(" -!"), Err(VigenereError::InvalidKey));
}

#[test]
fn roundtrip_on_sample_with_several_keys() {
    let expected = normalize(PORTUGUESE);
    for key in ["A", "Z", "KEY", "segurança", "CRIPTOGRAFIA"] {
        let cipher = encrypt(PORTUGUESE, key).unwrap();
        assert_eq!(cipher.len(), expected.len());
        assert_eq!(decrypt(&cipher, key).unwrap(), expected, "key {}", key);
    }
}

#[test]
fn key_accessors() {
    let key: Key = "Se-gu".parse().unwrap();
    assert_eq!(key.as_str(), "SEGU");
    assert_eq!(key.len(), 4);
    assert!(!key.is_empty());
    assert_eq!(key.shifts(), vec![18, 4, 6, 20]);
    assert_eq!(key.to_string(), "SEGU");
}

// ═══════════════════════════════════════════════════════════════════════
// Index of Coincidence
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn ic_bounds() {
    assert_eq!(index_of_coincidence(""), 0.0);
    assert_eq!(index_of_coincidence("A"), 0.0);
    assert_eq!(index_of_coincidence("AAAA"), 1.0);
}

#[test]
fn ic_of_uniform_random_letters() {
    let ic = index_of_coincidence(&random_letters(42, 20_000));
    assert!((ic - 1.0 / 26.0).abs() < 0.003, "uniform IC {}", ic);
}

#[test]
fn ic_of_portuguese_plaintext() {
    let ic = index_of_coincidence(PORTUGUESE);
    assert!(ic > 0.065 && ic < 0.09, "Portuguese IC {}", ic);
}

#[test]
fn ic_drops_after_encryption() {
    let plain_ic = index_of_coincidence(PORTUGUESE);
    let cipher_ic = index_of_coincidence(&encrypt(PORTUGUESE, "SEGURANCA").unwrap());
    assert!(cipher_ic < plain_ic);
    assert!(cipher_ic < 0.055, "cipher IC {}", cipher_ic);
}

#[test]
fn ic_of_caesar_shift_is_unchanged() {
    let plain_ic = index_of_coincidence(PORTUGUESE);
    let shifted_ic = index_of_coincidence(&encrypt(PORTUGUESE, "Q").unwrap());
    assert!((plain_ic - shifted_ic).abs() < 1e-12);
}

// ═══════════════════════════════════════════════════════════════════════
// Cosets
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn cosets_partition_ciphertext_exactly() {
    let cipher = encrypt(PORTUGUESE, "SEGURANCA").unwrap();
    for len in 1..=20 {
        let cosets = partition(&cipher, len);
        assert_eq!(cosets.len(), len);
        let rebuilt: String = (0..cipher.len())
            .map(|i| cosets[i % len].as_bytes()[i / len] as char)
            .collect();
        assert_eq!(rebuilt, cipher);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Kasiski examination
// ═══════════════════════════════════════════════════════════════════════

/// A repeated plaintext fragment aligned with the key period shows up in
/// the ciphertext histogram at exactly that distance.
#[test]
fn kasiski_finds_aligned_repeat() {
    let fragment = "OATAQUEVAICOMECAR";
    let filler = "AOAMANHECERENTAOPR";
    let plain = format!("{}{}{}", fragment, filler, fragment);
    let distance = fragment.len() + filler.len();
    assert_eq!(distance % 5, 0);

    let cipher = encrypt(&plain, "CHAVE").unwrap();
    let histogram = kasiski_examination(&cipher, 3);
    assert!(
        histogram.get(&distance).copied().unwrap_or(0) >= 1,
        "distance {} missing from {:?}",
        distance,
        histogram
    );
}

#[test]
fn kasiski_factors_favor_key_length() {
    let cipher = encrypt(PORTUGUESE, "CHAVE").unwrap();
    let histogram = kasiski_examination(&cipher, 3);
    assert!(!histogram.is_empty());
    let factors = kasiski_factor_counts(&histogram, 20);
    let five = factors.get(&5).copied().unwrap_or(0);
    for (&factor, &count) in &factors {
        if factor != 5 && 5 % factor != 0 {
            assert!(
                count <= five,
                "factor {} ({}) outranks 5 ({})",
                factor,
                count,
                five
            );
        }
    }
}

#[test]
fn kasiski_on_degenerate_input() {
    assert!(kasiski_examination("", 3).is_empty());
    assert!(kasiski_examination("AB", 3).is_empty());
}

// ═══════════════════════════════════════════════════════════════════════
// Key length estimation
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn key_length_is_multiple_of_true_length() {
    for key in ["CHAVE", "SEGURANCA", "LIMAO"] {
        let cipher = encrypt(PORTUGUESE, key).unwrap();
        let found = find_key_length(&cipher, 20);
        assert_eq!(found % key.len(), 0, "key {} gave length {}", key, found);
    }
}

#[test]
fn key_length_bounded_by_max() {
    let cipher = encrypt(PORTUGUESE, "SEGURANCA").unwrap();
    assert_eq!(find_key_length(&cipher, 12), 9);
    assert!(find_key_length(&cipher, 4) <= 4);
}
