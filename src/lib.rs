//! Vigenere cipher and ciphertext-only cryptanalysis.
//!
//! The cipher itself is plain modular arithmetic over the 26 Latin letters.
//! The interesting part is recovering the key without knowing it: the
//! crate estimates the key length from the Index of Coincidence of
//! interleaved cosets, cross-checks it with Kasiski distance analysis, and
//! solves each key letter by chi-squared matching against a reference
//! language profile.
//!
//! # Architecture
//!
//! ```text
//! alphabet   (normalization: letters only, uppercase)
//!     ↓
//! cipher     (encrypt / decrypt with a periodic Key)
//! stats      (letter counts, Index of Coincidence, chi-squared)
//! language   (built-in pt / en frequency tables)
//!     ↓
//! analysis   (cosets, key length, Kasiski, key recovery)
//!     ↓
//! breaker    (Cryptanalyst: one-pass key + plaintext recovery)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt:
//!
//! ```
//! use vigenere::{decrypt, encrypt};
//!
//! let cipher = encrypt("Hello, World!", "KEY").unwrap();
//! assert_eq!(cipher, "RIJVSUYVJN");
//! assert_eq!(decrypt(&cipher, "KEY").unwrap(), "HELLOWORLD");
//! ```
//!
//! Break a ciphertext without the key:
//!
//! ```
//! use vigenere::{break_cipher, decrypt, encrypt, Language};
//!
//! let plain = "A criptografia e uma ciencia muito importante para a seguranca da \
//!     informacao. Ela permite proteger dados sensiveis atraves de algoritmos \
//!     matematicos. A cifra de Vigenere foi uma das primeiras cifras consideradas \
//!     seguras.";
//! let cipher = encrypt(plain, "SOL").unwrap();
//!
//! let (key, recovered) = break_cipher(&cipher, Language::Portuguese);
//! assert_eq!(decrypt(&cipher, &key).unwrap(), recovered);
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod analysis;
pub mod breaker;
pub mod cipher;
pub mod error;
pub mod language;
pub mod stats;

pub use alphabet::normalize;
pub use analysis::{find_key_length, kasiski_examination, DistanceHistogram};
pub use breaker::{break_cipher, AnalysisConfig, CipherBreak, Cryptanalyst};
pub use cipher::{decrypt, encrypt, Key};
pub use error::VigenereError;
pub use language::{FrequencyTable, Language};
pub use stats::index_of_coincidence;
