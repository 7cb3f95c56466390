//! Error types for the Vigenere library.

use thiserror::Error;

/// Errors produced by the Vigenere library.
///
/// Only key handling and configuration can fail. The statistical functions
/// degrade to trivial results on degenerate input instead of erroring.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VigenereError {
    /// The key contains no letters after normalization.
    #[error("Key must contain at least one letter A-Z")]
    InvalidKey,
    /// A language identifier other than the built-in ones.
    #[error("Unknown language '{0}' (expected 'pt' or 'en')")]
    UnknownLanguage(String),
    /// An analysis configuration value is outside its valid range.
    #[error("Invalid analysis configuration: {0}")]
    InvalidConfig(String),
}
