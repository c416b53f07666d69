//! Error type definitions for KEM operations

use thiserror::Error;

/// Primary error type for the public KEM API
///
/// Only configuration problems and malformed inputs at the deserialization
/// boundary surface here. A tampered ciphertext of the correct length is never
/// an error: decapsulation answers it with an implicit-rejection secret.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The parameter set or ring configuration is unusable, or the XOF
    /// stopped producing output. Fatal for the caller.
    #[error("configuration error in {context}: {message}")]
    Configuration {
        context: &'static str,
        message: String,
    },

    /// Invalid key error
    #[error("invalid key ({context}): {message}")]
    InvalidKey {
        context: &'static str,
        message: String,
    },

    /// Invalid ciphertext error
    #[error("invalid ciphertext ({context}): {message}")]
    InvalidCiphertext {
        context: &'static str,
        message: String,
    },

    /// Invalid length error with context
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Result type for KEM operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Returns true for errors that indicate a broken parameter set or
    /// primitive rather than bad caller input.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }
}
