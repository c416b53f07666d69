//! Error handling for KEM operations

use latkem_algorithms::error::Error as PrimitiveError;
use latkem_api::error::Error as CoreError;
use thiserror::Error;

pub mod validate;

/// Error type for KEM operations
///
/// Decapsulation of a well-formed but tampered ciphertext never produces
/// one of these; it returns the implicit-rejection secret instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Error raised by a lattice primitive
    #[error("primitive error: {0}")]
    Primitive(#[from] PrimitiveError),

    /// The parameter set is internally inconsistent
    #[error("invalid parameter set {algorithm}: {reason}")]
    InvalidParameterSet {
        /// Name of the parameter set
        algorithm: &'static str,
        /// What is wrong with it
        reason: &'static str,
    },

    /// Invalid key format
    #[error("invalid {key_type} key: {reason}")]
    InvalidKey {
        /// Which key failed validation
        key_type: &'static str,
        /// Why it was rejected
        reason: &'static str,
    },

    /// Invalid ciphertext format
    #[error("invalid {algorithm} ciphertext: {reason}")]
    InvalidCiphertext {
        /// Algorithm the ciphertext was meant for
        algorithm: &'static str,
        /// Why it was rejected
        reason: &'static str,
    },
}

/// Result type for KEM operations
pub type Result<T> = core::result::Result<T, Error>;

// From Error to CoreError
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::InvalidParameterSet { algorithm, reason } => CoreError::Configuration {
                context: algorithm,
                message: reason.to_string(),
            },
            Error::InvalidKey { key_type, reason } => CoreError::InvalidKey {
                context: key_type,
                message: reason.to_string(),
            },
            Error::InvalidCiphertext { algorithm, reason } => CoreError::InvalidCiphertext {
                context: algorithm,
                message: reason.to_string(),
            },
        }
    }
}
