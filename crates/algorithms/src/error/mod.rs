//! Error handling for the lattice primitives

use std::borrow::Cow;

use latkem_api::Error as CoreError;
use thiserror::Error;

pub mod validate;

/// The error type for lattice primitives
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Parameter validation error
    #[error("invalid parameter '{name}': {reason}")]
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    #[error("invalid length for {context}: expected {expected}, got {actual}")]
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length
        expected: usize,
        /// Actual length
        actual: usize,
    },

    /// A coefficient is not reduced modulo Q
    #[error("{context}: coefficient not reduced mod Q")]
    CoefficientRange {
        /// Where the coefficient was supplied or decoded
        context: &'static str,
    },

    /// The extendable-output stream ran dry before sampling finished
    #[error("{operation}: XOF output exhausted")]
    XofExhausted {
        /// Operation that was consuming the stream
        operation: &'static str,
    },

    /// Processing error during an operation
    #[error("processing error in {operation}: {details}")]
    Processing {
        /// Operation that failed
        operation: &'static str,
        /// Additional details about the failure
        details: &'static str,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for lattice primitive operations
pub type Result<T> = core::result::Result<T, Error>;

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::Configuration {
                context: "parameter",
                message: format!("{}: {}", name, reason),
            },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::CoefficientRange { context } => CoreError::InvalidKey {
                context,
                message: "coefficient not reduced mod q".to_string(),
            },
            Error::XofExhausted { operation } => CoreError::Configuration {
                context: operation,
                message: "XOF output exhausted".to_string(),
            },
            Error::Processing { operation, details } => CoreError::Configuration {
                context: operation,
                message: details.to_string(),
            },
        }
    }
}
