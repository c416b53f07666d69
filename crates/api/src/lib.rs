//! Public API traits and types for the latkem library
//!
//! This crate provides the public API surface shared by the latkem crates:
//! the [`Kem`] trait, the byte serialization traits and the error type
//! every fallible operation returns.

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use traits::{Kem, Serialize, SerializeSecret};

// Re-export trait modules for direct access
pub use traits::{kem, serialize};
