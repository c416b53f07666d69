//! Lattice primitives for the latkem library
//!
//! This crate holds the building blocks the KEM is assembled from:
//!
//! - Ring arithmetic over `Z_Q[X]/(X^N + 1)` with an (incomplete) NTT
//! - Uniform and centered-binomial samplers
//! - Coefficient packing and lossy compression
//! - SHA3 hashing and SHAKE extendable-output functions
//!
//! Coefficient arithmetic uses branch-free Barrett reduction throughout, and
//! nothing here indexes memory or branches on secret values.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Hash function implementations
pub mod hash;
pub use hash::{HashFunction, Sha3_256, Sha3_512};

// Polynomial engine
pub mod poly;

// XOF implementations
pub mod xof;
pub use xof::{ExtendableOutputFunction, ShakeXof128, ShakeXof256};
