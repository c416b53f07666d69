//! # latkem
//!
//! Kyber-768 (ML-KEM-768, FIPS 203) key encapsulation in pure Rust.
//!
//! ## Usage
//!
//! ```rust
//! use latkem::prelude::*;
//! use rand_chacha::rand_core::SeedableRng;
//!
//! let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(7);
//! let (pk, sk) = Kyber768::keypair(&mut rng)?;
//! let (ct, ss_sender) = Kyber768::encapsulate(&mut rng, &pk)?;
//! let ss_receiver = Kyber768::decapsulate(&sk, &ct)?;
//! assert_eq!(ss_sender, ss_receiver);
//! # Ok::<(), latkem::api::Error>(())
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `kem` (default): the Kyber-768 KEM
//! - `algorithms`: the ring arithmetic on its own
//! - `serde`: serde impls for public keys and ciphertexts
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - `latkem-api`: the `Kem` trait, serialization traits and error type
//! - `latkem-common`: zeroizing secret containers
//! - `latkem-internal`: constant-time helpers
//! - `latkem-params`: Kyber constants
//! - `latkem-algorithms`: NTT, sampling, compression and hashing
//! - `latkem-kem`: Kyber-768

#![forbid(unsafe_code)]

// Core re-exports (always available)
pub use latkem_api as api;
pub use latkem_common as common;
pub use latkem_internal as internal;
pub use latkem_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use latkem_algorithms as algorithms;

#[cfg(feature = "kem")]
pub use latkem_kem as kem;

#[cfg(feature = "kem")]
pub use latkem_kem::Kyber768;

#[cfg(feature = "kem")]
pub use rand;

pub use zeroize;

/// Common imports for latkem users
pub mod prelude {
    pub use crate::api::{Error, Result};
    pub use crate::api::{Kem, Serialize, SerializeSecret};
    pub use crate::common::{SecretBuffer, SecretVec};
    pub use zeroize::{Zeroize, Zeroizing};

    #[cfg(feature = "kem")]
    pub use crate::kem::kyber::{
        KyberCiphertext, KyberPublicKey, KyberSecretKey, KyberSharedSecret,
    };
    #[cfg(feature = "kem")]
    pub use crate::kem::Kyber768;
}
