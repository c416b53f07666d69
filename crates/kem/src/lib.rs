//! Key Encapsulation Mechanisms (KEM)
//!
//! This crate implements the Kyber-768 key encapsulation mechanism
//! (ML-KEM-768, FIPS 203) on top of the ring arithmetic of
//! `latkem-algorithms`.

#![forbid(unsafe_code)]

pub mod error;
pub mod kyber;

// Re-exports
pub use kyber::Kyber768;
