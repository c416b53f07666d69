//! Hash functions used by the KEM (SHA3-256 as H, SHA3-512 as G)

pub mod sha3;

pub use self::sha3::{Sha3_256, Sha3_512};

/// Trait for fixed-output hash functions
pub trait HashFunction: Sized {
    /// Digest type
    type Output: AsRef<[u8]>;

    /// Creates a fresh hashing state
    fn new() -> Self;

    /// Absorbs more input
    fn update(&mut self, data: &[u8]) -> &mut Self;

    /// Consumes the state and returns the digest
    fn finalize(self) -> Self::Output;

    /// Hashes `data` in one call
    fn digest(data: &[u8]) -> Self::Output {
        let mut hasher = Self::new();
        hasher.update(data);
        hasher.finalize()
    }
}
