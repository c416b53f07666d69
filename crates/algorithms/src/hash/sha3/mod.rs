//! SHA-3 fixed-output hashes (FIPS 202) over the `sha3` crate

use ::sha3::Digest;

use super::HashFunction;

/// SHA3-256 output size in bytes
pub const SHA3_256_OUTPUT_SIZE: usize = 32;
/// SHA3-512 output size in bytes
pub const SHA3_512_OUTPUT_SIZE: usize = 64;

/// SHA3-256 hasher
#[derive(Clone, Default)]
pub struct Sha3_256(::sha3::Sha3_256);

/// SHA3-512 hasher
#[derive(Clone, Default)]
pub struct Sha3_512(::sha3::Sha3_512);

impl HashFunction for Sha3_256 {
    type Output = [u8; SHA3_256_OUTPUT_SIZE];

    fn new() -> Self {
        Self(::sha3::Sha3_256::new())
    }

    fn update(&mut self, data: &[u8]) -> &mut Self {
        Digest::update(&mut self.0, data);
        self
    }

    fn finalize(self) -> Self::Output {
        let mut out = [0u8; SHA3_256_OUTPUT_SIZE];
        out.copy_from_slice(&self.0.finalize());
        out
    }
}

impl HashFunction for Sha3_512 {
    type Output = [u8; SHA3_512_OUTPUT_SIZE];

    fn new() -> Self {
        Self(::sha3::Sha3_512::new())
    }

    fn update(&mut self, data: &[u8]) -> &mut Self {
        Digest::update(&mut self.0, data);
        self
    }

    fn finalize(self) -> Self::Output {
        let mut out = [0u8; SHA3_512_OUTPUT_SIZE];
        out.copy_from_slice(&self.0.finalize());
        out
    }
}
