//! AES-256-CTR DRBG of the NIST PQC reference `rng.c`
//!
//! Reproduces `randombytes` of the submission KAT generator. Not a general
//! purpose generator: it has no reseed counter and no prediction resistance.

use aes::cipher::{BlockEncrypt, KeyInit};
use aes::{Aes256, Block};

/// Length of the entropy input and of the personalization string.
pub const SEED_BYTES: usize = 48;

/// Deterministic generator keyed by a 48-byte seed.
pub struct NistDrbg {
    key: [u8; 32],
    v: [u8; 16],
}

impl NistDrbg {
    /// `randombytes_init(entropy, personalization, 256)`
    pub fn new(entropy: &[u8; SEED_BYTES], personalization: Option<&[u8; SEED_BYTES]>) -> Self {
        let mut seed_material = *entropy;
        if let Some(ps) = personalization {
            seed_material
                .iter_mut()
                .zip(ps.iter())
                .for_each(|(s, p)| *s ^= p);
        }

        let mut drbg = Self {
            key: [0u8; 32],
            v: [0u8; 16],
        };
        drbg.update(Some(&seed_material));
        drbg
    }

    // Big-endian increment of V, then one AES block of output
    fn next_block(&mut self) -> Block {
        for byte in self.v.iter_mut().rev() {
            let (next, overflow) = byte.overflowing_add(1);
            *byte = next;
            if !overflow {
                break;
            }
        }
        let cipher = Aes256::new(self.key.as_slice().into());
        let mut block = Block::clone_from_slice(&self.v);
        cipher.encrypt_block(&mut block);
        block
    }

    fn update(&mut self, provided_data: Option<&[u8; SEED_BYTES]>) {
        let mut temp = [0u8; SEED_BYTES];
        for chunk in temp.chunks_exact_mut(16) {
            chunk.copy_from_slice(&self.next_block());
        }
        if let Some(data) = provided_data {
            temp.iter_mut().zip(data.iter()).for_each(|(t, d)| *t ^= d);
        }
        self.key.copy_from_slice(&temp[..32]);
        self.v.copy_from_slice(&temp[32..]);
    }

    /// `randombytes(buf, len)`
    pub fn fill_bytes(&mut self, buf: &mut [u8]) {
        for chunk in buf.chunks_mut(16) {
            let block = self.next_block();
            chunk.copy_from_slice(&block[..chunk.len()]);
        }
        self.update(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_stream() {
        let seed = [7u8; SEED_BYTES];
        let mut a = NistDrbg::new(&seed, None);
        let mut b = NistDrbg::new(&seed, None);

        let mut out_a = [0u8; 40];
        let mut out_b = [0u8; 40];
        a.fill_bytes(&mut out_a);
        b.fill_bytes(&mut out_b);
        assert_eq!(out_a, out_b);

        a.fill_bytes(&mut out_a);
        assert_ne!(out_a, out_b);
    }

    #[test]
    fn test_personalization_changes_stream() {
        let seed = [7u8; SEED_BYTES];
        let ps = [1u8; SEED_BYTES];
        let mut plain = NistDrbg::new(&seed, None);
        let mut personal = NistDrbg::new(&seed, Some(&ps));

        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        plain.fill_bytes(&mut a);
        personal.fill_bytes(&mut b);
        assert_ne!(a, b);
    }
}
