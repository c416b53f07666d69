//! SHAKE128 and SHAKE256 (FIPS 202) as incremental XOFs
//!
//! Thin adapters over the `sha3` crate's sponge.

use sha3::digest::{ExtendableOutput, Update, XofReader};

use super::ExtendableOutputFunction;
use crate::error::{Error, Result};

/// Incremental SHAKE instance parameterised by the `sha3` hasher type
pub struct ShakeXof<H>
where
    H: Default + Update + ExtendableOutput,
{
    hasher: H,
    reader: Option<H::Reader>,
}

/// SHAKE128, used to expand the public matrix
pub type ShakeXof128 = ShakeXof<sha3::Shake128>;

/// SHAKE256, used as PRF and for the implicit-rejection key
pub type ShakeXof256 = ShakeXof<sha3::Shake256>;

impl<H> ExtendableOutputFunction for ShakeXof<H>
where
    H: Default + Update + ExtendableOutput,
{
    fn new() -> Self {
        Self {
            hasher: H::default(),
            reader: None,
        }
    }

    fn update(&mut self, data: &[u8]) -> Result<()> {
        if self.reader.is_some() {
            return Err(Error::Processing {
                operation: "SHAKE update",
                details: "cannot absorb after squeezing",
            });
        }
        self.hasher.update(data);
        Ok(())
    }

    fn squeeze(&mut self, output: &mut [u8]) -> Result<()> {
        let hasher = &mut self.hasher;
        let reader = self
            .reader
            .get_or_insert_with(|| core::mem::take(hasher).finalize_xof());
        reader.read(output);
        Ok(())
    }

    fn reset(&mut self) -> Result<()> {
        self.hasher = H::default();
        self.reader = None;
        Ok(())
    }
}
