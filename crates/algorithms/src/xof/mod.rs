//! Extendable Output Functions (XOF)
//!
//! Samplers take any [`ExtendableOutputFunction`] so that tests can inject a
//! finite or scripted stream in place of SHAKE.

use crate::error::Result;

pub mod shake;

// Re-exports
pub use shake::{ShakeXof128, ShakeXof256};

/// Trait for extendable output functions
///
/// The lifecycle is absorb (`update`), then squeeze. The first `squeeze`
/// finalizes the state; absorbing afterwards is an error until `reset`.
pub trait ExtendableOutputFunction {
    /// Creates a new instance of the XOF
    fn new() -> Self;

    /// Absorbs more input
    fn update(&mut self, data: &[u8]) -> Result<()>;

    /// Squeezes the next `output.len()` bytes of the stream
    ///
    /// Streams that can run dry report `Error::XofExhausted`.
    fn squeeze(&mut self, output: &mut [u8]) -> Result<()>;

    /// Squeezes the specified number of output bytes into a new vector
    fn squeeze_into_vec(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut out = vec![0u8; len];
        self.squeeze(&mut out)?;
        Ok(out)
    }

    /// Resets the XOF to its initial absorbing state
    fn reset(&mut self) -> Result<()>;
}
