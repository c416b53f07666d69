//! compress.rs - Lossy coefficient compression and message encoding
//!
//! `Compress_d(x) = round(2^d * x / Q) mod 2^d` and
//! `Decompress_d(y) = round(Q * y / 2^d)`, with true round-to-nearest. Q is
//! odd, so neither quotient ever lands exactly on a half.
//!
//! The division by Q inside `Compress_d` is done with a Barrett quotient and
//! a branch-free correction; compilers may lower `/` on a runtime-variable
//! divisor to a data-dependent instruction, and the inputs here are secret.

use zeroize::Zeroizing;

use super::params::Modulus;
use super::polynomial::Polynomial;
use crate::error::{validate, Result};

/// Largest supported compression width
pub const MAX_COMPRESSION_BITS: usize = 11;

/// Exact `floor(t / Q)` for any `t < 2^32`
#[inline(always)]
fn div_q<M: Modulus>(t: u32) -> u32 {
    let quot = ((t as u64 * M::BARRETT_MULTIPLIER) >> 32) as u32;
    // Remainder lies in [0, 2Q); add one when it reaches Q
    let r = t - quot * M::Q;
    quot + (1 ^ (r.wrapping_sub(M::Q) >> 31))
}

/// Compresses one reduced coefficient to `d` bits
#[inline(always)]
pub fn compress_coeff<M: Modulus>(x: u32, d: usize) -> u32 {
    div_q::<M>((x << d) + M::Q / 2) & ((1 << d) - 1)
}

/// Decompresses a `d`-bit value back to a coefficient in [0, Q)
#[inline(always)]
pub fn decompress_coeff<M: Modulus>(y: u32, d: usize) -> u32 {
    (M::Q * (y & ((1 << d) - 1)) + (1 << (d - 1))) >> d
}

fn check_bits(d: usize) -> Result<()> {
    validate::parameter(
        (1..=MAX_COMPRESSION_BITS).contains(&d),
        "d",
        "compression width must be between 1 and 11",
    )
}

impl<M: Modulus> Polynomial<M> {
    /// Compresses every coefficient to `d` bits
    ///
    /// The result is again a valid polynomial since `2^d <= Q`; its
    /// coefficients are below `2^d`.
    pub fn compress(&self, d: usize) -> Result<Self> {
        check_bits(d)?;
        let mut out = Self::zero();
        for (o, &c) in out.as_mut_coeffs_slice().iter_mut().zip(self.as_coeffs_slice()) {
            *o = compress_coeff::<M>(c, d);
        }
        Ok(out)
    }

    /// Inverse of [`Polynomial::compress`] up to the rounding error
    ///
    /// Only the low `d` bits of each coefficient are read.
    pub fn decompress(&self, d: usize) -> Result<Self> {
        check_bits(d)?;
        let mut out = Self::zero();
        for (o, &c) in out.as_mut_coeffs_slice().iter_mut().zip(self.as_coeffs_slice()) {
            *o = decompress_coeff::<M>(c, d);
        }
        Ok(out)
    }
}

/// Maps a message of `N / 8` bytes to a polynomial
///
/// Bit `i` of the message (LSB first) becomes coefficient `i`: 0 maps to 0
/// and 1 maps to `round(Q / 2)`.
pub fn encode_message<M: Modulus>(msg: &[u8]) -> Result<Polynomial<M>> {
    validate::length("encode_message", msg.len(), M::N / 8)?;

    let mut poly = Polynomial::<M>::zero();
    for (i, c) in poly.as_mut_coeffs_slice().iter_mut().enumerate() {
        let bit = u32::from((msg[i >> 3] >> (i & 7)) & 1);
        *c = decompress_coeff::<M>(bit, 1);
    }
    Ok(poly)
}

/// Recovers message bits from a noisy polynomial
///
/// A coefficient decodes to 1 exactly when it lies within Q/4 of
/// `round(Q / 2)`, computed as `Compress_1` without branching.
pub fn decode_message<M: Modulus>(poly: &Polynomial<M>) -> Zeroizing<Vec<u8>> {
    let mut msg = Zeroizing::new(vec![0u8; M::N / 8]);
    for (i, &c) in poly.as_coeffs_slice().iter().enumerate() {
        msg[i >> 3] |= (compress_coeff::<M>(c, 1) << (i & 7)) as u8;
    }
    msg
}
