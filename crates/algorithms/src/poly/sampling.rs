//! sampling.rs - Deterministic polynomial samplers
//!
//! Both samplers are pure functions of their input stream. Randomness comes
//! from the caller, either as PRF output bytes (CBD) or as an injected XOF
//! (uniform), so every sample can be reproduced from a seed.

use super::ntt::csubq;
use super::params::Modulus;
use super::polynomial::Polynomial;
use crate::error::{validate, Result};
use crate::xof::ExtendableOutputFunction;

/// Bits per rejection-sampling candidate
const UNIFORM_CANDIDATE_BITS: u32 = 12;

/// Trait for sampling polynomials uniformly at random from an XOF stream
pub trait UniformSampler<M: Modulus> {
    /// Samples a polynomial with coefficients uniform in [0, Q)
    ///
    /// Consumes the stream three bytes at a time, reading two 12-bit
    /// candidates and keeping those below Q. Fails with
    /// `Error::XofExhausted` if the stream runs dry.
    fn sample_uniform<X: ExtendableOutputFunction>(xof: &mut X) -> Result<Polynomial<M>>;
}

/// Trait for sampling polynomials from a Centered Binomial Distribution (CBD)
pub trait CbdSampler<M: Modulus> {
    /// Samples a polynomial with coefficients from CBD(eta)
    ///
    /// `bytes` must hold exactly `eta * N / 4` bytes; each coefficient uses
    /// `2 * eta` consecutive bits, least significant bit first.
    fn sample_cbd(bytes: &[u8], eta: u8) -> Result<Polynomial<M>>;
}

/// Default implementation of the samplers
pub struct DefaultSamplers;

impl<M: Modulus> UniformSampler<M> for DefaultSamplers {
    fn sample_uniform<X: ExtendableOutputFunction>(xof: &mut X) -> Result<Polynomial<M>> {
        validate::parameter(
            M::Q <= 1 << UNIFORM_CANDIDATE_BITS,
            "Q",
            "uniform sampling needs Q <= 2^12",
        )?;

        let mut poly = Polynomial::<M>::zero();
        let coeffs = poly.as_mut_coeffs_slice();
        let mut filled = 0;
        let mut buf = [0u8; 3];

        // Rejection happens on public data only
        while filled < M::N {
            xof.squeeze(&mut buf)?;
            let d1 = u32::from(buf[0]) | (u32::from(buf[1] & 0x0F) << 8);
            let d2 = u32::from(buf[1] >> 4) | (u32::from(buf[2]) << 4);

            if d1 < M::Q {
                coeffs[filled] = d1;
                filled += 1;
            }
            if d2 < M::Q && filled < M::N {
                coeffs[filled] = d2;
                filled += 1;
            }
        }

        Ok(poly)
    }
}

/// Number of bytes `sample_cbd` consumes for a given `eta` and degree
pub const fn cbd_bytes(eta: u8, n: usize) -> usize {
    eta as usize * n / 4
}

#[inline(always)]
fn bit_at(bytes: &[u8], pos: usize) -> u32 {
    u32::from((bytes[pos >> 3] >> (pos & 7)) & 1)
}

impl<M: Modulus> CbdSampler<M> for DefaultSamplers {
    fn sample_cbd(bytes: &[u8], eta: u8) -> Result<Polynomial<M>> {
        validate::parameter((1..=8).contains(&eta), "eta", "must be between 1 and 8")?;
        validate::parameter(
            (eta as usize * M::N) % 4 == 0,
            "eta",
            "eta * N must be a multiple of 4",
        )?;
        validate::length("sample_cbd", bytes.len(), cbd_bytes(eta, M::N))?;

        let eta = eta as usize;
        let mut poly = Polynomial::<M>::zero();

        for (i, c) in poly.as_mut_coeffs_slice().iter_mut().enumerate() {
            let base = 2 * eta * i;
            let a: u32 = (0..eta).map(|j| bit_at(bytes, base + j)).sum();
            let b: u32 = (0..eta).map(|j| bit_at(bytes, base + eta + j)).sum();
            // a - b in [-eta, eta], shifted into [0, Q)
            *c = csubq::<M>(a + M::Q - b);
        }

        Ok(poly)
    }
}
