//! ntt.rs - Number Theoretic Transform implementation
//!
//! Iterative Cooley-Tukey (forward) and Gentleman-Sande (inverse) butterflies
//! with twiddles `ZETA^bitrev(i)` derived on the fly from public loop indices.
//! The transform may stop early (`NTT_LAYERS < log2 N`), in which case the
//! NTT domain holds residues of degree `BLOCK - 1` and pointwise
//! multiplication becomes a small base multiplication per residue.
//!
//! All reductions are Barrett-based and branch-free, so the running time is
//! independent of the coefficient values.

use super::params::{check_ntt_geometry, Modulus, NttModulus};
use super::polynomial::Polynomial;
use crate::error::Result;

/// Branch-free conditional subtraction: maps `[0, 2Q)` to `[0, Q)`
#[inline(always)]
pub fn csubq<M: Modulus>(a: u32) -> u32 {
    let r = a.wrapping_sub(M::Q);
    // All ones when a < Q (the subtraction wrapped)
    let mask = ((r as i32) >> 31) as u32;
    r.wrapping_add(M::Q & mask)
}

/// Barrett reduction of any `u32` to `[0, Q)`
#[inline(always)]
pub fn barrett_reduce<M: Modulus>(a: u32) -> u32 {
    let t = ((a as u64 * M::BARRETT_MULTIPLIER) >> 32) as u32;
    // a - t*Q lies in [0, 2Q)
    csubq::<M>(a - t * M::Q)
}

/// Modular addition of reduced operands
#[inline(always)]
pub fn add_mod<M: Modulus>(a: u32, b: u32) -> u32 {
    csubq::<M>(a + b)
}

/// Modular subtraction of reduced operands
#[inline(always)]
pub fn sub_mod<M: Modulus>(a: u32, b: u32) -> u32 {
    csubq::<M>(a + M::Q - b)
}

/// Modular multiplication of reduced operands
#[inline(always)]
pub fn mul_mod<M: Modulus>(a: u32, b: u32) -> u32 {
    barrett_reduce::<M>(a * b)
}

/// Modular exponentiation. The exponent must be public.
pub fn pow_mod<M: Modulus>(base: u32, mut exp: u32) -> u32 {
    let mut base = barrett_reduce::<M>(base);
    let mut acc: u32 = 1;
    while exp != 0 {
        if (exp & 1) == 1 {
            acc = mul_mod::<M>(acc, base);
        }
        base = mul_mod::<M>(base, base);
        exp >>= 1;
    }
    acc
}

/// Reverses the low `bits` bits of `i`
#[inline(always)]
fn bit_reverse(i: usize, bits: u32) -> u32 {
    (i as u32)
        .reverse_bits()
        .checked_shr(u32::BITS - bits)
        .unwrap_or(0)
}

/// Twiddle used by butterfly block `k` (1-based, in bit-reversed order)
#[inline(always)]
fn zeta_at<M: NttModulus>(k: usize) -> u32 {
    pow_mod::<M>(M::ZETA, bit_reverse(k, M::NTT_LAYERS))
}

/// Trait for forward Number Theoretic Transform
pub trait NttOperator<M: NttModulus> {
    /// Performs the forward NTT on a polynomial in place
    fn ntt(poly: &mut Polynomial<M>) -> Result<()>;
}

/// Trait for inverse Number Theoretic Transform
pub trait InverseNttOperator<M: NttModulus> {
    /// Performs the inverse NTT on a polynomial in place, including the
    /// final scaling, so that `inv_ntt(ntt(f)) == f`
    fn inv_ntt(poly: &mut Polynomial<M>) -> Result<()>;
}

/// Cooley-Tukey NTT implementation
pub struct CooleyTukeyNtt;

impl<M: NttModulus> NttOperator<M> for CooleyTukeyNtt {
    fn ntt(poly: &mut Polynomial<M>) -> Result<()> {
        check_ntt_geometry::<M>()?;

        let n = M::N;
        let coeffs = poly.as_mut_coeffs_slice();

        let mut k = 1usize;
        let mut len = n >> 1;
        while len >= M::BLOCK {
            for start in (0..n).step_by(len << 1) {
                let zeta = zeta_at::<M>(k);
                k += 1;
                for j in start..start + len {
                    let t = mul_mod::<M>(zeta, coeffs[j + len]);
                    coeffs[j + len] = sub_mod::<M>(coeffs[j], t);
                    coeffs[j] = add_mod::<M>(coeffs[j], t);
                }
            }
            len >>= 1;
        }
        Ok(())
    }
}

impl<M: NttModulus> InverseNttOperator<M> for CooleyTukeyNtt {
    fn inv_ntt(poly: &mut Polynomial<M>) -> Result<()> {
        check_ntt_geometry::<M>()?;

        let n = M::N;
        let coeffs = poly.as_mut_coeffs_slice();

        let mut k = (1usize << M::NTT_LAYERS) - 1;
        let mut len = M::BLOCK;
        while len <= n >> 1 {
            for start in (0..n).step_by(len << 1) {
                let zeta = zeta_at::<M>(k);
                k -= 1;
                for j in start..start + len {
                    let t = coeffs[j];
                    coeffs[j] = add_mod::<M>(t, coeffs[j + len]);
                    coeffs[j + len] = mul_mod::<M>(zeta, sub_mod::<M>(coeffs[j + len], t));
                }
            }
            len <<= 1;
        }

        for c in coeffs.iter_mut() {
            *c = mul_mod::<M>(*c, M::N_INV);
        }
        Ok(())
    }
}

/// Product of two polynomials in the NTT domain
///
/// Residue `i` is a polynomial of degree `BLOCK - 1` modulo
/// `X^BLOCK - gamma_i` with `gamma_i = ZETA^(2 bitrev(i) + 1)`. For a complete
/// NTT (`BLOCK == 1`) this is plain coefficient-wise multiplication.
pub fn basemul<M: NttModulus>(a: &Polynomial<M>, b: &Polynomial<M>) -> Polynomial<M> {
    let block = M::BLOCK;
    let a = a.as_coeffs_slice();
    let b = b.as_coeffs_slice();
    let mut result = Polynomial::<M>::zero();
    let out = result.as_mut_coeffs_slice();

    for (i, ((ra, rb), ro)) in a
        .chunks_exact(block)
        .zip(b.chunks_exact(block))
        .zip(out.chunks_exact_mut(block))
        .enumerate()
    {
        let gamma = pow_mod::<M>(M::ZETA, 2 * bit_reverse(i, M::NTT_LAYERS) + 1);
        for (deg, slot) in ro.iter_mut().enumerate() {
            let mut acc = 0u32;
            for x in 0..block {
                let term = if x <= deg {
                    mul_mod::<M>(ra[x], rb[deg - x])
                } else {
                    // X^block wraps around to gamma
                    mul_mod::<M>(gamma, mul_mod::<M>(ra[x], rb[deg + block - x]))
                };
                acc = add_mod::<M>(acc, term);
            }
            *slot = acc;
        }
    }
    result
}

impl<M: NttModulus> Polynomial<M> {
    /// Converts this polynomial to the NTT domain in place
    pub fn ntt_inplace(&mut self) -> Result<()> {
        <CooleyTukeyNtt as NttOperator<M>>::ntt(self)
    }

    /// Converts this polynomial back from the NTT domain in place
    pub fn from_ntt_inplace(&mut self) -> Result<()> {
        <CooleyTukeyNtt as InverseNttOperator<M>>::inv_ntt(self)
    }

    /// Pointwise product of two polynomials already in the NTT domain
    pub fn ntt_mul(&self, other: &Self) -> Self {
        basemul(self, other)
    }

    /// Ring product `self * other` in Z_Q[X]/(X^N + 1), computed as
    /// `INTT(NTT(self) o NTT(other))`
    pub fn mul(&self, other: &Self) -> Result<Self> {
        let mut a = self.clone();
        let mut b = other.clone();
        a.ntt_inplace()?;
        b.ntt_inplace()?;
        let mut product = a.ntt_mul(&b);
        product.from_ntt_inplace()?;
        Ok(product)
    }
}
