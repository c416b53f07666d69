//! Polynomial vectors and the public matrix for Kyber.

use core::fmt;
use core::marker::PhantomData;

use latkem_algorithms::error::Result as AlgoResult;
use latkem_algorithms::poly::polynomial::Polynomial;
use latkem_algorithms::poly::sampling::{DefaultSamplers, UniformSampler};
use latkem_algorithms::xof::{ExtendableOutputFunction, ShakeXof128};
use zeroize::{Zeroize, Zeroizing};

use super::params::{KyberParams, KyberPolyModParams, KYBER_SYMBYTES};

/// A polynomial of the Kyber ring.
pub(crate) type KyberPoly = Polynomial<KyberPolyModParams>;

/// A vector of K polynomials.
pub(crate) struct PolyVec<P: KyberParams> {
    /// The polynomials in this vector.
    pub(crate) polys: Vec<KyberPoly>,
    _params: PhantomData<P>,
}

impl<P: KyberParams> Clone for PolyVec<P> {
    fn clone(&self) -> Self {
        Self {
            polys: self.polys.clone(),
            _params: PhantomData,
        }
    }
}

impl<P: KyberParams> PartialEq for PolyVec<P> {
    fn eq(&self, other: &Self) -> bool {
        self.polys == other.polys
    }
}

impl<P: KyberParams> Eq for PolyVec<P> {}

// Vectors may hold secrets, so only the shape is printed
impl<P: KyberParams> fmt::Debug for PolyVec<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolyVec").field("k", &P::K).finish_non_exhaustive()
    }
}

impl<P: KyberParams> Zeroize for PolyVec<P> {
    fn zeroize(&mut self) {
        for p in self.polys.iter_mut() {
            p.zeroize();
        }
    }
}

impl<P: KyberParams> PolyVec<P> {
    /// Creates a new zero PolyVec of dimension K.
    pub fn zero() -> Self {
        Self {
            polys: vec![KyberPoly::zero(); P::K],
            _params: PhantomData,
        }
    }

    /// Builds a vector from exactly K polynomials.
    pub fn from_polys(polys: Vec<KyberPoly>) -> AlgoResult<Self> {
        latkem_algorithms::validate::length("PolyVec", polys.len(), P::K)?;
        Ok(Self {
            polys,
            _params: PhantomData,
        })
    }

    /// Applies NTT to each polynomial in the vector.
    pub fn ntt_inplace(&mut self) -> AlgoResult<()> {
        for p in self.polys.iter_mut() {
            p.ntt_inplace()?;
        }
        Ok(())
    }

    /// Applies inverse NTT to each polynomial in the vector.
    pub fn inv_ntt_inplace(&mut self) -> AlgoResult<()> {
        for p in self.polys.iter_mut() {
            p.from_ntt_inplace()?;
        }
        Ok(())
    }

    /// Inner product in the NTT domain: `sum(self[i] o other[i])`.
    pub fn pointwise_accum(&self, other: &Self) -> KyberPoly {
        let mut acc = KyberPoly::zero();
        for (p1, p2) in self.polys.iter().zip(other.polys.iter()) {
            let product = Zeroizing::new(p1.ntt_mul(p2));
            acc.add_assign(&product);
        }
        acc
    }

    /// Adds another PolyVec to this one, coefficient-wise.
    pub fn add_assign(&mut self, other: &Self) {
        for (p1, p2) in self.polys.iter_mut().zip(other.polys.iter()) {
            p1.add_assign(p2);
        }
    }

    /// Compresses every polynomial to `d` bits.
    pub fn compress(&self, d: usize) -> AlgoResult<Self> {
        let polys = self
            .polys
            .iter()
            .map(|p| p.compress(d))
            .collect::<AlgoResult<Vec<_>>>()?;
        Self::from_polys(polys)
    }

    /// Decompresses every polynomial from `d` bits.
    pub fn decompress(&self, d: usize) -> AlgoResult<Self> {
        let polys = self
            .polys
            .iter()
            .map(|p| p.decompress(d))
            .collect::<AlgoResult<Vec<_>>>()?;
        Self::from_polys(polys)
    }
}

/// The K x K public matrix in the NTT domain, expanded from `rho`.
pub(crate) struct Matrix<P: KyberParams> {
    rows: Vec<PolyVec<P>>,
}

impl<P: KyberParams> Matrix<P> {
    /// Expands `rho` into the matrix `A_hat` or its transpose.
    ///
    /// Entry `A[i][j]` is sampled from `SHAKE128(rho || j || i)`; the
    /// transpose swaps the two index bytes.
    pub fn expand(rho: &[u8; KYBER_SYMBYTES], transpose: bool) -> AlgoResult<Self> {
        let mut rows = Vec::with_capacity(P::K);
        for i in 0..P::K {
            let mut row = Vec::with_capacity(P::K);
            for j in 0..P::K {
                let (first, second) = if transpose { (i, j) } else { (j, i) };
                let mut xof = ShakeXof128::new();
                xof.update(rho)?;
                xof.update(&[first as u8, second as u8])?;
                row.push(
                    <DefaultSamplers as UniformSampler<KyberPolyModParams>>::sample_uniform(
                        &mut xof,
                    )?,
                );
            }
            rows.push(PolyVec::from_polys(row)?);
        }
        Ok(Self { rows })
    }

    /// Matrix-vector product in the NTT domain.
    pub fn mul_vec(&self, v: &PolyVec<P>) -> AlgoResult<PolyVec<P>> {
        PolyVec::from_polys(self.rows.iter().map(|row| row.pointwise_accum(v)).collect())
    }

    /// Entry at row `i`, column `j`.
    #[cfg(test)]
    pub fn entry(&self, i: usize, j: usize) -> &KyberPoly {
        &self.rows[i].polys[j]
    }
}
