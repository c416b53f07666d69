//! polynomial.rs - Polynomials over Z_Q[X]/(X^N + 1)

use core::fmt;
use core::marker::PhantomData;
use core::ops::{Add, Neg, Sub};

use super::ntt::{add_mod, sub_mod};
use super::params::Modulus;
use crate::error::{Error, Result};
use zeroize::Zeroize;

/// A polynomial in a ring R_Q = Z_Q[X]/(X^N + 1)
///
/// Every coefficient is kept in `[0, Q)`. The coefficient vector is only
/// writable inside this crate, and every operation returns fully reduced
/// values.
pub struct Polynomial<M: Modulus> {
    coeffs: Vec<u32>,
    _marker: PhantomData<M>,
}

impl<M: Modulus> Polynomial<M> {
    /// Creates a new polynomial with all coefficients set to zero
    pub fn zero() -> Self {
        Self {
            coeffs: vec![0; M::N],
            _marker: PhantomData,
        }
    }

    /// Creates a polynomial from a slice of reduced coefficients
    ///
    /// Fails if the slice does not hold exactly `N` values or any value is
    /// not below `Q`. The range check does not branch per coefficient.
    pub fn from_coeffs(coeffs_slice: &[u32]) -> Result<Self> {
        if coeffs_slice.len() != M::N {
            return Err(Error::Length {
                context: "polynomial coefficients",
                expected: M::N,
                actual: coeffs_slice.len(),
            });
        }

        let out_of_range = coeffs_slice
            .iter()
            .fold(0u32, |acc, &c| acc | (c >= M::Q) as u32);
        if out_of_range != 0 {
            return Err(Error::CoefficientRange {
                context: "polynomial coefficients",
            });
        }

        Ok(Self {
            coeffs: coeffs_slice.to_vec(),
            _marker: PhantomData,
        })
    }

    /// Returns a slice view of the coefficients
    pub fn as_coeffs_slice(&self) -> &[u32] {
        &self.coeffs
    }

    /// Mutable access for in-crate code that preserves the range invariant
    pub(crate) fn as_mut_coeffs_slice(&mut self) -> &mut [u32] {
        &mut self.coeffs
    }

    /// Polynomial addition modulo Q
    pub fn add(&self, other: &Self) -> Self {
        let mut result = Self::zero();
        for ((r, &a), &b) in result.coeffs.iter_mut().zip(&self.coeffs).zip(&other.coeffs) {
            *r = add_mod::<M>(a, b);
        }
        result
    }

    /// Polynomial subtraction modulo Q
    pub fn sub(&self, other: &Self) -> Self {
        let mut result = Self::zero();
        for ((r, &a), &b) in result.coeffs.iter_mut().zip(&self.coeffs).zip(&other.coeffs) {
            *r = sub_mod::<M>(a, b);
        }
        result
    }

    /// Polynomial negation modulo Q
    pub fn neg(&self) -> Self {
        let mut result = Self::zero();
        for (r, &a) in result.coeffs.iter_mut().zip(&self.coeffs) {
            *r = sub_mod::<M>(0, a);
        }
        result
    }

    /// In-place addition modulo Q
    pub fn add_assign(&mut self, other: &Self) {
        for (a, &b) in self.coeffs.iter_mut().zip(&other.coeffs) {
            *a = add_mod::<M>(*a, b);
        }
    }

    /// Reference negacyclic convolution in O(N^2)
    ///
    /// Only meant as a cross-check for the NTT-based product in tests and
    /// benchmarks; production code multiplies through the NTT.
    pub fn schoolbook_mul(&self, other: &Self) -> Self {
        let n = M::N;
        let q = M::Q as u64;
        let mut acc = vec![0u64; n];

        for i in 0..n {
            for j in 0..n {
                let prod = self.coeffs[i] as u64 * other.coeffs[j] as u64 % q;
                let k = i + j;
                if k < n {
                    acc[k] = (acc[k] + prod) % q;
                } else {
                    // X^N = -1
                    acc[k - n] = (acc[k - n] + q - prod) % q;
                }
            }
        }

        Self {
            coeffs: acc.into_iter().map(|c| c as u32).collect(),
            _marker: PhantomData,
        }
    }
}

// Written by hand so the modulus marker needs no bounds of its own
impl<M: Modulus> Clone for Polynomial<M> {
    fn clone(&self) -> Self {
        Self {
            coeffs: self.coeffs.clone(),
            _marker: PhantomData,
        }
    }
}

impl<M: Modulus> PartialEq for Polynomial<M> {
    fn eq(&self, other: &Self) -> bool {
        self.coeffs == other.coeffs
    }
}

impl<M: Modulus> Eq for Polynomial<M> {}

impl<M: Modulus> fmt::Debug for Polynomial<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Polynomial")
            .field("coeffs", &self.coeffs)
            .finish()
    }
}

// Wipes in place and keeps all N slots, so a zeroized polynomial is zero
impl<M: Modulus> Zeroize for Polynomial<M> {
    fn zeroize(&mut self) {
        self.coeffs.as_mut_slice().zeroize();
    }
}

impl<M: Modulus> Add for &Polynomial<M> {
    type Output = Polynomial<M>;

    fn add(self, rhs: Self) -> Self::Output {
        Polynomial::add(self, rhs)
    }
}

impl<M: Modulus> Sub for &Polynomial<M> {
    type Output = Polynomial<M>;

    fn sub(self, rhs: Self) -> Self::Output {
        Polynomial::sub(self, rhs)
    }
}

impl<M: Modulus> Neg for &Polynomial<M> {
    type Output = Polynomial<M>;

    fn neg(self) -> Self::Output {
        Polynomial::neg(self)
    }
}
