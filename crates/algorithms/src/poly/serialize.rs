//! serialize.rs - Polynomial coefficient packing and unpacking
//!
//! Coefficients are packed little-endian, least significant bit first, with
//! a fixed number of bits each (`ByteEncode_d` / `ByteDecode_d` in FIPS 203).
//! Packing runs through a shift accumulator and never branches on
//! coefficient values, so it is safe for secret polynomials.

use super::params::Modulus;
use super::polynomial::Polynomial;
use crate::error::{validate, Error, Result};

/// Largest supported width; wide enough for any modulus below 2^16
pub const MAX_BITS_PER_COEFF: usize = 16;

/// Trait for packing polynomial coefficients into a byte array
pub trait CoefficientPacker<M: Modulus> {
    /// Packs the polynomial's coefficients into a byte vector
    ///
    /// Every coefficient must fit in `bits_per_coeff` bits.
    fn pack_coeffs(poly: &Polynomial<M>, bits_per_coeff: usize) -> Result<Vec<u8>>;
}

/// Trait for unpacking polynomial coefficients from a byte array
pub trait CoefficientUnpacker<M: Modulus> {
    /// Unpacks coefficients from a byte slice into a new polynomial
    ///
    /// Fails on a length mismatch or if a decoded value is not below Q.
    fn unpack_coeffs(bytes: &[u8], bits_per_coeff: usize) -> Result<Polynomial<M>>;
}

/// Default implementation for coefficient serialization
pub struct DefaultCoefficientSerde;

/// Number of bytes needed to pack `n` coefficients of `bits` bits each
pub const fn bytes_required(n: usize, bits: usize) -> usize {
    (n * bits + 7) / 8
}

fn check_width(bits_per_coeff: usize) -> Result<()> {
    validate::parameter(
        (1..=MAX_BITS_PER_COEFF).contains(&bits_per_coeff),
        "bits_per_coeff",
        "must be between 1 and 16",
    )
}

impl<M: Modulus> CoefficientPacker<M> for DefaultCoefficientSerde {
    fn pack_coeffs(poly: &Polynomial<M>, bits_per_coeff: usize) -> Result<Vec<u8>> {
        check_width(bits_per_coeff)?;

        let coeffs = poly.as_coeffs_slice();
        let overflow = coeffs.iter().fold(0u32, |acc, &c| acc | (c >> bits_per_coeff));
        if overflow != 0 {
            return Err(Error::param(
                "coeffs",
                "coefficient does not fit the packing width",
            ));
        }

        let mut packed = Vec::with_capacity(bytes_required(M::N, bits_per_coeff));
        let mut acc: u64 = 0;
        let mut acc_bits = 0usize;

        for &coeff in coeffs {
            acc |= u64::from(coeff) << acc_bits;
            acc_bits += bits_per_coeff;
            while acc_bits >= 8 {
                packed.push(acc as u8);
                acc >>= 8;
                acc_bits -= 8;
            }
        }
        if acc_bits > 0 {
            packed.push(acc as u8);
        }

        Ok(packed)
    }
}

impl<M: Modulus> CoefficientUnpacker<M> for DefaultCoefficientSerde {
    fn unpack_coeffs(bytes: &[u8], bits_per_coeff: usize) -> Result<Polynomial<M>> {
        check_width(bits_per_coeff)?;
        validate::length(
            "unpack_coeffs",
            bytes.len(),
            bytes_required(M::N, bits_per_coeff),
        )?;

        let mask = (1u64 << bits_per_coeff) - 1;
        let mut coeffs = Vec::with_capacity(M::N);
        let mut acc: u64 = 0;
        let mut acc_bits = 0usize;

        for &byte in bytes {
            acc |= u64::from(byte) << acc_bits;
            acc_bits += 8;
            while acc_bits >= bits_per_coeff && coeffs.len() < M::N {
                coeffs.push((acc & mask) as u32);
                acc >>= bits_per_coeff;
                acc_bits -= bits_per_coeff;
            }
        }

        Polynomial::from_coeffs(&coeffs)
    }
}
