//! params.rs - Polynomial ring parameters with NTT support

use super::ntt::pow_mod;
use crate::error::{validate, Result};
use latkem_params::pqc::kyber::{KYBER_N, KYBER_NTT_LAYERS, KYBER_Q, KYBER_ZETA};

/// Basic trait defining the modulus and degree for a polynomial ring
pub trait Modulus {
    /// The primary modulus Q for coefficient arithmetic
    const Q: u32;

    /// The polynomial degree N (number of coefficients)
    const N: usize;

    /// Barrett multiplier floor(2^32 / Q)
    const BARRETT_MULTIPLIER: u64 = (1u64 << 32) / Self::Q as u64;
}

/// Extended trait for NTT-enabled moduli
///
/// The transform runs `NTT_LAYERS` butterfly layers and stops at residues of
/// degree `N >> NTT_LAYERS`. With `NTT_LAYERS = log2(N)` it is the complete
/// negacyclic NTT.
pub trait NttModulus: Modulus {
    /// Primitive 2^(NTT_LAYERS + 1)-th root of unity mod Q
    const ZETA: u32;

    /// Number of butterfly layers
    const NTT_LAYERS: u32;

    /// (2^NTT_LAYERS)^-1 mod Q for the final scaling in the inverse NTT
    const N_INV: u32;

    /// Number of coefficients in each residue left by the transform
    const BLOCK: usize = Self::N >> Self::NTT_LAYERS;
}

/// The Kyber ring Z_3329[X]/(X^256 + 1)
///
/// 3329 has no 512th root of unity, so the transform stops after 7 layers
/// and leaves 128 degree-one residues.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Kyber256Params;

impl Modulus for Kyber256Params {
    const Q: u32 = KYBER_Q as u32;
    const N: usize = KYBER_N;
}

impl NttModulus for Kyber256Params {
    const ZETA: u32 = KYBER_ZETA as u32;
    const NTT_LAYERS: u32 = KYBER_NTT_LAYERS;
    /// 128^-1 mod 3329
    const N_INV: u32 = 3303;
}

/// Returns true if `n` is a power of two
pub const fn is_power_of_two(n: usize) -> bool {
    n != 0 && (n & (n - 1)) == 0
}

/// Trial-division primality test, for validating moduli
const fn is_prime(n: u32) -> bool {
    if n < 2 {
        return false;
    }
    let mut d = 2;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

/// Checks the shape of the transform: power-of-two degree and a layer count
/// that leaves at least one coefficient per residue.
pub(crate) fn check_ntt_geometry<M: NttModulus>() -> Result<()> {
    validate::parameter(is_power_of_two(M::N), "N", "degree must be a power of two")?;
    validate::parameter(
        M::NTT_LAYERS >= 1 && M::NTT_LAYERS < usize::BITS && (M::N >> M::NTT_LAYERS) >= 1,
        "NTT_LAYERS",
        "layer count must be between 1 and log2(N)",
    )
}

/// Full validation of an NTT-friendly modulus
///
/// Verifies that the arithmetic in this module is sound for `M`: the modulus
/// is a prime below 2^16 (so products fit the Barrett reduction), `ZETA` has
/// multiplicative order exactly 2^(NTT_LAYERS + 1) and `N_INV` inverts
/// 2^NTT_LAYERS.
pub fn validate_ntt_modulus<M: NttModulus>() -> Result<()> {
    validate::parameter(M::Q > 2 && M::Q < (1 << 16), "Q", "modulus must lie in (2, 2^16)")?;
    validate::parameter(is_prime(M::Q), "Q", "modulus must be prime")?;
    check_ntt_geometry::<M>()?;
    validate::parameter(M::ZETA < M::Q, "ZETA", "root must be reduced mod Q")?;
    validate::parameter(
        pow_mod::<M>(M::ZETA, 1 << M::NTT_LAYERS) == M::Q - 1,
        "ZETA",
        "root must have order 2^(NTT_LAYERS + 1)",
    )?;

    let scale = pow_mod::<M>(2, M::NTT_LAYERS);
    validate::parameter(
        (M::N_INV as u64 * scale as u64) % M::Q as u64 == 1,
        "N_INV",
        "must invert 2^NTT_LAYERS mod Q",
    )
}
