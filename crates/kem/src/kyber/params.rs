//! Kyber parameter definitions.
//!
//! A parameter set is a type implementing [`KyberParams`]. The byte sizes it
//! declares are checked against the sizes implied by its rank and compression
//! widths by [`validate_params`] before any operation runs.

use latkem_algorithms::poly::compress::MAX_COMPRESSION_BITS;
use latkem_algorithms::poly::params::{validate_ntt_modulus, Kyber256Params, Modulus};
use latkem_algorithms::poly::serialize::bytes_required;
use latkem_params::pqc::kyber as global_params;

use crate::error::{validate, Result};

/// Common Kyber polynomial degree.
pub const KYBER_N: usize = global_params::KYBER_N;
/// Common Kyber coefficient modulus.
pub const KYBER_Q: u32 = global_params::KYBER_Q as u32;
/// Shared secret size for all Kyber variants.
pub const KYBER_SS_BYTES: usize = global_params::KYBER_SS_BYTES;
/// Size of seeds, messages and hash outputs.
pub const KYBER_SYMBYTES: usize = global_params::KYBER_SYMBYTES;
/// Bytes of one polynomial in the uncompressed 12-bit encoding.
pub const KYBER_POLY_BYTES: usize = bytes_required(KYBER_N, global_params::KYBER_POLY_BITS);

/// Ring used by every Kyber parameter set: Z_3329[X]/(X^256 + 1).
pub type KyberPolyModParams = Kyber256Params;

/// Trait defining parameters for a specific Kyber variant.
pub trait KyberParams: Send + Sync + 'static {
    /// Security parameter k (dimension of vectors/matrices).
    const K: usize;
    /// Noise parameter eta1 for secret s, e and r.
    const ETA1: u8;
    /// Noise parameter eta2 for error e1, e2.
    const ETA2: u8;
    /// Compression bits for vector u (part of ciphertext).
    const DU: usize;
    /// Compression bits for polynomial v (part of ciphertext).
    const DV: usize;

    /// Algorithm name string.
    const NAME: &'static str;
    /// Size of the public key in bytes.
    const PUBLIC_KEY_BYTES: usize;
    /// Size of the secret key in bytes.
    const SECRET_KEY_BYTES: usize;
    /// Size of the ciphertext in bytes.
    const CIPHERTEXT_BYTES: usize;

    /// Bytes of a 12-bit encoded polynomial vector.
    const POLYVEC_BYTES: usize = Self::K * KYBER_POLY_BYTES;
    /// Bytes of the compressed vector u.
    const CIPHERTEXT_U_BYTES: usize = Self::K * bytes_required(KYBER_N, Self::DU);
    /// Bytes of the compressed polynomial v.
    const CIPHERTEXT_V_BYTES: usize = bytes_required(KYBER_N, Self::DV);
}

/// Kyber-768 (ML-KEM-768), NIST security category 3.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Kyber768ParamsImpl;

impl KyberParams for Kyber768ParamsImpl {
    const K: usize = global_params::KYBER768.k;
    const ETA1: u8 = global_params::KYBER768.eta1;
    const ETA2: u8 = global_params::KYBER768.eta2;
    const DU: usize = global_params::KYBER768.du;
    const DV: usize = global_params::KYBER768.dv;
    const NAME: &'static str = "Kyber-768";
    const PUBLIC_KEY_BYTES: usize = global_params::KYBER768.public_key_size;
    const SECRET_KEY_BYTES: usize = global_params::KYBER768.secret_key_size;
    const CIPHERTEXT_BYTES: usize = global_params::KYBER768.ciphertext_size;
}

/// Checks that a parameter set is usable.
///
/// Rank and noise parameters must be in range, the compression widths must
/// be supported, the declared sizes must match the wire layout, and the ring
/// must support the NTT. Every KEM entry point calls this first.
pub fn validate_params<P: KyberParams>() -> Result<()> {
    let name = P::NAME;
    let checked = check_params::<P>();
    if checked.is_err() {
        log::error!("{}: parameter set failed validation", name);
    }
    checked
}

fn check_params<P: KyberParams>() -> Result<()> {
    let name = P::NAME;

    validate::parameter_set(
        (1..=4).contains(&P::K),
        name,
        "module rank must be between 1 and 4",
    )?;
    validate::parameter_set(
        (1..=3).contains(&P::ETA1) && (1..=3).contains(&P::ETA2),
        name,
        "noise parameters must be between 1 and 3",
    )?;
    validate::parameter_set(
        (1..=MAX_COMPRESSION_BITS).contains(&P::DU) && (1..=MAX_COMPRESSION_BITS).contains(&P::DV),
        name,
        "compression widths must be between 1 and 11",
    )?;
    validate::parameter_set(
        KyberPolyModParams::N == KYBER_N && KyberPolyModParams::Q == KYBER_Q,
        name,
        "ring does not match the Kyber constants",
    )?;
    validate::parameter_set(
        P::PUBLIC_KEY_BYTES == P::POLYVEC_BYTES + KYBER_SYMBYTES,
        name,
        "public key size does not match the encoding",
    )?;
    validate::parameter_set(
        P::SECRET_KEY_BYTES == P::POLYVEC_BYTES + P::PUBLIC_KEY_BYTES + 2 * KYBER_SYMBYTES,
        name,
        "secret key size does not match the encoding",
    )?;
    validate::parameter_set(
        P::CIPHERTEXT_BYTES == P::CIPHERTEXT_U_BYTES + P::CIPHERTEXT_V_BYTES,
        name,
        "ciphertext size does not match the encoding",
    )?;

    validate_ntt_modulus::<KyberPolyModParams>()?;
    Ok(())
}
