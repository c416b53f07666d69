//! Serialization functions for Kyber data structures.
//!
//! Layouts follow FIPS 203:
//!
//! - public key: `ByteEncode12(t_hat) || rho`
//! - CPA secret key: `ByteEncode12(s_hat)`
//! - ciphertext: `ByteEncode_du(Compress_du(u)) || ByteEncode_dv(Compress_dv(v))`

use latkem_algorithms::error::Result as AlgoResult;
use latkem_algorithms::poly::serialize::{
    bytes_required, CoefficientPacker, CoefficientUnpacker, DefaultCoefficientSerde,
};
use latkem_algorithms::validate;
use latkem_params::pqc::kyber::KYBER_POLY_BITS;

use super::cpa_pke::{CpaCiphertextInner, CpaPublicKeyInner, CpaSecretKeyInner};
use super::params::{KyberParams, KyberPolyModParams, KYBER_N, KYBER_SYMBYTES};
use super::polyvec::{KyberPoly, PolyVec};

type Serde = DefaultCoefficientSerde;

/// `ByteEncode_d` of a single polynomial
fn encode_poly(poly: &KyberPoly, bits: usize) -> AlgoResult<Vec<u8>> {
    <Serde as CoefficientPacker<KyberPolyModParams>>::pack_coeffs(poly, bits)
}

/// `ByteDecode_d` of a single polynomial; rejects values `>= q`
fn decode_poly(bytes: &[u8], bits: usize) -> AlgoResult<KyberPoly> {
    <Serde as CoefficientUnpacker<KyberPolyModParams>>::unpack_coeffs(bytes, bits)
}

/// Concatenated `ByteEncode_d` of every polynomial of a vector
pub(crate) fn encode_polyvec<P: KyberParams>(pv: &PolyVec<P>, bits: usize) -> AlgoResult<Vec<u8>> {
    let mut out = Vec::with_capacity(P::K * bytes_required(KYBER_N, bits));
    for poly in &pv.polys {
        out.extend_from_slice(&encode_poly(poly, bits)?);
    }
    Ok(out)
}

/// Inverse of [`encode_polyvec`]
pub(crate) fn decode_polyvec<P: KyberParams>(bytes: &[u8], bits: usize) -> AlgoResult<PolyVec<P>> {
    let per_poly = bytes_required(KYBER_N, bits);
    validate::length("decode_polyvec", bytes.len(), P::K * per_poly)?;

    let polys = bytes
        .chunks_exact(per_poly)
        .map(|chunk| decode_poly(chunk, bits))
        .collect::<AlgoResult<Vec<_>>>()?;
    PolyVec::from_polys(polys)
}

/// Pack public key
pub(crate) fn pack_pk<P: KyberParams>(pk: &CpaPublicKeyInner<P>) -> AlgoResult<Vec<u8>> {
    let (t_hat, rho) = pk;
    let mut packed = Vec::with_capacity(P::PUBLIC_KEY_BYTES);
    packed.extend_from_slice(&encode_polyvec(t_hat, KYBER_POLY_BITS)?);
    packed.extend_from_slice(rho);
    Ok(packed)
}

/// Unpack public key
///
/// Fails if any encoded coefficient of `t_hat` is not below q.
pub(crate) fn unpack_pk<P: KyberParams>(bytes: &[u8]) -> AlgoResult<CpaPublicKeyInner<P>> {
    validate::length("unpack_pk", bytes.len(), P::PUBLIC_KEY_BYTES)?;

    let (t_bytes, rho_bytes) = bytes.split_at(P::POLYVEC_BYTES);
    let t_hat = decode_polyvec::<P>(t_bytes, KYBER_POLY_BITS)?;

    let mut rho = [0u8; KYBER_SYMBYTES];
    rho.copy_from_slice(rho_bytes);

    Ok((t_hat, rho))
}

/// Pack the CPA secret key
pub(crate) fn pack_sk<P: KyberParams>(sk: &CpaSecretKeyInner<P>) -> AlgoResult<Vec<u8>> {
    encode_polyvec(sk, KYBER_POLY_BITS)
}

/// Unpack the CPA secret key
pub(crate) fn unpack_sk<P: KyberParams>(bytes: &[u8]) -> AlgoResult<CpaSecretKeyInner<P>> {
    decode_polyvec(bytes, KYBER_POLY_BITS)
}

/// Compress and pack a ciphertext
pub(crate) fn pack_ciphertext<P: KyberParams>(u: &PolyVec<P>, v: &KyberPoly) -> AlgoResult<Vec<u8>> {
    let mut packed = Vec::with_capacity(P::CIPHERTEXT_BYTES);
    packed.extend_from_slice(&encode_polyvec(&u.compress(P::DU)?, P::DU)?);
    packed.extend_from_slice(&encode_poly(&v.compress(P::DV)?, P::DV)?);
    Ok(packed)
}

/// Unpack and decompress a ciphertext
///
/// Only the length is checked; every bit pattern of the right length decodes.
pub(crate) fn unpack_ciphertext<P: KyberParams>(bytes: &[u8]) -> AlgoResult<CpaCiphertextInner<P>> {
    validate::length("unpack_ciphertext", bytes.len(), P::CIPHERTEXT_BYTES)?;

    let (u_bytes, v_bytes) = bytes.split_at(P::CIPHERTEXT_U_BYTES);
    let u = decode_polyvec::<P>(u_bytes, P::DU)?.decompress(P::DU)?;
    let v = decode_poly(v_bytes, P::DV)?.decompress(P::DV)?;

    Ok((u, v))
}
