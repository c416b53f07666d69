//! Kyber IND-CCA2 KEM construction using the Fujisaki-Okamoto transform.
//!
//! Follows ML-KEM (FIPS 203): the shared secret comes straight out of
//! `G(m || H(pk))`, and a failed re-encryption check substitutes the
//! implicit-rejection secret `J(z || c)`.

use latkem_algorithms::error::Result as AlgoResult;
use latkem_algorithms::hash::{HashFunction, Sha3_256, Sha3_512};
use latkem_algorithms::xof::{ExtendableOutputFunction, ShakeXof256};
use latkem_internal::constant_time::{ct_eq_choice, ct_select};
use zeroize::{Zeroize, Zeroizing};

use super::cpa_pke::{decrypt_cpa, encrypt_cpa, keypair_cpa};
use super::params::{KyberParams, KYBER_SS_BYTES, KYBER_SYMBYTES};
use super::serialize::{pack_pk, pack_sk, unpack_ciphertext, unpack_pk, unpack_sk};
use crate::error::{validate, Result};

// Type definitions for IND-CCA2 KEM
pub(crate) type IndCcaPublicKeyBytes = Vec<u8>;
pub(crate) type IndCcaSecretKeyBytes = Zeroizing<Vec<u8>>;
pub(crate) type IndCcaCiphertextBytes = Vec<u8>;
pub(crate) type SharedSecretBytes = Zeroizing<[u8; KYBER_SS_BYTES]>;

/// Views into the four fields of an encoded secret key.
pub(crate) struct SecretKeyParts<'a> {
    pub s_hat: &'a [u8],
    pub pk: &'a [u8],
    pub h_pk: &'a [u8],
    pub z: &'a [u8],
}

/// Splits `ByteEncode12(s_hat) || pk || H(pk) || z`; the length must already
/// have been checked.
pub(crate) fn split_secret_key<P: KyberParams>(sk: &[u8]) -> SecretKeyParts<'_> {
    let (s_hat, rest) = sk.split_at(P::POLYVEC_BYTES);
    let (pk, rest) = rest.split_at(P::PUBLIC_KEY_BYTES);
    let (h_pk, z) = rest.split_at(KYBER_SYMBYTES);
    SecretKeyParts { s_hat, pk, h_pk, z }
}

// H: SHA3-256
pub(crate) fn h_func(data: &[u8]) -> [u8; KYBER_SYMBYTES] {
    Sha3_256::digest(data)
}

// G: SHA3-512, split into two 32-byte halves.
fn g_func(a: &[u8], b: &[u8]) -> (SharedSecretBytes, Zeroizing<[u8; KYBER_SYMBYTES]>) {
    let mut hasher = Sha3_512::new();
    hasher.update(a).update(b);
    let mut digest = hasher.finalize();

    let mut k = Zeroizing::new([0u8; KYBER_SS_BYTES]);
    let mut r = Zeroizing::new([0u8; KYBER_SYMBYTES]);
    k.copy_from_slice(&digest[..KYBER_SS_BYTES]);
    r.copy_from_slice(&digest[KYBER_SS_BYTES..]);
    digest.zeroize();
    (k, r)
}

// J: SHAKE256 with 32 bytes of output.
fn j_func(z: &[u8], ct: &[u8]) -> AlgoResult<[u8; KYBER_SS_BYTES]> {
    let mut xof = ShakeXof256::new();
    xof.update(z)?;
    xof.update(ct)?;
    let mut out = [0u8; KYBER_SS_BYTES];
    xof.squeeze(&mut out)?;
    Ok(out)
}

/// IND-CCA2 Key Generation from the seeds `d` and `z`
pub(crate) fn kem_keygen_derand<P: KyberParams>(
    d: &[u8; KYBER_SYMBYTES],
    z: &[u8; KYBER_SYMBYTES],
) -> Result<(IndCcaPublicKeyBytes, IndCcaSecretKeyBytes)> {
    // 1. CPA keypair
    let (pk_cpa, sk_cpa) = keypair_cpa::<P>(d)?;

    // 2. Encodings
    let pk_bytes = pack_pk::<P>(&pk_cpa)?;
    let sk_cpa_bytes = Zeroizing::new(pack_sk::<P>(&sk_cpa)?);

    // 3. sk = sk_cpa || pk || H(pk) || z
    let h_pk = h_func(&pk_bytes);
    let mut sk_bytes = Zeroizing::new(Vec::with_capacity(P::SECRET_KEY_BYTES));
    sk_bytes.extend_from_slice(&sk_cpa_bytes);
    sk_bytes.extend_from_slice(&pk_bytes);
    sk_bytes.extend_from_slice(&h_pk);
    sk_bytes.extend_from_slice(z);

    Ok((pk_bytes, sk_bytes))
}

/// IND-CCA2 Encapsulation of the message `m`
pub(crate) fn kem_encaps_derand<P: KyberParams>(
    pk_bytes: &[u8],
    m: &[u8; KYBER_SYMBYTES],
) -> Result<(IndCcaCiphertextBytes, SharedSecretBytes)> {
    // 1. (K, r) = G(m || H(pk))
    let h_pk = h_func(pk_bytes);
    let (k, r) = g_func(m, &h_pk);

    // 2. c = K-PKE.Encrypt(pk, m, r)
    let pk_cpa = unpack_pk::<P>(pk_bytes)?;
    let ct_bytes = encrypt_cpa::<P>(&pk_cpa, m, &r)?;

    Ok((ct_bytes, k))
}

/// IND-CCA2 Decapsulation
///
/// Returns the implicit-rejection secret when the re-encryption differs
/// from `ct_bytes`. Both candidates are always computed and the choice is
/// made without branching.
pub(crate) fn kem_decaps<P: KyberParams>(
    sk_bytes: &[u8],
    ct_bytes: &[u8],
) -> Result<SharedSecretBytes> {
    validate::key(sk_bytes.len() == P::SECRET_KEY_BYTES, "secret", "wrong length")?;
    validate::ciphertext(ct_bytes.len() == P::CIPHERTEXT_BYTES, P::NAME, "wrong length")?;
    let parts = split_secret_key::<P>(sk_bytes);

    // 1. m' = K-PKE.Decrypt(s_hat, c)
    let s_hat = Zeroizing::new(unpack_sk::<P>(parts.s_hat)?);
    let ct_cpa = unpack_ciphertext::<P>(ct_bytes)?;
    let m_prime = decrypt_cpa::<P>(&s_hat, &ct_cpa)?;

    // 2. (K', r') = G(m' || h)
    let (k_prime, r_prime) = g_func(&m_prime[..], parts.h_pk);

    // 3. K_bar = J(z || c)
    let k_bar = Zeroizing::new(j_func(parts.z, ct_bytes)?);

    // 4. c' = K-PKE.Encrypt(pk, m', r')
    let pk_cpa = unpack_pk::<P>(parts.pk)?;
    let ct_prime = encrypt_cpa::<P>(&pk_cpa, &m_prime, &r_prime)?;

    // 5. K' if c == c', K_bar otherwise
    let equal = ct_eq_choice(ct_bytes, &ct_prime);
    Ok(Zeroizing::new(ct_select(&*k_bar, &*k_prime, equal)))
}
