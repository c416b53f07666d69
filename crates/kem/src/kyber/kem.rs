//! Kyber KEM types and the `api::Kem` implementation.

use core::fmt;
use core::marker::PhantomData;

use latkem_algorithms::error::Error as PrimitiveError;
use latkem_api::error::{validate as api_validate, Error as ApiError, Result as ApiResult};
use latkem_api::{Kem as KemTrait, Serialize, SerializeSecret};
use latkem_common::{SecretBuffer, SecretVec};
use latkem_internal::constant_time::ct_eq;
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, Zeroizing};

use super::ind_cca::{h_func, kem_decaps, kem_encaps_derand, kem_keygen_derand, split_secret_key};
use super::params::{validate_params, KyberParams, KYBER_SS_BYTES, KYBER_SYMBYTES};
use super::serialize::{unpack_pk, unpack_sk};
use crate::error::{validate, Result as KemResult};

/// Encoded Kyber public key, `ByteEncode12(t_hat) || rho`.
///
/// Only obtainable from key generation or `from_bytes`, which performs the
/// FIPS 203 modulus check.
pub struct KyberPublicKey<P: KyberParams> {
    bytes: Vec<u8>,
    _params: PhantomData<P>,
}

/// Encoded Kyber secret key, `ByteEncode12(s_hat) || pk || H(pk) || z`.
///
/// Wiped on drop; `Debug` does not print its contents.
pub struct KyberSecretKey<P: KyberParams> {
    bytes: SecretVec,
    _params: PhantomData<P>,
}

/// Kyber ciphertext, `Compress_du(u) || Compress_dv(v)` in packed form.
pub struct KyberCiphertext<P: KyberParams> {
    bytes: Vec<u8>,
    _params: PhantomData<P>,
}

/// 32-byte shared secret, wiped on drop.
#[derive(Clone, Debug, PartialEq, Eq, Zeroize)]
pub struct KyberSharedSecret(SecretBuffer<KYBER_SS_BYTES>);

impl<P: KyberParams> KyberPublicKey<P> {
    fn from_validated(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            _params: PhantomData,
        }
    }

    /// Length of the encoding in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false; present for symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl<P: KyberParams> KyberSecretKey<P> {
    fn from_validated(bytes: SecretVec) -> Self {
        Self {
            bytes,
            _params: PhantomData,
        }
    }

    /// The public key embedded in this secret key.
    pub fn public_key(&self) -> KyberPublicKey<P> {
        let parts = split_secret_key::<P>(self.bytes.as_slice());
        KyberPublicKey::from_validated(parts.pk.to_vec())
    }
}

impl<P: KyberParams> KyberCiphertext<P> {
    fn from_validated(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            _params: PhantomData,
        }
    }

    /// Length of the encoding in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false; present for symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl KyberSharedSecret {
    fn new(bytes: &[u8; KYBER_SS_BYTES]) -> Self {
        Self(SecretBuffer::new(*bytes))
    }

    /// Raw bytes of the secret.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_slice()
    }
}

// Trait boilerplate that must not require bounds on the marker type

impl<P: KyberParams> Clone for KyberPublicKey<P> {
    fn clone(&self) -> Self {
        Self::from_validated(self.bytes.clone())
    }
}

impl<P: KyberParams> Clone for KyberSecretKey<P> {
    fn clone(&self) -> Self {
        Self::from_validated(self.bytes.clone())
    }
}

impl<P: KyberParams> Clone for KyberCiphertext<P> {
    fn clone(&self) -> Self {
        Self::from_validated(self.bytes.clone())
    }
}

impl<P: KyberParams> PartialEq for KyberPublicKey<P> {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl<P: KyberParams> Eq for KyberPublicKey<P> {}

// Constant-time through SecretVec
impl<P: KyberParams> PartialEq for KyberSecretKey<P> {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl<P: KyberParams> Eq for KyberSecretKey<P> {}

impl<P: KyberParams> PartialEq for KyberCiphertext<P> {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl<P: KyberParams> Eq for KyberCiphertext<P> {}

impl<P: KyberParams> fmt::Debug for KyberPublicKey<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KyberPublicKey")
            .field("algorithm", &P::NAME)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl<P: KyberParams> fmt::Debug for KyberSecretKey<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KyberSecretKey<{}>([REDACTED])", P::NAME)
    }
}

impl<P: KyberParams> fmt::Debug for KyberCiphertext<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KyberCiphertext")
            .field("algorithm", &P::NAME)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl<P: KyberParams> Zeroize for KyberSecretKey<P> {
    fn zeroize(&mut self) {
        self.bytes.zeroize();
    }
}

impl<P: KyberParams> AsRef<[u8]> for KyberPublicKey<P> {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl<P: KyberParams> AsRef<[u8]> for KyberCiphertext<P> {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

// Ciphertext content is never validated, so mutation cannot break an invariant
impl<P: KyberParams> AsMut<[u8]> for KyberCiphertext<P> {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }
}

impl AsRef<[u8]> for KyberSharedSecret {
    fn as_ref(&self) -> &[u8] {
        self.0.as_slice()
    }
}

/// FIPS 203 modulus check on an encoded public key of the right length
///
/// Only an out-of-range coefficient makes the key invalid; any other decode
/// failure is passed through unchanged.
pub(super) fn check_public_key<P: KyberParams>(bytes: &[u8]) -> KemResult<()> {
    match unpack_pk::<P>(bytes) {
        Ok(_) => Ok(()),
        Err(PrimitiveError::CoefficientRange { .. }) => {
            log::warn!("{}: public key coefficient not reduced mod q", P::NAME);
            validate::key(false, "public", "coefficient of t_hat not reduced mod q")
        }
        Err(e) => Err(e.into()),
    }
}

/// FIPS 203 hash check plus decodability of an encoded secret key
fn check_secret_key<P: KyberParams>(bytes: &[u8]) -> KemResult<()> {
    let parts = split_secret_key::<P>(bytes);
    check_public_key::<P>(parts.pk)?;

    let hash_matches = ct_eq(h_func(parts.pk), parts.h_pk);
    if !hash_matches {
        log::warn!("{}: secret key fails the public key hash check", P::NAME);
    }
    validate::key(hash_matches, "secret", "embedded public key hash mismatch")?;

    match unpack_sk::<P>(parts.s_hat).map(Zeroizing::new) {
        Ok(_) => Ok(()),
        Err(PrimitiveError::CoefficientRange { .. }) => {
            validate::key(false, "secret", "coefficient of s_hat not reduced mod q")
        }
        Err(e) => Err(e.into()),
    }
}

impl<P: KyberParams> Serialize for KyberPublicKey<P> {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        validate_params::<P>()?;
        api_validate::length("Kyber public key", bytes.len(), P::PUBLIC_KEY_BYTES)?;
        check_public_key::<P>(bytes)?;
        Ok(Self::from_validated(bytes.to_vec()))
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }
}

impl<P: KyberParams> SerializeSecret for KyberSecretKey<P> {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        validate_params::<P>()?;
        api_validate::length("Kyber secret key", bytes.len(), P::SECRET_KEY_BYTES)?;
        check_secret_key::<P>(bytes)?;
        Ok(Self::from_validated(SecretVec::from_slice(bytes)))
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.bytes.as_slice().to_vec())
    }
}

impl<P: KyberParams> Serialize for KyberCiphertext<P> {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        validate_params::<P>()?;
        api_validate::length("Kyber ciphertext", bytes.len(), P::CIPHERTEXT_BYTES)?;
        Ok(Self::from_validated(bytes.to_vec()))
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }
}

impl SerializeSecret for KyberSharedSecret {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        SecretBuffer::from_slice(bytes)
            .map(Self)
            .ok_or(ApiError::InvalidLength {
                context: "Kyber shared secret",
                expected: KYBER_SS_BYTES,
                actual: bytes.len(),
            })
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.as_slice().to_vec())
    }
}

/// Generic Kyber KEM over a parameter set.
pub struct KyberKem<P: KyberParams> {
    _params: PhantomData<P>,
}

impl<P: KyberParams> KyberKem<P> {
    /// Deterministic key generation from the 32-byte seeds `d` and `z`.
    pub fn keypair_derand(
        d: &[u8; KYBER_SYMBYTES],
        z: &[u8; KYBER_SYMBYTES],
    ) -> ApiResult<(KyberPublicKey<P>, KyberSecretKey<P>)> {
        validate_params::<P>()?;
        log::trace!("{}: key generation", P::NAME);

        let (pk, sk) = kem_keygen_derand::<P>(d, z)?;
        log::debug!(
            "{}: generated public key of {} bytes and secret key of {} bytes",
            P::NAME,
            pk.len(),
            sk.len()
        );

        Ok((
            KyberPublicKey::from_validated(pk),
            KyberSecretKey::from_validated(SecretVec::from_slice(&sk)),
        ))
    }

    /// Deterministic encapsulation of the 32-byte message `m`.
    pub fn encapsulate_derand(
        public_key: &KyberPublicKey<P>,
        m: &[u8; KYBER_SYMBYTES],
    ) -> ApiResult<(KyberCiphertext<P>, KyberSharedSecret)> {
        validate_params::<P>()?;
        log::trace!("{}: encapsulation", P::NAME);

        let (ct, ss) = kem_encaps_derand::<P>(&public_key.bytes, m)?;
        log::debug!("{}: produced ciphertext of {} bytes", P::NAME, ct.len());

        Ok((KyberCiphertext::from_validated(ct), KyberSharedSecret::new(&ss)))
    }
}

impl<P: KyberParams> KemTrait for KyberKem<P> {
    type PublicKey = KyberPublicKey<P>;
    type SecretKey = KyberSecretKey<P>;
    type SharedSecret = KyberSharedSecret;
    type Ciphertext = KyberCiphertext<P>;
    type KeyPair = (Self::PublicKey, Self::SecretKey);

    fn name() -> &'static str {
        P::NAME
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        let mut d = Zeroizing::new([0u8; KYBER_SYMBYTES]);
        let mut z = Zeroizing::new([0u8; KYBER_SYMBYTES]);
        rng.fill_bytes(d.as_mut_slice());
        rng.fill_bytes(z.as_mut_slice());
        Self::keypair_derand(&d, &z)
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.0.clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.1.clone()
    }

    fn encapsulate<R: CryptoRng + RngCore>(
        rng: &mut R,
        public_key: &Self::PublicKey,
    ) -> ApiResult<(Self::Ciphertext, Self::SharedSecret)> {
        let mut m = Zeroizing::new([0u8; KYBER_SYMBYTES]);
        rng.fill_bytes(m.as_mut_slice());
        Self::encapsulate_derand(public_key, &m)
    }

    fn decapsulate(
        secret_key: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> ApiResult<Self::SharedSecret> {
        validate_params::<P>()?;
        log::trace!("{}: decapsulation", P::NAME);

        let ss = kem_decaps::<P>(secret_key.bytes.as_slice(), &ciphertext.bytes)?;
        Ok(KyberSharedSecret::new(&ss))
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::*;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    impl<P: KyberParams> serde::Serialize for KyberPublicKey<P> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_bytes(&self.bytes)
        }
    }

    impl<'de, P: KyberParams> Deserialize<'de> for KyberPublicKey<P> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let bytes = Vec::<u8>::deserialize(deserializer)?;
            <Self as Serialize>::from_bytes(&bytes).map_err(D::Error::custom)
        }
    }

    impl<P: KyberParams> serde::Serialize for KyberCiphertext<P> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_bytes(&self.bytes)
        }
    }

    impl<'de, P: KyberParams> Deserialize<'de> for KyberCiphertext<P> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let bytes = Vec::<u8>::deserialize(deserializer)?;
            <Self as Serialize>::from_bytes(&bytes).map_err(D::Error::custom)
        }
    }
}
