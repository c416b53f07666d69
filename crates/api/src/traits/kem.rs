// File: crates/api/src/traits/kem.rs

//! Trait definition for Key Encapsulation Mechanisms (KEM)
//!
//! Randomness is always injected by the caller. Implementations must not
//! reach for a global generator, so that every operation can be replayed
//! from a seeded RNG in tests.

use super::serialize::{Serialize, SerializeSecret};
use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Trait for Key Encapsulation Mechanism (KEM) with domain-specific types.
pub trait Kem {
    /// Public key type.
    ///
    /// `Serialize::from_bytes` is where public keys are validated.
    type PublicKey: Clone + Serialize;

    /// Secret key type. Zeroized on drop by implementations.
    type SecretKey: Zeroize + Clone + SerializeSecret;

    /// Shared secret type. Should be turned into application keys right away.
    type SharedSecret: Zeroize + Clone + SerializeSecret;

    /// Ciphertext type for the encapsulated key.
    type Ciphertext: Clone + Serialize;

    /// Keypair type. An intermediate value without a serialization contract.
    type KeyPair: Clone;

    /// Returns the KEM algorithm name.
    fn name() -> &'static str;

    /// Generate a new keypair from the provided CSPRNG.
    ///
    /// Returns an error only if the parameter set is misconfigured.
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::KeyPair>;

    /// Extract public key from keypair.
    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey;

    /// Extract secret key from keypair.
    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey;

    /// Encapsulate a shared secret to the recipient's public key.
    ///
    /// Succeeds for every public key that passed `from_bytes`; an error
    /// means the parameter set is misconfigured.
    fn encapsulate<R: CryptoRng + RngCore>(
        rng: &mut R,
        public_key: &Self::PublicKey,
    ) -> Result<(Self::Ciphertext, Self::SharedSecret)>;

    /// Decapsulate a shared secret with the secret key.
    ///
    /// Must run in constant time and use implicit rejection: an invalid
    /// ciphertext yields a pseudorandom secret, not an error.
    fn decapsulate(
        secret_key: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> Result<Self::SharedSecret>;
}
