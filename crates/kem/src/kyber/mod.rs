//! Kyber Key Encapsulation Mechanism (KEM).
//!
//! Kyber-768 as standardized in FIPS 203 (ML-KEM-768): an IND-CPA lattice
//! encryption scheme lifted to an IND-CCA2 KEM by the Fujisaki-Okamoto
//! transform with implicit rejection.

mod params;
mod polyvec; // PolyVec and the public matrix
mod serialize; // Byte layouts of keys and ciphertexts
mod cpa_pke; // K-PKE
mod ind_cca; // Fujisaki-Okamoto transform
mod kem; // KyberKem and the api::Kem implementation

mod kyber768;

pub use self::kyber768::Kyber768;

pub use self::kem::{KyberCiphertext, KyberKem, KyberPublicKey, KyberSecretKey, KyberSharedSecret};

pub use self::params::{
    validate_params, Kyber768ParamsImpl, KyberParams, KYBER_N, KYBER_Q, KYBER_SS_BYTES,
    KYBER_SYMBYTES,
};
