//! Constants for the Kyber key encapsulation mechanism (ML-KEM, FIPS 203)

/// Kyber polynomial degree
pub const KYBER_N: usize = 256;

/// Kyber modulus
pub const KYBER_Q: u16 = 3329;

/// Primitive 256th root of unity modulo `KYBER_Q`
pub const KYBER_ZETA: u16 = 17;

/// Number of NTT layers; the transform stops at degree-one residues
pub const KYBER_NTT_LAYERS: u32 = 7;

/// Bits per coefficient in the uncompressed encoding
pub const KYBER_POLY_BITS: usize = 12;

/// Size of the seeds, hashes and messages used by the scheme
pub const KYBER_SYMBYTES: usize = 32;

/// Size of the shared secret in bytes
pub const KYBER_SS_BYTES: usize = 32;

/// Structure containing the parameters of one Kyber security level
pub struct KyberParamSet {
    /// Polynomial degree
    pub n: usize,

    /// Modulus
    pub q: u16,

    /// Module rank (number of polynomials per vector)
    pub k: usize,

    /// CBD parameter for the secret and key-generation noise
    pub eta1: u8,

    /// CBD parameter for the encryption noise
    pub eta2: u8,

    /// Compression bits for the ciphertext vector u
    pub du: usize,

    /// Compression bits for the ciphertext polynomial v
    pub dv: usize,

    /// Size of public key in bytes
    pub public_key_size: usize,

    /// Size of secret key in bytes
    pub secret_key_size: usize,

    /// Size of ciphertext in bytes
    pub ciphertext_size: usize,

    /// Size of shared secret in bytes
    pub shared_secret_size: usize,
}

/// Kyber-768 parameters
pub const KYBER768: KyberParamSet = KyberParamSet {
    n: KYBER_N,
    q: KYBER_Q,
    k: 3,
    eta1: 2,
    eta2: 2,
    du: 10,
    dv: 4,
    public_key_size: 1184,
    secret_key_size: 2400,
    ciphertext_size: 1088,
    shared_secret_size: KYBER_SS_BYTES,
};
