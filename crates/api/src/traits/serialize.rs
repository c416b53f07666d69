// File: crates/api/src/traits/serialize.rs

//! Byte encodings of keys, ciphertexts and shared secrets.

use crate::Result;
use zeroize::Zeroizing;

/// Public values with a fixed wire format.
///
/// `from_bytes` is the validation boundary: anything it accepts is safe to
/// hand to the KEM operations.
pub trait Serialize: Sized {
    /// Parses and validates the wire encoding.
    fn from_bytes(bytes: &[u8]) -> Result<Self>;
    /// Returns the wire encoding.
    fn to_bytes(&self) -> Vec<u8>;
}

/// Secret values whose encodings must not outlive their use.
pub trait SerializeSecret: Sized {
    /// Parses and validates the encoding. The caller owns wiping `bytes`.
    fn from_bytes(bytes: &[u8]) -> Result<Self>;
    /// Returns the encoding in a buffer that is wiped on drop.
    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>>;
}
