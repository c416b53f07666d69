//! Generic Polynomial Engine
//!
//! Ring arithmetic over `Z_Q[X]/(X^N + 1)` parameterized by a [`params::Modulus`]
//! type: NTT, samplers, bit packing and lossy compression. Everything here is
//! independent of the KEM built on top of it.

pub mod compress;
pub mod ntt;
pub mod params;
pub mod polynomial;
pub mod sampling;
pub mod serialize;

/// Prelude for easy importing of common polynomial types and traits.
pub mod prelude {
    pub use super::compress::{decode_message, encode_message};
    pub use super::ntt::{barrett_reduce, basemul, csubq, InverseNttOperator, NttOperator};
    pub use super::params::{Kyber256Params, Modulus, NttModulus};
    pub use super::polynomial::Polynomial;
    pub use super::sampling::{CbdSampler, DefaultSamplers, UniformSampler};
    pub use super::serialize::{CoefficientPacker, CoefficientUnpacker, DefaultCoefficientSerde};
}
