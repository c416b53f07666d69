//! Common implementations shared across the latkem crates
//!
//! Currently this is the home of the zeroizing secret containers that back
//! secret keys and shared secrets.

pub mod security;

// Re-export core security types
pub use security::{SecretBuffer, SecretVec};
