//! Constant values for the latkem library
//!
//! Every size and ring constant the other crates need lives here, so that a
//! parameter set is described in exactly one place.

#![no_std]

pub mod pqc;
