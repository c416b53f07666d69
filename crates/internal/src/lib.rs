//! Internal utilities for the latkem library
//!
//! Not part of the public API. Other latkem crates use these helpers for
//! comparisons and selections that involve secret data.

pub mod constant_time;
