//! Testing utilities for the latkem library
//!
//! Shared by the integration tests under `tests/`: the NIST known-answer
//! harness and the statistical timing tester.

pub mod suites;
