//! Shared test infrastructure.


/// Test harness helpers.
pub mod harness;
