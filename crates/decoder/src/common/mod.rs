//! Common utilities and types shared by the decoder layers.
//!
//! This module provides:
//! 1. **Bit Fields:** Zero- and sign-extending field extraction over 32- and 64-bit words.
//! 2. **Registers:** The `Reg` index type and its contextual naming.
//! 3. **Error Handling:** Boundary errors for byte streams, object files, and configuration.

/// Bit-field extraction primitives.
pub mod bits;

/// Error types for the I/O and configuration boundaries.
pub mod error;

/// General-purpose register references.
pub mod reg;

pub use bits::BitField;
pub use error::{ConfigError, DecodeError, LoaderError};
pub use reg::Reg;
