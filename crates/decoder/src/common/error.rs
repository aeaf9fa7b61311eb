//! Boundary error definitions.
//!
//! Decoding a word never fails: reserved encodings are ordinary
//! [`Instruction::Unallocated`](crate::isa::instruction::Instruction::Unallocated)
//! values. The errors here cover the edges of the crate instead:
//! 1. **Byte streams:** Slices that do not hold whole 32-bit words.
//! 2. **Object files:** Unreadable files, malformed ELF data, or non-`AArch64` machines.
//! 3. **Configuration:** JSON that does not match the configuration schema.

use std::io;

use object::Architecture;
use thiserror::Error;

/// Errors raised when turning raw bytes into instruction words.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// A single-word decode was given a slice that is not exactly four bytes.
    #[error("expected a 4-byte instruction word, got {len} bytes")]
    WordLength {
        /// Length of the slice that was supplied.
        len: usize,
    },

    /// An image ended partway through an instruction word.
    #[error("{remainder} trailing bytes at offset {offset:#x} do not form an instruction word")]
    TrailingBytes {
        /// Byte offset of the incomplete word.
        offset: usize,
        /// Number of leftover bytes (1-3).
        remainder: usize,
    },
}

/// Errors raised while extracting executable sections from an object file.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// The file could not be read.
    #[error("could not read object file: {0}")]
    Io(#[from] io::Error),

    /// The data is not a well-formed 64-bit ELF object.
    #[error("malformed object file: {0}")]
    Object(#[from] object::read::Error),

    /// The object targets a machine other than `AArch64`.
    #[error("unsupported architecture {0:?}, expected Aarch64")]
    UnsupportedArchitecture(Architecture),

    /// The object holds no executable sections with file data.
    #[error("object file has no executable sections")]
    NoExecutableSections,

    /// A section's contents could not be split into instruction words.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Errors raised while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON text does not deserialize into [`Config`](crate::config::Config).
    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
}
