//! `AArch64` instruction decoder library.
//!
//! This crate turns raw 32-bit A64 encodings into a closed, strongly-typed
//! instruction model with the following layers:
//! 1. **Common:** Bit-field extraction, register references, and error types.
//! 2. **ISA:** The decode tree, per-format decoders, disassembly, and the execution hand-off.
//! 3. **Image:** Little-endian word streams, listings, and ELF text-section loading.
//! 4. **Configuration:** Serde-backed settings for listing and image decoding.
//!
//! Decoding is a pure function; every word yields exactly one [`Instruction`].
//!
//! ```
//! use a64dec_core::decode;
//!
//! assert_eq!(decode(0x913f_fc21).to_string(), "ADD X1, X1, #4095");
//! ```

/// Common types (bit-field extraction, registers, errors).
pub mod common;
/// Decoder and listing configuration (defaults and JSON deserialization).
pub mod config;
/// Instruction-stream decoding, listings, and ELF loading.
pub mod image;
/// Instruction set (decode tree, format decoders, model, disassembly).
pub mod isa;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Decodes one 32-bit word.
pub use crate::isa::decode::decode;
/// The decoded instruction model.
pub use crate::isa::instruction::Instruction;
