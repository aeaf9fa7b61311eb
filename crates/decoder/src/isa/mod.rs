//! A64 Instruction Set Architecture.
//!
//! Decoding is organized as a tree that mirrors the architecture's own
//! encoding index:
//!
//! * `decode`: Top-level dispatch on `op0[28:25]`.
//! * `dpimm`: Data processing with immediate operands.
//! * `branch`: Branches, exception generation and system instructions.
//! * `table`: Ordered wildcard tables used where a flat match is not enough.
//!
//! The results are values of [`instruction::Instruction`], rendered by
//! `disasm` and handed to consumers through [`exec::Executor`].

/// Branch, exception generation and system decoding.
pub mod branch;

/// A64 condition codes.
pub mod cond;

/// Top-level decode tree.
pub mod decode;

/// Instruction disassembler for listings and diagnostics.
pub mod disasm;

/// Data processing (immediate) decoding.
pub mod dpimm;

/// Execution hand-off trait.
pub mod exec;

/// The decoded instruction model.
pub mod instruction;

/// Ordered wildcard dispatch tables.
pub mod table;
