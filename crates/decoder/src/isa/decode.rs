//! A64 Instruction Decoder.
//!
//! Entry point of the decode tree. The top level inspects the four `op0` bits
//! at `[28:25]` and hands the word to a group decoder, which in turn splits
//! on its own sub-opcodes until a format decoder produces an
//! [`Instruction`]. Every 32-bit value reaches exactly one leaf.

use tracing::trace;

use crate::common::bits::BitField;
use crate::common::DecodeError;
use crate::isa::instruction::{Family, Instruction, UnallocatedReason};
use crate::isa::{branch, dpimm};

/// Width of an A64 instruction in bytes.
pub const WORD_BYTES: usize = 4;

/// Bit offset of the top-level `op0` field.
///
/// Format: `op0` occupies bits `[28:25]`; bits 31:29 and 24:0 belong to the
/// selected group.
const OP0_SHIFT: u32 = 25;

/// Width of the top-level `op0` field.
const OP0_BITS: u32 = 4;

/// Decodes one 32-bit A64 word.
///
/// Never fails: reserved encodings produce [`Instruction::Unallocated`] and
/// families without a format decoder produce [`Instruction::Unimplemented`].
///
/// | op0  | group |
/// |------|-------|
/// | 00xx | unallocated |
/// | 100x | data processing (immediate) |
/// | 101x | branches, exception generation, system |
/// | x1x0 | loads and stores |
/// | x101 | data processing (register) |
/// | x111 | data processing (SIMD&FP) |
pub fn decode(inst: u32) -> Instruction {
    let op0 = inst.unsigned(OP0_SHIFT, OP0_BITS);

    let decoded = match op0 {
        0b0000..=0b0011 => Instruction::unallocated(UnallocatedReason::Reserved, inst),
        0b1000 | 0b1001 => dpimm::decode(inst),
        0b1010 | 0b1011 => branch::decode(inst),
        op0 if op0 & 0b0101 == 0b0100 => Instruction::unimplemented(Family::LoadStore, inst),
        op0 if op0 & 0b0111 == 0b0101 => {
            Instruction::unimplemented(Family::DataProcessingRegister, inst)
        }
        op0 if op0 & 0b0111 == 0b0111 => Instruction::unimplemented(Family::DataProcessingFp, inst),
        op0 => unreachable!("top-level op0 {op0:#06b} not classified"),
    };

    match decoded {
        Instruction::Unallocated(u) => {
            trace!(raw = format_args!("{inst:#010x}"), category = u.reason.category(), "unallocated");
        }
        Instruction::Unimplemented(u) => {
            trace!(raw = format_args!("{inst:#010x}"), family = u.family.name(), "unimplemented");
        }
        _ => {}
    }

    decoded
}

/// Decodes one instruction from exactly four little-endian bytes.
///
/// # Errors
///
/// Returns [`DecodeError::WordLength`] if `bytes` is not four bytes long.
pub fn decode_bytes(bytes: &[u8]) -> Result<Instruction, DecodeError> {
    let word: [u8; WORD_BYTES] = bytes
        .try_into()
        .map_err(|_| DecodeError::WordLength { len: bytes.len() })?;
    Ok(decode(u32::from_le_bytes(word)))
}
