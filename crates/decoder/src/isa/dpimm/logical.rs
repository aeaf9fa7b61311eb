//! Logical (immediate) and the bitmask immediate encoding.
//!
//! Format: `sf | opc[30:29] | 100100 | N | immr[21:16] | imms[15:10] | Rn | Rd`
//!
//! A bitmask immediate describes a register-wide pattern as a run of ones
//! inside an element of 2, 4, 8, 16, 32 or 64 bits, rotated right within
//! the element and then replicated across the register:
//!
//! 1. The element size is `2^len`, where `len` is the index of the highest
//!    set bit of `N:NOT(imms)`.
//! 2. The low `len` bits of `imms` give the run length minus one (`S`), and
//!    the low `len` bits of `immr` give the rotation (`R`).
//! 3. A run filling the whole element is reserved, as is `N == 1` on a
//!    32-bit operation.

use thiserror::Error;

use crate::common::bits::BitField;
use crate::common::Reg;
use crate::isa::instruction::{Instruction, LogicalImmediate, LogicalOp};

/// Reasons a bitmask immediate is undefined.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum BitmaskError {
    /// `N` is set but the operation is 32-bit.
    #[error("N set on a 32-bit operation")]
    WideElement,
    /// `N:NOT(imms)` is zero, so no element size exists.
    #[error("no element size for N:NOT(imms)")]
    NoElementSize,
    /// The run of ones would fill the whole element.
    #[error("all-ones {size}-bit element")]
    AllOnes {
        /// Element size in bits.
        size: u32,
    },
}

/// Decodes AND, ORR, EOR or ANDS (immediate).
///
/// An undefined bitmask yields [`Instruction::Unallocated`].
pub fn decode(inst: u32) -> Instruction {
    let is_64 = inst.bit(31);
    let n = inst.unsigned(22, 1);
    let immr = inst.unsigned(16, 6);
    let imms = inst.unsigned(10, 6);

    match decode_bit_masks(n, imms, immr, is_64) {
        Ok(imm) => Instruction::LogicalImmediate(LogicalImmediate {
            is_64,
            op: LogicalOp::from_opc(inst.unsigned(29, 2)),
            imm,
            rn: Reg::from(inst.unsigned(5, 5)),
            rd: Reg::from(inst.unsigned(0, 5)),
        }),
        Err(err) => Instruction::unallocated(err.into(), inst),
    }
}

/// Materializes the mask described by `N`, `imms` and `immr`.
///
/// The result occupies 64 bits when `is_64` is set and the low 32 bits
/// otherwise.
///
/// # Errors
///
/// Returns a [`BitmaskError`] when the fields do not describe a valid mask.
pub fn decode_bit_masks(n: u32, imms: u32, immr: u32, is_64: bool) -> Result<u64, BitmaskError> {
    if !is_64 && n != 0 {
        return Err(BitmaskError::WideElement);
    }

    let combined = ((n & 1) << 6) | (!imms & 0x3f);
    if combined == 0 {
        return Err(BitmaskError::NoElementSize);
    }

    let len = u32::BITS - 1 - combined.leading_zeros();
    let mut size = 1u32 << len;
    let levels = size - 1;

    let s = imms & levels;
    let r = immr & levels;
    if s == levels {
        return Err(BitmaskError::AllOnes { size });
    }

    let run = (1u64 << (s + 1)) - 1;
    let mut pattern = rotate_element(run, r, size);

    let reg_size = if is_64 { 64 } else { 32 };
    while size < reg_size {
        pattern |= pattern << size;
        size *= 2;
    }

    Ok(pattern)
}

/// Rotates the low `size` bits of `value` right by `amount`.
const fn rotate_element(value: u64, amount: u32, size: u32) -> u64 {
    if amount == 0 {
        return value;
    }
    if size == u64::BITS {
        return value.rotate_right(amount);
    }
    let mask = (1u64 << size) - 1;
    ((value >> amount) | (value << (size - amount))) & mask
}
