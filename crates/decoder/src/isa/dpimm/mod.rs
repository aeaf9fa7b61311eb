//! Data processing (immediate).
//!
//! Selected by `op0[28:25] == 100x`. The group is split on `op0[25:23]`:
//!
//! | op0 | group |
//! |-----|-------|
//! | 00x | PC-relative addressing |
//! | 01x | add/subtract (immediate) |
//! | 100 | logical (immediate) |
//! | 101 | move wide |
//! | 110 | bitfield |
//! | 111 | extract |

/// Add/subtract (immediate).
pub mod addsub;

/// Logical (immediate) and bitmask immediate decoding.
pub mod logical;

/// PC-relative addressing.
pub mod pcrel;

use crate::common::bits::BitField;
use crate::isa::instruction::{Family, Instruction};

/// Routes a data-processing (immediate) word to its format decoder.
pub fn decode(inst: u32) -> Instruction {
    match inst.unsigned(23, 3) {
        0b000 | 0b001 => pcrel::decode(inst),
        0b010 | 0b011 => addsub::decode(inst),
        0b100 => logical::decode(inst),
        0b101 => Instruction::unimplemented(Family::MoveWide, inst),
        0b110 => Instruction::unimplemented(Family::Bitfield, inst),
        0b111 => Instruction::unimplemented(Family::Extract, inst),
        op0 => unreachable!("3-bit op0 {op0:#b} in data processing (immediate)"),
    }
}
