//! Branches, exception generation and system instructions.
//!
//! Selected by `op0[28:25] == 101x`. The group is split on `op0 = [31:29]`
//! and `op1 = [25:22]`:
//!
//! | op0 | op1 | group |
//! |-----|-----|-------|
//! | 010 | 0xxx | conditional branch (immediate) |
//! | 010 | 1xxx | unallocated |
//! | 110 | 00xx | exception generation |
//! | 110 | 0100 | system |
//! | 110 | 0101, 011x | unallocated |
//! | 110 | 1xxx | unconditional branch (register) |
//! | x00 | - | unconditional branch (immediate) |
//! | x01 | 0xxx | compare and branch |
//! | x01 | 1xxx | test and branch |
//! | x11 | - | unallocated |
//!
//! The explicit `010` and `110` rows are checked before the `x..` rows.

/// Conditional branch (immediate).
pub mod cond;

/// Exception generation.
pub mod exception;

/// Unconditional branch (register).
pub mod reg;

use crate::common::bits::BitField;
use crate::isa::instruction::{Family, Instruction, UnallocatedReason};

/// Routes a branch-family word to its format decoder.
pub fn decode(inst: u32) -> Instruction {
    let op0 = inst.unsigned(29, 3);
    let op1 = inst.unsigned(22, 4);

    match (op0, op1) {
        (0b010, 0..=7) => cond::decode(inst),
        (0b010, _) => Instruction::unallocated(UnallocatedReason::Branch, inst),
        (0b110, 0..=3) => exception::decode(inst),
        (0b110, 4) => Instruction::unimplemented(Family::System, inst),
        (0b110, 5..=7) => Instruction::unallocated(UnallocatedReason::System, inst),
        (0b110, _) => reg::decode(inst),
        (op0, _) if op0.trailing_zeros() >= 2 => {
            Instruction::unimplemented(Family::UnconditionalBranchImmediate, inst)
        }
        (op0, 0..=7) if op0 & 0b11 == 0b01 => {
            Instruction::unimplemented(Family::CompareAndBranch, inst)
        }
        (op0, _) if op0 & 0b11 == 0b01 => Instruction::unimplemented(Family::TestAndBranch, inst),
        (op0, _) if op0 & 0b11 == 0b11 => Instruction::unallocated(UnallocatedReason::Branch, inst),
        (op0, op1) => unreachable!("branch group op0={op0:#05b} op1={op1:#06b} not classified"),
    }
}
