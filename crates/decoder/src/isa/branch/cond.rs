//! Conditional branch (immediate).
//!
//! Format: `0101010 | o1[24] | imm19[23:5] | o0[4] | cond[3:0]`
//!
//! Only `o1 == 0, o0 == 0` (B.cond) is allocated.

use crate::common::bits::BitField;
use crate::isa::cond::Condition;
use crate::isa::instruction::{CondBranchImmediate, Instruction, UnallocatedReason};

/// Decodes B.cond.
pub fn decode(inst: u32) -> Instruction {
    if inst.bit(24) || inst.bit(4) {
        return Instruction::unallocated(UnallocatedReason::ConditionalBranch, inst);
    }

    Instruction::CondBranchImmediate(CondBranchImmediate {
        imm: inst.signed(5, 19) << 2,
        cond: Condition::from_bits(inst.unsigned(0, 4)),
    })
}
