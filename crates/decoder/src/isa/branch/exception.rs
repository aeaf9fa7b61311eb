//! Exception generation.
//!
//! Format: `11010100 | opc[23:21] | imm16[20:5] | op2[4:2] | LL[1:0]`

use crate::common::bits::BitField;
use crate::isa::instruction::{ExceptionGen, ExceptionKind, Instruction, UnallocatedReason};

/// Decodes SVC, HVC, SMC, BRK, HLT and DCPS1-3.
pub fn decode(inst: u32) -> Instruction {
    let opc = inst.unsigned(21, 3);
    let op2 = inst.unsigned(2, 3);
    let ll = inst.unsigned(0, 2);

    let kind = match (opc, op2, ll) {
        (0b000, 0, 0b01) => ExceptionKind::Svc,
        (0b000, 0, 0b10) => ExceptionKind::Hvc,
        (0b000, 0, 0b11) => ExceptionKind::Smc,
        (0b001, 0, 0b00) => ExceptionKind::Brk,
        (0b010, 0, 0b00) => ExceptionKind::Hlt,
        (0b101, 0, 0b01) => ExceptionKind::Dcps1,
        (0b101, 0, 0b10) => ExceptionKind::Dcps2,
        (0b101, 0, 0b11) => ExceptionKind::Dcps3,
        _ => return Instruction::unallocated(UnallocatedReason::ExceptionGeneration, inst),
    };

    Instruction::ExceptionGen(ExceptionGen {
        kind,
        imm16: inst.unsigned(5, 16) as u16,
    })
}
