//! Unconditional branch (register).
//!
//! Format: `1101011 | opc[24:21] | op2[20:16] | op3[15:10] | Rn[9:5] | op4[4:0]`
//!
//! The pointer-authenticated forms reuse `op4` as a modifier register (BRAA)
//! or fix it to 31 (BRAAZ), and the return forms fix `Rn`. The group is
//! therefore decoded with an ordered wildcard table rather than a flat match.

use crate::common::bits::BitField;
use crate::common::Reg;
use crate::isa::instruction::{BranchKind, BranchToRegister, Instruction, UnallocatedReason};
use crate::isa::table::{self, Row, row};

/// Columns: `opc`, `op2`, `op3`, `Rn`, `op4`.
const ROWS: [Row<BranchKind, 5>; 17] = [
    row!(0, 31, 0, _, 0 => BranchKind::Br),
    row!(0, 31, 2, _, 31 => BranchKind::Braaz),
    row!(0, 31, 3, _, 31 => BranchKind::Brabz),
    row!(1, 31, 0, _, 0 => BranchKind::Blr),
    row!(1, 31, 2, _, 31 => BranchKind::Blraaz),
    row!(1, 31, 3, _, 31 => BranchKind::Blrabz),
    row!(2, 31, 0, _, 0 => BranchKind::Ret),
    row!(2, 31, 2, 31, 31 => BranchKind::Retaa),
    row!(2, 31, 3, 31, 31 => BranchKind::Retab),
    row!(4, 31, 0, 31, 0 => BranchKind::Eret),
    row!(4, 31, 2, 31, 31 => BranchKind::Eretaa),
    row!(4, 31, 3, 31, 31 => BranchKind::Eretab),
    row!(5, 31, 0, 31, 0 => BranchKind::Drps),
    row!(8, 31, 2, _, _ => BranchKind::Braa),
    row!(8, 31, 3, _, _ => BranchKind::Brab),
    row!(9, 31, 2, _, _ => BranchKind::Blraa),
    row!(9, 31, 3, _, _ => BranchKind::Blrab),
];

/// Decodes BR, BLR, RET, ERET, DRPS and their authenticated variants.
pub fn decode(inst: u32) -> Instruction {
    let rn = inst.unsigned(5, 5);
    let op4 = inst.unsigned(0, 5);
    let fields = [
        inst.unsigned(21, 4),
        inst.unsigned(16, 5),
        inst.unsigned(10, 6),
        rn,
        op4,
    ];

    table::lookup(&ROWS, fields).map_or_else(
        || Instruction::unallocated(UnallocatedReason::BranchToRegister, inst),
        |kind| {
            Instruction::BranchToRegister(BranchToRegister {
                kind,
                rn: Reg::from(rn),
                rm: Reg::from(op4),
            })
        },
    )
}
