//! Add/subtract (immediate).
//!
//! Format: `sf | op | S | 100010 | sh[23:22] | imm12[21:10] | Rn | Rd`

use crate::common::bits::BitField;
use crate::common::Reg;
use crate::isa::instruction::{AddSubImmediate, AddSubShift, Instruction};

/// Decodes ADD, ADDS, SUB or SUBS (immediate).
///
/// Shift values 2 and 3 are reserved; they are kept in the result as
/// [`AddSubShift::Reserved`] rather than rejected.
pub fn decode(inst: u32) -> Instruction {
    let shift = match inst.unsigned(22, 2) {
        0 => AddSubShift::None,
        1 => AddSubShift::Lsl12,
        reserved => AddSubShift::Reserved(reserved as u8),
    };

    Instruction::AddSubImmediate(AddSubImmediate {
        is_64: inst.bit(31),
        is_sub: inst.bit(30),
        set_flags: inst.bit(29),
        shift,
        imm12: inst.unsigned(10, 12) as u16,
        rn: Reg::from(inst.unsigned(5, 5)),
        rd: Reg::from(inst.unsigned(0, 5)),
    })
}
