//! PC-relative addressing (ADR, ADRP).
//!
//! Format: `op | immlo[30:29] | 10000 | immhi[23:5] | Rd[4:0]`
//!
//! The 21-bit immediate is split across two fields; the pieces are joined
//! as `immhi:immlo` before sign extension.

use crate::common::bits::{BitField, sign_extend};
use crate::common::Reg;
use crate::isa::instruction::{AddrRef, Instruction};

/// Bit selecting ADRP.
const OP_BIT: u32 = 31;

/// Offset and width of `immlo`.
const IMMLO: (u32, u32) = (29, 2);

/// Offset and width of `immhi`.
const IMMHI: (u32, u32) = (5, 19);

/// Width of the joined immediate.
const IMM_BITS: u32 = 21;

/// Decodes ADR or ADRP.
pub fn decode(inst: u32) -> Instruction {
    let immlo = inst.unsigned(IMMLO.0, IMMLO.1);
    let immhi = inst.unsigned(IMMHI.0, IMMHI.1);

    Instruction::AddrRef(AddrRef {
        is_page: inst.bit(OP_BIT),
        imm: sign_extend((immhi << IMMLO.1) | immlo, IMM_BITS),
        rd: Reg::from(inst.unsigned(0, 5)),
    })
}
