//! Instruction Disassembler for A64.
//!
//! Renders a decoded [`Instruction`] in assembler syntax for listings, trace
//! output and test diagnostics. Operands follow the mnemonic separated by
//! `", "`. Registers render as `X<n>`/`W<n>` with index 31 as `SP`/`WSP`,
//! immediates in decimal except logical masks, which render in hex.
//!
//! # Usage
//!
//! ```
//! use a64dec_core::isa::disasm::disassemble;
//!
//! assert_eq!(disassemble(0x3000_0000), "ADR X0, #1");
//! assert_eq!(disassemble(0x0000_0000), "unallocated instruction: 0");
//! ```

use std::fmt;

use crate::isa::decode::decode;
use crate::isa::instruction::{
    AddSubImmediate, AddSubShift, AddrRef, BranchToRegister, CondBranchImmediate, ExceptionGen,
    Instruction, LogicalImmediate, Unallocated, UnallocatedReason, Unimplemented,
};

/// Decodes and renders a 32-bit A64 word.
pub fn disassemble(inst: u32) -> String {
    decode(inst).to_string()
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddrRef(i) => fmt::Display::fmt(i, f),
            Self::AddSubImmediate(i) => fmt::Display::fmt(i, f),
            Self::LogicalImmediate(i) => fmt::Display::fmt(i, f),
            Self::CondBranchImmediate(i) => fmt::Display::fmt(i, f),
            Self::ExceptionGen(i) => fmt::Display::fmt(i, f),
            Self::BranchToRegister(i) => fmt::Display::fmt(i, f),
            Self::Unallocated(i) => fmt::Display::fmt(i, f),
            Self::Unimplemented(i) => fmt::Display::fmt(i, f),
        }
    }
}

impl fmt::Display for AddrRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mnemonic = if self.is_page { "ADRP" } else { "ADR" };
        write!(f, "{mnemonic} {}, #{}", self.rd.name(true), self.imm)
    }
}

impl fmt::Display for AddSubImmediate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}, {}, #{}",
            self.mnemonic(),
            self.rd.name(self.is_64),
            self.rn.name(self.is_64),
            self.imm12
        )?;
        match self.shift {
            AddSubShift::None => Ok(()),
            AddSubShift::Lsl12 => f.write_str(", LSL #12"),
            AddSubShift::Reserved(value) => write!(f, ", RESERVED VALUE: {value}"),
        }
    }
}

impl fmt::Display for LogicalImmediate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}, {}, #{:#x}",
            self.op.mnemonic(),
            self.rd.name(self.is_64),
            self.rn.name(self.is_64),
            self.imm
        )
    }
}

impl fmt::Display for CondBranchImmediate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B{} #{}", self.cond, self.imm)
    }
}

impl fmt::Display for ExceptionGen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} #{}", self.kind.mnemonic(), self.imm16)
    }
}

impl fmt::Display for BranchToRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mnemonic = self.kind.mnemonic();
        if self.kind.has_fixed_rn() {
            return f.write_str(mnemonic);
        }
        write!(f, "{mnemonic} {}", self.rn.name(true))?;
        if self.kind.has_modifier() {
            write!(f, ", {}", self.rm.name(true))?;
        }
        Ok(())
    }
}

impl fmt::Display for Unallocated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unallocated {}: {:x}", self.reason.category(), self.raw)?;
        if let UnallocatedReason::LogicalImmediate(err) = self.reason {
            write!(f, " ({err})")?;
        }
        Ok(())
    }
}

impl fmt::Display for Unimplemented {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unimplemented {}: {:x}", self.family.name(), self.raw)
    }
}
