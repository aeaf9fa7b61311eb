//! Decoded instruction model.
//!
//! [`Instruction`] is the closed set of outcomes a decode can produce. Each
//! variant carries only primitive operands: register indices, immediates and
//! small enumerations. Register names and other presentation details are
//! derived at render time in [`disasm`](crate::isa::disasm).

use thiserror::Error;

use crate::common::Reg;
use crate::isa::cond::Condition;
use crate::isa::dpimm::logical::BitmaskError;

/// One decoded A64 instruction word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// ADR / ADRP.
    AddrRef(AddrRef),
    /// ADD, ADDS, SUB, SUBS (immediate).
    AddSubImmediate(AddSubImmediate),
    /// AND, ORR, EOR, ANDS (bitmask immediate).
    LogicalImmediate(LogicalImmediate),
    /// B.cond.
    CondBranchImmediate(CondBranchImmediate),
    /// SVC, HVC, SMC, BRK, HLT, DCPS1-3.
    ExceptionGen(ExceptionGen),
    /// BR, BLR, RET, ERET, DRPS and their pointer-authenticated forms.
    BranchToRegister(BranchToRegister),
    /// A bit pattern the architecture leaves unallocated or reserved.
    Unallocated(Unallocated),
    /// A correctly routed encoding whose format decoder is not implemented.
    Unimplemented(Unimplemented),
}

impl Instruction {
    /// Builds an [`Instruction::Unallocated`] for `raw`.
    #[inline]
    pub const fn unallocated(reason: UnallocatedReason, raw: u32) -> Self {
        Self::Unallocated(Unallocated { reason, raw })
    }

    /// Builds an [`Instruction::Unimplemented`] for `raw`.
    #[inline]
    pub const fn unimplemented(family: Family, raw: u32) -> Self {
        Self::Unimplemented(Unimplemented { family, raw })
    }

    /// Returns `true` for [`Instruction::Unallocated`].
    #[inline]
    pub const fn is_unallocated(&self) -> bool {
        matches!(self, Self::Unallocated(_))
    }

    /// Returns `true` for [`Instruction::Unimplemented`].
    #[inline]
    pub const fn is_unimplemented(&self) -> bool {
        matches!(self, Self::Unimplemented(_))
    }

    /// Absolute address referenced by a PC-relative instruction at `pc`.
    pub const fn target(&self, pc: u64) -> Option<u64> {
        match self {
            Self::AddrRef(i) => Some(i.target(pc)),
            Self::CondBranchImmediate(i) => Some(i.target(pc)),
            _ => None,
        }
    }
}

/// PC-relative address formation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AddrRef {
    /// ADRP when set: the immediate counts 4 KiB pages.
    pub is_page: bool,
    /// Signed 21-bit immediate (`immhi:immlo`).
    pub imm: i32,
    /// Destination register.
    pub rd: Reg,
}

impl AddrRef {
    /// Size of an ADRP page in bits.
    pub const PAGE_SHIFT: u32 = 12;

    /// Address produced when executed at `pc`.
    pub const fn target(&self, pc: u64) -> u64 {
        if self.is_page {
            let page = pc & !((1 << Self::PAGE_SHIFT) - 1);
            page.wrapping_add_signed((self.imm as i64) << Self::PAGE_SHIFT)
        } else {
            pc.wrapping_add_signed(self.imm as i64)
        }
    }
}

/// Shift applied to the 12-bit add/sub immediate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddSubShift {
    /// `sh == 0`.
    None,
    /// `sh == 1`: immediate shifted left by 12.
    Lsl12,
    /// `sh` values 2 and 3, reserved by the architecture but kept as decoded.
    Reserved(u8),
}

/// Add/subtract with a 12-bit immediate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AddSubImmediate {
    /// 64-bit operation (`sf`).
    pub is_64: bool,
    /// Subtract instead of add (`op`).
    pub is_sub: bool,
    /// Update NZCV (`S`).
    pub set_flags: bool,
    /// Immediate shift.
    pub shift: AddSubShift,
    /// Unsigned 12-bit immediate before shifting.
    pub imm12: u16,
    /// First source register.
    pub rn: Reg,
    /// Destination register.
    pub rd: Reg,
}

impl AddSubImmediate {
    /// The second operand after applying the shift, or `None` when the shift
    /// field holds a reserved value.
    pub const fn operand(&self) -> Option<u64> {
        match self.shift {
            AddSubShift::None => Some(self.imm12 as u64),
            AddSubShift::Lsl12 => Some((self.imm12 as u64) << 12),
            AddSubShift::Reserved(_) => None,
        }
    }

    /// Assembler mnemonic (`ADD`, `ADDS`, `SUB`, `SUBS`).
    pub const fn mnemonic(&self) -> &'static str {
        match (self.is_sub, self.set_flags) {
            (false, false) => "ADD",
            (false, true) => "ADDS",
            (true, false) => "SUB",
            (true, true) => "SUBS",
        }
    }
}

/// Logical operation selected by `opc`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogicalOp {
    /// Bitwise AND.
    And,
    /// Bitwise OR.
    Orr,
    /// Bitwise exclusive OR.
    Eor,
    /// Bitwise AND, setting flags.
    Ands,
}

impl LogicalOp {
    /// Maps the 2-bit `opc` field.
    pub const fn from_opc(opc: u32) -> Self {
        match opc & 0b11 {
            0 => Self::And,
            1 => Self::Orr,
            2 => Self::Eor,
            _ => Self::Ands,
        }
    }

    /// Assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Orr => "ORR",
            Self::Eor => "EOR",
            Self::Ands => "ANDS",
        }
    }
}

/// Logical operation with a bitmask immediate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogicalImmediate {
    /// 64-bit operation (`sf`).
    pub is_64: bool,
    /// Operation.
    pub op: LogicalOp,
    /// Fully materialized mask; only the low 32 bits are set when `is_64` is clear.
    pub imm: u64,
    /// Source register.
    pub rn: Reg,
    /// Destination register.
    pub rd: Reg,
}

/// Conditional branch with a 19-bit word offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CondBranchImmediate {
    /// Byte offset from the branch (already multiplied by 4).
    pub imm: i32,
    /// Condition that must hold for the branch to be taken.
    pub cond: Condition,
}

impl CondBranchImmediate {
    /// Branch destination when executed at `pc`.
    pub const fn target(&self, pc: u64) -> u64 {
        pc.wrapping_add_signed(self.imm as i64)
    }
}

/// Exception-generating instruction kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExceptionKind {
    /// Supervisor call.
    Svc,
    /// Hypervisor call.
    Hvc,
    /// Secure monitor call.
    Smc,
    /// Breakpoint.
    Brk,
    /// Halt.
    Hlt,
    /// Debug change PE state to EL1.
    Dcps1,
    /// Debug change PE state to EL2.
    Dcps2,
    /// Debug change PE state to EL3.
    Dcps3,
}

impl ExceptionKind {
    /// Assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Svc => "SVC",
            Self::Hvc => "HVC",
            Self::Smc => "SMC",
            Self::Brk => "BRK",
            Self::Hlt => "HLT",
            Self::Dcps1 => "DCPS1",
            Self::Dcps2 => "DCPS2",
            Self::Dcps3 => "DCPS3",
        }
    }
}

/// Exception generation with a 16-bit payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExceptionGen {
    /// Which exception is raised.
    pub kind: ExceptionKind,
    /// Immediate passed to the handler.
    pub imm16: u16,
}

/// Unconditional branch (register) kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BranchKind {
    /// Branch to register.
    Br,
    /// Branch to register, authenticated with key A and a modifier.
    Braa,
    /// Branch to register, authenticated with key A and a zero modifier.
    Braaz,
    /// Branch to register, authenticated with key B and a modifier.
    Brab,
    /// Branch to register, authenticated with key B and a zero modifier.
    Brabz,
    /// Branch with link to register.
    Blr,
    /// Branch with link, authenticated with key A and a modifier.
    Blraa,
    /// Branch with link, authenticated with key A and a zero modifier.
    Blraaz,
    /// Branch with link, authenticated with key B and a modifier.
    Blrab,
    /// Branch with link, authenticated with key B and a zero modifier.
    Blrabz,
    /// Return from subroutine.
    Ret,
    /// Return, authenticating the link register with key A.
    Retaa,
    /// Return with key A and a zero modifier.
    ///
    /// No branch-to-register encoding row maps to this kind.
    Retaaz,
    /// Return, authenticating the link register with key B.
    Retab,
    /// Return with key B and a zero modifier.
    ///
    /// No branch-to-register encoding row maps to this kind.
    Retabz,
    /// Exception return.
    Eret,
    /// Exception return, authenticated with key A.
    Eretaa,
    /// Exception return, authenticated with key B.
    Eretab,
    /// Debug restore process state.
    Drps,
}

impl BranchKind {
    /// Assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Br => "BR",
            Self::Braa => "BRAA",
            Self::Braaz => "BRAAZ",
            Self::Brab => "BRAB",
            Self::Brabz => "BRABZ",
            Self::Blr => "BLR",
            Self::Blraa => "BLRAA",
            Self::Blraaz => "BLRAAZ",
            Self::Blrab => "BLRAB",
            Self::Blrabz => "BLRABZ",
            Self::Ret => "RET",
            Self::Retaa => "RETAA",
            Self::Retaaz => "RETAAZ",
            Self::Retab => "RETAB",
            Self::Retabz => "RETABZ",
            Self::Eret => "ERET",
            Self::Eretaa => "ERETAA",
            Self::Eretab => "ERETAB",
            Self::Drps => "DRPS",
        }
    }

    /// Kinds that take a modifier register in `Rm`.
    pub const fn has_modifier(self) -> bool {
        matches!(self, Self::Braa | Self::Brab | Self::Blraa | Self::Blrab)
    }

    /// Kinds whose `Rn` field is fixed to 31 by the encoding.
    pub const fn has_fixed_rn(self) -> bool {
        matches!(
            self,
            Self::Retaa | Self::Retab | Self::Eret | Self::Eretaa | Self::Eretab | Self::Drps
        )
    }
}

/// Unconditional branch to a register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BranchToRegister {
    /// Which branch.
    pub kind: BranchKind,
    /// Target register.
    pub rn: Reg,
    /// Modifier register; meaningful only when [`BranchKind::has_modifier`].
    pub rm: Reg,
}

/// Why a word decoded as unallocated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum UnallocatedReason {
    /// `op0` in the top-level table is `00xx`, or another group is reserved outright.
    #[error("reserved top-level encoding")]
    Reserved,
    /// Branch family encoding outside every allocated group.
    #[error("reserved branch group")]
    Branch,
    /// System family with `op1` of 5, 6 or 7.
    #[error("reserved system group")]
    System,
    /// B.cond with bit 4 or bit 24 set.
    #[error("bit 4 or bit 24 set")]
    ConditionalBranch,
    /// No exception kind for the `opc`, `op2` and `LL` combination.
    #[error("no exception for opc/op2/LL")]
    ExceptionGeneration,
    /// No row of the branch-to-register table matches.
    #[error("no branch matches opc/op2/op3/Rn/op4")]
    BranchToRegister,
    /// The bitmask immediate does not describe a valid mask.
    #[error(transparent)]
    LogicalImmediate(#[from] BitmaskError),
}

impl UnallocatedReason {
    /// Short category used in disassembly (`unallocated <category>: <hex>`).
    pub const fn category(self) -> &'static str {
        match self {
            Self::Reserved => "instruction",
            Self::Branch => "branch",
            Self::System => "system instruction",
            Self::ConditionalBranch => "conditional branch",
            Self::ExceptionGeneration => "exception generation",
            Self::BranchToRegister => "branch to register",
            Self::LogicalImmediate(_) => "logical immediate",
        }
    }
}

/// A reserved or undefined encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Unallocated {
    /// Why the word is unallocated.
    pub reason: UnallocatedReason,
    /// The offending word.
    pub raw: u32,
}

/// Instruction families that are routed but not decoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Family {
    /// Loads and stores.
    LoadStore,
    /// Data processing (register).
    DataProcessingRegister,
    /// Data processing (scalar floating point and SIMD).
    DataProcessingFp,
    /// MOVN, MOVZ, MOVK.
    MoveWide,
    /// SBFM, BFM, UBFM.
    Bitfield,
    /// EXTR.
    Extract,
    /// Hints, barriers, PSTATE, SYS and system register moves.
    System,
    /// B and BL.
    UnconditionalBranchImmediate,
    /// CBZ and CBNZ.
    CompareAndBranch,
    /// TBZ and TBNZ.
    TestAndBranch,
}

impl Family {
    /// Human-readable family name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::LoadStore => "load/store",
            Self::DataProcessingRegister => "data processing (register)",
            Self::DataProcessingFp => "data processing (SIMD&FP)",
            Self::MoveWide => "move wide",
            Self::Bitfield => "bitfield",
            Self::Extract => "extract",
            Self::System => "system",
            Self::UnconditionalBranchImmediate => "unconditional branch (immediate)",
            Self::CompareAndBranch => "compare and branch",
            Self::TestAndBranch => "test and branch",
        }
    }
}

/// A routed encoding in a family without a format decoder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Unimplemented {
    /// Family the classifier routed the word to.
    pub family: Family,
    /// The word itself.
    pub raw: u32,
}
