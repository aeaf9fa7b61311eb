//! General-purpose register references.
//!
//! A64 encodes registers as 5-bit indices. Index 31 names either the stack
//! pointer or the zero register depending on the operand slot, and the
//! W/X prefix depends on the operation width. Neither is known from the
//! index alone, so [`Reg`] stores only the index and the name is produced
//! on demand.

use std::fmt;

/// Register index (0-31) as decoded from a 5-bit field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Reg(u8);

impl Reg {
    /// Index 31: SP or ZR depending on context.
    pub const SP: Self = Self(31);

    /// Link register, X30.
    pub const LR: Self = Self(30);

    /// Creates a register reference from the low five bits of `idx`.
    #[inline]
    pub const fn new(idx: u8) -> Self {
        Self(idx & 0x1f)
    }

    /// Returns the register index.
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns `true` for index 31.
    #[inline]
    pub const fn is_sp_or_zr(self) -> bool {
        self.0 == 31
    }

    /// Returns a displayable name for a 32-bit (`W`) or 64-bit (`X`) operand.
    ///
    /// Index 31 renders as `WSP` or `SP`.
    #[inline]
    pub const fn name(self, is_64: bool) -> RegName {
        RegName { reg: self, is_64 }
    }
}

impl From<u32> for Reg {
    fn from(idx: u32) -> Self {
        Self::new(idx as u8)
    }
}

/// A register paired with the width it is rendered at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegName {
    reg: Reg,
    is_64: bool,
}

impl fmt::Display for RegName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.is_64, self.reg.is_sp_or_zr()) {
            (true, true) => f.write_str("SP"),
            (false, true) => f.write_str("WSP"),
            (true, false) => write!(f, "X{}", self.reg.0),
            (false, false) => write!(f, "W{}", self.reg.0),
        }
    }
}
