//! A64 condition codes.
//!
//! The 4-bit `cond` field of B.cond (and, in later formats, CSEL and CCMP)
//! selects one of sixteen codes. `0b1110` and `0b1111` both mean "always".

use std::fmt;

/// Condition code decoded from a 4-bit field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Condition {
    /// Equal (Z set).
    Eq = 0b0000,
    /// Not equal (Z clear).
    Ne = 0b0001,
    /// Carry set / unsigned higher or same.
    Cs = 0b0010,
    /// Carry clear / unsigned lower.
    Cc = 0b0011,
    /// Minus / negative.
    Mi = 0b0100,
    /// Plus / positive or zero.
    Pl = 0b0101,
    /// Overflow.
    Vs = 0b0110,
    /// No overflow.
    Vc = 0b0111,
    /// Unsigned higher.
    Hi = 0b1000,
    /// Unsigned lower or same.
    Ls = 0b1001,
    /// Signed greater than or equal.
    Ge = 0b1010,
    /// Signed less than.
    Lt = 0b1011,
    /// Signed greater than.
    Gt = 0b1100,
    /// Signed less than or equal.
    Le = 0b1101,
    /// Always.
    Al = 0b1110,
    /// Always (the `0b1111` encoding, rendered as `AL`).
    Nv = 0b1111,
}

impl Condition {
    /// Maps the low four bits of `bits`.
    pub const fn from_bits(bits: u32) -> Self {
        match bits & 0xf {
            0b0000 => Self::Eq,
            0b0001 => Self::Ne,
            0b0010 => Self::Cs,
            0b0011 => Self::Cc,
            0b0100 => Self::Mi,
            0b0101 => Self::Pl,
            0b0110 => Self::Vs,
            0b0111 => Self::Vc,
            0b1000 => Self::Hi,
            0b1001 => Self::Ls,
            0b1010 => Self::Ge,
            0b1011 => Self::Lt,
            0b1100 => Self::Gt,
            0b1101 => Self::Le,
            0b1110 => Self::Al,
            _ => Self::Nv,
        }
    }

    /// The encoded 4-bit value.
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Assembler suffix.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Eq => "EQ",
            Self::Ne => "NE",
            Self::Cs => "CS",
            Self::Cc => "CC",
            Self::Mi => "MI",
            Self::Pl => "PL",
            Self::Vs => "VS",
            Self::Vc => "VC",
            Self::Hi => "HI",
            Self::Ls => "LS",
            Self::Ge => "GE",
            Self::Lt => "LT",
            Self::Gt => "GT",
            Self::Le => "LE",
            Self::Al | Self::Nv => "AL",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
