//! # Data Processing (Immediate) Tests
//!
//! Field extraction for ADR/ADRP, add/subtract (immediate) and logical
//! (immediate), including the operand helpers built on top of them.

use a64dec_core::common::Reg;
use a64dec_core::decode;
use a64dec_core::isa::dpimm::logical::{BitmaskError, decode_bit_masks};
use a64dec_core::isa::instruction::{
    AddSubImmediate, AddSubShift, AddrRef, Instruction, LogicalImmediate, LogicalOp,
    UnallocatedReason,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

use crate::common::builder::instruction::{add_sub_imm, adr, logical_imm};

fn addr_ref(word: u32) -> AddrRef {
    match decode(word) {
        Instruction::AddrRef(i) => i,
        other => panic!("{word:#010x} decoded as {other:?}"),
    }
}

fn add_sub(word: u32) -> AddSubImmediate {
    match decode(word) {
        Instruction::AddSubImmediate(i) => i,
        other => panic!("{word:#010x} decoded as {other:?}"),
    }
}

fn logical(word: u32) -> LogicalImmediate {
    match decode(word) {
        Instruction::LogicalImmediate(i) => i,
        other => panic!("{word:#010x} decoded as {other:?}"),
    }
}

// ══════════════════════════════════════════════════════════
// ADR / ADRP
// ══════════════════════════════════════════════════════════

#[test]
fn test_adr_fields() {
    assert_eq!(
        addr_ref(0x3000_0000),
        AddrRef {
            is_page: false,
            imm: 1,
            rd: Reg::new(0)
        }
    );
    assert_eq!(
        addr_ref(0xb000_000f),
        AddrRef {
            is_page: true,
            imm: 1,
            rd: Reg::new(15)
        }
    );
    assert_eq!(
        addr_ref(0x70ff_ffff),
        AddrRef {
            is_page: false,
            imm: -1,
            rd: Reg::SP
        }
    );
}

#[rstest]
#[case(0)]
#[case(4)]
#[case(-4)]
#[case(0x0f_ffff)]
#[case(-0x10_0000)]
fn test_adr_immediate_range(#[case] imm: i32) {
    assert_eq!(addr_ref(adr(false, imm, 3)).imm, imm);
    assert_eq!(addr_ref(adr(true, imm, 3)).imm, imm);
}

#[test]
fn test_adr_targets() {
    assert_eq!(addr_ref(0x3000_0000).target(0x100), 0x101);
    assert_eq!(addr_ref(0x70ff_ffff).target(0x100), 0xff);
    // ADRP works on 4 KiB pages and ignores the low bits of the PC.
    assert_eq!(addr_ref(0xb000_000f).target(0x1234), 0x2000);
    assert_eq!(addr_ref(adr(true, -1, 0)).target(0x1234), 0x0);
}

proptest! {
    #[test]
    fn prop_adr_immediate_survives_split(imm in -0x10_0000_i32..0x10_0000, rd in 0_u32..32) {
        let decoded = addr_ref(adr(false, imm, rd));
        prop_assert_eq!(decoded.imm, imm);
        prop_assert_eq!(u32::from(decoded.rd.index()), rd);
    }
}

// ══════════════════════════════════════════════════════════
// Add/subtract (immediate)
// ══════════════════════════════════════════════════════════

#[test]
fn test_add_sub_fields() {
    assert_eq!(
        add_sub(0x913f_fc21),
        AddSubImmediate {
            is_64: true,
            is_sub: false,
            set_flags: false,
            shift: AddSubShift::None,
            imm12: 4095,
            rn: Reg::new(1),
            rd: Reg::new(1),
        }
    );
}

#[rstest]
#[case(false, false, "ADD")]
#[case(false, true, "ADDS")]
#[case(true, false, "SUB")]
#[case(true, true, "SUBS")]
fn test_add_sub_mnemonic(#[case] sub: bool, #[case] set_flags: bool, #[case] expected: &str) {
    let inst = add_sub(add_sub_imm(true, sub, set_flags, 0, 1, 2, 3));
    assert_eq!(inst.is_sub, sub);
    assert_eq!(inst.set_flags, set_flags);
    assert_eq!(inst.mnemonic(), expected);
}

#[rstest]
#[case(0, AddSubShift::None, Some(7))]
#[case(1, AddSubShift::Lsl12, Some(7 << 12))]
#[case(2, AddSubShift::Reserved(2), None)]
#[case(3, AddSubShift::Reserved(3), None)]
fn test_add_sub_shift(#[case] sh: u32, #[case] shift: AddSubShift, #[case] operand: Option<u64>) {
    let inst = add_sub(add_sub_imm(false, false, false, sh, 7, 0, 0));
    assert_eq!(inst.shift, shift);
    assert_eq!(inst.operand(), operand);
    assert!(!inst.is_64);
}

// ══════════════════════════════════════════════════════════
// Logical (immediate)
// ══════════════════════════════════════════════════════════

#[rstest]
#[case(0x1200_0000, 0x1)]
#[case(0x121a_1800, 0x1fc0)]
#[case(0x9277_57e0, 0x7fff_fe00)]
fn test_logical_masks(#[case] word: u32, #[case] mask: u64) {
    assert_eq!(logical(word).imm, mask);
}

#[test]
fn test_logical_fields() {
    assert_eq!(
        logical(0x9277_57e0),
        LogicalImmediate {
            is_64: true,
            op: LogicalOp::And,
            imm: 0x7fff_fe00,
            rn: Reg::SP,
            rd: Reg::new(0),
        }
    );
}

#[rstest]
#[case(0, LogicalOp::And)]
#[case(1, LogicalOp::Orr)]
#[case(2, LogicalOp::Eor)]
#[case(3, LogicalOp::Ands)]
fn test_logical_opc(#[case] opc: u32, #[case] op: LogicalOp) {
    assert_eq!(logical(logical_imm(true, opc, 0, 0, 0, 1, 2)).op, op);
}

#[rstest]
#[case::wide_element_on_w(logical_imm(false, 0, 1, 0, 0, 0, 0), BitmaskError::WideElement)]
#[case::all_ones_w(logical_imm(false, 0, 0, 0, 0b01_1111, 0, 0), BitmaskError::AllOnes { size: 32 })]
#[case::all_ones_x(logical_imm(true, 0, 1, 0, 0b11_1111, 0, 0), BitmaskError::AllOnes { size: 64 })]
#[case::all_ones_2bit(logical_imm(true, 0, 0, 0, 0b11_1101, 0, 0), BitmaskError::AllOnes { size: 2 })]
#[case::no_element(logical_imm(true, 0, 0, 0, 0b11_1111, 0, 0), BitmaskError::NoElementSize)]
fn test_logical_reserved(#[case] word: u32, #[case] err: BitmaskError) {
    match decode(word) {
        Instruction::Unallocated(u) => {
            assert_eq!(u.reason, UnallocatedReason::LogicalImmediate(err));
            assert_eq!(u.raw, word);
        }
        other => panic!("{word:#010x} decoded as {other:?}"),
    }
}

#[test]
fn test_bit_masks_element_sizes() {
    // One set bit in each element size, replicated to 64 bits.
    assert_eq!(decode_bit_masks(0, 0b11_1100, 0, true), Ok(0x5555_5555_5555_5555));
    assert_eq!(decode_bit_masks(0, 0b11_1000, 0, true), Ok(0x1111_1111_1111_1111));
    assert_eq!(decode_bit_masks(0, 0b11_0000, 0, true), Ok(0x0101_0101_0101_0101));
    assert_eq!(decode_bit_masks(0, 0b10_0000, 0, true), Ok(0x0001_0001_0001_0001));
    assert_eq!(decode_bit_masks(0, 0b00_0000, 0, true), Ok(0x0000_0001_0000_0001));
    assert_eq!(decode_bit_masks(1, 0b00_0000, 0, true), Ok(0x0000_0000_0000_0001));
}

#[test]
fn test_bit_masks_full_rotation() {
    // 64-bit element, single bit rotated right by one lands in bit 63.
    assert_eq!(decode_bit_masks(1, 0, 1, true), Ok(0x8000_0000_0000_0000));
    // 32-bit element, low 16 bits set, rotated right by 8.
    assert_eq!(decode_bit_masks(0, 15, 8, false), Ok(0xff00_00ff));
}

proptest! {
    #[test]
    fn prop_bit_masks_fit_register(n in 0_u32..2, imms in 0_u32..64, immr in 0_u32..64, is_64: bool) {
        if let Ok(mask) = decode_bit_masks(n, imms, immr, is_64) {
            prop_assert_ne!(mask, 0);
            if is_64 {
                prop_assert_ne!(mask, u64::MAX);
            } else {
                prop_assert_eq!(mask >> 32, 0);
                prop_assert_ne!(mask, 0xffff_ffff);
            }
        }
    }
}
