//! # Listing Tests
//!
//! Column selection, branch-target annotation and the outcome counters.

use a64dec_core::config::{Config, ListingConfig};
use a64dec_core::image::disassemble_image;
use pretty_assertions::assert_eq;

use crate::common::harness::image;

const PROGRAM: [u32; 4] = [0x3000_0000, 0x5400_0040, 0x0000_0000, 0xd65f_03c0];

fn listing_text(format: ListingConfig) -> String {
    let mut config = Config::default();
    config.image.base_address = 0x1000;
    config.listing = format;
    disassemble_image(&image(&PROGRAM), &config).unwrap().to_string()
}

#[test]
fn test_default_columns() {
    assert_eq!(
        listing_text(ListingConfig::default()),
        "00001000:  30000000  ADR X0, #1\n\
         00001004:  54000040  BEQ #8\n\
         00001008:  00000000  unallocated instruction: 0\n\
         0000100c:  d65f03c0  RET X30\n"
    );
}

#[test]
fn test_instruction_column_only() {
    let format = ListingConfig {
        show_address: false,
        show_word: false,
        show_targets: false,
    };
    assert_eq!(
        listing_text(format),
        "ADR X0, #1\nBEQ #8\nunallocated instruction: 0\nRET X30\n"
    );
}

#[test]
fn test_targets_annotate_pc_relative() {
    let format = ListingConfig {
        show_address: true,
        show_word: false,
        show_targets: true,
    };
    assert_eq!(
        listing_text(format),
        "00001000:  ADR X0, #1  ; -> 0x1001\n\
         00001004:  BEQ #8  ; -> 0x100c\n\
         00001008:  unallocated instruction: 0\n\
         0000100c:  RET X30\n"
    );
}

#[test]
fn test_with_format_replaces_columns() {
    let listing = disassemble_image(&image(&PROGRAM[..1]), &Config::default())
        .unwrap()
        .with_format(ListingConfig {
            show_address: false,
            show_word: true,
            show_targets: false,
        });
    assert_eq!(listing.to_string(), "30000000  ADR X0, #1\n");
}

#[test]
fn test_counters_and_iteration() {
    let bytes = image(&[0x0000_0000, 0xd503_201f, 0xf940_0020, 0x0200_0000, 0x3000_0000]);
    let listing = disassemble_image(&bytes, &Config::default()).unwrap();
    assert_eq!(listing.len(), 5);
    assert_eq!(listing.unallocated_count(), 2);
    assert_eq!(listing.unimplemented_count(), 2);
    let decoded = listing
        .iter()
        .filter(|line| !line.instruction.is_unallocated() && !line.instruction.is_unimplemented())
        .count();
    assert_eq!(decoded, 1);
}

#[test]
fn test_iter_matches_borrowed_into_iter() {
    let bytes = image(&[0x3000_0000, 0xd65f_03c0]);
    let listing = disassemble_image(&bytes, &Config::default()).unwrap();
    let addresses: Vec<u64> = listing.iter().map(|line| line.address).collect();
    let borrowed: Vec<u64> = (&listing).into_iter().map(|line| line.address).collect();
    assert_eq!(addresses, vec![0, 4]);
    assert_eq!(addresses, borrowed);
}
