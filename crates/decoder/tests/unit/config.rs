//! # Configuration Tests
//!
//! Defaults, partial JSON documents and rejection of malformed input.

use a64dec_core::config::{Config, GeneralConfig, ImageConfig, ListingConfig};
use pretty_assertions::assert_eq;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert!(!config.general.trace_decode);
    assert_eq!(config.image.base_address, 0);
    assert_eq!(config.image.workers, 1);
    assert!(config.listing.show_address);
    assert!(config.listing.show_word);
    assert!(!config.listing.show_targets);
}

#[test]
fn test_empty_document_matches_default() {
    assert_eq!(Config::from_json("{}").unwrap(), Config::default());
}

#[test]
fn test_empty_sections_match_defaults() {
    let config = Config::from_json(r#"{ "general": {}, "image": {}, "listing": {} }"#).unwrap();
    assert_eq!(config.general, GeneralConfig::default());
    assert_eq!(config.image, ImageConfig::default());
    assert_eq!(config.listing, ListingConfig::default());
}

#[test]
fn test_full_document() {
    let json = r#"{
        "general": { "trace_decode": true },
        "image": { "base_address": 4096, "workers": 8 },
        "listing": { "show_address": false, "show_word": false, "show_targets": true }
    }"#;
    let config = Config::from_json(json).unwrap();
    assert!(config.general.trace_decode);
    assert_eq!(config.image.base_address, 0x1000);
    assert_eq!(config.image.workers, 8);
    assert_eq!(
        config.listing,
        ListingConfig {
            show_address: false,
            show_word: false,
            show_targets: true,
        }
    );
}

#[test]
fn test_zero_workers_behaves_like_one() {
    let config = Config::from_json(r#"{ "image": { "workers": 0 } }"#).unwrap();
    assert_eq!(config.image.workers, 0);
    assert_eq!(config.image.effective_workers(), 1);
}

#[test]
fn test_wrong_field_type_is_rejected() {
    assert!(Config::from_json(r#"{ "image": { "workers": "many" } }"#).is_err());
    assert!(Config::from_json(r#"{ "listing": { "show_word": 1 } }"#).is_err());
}

#[test]
fn test_negative_base_address_is_rejected() {
    assert!(Config::from_json(r#"{ "image": { "base_address": -4 } }"#).is_err());
}
