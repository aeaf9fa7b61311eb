//! # Boundary Error Tests

use a64dec_core::common::{ConfigError, DecodeError, LoaderError};
use a64dec_core::Config;
use object::Architecture;

#[test]
fn test_decode_error_messages() {
    assert_eq!(
        DecodeError::WordLength { len: 3 }.to_string(),
        "expected a 4-byte instruction word, got 3 bytes"
    );
    assert_eq!(
        DecodeError::TrailingBytes {
            offset: 8,
            remainder: 2
        }
        .to_string(),
        "2 trailing bytes at offset 0x8 do not form an instruction word"
    );
}

#[test]
fn test_loader_error_wraps_decode_error() {
    let err = LoaderError::from(DecodeError::WordLength { len: 0 });
    assert!(matches!(err, LoaderError::Decode(DecodeError::WordLength { len: 0 })));
    assert_eq!(err.to_string(), "expected a 4-byte instruction word, got 0 bytes");
}

#[test]
fn test_loader_error_messages() {
    assert_eq!(
        LoaderError::UnsupportedArchitecture(Architecture::X86_64).to_string(),
        "unsupported architecture X86_64, expected Aarch64"
    );
    assert_eq!(
        LoaderError::NoExecutableSections.to_string(),
        "object file has no executable sections"
    );
}

#[test]
fn test_config_error_from_json() {
    let err = Config::from_json("{ not json").unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
    assert!(err.to_string().starts_with("invalid configuration: "));
}
