//! Configuration for image decoding and listings.
//!
//! This module defines the settings consumed by the [`image`](crate::image)
//! layer. It provides:
//! 1. **Defaults:** Baseline values used when a field is omitted.
//! 2. **Structures:** Hierarchical config for general, image, and listing options.
//!
//! Configuration is supplied as JSON via [`Config::from_json`], or use
//! `Config::default()`. Every section and field is optional.

use serde::Deserialize;

use crate::common::ConfigError;

/// Default configuration constants.
mod defaults {
    /// Address assigned to the first word of a raw image.
    pub const BASE_ADDRESS: u64 = 0;

    /// Number of threads used to decode an image.
    pub const WORKERS: usize = 1;

    /// Print the address column in listings.
    pub const SHOW_ADDRESS: bool = true;

    /// Print the raw word column in listings.
    pub const SHOW_WORD: bool = true;
}

/// Root configuration.
///
/// # Examples
///
/// ```
/// use a64dec_core::Config;
///
/// let json = r#"{
///     "image": { "base_address": 4194304, "workers": 4 },
///     "listing": { "show_targets": true }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.image.base_address, 0x40_0000);
/// assert_eq!(config.image.workers, 4);
/// assert!(config.listing.show_address);
/// assert!(config.listing.show_targets);
/// assert!(!config.general.trace_decode);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General decoder settings
    pub general: GeneralConfig,
    /// Raw image layout and decoding parallelism
    pub image: ImageConfig,
    /// Listing output format
    pub listing: ListingConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if the text is not valid JSON or a field
    /// has the wrong type.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// General decoder settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Emit one `trace` event per decoded word while building a listing.
    #[serde(default)]
    pub trace_decode: bool,
}

/// Raw image settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImageConfig {
    /// Address of the first byte of the image.
    #[serde(default = "ImageConfig::default_base_address")]
    pub base_address: u64,

    /// Decoder threads; 0 behaves like 1.
    #[serde(default = "ImageConfig::default_workers")]
    pub workers: usize,
}

impl ImageConfig {
    const fn default_base_address() -> u64 {
        defaults::BASE_ADDRESS
    }

    const fn default_workers() -> usize {
        defaults::WORKERS
    }

    /// Worker count with the zero case normalized.
    pub fn effective_workers(&self) -> usize {
        self.workers.max(1)
    }
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            base_address: defaults::BASE_ADDRESS,
            workers: defaults::WORKERS,
        }
    }
}

/// Listing output settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListingConfig {
    /// Prefix each line with its address.
    #[serde(default = "ListingConfig::default_show_address")]
    pub show_address: bool,

    /// Print the raw word after the address.
    #[serde(default = "ListingConfig::default_show_word")]
    pub show_word: bool,

    /// Append `; -> 0x<target>` to PC-relative instructions.
    #[serde(default)]
    pub show_targets: bool,
}

impl ListingConfig {
    const fn default_show_address() -> bool {
        defaults::SHOW_ADDRESS
    }

    const fn default_show_word() -> bool {
        defaults::SHOW_WORD
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            show_address: defaults::SHOW_ADDRESS,
            show_word: defaults::SHOW_WORD,
            show_targets: false,
        }
    }
}
