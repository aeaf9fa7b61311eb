//! ELF text-section extraction.
//!
//! Reads an `AArch64` object file and returns the contents of its executable
//! sections together with their load addresses, ready to be decoded with
//! [`TextSection::disassemble`].

use std::fs;
use std::path::Path;

use object::{Architecture, Object, ObjectSection, SectionKind};
use tracing::{debug, warn};

use crate::common::LoaderError;
use crate::config::Config;
use crate::image::{Listing, disassemble_image};

/// An executable section copied out of an object file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextSection {
    /// Section name, or an empty string when the name is unreadable.
    pub name: String,
    /// Virtual address of the first byte.
    pub address: u64,
    /// Section contents.
    pub bytes: Vec<u8>,
}

impl TextSection {
    /// Decodes the section with its own address as the base.
    ///
    /// All other settings are taken from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`LoaderError::Decode`] if the section length is not a
    /// multiple of four.
    pub fn disassemble(&self, config: &Config) -> Result<Listing, LoaderError> {
        let mut config = config.clone();
        config.image.base_address = self.address;
        Ok(disassemble_image(&self.bytes, &config)?)
    }
}

/// Extracts every executable section from an `AArch64` object file.
///
/// Sections whose data cannot be read (for example, compressed sections) are
/// skipped with a warning.
///
/// # Errors
///
/// - [`LoaderError::Object`] if `data` is not a readable object file.
/// - [`LoaderError::UnsupportedArchitecture`] for machines other than `AArch64`.
/// - [`LoaderError::NoExecutableSections`] when nothing remains to decode.
pub fn load_text_sections(data: &[u8]) -> Result<Vec<TextSection>, LoaderError> {
    let file = object::File::parse(data)?;

    let arch = file.architecture();
    if !matches!(arch, Architecture::Aarch64 | Architecture::Aarch64_Ilp32) {
        return Err(LoaderError::UnsupportedArchitecture(arch));
    }

    let mut sections = Vec::new();
    for section in file.sections().filter(|s| s.kind() == SectionKind::Text) {
        let name = section.name().unwrap_or_default().to_owned();
        match section.uncompressed_data() {
            Ok(bytes) if bytes.is_empty() => {}
            Ok(bytes) => {
                debug!(
                    section = %name,
                    address = format_args!("{:#x}", section.address()),
                    size = bytes.len(),
                    "text section"
                );
                sections.push(TextSection {
                    name,
                    address: section.address(),
                    bytes: bytes.into_owned(),
                });
            }
            Err(err) => warn!(section = %name, error = %err, "skipping unreadable section"),
        }
    }

    if sections.is_empty() {
        return Err(LoaderError::NoExecutableSections);
    }
    Ok(sections)
}

/// Reads `path` and extracts its executable sections.
///
/// # Errors
///
/// Returns [`LoaderError::Io`] if the file cannot be read, otherwise the
/// errors of [`load_text_sections`].
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<TextSection>, LoaderError> {
    let path = path.as_ref();
    let data = fs::read(path)?;
    debug!(path = %path.display(), bytes = data.len(), "object file read");
    load_text_sections(&data)
}
