//! Minimal relocatable ELF objects for loader tests.

use object::write::Object;
use object::{Architecture, BinaryFormat, Endianness, SectionKind};

/// Builds an ELF object for `arch` with one section per `(name, kind, bytes)`.
pub fn object_with_sections(arch: Architecture, sections: &[(&str, SectionKind, &[u8])]) -> Vec<u8> {
    let mut obj = Object::new(BinaryFormat::Elf, arch, Endianness::Little);
    for &(name, kind, bytes) in sections {
        let id = obj.add_section(Vec::new(), name.as_bytes().to_vec(), kind);
        let _ = obj.append_section_data(id, bytes, 4);
    }
    obj.write().expect("ELF serialization")
}

/// Builds an AArch64 object with a single `.text` section.
pub fn aarch64_text(bytes: &[u8]) -> Vec<u8> {
    object_with_sections(Architecture::Aarch64, &[(".text", SectionKind::Text, bytes)])
}
