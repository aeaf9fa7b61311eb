//! Instruction streams.
//!
//! Turns byte buffers into sequences of decoded instructions. A64 words are
//! always four bytes, little-endian and naturally aligned, so an image is
//! decoded by chunking rather than by a length-driven fetch loop. Large
//! images may be split across scoped worker threads; each worker decodes a
//! contiguous run of words and the results are joined in address order.

/// Address-ordered decode results and their text form.
pub mod listing;

/// ELF text-section extraction.
pub mod loader;

use std::panic;
use std::thread;

use tracing::{debug, trace};

use crate::common::DecodeError;
use crate::config::Config;
use crate::isa::decode::{WORD_BYTES, decode};

pub use crate::isa::decode::decode_bytes;
pub use listing::{Line, Listing};
pub use loader::{TextSection, load_file, load_text_sections};

/// Iterates over the complete little-endian words of `bytes`.
///
/// Trailing bytes that do not fill a word are ignored; use
/// [`disassemble_image`] to have them reported.
pub fn words(bytes: &[u8]) -> impl Iterator<Item = u32> + '_ {
    bytes
        .chunks_exact(WORD_BYTES)
        .map(|chunk| u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
}

/// Decodes a whole image into a listing.
///
/// The first word is placed at `config.image.base_address`. With more than
/// one worker configured, the image is split into contiguous word runs that
/// are decoded in parallel; the listing is the same either way.
///
/// # Errors
///
/// Returns [`DecodeError::TrailingBytes`] if the length of `bytes` is not a
/// multiple of four.
pub fn disassemble_image(bytes: &[u8], config: &Config) -> Result<Listing, DecodeError> {
    let remainder = bytes.len() % WORD_BYTES;
    if remainder != 0 {
        return Err(DecodeError::TrailingBytes {
            offset: bytes.len() - remainder,
            remainder,
        });
    }

    let base = config.image.base_address;
    let workers = config.image.effective_workers();
    let word_count = bytes.len() / WORD_BYTES;

    let lines = if workers == 1 || word_count < workers * 2 {
        decode_run(bytes, base, config.general.trace_decode)
    } else {
        decode_parallel(bytes, base, workers, config.general.trace_decode)
    };

    let listing = Listing::new(lines, config.listing.clone());
    debug!(
        base = format_args!("{base:#x}"),
        words = word_count,
        workers,
        unallocated = listing.unallocated_count(),
        unimplemented = listing.unimplemented_count(),
        "image decoded"
    );
    Ok(listing)
}

/// Decodes a word-aligned run starting at `base`.
fn decode_run(bytes: &[u8], base: u64, trace_decode: bool) -> Vec<Line> {
    words(bytes)
        .enumerate()
        .map(|(index, word)| {
            let address = base.wrapping_add((index * WORD_BYTES) as u64);
            let instruction = decode(word);
            if trace_decode {
                trace!(
                    address = format_args!("{address:#x}"),
                    word = format_args!("{word:08x}"),
                    "{instruction}"
                );
            }
            Line {
                address,
                word,
                instruction,
            }
        })
        .collect()
}

/// Splits `bytes` into one word-aligned chunk per worker and decodes the
/// chunks on scoped threads.
fn decode_parallel(bytes: &[u8], base: u64, workers: usize, trace_decode: bool) -> Vec<Line> {
    let word_count = bytes.len() / WORD_BYTES;
    let chunk_bytes = word_count.div_ceil(workers) * WORD_BYTES;

    thread::scope(|scope| {
        let handles: Vec<_> = bytes
            .chunks(chunk_bytes)
            .enumerate()
            .map(|(index, chunk)| {
                let chunk_base = base.wrapping_add((index * chunk_bytes) as u64);
                scope.spawn(move || decode_run(chunk, chunk_base, trace_decode))
            })
            .collect();

        let mut lines = Vec::with_capacity(word_count);
        for handle in handles {
            match handle.join() {
                Ok(chunk) => lines.extend(chunk),
                Err(payload) => panic::resume_unwind(payload),
            }
        }
        lines
    })
}
