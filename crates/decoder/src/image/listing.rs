//! Decoded image listings.

use std::fmt;

use crate::config::ListingConfig;
use crate::isa::instruction::Instruction;

/// One decoded word and where it was found.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Line {
    /// Address of the word.
    pub address: u64,
    /// The raw word.
    pub word: u32,
    /// Decode result.
    pub instruction: Instruction,
}

impl Line {
    /// Writes this line using the columns selected by `format`.
    fn write(&self, f: &mut fmt::Formatter<'_>, format: &ListingConfig) -> fmt::Result {
        if format.show_address {
            write!(f, "{:08x}:  ", self.address)?;
        }
        if format.show_word {
            write!(f, "{:08x}  ", self.word)?;
        }
        write!(f, "{}", self.instruction)?;
        if format.show_targets
            && let Some(target) = self.instruction.target(self.address)
        {
            write!(f, "  ; -> {target:#x}")?;
        }
        Ok(())
    }
}

/// Decode results for a contiguous image, in address order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Listing {
    lines: Vec<Line>,
    format: ListingConfig,
}

impl Listing {
    /// Wraps already ordered lines.
    pub const fn new(lines: Vec<Line>, format: ListingConfig) -> Self {
        Self { lines, format }
    }

    /// The decoded lines.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Number of decoded words.
    pub const fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` when the image held no words.
    pub const fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of words that decoded as unallocated.
    pub fn unallocated_count(&self) -> usize {
        self.lines
            .iter()
            .filter(|line| line.instruction.is_unallocated())
            .count()
    }

    /// Number of words routed to a family without a format decoder.
    pub fn unimplemented_count(&self) -> usize {
        self.lines
            .iter()
            .filter(|line| line.instruction.is_unimplemented())
            .count()
    }

    /// Iterates over the decoded lines.
    pub fn iter(&self) -> std::slice::Iter<'_, Line> {
        self.lines.iter()
    }

    /// Replaces the output format.
    #[must_use]
    pub const fn with_format(mut self, format: ListingConfig) -> Self {
        self.format = format;
        self
    }
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            line.write(f, &self.format)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Listing {
    type Item = &'a Line;
    type IntoIter = std::slice::Iter<'a, Line>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
