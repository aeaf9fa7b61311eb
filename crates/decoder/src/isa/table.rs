//! Wildcard dispatch tables.
//!
//! Some encodings are told apart only by fields the architecture fixes to a
//! constant for one mnemonic and leaves free for another (RET against RETAA,
//! BR against BRAA). Such groups are decoded with an ordered list of rows:
//! each row gives an exact value or a wildcard for every field, and the first
//! row whose fixed fields all match selects the result.

/// One field of a dispatch row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pattern {
    /// Matches any value.
    Any,
    /// Matches exactly this value.
    Is(u32),
}

impl Pattern {
    /// Returns `true` if `value` satisfies the pattern.
    #[inline]
    pub const fn matches(self, value: u32) -> bool {
        match self {
            Self::Any => true,
            Self::Is(expected) => expected == value,
        }
    }
}

/// A dispatch row over `N` fields producing `K`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Row<K, const N: usize> {
    /// Field patterns, in the same order as the values passed to [`lookup`].
    pub fields: [Pattern; N],
    /// Result when the row matches.
    pub kind: K,
}

impl<K, const N: usize> Row<K, N> {
    /// Returns `true` if every field pattern accepts the matching value.
    pub fn matches(&self, values: &[u32; N]) -> bool {
        self.fields
            .iter()
            .zip(values)
            .all(|(pattern, &value)| pattern.matches(value))
    }
}

/// Returns the kind of the first row matching `values`.
pub fn lookup<K: Copy, const N: usize>(rows: &[Row<K, N>], values: [u32; N]) -> Option<K> {
    rows.iter().find(|row| row.matches(&values)).map(|row| row.kind)
}

/// Builds a [`Pattern`]: `_` for a wildcard, a literal for an exact value.
macro_rules! pat {
    (_) => {
        $crate::isa::table::Pattern::Any
    };
    ($value:literal) => {
        $crate::isa::table::Pattern::Is($value)
    };
}

/// Builds a [`Row`] from field patterns and a result:
/// `row!(2, 31, 0, _, 0 => BranchKind::Ret)`.
macro_rules! row {
    ($($field:tt),+ => $kind:expr) => {
        $crate::isa::table::Row {
            fields: [$($crate::isa::table::pat!($field)),+],
            kind: $kind,
        }
    };
}

pub(crate) use pat;
pub(crate) use row;
