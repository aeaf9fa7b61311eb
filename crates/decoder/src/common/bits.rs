//! Bit-field extraction.
//!
//! Every decoder reads its operands through [`BitField`]. A field is an
//! `(offset, length)` pair counted from bit 0. Both extractors use the
//! shift-left-then-shift-right idiom: the field's top bit is pushed into the
//! sign position of the working width, then shifted back down either
//! logically (zero extension) or arithmetically (sign extension). This keeps
//! offset 0 and full-width fields free of out-of-range shift amounts.

/// Field extraction over an unsigned machine word.
///
/// Requesting a field that does not fit in the working width is a decoder
/// bug, so the precondition is asserted rather than reported.
pub trait BitField: Copy {
    /// Signed integer of the same width, used for sign-extended fields.
    type Signed;

    /// Working width in bits.
    const WIDTH: u32;

    /// Returns bit `n`.
    ///
    /// # Panics
    ///
    /// Panics if `n` is not below the working width.
    fn bit(self, n: u32) -> bool;

    /// Extracts the `l`-bit field at offset `n`, zero-extended.
    ///
    /// # Panics
    ///
    /// Panics if `l == 0` or `n + l` exceeds the working width.
    #[must_use]
    fn unsigned(self, n: u32, l: u32) -> Self;

    /// Extracts the `l`-bit field at offset `n`, sign-extended from the
    /// field's own most significant bit.
    ///
    /// # Panics
    ///
    /// Panics if `l == 0` or `n + l` exceeds the working width.
    fn signed(self, n: u32, l: u32) -> Self::Signed;
}

macro_rules! impl_bit_field {
    ($unsigned:ty, $signed:ty) => {
        impl BitField for $unsigned {
            type Signed = $signed;

            const WIDTH: u32 = <$unsigned>::BITS;

            #[inline(always)]
            fn bit(self, n: u32) -> bool {
                assert!(n < Self::WIDTH, "bit {n} out of range for a {}-bit word", Self::WIDTH);
                (self >> n) & 1 == 1
            }

            #[inline(always)]
            fn unsigned(self, n: u32, l: u32) -> Self {
                check_field(n, l, Self::WIDTH);
                (self << (Self::WIDTH - (n + l))) >> (Self::WIDTH - l)
            }

            #[inline(always)]
            fn signed(self, n: u32, l: u32) -> Self::Signed {
                check_field(n, l, Self::WIDTH);
                ((self as $signed) << (Self::WIDTH - (n + l))) >> (Self::WIDTH - l)
            }
        }
    };
}

impl_bit_field!(u32, i32);
impl_bit_field!(u64, i64);

#[inline(always)]
fn check_field(n: u32, l: u32, width: u32) {
    assert!(
        l >= 1 && n < width && l <= width - n,
        "field ({n}, {l}) does not fit in a {width}-bit word"
    );
}

/// Sign-extends the low `bits` bits of `value` to a full `i32`.
///
/// Used where a field is assembled from non-contiguous pieces before it can
/// be sign-extended as a whole.
#[inline]
pub fn sign_extend(value: u32, bits: u32) -> i32 {
    value.signed(0, bits)
}
