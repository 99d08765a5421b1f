//! Accessor primitives for inclusive bit ranges of an unsigned integer.
//!
//! A field occupies the bits `[bit_low, bit_high]` of a register value, both
//! ends inclusive, upper bit first to line up with hardware documentation.
//! [`get`] and [`set`] are the building blocks the accessors generated by
//! [`register!`](crate::register) delegate to; they allocate nothing and
//! never touch bits outside the range.
//!
//! Example:
//!
//! ```
//! use hwreg::bitfield;
//!
//! let mut bits = 0x0000_0F00_u32;
//! bitfield::set(&mut bits, 24, 20, 18);
//! assert_eq!(bits, 0x0120_0F00);
//! assert_eq!(bitfield::get(bits, 24, 20), 18);
//! ```

mod bits;

pub use self::bits::Bits;

/// Returns the value of the bit range `[bit_low, bit_high]` of `bits`.
///
/// The result has no bits set outside the field width.
///
/// # Panics
///
/// If `bit_low > bit_high`, or `bit_high` is out of range for `T`.
#[inline]
pub fn get<T: Bits>(bits: T, bit_high: T, bit_low: T) -> T {
    assert!(bit_low <= bit_high);
    assert!(bit_high < T::width());
    if bit_high - bit_low + T::one() == T::width() {
        bits
    } else {
        bits >> bit_low & field_mask(bit_high, bit_low)
    }
}

/// Replaces the bit range `[bit_low, bit_high]` of `*bits` with `value`.
///
/// Bits outside the range are left untouched.
///
/// # Panics
///
/// * If `bit_low > bit_high`, or `bit_high` is out of range for `T`.
/// * If `value` has bits set outside the field width. An oversized value is
///   a bug in the caller and is never truncated.
#[inline]
pub fn set<T: Bits>(bits: &mut T, bit_high: T, bit_low: T, value: T) {
    assert!(bit_low <= bit_high);
    assert!(bit_high < T::width());
    if bit_high - bit_low + T::one() == T::width() {
        *bits = value;
    } else {
        let mask = field_mask(bit_high, bit_low);
        assert!((value & !mask).is_zero(), "field value exceeds the field width");
        *bits = *bits & !(mask << bit_low) | value << bit_low;
    }
}

fn field_mask<T: Bits>(bit_high: T, bit_low: T) -> T {
    (T::one() << (bit_high - bit_low + T::one())) - T::one()
}
