use core::fmt::Debug;
use core::mem::size_of;
use core::ops::{Add, BitAnd, BitOr, Not, Shl, Shr, Sub};

/// Raw integer of a hardware register.
///
/// Implemented for the register widths a memory bus can carry in one
/// operation: `u8`, `u16`, `u32`, `u64`.
pub trait Bits
where
    Self: Sized
        + Debug
        + Copy
        + PartialOrd
        + Not<Output = Self>
        + Add<Output = Self>
        + Sub<Output = Self>
        + BitOr<Output = Self>
        + BitAnd<Output = Self>
        + Shl<Self, Output = Self>
        + Shr<Self, Output = Self>,
{
    /// Converts `usize` to `Bits`, truncating the high bits.
    fn from_usize(bits: usize) -> Self;

    /// Widens the value to `usize`.
    fn into_usize(self) -> usize;

    /// Returns the width of the type in bits.
    fn width() -> Self;

    /// Returns the value of zero.
    fn zero() -> Self;

    /// Returns the value of one.
    fn one() -> Self;

    /// Returns `true` if all bits are zeros.
    fn is_zero(self) -> bool;
}

macro_rules! bits {
    ($type:ty) => {
        impl Bits for $type {
            #[inline(always)]
            fn from_usize(bits: usize) -> Self {
                bits as $type
            }

            #[inline(always)]
            fn into_usize(self) -> usize {
                self as usize
            }

            #[inline(always)]
            fn width() -> $type {
                size_of::<$type>() as $type * 8
            }

            #[inline(always)]
            fn zero() -> $type {
                0
            }

            #[inline(always)]
            fn one() -> $type {
                1
            }

            #[inline(always)]
            fn is_zero(self) -> bool {
                self == 0
            }
        }
    };
}

bits!(u8);
bits!(u16);
bits!(u32);
bits!(u64);
