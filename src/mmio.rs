//! Register transport.
//!
//! The register layer never issues bus operations itself; it goes through a
//! [`Mmio`] capability injected by the caller. [`MmioRegion`] is the
//! implementation a driver with a plain device mapping would use.

use core::ptr::{read_volatile, write_volatile};

use crate::bitfield::Bits;

/// Bus-level transport performing the actual register reads and writes.
///
/// Each call must be a single, complete bus operation at the width of `T`.
/// Distinct register types may use different widths through the same
/// transport. Thread safety and failure reporting are the implementor's
/// concern; the register layer neither retries nor interprets faults.
pub trait Mmio {
    /// Reads a `T`-wide value at `addr`.
    fn read<T: Bits>(&self, addr: u32) -> T;

    /// Writes a `T`-wide value at `addr`.
    fn write<T: Bits>(&self, addr: u32, value: T);
}

/// [`Mmio`] over a mapped memory region, issuing volatile accesses at
/// `base + addr`.
pub struct MmioRegion {
    base: *mut u8,
}

impl MmioRegion {
    /// Creates a transport over the region mapped at `base`.
    ///
    /// # Safety
    ///
    /// `base` must point to a mapping that covers every address later passed
    /// to [`read`](Mmio::read) or [`write`](Mmio::write) at its full access
    /// width, with each such address aligned to that width, and the mapping
    /// must outlive the returned value.
    #[must_use]
    pub const unsafe fn new(base: *mut u8) -> Self {
        Self { base }
    }
}

impl Mmio for MmioRegion {
    #[inline]
    fn read<T: Bits>(&self, addr: u32) -> T {
        unsafe { read_volatile(self.base.add(addr as usize).cast::<T>()) }
    }

    #[inline]
    fn write<T: Bits>(&self, addr: u32, value: T) {
        unsafe { write_volatile(self.base.add(addr as usize).cast::<T>(), value) }
    }
}
