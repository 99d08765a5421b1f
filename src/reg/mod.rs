//! In-memory register snapshots and typed register addresses.
//!
//! A [`Register`] implementor is a staging copy of one hardware register: it
//! holds the register's address and a value, and commits the value back to
//! hardware in a single transport write. [`RegisterAddr`] binds a fixed
//! address to a register type and is the constructor surface for snapshots.
//!
//! Register types are not written by hand; declare them with
//! [`register!`](crate::register).

use core::marker::PhantomData;

use crate::bitfield::Bits;
use crate::mmio::Mmio;

pub use hwreg_macros::register;

/// In-memory snapshot of one hardware register.
///
/// Implemented by types generated with [`register!`](crate::register). The
/// generated field accessors are the sanctioned way to inspect and modify
/// the value; `raw`/`raw_mut` bypass field width checking and exist for the
/// declaration machinery and for whole-value comparisons.
///
/// A snapshot is a plain unshared value. Nothing here makes a
/// read-modify-write sequence atomic with respect to other cores or
/// interrupt handlers; callers that need that must hold their own exclusion
/// around the sequence.
pub trait Register: Sized {
    /// Raw integer type of the register.
    type Raw: Bits;

    /// Aggregated mask of the declared reserved-zero ranges.
    ///
    /// These bits are forced to zero in every value transmitted by
    /// [`write_to`](Register::write_to), whatever the snapshot holds there.
    const RSVDZ_MASK: Self::Raw;

    /// Creates a snapshot from an address and raw bits.
    ///
    /// Prefer going through [`RegisterAddr`], which supplies the address.
    fn from_raw(addr: u32, bits: Self::Raw) -> Self;

    /// Returns the bound register address.
    fn addr(&self) -> u32;

    /// Returns the raw register value.
    fn raw(&self) -> Self::Raw;

    /// Returns a mutable reference to the raw register value.
    fn raw_mut(&mut self) -> &mut Self::Raw;

    /// Replaces the snapshot with the register's current hardware value.
    #[inline]
    fn read_from<M: Mmio>(&mut self, mmio: &M) {
        *self.raw_mut() = mmio.read(self.addr());
    }

    /// Writes the snapshot to hardware, with reserved-zero bits cleared in
    /// the transmitted value. The snapshot itself is left unchanged.
    #[inline]
    fn write_to<M: Mmio>(&self, mmio: &M) {
        mmio.write(self.addr(), self.raw() & !Self::RSVDZ_MASK);
    }
}

/// Typed binding between a fixed address and a register type.
///
/// Immutable and typically a `const` per register. One binding yields any
/// number of transient snapshots over a program's life.
pub struct RegisterAddr<R: Register> {
    addr: u32,
    reg: PhantomData<R>,
}

impl<R: Register> RegisterAddr<R> {
    /// Creates a binding of `R` to `addr`.
    #[must_use]
    pub const fn new(addr: u32) -> Self {
        Self { addr, reg: PhantomData }
    }

    /// Reads the register and returns the populated snapshot.
    #[inline]
    pub fn read_from<M: Mmio>(&self, mmio: &M) -> R {
        let mut reg = R::from_raw(self.addr, R::Raw::zero());
        reg.read_from(mmio);
        reg
    }

    /// Returns a snapshot holding `value`, without touching hardware.
    ///
    /// Used to build a register image from scratch when reading first is
    /// unnecessary or has side effects.
    #[inline]
    pub fn from_value(&self, value: R::Raw) -> R {
        R::from_raw(self.addr, value)
    }

    /// Returns the bound address.
    #[must_use]
    pub const fn addr(&self) -> u32 {
        self.addr
    }
}

impl<R: Register> Clone for RegisterAddr<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Register> Copy for RegisterAddr<R> {}

#[cfg(test)]
mod tests {
    use core::cell::Cell;
    use core::mem::size_of;

    use super::*;

    struct Scratch {
        addr: u32,
        bits: u32,
    }

    impl Register for Scratch {
        type Raw = u32;

        const RSVDZ_MASK: u32 = 0x0000_FF00;

        fn from_raw(addr: u32, bits: u32) -> Self {
            Self { addr, bits }
        }

        fn addr(&self) -> u32 {
            self.addr
        }

        fn raw(&self) -> u32 {
            self.bits
        }

        fn raw_mut(&mut self) -> &mut u32 {
            &mut self.bits
        }
    }

    struct OneCell {
        addr: Cell<u32>,
        value: Cell<usize>,
    }

    impl OneCell {
        fn with_value(value: usize) -> Self {
            Self { addr: Cell::new(0), value: Cell::new(value) }
        }
    }

    impl Mmio for OneCell {
        fn read<T: Bits>(&self, _addr: u32) -> T {
            T::from_usize(self.value.get())
        }

        fn write<T: Bits>(&self, addr: u32, value: T) {
            self.addr.set(addr);
            self.value.set(value.into_usize());
        }
    }

    const SCRATCH: RegisterAddr<Scratch> = RegisterAddr::new(0x20);

    #[test]
    fn size_of_register_addr() {
        assert_eq!(size_of::<RegisterAddr<Scratch>>(), 4);
    }

    #[test]
    fn from_value_does_not_touch_hardware() {
        let reg = SCRATCH.from_value(0xCAFE_0000);
        assert_eq!(reg.addr(), 0x20);
        assert_eq!(reg.raw(), 0xCAFE_0000);
    }

    #[test]
    fn read_from_populates_snapshot() {
        let mmio = OneCell::with_value(0xBEEF_CACE);
        let reg = SCRATCH.read_from(&mmio);
        assert_eq!(reg.raw(), 0xBEEF_CACE);
        assert_eq!(reg.addr(), 0x20);
    }

    #[test]
    fn write_to_clears_reserved_bits() {
        let mmio = OneCell::with_value(0);
        let reg = SCRATCH.from_value(0xFFFF_FFFF);
        reg.write_to(&mmio);
        assert_eq!(mmio.addr.get(), 0x20);
        assert_eq!(mmio.value.get(), 0xFFFF_00FF);
        // writing leaves the in-memory value alone
        assert_eq!(reg.raw(), 0xFFFF_FFFF);
    }

    #[test]
    fn reread_overwrites_prior_value() {
        let mmio = OneCell::with_value(0x11);
        let mut reg = SCRATCH.from_value(0xFF);
        reg.read_from(&mmio);
        assert_eq!(reg.raw(), 0x11);
    }
}
