//! Typed bitfield access to memory-mapped hardware registers.
//!
//! Drivers program hardware through fixed-address registers whose bit ranges
//! carry independently documented meanings. Open-coded shifts and masks are
//! easy to get subtly wrong, and a wrong mask silently corrupts hardware
//! state. This crate derives the shifting, masking, and reserved-bit handling
//! from a single declaration per register, so a field can only be accessed at
//! its declared bit range and width.
//!
//! A register is declared once with [`register!`], which generates a snapshot
//! type with an accessor pair per field. Snapshots are plain values: read one
//! from hardware (or start from an explicit value), update fields in memory,
//! then commit it back with a single write.
//!
//! # Examples
//!
//! ```
//! use hwreg::prelude::*;
//!
//! hwreg::register! {
//!     /// Aux channel control.
//!     pub struct AuxControl: u32 {
//!         /// Transaction enable.
//!         enabled { 31 }
//!         /// Payload size in bytes.
//!         message_size { 24, 20 }
//!     }
//! }
//!
//! const AUX_CONTROL: RegisterAddr<AuxControl> = RegisterAddr::new(0x6_4010);
//!
//! let mut reg = AUX_CONTROL.from_value(0);
//! reg.set_enabled(1).set_message_size(18);
//! assert_eq!(reg.raw(), 0x8120_0000);
//! ```
//!
//! Committing the snapshot goes through a [`Mmio`](mmio::Mmio) transport,
//! typically an [`MmioRegion`](mmio::MmioRegion) over the device mapping:
//! `reg.write_to(&mmio)`.

#![deny(bare_trait_objects)]
#![deny(elided_lifetimes_in_paths)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![no_std]

pub mod bitfield;
pub mod mmio;
pub mod prelude;
pub mod reg;

pub use self::reg::{register, Register, RegisterAddr};
