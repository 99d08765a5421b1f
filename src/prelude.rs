//! The `hwreg` prelude.
//!
//! ```
//! use hwreg::prelude::*;
//! ```

pub use crate::bitfield::Bits;
pub use crate::mmio::{Mmio, MmioRegion};
pub use crate::reg::{Register, RegisterAddr};
