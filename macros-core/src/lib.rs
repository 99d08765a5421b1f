//! Shared helpers for the `hwreg` procedural macros.
//!
//! See `hwreg` documentation for details.

#![deny(bare_trait_objects)]
#![deny(elided_lifetimes_in_paths)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod emit;
mod new_struct;

pub use self::{emit::emit_err, new_struct::NewStruct};
