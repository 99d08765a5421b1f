//! Procedural macros for `hwreg`.
//!
//! See `hwreg` documentation for details.

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod register;

use proc_macro::TokenStream;

/// Defines a memory-mapped register type with typed field accessors.
///
/// See `hwreg` documentation for details.
#[proc_macro]
pub fn register(input: TokenStream) -> TokenStream {
    register::proc_macro(input)
}
