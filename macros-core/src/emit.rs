use proc_macro2::{Span, TokenStream};
use syn::Error;

/// Generates a `compile_error!` invocation carrying `msg` at `span`.
pub fn emit_err(span: Span, msg: &str) -> TokenStream {
    Error::new(span, msg).to_compile_error()
}
