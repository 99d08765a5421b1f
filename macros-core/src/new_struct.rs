use syn::parse::{Parse, ParseStream, Result};
use syn::{Attribute, Ident, Token, Visibility};

/// Header of a new struct: `#[attrs] pub struct Foo`.
#[allow(missing_docs)]
#[derive(Debug)]
pub struct NewStruct {
    pub attrs: Vec<Attribute>,
    pub vis: Visibility,
    pub ident: Ident,
}

impl Parse for NewStruct {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let vis = input.parse()?;
        input.parse::<Token![struct]>()?;
        let ident = input.parse()?;
        Ok(Self { attrs, vis, ident })
    }
}
