use hwreg_macros_core::{emit_err, NewStruct};
use proc_macro::TokenStream;
use proc_macro2::{Literal, TokenStream as TokenStream2};
use quote::quote;
use syn::parse::{Parse, ParseStream, Result};
use syn::{braced, parse_macro_input, Attribute, Error, Ident, LitInt, Token};

#[derive(Debug)]
struct RegisterDef {
    header: NewStruct,
    raw: Ident,
    fields: Vec<Field>,
}

#[derive(Debug)]
struct Field {
    attrs: Vec<Attribute>,
    ident: Ident,
    bit_high: u32,
    bit_low: u32,
}

impl Parse for RegisterDef {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        let header = input.parse()?;
        input.parse::<Token![:]>()?;
        let raw = input.parse()?;
        let content;
        braced!(content in input);
        let mut fields = Vec::new();
        while !content.is_empty() {
            fields.push(content.parse()?);
        }
        Ok(Self { header, raw, fields })
    }
}

impl Parse for Field {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let ident = input.parse()?;
        let content;
        braced!(content in input);
        let bit_high: u32 = content.parse::<LitInt>()?.base10_parse()?;
        let bit_low = if content.is_empty() {
            bit_high
        } else {
            content.parse::<Token![,]>()?;
            let lit = content.parse::<LitInt>()?;
            let bit_low: u32 = lit.base10_parse()?;
            if bit_low > bit_high {
                return Err(Error::new(
                    lit.span(),
                    "inverted bit range: the upper bit comes first",
                ));
            }
            bit_low
        };
        Ok(Self { attrs, ident, bit_high, bit_low })
    }
}

pub fn proc_macro(input: TokenStream) -> TokenStream {
    let def = parse_macro_input!(input as RegisterDef);
    def.expand().into()
}

impl RegisterDef {
    fn expand(self) -> TokenStream2 {
        let Self { header: NewStruct { attrs, vis, ident }, raw, fields } = self;
        let width = match raw.to_string().as_str() {
            "u8" => 8_u32,
            "u16" => 16,
            "u32" => 32,
            "u64" => 64,
            _ => {
                return emit_err(
                    raw.span(),
                    &format!(
                        "`{raw}` is not a supported register width: expected one of `u8`, \
                         `u16`, `u32`, `u64`"
                    ),
                )
            }
        };
        let mut used = 0_u128;
        let mut rsvdz = 0_u128;
        let mut field_tokens = Vec::new();
        for Field { attrs: field_attrs, ident: field_ident, bit_high, bit_low } in fields {
            if bit_high >= width {
                return emit_err(
                    field_ident.span(),
                    &format!("field `{field_ident}`: bit {bit_high} is out of range for `{raw}`"),
                );
            }
            let mask = bit_range_mask(bit_high, bit_low);
            if used & mask != 0 {
                return emit_err(
                    field_ident.span(),
                    &format!("field `{field_ident}` overlaps a previously declared field"),
                );
            }
            used |= mask;
            if field_ident == "rsvdz" {
                rsvdz |= mask;
                continue;
            }
            let set_ident = Ident::new(&format!("set_{field_ident}"), field_ident.span());
            let bit_high = Literal::u32_unsuffixed(bit_high);
            let bit_low = Literal::u32_unsuffixed(bit_low);
            let field_attrs = &field_attrs;
            field_tokens.push(quote! {
                #(#field_attrs)*
                #[inline]
                pub fn #field_ident(&self) -> #raw {
                    ::hwreg::bitfield::get(self.bits, #bit_high, #bit_low)
                }
            });
            field_tokens.push(quote! {
                #(#field_attrs)*
                #[inline]
                pub fn #set_ident(&mut self, value: #raw) -> &mut Self {
                    ::hwreg::bitfield::set(&mut self.bits, #bit_high, #bit_low, value);
                    self
                }
            });
        }
        let rsvdz = Literal::u128_unsuffixed(rsvdz);

        quote! {
            #(#attrs)*
            #[derive(Clone, Copy, PartialEq, Eq, Debug)]
            #vis struct #ident {
                addr: u32,
                bits: #raw,
            }

            impl ::hwreg::Register for #ident {
                type Raw = #raw;

                const RSVDZ_MASK: #raw = #rsvdz;

                #[inline]
                fn from_raw(addr: u32, bits: #raw) -> Self {
                    Self { addr, bits }
                }

                #[inline]
                fn addr(&self) -> u32 {
                    self.addr
                }

                #[inline]
                fn raw(&self) -> #raw {
                    self.bits
                }

                #[inline]
                fn raw_mut(&mut self) -> &mut #raw {
                    &mut self.bits
                }
            }

            impl #ident {
                #(#field_tokens)*
            }
        }
    }
}

fn bit_range_mask(bit_high: u32, bit_low: u32) -> u128 {
    ((1 << (bit_high - bit_low + 1)) - 1) << bit_low
}

#[cfg(test)]
mod tests {
    use proc_macro2::TokenStream;
    use quote::quote;
    use syn::parse2;

    use super::RegisterDef;

    fn expand(input: TokenStream) -> String {
        parse2::<RegisterDef>(input).unwrap().expand().to_string()
    }

    #[test]
    fn generates_accessor_pairs_and_mask() {
        let out = expand(quote! {
            /// Aux channel control.
            pub struct AuxControl: u32 {
                enabled { 31 }
                message_size { 24, 20 }
                rsvdz { 19, 0 }
            }
        });
        assert!(out.contains("pub fn enabled"));
        assert!(out.contains("pub fn set_enabled"));
        assert!(out.contains("pub fn message_size"));
        assert!(out.contains("pub fn set_message_size"));
        assert!(!out.contains("rsvdz"));
        // [19:0] folds to 0xF_FFFF
        assert!(out.contains("const RSVDZ_MASK : u32 = 1048575"));
    }

    #[test]
    fn rejects_inverted_range() {
        let err = parse2::<RegisterDef>(quote! {
            pub struct Bad: u32 {
                field { 4, 11 }
            }
        })
        .unwrap_err();
        assert!(err.to_string().contains("inverted bit range"));
    }

    #[test]
    fn rejects_out_of_range_bit() {
        let out = expand(quote! {
            pub struct Bad: u16 {
                field { 16 }
            }
        });
        assert!(out.contains("compile_error"));
        assert!(out.contains("bit 16 is out of range for `u16`"));
    }

    #[test]
    fn rejects_unsupported_width() {
        let out = expand(quote! {
            pub struct Bad: i32 {
                field { 0 }
            }
        });
        assert!(out.contains("compile_error"));
        assert!(out.contains("`i32` is not a supported register width"));
    }

    #[test]
    fn rejects_overlapping_fields() {
        let out = expand(quote! {
            pub struct Bad: u32 {
                a { 10, 4 }
                b { 6, 0 }
            }
        });
        assert!(out.contains("compile_error"));
        assert!(out.contains("field `b` overlaps a previously declared field"));
    }

    #[test]
    fn rejects_field_overlapping_rsvdz() {
        let out = expand(quote! {
            pub struct Bad: u32 {
                rsvdz { 15, 8 }
                field { 8 }
            }
        });
        assert!(out.contains("field `field` overlaps a previously declared field"));
    }
}
