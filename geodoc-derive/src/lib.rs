//! Procedural macros for `geodoc`.
//!
//! `#[derive(GeoJson)]` reads the `#[geojson(...)]` attributes of a struct and its fields.
//! `#[accessors]` does the same for the methods of an inherent impl block, which the derive
//! includes when the struct is marked with `#[geojson(accessors)]`.

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput, ItemImpl};

mod accessors;
mod attr;
mod derive;

/// Implements `geodoc::GeoJson` and `geodoc::ToValue` for a struct.
#[proc_macro_derive(GeoJson, attributes(geojson))]
pub fn derive_geojson(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Implements `geodoc::Accessors` from the tagged methods of an inherent impl block.
#[proc_macro_attribute]
pub fn accessors(args: TokenStream, input: TokenStream) -> TokenStream {
    if !args.is_empty() {
        return syn::Error::new(
            proc_macro2::Span::call_site(),
            "#[accessors] takes no arguments",
        )
        .into_compile_error()
        .into();
    }
    let item = parse_macro_input!(input as ItemImpl);
    accessors::expand(item)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
