//! Implementation of the `#[accessors]` attribute macro.

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{FnArg, ImplItem, ItemImpl, Signature};

use crate::attr::{is_geojson, MemberAttrs};

pub fn expand(mut item: ItemImpl) -> syn::Result<TokenStream> {
    if let Some((_, path, _)) = &item.trait_ {
        return Err(syn::Error::new_spanned(
            path,
            "#[accessors] expects an inherent impl block",
        ));
    }

    let mut members = vec![];
    for impl_item in item.items.iter_mut() {
        let ImplItem::Fn(method) = impl_item else {
            continue;
        };
        let attrs = MemberAttrs::from_ast(&method.attrs)?;
        method.attrs.retain(|a| !is_geojson(a));
        if attrs.tags.is_empty() {
            if attrs.serde {
                return Err(syn::Error::new_spanned(
                    &method.sig.ident,
                    "`serde` has no effect on a member without a geojson tag",
                ));
            }
            continue;
        }
        check_signature(&method.sig)?;

        let ident = &method.sig.ident;
        let ident_str = ident.unraw().to_string();
        let conversion = if attrs.serde {
            quote!(::geodoc::Value::serialized(&this.#ident()))
        } else {
            quote!(::geodoc::ToValue::to_value(&this.#ident()))
        };
        let tags = &attrs.tags;
        members.push(quote! {
            ::geodoc::Member::accessor(#ident_str, |this: &Self| #conversion)
                #(.with_tag(#tags))*
        });
    }

    let self_ty = &item.self_ty;
    let (impl_generics, _, where_clause) = item.generics.split_for_impl();

    Ok(quote! {
        #item

        impl #impl_generics ::geodoc::Accessors for #self_ty #where_clause {
            fn accessor_members() -> ::std::vec::Vec<::geodoc::Member<Self>> {
                ::std::vec![#(#members),*]
            }
        }
    })
}

/// Accessors take `&self` and nothing else.
fn check_signature(sig: &Signature) -> syn::Result<()> {
    let error = || {
        syn::Error::new_spanned(
            &sig.ident,
            "geojson accessors must take only `&self` and have no generic parameters",
        )
    };

    if sig.inputs.len() != 1
        || !sig.generics.params.is_empty()
        || sig.asyncness.is_some()
        || sig.unsafety.is_some()
    {
        return Err(error());
    }
    match sig.inputs.first() {
        Some(FnArg::Receiver(receiver))
            if receiver.reference.is_some() && receiver.mutability.is_none() =>
        {
            Ok(())
        }
        _ => Err(error()),
    }
}
