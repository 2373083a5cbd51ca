//! Implementation of `#[derive(GeoJson)]`.

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{parse_quote, Data, DeriveInput, Fields, GenericParam};

use crate::attr::{ContainerAttrs, MemberAttrs};

pub fn expand(mut input: DeriveInput) -> syn::Result<TokenStream> {
    let container = ContainerAttrs::from_ast(&input.attrs)?;
    let name = input.ident.clone();

    let fields: Vec<_> = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => named.named.iter().collect(),
            Fields::Unit => vec![],
            Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    &input.ident,
                    "GeoJson cannot be derived for tuple structs",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "GeoJson can only be derived for structs",
            ))
        }
    };

    let mut members = Vec::with_capacity(fields.len());
    for field in fields {
        let Some(ident) = &field.ident else {
            continue;
        };
        let attrs = MemberAttrs::from_ast(&field.attrs)?;
        if attrs.tags.is_empty() {
            if attrs.serde {
                return Err(syn::Error::new_spanned(
                    ident,
                    "`serde` has no effect on a member without a geojson tag",
                ));
            }
            continue;
        }

        let ident_str = ident.unraw().to_string();
        let conversion = if attrs.serde {
            quote!(::geodoc::Value::serialized(&this.#ident))
        } else {
            quote!(::geodoc::ToValue::to_value(&this.#ident))
        };
        let tags = &attrs.tags;
        members.push(quote! {
            ::geodoc::Member::field(#ident_str, |this: &Self| #conversion)
                #(.with_tag(#tags))*
        });
    }

    let accessors = container.accessors.then(|| {
        quote! {
            members.extend(<Self as ::geodoc::Accessors>::accessor_members());
        }
    });

    let shape = match container.shape {
        Some(shape) => quote!(::core::option::Option::Some(#shape)),
        None => quote!(::core::option::Option::None),
    };

    let factory = container.factory.as_ref().map(|path| {
        quote! {
            fn factory() -> &'static dyn ::geodoc::DocumentFactory<Self> {
                &#path
            }
        }
    });

    let describe = container.debug.then(|| {
        quote! {
            fn describe(&self) -> ::std::string::String {
                ::std::format!("{:?}", self)
            }
        }
    });

    let type_params: Vec<_> = input
        .generics
        .params
        .iter()
        .filter_map(|p| match p {
            GenericParam::Type(t) => Some(t.ident.clone()),
            _ => None,
        })
        .collect();
    let where_clause = input.generics.make_where_clause();
    for param in type_params {
        where_clause.predicates.push(parse_quote!(#param: 'static));
    }
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let serialize = container.serialize.then(|| {
        quote! {
            impl #impl_generics ::geodoc::__private::serde::Serialize for #name #ty_generics #where_clause {
                fn serialize<__S>(&self, serializer: __S) -> ::core::result::Result<__S::Ok, __S::Error>
                where
                    __S: ::geodoc::__private::serde::Serializer,
                {
                    ::geodoc::ser::serialize(self, serializer)
                }
            }
        }
    });

    Ok(quote! {
        impl #impl_generics ::geodoc::GeoJson for #name #ty_generics #where_clause {
            fn shape() -> ::core::option::Option<::geodoc::Shape> {
                #shape
            }

            fn members() -> ::std::vec::Vec<::geodoc::Member<Self>> {
                #[allow(unused_mut)]
                let mut members = ::std::vec![#(#members),*];
                #accessors
                members
            }

            #factory
            #describe
        }

        impl #impl_generics ::geodoc::ToValue for #name #ty_generics #where_clause {
            fn to_value(&self) -> ::core::result::Result<::geodoc::Value, ::geodoc::BoxError> {
                let document = ::geodoc::assemble(self)?;
                ::core::result::Result::Ok(::geodoc::Value::Document(::std::boxed::Box::new(document)))
            }
        }

        #serialize
    })
}
