//! Parsing of the `#[geojson(...)]` attribute namespace.

use proc_macro2::TokenStream;
use quote::{quote, ToTokens};
use syn::{Attribute, LitStr, Path, Token};

const NAMESPACE: &str = "geojson";

/// Returns true for `#[geojson(...)]` attributes.
pub fn is_geojson(attr: &Attribute) -> bool {
    attr.path().is_ident(NAMESPACE)
}

/// Document shape given with `shape = "..."`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeAttr {
    Feature,
    FeatureCollection,
    GeometryCollection,
}

impl ShapeAttr {
    fn parse(lit: &LitStr) -> syn::Result<Self> {
        match lit.value().as_str() {
            "feature" | "Feature" => Ok(ShapeAttr::Feature),
            "feature_collection" | "FeatureCollection" => Ok(ShapeAttr::FeatureCollection),
            "geometry_collection" | "GeometryCollection" => Ok(ShapeAttr::GeometryCollection),
            other => Err(syn::Error::new(
                lit.span(),
                format!(
                    "unknown geojson shape `{other}`, expected one of \
                     `feature`, `feature_collection`, `geometry_collection`"
                ),
            )),
        }
    }
}

impl ToTokens for ShapeAttr {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        tokens.extend(match self {
            ShapeAttr::Feature => quote!(::geodoc::Shape::Feature),
            ShapeAttr::FeatureCollection => quote!(::geodoc::Shape::FeatureCollection),
            ShapeAttr::GeometryCollection => quote!(::geodoc::Shape::GeometryCollection),
        });
    }
}

/// Container attributes.
///
/// - `shape = "..."` - document shape; without it assembly fails at runtime
/// - `factory = "path"` - unit struct implementing `DocumentFactory<Self>`
/// - `accessors` - append the members of an `#[accessors]` impl block
/// - `serialize` - implement `serde::Serialize` as GeoJSON
/// - `debug` - describe instances in errors with their `Debug` output
#[derive(Default)]
pub struct ContainerAttrs {
    pub shape: Option<ShapeAttr>,
    pub factory: Option<Path>,
    pub accessors: bool,
    pub serialize: bool,
    pub debug: bool,
}

impl ContainerAttrs {
    pub fn from_ast(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = Self::default();
        for attr in attrs.iter().filter(|a| is_geojson(a)) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("shape") {
                    let lit: LitStr = meta.value()?.parse()?;
                    result.shape = Some(ShapeAttr::parse(&lit)?);
                } else if meta.path.is_ident("factory") {
                    let lit: LitStr = meta.value()?.parse()?;
                    result.factory = Some(lit.parse()?);
                } else if meta.path.is_ident("accessors") {
                    result.accessors = true;
                } else if meta.path.is_ident("serialize") {
                    result.serialize = true;
                } else if meta.path.is_ident("debug") {
                    result.debug = true;
                } else {
                    return Err(meta.error("unknown geojson container attribute"));
                }
                Ok(())
            })?;
        }
        Ok(result)
    }
}

/// A member tag.
#[derive(Clone)]
pub enum TagAttr {
    Id,
    Geometry,
    Geometries,
    Properties,
    Property(Option<LitStr>),
    Features,
    Feature,
}

impl ToTokens for TagAttr {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        tokens.extend(match self {
            TagAttr::Id => quote!(::geodoc::Tag::Id),
            TagAttr::Geometry => quote!(::geodoc::Tag::Geometry),
            TagAttr::Geometries => quote!(::geodoc::Tag::Geometries),
            TagAttr::Properties => quote!(::geodoc::Tag::Properties),
            TagAttr::Property(None) => {
                quote!(::geodoc::Tag::Property(::core::option::Option::None))
            }
            TagAttr::Property(Some(name)) => quote!(::geodoc::Tag::Property(
                ::core::option::Option::Some(::std::borrow::Cow::Borrowed(#name))
            )),
            TagAttr::Features => quote!(::geodoc::Tag::Features),
            TagAttr::Feature => quote!(::geodoc::Tag::Feature),
        });
    }
}

/// Field and accessor attributes.
///
/// - `id`, `geometry`, `geometries`, `properties`, `features`, `feature` - tags
/// - `property`, `property = "key"`, `property(name = "key")` - property tag
/// - `serde` - convert the value with `serde_json` instead of `ToValue`
#[derive(Default)]
pub struct MemberAttrs {
    pub tags: Vec<TagAttr>,
    pub serde: bool,
}

impl MemberAttrs {
    pub fn from_ast(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = Self::default();
        for attr in attrs.iter().filter(|a| is_geojson(a)) {
            attr.parse_nested_meta(|meta| {
                let tag = if meta.path.is_ident("id") {
                    TagAttr::Id
                } else if meta.path.is_ident("geometry") {
                    TagAttr::Geometry
                } else if meta.path.is_ident("geometries") {
                    TagAttr::Geometries
                } else if meta.path.is_ident("properties") {
                    TagAttr::Properties
                } else if meta.path.is_ident("features") {
                    TagAttr::Features
                } else if meta.path.is_ident("feature") {
                    TagAttr::Feature
                } else if meta.path.is_ident("property") {
                    let mut name = None;
                    if meta.input.peek(Token![=]) {
                        name = Some(meta.value()?.parse::<LitStr>()?);
                    } else if meta.input.peek(syn::token::Paren) {
                        meta.parse_nested_meta(|inner| {
                            if inner.path.is_ident("name") {
                                name = Some(inner.value()?.parse::<LitStr>()?);
                                Ok(())
                            } else {
                                Err(inner.error("expected `name = \"...\"`"))
                            }
                        })?;
                    }
                    if let Some(lit) = &name {
                        if lit.value().trim().is_empty() {
                            return Err(syn::Error::new(lit.span(), "property name is blank"));
                        }
                    }
                    TagAttr::Property(name)
                } else if meta.path.is_ident("serde") {
                    result.serde = true;
                    return Ok(());
                } else {
                    return Err(meta.error("unknown geojson member attribute"));
                };
                result.tags.push(tag);
                Ok(())
            })?;
        }
        Ok(result)
    }
}
