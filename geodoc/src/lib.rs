//! Assembles GeoJSON documents from Rust types whose fields and accessors carry declarative tags.
//!
//! A type declares its document [`Shape`] once, and tags the members that contribute to the
//! document. [`assemble`] turns an instance into a [`Document`] which serializes as RFC 7946
//! GeoJSON.
//!
//! ```ignore
//! use geodoc::GeoJson;
//!
//! #[derive(GeoJson)]
//! #[geojson(shape = "feature", accessors)]
//! struct Attraction {
//!     #[geojson(id)]
//!     id: String,
//!     #[geojson(property)]
//!     name: String,
//!     #[geojson(geometry)]
//!     location: geo_types::Point,
//!     description: String,
//! }
//!
//! #[geodoc::accessors]
//! impl Attraction {
//!     #[geojson(property = "alteredDescription")]
//!     fn get_description(&self) -> &str {
//!         &self.description
//!     }
//! }
//!
//! let json = geodoc::to_string(&attraction)?;
//! ```
//!
//! Tags per shape:
//! * `feature`: `id` {0,1}, `geometry` {0,1}, `properties` {0,1} **or** `property` {0,}
//! * `feature_collection`: `features` {0,1} **or** `feature` {0,}
//! * `geometry_collection`: `geometries` {0,1} **or** `geometry` {0,}

extern crate self as geodoc;

pub mod assemble;
pub mod document;
pub mod error;
pub mod index;
pub mod member;
pub mod resolve;
pub mod ser;
pub mod tag;
pub mod tagged;
pub mod validate;
pub mod value;

pub use assemble::{assemble, DocumentFactory, IntrospectionFactory};
pub use document::{
    Document, FeatureCollectionDocument, FeatureDocument, GeometryCollectionDocument,
};
pub use error::{BoxError, GeoDocError};
pub use index::MemberIndex;
pub use member::{Member, MemberKind};
pub use ser::{to_string, to_string_pretty, to_value, to_writer};
pub use tag::{Shape, Tag, TagKind};
pub use tagged::{Accessors, GeoJson};
pub use value::{ToValue, Value, ValueKind};

#[cfg(feature = "derive")]
pub use geodoc_derive::{accessors, GeoJson};

#[doc(hidden)]
pub mod __private {
    pub use serde;
}
