//! Assembly of documents from tagged instances.

use std::collections::BTreeMap;

use crate::document::{
    Document, FeatureCollectionDocument, FeatureDocument, GeometryCollectionDocument,
};
use crate::error::GeoDocError;
use crate::index::MemberIndex;
use crate::resolve::{check, resolve, resolve_geometry};
use crate::tag::{Shape, TagKind};
use crate::tagged::GeoJson;
use crate::validate::validate;
use crate::value::{Value, ValueKind};

/// Engine turning instances of `T` into documents.
///
/// [`IntrospectionFactory`] is used unless the type names another one with
/// `#[geojson(factory = "...")]`.
pub trait DocumentFactory<T> {
    /// Assembles the document of `object`.
    fn create(&self, object: &T) -> Result<Document, GeoDocError>;
}

/// Default engine: assembles documents from the member index of the type.
#[derive(Debug, Default, Copy, Clone)]
pub struct IntrospectionFactory;

impl<T: GeoJson> DocumentFactory<T> for IntrospectionFactory {
    fn create(&self, object: &T) -> Result<Document, GeoDocError> {
        let shape = declared_shape::<T>()?;
        let index = MemberIndex::<T>::of();
        let index: &MemberIndex<T> = &index;
        validate(index, shape)?;

        log::trace!(
            "Assembling {shape} from {} with {} tagged members",
            std::any::type_name::<T>(),
            index.members().len()
        );

        Ok(match shape {
            Shape::Feature => feature_from(object, index)?.into(),
            Shape::FeatureCollection => feature_collection_from(object, index)?.into(),
            Shape::GeometryCollection => geometry_collection_from(object, index)?.into(),
        })
    }
}

/// Assembles the document of `object` with the engine declared by its type.
pub fn assemble<T: GeoJson>(object: &T) -> Result<Document, GeoDocError> {
    declared_shape::<T>()?;
    T::factory().create(object)
}

/// Shape declared by `T`.
pub fn declared_shape<T: GeoJson>() -> Result<Shape, GeoDocError> {
    T::shape().ok_or(GeoDocError::MissingShapeTag {
        type_name: std::any::type_name::<T>(),
    })
}

fn feature_from<T: GeoJson>(
    object: &T,
    index: &MemberIndex<T>,
) -> Result<FeatureDocument, GeoDocError> {
    let id = match index.first(TagKind::Id) {
        Some(member) => non_null(resolve(object, member, ValueKind::Any)?),
        None => None,
    };

    let geometry = match index.first(TagKind::Geometry) {
        Some(member) => resolve_geometry(object, member)?,
        None => None,
    };

    let properties = if let Some(member) = index.first(TagKind::Properties) {
        non_null(resolve(object, member, ValueKind::Any)?)
    } else if index.count(TagKind::Property) > 0 {
        let mut map = BTreeMap::new();
        for member in index.tagged(TagKind::Property) {
            let value = resolve(object, member, ValueKind::Any)?;
            map.insert(member.property_key().to_string(), value);
        }
        Some(Value::Mapping(map))
    } else {
        None
    };

    Ok(FeatureDocument::new(id, geometry, properties))
}

fn feature_collection_from<T: GeoJson>(
    object: &T,
    index: &MemberIndex<T>,
) -> Result<FeatureCollectionDocument, GeoDocError> {
    let features = if let Some(member) = index.first(TagKind::Features) {
        into_sequence(resolve(object, member, ValueKind::Any)?)
    } else {
        let mut features = vec![];
        for member in index.tagged(TagKind::Feature) {
            let value = resolve(object, member, ValueKind::Any)?;
            if !value.is_null() {
                features.push(value);
            }
        }
        features
    };

    Ok(FeatureCollectionDocument::new(features))
}

fn geometry_collection_from<T: GeoJson>(
    object: &T,
    index: &MemberIndex<T>,
) -> Result<GeometryCollectionDocument, GeoDocError> {
    let mut geometries = vec![];
    if let Some(member) = index.first(TagKind::Geometries) {
        let values = into_sequence(resolve(object, member, ValueKind::Any)?);
        for value in values {
            if let Value::Geometry(geometry) = check(object, member, ValueKind::Geometry, value)? {
                geometries.push(geometry);
            }
        }
    } else {
        for member in index.tagged(TagKind::Geometry) {
            if let Some(geometry) = resolve_geometry(object, member)? {
                geometries.push(geometry);
            }
        }
    }

    Ok(GeometryCollectionDocument::new(geometries))
}

fn non_null(value: Value) -> Option<Value> {
    match value {
        Value::Null => None,
        v => Some(v),
    }
}

/// Sequences are kept, an absent value is empty and anything else is a one-element sequence.
fn into_sequence(value: Value) -> Vec<Value> {
    match value {
        Value::Sequence(values) => values,
        Value::Null => vec![],
        v => vec![v],
    }
}
