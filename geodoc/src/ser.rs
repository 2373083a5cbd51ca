//! Writing documents as GeoJSON with serde.

use std::io::Write;

use serde::ser::{Error as _, SerializeMap};
use serde::{Serialize, Serializer};

use crate::assemble::assemble;
use crate::document::{
    Document, FeatureCollectionDocument, FeatureDocument, GeometryCollectionDocument,
};
use crate::error::GeoDocError;
use crate::tag::Shape;
use crate::tagged::GeoJson;
use crate::value::Value;

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(v) => serializer.serialize_bool(*v),
            Value::Number(v) => v.serialize(serializer),
            Value::String(v) => serializer.serialize_str(v),
            Value::Sequence(v) => serializer.collect_seq(v),
            Value::Mapping(v) => serializer.collect_map(v),
            Value::Geometry(v) => v.serialize(serializer),
            Value::Document(v) => v.serialize(serializer),
        }
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Document::Feature(v) => v.serialize(serializer),
            Document::FeatureCollection(v) => v.serialize(serializer),
            Document::GeometryCollection(v) => v.serialize(serializer),
        }
    }
}

impl Serialize for FeatureDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", Shape::Feature.name())?;
        if let Some(id) = self.id() {
            map.serialize_entry("id", id)?;
        }
        map.serialize_entry("geometry", &self.geometry())?;
        map.serialize_entry("properties", &self.properties())?;
        map.end()
    }
}

impl Serialize for FeatureCollectionDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("type", Shape::FeatureCollection.name())?;
        map.serialize_entry("features", self.features())?;
        map.end()
    }
}

impl Serialize for GeometryCollectionDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("type", Shape::GeometryCollection.name())?;
        map.serialize_entry("geometries", self.geometries())?;
        map.end()
    }
}

/// Assembles and serializes `object`. Usable with `#[serde(serialize_with = "geodoc::ser::serialize")]`.
pub fn serialize<T: GeoJson, S: Serializer>(object: &T, serializer: S) -> Result<S::Ok, S::Error> {
    assemble(object)
        .map_err(S::Error::custom)?
        .serialize(serializer)
}

/// Assembles `object` into a JSON value.
pub fn to_value<T: GeoJson>(object: &T) -> Result<serde_json::Value, GeoDocError> {
    Ok(serde_json::to_value(assemble(object)?)?)
}

/// Assembles `object` into a compact GeoJSON string.
pub fn to_string<T: GeoJson>(object: &T) -> Result<String, GeoDocError> {
    Ok(serde_json::to_string(&assemble(object)?)?)
}

/// Assembles `object` into a pretty printed GeoJSON string.
pub fn to_string_pretty<T: GeoJson>(object: &T) -> Result<String, GeoDocError> {
    Ok(serde_json::to_string_pretty(&assemble(object)?)?)
}

/// Assembles `object` and writes it as GeoJSON.
pub fn to_writer<T: GeoJson, W: Write>(writer: W, object: &T) -> Result<(), GeoDocError> {
    Ok(serde_json::to_writer(writer, &assemble(object)?)?)
}
