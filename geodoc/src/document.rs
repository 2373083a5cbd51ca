//! Assembled documents, one variant per [`Shape`].

use std::collections::BTreeMap;

use crate::tag::Shape;
use crate::value::Value;

/// An assembled GeoJSON document.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    /// `Feature` document.
    Feature(FeatureDocument),
    /// `FeatureCollection` document.
    FeatureCollection(FeatureCollectionDocument),
    /// `GeometryCollection` document.
    GeometryCollection(GeometryCollectionDocument),
}

impl Document {
    /// Shape of the document.
    pub fn shape(&self) -> Shape {
        match self {
            Document::Feature(_) => Shape::Feature,
            Document::FeatureCollection(_) => Shape::FeatureCollection,
            Document::GeometryCollection(_) => Shape::GeometryCollection,
        }
    }

    /// Returns the feature document if this is one.
    pub fn as_feature(&self) -> Option<&FeatureDocument> {
        match self {
            Document::Feature(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the feature collection document if this is one.
    pub fn as_feature_collection(&self) -> Option<&FeatureCollectionDocument> {
        match self {
            Document::FeatureCollection(v) => Some(v),
            _ => None,
        }
    }

    /// Converts a document whose shape is a geometry type into that geometry. Other documents
    /// are returned unchanged as the error.
    pub fn into_geometry(self) -> Result<geojson::Geometry, Document> {
        match self {
            Document::GeometryCollection(collection) => Ok(collection.into_geometry()),
            other => Err(other),
        }
    }

    /// Returns the geometry collection document if this is one.
    pub fn as_geometry_collection(&self) -> Option<&GeometryCollectionDocument> {
        match self {
            Document::GeometryCollection(v) => Some(v),
            _ => None,
        }
    }
}

/// A single feature.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureDocument {
    id: Option<Value>,
    geometry: Option<geojson::Geometry>,
    properties: Option<Value>,
}

impl FeatureDocument {
    /// Creates a new feature document.
    pub fn new(
        id: Option<Value>,
        geometry: Option<geojson::Geometry>,
        properties: Option<Value>,
    ) -> Self {
        Self {
            id,
            geometry,
            properties,
        }
    }

    /// Optional feature identifier.
    pub fn id(&self) -> Option<&Value> {
        self.id.as_ref()
    }

    /// Optional geometry.
    pub fn geometry(&self) -> Option<&geojson::Geometry> {
        self.geometry.as_ref()
    }

    /// Optional properties.
    pub fn properties(&self) -> Option<&Value> {
        self.properties.as_ref()
    }

    /// Properties as a mapping, if they are one.
    pub fn property_map(&self) -> Option<&BTreeMap<String, Value>> {
        self.properties.as_ref().and_then(Value::as_mapping)
    }
}

/// A collection of features.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureCollectionDocument {
    features: Vec<Value>,
}

impl FeatureCollectionDocument {
    /// Creates a new feature collection document.
    pub fn new(features: Vec<Value>) -> Self {
        Self { features }
    }

    /// Features of the collection.
    pub fn features(&self) -> &[Value] {
        &self.features
    }
}

/// A collection of geometries.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeometryCollectionDocument {
    geometries: Vec<geojson::Geometry>,
}

impl GeometryCollectionDocument {
    /// Creates a new geometry collection document.
    pub fn new(geometries: Vec<geojson::Geometry>) -> Self {
        Self { geometries }
    }

    /// Geometries of the collection.
    pub fn geometries(&self) -> &[geojson::Geometry] {
        &self.geometries
    }

    /// The collection as a `GeometryCollection` geometry.
    pub fn into_geometry(self) -> geojson::Geometry {
        geojson::Geometry::new(geojson::Value::GeometryCollection(self.geometries))
    }
}

impl From<FeatureDocument> for Document {
    fn from(value: FeatureDocument) -> Self {
        Document::Feature(value)
    }
}

impl From<FeatureCollectionDocument> for Document {
    fn from(value: FeatureCollectionDocument) -> Self {
        Document::FeatureCollection(value)
    }
}

impl From<GeometryCollectionDocument> for Document {
    fn from(value: GeometryCollectionDocument) -> Self {
        Document::GeometryCollection(value)
    }
}
