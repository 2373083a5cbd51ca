//! Declarative member tags and the type-level [`Shape`] selector.

use std::borrow::Cow;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::GeoDocError;

/// Kind of a member tag, without any payload. Members are grouped by this key.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TagKind {
    /// Feature `id` member.
    Id,
    /// Feature geometry, or one member of a geometry collection.
    Geometry,
    /// All geometries of a geometry collection.
    Geometries,
    /// The whole `properties` object of a feature.
    Properties,
    /// One entry of the `properties` object of a feature.
    Property,
    /// All features of a feature collection.
    Features,
    /// One member of a feature collection.
    Feature,
}

impl TagKind {
    /// All tag kinds in declaration order.
    pub const ALL: [TagKind; 7] = [
        TagKind::Id,
        TagKind::Geometry,
        TagKind::Geometries,
        TagKind::Properties,
        TagKind::Property,
        TagKind::Features,
        TagKind::Feature,
    ];

    /// Attribute keyword of the tag, as written in `#[geojson(...)]`.
    pub fn keyword(&self) -> &'static str {
        match self {
            TagKind::Id => "id",
            TagKind::Geometry => "geometry",
            TagKind::Geometries => "geometries",
            TagKind::Properties => "properties",
            TagKind::Property => "property",
            TagKind::Features => "features",
            TagKind::Feature => "feature",
        }
    }
}

impl Display for TagKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#[geojson({})]", self.keyword())
    }
}

/// Tag attached to a field or accessor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tag {
    /// See [`TagKind::Id`].
    Id,
    /// See [`TagKind::Geometry`].
    Geometry,
    /// See [`TagKind::Geometries`].
    Geometries,
    /// See [`TagKind::Properties`].
    Properties,
    /// See [`TagKind::Property`]. Carries an optional explicit key overriding the member's
    /// canonical name.
    Property(Option<Cow<'static, str>>),
    /// See [`TagKind::Features`].
    Features,
    /// See [`TagKind::Feature`].
    Feature,
}

impl Tag {
    /// Property tag with an explicit key.
    pub fn property_named(name: impl Into<Cow<'static, str>>) -> Self {
        Tag::Property(Some(name.into()))
    }

    /// Kind of the tag.
    pub fn kind(&self) -> TagKind {
        match self {
            Tag::Id => TagKind::Id,
            Tag::Geometry => TagKind::Geometry,
            Tag::Geometries => TagKind::Geometries,
            Tag::Properties => TagKind::Properties,
            Tag::Property(_) => TagKind::Property,
            Tag::Features => TagKind::Features,
            Tag::Feature => TagKind::Feature,
        }
    }
}

/// Document shape declared once per type.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Single `Feature` object.
    Feature,
    /// `FeatureCollection` object.
    FeatureCollection,
    /// `GeometryCollection` object.
    GeometryCollection,
}

impl Shape {
    /// GeoJSON `type` member of the shape.
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Feature => "Feature",
            Shape::FeatureCollection => "FeatureCollection",
            Shape::GeometryCollection => "GeometryCollection",
        }
    }

    /// Returns true if RFC 7946 classifies the shape as a geometry type.
    pub fn is_geometry_type(&self) -> bool {
        matches!(self, Shape::GeometryCollection)
    }
}

impl Display for Shape {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Shape {
    type Err = GeoDocError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Feature" | "feature" => Ok(Shape::Feature),
            "FeatureCollection" | "feature_collection" => Ok(Shape::FeatureCollection),
            "GeometryCollection" | "geometry_collection" => Ok(Shape::GeometryCollection),
            _ => Err(GeoDocError::UnsupportedShape(s.to_string())),
        }
    }
}
