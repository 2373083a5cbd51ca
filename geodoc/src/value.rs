//! Dynamic values extracted from tagged members.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::fmt::{Display, Formatter};
use std::hash::BuildHasher;
use std::rc::Rc;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Number;

use crate::document::Document;
use crate::error::BoxError;

/// Value of a member at the time of assembly.
///
/// [`Value::Null`] stands for an absent value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Absent value.
    #[default]
    Null,
    /// Boolean.
    Bool(bool),
    /// Number.
    Number(Number),
    /// String.
    String(String),
    /// Ordered sequence.
    Sequence(Vec<Value>),
    /// String keyed mapping.
    Mapping(BTreeMap<String, Value>),
    /// Geometry, opaque to this crate.
    Geometry(geojson::Geometry),
    /// Document assembled from a nested tagged value.
    Document(Box<Document>),
}

impl Value {
    /// Converts any serializable value through `serde_json`.
    pub fn serialized<T: Serialize + ?Sized>(value: &T) -> Result<Value, BoxError> {
        Ok(serde_json::to_value(value)?.into())
    }

    /// Returns true for an absent value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Name of the value's type, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Sequence(_) => "sequence",
            Value::Mapping(_) => "mapping",
            Value::Geometry(_) => "geometry",
            Value::Document(_) => "document",
        }
    }

    /// Returns the geometry if the value is one.
    pub fn as_geometry(&self) -> Option<&geojson::Geometry> {
        match self {
            Value::Geometry(geometry) => Some(geometry),
            _ => None,
        }
    }

    /// Returns the elements if the value is a sequence.
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(values) => Some(values),
            _ => None,
        }
    }

    /// Returns the entries if the value is a mapping.
    pub fn as_mapping(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the document if the value is one.
    pub fn as_document(&self) -> Option<&Document> {
        match self {
            Value::Document(document) => Some(document),
            _ => None,
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(v) => Value::Bool(v),
            serde_json::Value::Number(v) => Value::Number(v),
            serde_json::Value::String(v) => Value::String(v),
            serde_json::Value::Array(values) => {
                Value::Sequence(values.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Value::Mapping(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<geojson::Geometry> for Value {
    fn from(value: geojson::Geometry) -> Self {
        Value::Geometry(value)
    }
}

impl From<Document> for Value {
    fn from(value: Document) -> Self {
        Value::Document(Box::new(value))
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Sequence(value)
    }
}

/// Type a resolved value is expected to conform to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Any value.
    Any,
    /// A geometry.
    Geometry,
}

impl ValueKind {
    /// Returns true if the value conforms. Absent values always conform.
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            ValueKind::Any => true,
            ValueKind::Geometry => matches!(value, Value::Null | Value::Geometry(_)),
        }
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueKind::Any => f.write_str("any"),
            ValueKind::Geometry => f.write_str("geometry"),
        }
    }
}

/// Conversion of a member's Rust value into a [`Value`].
///
/// `#[derive(GeoJson)]` calls this for every tagged field and accessor, and implements it for the
/// annotated type itself, so tagged types nest into collections as assembled documents.
pub trait ToValue {
    /// Converts the value. An error is reported as an access failure of the member.
    fn to_value(&self) -> Result<Value, BoxError>;
}

impl ToValue for Value {
    fn to_value(&self) -> Result<Value, BoxError> {
        Ok(self.clone())
    }
}

impl ToValue for bool {
    fn to_value(&self) -> Result<Value, BoxError> {
        Ok(Value::Bool(*self))
    }
}

macro_rules! impl_integer {
    ($($t:ty),*) => {
        $(
            impl ToValue for $t {
                fn to_value(&self) -> Result<Value, BoxError> {
                    Ok(Value::Number(Number::from(*self)))
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl ToValue for f64 {
    fn to_value(&self) -> Result<Value, BoxError> {
        Ok(Number::from_f64(*self).map_or(Value::Null, Value::Number))
    }
}

impl ToValue for f32 {
    fn to_value(&self) -> Result<Value, BoxError> {
        (*self as f64).to_value()
    }
}

impl ToValue for str {
    fn to_value(&self) -> Result<Value, BoxError> {
        Ok(Value::String(self.to_string()))
    }
}

impl ToValue for String {
    fn to_value(&self) -> Result<Value, BoxError> {
        Ok(Value::String(self.clone()))
    }
}

impl ToValue for char {
    fn to_value(&self) -> Result<Value, BoxError> {
        Ok(Value::String(self.to_string()))
    }
}

impl ToValue for Cow<'_, str> {
    fn to_value(&self) -> Result<Value, BoxError> {
        Ok(Value::String(self.to_string()))
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Result<Value, BoxError> {
        match self {
            Some(v) => v.to_value(),
            None => Ok(Value::Null),
        }
    }
}

impl<T: ToValue> ToValue for [T] {
    fn to_value(&self) -> Result<Value, BoxError> {
        Ok(Value::Sequence(
            self.iter().map(T::to_value).collect::<Result<_, _>>()?,
        ))
    }
}

impl<T: ToValue, const N: usize> ToValue for [T; N] {
    fn to_value(&self) -> Result<Value, BoxError> {
        self.as_slice().to_value()
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Result<Value, BoxError> {
        self.as_slice().to_value()
    }
}

impl<T: ToValue> ToValue for VecDeque<T> {
    fn to_value(&self) -> Result<Value, BoxError> {
        Ok(Value::Sequence(
            self.iter().map(T::to_value).collect::<Result<_, _>>()?,
        ))
    }
}

impl<K: Display, V: ToValue, S: BuildHasher> ToValue for HashMap<K, V, S> {
    fn to_value(&self) -> Result<Value, BoxError> {
        let mut map = BTreeMap::new();
        for (k, v) in self {
            map.insert(k.to_string(), v.to_value()?);
        }
        Ok(Value::Mapping(map))
    }
}

impl<K: Display, V: ToValue> ToValue for BTreeMap<K, V> {
    fn to_value(&self) -> Result<Value, BoxError> {
        let mut map = BTreeMap::new();
        for (k, v) in self {
            map.insert(k.to_string(), v.to_value()?);
        }
        Ok(Value::Mapping(map))
    }
}

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Result<Value, BoxError> {
        (**self).to_value()
    }
}

impl<T: ToValue + ?Sized> ToValue for Box<T> {
    fn to_value(&self) -> Result<Value, BoxError> {
        (**self).to_value()
    }
}

impl<T: ToValue + ?Sized> ToValue for Rc<T> {
    fn to_value(&self) -> Result<Value, BoxError> {
        (**self).to_value()
    }
}

impl<T: ToValue + ?Sized> ToValue for Arc<T> {
    fn to_value(&self) -> Result<Value, BoxError> {
        (**self).to_value()
    }
}

impl<T: ToValue, E: Display> ToValue for Result<T, E> {
    fn to_value(&self) -> Result<Value, BoxError> {
        match self {
            Ok(v) => v.to_value(),
            Err(e) => Err(e.to_string().into()),
        }
    }
}

impl ToValue for serde_json::Value {
    fn to_value(&self) -> Result<Value, BoxError> {
        Ok(self.clone().into())
    }
}

impl ToValue for geojson::Geometry {
    fn to_value(&self) -> Result<Value, BoxError> {
        Ok(Value::Geometry(self.clone()))
    }
}

impl ToValue for geojson::Value {
    fn to_value(&self) -> Result<Value, BoxError> {
        Ok(Value::Geometry(geojson::Geometry::new(self.clone())))
    }
}

impl ToValue for Document {
    fn to_value(&self) -> Result<Value, BoxError> {
        Ok(Value::Document(Box::new(self.clone())))
    }
}

#[cfg(feature = "geo-types")]
macro_rules! impl_geo_types {
    ($($t:ident),*) => {
        $(
            impl<T: geo_types::CoordFloat> ToValue for geo_types::$t<T> {
                fn to_value(&self) -> Result<Value, BoxError> {
                    Ok(Value::Geometry(geojson::Geometry::new(geojson::Value::from(self))))
                }
            }
        )*
    };
}

#[cfg(feature = "geo-types")]
impl_geo_types!(
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
    GeometryCollection,
    Geometry
);

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn point(x: f64, y: f64) -> geojson::Geometry {
        geojson::Geometry::new(geojson::Value::Point(vec![x, y]))
    }

    #[test]
    fn option_none_is_null() {
        let v: Option<String> = None;
        assert_eq!(v.to_value().unwrap(), Value::Null);
        assert_eq!(Some("a").to_value().unwrap(), Value::from("a"));
    }

    #[test]
    fn non_finite_float_is_null() {
        assert_eq!(f64::NAN.to_value().unwrap(), Value::Null);
        assert_eq!(
            1.5f64.to_value().unwrap(),
            Value::Number(Number::from_f64(1.5).unwrap())
        );
    }

    #[test]
    fn vec_keeps_order() {
        let v = vec![3u8, 1, 2].to_value().unwrap();
        let expected: Vec<Value> = [3u8, 1, 2]
            .iter()
            .map(|n| Value::Number((*n).into()))
            .collect();
        assert_eq!(v, Value::Sequence(expected));
    }

    #[test]
    fn map_keys_are_displayed() {
        let mut map = HashMap::new();
        map.insert(7, "seven");
        let v = map.to_value().unwrap();
        assert_eq!(
            v.as_mapping().unwrap().get("7"),
            Some(&Value::from("seven"))
        );
    }

    #[test]
    fn json_converts_recursively() {
        let v: Value = json!({"a": [1, null], "b": "x"}).into();
        let map = v.as_mapping().unwrap();
        assert_eq!(
            map.get("a"),
            Some(&Value::Sequence(vec![Value::Number(1.into()), Value::Null]))
        );
        assert_eq!(map.get("b"), Some(&Value::from("x")));
    }

    #[test]
    fn result_error_is_reported() {
        let v: Result<u32, String> = Err("broken".into());
        assert_eq!(v.to_value().unwrap_err().to_string(), "broken");
    }

    #[test]
    fn geometry_kind_accepts_null_and_geometry() {
        assert!(ValueKind::Geometry.accepts(&Value::Null));
        assert!(ValueKind::Geometry.accepts(&Value::Geometry(point(1.0, 2.0))));
        assert!(!ValueKind::Geometry.accepts(&Value::from("POINT (1 2)")));
        assert!(ValueKind::Any.accepts(&Value::from("POINT (1 2)")));
    }

    #[cfg(feature = "geo-types")]
    #[test]
    fn geo_types_point_converts() {
        let p = geo_types::Point::new(23.0f64, 42.0);
        assert_eq!(p.to_value().unwrap(), Value::Geometry(point(23.0, 42.0)));
    }
}
