//! Extraction of member values from an instance.

use crate::error::GeoDocError;
use crate::member::Member;
use crate::tagged::GeoJson;
use crate::value::{Value, ValueKind};

/// Reads the value of `member` from `instance` and checks that it conforms to `expected`.
///
/// Absent values are returned without a type check.
pub fn resolve<T: GeoJson>(
    instance: &T,
    member: &Member<T>,
    expected: ValueKind,
) -> Result<Value, GeoDocError> {
    let value = member
        .read(instance)
        .map_err(|source| GeoDocError::AccessFailure {
            member: member.description().to_string(),
            instance: instance.describe(),
            source,
        })?;

    check(instance, member, expected, value)
}

/// Same as [`resolve`] with [`ValueKind::Geometry`] expected.
pub fn resolve_geometry<T: GeoJson>(
    instance: &T,
    member: &Member<T>,
) -> Result<Option<geojson::Geometry>, GeoDocError> {
    match resolve(instance, member, ValueKind::Geometry)? {
        Value::Geometry(geometry) => Ok(Some(geometry)),
        _ => Ok(None),
    }
}

/// Checks a value already read from `member`, e.g. an element of a sequence.
pub(crate) fn check<T: GeoJson>(
    instance: &T,
    member: &Member<T>,
    expected: ValueKind,
    value: Value,
) -> Result<Value, GeoDocError> {
    // Nested geometry collection documents are geometries.
    let value = match value {
        Value::Document(document)
            if expected == ValueKind::Geometry && document.shape().is_geometry_type() =>
        {
            match (*document).into_geometry() {
                Ok(geometry) => Value::Geometry(geometry),
                Err(document) => Value::Document(Box::new(document)),
            }
        }
        value => value,
    };

    if expected.accepts(&value) {
        Ok(value)
    } else {
        Err(GeoDocError::TypeMismatch {
            member: member.description().to_string(),
            instance: instance.describe(),
            expected,
            found: value.type_name(),
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::document::{Document, FeatureDocument, GeometryCollectionDocument};
    use crate::tag::Shape;
    use crate::value::ToValue;

    struct Sign {
        label: Option<String>,
    }

    impl GeoJson for Sign {
        fn shape() -> Option<Shape> {
            Some(Shape::Feature)
        }

        fn members() -> Vec<Member<Self>> {
            vec![]
        }
    }

    fn label() -> Member<Sign> {
        Member::field("label", |s: &Sign| s.label.to_value())
    }

    #[test]
    fn any_accepts_everything() {
        let sign = Sign {
            label: Some("Exit".into()),
        };
        assert_eq!(
            resolve(&sign, &label(), ValueKind::Any).unwrap(),
            Value::from("Exit")
        );
    }

    #[test]
    fn mismatch_names_the_member() {
        let sign = Sign {
            label: Some("Exit".into()),
        };
        let err = resolve(&sign, &label(), ValueKind::Geometry).unwrap_err();
        assert_matches!(
            &err,
            GeoDocError::TypeMismatch { member, expected: ValueKind::Geometry, found: "string", .. }
                if member.ends_with("Sign::label")
        );
    }

    #[test]
    fn absent_value_skips_type_check() {
        let sign = Sign { label: None };
        assert_eq!(resolve_geometry(&sign, &label()).unwrap(), None);
    }

    #[test]
    fn geometry_collection_document_is_a_geometry() {
        let point = geojson::Geometry::new(geojson::Value::Point(vec![1.0, 2.0]));
        let member = Member::field("walk", |_: &Sign| {
            Ok(Value::from(Document::GeometryCollection(
                GeometryCollectionDocument::new(vec![geojson::Geometry::new(
                    geojson::Value::Point(vec![1.0, 2.0]),
                )]),
            )))
        });
        assert_eq!(
            resolve_geometry(&Sign { label: None }, &member).unwrap(),
            Some(geojson::Geometry::new(geojson::Value::GeometryCollection(
                vec![point]
            )))
        );
    }

    #[test]
    fn feature_document_is_not_a_geometry() {
        let member = Member::field("nested", |_: &Sign| {
            Ok(Value::from(Document::Feature(FeatureDocument::default())))
        });
        assert_matches!(
            resolve_geometry(&Sign { label: None }, &member),
            Err(GeoDocError::TypeMismatch { found: "document", .. })
        );
    }

    #[test]
    fn getter_error_is_access_failure() {
        let member = Member::accessor("get_broken", |_: &Sign| Err("out of ink".into()));
        let err = resolve(&Sign { label: None }, &member, ValueKind::Any).unwrap_err();
        let GeoDocError::AccessFailure {
            member, source, ..
        } = err
        else {
            panic!("unexpected error");
        };
        assert!(member.ends_with("Sign::get_broken()"));
        assert_eq!(source.to_string(), "out of ink");
    }
}
