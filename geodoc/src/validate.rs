//! Cardinality and mutual exclusion rules between tags.

use crate::error::GeoDocError;
use crate::index::MemberIndex;
use crate::tag::{Shape, TagKind};

/// Rules a member index must satisfy for one shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rules {
    /// Tags present on at most one member.
    pub at_most_one: &'static [TagKind],
    /// Pairs of tags that may not both be present. The first tag of a pair takes the whole value,
    /// the second one contributes a part of it.
    pub exclusive: &'static [(TagKind, TagKind)],
}

static FEATURE_RULES: Rules = Rules {
    at_most_one: &[
        TagKind::Id,
        TagKind::Geometry,
        TagKind::Geometries,
        TagKind::Properties,
        TagKind::Features,
    ],
    exclusive: &[
        (TagKind::Properties, TagKind::Property),
        (TagKind::Features, TagKind::Feature),
    ],
};

static FEATURE_COLLECTION_RULES: Rules = Rules {
    at_most_one: &[
        TagKind::Id,
        TagKind::Geometry,
        TagKind::Geometries,
        TagKind::Properties,
        TagKind::Features,
    ],
    exclusive: &[
        (TagKind::Properties, TagKind::Property),
        (TagKind::Features, TagKind::Feature),
    ],
};

// `geometry` is the 0..n collection member tag here.
static GEOMETRY_COLLECTION_RULES: Rules = Rules {
    at_most_one: &[
        TagKind::Id,
        TagKind::Geometries,
        TagKind::Properties,
        TagKind::Features,
    ],
    exclusive: &[
        (TagKind::Properties, TagKind::Property),
        (TagKind::Features, TagKind::Feature),
        (TagKind::Geometries, TagKind::Geometry),
    ],
};

impl Rules {
    /// Rules for the given shape.
    pub fn for_shape(shape: Shape) -> &'static Rules {
        match shape {
            Shape::Feature => &FEATURE_RULES,
            Shape::FeatureCollection => &FEATURE_COLLECTION_RULES,
            Shape::GeometryCollection => &GEOMETRY_COLLECTION_RULES,
        }
    }
}

/// Tags whose members contribute to a document of the given shape.
pub fn relevant_tags(shape: Shape) -> &'static [TagKind] {
    match shape {
        Shape::Feature => &[
            TagKind::Id,
            TagKind::Geometry,
            TagKind::Properties,
            TagKind::Property,
        ],
        Shape::FeatureCollection => &[TagKind::Features, TagKind::Feature],
        Shape::GeometryCollection => &[TagKind::Geometries, TagKind::Geometry],
    }
}

/// Checks the index against the rules of `shape`.
///
/// At-most-one rules are checked first, then exclusion rules, each in table order, so the same
/// index always yields the same error.
pub fn validate<T>(index: &MemberIndex<T>, shape: Shape) -> Result<(), GeoDocError> {
    let rules = Rules::for_shape(shape);

    for &tag in rules.at_most_one {
        if index.count(tag) > 1 {
            return Err(GeoDocError::ExcessiveCardinality {
                tag,
                members: index.descriptions(tag),
            });
        }
    }

    for &(left, right) in rules.exclusive {
        if index.count(left) > 0 && index.count(right) > 0 {
            let mut members = index.descriptions(left);
            members.extend(index.descriptions(right));
            return Err(GeoDocError::MutualExclusionViolation {
                left,
                right,
                members,
            });
        }
    }

    let relevant = relevant_tags(shape);
    for tag in TagKind::ALL {
        if !relevant.contains(&tag) && index.count(tag) > 0 {
            log::debug!(
                "Ignoring {tag} on {} for shape {shape}",
                index.descriptions(tag).join(", ")
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::member::Member;
    use crate::tag::Tag;
    use crate::value::Value;

    struct Poi;

    fn member(ident: &'static str, tag: Tag) -> Member<Poi> {
        Member::field(ident, |_| Ok(Value::Null)).with_tag(tag)
    }

    #[test]
    fn repeated_id_is_excessive() {
        let index = MemberIndex::new(vec![member("id", Tag::Id), member("code", Tag::Id)]);
        let err = validate(&index, Shape::Feature).unwrap_err();
        assert_matches!(
            &err,
            GeoDocError::ExcessiveCardinality { tag: TagKind::Id, members } if members.len() == 2
        );
        let message = err.to_string();
        assert!(message.contains("Poi::id"), "{message}");
        assert!(message.contains("Poi::code"), "{message}");
    }

    #[test]
    fn properties_excludes_property() {
        let index = MemberIndex::new(vec![
            member("all", Tag::Properties),
            member("name", Tag::Property(None)),
            member("kind", Tag::Property(None)),
        ]);
        assert_matches!(
            validate(&index, Shape::Feature),
            Err(GeoDocError::MutualExclusionViolation {
                left: TagKind::Properties,
                right: TagKind::Property,
                members,
            }) if members.len() == 3 && members[0].ends_with("Poi::all")
        );
    }

    #[test]
    fn features_excludes_feature() {
        let index = MemberIndex::new(vec![
            member("all", Tag::Features),
            member("one", Tag::Feature),
        ]);
        assert_matches!(
            validate(&index, Shape::FeatureCollection),
            Err(GeoDocError::MutualExclusionViolation {
                left: TagKind::Features,
                ..
            })
        );
    }

    #[test]
    fn property_and_feature_may_repeat() {
        let index = MemberIndex::new(vec![
            member("a", Tag::Property(None)),
            member("b", Tag::Property(None)),
            member("c", Tag::Feature),
            member("d", Tag::Feature),
        ]);
        assert!(validate(&index, Shape::Feature).is_ok());
        assert!(validate(&index, Shape::FeatureCollection).is_ok());
    }

    #[test]
    fn geometry_cardinality_depends_on_shape() {
        let index = MemberIndex::new(vec![
            member("start", Tag::Geometry),
            member("end", Tag::Geometry),
        ]);
        assert_matches!(
            validate(&index, Shape::Feature),
            Err(GeoDocError::ExcessiveCardinality {
                tag: TagKind::Geometry,
                ..
            })
        );
        assert_matches!(
            validate(&index, Shape::FeatureCollection),
            Err(GeoDocError::ExcessiveCardinality {
                tag: TagKind::Geometry,
                ..
            })
        );
        assert!(validate(&index, Shape::GeometryCollection).is_ok());

        let index = MemberIndex::new(vec![
            member("all", Tag::Geometries),
            member("end", Tag::Geometry),
        ]);
        assert_matches!(
            validate(&index, Shape::GeometryCollection),
            Err(GeoDocError::MutualExclusionViolation {
                left: TagKind::Geometries,
                right: TagKind::Geometry,
                ..
            })
        );
    }

    #[test]
    fn cardinality_is_checked_before_exclusion() {
        let index = MemberIndex::new(vec![
            member("a", Tag::Properties),
            member("b", Tag::Properties),
            member("c", Tag::Property(None)),
        ]);
        assert_matches!(
            validate(&index, Shape::Feature),
            Err(GeoDocError::ExcessiveCardinality {
                tag: TagKind::Properties,
                ..
            })
        );
    }

    #[test]
    fn empty_index_is_valid() {
        let index = MemberIndex::<Poi>::new(vec![]);
        for shape in [
            Shape::Feature,
            Shape::FeatureCollection,
            Shape::GeometryCollection,
        ] {
            assert!(validate(&index, shape).is_ok());
        }
    }
}
