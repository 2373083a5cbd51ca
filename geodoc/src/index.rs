//! Index of the tagged members of a type, and the process-wide per-type cache.

use std::any::{Any, TypeId};
use std::sync::Arc;

use ahash::AHashMap;
use lazy_static::lazy_static;
use parking_lot::RwLock;

use crate::member::Member;
use crate::tag::TagKind;
use crate::tagged::GeoJson;

lazy_static! {
    static ref INDEX_REGISTRY: RwLock<AHashMap<TypeId, Arc<dyn Any + Send + Sync>>> =
        RwLock::new(AHashMap::new());
}

/// Tagged members of a type in enumeration order.
///
/// The index never changes after it is built.
#[derive(Debug)]
pub struct MemberIndex<T> {
    members: Vec<Member<T>>,
}

impl<T> MemberIndex<T> {
    /// Builds the index, dropping members that carry no tag. The given order is kept.
    pub fn new(members: impl IntoIterator<Item = Member<T>>) -> Self {
        Self {
            members: members
                .into_iter()
                .filter(|m| !m.tags().is_empty())
                .collect(),
        }
    }

    /// All tagged members.
    pub fn members(&self) -> &[Member<T>] {
        &self.members
    }

    /// Members carrying a tag of the given kind, in index order.
    pub fn tagged(&self, kind: TagKind) -> impl Iterator<Item = &Member<T>> + '_ {
        self.members.iter().filter(move |m| m.has_tag(kind))
    }

    /// Number of members carrying a tag of the given kind.
    pub fn count(&self, kind: TagKind) -> usize {
        self.tagged(kind).count()
    }

    /// The member carrying a tag of the given kind, if any. Takes the first one, cardinality is
    /// checked by [`validate`](crate::validate::validate).
    pub fn first(&self, kind: TagKind) -> Option<&Member<T>> {
        self.tagged(kind).next()
    }

    /// Descriptions of the members carrying a tag of the given kind.
    pub fn descriptions(&self, kind: TagKind) -> Vec<String> {
        self.tagged(kind)
            .map(|m| m.description().to_string())
            .collect()
    }

    /// Returns true if no member is tagged.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl<T: GeoJson> MemberIndex<T> {
    /// Returns the cached index of `T`, building it on first use.
    ///
    /// Concurrent first uses may each build the index; the last one published wins. Both
    /// results are identical since the index only depends on the type.
    pub fn of() -> Arc<Self> {
        let type_id = TypeId::of::<T>();
        if let Some(index) = INDEX_REGISTRY.read().get(&type_id).cloned() {
            if let Ok(index) = index.downcast::<Self>() {
                return index;
            }
        }

        let index = Arc::new(Self::new(T::members()));
        log::debug!(
            "Indexed {} tagged members of {}",
            index.members.len(),
            std::any::type_name::<T>()
        );
        INDEX_REGISTRY.write().insert(type_id, index.clone());
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::{Shape, Tag};
    use crate::value::{ToValue, Value};

    struct Route {
        name: String,
        stops: Vec<u32>,
    }

    impl GeoJson for Route {
        fn shape() -> Option<Shape> {
            Some(Shape::Feature)
        }

        fn members() -> Vec<Member<Self>> {
            vec![
                Member::field("name", |r: &Route| r.name.to_value()).with_tag(Tag::Property(None)),
                Member::field("stops", |r: &Route| r.stops.to_value()),
                Member::accessor("get_length", |r: &Route| r.stops.len().to_value())
                    .with_tag(Tag::Property(None))
                    .with_tag(Tag::Id),
            ]
        }
    }

    #[test]
    fn untagged_members_are_dropped() {
        let index = MemberIndex::new(Route::members());
        let names: Vec<_> = index.members().iter().map(|m| m.name()).collect();
        assert_eq!(names, vec!["name", "length"]);
        assert_eq!(index.count(TagKind::Property), 2);
        assert_eq!(index.count(TagKind::Id), 1);
        assert_eq!(index.count(TagKind::Geometry), 0);
        assert_eq!(index.first(TagKind::Id).map(|m| m.ident()), Some("get_length"));
    }

    #[test]
    fn member_reads_instance() {
        let route = Route {
            name: "Loop".into(),
            stops: vec![1, 2],
        };
        let index = MemberIndex::new(Route::members());
        let id = index.first(TagKind::Id).unwrap();
        assert_eq!(id.read(&route).unwrap(), Value::Number(2.into()));
    }

    #[test]
    fn cached_index_is_shared() {
        let first = MemberIndex::<Route>::of();
        let second = MemberIndex::<Route>::of();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn concurrent_first_use_is_consistent() {
        struct Lonely;

        impl GeoJson for Lonely {
            fn shape() -> Option<Shape> {
                None
            }

            fn members() -> Vec<Member<Self>> {
                vec![Member::field("x", |_: &Lonely| Ok(Value::Null)).with_tag(Tag::Feature)]
            }
        }

        let counts: Vec<usize> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| s.spawn(|| MemberIndex::<Lonely>::of().count(TagKind::Feature)))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert_eq!(counts, vec![1; 8]);
    }
}
