//! Traits implemented by types that can be assembled into documents.

use crate::assemble::{DocumentFactory, IntrospectionFactory};
use crate::member::Member;
use crate::tag::Shape;

/// A type whose tagged members describe a GeoJSON document.
///
/// Usually implemented with `#[derive(GeoJson)]`:
///
/// ```ignore
/// #[derive(GeoJson)]
/// #[geojson(shape = "feature")]
/// struct Attraction {
///     #[geojson(id)]
///     id: String,
///     #[geojson(property)]
///     name: String,
///     #[geojson(geometry)]
///     location: geojson::Geometry,
/// }
/// ```
pub trait GeoJson: Sized + 'static {
    /// Shape of the document. `None` makes every assembly fail with
    /// [`GeoDocError::MissingShapeTag`](crate::GeoDocError::MissingShapeTag).
    fn shape() -> Option<Shape>;

    /// All members of the type, fields first, then accessors, each in declaration order.
    ///
    /// Called at most a few times per type; the result is cached by [`MemberIndex::of`](crate::MemberIndex::of).
    fn members() -> Vec<Member<Self>>;

    /// Engine assembling the documents of this type.
    fn factory() -> &'static dyn DocumentFactory<Self> {
        &IntrospectionFactory
    }

    /// Description of an instance for error messages.
    fn describe(&self) -> String {
        std::any::type_name::<Self>().to_string()
    }
}

/// Accessor members declared in an inherent impl block, see the `accessors` attribute macro.
pub trait Accessors: Sized {
    /// Accessor members in declaration order.
    fn accessor_members() -> Vec<Member<Self>>;
}
