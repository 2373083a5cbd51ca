//! Tagged members of a type: storage fields and read accessors.

use std::borrow::Cow;
use std::fmt::{Debug, Formatter};

use crate::error::BoxError;
use crate::tag::{Tag, TagKind};
use crate::value::Value;

/// Reads the value of a member from an instance.
pub type Getter<T> = fn(&T) -> Result<Value, BoxError>;

/// Whether a member is a storage field or a read accessor.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MemberKind {
    /// Storage field, named verbatim.
    Field,
    /// `&self` method without arguments, named by the getter convention.
    Accessor,
}

/// A named, tagged accessor to a value on instances of `T`.
pub struct Member<T> {
    ident: &'static str,
    name: Cow<'static, str>,
    kind: MemberKind,
    tags: Vec<Tag>,
    description: String,
    getter: Getter<T>,
}

impl<T> Member<T> {
    /// Storage field `ident` of `T`.
    pub fn field(ident: &'static str, getter: Getter<T>) -> Self {
        Self {
            ident,
            name: Cow::Borrowed(ident),
            kind: MemberKind::Field,
            tags: vec![],
            description: format!("field {}::{ident}", std::any::type_name::<T>()),
            getter,
        }
    }

    /// Read accessor method `ident` of `T`.
    pub fn accessor(ident: &'static str, getter: Getter<T>) -> Self {
        Self {
            ident,
            name: accessor_name(ident),
            kind: MemberKind::Accessor,
            tags: vec![],
            description: format!("accessor {}::{ident}()", std::any::type_name::<T>()),
            getter,
        }
    }

    /// Adds a tag.
    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tags.push(tag);
        self
    }

    /// Identifier as declared in the source.
    pub fn ident(&self) -> &'static str {
        self.ident
    }

    /// Canonical name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Field or accessor.
    pub fn kind(&self) -> MemberKind {
        self.kind
    }

    /// Tags of the member.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Returns true if the member carries a tag of the given kind.
    pub fn has_tag(&self, kind: TagKind) -> bool {
        self.tags.iter().any(|t| t.kind() == kind)
    }

    /// Human-readable description for error messages.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Key of the member in a feature's `properties` mapping: the explicit name given to the
    /// property tag, or the canonical name.
    pub fn property_key(&self) -> &str {
        self.tags
            .iter()
            .find_map(|tag| match tag {
                Tag::Property(Some(name)) => Some(name.as_ref()),
                _ => None,
            })
            .unwrap_or(self.name.as_ref())
    }

    pub(crate) fn read(&self, instance: &T) -> Result<Value, BoxError> {
        (self.getter)(instance)
    }
}

impl<T> Debug for Member<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Member")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("tags", &self.tags)
            .field("description", &self.description)
            .finish()
    }
}

/// Canonical name of an accessor: a `get_` prefix, or a `get` prefix followed by an uppercase
/// letter, is removed and the first remaining character lowercased. A remainder starting with
/// two uppercase characters is kept as is (`getURL` is `URL`).
pub fn accessor_name(ident: &'static str) -> Cow<'static, str> {
    let stripped = if let Some(rest) = ident.strip_prefix("get_") {
        rest
    } else if let Some(rest) = ident
        .strip_prefix("get")
        .filter(|rest| rest.starts_with(|c: char| c.is_uppercase()))
    {
        rest
    } else {
        return Cow::Borrowed(ident);
    };

    let mut chars = stripped.chars();
    match (chars.next(), chars.clone().next()) {
        (Some(first), Some(second)) if first.is_uppercase() && second.is_uppercase() => {
            Cow::Borrowed(stripped)
        }
        (Some(first), _) if first.is_uppercase() => {
            Cow::Owned(first.to_lowercase().chain(chars).collect())
        }
        (Some(_), _) => Cow::Borrowed(stripped),
        (None, _) => Cow::Borrowed(ident),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct City;

    #[test]
    fn accessor_naming() {
        assert_eq!(accessor_name("getCityName"), "cityName");
        assert_eq!(accessor_name("get_city_name"), "city_name");
        assert_eq!(accessor_name("city_name"), "city_name");
        assert_eq!(accessor_name("getaway"), "getaway");
        assert_eq!(accessor_name("get"), "get");
        assert_eq!(accessor_name("get_"), "get_");
        assert_eq!(accessor_name("getId"), "id");
    }

    #[test]
    fn accessor_naming_keeps_acronyms() {
        assert_eq!(accessor_name("getURL"), "URL");
        assert_eq!(accessor_name("get_URL"), "URL");
        assert_eq!(accessor_name("getX"), "x");
        assert_eq!(accessor_name("getUrl"), "url");
        assert_eq!(accessor_name("isOpen"), "isOpen");
    }

    #[test]
    fn field_keeps_declared_name() {
        let m = Member::<City>::field("cityName", |_| Ok(Value::Null));
        assert_eq!(m.name(), "cityName");
        assert_eq!(m.kind(), MemberKind::Field);
        assert!(m.description().starts_with("field "));
        assert!(m.description().ends_with("City::cityName"));
    }

    #[test]
    fn accessor_description() {
        let m = Member::<City>::accessor("get_name", |_| Ok(Value::Null));
        assert_eq!(m.name(), "name");
        assert!(m.description().ends_with("City::get_name()"));
    }

    #[test]
    fn property_key_prefers_explicit_name() {
        let m = Member::<City>::field("description", |_| Ok(Value::Null))
            .with_tag(Tag::property_named("alteredDescription"));
        assert_eq!(m.property_key(), "alteredDescription");
        assert!(m.has_tag(TagKind::Property));

        let m = Member::<City>::accessor("getCityName", |_| Ok(Value::Null))
            .with_tag(Tag::Property(None));
        assert_eq!(m.property_key(), "cityName");
    }
}
