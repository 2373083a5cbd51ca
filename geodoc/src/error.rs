//! Error type used by the crate.

use thiserror::Error;

use crate::tag::TagKind;
use crate::value::ValueKind;

/// Boxed error returned by member getters.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error returned when a document cannot be assembled or written.
#[derive(Debug, Error)]
pub enum GeoDocError {
    /// The type does not declare a document shape.
    #[error("type {type_name} does not declare a geojson shape")]
    MissingShapeTag {
        /// Path of the type.
        type_name: &'static str,
    },

    /// A tag that may be present at most once decorates several members.
    #[error("tag {tag} is present on multiple members: {}", .members.join(", "))]
    ExcessiveCardinality {
        /// The repeated tag.
        tag: TagKind,
        /// Descriptions of all members carrying the tag.
        members: Vec<String>,
    },

    /// Two mutually exclusive tags are both present on the type.
    #[error("tags {left} and {right} are mutually exclusive: {}", .members.join(", "))]
    MutualExclusionViolation {
        /// Tag taking the whole value.
        left: TagKind,
        /// Tag contributing a single part of the value.
        right: TagKind,
        /// Descriptions of the members of both sides, `left` side first.
        members: Vec<String>,
    },

    /// A member returned a value of an unexpected type.
    #[error("value of {member} is not of expected type: instance={instance}, expected={expected}, found={found}")]
    TypeMismatch {
        /// Description of the member.
        member: String,
        /// Description of the instance.
        instance: String,
        /// Expected type.
        expected: ValueKind,
        /// Name of the type actually found.
        found: &'static str,
    },

    /// Reading a field or invoking an accessor failed.
    #[error("value from {member} failed: instance={instance}")]
    AccessFailure {
        /// Description of the member.
        member: String,
        /// Description of the instance.
        instance: String,
        /// Underlying error.
        #[source]
        source: BoxError,
    },

    /// The shape is not supported by the document factory.
    #[error("unsupported geojson shape: {0}")]
    UnsupportedShape(String),

    /// Writing the document failed.
    #[error("failed to write document")]
    Serialization(#[from] serde_json::Error),
}
