use alloc::string::String;

use thiserror::Error;

use crate::info::ReflectKind;

/// An error returned from a failed path resolution.
///
/// `path` is the part of the path consumed when the failure happened, up to
/// and including the offending segment. Errors raised inside a map carry the
/// whole path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The segment is empty or does not start with an upper-case letter.
    #[error("invalid field name `{segment}` in `{path}`")]
    InvalidFieldName { path: String, segment: String },

    /// The record has no field with this name.
    #[error("`{record}` has no field `{field}` (at `{path}`)")]
    MissingField {
        path: String,
        field: String,
        record: &'static str,
    },

    /// An empty indirection was reached with path remaining.
    #[error("nil reference at `{path}`")]
    NilReference { path: String },

    /// The root is neither a record nor a map, even after unwrapping
    /// indirections.
    #[error("cannot resolve `{path}` on a root of kind {kind}")]
    UnsupportedRootShape { path: String, kind: ReflectKind },

    /// A field that is neither a record, an indirection nor a map was
    /// reached with path remaining.
    #[error("`{path}` is a {kind} and cannot be traversed")]
    NotTraversable { path: String, kind: ReflectKind },

    /// The path ended on a structured value where a scalar was required.
    #[error("`{path}` is a {kind}, not a scalar")]
    NotAScalar { path: String, kind: ReflectKind },

    /// The flat key is absent from the map.
    #[error("key `{key}` not found (at `{path}`)")]
    MapKeyNotFound { path: String, key: String },

    /// The target cannot be borrowed mutably, e.g. a shared `Arc` lies on
    /// the way.
    #[error("`{path}` is not settable")]
    NotSettable { path: String },

    /// The map is not keyed by strings.
    #[error("map at `{path}` has {kind} keys, only String keys are supported")]
    UnsupportedMapKey { path: String, kind: ReflectKind },

    /// The map values are not scalars, e.g. a map of maps.
    #[error("map at `{path}` has {kind} values, only scalar values are supported")]
    UnsupportedMapValue { path: String, kind: ReflectKind },
}

impl ResolveError {
    /// Returns the consumed path carried by every variant.
    pub fn path(&self) -> &str {
        match self {
            Self::InvalidFieldName { path, .. }
            | Self::MissingField { path, .. }
            | Self::NilReference { path }
            | Self::UnsupportedRootShape { path, .. }
            | Self::NotTraversable { path, .. }
            | Self::NotAScalar { path, .. }
            | Self::MapKeyNotFound { path, .. }
            | Self::NotSettable { path }
            | Self::UnsupportedMapKey { path, .. }
            | Self::UnsupportedMapValue { path, .. } => path,
        }
    }
}
