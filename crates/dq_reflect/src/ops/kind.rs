use crate::Reflect;
use crate::info::ReflectKind;
use crate::ops::{Indirect, Map, Record, ScalarRef};

// -----------------------------------------------------------------------------
// ReflectRef

/// An immutable view of a reflected value, one variant per shape.
///
/// Returned by [`Reflect::reflect_ref`].
pub enum ReflectRef<'a> {
    Record(&'a dyn Record),
    Indirect(&'a dyn Indirect),
    Map(&'a dyn Map),
    Scalar(ScalarRef<'a>),
    Unsupported(&'a dyn Reflect),
}

impl ReflectRef<'_> {
    /// Returns the kind of the viewed value.
    pub fn kind(&self) -> ReflectKind {
        match self {
            Self::Record(_) => ReflectKind::Record,
            Self::Indirect(_) => ReflectKind::Indirect,
            Self::Map(_) => ReflectKind::Map,
            Self::Scalar(scalar) => scalar.kind(),
            Self::Unsupported(_) => ReflectKind::Unsupported,
        }
    }
}

// -----------------------------------------------------------------------------
// ReflectMut

/// A mutable view of a reflected value, one variant per shape.
///
/// Scalars are written through [`Reflect::set`], so their variant carries the
/// value itself.
///
/// Returned by [`Reflect::reflect_mut`].
pub enum ReflectMut<'a> {
    Record(&'a mut dyn Record),
    Indirect(&'a mut dyn Indirect),
    Map(&'a mut dyn Map),
    Scalar(&'a mut dyn Reflect),
    Unsupported(&'a mut dyn Reflect),
}

impl ReflectMut<'_> {
    /// Returns the kind of the viewed value.
    pub fn kind(&self) -> ReflectKind {
        match self {
            Self::Record(_) => ReflectKind::Record,
            Self::Indirect(_) => ReflectKind::Indirect,
            Self::Map(_) => ReflectKind::Map,
            Self::Scalar(value) => value.reflect_kind(),
            Self::Unsupported(_) => ReflectKind::Unsupported,
        }
    }
}
