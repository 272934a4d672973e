use core::fmt;

use crate::Reflect;

// -----------------------------------------------------------------------------
// ReflectKind

/// A pure enumeration of the shapes a reflected value can have.
///
/// Each [`Reflect`] type reports exactly one kind, and the variant of
/// [`ReflectRef`]/[`ReflectMut`] it returns always agrees with it.
///
/// `Indirect` wrapping a record is still `Indirect`: callers unwrap the
/// reference and classify the target again.
///
/// [`ReflectRef`]: crate::ops::ReflectRef
/// [`ReflectMut`]: crate::ops::ReflectMut
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ReflectKind {
    /// An optional or boxed reference to another value, e.g. `Option<T>`.
    Indirect,
    /// A structured value with named fields.
    Record,
    /// `i32`
    Int,
    /// `i64`
    Int64,
    /// `f32`
    Float32,
    /// `f64`
    Float64,
    /// `String`
    String,
    /// `bool`
    Bool,
    /// A single-level associative container.
    Map,
    /// Any other shape. Never traversed and never returned as a terminal value.
    Unsupported,
}

impl ReflectKind {
    /// Returns `true` for the terminal scalar kinds.
    ///
    /// ```
    /// # use dq_reflect::info::ReflectKind;
    /// assert!(ReflectKind::Float64.is_scalar());
    /// assert!(!ReflectKind::Record.is_scalar());
    /// assert!(!ReflectKind::Unsupported.is_scalar());
    /// ```
    #[inline]
    pub const fn is_scalar(self) -> bool {
        matches!(
            self,
            Self::Int | Self::Int64 | Self::Float32 | Self::Float64 | Self::String | Self::Bool
        )
    }

    /// Returns `true` for kinds a path can continue through.
    #[inline]
    pub const fn is_traversable(self) -> bool {
        matches!(self, Self::Indirect | Self::Record | Self::Map)
    }

    /// Returns `true` for numeric scalar kinds.
    #[inline]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Int | Self::Int64 | Self::Float32 | Self::Float64)
    }
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Indirect => f.pad("Indirect"),
            Self::Record => f.pad("Record"),
            Self::Int => f.pad("Int"),
            Self::Int64 => f.pad("Int64"),
            Self::Float32 => f.pad("Float32"),
            Self::Float64 => f.pad("Float64"),
            Self::String => f.pad("String"),
            Self::Bool => f.pad("Bool"),
            Self::Map => f.pad("Map"),
            Self::Unsupported => f.pad("Unsupported"),
        }
    }
}

// -----------------------------------------------------------------------------
// Classifier

/// Reports the shape category of `value`. Never fails.
///
/// # Examples
///
/// ```
/// use dq_reflect::info::{ReflectKind, classify};
///
/// assert_eq!(classify(&1.0_f64), ReflectKind::Float64);
/// assert_eq!(classify(&Some(3_i32)), ReflectKind::Indirect);
/// assert_eq!(classify(&vec![1_u8]), ReflectKind::Unsupported);
/// ```
#[inline]
pub fn classify(value: &dyn Reflect) -> ReflectKind {
    value.reflect_kind()
}

#[cfg(test)]
mod tests {
    use super::{ReflectKind, classify};
    use alloc::boxed::Box;
    use alloc::collections::BTreeMap;
    use alloc::string::{String, ToString};
    use alloc::sync::Arc;
    use alloc::vec;

    #[test]
    fn scalars() {
        assert_eq!(classify(&5_i32), ReflectKind::Int);
        assert_eq!(classify(&5_i64), ReflectKind::Int64);
        assert_eq!(classify(&5_f32), ReflectKind::Float32);
        assert_eq!(classify(&String::new()), ReflectKind::String);
        assert_eq!(classify(&true), ReflectKind::Bool);
    }

    #[test]
    fn containers() {
        assert_eq!(classify(&Box::new(1_i32)), ReflectKind::Indirect);
        assert_eq!(classify(&Arc::new(1_i32)), ReflectKind::Indirect);
        assert_eq!(classify(&None::<i32>), ReflectKind::Indirect);

        let map: BTreeMap<String, f64> = BTreeMap::new();
        assert_eq!(classify(&map), ReflectKind::Map);
    }

    #[test]
    fn unsupported() {
        assert_eq!(classify(&5_u8), ReflectKind::Unsupported);
        assert_eq!(classify(&vec![1_i32]), ReflectKind::Unsupported);
        assert_eq!(classify(&[1_i32; 2]), ReflectKind::Unsupported);
        assert_eq!(classify(&'c'), ReflectKind::Unsupported);
    }

    #[test]
    fn display() {
        assert_eq!(ReflectKind::Float64.to_string(), "Float64");
        assert_eq!(ReflectKind::Indirect.to_string(), "Indirect");
    }
}
