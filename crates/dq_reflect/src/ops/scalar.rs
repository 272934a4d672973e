use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use crate::Reflect;
use crate::info::ReflectKind;

// -----------------------------------------------------------------------------
// ScalarRef

/// A borrowed terminal value.
///
/// Numbers and booleans are copied out; strings stay borrowed.
///
/// Equality is exact: values of different kinds are never equal and floats
/// compare with IEEE semantics (`NaN != NaN`, no epsilon).
///
/// # Examples
///
/// ```
/// use dq_reflect::{Reflect, ops::{ReflectRef, ScalarRef}};
///
/// let text = String::from("t2");
/// let ReflectRef::Scalar(scalar) = text.reflect_ref() else { unreachable!() };
/// assert_eq!(scalar, ScalarRef::String("t2"));
///
/// assert_ne!(ScalarRef::Int(5), ScalarRef::Int64(5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScalarRef<'a> {
    Int(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
    String(&'a str),
    Bool(bool),
}

impl ScalarRef<'_> {
    /// Returns the kind of the value.
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Int(_) => ReflectKind::Int,
            Self::Int64(_) => ReflectKind::Int64,
            Self::Float32(_) => ReflectKind::Float32,
            Self::Float64(_) => ReflectKind::Float64,
            Self::String(_) => ReflectKind::String,
            Self::Bool(_) => ReflectKind::Bool,
        }
    }

    /// Copies the value into an owned [`Scalar`].
    pub fn to_scalar(&self) -> Scalar {
        match *self {
            Self::Int(v) => Scalar::Int(v),
            Self::Int64(v) => Scalar::Int64(v),
            Self::Float32(v) => Scalar::Float32(v),
            Self::Float64(v) => Scalar::Float64(v),
            Self::String(v) => Scalar::String(String::from(v)),
            Self::Bool(v) => Scalar::Bool(v),
        }
    }
}

impl fmt::Display for ScalarRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => fmt::Display::fmt(v, f),
            Self::Int64(v) => fmt::Display::fmt(v, f),
            Self::Float32(v) => fmt::Display::fmt(v, f),
            Self::Float64(v) => fmt::Display::fmt(v, f),
            Self::String(v) => f.pad(v),
            Self::Bool(v) => fmt::Display::fmt(v, f),
        }
    }
}

// -----------------------------------------------------------------------------
// Scalar

/// An owned terminal value.
///
/// This is what a flattened projection stores and what setters accept.
/// Serializes untagged, so `Scalar::Float64(1.0)` becomes `1.0`. Deserializing
/// picks the first kind that fits, in declaration order: whole numbers become
/// `Int` (or `Int64` past the `i32` range) and fractions become `Float64`.
/// `Float32` is never produced, so decoded numbers are not narrowed.
///
/// # Examples
///
/// ```
/// use dq_reflect::{Reflect, info::ReflectKind, ops::Scalar};
///
/// let value = Scalar::from(2.0_f64);
/// assert_eq!(value.kind(), ReflectKind::Float64);
///
/// let mut target = 1.0_f64;
/// target.set(value.into_reflect()).unwrap();
/// assert_eq!(target, 2.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum Scalar {
    Int(i32),
    Int64(i64),
    Float64(f64),
    Float32(f32),
    String(String),
    Bool(bool),
}

impl Scalar {
    /// Returns the kind of the value.
    pub fn kind(&self) -> ReflectKind {
        self.as_scalar_ref().kind()
    }

    /// Borrows the value as a [`ScalarRef`].
    pub fn as_scalar_ref(&self) -> ScalarRef<'_> {
        match self {
            Self::Int(v) => ScalarRef::Int(*v),
            Self::Int64(v) => ScalarRef::Int64(*v),
            Self::Float32(v) => ScalarRef::Float32(*v),
            Self::Float64(v) => ScalarRef::Float64(*v),
            Self::String(v) => ScalarRef::String(v.as_str()),
            Self::Bool(v) => ScalarRef::Bool(*v),
        }
    }

    /// Boxes the inner value, e.g. `Scalar::Int(1)` becomes a boxed `i32`.
    pub fn into_reflect(self) -> Box<dyn Reflect> {
        match self {
            Self::Int(v) => Box::new(v),
            Self::Int64(v) => Box::new(v),
            Self::Float32(v) => Box::new(v),
            Self::Float64(v) => Box::new(v),
            Self::String(v) => Box::new(v),
            Self::Bool(v) => Box::new(v),
        }
    }

    /// Returns the string content if this is a `String`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_scalar_ref(), f)
    }
}

impl PartialEq<ScalarRef<'_>> for Scalar {
    #[inline]
    fn eq(&self, other: &ScalarRef<'_>) -> bool {
        self.as_scalar_ref() == *other
    }
}

macro_rules! impl_scalar_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Scalar {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_scalar_from!(
    i32 => Int,
    i64 => Int64,
    f32 => Float32,
    f64 => Float64,
    String => String,
    bool => Bool,
);

impl From<&str> for Scalar {
    #[inline]
    fn from(value: &str) -> Self {
        Self::String(String::from(value))
    }
}

impl<'a> From<ScalarRef<'a>> for Scalar {
    #[inline]
    fn from(value: ScalarRef<'a>) -> Self {
        value.to_scalar()
    }
}

#[cfg(test)]
mod tests {
    use super::{Scalar, ScalarRef};
    use crate::Reflect;
    use crate::info::ReflectKind;
    use alloc::string::ToString;

    #[test]
    fn kind_mismatch_is_inequality() {
        assert_ne!(Scalar::Int(5), Scalar::Int64(5));
        assert_ne!(Scalar::Float32(1.0), Scalar::Float64(1.0));
        assert_eq!(Scalar::from("x"), ScalarRef::String("x"));
    }

    #[test]
    fn exact_float_equality() {
        assert_ne!(Scalar::Float64(0.1 + 0.2), Scalar::Float64(0.3));
        assert_ne!(Scalar::Float64(f64::NAN), Scalar::Float64(f64::NAN));
    }

    #[test]
    fn into_reflect_keeps_kind() {
        for value in [
            Scalar::Int(1),
            Scalar::Int64(1),
            Scalar::Float32(1.0),
            Scalar::Float64(1.0),
            Scalar::from("1"),
            Scalar::Bool(true),
        ] {
            let kind = value.kind();
            assert_eq!(value.into_reflect().reflect_kind(), kind);
        }
        assert_eq!(Scalar::Bool(false).kind(), ReflectKind::Bool);
    }

    #[test]
    fn display() {
        assert_eq!(Scalar::Float64(2.5).to_string(), "2.5");
        assert_eq!(Scalar::from("t2").to_string(), "t2");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serialize_untagged() {
        let text = serde_json::to_string(&[Scalar::Int(10), Scalar::from("t2")]).unwrap();
        assert_eq!(text, r#"[10,"t2"]"#);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_untagged() {
        let text = r#"[10, 5000000000, 0.1, true, "t2"]"#;
        let values: alloc::vec::Vec<Scalar> = serde_json::from_str(text).unwrap();
        assert_eq!(
            values,
            [
                Scalar::Int(10),
                Scalar::Int64(5_000_000_000),
                Scalar::Float64(0.1),
                Scalar::Bool(true),
                Scalar::from("t2"),
            ]
        );
    }
}
