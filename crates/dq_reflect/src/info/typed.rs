use crate::Reflect;
use crate::info::ReflectKind;

/// Kind information known from the type alone.
///
/// [`Reflect::reflect_kind`] answers for a value; `Typed` answers for a type,
/// which is what descriptors need: the declared kind of a field, or the value
/// kind of an empty map.
///
/// Implemented by `#[derive(Reflect)]` and for every type this crate reflects.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use dq_reflect::info::{ReflectKind, Typed};
///
/// assert_eq!(<f64 as Typed>::KIND, ReflectKind::Float64);
/// assert_eq!(<Option<i32> as Typed>::KIND, ReflectKind::Indirect);
/// assert_eq!(<HashMap<String, bool> as Typed>::KIND, ReflectKind::Map);
/// assert!(<bool as Typed>::SCALAR);
/// ```
pub trait Typed: Reflect {
    /// The kind every value of this type reports.
    ///
    /// [`Scalar`](crate::ops::Scalar) changes kind with its value and
    /// declares `Unsupported`; see [`SCALAR`](Typed::SCALAR).
    const KIND: ReflectKind;

    /// `true` if every value of this type is a terminal scalar.
    const SCALAR: bool = Self::KIND.is_scalar();
}
