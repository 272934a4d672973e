use core::fmt;

use crate::Reflect;
use crate::info::ReflectKind;

/// An optional reference to another value.
///
/// Presence is explicit: [`is_present`](Indirect::is_present) is checked
/// before [`target`](Indirect::target) is followed.
///
/// | type        | present     | mutable target                      |
/// |-------------|-------------|-------------------------------------|
/// | `Option<T>` | `Some(_)`   | when present                        |
/// | `Box<T>`    | always      | always                              |
/// | `Arc<T>`    | always      | only while uniquely owned           |
///
/// # Examples
///
/// ```
/// use dq_reflect::{Reflect, info::ReflectKind, ops::ReflectRef};
///
/// let empty: Option<Box<f64>> = None;
/// let ReflectRef::Indirect(indirect) = empty.reflect_ref() else { unreachable!() };
///
/// assert!(!indirect.is_present());
/// assert!(indirect.target().is_none());
/// assert_eq!(indirect.target_kind(), ReflectKind::Indirect);
/// ```
pub trait Indirect: Reflect {
    /// Returns `true` if a target value exists.
    fn is_present(&self) -> bool;

    /// Returns the referenced value, or `None` if empty.
    fn target(&self) -> Option<&dyn Reflect>;

    /// Returns the referenced value mutably.
    ///
    /// Returns `None` if empty, or if the target exists but cannot be
    /// borrowed mutably (e.g. a shared `Arc`).
    fn target_mut(&mut self) -> Option<&mut dyn Reflect>;

    /// Returns the declared kind of the target type.
    fn target_kind(&self) -> ReflectKind;
}

impl fmt::Debug for dyn Indirect {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}
