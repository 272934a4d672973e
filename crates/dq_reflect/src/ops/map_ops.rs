use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use crate::Reflect;
use crate::info::ReflectKind;

/// Iterator returned by [`Map::iter`]. The order is unspecified.
pub type MapIter<'a> = Box<dyn Iterator<Item = (&'a dyn Reflect, &'a dyn Reflect)> + 'a>;

/// Type-erased access to a single-level associative container.
///
/// Only maps with `String` keys and scalar values can be traversed by
/// paths; the declared [`key_kind`](Map::key_kind) and
/// [`has_scalar_values`](Map::has_scalar_values) let callers reject other
/// shapes even when the map is empty.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use dq_reflect::{Reflect, info::ReflectKind, ops::ReflectRef};
///
/// let zeta: HashMap<String, f64> = HashMap::from([("zeta1".into(), 1.0)]);
/// let ReflectRef::Map(map) = zeta.reflect_ref() else { unreachable!() };
///
/// assert_eq!(map.key_kind(), ReflectKind::String);
/// assert_eq!(map.value_kind(), ReflectKind::Float64);
/// let value = map.get_str("zeta1").unwrap();
/// assert_eq!(value.downcast_ref::<f64>(), Some(&1.0));
/// assert!(map.get_str("zeta9").is_none());
/// ```
pub trait Map: Reflect {
    /// Returns the value stored under `key`.
    ///
    /// Returns `None` if `key` is not of the map's key type or is absent.
    fn get(&self, key: &dyn Reflect) -> Option<&dyn Reflect>;

    /// Returns the value stored under `key` mutably.
    fn get_mut(&mut self, key: &dyn Reflect) -> Option<&mut dyn Reflect>;

    /// Returns the number of entries.
    fn len(&self) -> usize;

    /// Returns `true` if the map has no entries.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over `(key, value)` pairs, in unspecified order.
    fn iter(&self) -> MapIter<'_>;

    /// Returns the declared kind of the key type.
    fn key_kind(&self) -> ReflectKind;

    /// Returns the declared kind of the value type.
    fn value_kind(&self) -> ReflectKind;

    /// Returns `true` if every value is a terminal scalar.
    ///
    /// Differs from `value_kind().is_scalar()` for maps of
    /// [`Scalar`](crate::ops::Scalar), whose values mix kinds.
    #[inline]
    fn has_scalar_values(&self) -> bool {
        self.value_kind().is_scalar()
    }

    /// Looks up a `String`-keyed entry.
    #[inline]
    fn get_str(&self, key: &str) -> Option<&dyn Reflect> {
        self.get(&String::from(key))
    }

    /// Looks up a `String`-keyed entry mutably.
    #[inline]
    fn get_str_mut(&mut self, key: &str) -> Option<&mut dyn Reflect> {
        self.get_mut(&String::from(key))
    }
}

impl fmt::Debug for dyn Map {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}
