//! Containers for static storage of record descriptors.
//!
//! This is usually used to implement [`Record::record_info`].
//!
//! - [`NonGenericRecordInfoCell`]: for non-generic records, a plain [`OnceLock`].
//! - [`GenericRecordInfoCell`]: for generic records. A `static` inside a generic
//!   function is shared by every instantiation, so descriptors are keyed by
//!   [`TypeId`] behind a [`RwLock`].
//!
//! [`Record::record_info`]: crate::ops::Record::record_info

use alloc::boxed::Box;
use core::any::{Any, TypeId};
use std::sync::{OnceLock, PoisonError, RwLock};

use crate::hash::HashMap;
use crate::info::RecordInfo;

// -----------------------------------------------------------------------------
// NonGeneric

/// Static storage for the [`RecordInfo`] of a non-generic record.
///
/// ## Example
///
/// ```ignore
/// impl Record for Foo {
///     fn record_info(&self) -> &'static RecordInfo {
///         static CELL: NonGenericRecordInfoCell = NonGenericRecordInfoCell::new();
///         CELL.get_or_init(|| RecordInfo::new::<Foo>(&[
///             NamedField::new::<f64>("Alfa"),
///         ]))
///     }
///     // ...
/// }
/// ```
pub struct NonGenericRecordInfoCell(OnceLock<RecordInfo>);

impl NonGenericRecordInfoCell {
    /// Create an empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns the stored descriptor, building it with `f` on first access.
    #[inline]
    pub fn get_or_init(&self, f: impl FnOnce() -> RecordInfo) -> &RecordInfo {
        self.0.get_or_init(f)
    }
}

// -----------------------------------------------------------------------------
// Generic

/// Static storage for the [`RecordInfo`]s of a generic record.
///
/// ## Example
///
/// ```ignore
/// impl<T: Reflect + Typed> Record for Wrapper<T> {
///     fn record_info(&self) -> &'static RecordInfo {
///         static CELL: GenericRecordInfoCell = GenericRecordInfoCell::new();
///         CELL.get_or_insert::<Self>(|| RecordInfo::new::<Self>(&[
///             NamedField::new::<T>("Inner"),
///         ]))
///     }
///     // ...
/// }
/// ```
pub struct GenericRecordInfoCell(RwLock<Option<HashMap<TypeId, &'static RecordInfo>>>);

impl GenericRecordInfoCell {
    /// Create an empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(None))
    }

    /// Returns the descriptor stored for `G`, building it with `f` on first
    /// access.
    ///
    /// Descriptors are leaked: there is one per instantiated record type and
    /// they live for the whole program.
    #[inline(always)]
    pub fn get_or_insert<G: Any + ?Sized>(&self, f: impl FnOnce() -> RecordInfo) -> &RecordInfo {
        self.get_or_insert_by_type_id(TypeId::of::<G>(), f)
    }

    #[inline(never)]
    fn get_or_insert_by_type_id(
        &self,
        type_id: TypeId,
        f: impl FnOnce() -> RecordInfo,
    ) -> &'static RecordInfo {
        if let Some(info) = self.get_by_type_id(type_id) {
            return info;
        }

        let mut guard = self.0.write().unwrap_or_else(PoisonError::into_inner);
        let map = guard.get_or_insert_with(HashMap::default);
        *map.entry(type_id)
            .or_insert_with(|| &*Box::leak(Box::new(f())))
    }

    fn get_by_type_id(&self, type_id: TypeId) -> Option<&'static RecordInfo> {
        let guard = self.0.read().unwrap_or_else(PoisonError::into_inner);
        guard.as_ref()?.get(&type_id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::{GenericRecordInfoCell, NonGenericRecordInfoCell};
    use crate::info::{NamedField, RecordInfo};

    #[test]
    fn non_generic_initializes_once() {
        static CELL: NonGenericRecordInfoCell = NonGenericRecordInfoCell::new();
        let a = CELL.get_or_init(|| RecordInfo::new::<i32>(&[NamedField::new::<f64>("Alfa")]));
        let b = CELL.get_or_init(|| RecordInfo::new::<i32>(&[]));
        assert!(core::ptr::eq(a, b));
        assert_eq!(b.field_len(), 1);
    }

    #[test]
    fn generic_is_keyed_by_type() {
        static CELL: GenericRecordInfoCell = GenericRecordInfoCell::new();
        let a = CELL.get_or_insert::<i32>(|| RecordInfo::new::<i32>(&[]));
        let b = CELL.get_or_insert::<i64>(|| RecordInfo::new::<i64>(&[]));
        let c = CELL.get_or_insert::<i32>(|| RecordInfo::new::<f32>(&[]));
        assert!(!core::ptr::eq(a, b));
        assert!(core::ptr::eq(a, c));
        assert_eq!(c.type_path(), "i32");
    }
}
