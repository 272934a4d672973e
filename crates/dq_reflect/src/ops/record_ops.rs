use core::fmt;

use crate::Reflect;
use crate::info::RecordInfo;

// -----------------------------------------------------------------------------
// Record trait

/// Type-erased access to the named fields of a record.
///
/// Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect) on structs
/// with named fields. Field names are the *reflected* names, which may differ
/// from the Rust identifiers (`#[reflect(rename = "...")]`); fields marked
/// `#[reflect(ignore)]` do not exist for this trait.
///
/// # Examples
///
/// ```
/// use dq_reflect::{derive::Reflect, ops::Record};
///
/// #[derive(Reflect)]
/// #[reflect(rename_all = "PascalCase")]
/// struct Foo {
///     alfa: f64,
///     omega: String,
/// }
///
/// let mut foo = Foo { alfa: 1.0, omega: "t2".into() };
///
/// assert_eq!(foo.field_len(), 2);
/// assert_eq!(foo.name_at(1), Some("Omega"));
/// assert!(foo.field("alfa").is_none());
///
/// *foo.field_mut("Alfa").unwrap().downcast_mut::<f64>().unwrap() = 2.0;
/// assert_eq!(foo.alfa, 2.0);
/// ```
pub trait Record: Reflect {
    /// Returns the static descriptor of this record type.
    fn record_info(&self) -> &'static RecordInfo;

    /// Returns the field named `name`, or `None` if there is no such field.
    fn field(&self, name: &str) -> Option<&dyn Reflect>;

    /// Returns the field named `name` mutably, or `None` if there is no such field.
    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Reflect>;

    /// Returns the field at `index` in declaration order.
    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the field at `index` in declaration order, mutably.
    fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Returns the name of the field at `index`.
    fn name_at(&self, index: usize) -> Option<&'static str>;

    /// Returns the number of fields.
    fn field_len(&self) -> usize;

    /// Returns an iterator over `(name, value)` pairs in declaration order.
    fn iter_fields(&self) -> RecordFieldIter<'_>;
}

impl fmt::Debug for dyn Record {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}

// -----------------------------------------------------------------------------
// Field iterator

/// An iterator over the `(name, value)` pairs of a [`Record`].
pub struct RecordFieldIter<'a> {
    record: &'a dyn Record,
    index: usize,
}

impl<'a> RecordFieldIter<'a> {
    /// Creates a new iterator for the given record.
    #[inline(always)]
    pub const fn new(record: &'a dyn Record) -> Self {
        Self { record, index: 0 }
    }
}

impl<'a> Iterator for RecordFieldIter<'a> {
    type Item = (&'static str, &'a dyn Reflect);

    fn next(&mut self) -> Option<Self::Item> {
        let name = self.record.name_at(self.index)?;
        let value = self.record.field_at(self.index)?;
        self.index += 1;
        Some((name, value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.record.field_len().saturating_sub(self.index);
        (size, Some(size))
    }
}

impl ExactSizeIterator for RecordFieldIter<'_> {}
