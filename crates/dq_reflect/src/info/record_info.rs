use alloc::boxed::Box;

use crate::hash::HashMap;
use crate::info::{NamedField, Typed};

/// The capability descriptor of a record type.
///
/// Built once per type (see [`NonGenericRecordInfoCell`]) and shared by every
/// value of that type. Fields keep their **declaration order**; lookups by
/// name go through a hash index.
///
/// # Examples
///
/// ```rust
/// use dq_reflect::{derive::Reflect, ops::Record};
///
/// #[derive(Reflect)]
/// struct A {
///     #[reflect(rename = "Val")]
///     val: f32,
///     #[reflect(ignore)]
///     cache: Vec<u8>,
/// }
///
/// let a = A { val: 1.0, cache: Vec::new() };
/// let info = a.record_info();
///
/// assert_eq!(info.field_len(), 1);
/// assert_eq!(info.index_of("Val"), Some(0));
/// assert!(info.field("cache").is_none());
/// ```
///
/// [`NonGenericRecordInfoCell`]: crate::impls::NonGenericRecordInfoCell
#[derive(Clone, Debug)]
pub struct RecordInfo {
    type_path: &'static str,
    fields: Box<[NamedField]>,
    indices: HashMap<&'static str, usize>,
}

impl RecordInfo {
    /// Create a new [`RecordInfo`].
    ///
    /// The order of fields follows the input order.
    pub fn new<T: Typed>(fields: &[NamedField]) -> Self {
        let indices = fields
            .iter()
            .enumerate()
            .map(|(index, field)| (field.name(), index))
            .collect();

        Self {
            type_path: core::any::type_name::<T>(),
            fields: fields.into(),
            indices,
        }
    }

    /// Returns the type path of the record.
    #[inline]
    pub const fn type_path(&self) -> &'static str {
        self.type_path
    }

    /// Returns the [`NamedField`] for the given `name`, if present.
    #[inline]
    pub fn field(&self, name: &str) -> Option<&NamedField> {
        self.fields.get(*self.indices.get(name)?)
    }

    /// Returns the [`NamedField`] at the given index, if present.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&NamedField> {
        self.fields.get(index)
    }

    /// Returns the index for the given field `name`, if present.
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.indices.get(name).copied()
    }

    /// Returns an iterator over the fields in declaration order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, NamedField> {
        self.fields.iter()
    }

    /// Returns an iterator over the fields that pass the visibility rule.
    pub fn accessible_fields(&self) -> impl Iterator<Item = &NamedField> {
        self.fields.iter().filter(|field| field.is_accessible())
    }

    /// Returns the number of fields.
    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }
}

#[cfg(test)]
mod tests {
    use crate::derive::Reflect;
    use crate::info::ReflectKind;
    use crate::ops::Record;
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec::Vec;

    #[derive(Reflect)]
    #[reflect(rename_all = "PascalCase")]
    struct Sample {
        alfa: f64,
        #[reflect(rename = "beta")]
        beta: String,
        gamma_ray: Option<i32>,
        zeta: BTreeMap<String, f64>,
        tags: Vec<String>,
    }

    fn sample() -> Sample {
        Sample {
            alfa: 1.0,
            beta: String::new(),
            gamma_ray: None,
            zeta: BTreeMap::new(),
            tags: Vec::new(),
        }
    }

    #[test]
    fn declaration_order_and_kinds() {
        let value = sample();
        let info = value.record_info();

        let names: Vec<_> = info.iter().map(|f| f.name()).collect();
        assert_eq!(names, ["Alfa", "beta", "GammaRay", "Zeta", "Tags"]);

        let kinds: Vec<_> = info.iter().map(|f| f.kind()).collect();
        assert_eq!(
            kinds,
            [
                ReflectKind::Float64,
                ReflectKind::String,
                ReflectKind::Indirect,
                ReflectKind::Map,
                ReflectKind::Unsupported,
            ]
        );
    }

    #[test]
    fn accessible_fields() {
        let value = sample();
        let names: Vec<_> = value
            .record_info()
            .accessible_fields()
            .map(|f| f.name())
            .collect();
        assert_eq!(names, ["Alfa", "GammaRay", "Zeta", "Tags"]);
    }

    #[test]
    fn shared_descriptor() {
        let a = sample();
        let b = sample();
        assert!(core::ptr::eq(a.record_info(), b.record_info()));
        assert!(a.record_info().type_path().ends_with("Sample"));
    }
}
