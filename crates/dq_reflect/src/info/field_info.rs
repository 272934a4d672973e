use core::any::{Any, TypeId};

use crate::info::{ReflectKind, Typed};

// -----------------------------------------------------------------------------
// Visibility

/// The visibility rule: a name is accessible iff its first character is an
/// upper-case letter.
///
/// Case-sensitive and locale independent (`char::is_uppercase`), so it holds
/// for non-ASCII letters too. The empty name is never accessible.
///
/// # Examples
///
/// ```
/// use dq_reflect::info::is_accessible_name;
///
/// assert!(is_accessible_name("Alfa"));
/// assert!(is_accessible_name("Élan"));
/// assert!(!is_accessible_name("beta"));
/// assert!(!is_accessible_name("_Gamma"));
/// assert!(!is_accessible_name(""));
/// ```
#[inline]
pub fn is_accessible_name(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}

// -----------------------------------------------------------------------------
// NamedField

/// Information for one field of a record.
///
/// # Examples
///
/// ```
/// use dq_reflect::{derive::Reflect, info::ReflectKind, ops::Record};
///
/// #[derive(Reflect)]
/// struct Foo {
///     #[reflect(rename = "Alfa")]
///     alfa: f64,
///     beta: String,
/// }
///
/// let foo = Foo { alfa: 1.0, beta: String::new() };
/// let info = foo.record_info();
///
/// let alfa = info.field_at(0).unwrap();
/// assert_eq!(alfa.name(), "Alfa");
/// assert_eq!(alfa.kind(), ReflectKind::Float64);
/// assert!(alfa.is_accessible());
///
/// assert!(!info.field("beta").unwrap().is_accessible());
/// ```
#[derive(Clone, Debug)]
pub struct NamedField {
    ty_id: TypeId,
    name: &'static str,
    kind: ReflectKind,
    type_path: &'static str,
}

impl NamedField {
    /// Creates a new [`NamedField`] for the given field `name` and type `T`.
    #[inline]
    pub fn new<T: Typed>(name: &'static str) -> Self {
        Self {
            ty_id: TypeId::of::<T>(),
            name,
            kind: T::KIND,
            type_path: core::any::type_name::<T>(),
        }
    }

    /// Returns the reflected field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the declared kind of the field type.
    #[inline]
    pub const fn kind(&self) -> ReflectKind {
        self.kind
    }

    /// Returns the type path of the field type.
    #[inline]
    pub const fn type_path(&self) -> &'static str {
        self.type_path
    }

    /// Returns the `TypeId` of the field type.
    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    /// Check if the field type is `T`.
    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty_id == TypeId::of::<T>()
    }

    /// See [`is_accessible_name`].
    #[inline]
    pub fn is_accessible(&self) -> bool {
        is_accessible_name(self.name)
    }
}
