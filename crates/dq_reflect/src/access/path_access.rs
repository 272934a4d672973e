//! Provide multi-segment path resolution.

use alloc::string::{String, ToString};

use crate::Reflect;
use crate::access::accessor::{
    check_segment, deref, deref_mut, finish, lookup_map, lookup_map_mut,
};
use crate::access::{FieldPath, ResolveError};
use crate::info::ReflectKind;
use crate::ops::{Record, ReflectMut, ReflectRef, ScalarRef};

// -----------------------------------------------------------------------------
// Mode

/// What the last segment of a path is allowed to reach.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ResolveMode {
    /// Only terminal scalars; anything else fails with
    /// [`ResolveError::NotAScalar`]. Used by getters and setters.
    #[default]
    Scalar,
    /// Any value, including records, indirections and maps.
    Structural,
}

// -----------------------------------------------------------------------------
// Walk

impl<'a> FieldPath<'a> {
    /// Returns a reference to the value this path names inside `root`.
    ///
    /// `root` may be a record, any chain of indirections to a record, or a
    /// single-level map (then the whole path is the key).
    ///
    /// # Examples
    ///
    /// ```
    /// use dq_reflect::{derive::Reflect, access::{FieldPath, ResolveError, ResolveMode}};
    ///
    /// #[derive(Reflect)]
    /// #[reflect(rename_all = "PascalCase")]
    /// struct Foo {
    ///     alfa: f64,
    ///     #[reflect(rename = "beta")]
    ///     beta: String,
    /// }
    ///
    /// let foo = Foo { alfa: 1.0, beta: "x".into() };
    ///
    /// let alfa = FieldPath::parse("Alfa", ".").resolve(&foo, ResolveMode::Scalar).unwrap();
    /// assert_eq!(alfa.downcast_ref::<f64>(), Some(&1.0));
    ///
    /// let err = FieldPath::parse("beta", ".").resolve(&foo, ResolveMode::Scalar).unwrap_err();
    /// assert!(matches!(err, ResolveError::InvalidFieldName { .. }));
    /// ```
    pub fn resolve<'r>(
        &self,
        root: &'r dyn Reflect,
        mode: ResolveMode,
    ) -> Result<&'r dyn Reflect, ResolveError> {
        let mut record: &'r dyn Record = match deref(root, self, 0)? {
            ReflectRef::Record(record) => record,
            ReflectRef::Map(map) => return lookup_map(map, self, 0, mode),
            other => {
                check_segment(self, 0)?;
                return Err(unsupported_root(self, other.kind()));
            }
        };

        let mut index = 0;
        loop {
            let name = check_segment(self, index)?;
            let field = record
                .field(name)
                .ok_or_else(|| missing_field(self, index, name, record.reflect_type_path()))?;

            if index + 1 == self.len() {
                finish(field, self, index, mode)?;
                return Ok(field);
            }

            record = match deref(field, self, index)? {
                ReflectRef::Record(next) => next,
                ReflectRef::Map(map) => return lookup_map(map, self, index + 1, mode),
                other => return Err(not_traversable(self, index, other.kind())),
            };
            index += 1;
        }
    }

    /// Returns a mutable reference to the value this path names inside `root`.
    ///
    /// Follows the same rules as [`resolve`](Self::resolve); additionally
    /// fails with [`ResolveError::NotSettable`] when an indirection on the
    /// way only allows shared access (a shared `Arc`).
    pub fn resolve_mut<'r>(
        &self,
        root: &'r mut dyn Reflect,
        mode: ResolveMode,
    ) -> Result<&'r mut dyn Reflect, ResolveError> {
        let mut record: &'r mut dyn Record = match deref_mut(root, self, 0)? {
            ReflectMut::Record(record) => record,
            ReflectMut::Map(map) => return lookup_map_mut(map, self, 0, mode),
            other => {
                check_segment(self, 0)?;
                return Err(unsupported_root(self, other.kind()));
            }
        };

        let mut index = 0;
        loop {
            let name = check_segment(self, index)?;
            let type_path = record.reflect_type_path();
            let Some(field) = record.field_mut(name) else {
                return Err(missing_field(self, index, name, type_path));
            };

            if index + 1 == self.len() {
                finish(field, self, index, mode)?;
                return Ok(field);
            }

            record = match deref_mut(field, self, index)? {
                ReflectMut::Record(next) => next,
                ReflectMut::Map(map) => return lookup_map_mut(map, self, index + 1, mode),
                other => return Err(not_traversable(self, index, other.kind())),
            };
            index += 1;
        }
    }

    /// Resolves in [`ResolveMode::Scalar`] and returns the borrowed scalar.
    ///
    /// ```
    /// use dq_reflect::{derive::Reflect, access::FieldPath, ops::ScalarRef};
    ///
    /// #[derive(Reflect)]
    /// struct Foo {
    ///     #[reflect(rename = "Omega")]
    ///     omega: String,
    /// }
    ///
    /// let foo = Foo { omega: "t2".into() };
    /// let value = FieldPath::parse("Omega", ".").resolve_scalar(&foo).unwrap();
    /// assert_eq!(value, ScalarRef::String("t2"));
    /// ```
    pub fn resolve_scalar<'r>(&self, root: &'r dyn Reflect) -> Result<ScalarRef<'r>, ResolveError> {
        let value = self.resolve(root, ResolveMode::Scalar)?;
        match value.reflect_ref() {
            ReflectRef::Scalar(scalar) => Ok(scalar),
            other => Err(ResolveError::NotAScalar {
                path: self.as_str().to_string(),
                kind: other.kind(),
            }),
        }
    }
}

fn unsupported_root(path: &FieldPath<'_>, kind: ReflectKind) -> ResolveError {
    ResolveError::UnsupportedRootShape {
        path: path.prefix(0).to_string(),
        kind,
    }
}

fn missing_field(
    path: &FieldPath<'_>,
    index: usize,
    name: &str,
    record: &'static str,
) -> ResolveError {
    ResolveError::MissingField {
        path: path.prefix(index).to_string(),
        field: name.to_string(),
        record,
    }
}

fn not_traversable(path: &FieldPath<'_>, index: usize, kind: ReflectKind) -> ResolveError {
    ResolveError::NotTraversable {
        path: path.prefix(index).to_string(),
        kind,
    }
}

// -----------------------------------------------------------------------------
// Resolver

/// Parses and resolves path text with a fixed separator.
///
/// Unlike [`FieldPath`], which is parsed once and can be reused against many
/// roots, this parses the text on every call.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use dq_reflect::{derive::Reflect, access::{ResolveMode, Resolver}};
///
/// #[derive(Reflect)]
/// struct Foo {
///     #[reflect(rename = "Zeta")]
///     zeta: BTreeMap<String, f64>,
/// }
///
/// let mut foo = Foo { zeta: BTreeMap::from([("zeta.1".into(), 1.0)]) };
/// let resolver = Resolver::new("_");
///
/// // Everything after the map field is a single key.
/// let value = resolver.resolve("Zeta_zeta.1", &foo, ResolveMode::Scalar).unwrap();
/// assert_eq!(value.downcast_ref::<f64>(), Some(&1.0));
///
/// let slot = resolver.resolve_mut("Zeta_zeta.1", &mut foo, ResolveMode::Scalar).unwrap();
/// *slot.downcast_mut::<f64>().unwrap() = 2.0;
/// assert_eq!(foo.zeta["zeta.1"], 2.0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Resolver {
    separator: String,
}

impl Default for Resolver {
    #[inline]
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEPARATOR)
    }
}

impl Resolver {
    /// The separator used by [`Resolver::default`].
    pub const DEFAULT_SEPARATOR: &'static str = ".";

    /// Creates a resolver splitting paths on `separator`.
    #[inline]
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }

    /// Returns the configured separator.
    #[inline]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Parses `text` with the configured separator.
    #[inline]
    pub fn parse<'a>(&self, text: &'a str) -> FieldPath<'a> {
        FieldPath::parse(text, &self.separator)
    }

    /// See [`FieldPath::resolve`].
    #[inline]
    pub fn resolve<'r>(
        &self,
        path: &str,
        root: &'r dyn Reflect,
        mode: ResolveMode,
    ) -> Result<&'r dyn Reflect, ResolveError> {
        self.parse(path).resolve(root, mode)
    }

    /// See [`FieldPath::resolve_mut`].
    #[inline]
    pub fn resolve_mut<'r>(
        &self,
        path: &str,
        root: &'r mut dyn Reflect,
        mode: ResolveMode,
    ) -> Result<&'r mut dyn Reflect, ResolveError> {
        self.parse(path).resolve_mut(root, mode)
    }

    /// See [`FieldPath::resolve_scalar`].
    #[inline]
    pub fn resolve_scalar<'r>(
        &self,
        path: &str,
        root: &'r dyn Reflect,
    ) -> Result<ScalarRef<'r>, ResolveError> {
        self.parse(path).resolve_scalar(root)
    }

    /// Joins `prefix` and `name` with the configured separator.
    ///
    /// ```
    /// # use dq_reflect::access::Resolver;
    /// let resolver = Resolver::default();
    /// assert_eq!(resolver.join("", "Alfa"), "Alfa");
    /// assert_eq!(resolver.join("Gamma", "Omega"), "Gamma.Omega");
    /// ```
    pub fn join(&self, prefix: &str, name: &str) -> String {
        if prefix.is_empty() {
            return name.to_string();
        }
        let mut path = String::with_capacity(prefix.len() + self.separator.len() + name.len());
        path.push_str(prefix);
        path.push_str(&self.separator);
        path.push_str(name);
        path
    }
}
