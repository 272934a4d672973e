use alloc::string::{String, ToString};
use alloc::vec::Vec;

use dq_reflect::Reflect;
use dq_reflect::access::{ResolveError, ResolveMode, Resolver};
use dq_reflect::hash::HashMap;
use dq_reflect::ops::Scalar;

use crate::coerce::{coerce, to_bool, to_float64, to_int64, to_str};
use crate::walk::Walker;
use crate::{Diagnostic, SurferConfig, SurferError};

/// A flattened projection: every reachable scalar keyed by its path.
pub type FlatData = HashMap<String, Scalar>;

// -----------------------------------------------------------------------------
// Surfer

/// Typed field access by path.
///
/// A `Surfer` only holds the separator, so it is cheap to clone and can be
/// shared between threads. The same separator splits input paths and joins
/// the paths produced by [`vars`](Self::vars) and
/// [`flat_data`](Self::flat_data).
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use dq_reflect::derive::Reflect;
/// use dq_surf::Surfer;
///
/// #[derive(Reflect)]
/// #[reflect(rename_all = "PascalCase")]
/// struct Level2 {
///     ypsilon: i32,
///     omega: String,
/// }
///
/// #[derive(Reflect)]
/// #[reflect(rename_all = "PascalCase")]
/// struct Level1 {
///     alfa: f64,
///     gamma: Level2,
///     zeta: HashMap<String, f64>,
/// }
///
/// let mut level1 = Level1 {
///     alfa: 1.0,
///     gamma: Level2 { ypsilon: 10, omega: "t2".into() },
///     zeta: HashMap::from([("zeta1".into(), 1.0)]),
/// };
///
/// let surfer = Surfer::new();
/// assert_eq!(surfer.get_int64("Gamma.Ypsilon", &level1).unwrap(), 10);
/// assert_eq!(surfer.get_float64("Zeta.zeta1", &level1).unwrap(), 1.0);
///
/// surfer.set_string("Gamma.Omega", "t3", &mut level1).unwrap();
/// assert_eq!(level1.gamma.omega, "t3");
///
/// let data = surfer.flat_data(&level1).unwrap();
/// assert_eq!(data.len(), 4);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Surfer {
    resolver: Resolver,
}

impl Surfer {
    /// Creates a surfer using `"."` as separator.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a surfer splitting and joining paths on `separator`.
    ///
    /// An empty separator disables splitting: every path is a single
    /// segment. [`vars`](Self::vars) and [`flat_data`](Self::flat_data)
    /// then skip nested fields, and with any separator they skip fields
    /// whose name contains it, since their paths would not resolve back.
    #[inline]
    pub fn with_separator(separator: impl Into<String>) -> Self {
        Self {
            resolver: Resolver::new(separator),
        }
    }

    /// Creates a surfer from a loaded configuration.
    #[inline]
    pub fn from_config(config: &SurferConfig) -> Self {
        Self::with_separator(config.separator.as_str())
    }

    /// Returns the separator that splits and joins paths.
    #[inline]
    pub fn separator(&self) -> &str {
        self.resolver.separator()
    }

    /// Returns the underlying resolver.
    #[inline]
    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// Returns the value at `path`, which may be structured.
    ///
    /// Useful to hand a sub-record to code that only knows `dyn Reflect`.
    #[inline]
    pub fn resolve<'r>(
        &self,
        path: &str,
        root: &'r dyn Reflect,
    ) -> Result<&'r dyn Reflect, ResolveError> {
        self.resolver.resolve(path, root, ResolveMode::Structural)
    }

    // -------------------------------------------------------------------------
    // Reads

    /// Returns a copy of the scalar at `path`.
    pub fn get(&self, path: &str, root: &dyn Reflect) -> Result<Scalar, SurferError> {
        Ok(self.resolver.resolve_scalar(path, root)?.to_scalar())
    }

    /// Returns the value at `path` as `f64`.
    ///
    /// Any numeric field is widened; a string field is parsed.
    pub fn get_float64(&self, path: &str, root: &dyn Reflect) -> Result<f64, SurferError> {
        to_float64(path, self.resolver.resolve_scalar(path, root)?)
    }

    /// Returns the value at `path` as `i64`.
    ///
    /// `Int` fields are widened and string fields are parsed, with `0x`,
    /// `0o`, `0b` and leading-zero octal prefixes. Digit-group underscores
    /// such as `1_000` are rejected. Float fields are a
    /// [`SurferError::TypeMismatch`].
    pub fn get_int64(&self, path: &str, root: &dyn Reflect) -> Result<i64, SurferError> {
        to_int64(path, self.resolver.resolve_scalar(path, root)?)
    }

    /// Returns the string at `path`. Other kinds are not converted.
    pub fn get_string<'r>(
        &self,
        path: &str,
        root: &'r dyn Reflect,
    ) -> Result<&'r str, SurferError> {
        to_str(path, self.resolver.resolve_scalar(path, root)?)
    }

    /// Returns the value at `path` as `bool`.
    ///
    /// A string field is `true` when it equals `"true"` ignoring ASCII case,
    /// and `false` otherwise.
    pub fn get_bool(&self, path: &str, root: &dyn Reflect) -> Result<bool, SurferError> {
        to_bool(path, self.resolver.resolve_scalar(path, root)?)
    }

    // -------------------------------------------------------------------------
    // Writes

    /// Writes `value` into the scalar field at `path`.
    ///
    /// The value is converted to the kind of the field first, with the rules
    /// of the getters, plus narrowing to `Float32` and a range check for
    /// `Int`. Fails with [`ResolveError::NotSettable`] when the field sits
    /// behind a shared `Arc`.
    ///
    /// ```
    /// use dq_reflect::derive::Reflect;
    /// use dq_surf::{Surfer, SurferError};
    ///
    /// #[derive(Reflect)]
    /// struct Foo {
    ///     #[reflect(rename = "Count")]
    ///     count: i32,
    /// }
    ///
    /// let mut foo = Foo { count: 0 };
    /// let surfer = Surfer::new();
    ///
    /// surfer.set("Count", "0x10", &mut foo).unwrap();
    /// assert_eq!(foo.count, 16);
    ///
    /// let err = surfer.set("Count", i64::MAX, &mut foo).unwrap_err();
    /// assert!(matches!(err, SurferError::OutOfRange { .. }));
    /// assert_eq!(foo.count, 16);
    /// ```
    pub fn set(
        &self,
        path: &str,
        value: impl Into<Scalar>,
        root: &mut dyn Reflect,
    ) -> Result<(), SurferError> {
        let value = value.into();
        let field = self.resolver.resolve_mut(path, root, ResolveMode::Scalar)?;
        let coerced = coerce(path, value.as_scalar_ref(), field.reflect_kind())?;
        // Kinds agree after coercion, so the write cannot be rejected.
        if let Err(rejected) = field.set(coerced.into_reflect()) {
            return Err(SurferError::TypeMismatch {
                path: path.to_string(),
                expected: field.reflect_kind(),
                actual: rejected.reflect_kind(),
            });
        }
        Ok(())
    }

    #[inline]
    pub fn set_float64(
        &self,
        path: &str,
        value: f64,
        root: &mut dyn Reflect,
    ) -> Result<(), SurferError> {
        self.set(path, value, root)
    }

    #[inline]
    pub fn set_int64(
        &self,
        path: &str,
        value: i64,
        root: &mut dyn Reflect,
    ) -> Result<(), SurferError> {
        self.set(path, value, root)
    }

    #[inline]
    pub fn set_string(
        &self,
        path: &str,
        value: &str,
        root: &mut dyn Reflect,
    ) -> Result<(), SurferError> {
        self.set(path, value, root)
    }

    #[inline]
    pub fn set_bool(
        &self,
        path: &str,
        value: bool,
        root: &mut dyn Reflect,
    ) -> Result<(), SurferError> {
        self.set(path, value, root)
    }

    // -------------------------------------------------------------------------
    // Bulk

    /// Lists the path of every reachable scalar.
    ///
    /// Record fields come in declaration order, map entries in the map's
    /// iteration order. Skipped fields are logged at `debug` level; use
    /// [`vars_with`](Self::vars_with) to receive them.
    #[inline]
    pub fn vars(&self, root: &dyn Reflect) -> Result<Vec<String>, SurferError> {
        self.vars_with(root, |_| {})
    }

    /// Like [`vars`](Self::vars), reporting every skipped field to `sink`.
    ///
    /// ```
    /// use dq_reflect::derive::Reflect;
    /// use dq_surf::{DiagnosticReason, Surfer};
    ///
    /// #[derive(Reflect)]
    /// struct Foo {
    ///     #[reflect(rename = "Alfa")]
    ///     alfa: f64,
    ///     #[reflect(rename = "Tags")]
    ///     tags: Vec<i32>,
    /// }
    ///
    /// let foo = Foo { alfa: 1.0, tags: vec![1, 2] };
    /// let mut skipped = Vec::new();
    /// let vars = Surfer::new().vars_with(&foo, |d| skipped.push(d)).unwrap();
    ///
    /// assert_eq!(vars, ["Alfa"]);
    /// assert_eq!(skipped[0].path, "Tags");
    /// assert!(matches!(skipped[0].reason, DiagnosticReason::UnsupportedKind(_)));
    /// ```
    pub fn vars_with(
        &self,
        root: &dyn Reflect,
        sink: impl FnMut(Diagnostic),
    ) -> Result<Vec<String>, SurferError> {
        let mut vars = Vec::new();
        Walker::new(&self.resolver, |path, _| vars.push(path), sink).walk(root)?;
        Ok(vars)
    }

    /// Flattens `root` into a map from path to scalar.
    ///
    /// Every key resolves against the same root to an equal value through
    /// [`get`](Self::get).
    #[inline]
    pub fn flat_data(&self, root: &dyn Reflect) -> Result<FlatData, SurferError> {
        self.flat_data_with(root, |_| {})
    }

    /// Like [`flat_data`](Self::flat_data), reporting every skipped field to
    /// `sink`.
    pub fn flat_data_with(
        &self,
        root: &dyn Reflect,
        sink: impl FnMut(Diagnostic),
    ) -> Result<FlatData, SurferError> {
        let mut data = FlatData::default();
        Walker::new(
            &self.resolver,
            |path, value| {
                data.insert(path, value.to_scalar());
            },
            sink,
        )
        .walk(root)?;
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::Surfer;
    use crate::{DiagnosticReason, SurferConfig, SurferError};
    use alloc::boxed::Box;
    use alloc::collections::BTreeMap;
    use alloc::string::{String, ToString};
    use alloc::sync::Arc;
    use alloc::vec::Vec;
    use dq_reflect::access::ResolveError;
    use dq_reflect::derive::Reflect;
    use dq_reflect::info::ReflectKind;
    use dq_reflect::ops::Scalar;

    #[derive(Reflect)]
    #[reflect(rename_all = "PascalCase")]
    struct Inner {
        small: f32,
        count: i32,
        big: i64,
        flag: bool,
        text: String,
    }

    #[derive(Reflect)]
    #[reflect(rename_all = "PascalCase")]
    struct Outer {
        alfa: f64,
        inner: Inner,
        boxed: Option<Box<Inner>>,
        shared: Arc<Inner>,
        zeta: BTreeMap<String, f64>,
    }

    fn inner() -> Inner {
        Inner {
            small: 0.5,
            count: 3,
            big: 1 << 40,
            flag: false,
            text: "true".to_string(),
        }
    }

    fn outer() -> Outer {
        Outer {
            alfa: 1.0,
            inner: inner(),
            boxed: None,
            shared: Arc::new(inner()),
            zeta: BTreeMap::from([("zeta1".to_string(), 1.0), ("zeta2".to_string(), 2.0)]),
        }
    }

    #[test]
    fn typed_getters() {
        let outer = outer();
        let surfer = Surfer::new();

        assert_eq!(surfer.get("Alfa", &outer), Ok(Scalar::Float64(1.0)));
        assert_eq!(surfer.get_float64("Inner.Small", &outer), Ok(0.5));
        assert_eq!(surfer.get_float64("Inner.Big", &outer), Ok((1_i64 << 40) as f64));
        assert_eq!(surfer.get_int64("Inner.Count", &outer), Ok(3));
        assert_eq!(surfer.get_string("Inner.Text", &outer), Ok("true"));
        assert_eq!(surfer.get_bool("Inner.Flag", &outer), Ok(false));
        assert_eq!(surfer.get_bool("Inner.Text", &outer), Ok(true));
        assert_eq!(surfer.get_float64("Zeta.zeta2", &outer), Ok(2.0));

        assert!(matches!(
            surfer.get_int64("Alfa", &outer),
            Err(SurferError::TypeMismatch {
                expected: ReflectKind::Int64,
                actual: ReflectKind::Float64,
                ..
            })
        ));
        assert!(matches!(
            surfer.get_string("Inner.Count", &outer),
            Err(SurferError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn resolution_errors_pass_through() {
        let outer = outer();
        let surfer = Surfer::new();

        let err = surfer.get("Inner", &outer).unwrap_err();
        assert_eq!(
            err,
            SurferError::Resolve(ResolveError::NotAScalar {
                path: "Inner".to_string(),
                kind: ReflectKind::Record,
            })
        );
        assert_eq!(err.path(), "Inner");

        assert!(matches!(
            surfer.get("Boxed.Count", &outer),
            Err(SurferError::Resolve(ResolveError::NilReference { .. }))
        ));
        assert!(matches!(
            surfer.get("Zeta.zeta9", &outer),
            Err(SurferError::Resolve(ResolveError::MapKeyNotFound { .. }))
        ));
    }

    #[test]
    fn structural_resolve() {
        let outer = outer();
        let inner = Surfer::new().resolve("Inner", &outer).unwrap();
        assert_eq!(inner.reflect_kind(), ReflectKind::Record);
    }

    #[test]
    fn setters_coerce() {
        let mut outer = outer();
        let surfer = Surfer::new();

        surfer.set_float64("Alfa", 2.0, &mut outer).unwrap();
        surfer.set_float64("Inner.Small", 0.25, &mut outer).unwrap();
        surfer.set_int64("Inner.Count", 7, &mut outer).unwrap();
        surfer.set("Inner.Big", 5_i32, &mut outer).unwrap();
        surfer.set_string("Inner.Flag", "TRUE", &mut outer).unwrap();
        surfer.set_string("Inner.Text", "t2", &mut outer).unwrap();
        surfer.set_string("Zeta.zeta1", "1.5", &mut outer).unwrap();

        assert_eq!(outer.alfa, 2.0);
        assert_eq!(outer.inner.small, 0.25);
        assert_eq!(outer.inner.count, 7);
        assert_eq!(outer.inner.big, 5);
        assert!(outer.inner.flag);
        assert_eq!(outer.inner.text, "t2");
        assert_eq!(outer.zeta["zeta1"], 1.5);

        assert!(matches!(
            surfer.set_bool("Inner.Text", true, &mut outer),
            Err(SurferError::TypeMismatch { .. })
        ));
        assert!(matches!(
            surfer.set_string("Alfa", "abc", &mut outer),
            Err(SurferError::ParseFloat { .. })
        ));
        assert_eq!(outer.alfa, 2.0);
    }

    #[test]
    fn shared_arc_is_not_settable() {
        let mut outer = outer();
        let surfer = Surfer::new();
        let other = Arc::clone(&outer.shared);

        assert_eq!(
            surfer.set_int64("Shared.Count", 1, &mut outer),
            Err(SurferError::Resolve(ResolveError::NotSettable {
                path: "Shared".to_string(),
            }))
        );

        drop(other);
        surfer.set_int64("Shared.Count", 1, &mut outer).unwrap();
        assert_eq!(outer.shared.count, 1);
    }

    #[test]
    fn bulk_round_trip() {
        let outer = outer();
        let surfer = Surfer::new();

        let mut skipped = Vec::new();
        let vars = surfer.vars_with(&outer, |d| skipped.push(d)).unwrap();
        let data = surfer.flat_data(&outer).unwrap();

        assert_eq!(vars.len(), data.len());
        assert_eq!(&vars[..2], ["Alfa", "Inner.Small"]);
        assert!(vars.iter().any(|path| path == "Shared.Text"));
        for path in &vars {
            assert_eq!(surfer.get(path, &outer).as_ref(), Ok(&data[path]));
        }

        assert_eq!(skipped.len(), 1);
        assert_eq!(skipped[0].path, "Boxed");
        assert_eq!(skipped[0].reason, DiagnosticReason::NilIndirection);
    }

    #[test]
    fn configured_separator() {
        let outer = outer();
        let surfer = Surfer::from_config(&SurferConfig {
            separator: "_".to_string(),
        });

        assert_eq!(surfer.separator(), "_");
        assert_eq!(surfer.get_int64("Inner_Count", &outer), Ok(3));
        assert!(surfer.vars(&outer).unwrap().iter().any(|path| path == "Zeta_zeta1"));
    }
}
