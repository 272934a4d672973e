//! Bulk traversal behind [`Surfer::vars`](crate::Surfer::vars) and
//! [`Surfer::flat_data`](crate::Surfer::flat_data).
//!
//! Every reachable scalar is reported with the path that resolves to it.
//! Parts of the tree that have no such path are skipped and reported as
//! [`Diagnostic`]s instead of failing the whole traversal; only maps that
//! cannot be flattened abort it.

use alloc::string::{String, ToString};
use core::fmt;

use dq_reflect::Reflect;
use dq_reflect::access::{ResolveError, Resolver};
use dq_reflect::info::ReflectKind;
use dq_reflect::ops::{Map, Record, ReflectRef, ScalarRef};

use crate::SurferError;

// -----------------------------------------------------------------------------
// Diagnostic

/// Why a part of the tree was left out of a bulk traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticReason {
    /// The field name does not start with an upper-case letter.
    Inaccessible,
    /// An indirection on the way is empty.
    NilIndirection,
    /// The value has a shape that has no scalar paths, e.g. a list or an
    /// indirection to a scalar.
    UnsupportedKind(ReflectKind),
    /// The joined path would not resolve back to the field: its name contains
    /// the separator, or the separator is empty and the field is nested.
    Unaddressable,
}

/// A skipped field, reported through the sink of
/// [`Surfer::vars_with`](crate::Surfer::vars_with) and
/// [`Surfer::flat_data_with`](crate::Surfer::flat_data_with).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Diagnostic {
    /// Path of the skipped field.
    pub path: String,
    pub reason: DiagnosticReason,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            DiagnosticReason::Inaccessible => {
                write!(f, "skipped inaccessible field `{}`", self.path)
            }
            DiagnosticReason::NilIndirection => write!(f, "skipped nil field `{}`", self.path),
            DiagnosticReason::UnsupportedKind(kind) => {
                write!(f, "skipped field `{}` of unsupported kind {kind}", self.path)
            }
            DiagnosticReason::Unaddressable => {
                write!(f, "skipped field `{}`: the path does not resolve back to it", self.path)
            }
        }
    }
}

// -----------------------------------------------------------------------------
// Walker

pub(crate) struct Walker<'s, E, D> {
    resolver: &'s Resolver,
    emit: E,
    sink: D,
}

impl<'s, E, D> Walker<'s, E, D>
where
    E: FnMut(String, ScalarRef<'_>),
    D: FnMut(Diagnostic),
{
    #[inline]
    pub(crate) fn new(resolver: &'s Resolver, emit: E, sink: D) -> Self {
        Self {
            resolver,
            emit,
            sink,
        }
    }

    /// Walks `root`, which must be a record or a map, possibly behind
    /// indirections.
    pub(crate) fn walk(mut self, root: &dyn Reflect) -> Result<(), SurferError> {
        let mut view = root.reflect_ref();
        while let ReflectRef::Indirect(indirect) = view {
            let Some(target) = indirect.target() else {
                return Err(ResolveError::NilReference {
                    path: String::new(),
                }
                .into());
            };
            view = target.reflect_ref();
        }

        match view {
            ReflectRef::Record(record) => self.record("", 0, record),
            ReflectRef::Map(map) => self.map("", 0, map),
            other => Err(ResolveError::UnsupportedRootShape {
                path: String::new(),
                kind: other.kind(),
            }
            .into()),
        }
    }

    /// Visits the fields of a record whose own path has `depth` segments.
    fn record(
        &mut self,
        prefix: &str,
        depth: usize,
        record: &dyn Record,
    ) -> Result<(), SurferError> {
        for (index, field) in record.record_info().iter().enumerate() {
            let path = self.resolver.join(prefix, field.name());
            if !field.is_accessible() {
                self.skip(path, DiagnosticReason::Inaccessible);
                continue;
            }
            let parsed = self.resolver.parse(&path);
            if parsed.len() != depth + 1 || parsed.rest(depth) != field.name() {
                self.skip(path, DiagnosticReason::Unaddressable);
                continue;
            }
            if let Some(value) = record.field_at(index) {
                self.value(path, depth + 1, value)?;
            }
        }
        Ok(())
    }

    fn value(
        &mut self,
        path: String,
        depth: usize,
        value: &dyn Reflect,
    ) -> Result<(), SurferError> {
        match value.reflect_ref() {
            ReflectRef::Scalar(scalar) => {
                (self.emit)(path, scalar);
                Ok(())
            }
            ReflectRef::Record(record) => self.record(&path, depth, record),
            ReflectRef::Map(map) => self.map(&path, depth, map),
            ReflectRef::Indirect(indirect) => {
                let mut view = ReflectRef::Indirect(indirect);
                while let ReflectRef::Indirect(indirect) = view {
                    let Some(target) = indirect.target() else {
                        self.skip(path, DiagnosticReason::NilIndirection);
                        return Ok(());
                    };
                    view = target.reflect_ref();
                }
                match view {
                    ReflectRef::Record(record) => self.record(&path, depth, record),
                    ReflectRef::Map(map) => self.map(&path, depth, map),
                    // A scalar behind a reference is not a terminal value.
                    other => {
                        self.skip(path, DiagnosticReason::UnsupportedKind(other.kind()));
                        Ok(())
                    }
                }
            }
            ReflectRef::Unsupported(_) => {
                self.skip(path, DiagnosticReason::UnsupportedKind(ReflectKind::Unsupported));
                Ok(())
            }
        }
    }

    /// Visits the entries of a map whose own path has `depth` segments.
    /// Everything after the map's path is the key.
    fn map(&mut self, path: &str, depth: usize, map: &dyn Map) -> Result<(), SurferError> {
        let key_kind = map.key_kind();
        if key_kind != ReflectKind::String {
            return Err(ResolveError::UnsupportedMapKey {
                path: path.to_string(),
                kind: key_kind,
            }
            .into());
        }
        if !map.has_scalar_values() {
            return Err(ResolveError::UnsupportedMapValue {
                path: path.to_string(),
                kind: map.value_kind(),
            }
            .into());
        }

        for (key, value) in map.iter() {
            let (ReflectRef::Scalar(ScalarRef::String(key)), ReflectRef::Scalar(value)) =
                (key.reflect_ref(), value.reflect_ref())
            else {
                continue;
            };
            let entry = self.resolver.join(path, key);
            let parsed = self.resolver.parse(&entry);
            if parsed.len() <= depth || parsed.rest(depth) != key {
                self.skip(entry, DiagnosticReason::Unaddressable);
                continue;
            }
            (self.emit)(entry, value);
        }
        Ok(())
    }

    fn skip(&mut self, path: String, reason: DiagnosticReason) {
        let diagnostic = Diagnostic { path, reason };
        log::debug!("{diagnostic}");
        (self.sink)(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::{Diagnostic, DiagnosticReason, Walker};
    use crate::SurferError;
    use alloc::boxed::Box;
    use alloc::collections::BTreeMap;
    use alloc::string::{String, ToString};
    use alloc::vec;
    use alloc::vec::Vec;
    use dq_reflect::Reflect;
    use dq_reflect::access::{ResolveError, Resolver};
    use dq_reflect::derive::Reflect;
    use dq_reflect::info::ReflectKind;
    use dq_reflect::ops::Scalar;

    #[derive(Reflect)]
    #[reflect(rename_all = "PascalCase")]
    struct Inner {
        x: i32,
    }

    #[derive(Reflect)]
    #[reflect(rename_all = "PascalCase")]
    struct Outer {
        alfa: f64,
        #[reflect(rename = "hidden")]
        hidden: f64,
        inner: Inner,
        boxed: Option<Box<Inner>>,
        empty: Option<Box<Inner>>,
        maybe: Option<f64>,
        tags: Vec<i32>,
        zeta: BTreeMap<String, String>,
    }

    fn outer() -> Outer {
        Outer {
            alfa: 1.0,
            hidden: 2.0,
            inner: Inner { x: 3 },
            boxed: Some(Box::new(Inner { x: 4 })),
            empty: None,
            maybe: Some(5.0),
            tags: vec![6],
            zeta: BTreeMap::from([("k".to_string(), "v".to_string())]),
        }
    }

    fn collect(
        root: &dyn Reflect,
        resolver: &Resolver,
    ) -> (Result<(), SurferError>, Vec<(String, Scalar)>, Vec<Diagnostic>) {
        let mut values = Vec::new();
        let mut skipped = Vec::new();
        let result = Walker::new(
            resolver,
            |path, value| values.push((path, value.to_scalar())),
            |diagnostic| skipped.push(diagnostic),
        )
        .walk(root);
        (result, values, skipped)
    }

    #[test]
    fn visits_in_declaration_order() {
        let (result, values, skipped) = collect(&outer(), &Resolver::default());
        result.unwrap();

        assert_eq!(
            values,
            [
                ("Alfa".to_string(), Scalar::Float64(1.0)),
                ("Inner.X".to_string(), Scalar::Int(3)),
                ("Boxed.X".to_string(), Scalar::Int(4)),
                ("Zeta.k".to_string(), Scalar::from("v")),
            ]
        );

        let reasons: Vec<_> = skipped.iter().map(|d| (d.path.as_str(), d.reason)).collect();
        assert_eq!(
            reasons,
            [
                ("hidden", DiagnosticReason::Inaccessible),
                ("Empty", DiagnosticReason::NilIndirection),
                ("Maybe", DiagnosticReason::UnsupportedKind(ReflectKind::Float64)),
                ("Tags", DiagnosticReason::UnsupportedKind(ReflectKind::Unsupported)),
            ]
        );
    }

    #[test]
    fn custom_separator() {
        let (result, values, _) = collect(&outer(), &Resolver::new("_"));
        result.unwrap();
        assert!(values.iter().any(|(path, _)| path == "Inner_X"));
        assert!(values.iter().any(|(path, _)| path == "Zeta_k"));
    }

    #[test]
    fn root_shapes() {
        let map = BTreeMap::from([("a.b".to_string(), 1_i64)]);
        let (result, values, _) = collect(&map, &Resolver::default());
        result.unwrap();
        assert_eq!(values, [("a.b".to_string(), Scalar::Int64(1))]);

        let nil: Option<Box<Outer>> = None;
        let (result, _, _) = collect(&nil, &Resolver::default());
        assert!(matches!(
            result,
            Err(SurferError::Resolve(ResolveError::NilReference { .. }))
        ));

        let (result, _, _) = collect(&1.0_f64, &Resolver::default());
        assert!(matches!(
            result,
            Err(SurferError::Resolve(ResolveError::UnsupportedRootShape {
                kind: ReflectKind::Float64,
                ..
            }))
        ));
    }

    #[test]
    fn unsupported_maps_abort() {
        #[derive(Reflect)]
        struct Nested {
            #[reflect(rename = "Deep")]
            deep: BTreeMap<String, BTreeMap<String, f64>>,
        }
        #[derive(Reflect)]
        struct Keyed {
            #[reflect(rename = "ById")]
            by_id: BTreeMap<i32, f64>,
        }

        let nested = Nested {
            deep: BTreeMap::new(),
        };
        let (result, _, _) = collect(&nested, &Resolver::default());
        assert_eq!(
            result,
            Err(SurferError::Resolve(ResolveError::UnsupportedMapValue {
                path: "Deep".to_string(),
                kind: ReflectKind::Map,
            }))
        );

        let keyed = Keyed {
            by_id: BTreeMap::new(),
        };
        let (result, _, _) = collect(&keyed, &Resolver::default());
        assert_eq!(
            result,
            Err(SurferError::Resolve(ResolveError::UnsupportedMapKey {
                path: "ById".to_string(),
                kind: ReflectKind::Int,
            }))
        );
    }

    #[test]
    fn empty_separator_keeps_top_level_only() {
        let (result, values, skipped) = collect(&outer(), &Resolver::new(""));
        result.unwrap();

        assert_eq!(values, [("Alfa".to_string(), Scalar::Float64(1.0))]);
        let unaddressable: Vec<_> = skipped
            .iter()
            .filter(|d| d.reason == DiagnosticReason::Unaddressable)
            .map(|d| d.path.as_str())
            .collect();
        assert_eq!(unaddressable, ["InnerX", "BoxedX", "Zetak"]);
    }

    #[test]
    fn names_containing_separator_are_skipped() {
        #[derive(Reflect)]
        struct Renamed {
            #[reflect(rename = "A_B")]
            a_b: f64,
            #[reflect(rename = "Inner")]
            inner: Inner,
            #[reflect(rename = "Zeta")]
            zeta: BTreeMap<String, i32>,
        }

        let root = Renamed {
            a_b: 1.0,
            inner: Inner { x: 2 },
            zeta: BTreeMap::from([("k_1".to_string(), 3)]),
        };
        let (result, values, skipped) = collect(&root, &Resolver::new("_"));
        result.unwrap();

        // Map keys are the rest of the path, so they may hold the separator.
        assert_eq!(
            values,
            [
                ("Inner_X".to_string(), Scalar::Int(2)),
                ("Zeta_k_1".to_string(), Scalar::Int(3)),
            ]
        );
        assert_eq!(
            skipped,
            [Diagnostic {
                path: "A_B".to_string(),
                reason: DiagnosticReason::Unaddressable,
            }]
        );
    }

    #[test]
    fn multi_char_separator_boundaries() {
        #[derive(Reflect)]
        struct Leaf {
            #[reflect(rename = "X")]
            x: i32,
            #[reflect(rename = "Y:")]
            y: i32,
        }
        #[derive(Reflect)]
        struct Tree {
            #[reflect(rename = "A:")]
            a: Leaf,
            #[reflect(rename = "B")]
            b: Leaf,
        }

        let leaf = || Leaf { x: 1, y: 2 };
        let root = Tree { a: leaf(), b: leaf() };
        let (result, values, skipped) = collect(&root, &Resolver::new("::"));
        result.unwrap();

        let paths: Vec<_> = values.iter().map(|(path, _)| path.as_str()).collect();
        assert_eq!(paths, ["B::X", "B::Y:"]);
        let skipped: Vec<_> = skipped.iter().map(|d| (d.path.as_str(), d.reason)).collect();
        assert_eq!(
            skipped,
            [
                ("A:::X", DiagnosticReason::Unaddressable),
                ("A:::Y:", DiagnosticReason::Unaddressable),
            ]
        );
    }

    #[test]
    fn scalar_enum_map_values() {
        #[derive(Reflect)]
        struct Loose {
            #[reflect(rename = "Extra")]
            extra: BTreeMap<String, Scalar>,
        }

        let root = Loose {
            extra: BTreeMap::from([
                ("a".to_string(), Scalar::Int(1)),
                ("b".to_string(), Scalar::from("x")),
            ]),
        };
        let (result, values, _) = collect(&root, &Resolver::default());
        result.unwrap();
        assert_eq!(
            values,
            [
                ("Extra.a".to_string(), Scalar::Int(1)),
                ("Extra.b".to_string(), Scalar::from("x")),
            ]
        );
    }

    #[test]
    fn diagnostic_display() {
        let diagnostic = Diagnostic {
            path: "Tags".to_string(),
            reason: DiagnosticReason::UnsupportedKind(ReflectKind::Unsupported),
        };
        assert_eq!(
            diagnostic.to_string(),
            "skipped field `Tags` of unsupported kind Unsupported"
        );
    }
}
