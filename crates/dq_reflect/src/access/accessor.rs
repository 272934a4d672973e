//! Provide single-step resolution helpers.
//!
//! Each helper performs one step of the walk (check a segment, unwrap
//! indirections, look up a map entry, finish on a field) and reports the
//! failure with the path consumed so far.

use alloc::string::ToString;

use crate::Reflect;
use crate::access::{FieldPath, ResolveError, ResolveMode};
use crate::info::{ReflectKind, is_accessible_name};
use crate::ops::{Map, ReflectMut, ReflectRef};

/// Returns the segment at `index` if it passes the visibility rule.
pub(super) fn check_segment<'a>(
    path: &FieldPath<'a>,
    index: usize,
) -> Result<&'a str, ResolveError> {
    let segment = path.segment(index).unwrap_or_default();
    if is_accessible_name(segment) {
        Ok(segment)
    } else {
        Err(ResolveError::InvalidFieldName {
            path: path.prefix(index).to_string(),
            segment: segment.to_string(),
        })
    }
}

/// Unwraps any chain of indirections and returns the view of the target.
pub(super) fn deref<'r>(
    value: &'r dyn Reflect,
    path: &FieldPath<'_>,
    index: usize,
) -> Result<ReflectRef<'r>, ResolveError> {
    let mut view = value.reflect_ref();
    while let ReflectRef::Indirect(indirect) = view {
        let Some(target) = indirect.target() else {
            return Err(ResolveError::NilReference {
                path: path.prefix(index).to_string(),
            });
        };
        view = target.reflect_ref();
    }
    Ok(view)
}

/// Unwraps any chain of indirections and returns the mutable view of the
/// target.
pub(super) fn deref_mut<'r>(
    value: &'r mut dyn Reflect,
    path: &FieldPath<'_>,
    index: usize,
) -> Result<ReflectMut<'r>, ResolveError> {
    let mut view = value.reflect_mut();
    loop {
        view = match view {
            ReflectMut::Indirect(indirect) => {
                if !indirect.is_present() {
                    return Err(ResolveError::NilReference {
                        path: path.prefix(index).to_string(),
                    });
                }
                match indirect.target_mut() {
                    Some(target) => target.reflect_mut(),
                    None => {
                        return Err(ResolveError::NotSettable {
                            path: path.prefix(index).to_string(),
                        });
                    }
                }
            }
            other => return Ok(other),
        };
    }
}

fn check_map_key(map: &dyn Map, path: &FieldPath<'_>) -> Result<(), ResolveError> {
    match map.key_kind() {
        ReflectKind::String => Ok(()),
        kind => Err(ResolveError::UnsupportedMapKey {
            path: path.as_str().to_string(),
            kind,
        }),
    }
}

fn check_map_value(
    value: &dyn Reflect,
    path: &FieldPath<'_>,
    mode: ResolveMode,
) -> Result<(), ResolveError> {
    let kind = value.reflect_kind();
    if mode == ResolveMode::Scalar && !kind.is_scalar() {
        return Err(ResolveError::NotAScalar {
            path: path.as_str().to_string(),
            kind,
        });
    }
    Ok(())
}

/// Looks up the rest of the path, from segment `index` on, as one flat key.
pub(super) fn lookup_map<'r>(
    map: &'r dyn Map,
    path: &FieldPath<'_>,
    index: usize,
    mode: ResolveMode,
) -> Result<&'r dyn Reflect, ResolveError> {
    check_map_key(map, path)?;
    let key = path.rest(index);
    let value = map
        .get_str(key)
        .ok_or_else(|| ResolveError::MapKeyNotFound {
            path: path.as_str().to_string(),
            key: key.to_string(),
        })?;
    check_map_value(value, path, mode)?;
    Ok(value)
}

/// Mutable counterpart of [`lookup_map`].
pub(super) fn lookup_map_mut<'r>(
    map: &'r mut dyn Map,
    path: &FieldPath<'_>,
    index: usize,
    mode: ResolveMode,
) -> Result<&'r mut dyn Reflect, ResolveError> {
    check_map_key(map, path)?;
    let key = path.rest(index);
    let value = map
        .get_str_mut(key)
        .ok_or_else(|| ResolveError::MapKeyNotFound {
            path: path.as_str().to_string(),
            key: key.to_string(),
        })?;
    check_map_value(value, path, mode)?;
    Ok(value)
}

/// Checks the field reached by the last segment against `mode`.
pub(super) fn finish(
    field: &dyn Reflect,
    path: &FieldPath<'_>,
    index: usize,
    mode: ResolveMode,
) -> Result<(), ResolveError> {
    let kind = field.reflect_kind();
    if mode == ResolveMode::Scalar && !kind.is_scalar() {
        return Err(ResolveError::NotAScalar {
            path: path.prefix(index).to_string(),
            kind,
        });
    }
    Ok(())
}
