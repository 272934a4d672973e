//! Conversions between scalar kinds.
//!
//! Getters convert the stored value to the requested type; setters convert
//! the supplied value to the kind of the field. Both go through the
//! same rules:
//!
//! | target    | accepted                                                |
//! |-----------|---------------------------------------------------------|
//! | `Float64` | any numeric kind, or a string parsed as a float         |
//! | `Float32` | as `Float64`, then narrowed                             |
//! | `Int64`   | `Int`, `Int64`, or a string parsed as an integer        |
//! | `Int`     | as `Int64`, then range-checked                          |
//! | `String`  | `String` only                                           |
//! | `Bool`    | `Bool`, or a string equal to `"true"` ignoring case     |
//!
//! Integer strings follow the usual literal prefixes: `0x` (hex), `0o` or a
//! bare leading `0` (octal), and `0b` (binary), with an optional sign.

use alloc::format;
use alloc::string::{String, ToString};

use dq_reflect::info::ReflectKind;
use dq_reflect::ops::{Scalar, ScalarRef};

use crate::SurferError;

pub(crate) fn to_float64(path: &str, value: ScalarRef<'_>) -> Result<f64, SurferError> {
    match value {
        ScalarRef::Float64(v) => Ok(v),
        ScalarRef::Float32(v) => Ok(f64::from(v)),
        ScalarRef::Int64(v) => Ok(v as f64),
        ScalarRef::Int(v) => Ok(f64::from(v)),
        ScalarRef::String(text) => text.parse().map_err(|source| SurferError::ParseFloat {
            path: path.to_string(),
            source,
        }),
        ScalarRef::Bool(_) => Err(mismatch(path, ReflectKind::Float64, value)),
    }
}

pub(crate) fn to_int64(path: &str, value: ScalarRef<'_>) -> Result<i64, SurferError> {
    match value {
        ScalarRef::Int64(v) => Ok(v),
        ScalarRef::Int(v) => Ok(i64::from(v)),
        ScalarRef::String(text) => parse_int64(text).map_err(|source| SurferError::ParseInt {
            path: path.to_string(),
            source,
        }),
        _ => Err(mismatch(path, ReflectKind::Int64, value)),
    }
}

pub(crate) fn to_str<'a>(path: &str, value: ScalarRef<'a>) -> Result<&'a str, SurferError> {
    match value {
        ScalarRef::String(text) => Ok(text),
        _ => Err(mismatch(path, ReflectKind::String, value)),
    }
}

pub(crate) fn to_bool(path: &str, value: ScalarRef<'_>) -> Result<bool, SurferError> {
    match value {
        ScalarRef::Bool(v) => Ok(v),
        ScalarRef::String(text) => Ok(text.eq_ignore_ascii_case("true")),
        _ => Err(mismatch(path, ReflectKind::Bool, value)),
    }
}

/// Converts `value` into a scalar of kind `target`.
///
/// Values that already have the target kind are copied unchanged.
pub(crate) fn coerce(
    path: &str,
    value: ScalarRef<'_>,
    target: ReflectKind,
) -> Result<Scalar, SurferError> {
    if value.kind() == target {
        return Ok(value.to_scalar());
    }
    match target {
        ReflectKind::Float64 => to_float64(path, value).map(Scalar::Float64),
        ReflectKind::Float32 => to_float64(path, value).map(|v| Scalar::Float32(v as f32)),
        ReflectKind::Int64 => to_int64(path, value).map(Scalar::Int64),
        ReflectKind::Int => {
            let wide = to_int64(path, value)?;
            i32::try_from(wide)
                .map(Scalar::Int)
                .map_err(|_| SurferError::OutOfRange {
                    path: path.to_string(),
                    value: wide,
                })
        }
        ReflectKind::String => to_str(path, value).map(|text| Scalar::String(String::from(text))),
        ReflectKind::Bool => to_bool(path, value).map(Scalar::Bool),
        _ => Err(mismatch(path, target, value)),
    }
}

#[inline]
fn mismatch(path: &str, expected: ReflectKind, value: ScalarRef<'_>) -> SurferError {
    SurferError::TypeMismatch {
        path: path.to_string(),
        expected,
        actual: value.kind(),
    }
}

/// Parses a signed integer, choosing the radix from its prefix.
fn parse_int64(text: &str) -> Result<i64, core::num::ParseIntError> {
    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let (radix, digits) = if let Some(rest) = strip_radix_prefix(unsigned, 'x') {
        (16, rest)
    } else if let Some(rest) = strip_radix_prefix(unsigned, 'o') {
        (8, rest)
    } else if let Some(rest) = strip_radix_prefix(unsigned, 'b') {
        (2, rest)
    } else if unsigned.len() > 1 && unsigned.starts_with('0') {
        (8, &unsigned[1..])
    } else {
        (10, unsigned)
    };

    // Re-attach the sign so that `i64::MIN` parses and a second sign after
    // the prefix is rejected.
    let sign = if negative { '-' } else { '+' };
    i64::from_str_radix(&format!("{sign}{digits}"), radix)
}

fn strip_radix_prefix(text: &str, marker: char) -> Option<&str> {
    let rest = text.strip_prefix('0')?;
    rest.strip_prefix(marker)
        .or_else(|| rest.strip_prefix(marker.to_ascii_uppercase()))
}
