use alloc::string::String;
use core::num::{ParseFloatError, ParseIntError};

use dq_reflect::access::ResolveError;
use dq_reflect::info::ReflectKind;
use thiserror::Error;

/// An error returned by [`Surfer`](crate::Surfer) accessors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SurferError {
    /// The path could not be resolved.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// The value exists but has a kind the accessor cannot convert.
    #[error("`{path}` is a {actual}, expected {expected}")]
    TypeMismatch {
        path: String,
        expected: ReflectKind,
        actual: ReflectKind,
    },

    /// A string value was not a valid float.
    #[error("`{path}` cannot be parsed as a float: {source}")]
    ParseFloat {
        path: String,
        source: ParseFloatError,
    },

    /// A string value was not a valid integer.
    #[error("`{path}` cannot be parsed as an integer: {source}")]
    ParseInt { path: String, source: ParseIntError },

    /// An integer does not fit into the target field.
    #[error("{value} is out of range for the Int field `{path}`")]
    OutOfRange { path: String, value: i64 },
}

impl SurferError {
    /// Returns the path the error refers to.
    ///
    /// For resolution errors this is the consumed part of the path, see
    /// [`ResolveError::path`].
    pub fn path(&self) -> &str {
        match self {
            Self::Resolve(err) => err.path(),
            Self::TypeMismatch { path, .. }
            | Self::ParseFloat { path, .. }
            | Self::ParseInt { path, .. }
            | Self::OutOfRange { path, .. } => path,
        }
    }
}

/// An error returned by [`compare`](crate::compare).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareError {
    /// Both values have this kind, but only scalars can be compared.
    #[error("cannot compare values of kind {0}")]
    UnsupportedType(ReflectKind),
}
