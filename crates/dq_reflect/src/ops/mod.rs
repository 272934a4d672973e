//! Shape-specific operations on reflected values.
//!
//! - [`ReflectRef`] / [`ReflectMut`]: the borrowed view a value hands out for
//!   its [`ReflectKind`](crate::info::ReflectKind).
//! - [`Record`]: named fields, backed by a static [`RecordInfo`](crate::info::RecordInfo).
//! - [`Indirect`]: an optional reference (`Option<T>`, `Box<T>`, `Arc<T>`).
//! - [`Map`]: a single-level associative container.
//! - [`Scalar`] / [`ScalarRef`]: owned and borrowed terminal values.

// -----------------------------------------------------------------------------
// Modules

mod indirect_ops;
mod kind;
mod map_ops;
mod record_ops;
mod scalar;

// -----------------------------------------------------------------------------
// Exports

pub use indirect_ops::Indirect;
pub use kind::{ReflectMut, ReflectRef};
pub use map_ops::{Map, MapIter};
pub use record_ops::{Record, RecordFieldIter};
pub use scalar::{Scalar, ScalarRef};
