//! Static shape information.
//!
//! ## Menu
//!
//! - [`ReflectKind`]: the closed set of shapes a value can have, split into
//!   terminal scalars (`Int`, `Int64`, `Float32`, `Float64`, `String`, `Bool`),
//!   traversable containers (`Record`, `Indirect`, `Map`) and `Unsupported`.
//! - [`classify`]: the type classifier, reports the [`ReflectKind`] of a value.
//! - [`Typed`]: declared kind of a type, known without a value.
//! - [`RecordInfo`]: the capability descriptor of a record type, built once per
//!   type by `#[derive(Reflect)]`.
//!     - [`NamedField`]: name, declared kind and type path of one field.
//! - [`is_accessible_name`]: the visibility rule shared by path resolution and
//!   bulk traversal.

// -----------------------------------------------------------------------------
// Modules

mod field_info;
mod kind;
mod record_info;
mod typed;

// -----------------------------------------------------------------------------
// Exports

pub use field_info::{NamedField, is_accessible_name};
pub use kind::{ReflectKind, classify};
pub use record_info::RecordInfo;
pub use typed::Typed;
