//! Provide some utilities for implementing reflection traits.
//!
//! - [`NonGenericRecordInfoCell`]: Used to implement [`Record`] for non-generic records.
//! - [`GenericRecordInfoCell`]: Used to implement [`Record`] for generic records.
//! - `xxx_debug`: Used to implement [`Reflect::reflect_debug`] (e.g. [`record_debug`]).
//!
//! ## Implemented Menu
//!
//! - scalar: `i32`, `i64`, `f32`, `f64`, `bool`, `String`
//! - indirect: `Option<T>`, `Box<T>`, `Arc<T>`
//! - map: `BTreeMap<K, V>`, `std::collections::HashMap<K, V, S>`,
//!   `hashbrown::HashMap<K, V, S>`
//! - unsupported:
//!     - `u8`-`u128`, `usize`, `i8`, `i16`, `i128`, `isize`, `char`, `()`
//!     - `Vec<T>`, `[T; N]`, `BTreeSet<T>`, `HashSet<T, S>`
//!
//! Records are implemented by [`#[derive(Reflect)]`](crate::derive::Reflect).
//!
//! [`Record`]: crate::ops::Record
//! [`Reflect::reflect_debug`]: crate::Reflect::reflect_debug

// -----------------------------------------------------------------------------
// Modules

mod cell;

mod indirect;
mod map;
mod scalar;
mod unsupported;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericRecordInfoCell, NonGenericRecordInfoCell};
pub use map::map_debug;

use core::fmt;

use crate::ops::Record;

/// Formats a record as `TypePath { Name: value, .. }` using reflected names.
///
/// ```
/// use dq_reflect::{Reflect, derive::Reflect};
///
/// #[derive(Reflect)]
/// struct Level2 {
///     #[reflect(rename = "Ypsilon")]
///     ypsilon: i32,
/// }
///
/// let value: &dyn Reflect = &Level2 { ypsilon: 10 };
/// assert!(format!("{value:?}").ends_with("Level2 { Ypsilon: 10 }"));
/// ```
pub fn record_debug(record: &dyn Record, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_struct(record.reflect_type_path());
    for (name, value) in record.iter_fields() {
        debug.field(name, &value);
    }
    debug.finish()
}
