//! Provide path-based access to reflected records.
//!
//! A path is a list of field names joined by a separator (`.` by default),
//! e.g. `"Gamma.Ypsilon"`. Resolution walks the root one segment at a time:
//!
//! 1. Indirections (`Option`, `Box`, `Arc`) are unwrapped; an empty one fails
//!    with [`ResolveError::NilReference`].
//! 2. The segment must pass the visibility rule
//!    ([`is_accessible_name`](crate::info::is_accessible_name)).
//! 3. The value must be a record that has a field of that name.
//! 4. On the last segment the field is returned; in [`ResolveMode::Scalar`] it
//!    must be a terminal scalar.
//! 5. Otherwise the field must be a record, an indirection or a map. A map
//!    consumes the **entire rest of the path** as one key: maps are exactly
//!    one level deep.
//!
//! A map root skips straight to the key lookup with the whole path.
//!
//! There are two complementary APIs:
//!
//! - [`FieldPath`]: a parsed path, reusable against many roots.
//! - [`Resolver`]: holds a separator and parses the text on each call.
//!
//! # Examples
//!
//! ```
//! use std::collections::HashMap;
//! use dq_reflect::{derive::Reflect, access::{Resolver, ResolveError}, ops::ScalarRef};
//!
//! #[derive(Reflect)]
//! #[reflect(rename_all = "PascalCase")]
//! struct Level2 {
//!     ypsilon: i32,
//!     omega: String,
//! }
//!
//! #[derive(Reflect)]
//! #[reflect(rename_all = "PascalCase")]
//! struct Level1 {
//!     alfa: f64,
//!     gamma: Option<Box<Level2>>,
//!     zeta: HashMap<String, f64>,
//! }
//!
//! let root = Level1 {
//!     alfa: 1.0,
//!     gamma: Some(Box::new(Level2 { ypsilon: 10, omega: "t2".into() })),
//!     zeta: HashMap::from([("zeta1".into(), 1.0)]),
//! };
//!
//! let resolver = Resolver::default();
//! assert_eq!(resolver.resolve_scalar("Gamma.Omega", &root), Ok(ScalarRef::String("t2")));
//! assert_eq!(resolver.resolve_scalar("Zeta.zeta1", &root), Ok(ScalarRef::Float64(1.0)));
//! assert!(matches!(
//!     resolver.resolve_scalar("Gamma", &root),
//!     Err(ResolveError::NotAScalar { .. }),
//! ));
//! ```

// -----------------------------------------------------------------------------
// Modules

mod accessor;
mod error;
mod path;
mod path_access;

// -----------------------------------------------------------------------------
// Exports

pub use error::ResolveError;
pub use path::FieldPath;
pub use path_access::{ResolveMode, Resolver};
