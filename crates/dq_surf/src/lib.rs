//! Typed field access by path over [`dq_reflect`] values.
//!
//! - [`Surfer`]: get and set scalar fields by path, with conversions
//!   between numeric kinds and from strings.
//! - [`Surfer::vars`] / [`Surfer::flat_data`]: list or flatten every
//!   reachable scalar; skipped fields are reported as [`Diagnostic`]s.
//! - [`compare`]: exact equality of two reflected scalars.
//! - [`SurferConfig`]: the loadable settings of a `Surfer`.
//!
//! # Examples
//!
//! ```
//! use dq_reflect::derive::Reflect;
//! use dq_surf::{Surfer, SurferError};
//!
//! #[derive(Reflect)]
//! struct Sample {
//!     #[reflect(rename = "Alfa")]
//!     alfa: String,
//! }
//!
//! let mut sample = Sample { alfa: "3.5".into() };
//! let surfer = Surfer::new();
//!
//! assert_eq!(surfer.get_float64("Alfa", &sample).unwrap(), 3.5);
//!
//! surfer.set_string("Alfa", "abc", &mut sample).unwrap();
//! let err = surfer.get_float64("Alfa", &sample).unwrap_err();
//! assert!(matches!(err, SurferError::ParseFloat { .. }));
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod coerce;
mod compare;
mod config;
mod error;
mod surfer;
mod walk;

// -----------------------------------------------------------------------------
// Exports

pub use compare::compare;
pub use config::SurferConfig;
pub use error::{CompareError, SurferError};
pub use surfer::{FlatData, Surfer};
pub use walk::{Diagnostic, DiagnosticReason};
