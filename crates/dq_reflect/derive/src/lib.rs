//! See following macros:
//!
//! - [`Reflect`](derive_reflect)
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Record Reflection Derivation
///
/// `#[derive(Reflect)]` implements the following traits for a struct with
/// named fields:
///
/// - `Typed` (declared kind `Record`)
/// - `Record`, backed by a `RecordInfo` built once per type
/// - `Reflect`
///
/// Tuple structs, unit structs, enums and unions are rejected.
///
/// ## Field Names
///
/// A field is reflected under its Rust identifier unless renamed. Only names
/// starting with an upper-case letter can be reached by a path, so the usual
/// way to expose snake_case fields is a container-level rule:
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(rename_all = "PascalCase")]
/// struct Level2 {
///     ypsilon: i32,    // "Ypsilon"
///     omega: String,   // "Omega"
///     gamma_ray: f64,  // "GammaRay"
/// }
/// ```
///
/// `rename` on a field wins over `rename_all`:
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(rename_all = "PascalCase")]
/// struct Level1 {
///     alfa: f64,                 // "Alfa"
///     #[reflect(rename = "beta")]
///     beta: String,              // "beta", present but not accessible
/// }
/// ```
///
/// Two fields must not end up with the same reflected name.
///
/// ## Ignored Fields
///
/// `#[reflect(ignore)]` removes a field from the descriptor: it cannot be
/// resolved, written or enumerated, and its type does not need to implement
/// `Reflect`.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// struct Cached {
///     #[reflect(rename = "Value")]
///     value: f64,
///     #[reflect(ignore)]
///     scratch: std::cell::Cell<u8>,
/// }
/// ```
///
/// ## Generics
///
/// Every type parameter gets a `Typed` bound (which implies `Reflect`).
/// Lifetime parameters are not supported, reflected values are `'static`.
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);
    impls::match_reflect_impls(ast)
}
