// -----------------------------------------------------------------------------
// Modules

mod match_reflect;

mod trait_record;
mod trait_reflect;
mod trait_typed;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use match_reflect::match_reflect_impls;

use trait_record::impl_trait_record;
use trait_reflect::impl_trait_reflect;
use trait_typed::impl_trait_typed;

#[inline(always)]
pub(crate) fn empty() -> proc_macro2::TokenStream {
    proc_macro2::TokenStream::new()
}
