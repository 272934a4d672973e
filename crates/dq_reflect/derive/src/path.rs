//! This independent module is used to provide the required path.
//! So as to minimize changes when the `dq_reflect` structure is modified.
//!
//! The only special feature is the path of dq_reflect itself,
//! See [`dq_reflect`] function doc.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `dq_reflect` crate.
///
/// 1. For crates that depend on `dq_reflect`, `::dq_reflect` is returned here.
/// 2. For crates that depend on `dataq`, `::dataq::reflect` is returned here.
/// 3. For other situations, `::dq_reflect` is returned here, but this may be incorrect.
///
/// Reading the manifest is not free, so the path is obtained once per derive
/// and passed around.
pub(crate) fn dq_reflect() -> syn::Path {
    dq_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("dq_reflect"))
}

// -----------------------------------------------------------------------------
// Items

#[inline(always)]
pub(crate) fn box_(dq_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #dq_reflect_path::__macro_exports::alloc_utils::Box
    }
}

#[inline(always)]
pub(crate) fn reflect_(dq_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #dq_reflect_path::Reflect
    }
}

#[inline(always)]
pub(crate) fn typed_(dq_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #dq_reflect_path::info::Typed
    }
}

#[inline(always)]
pub(crate) fn reflect_kind_(dq_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #dq_reflect_path::info::ReflectKind
    }
}

#[inline(always)]
pub(crate) fn record_info_(dq_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #dq_reflect_path::info::RecordInfo
    }
}

#[inline(always)]
pub(crate) fn named_field_(dq_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #dq_reflect_path::info::NamedField
    }
}

#[inline(always)]
pub(crate) fn record_(dq_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #dq_reflect_path::ops::Record
    }
}

#[inline(always)]
pub(crate) fn record_field_iter_(dq_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #dq_reflect_path::ops::RecordFieldIter
    }
}

#[inline(always)]
pub(crate) fn reflect_ref_(dq_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #dq_reflect_path::ops::ReflectRef
    }
}

#[inline(always)]
pub(crate) fn reflect_mut_(dq_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #dq_reflect_path::ops::ReflectMut
    }
}

#[inline(always)]
pub(crate) fn non_generic_record_info_cell_(dq_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #dq_reflect_path::impls::NonGenericRecordInfoCell
    }
}

#[inline(always)]
pub(crate) fn generic_record_info_cell_(dq_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #dq_reflect_path::impls::GenericRecordInfoCell
    }
}

#[inline(always)]
pub(crate) fn record_debug_(dq_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #dq_reflect_path::impls::record_debug
    }
}
