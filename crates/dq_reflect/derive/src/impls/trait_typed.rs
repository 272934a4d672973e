use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectMeta;

/// Generate implementation code for `Typed`.
pub(crate) fn impl_trait_typed(meta: &ReflectMeta) -> TokenStream {
    let dq_reflect_path = meta.dq_reflect_path();
    let typed_ = crate::path::typed_(dq_reflect_path);
    let reflect_kind_ = crate::path::reflect_kind_(dq_reflect_path);

    let ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics();

    quote! {
        impl #impl_generics #typed_ for #ident #ty_generics #where_clause {
            const KIND: #reflect_kind_ = #reflect_kind_::Record;
        }
    }
}
