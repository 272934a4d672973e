use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectMeta;

/// Generate implementation code for `Reflect` trait.
pub(crate) fn impl_trait_reflect(meta: &ReflectMeta) -> TokenStream {
    let dq_reflect_path = meta.dq_reflect_path();

    let reflect_ = crate::path::reflect_(dq_reflect_path);
    let box_ = crate::path::box_(dq_reflect_path);
    let reflect_kind_ = crate::path::reflect_kind_(dq_reflect_path);
    let reflect_ref_ = crate::path::reflect_ref_(dq_reflect_path);
    let reflect_mut_ = crate::path::reflect_mut_(dq_reflect_path);
    let record_debug_ = crate::path::record_debug_(dq_reflect_path);

    let ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics();

    quote! {
        impl #impl_generics #reflect_ for #ident #ty_generics #where_clause {
            fn set(
                &mut self,
                value: #box_<dyn #reflect_>,
            ) -> ::core::result::Result<(), #box_<dyn #reflect_>> {
                *self = value.take::<Self>()?;
                ::core::result::Result::Ok(())
            }

            #[inline]
            fn reflect_kind(&self) -> #reflect_kind_ {
                #reflect_kind_::Record
            }

            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::Record(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> #reflect_mut_<'_> {
                #reflect_mut_::Record(self)
            }

            fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                #record_debug_(self, f)
            }
        }
    }
}
