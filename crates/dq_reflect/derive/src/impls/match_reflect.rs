use proc_macro::TokenStream;
use quote::quote;
use syn::DeriveInput;

use crate::derive_data::ReflectRecord;

/// Provided for `#[derive(Reflect)]`.
pub(crate) fn match_reflect_impls(ast: DeriveInput) -> TokenStream {
    // Parse attributes and fields information.
    let record = match ReflectRecord::from_input(&ast) {
        Ok(val) => val,
        Err(err) => return err.into_compile_error().into(),
    };

    let typed_tokens = super::impl_trait_typed(record.meta());
    let record_tokens = super::impl_trait_record(&record);
    let reflect_tokens = super::impl_trait_reflect(record.meta());

    TokenStream::from(quote! {
        const _: () = {
            #typed_tokens

            #record_tokens

            #reflect_tokens
        };
    })
}
