use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectRecord;

/// Generate `Record` trait implementation tokens.
///
/// The descriptor is built on first use and cached in a static cell; generic
/// records use the `TypeId`-keyed cell since the `static` is shared by every
/// instantiation.
pub(crate) fn impl_trait_record(info: &ReflectRecord) -> TokenStream {
    let meta = info.meta();
    let dq_reflect_path = meta.dq_reflect_path();

    let reflect_ = crate::path::reflect_(dq_reflect_path);
    let record_ = crate::path::record_(dq_reflect_path);
    let record_info_ = crate::path::record_info_(dq_reflect_path);
    let named_field_ = crate::path::named_field_(dq_reflect_path);
    let record_field_iter_ = crate::path::record_field_iter_(dq_reflect_path);

    let fields = info.fields();
    let names: Vec<&str> = fields.iter().map(|field| field.name.as_str()).collect();
    let members: Vec<_> = fields.iter().map(|field| field.ident).collect();
    let types: Vec<_> = fields.iter().map(|field| field.ty).collect();
    let indices: Vec<_> = fields.iter().map(|field| &field.index).collect();
    let field_len = fields.len();

    let info_tokens = quote! {
        #record_info_::new::<Self>(&[
            #( #named_field_::new::<#types>(#names), )*
        ])
    };

    let cell_tokens = if meta.impl_with_generic() {
        let info_cell = crate::path::generic_record_info_cell_(dq_reflect_path);
        quote! {
            static CELL: #info_cell = #info_cell::new();
            CELL.get_or_insert::<Self>(|| #info_tokens)
        }
    } else {
        let info_cell = crate::path::non_generic_record_info_cell_(dq_reflect_path);
        quote! {
            static CELL: #info_cell = #info_cell::new();
            CELL.get_or_init(|| #info_tokens)
        }
    };

    let ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics();

    quote! {
        impl #impl_generics #record_ for #ident #ty_generics #where_clause {
            fn record_info(&self) -> &'static #record_info_ {
                #cell_tokens
            }

            fn field(&self, name: &str) -> ::core::option::Option<&dyn #reflect_> {
                match name {
                    #( #names => ::core::option::Option::Some(&self.#members as &dyn #reflect_), )*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_mut(&mut self, name: &str) -> ::core::option::Option<&mut dyn #reflect_> {
                match name {
                    #( #names => ::core::option::Option::Some(
                        &mut self.#members as &mut dyn #reflect_
                    ), )*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_at(&self, index: usize) -> ::core::option::Option<&dyn #reflect_> {
                match index {
                    #( #indices => ::core::option::Option::Some(
                        &self.#members as &dyn #reflect_
                    ), )*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_at_mut(
                &mut self,
                index: usize,
            ) -> ::core::option::Option<&mut dyn #reflect_> {
                match index {
                    #( #indices => ::core::option::Option::Some(
                        &mut self.#members as &mut dyn #reflect_
                    ), )*
                    _ => ::core::option::Option::None,
                }
            }

            fn name_at(&self, index: usize) -> ::core::option::Option<&'static str> {
                match index {
                    #( #indices => ::core::option::Option::Some(#names), )*
                    _ => ::core::option::Option::None,
                }
            }

            #[inline]
            fn field_len(&self) -> usize {
                #field_len
            }

            #[inline]
            fn iter_fields(&self) -> #record_field_iter_<'_> {
                #record_field_iter_::new(self)
            }
        }
    }
}
