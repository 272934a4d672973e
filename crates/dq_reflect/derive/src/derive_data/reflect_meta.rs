use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{Generics, Ident, ImplGenerics, Path, TypeGenerics, WherePredicate, parse_quote};

use super::TypeAttributes;

/// Type-level information shared by every generated impl.
pub(crate) struct ReflectMeta<'a> {
    dq_reflect_path: Path,
    attrs: TypeAttributes,
    ident: &'a Ident,
    generics: &'a Generics,
}

impl core::fmt::Debug for ReflectMeta<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ReflectMeta")
            .field("dq_reflect_path", &self.dq_reflect_path.to_token_stream())
            .field("ident", &self.ident)
            .field("attrs", &self.attrs)
            .finish()
    }
}

impl<'a> ReflectMeta<'a> {
    #[inline]
    pub fn new(attrs: TypeAttributes, ident: &'a Ident, generics: &'a Generics) -> Self {
        Self {
            dq_reflect_path: crate::path::dq_reflect(),
            attrs,
            ident,
            generics,
        }
    }

    #[inline]
    pub fn dq_reflect_path(&self) -> &Path {
        &self.dq_reflect_path
    }

    #[inline]
    pub fn ident(&self) -> &'a Ident {
        self.ident
    }

    /// Generic records share one `static` across instantiations and need
    /// the `TypeId`-keyed cell.
    #[inline]
    pub fn impl_with_generic(&self) -> bool {
        self.generics.type_params().next().is_some()
            || self.generics.const_params().next().is_some()
    }

    /// Return the required generic parameters.
    ///
    /// The three parameters returned are `impl_generics`, `ty_generics`, `where_clause`.
    ///
    /// ## Example
    ///
    /// ```ignore
    /// let ident = meta.ident();
    /// let (impl_generics, ty_generics, where_clause) = meta.split_generics();
    ///
    /// quote! {
    ///     impl #impl_generics TraitName for #ident #ty_generics #where_clause {
    ///         /* ... */
    ///     }
    /// }
    /// ```
    ///
    /// Every type parameter is bound by `Typed`: field descriptors are built
    /// with `NamedField::new::<FieldType>`, and `Typed` implies `Reflect`.
    pub fn split_generics(&self) -> (ImplGenerics<'a>, TypeGenerics<'a>, TokenStream) {
        let typed_ = crate::path::typed_(&self.dq_reflect_path);

        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();

        let mut predicates: Vec<WherePredicate> = where_clause
            .map(|clause| clause.predicates.iter().cloned().collect())
            .unwrap_or_default();

        for param in self.generics.type_params() {
            let ident = &param.ident;
            predicates.push(parse_quote!(#ident: #typed_));
        }

        let where_clause = if predicates.is_empty() {
            crate::impls::empty()
        } else {
            quote! { where #(#predicates,)* }
        };

        (impl_generics, ty_generics, where_clause)
    }
}
