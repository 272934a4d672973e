use std::collections::BTreeMap;

use proc_macro2::Literal;
use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields, Ident, Type};

use super::{FieldAttributes, ReflectMeta, TypeAttributes};

/// One reflected field of a record.
pub(crate) struct RecordField<'a> {
    pub ident: &'a Ident,
    pub ty: &'a Type,
    /// The reflected name, after `rename` / `rename_all`.
    pub name: String,
    /// Position among the reflected (non-ignored) fields.
    pub index: Literal,
}

/// A `struct` with named fields, ready for code generation.
pub(crate) struct ReflectRecord<'a> {
    meta: ReflectMeta<'a>,
    fields: Vec<RecordField<'a>>,
}

impl<'a> ReflectRecord<'a> {
    pub(crate) fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        let named = match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(named) => named,
                Fields::Unnamed(_) => {
                    return Err(syn::Error::new(
                        input.ident.span(),
                        "`Reflect` cannot be derived for tuple structs, use named fields",
                    ));
                }
                Fields::Unit => {
                    return Err(syn::Error::new(
                        input.ident.span(),
                        "`Reflect` cannot be derived for unit structs",
                    ));
                }
            },
            Data::Enum(data) => {
                return Err(syn::Error::new(
                    data.enum_token.span(),
                    "`Reflect` cannot be derived for enums",
                ));
            }
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span(),
                    "`Reflect` cannot be derived for unions",
                ));
            }
        };

        if let Some(lifetime) = input.generics.lifetimes().next() {
            return Err(syn::Error::new(
                lifetime.span(),
                "`Reflect` cannot be derived for types with lifetime parameters",
            ));
        }

        let attrs = TypeAttributes::parse(&input.attrs)?;

        let mut fields = Vec::with_capacity(named.named.len());
        let mut seen: BTreeMap<String, &Ident> = BTreeMap::new();

        for field in &named.named {
            let field_attrs = FieldAttributes::parse(&field.attrs)?;
            if field_attrs.ignore {
                continue;
            }

            let Some(ident) = field.ident.as_ref() else {
                return Err(syn::Error::new(field.span(), "expected a named field"));
            };

            let name = match (&field_attrs.rename, attrs.rename_all) {
                (Some(lit), _) => lit.value(),
                (None, Some(rule)) => rule.apply(&ident.unraw().to_string()),
                (None, None) => ident.unraw().to_string(),
            };

            if let Some(previous) = seen.insert(name.clone(), ident) {
                return Err(syn::Error::new(
                    ident.span(),
                    format!("reflected name `{name}` is already used by field `{previous}`"),
                ));
            }

            fields.push(RecordField {
                ident,
                ty: &field.ty,
                name,
                index: Literal::usize_unsuffixed(fields.len()),
            });
        }

        Ok(Self {
            meta: ReflectMeta::new(attrs, &input.ident, &input.generics),
            fields,
        })
    }

    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    #[inline]
    pub fn fields(&self) -> &[RecordField<'a>] {
        &self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::ReflectRecord;
    use syn::{DeriveInput, parse_quote};

    fn names(input: &DeriveInput) -> Vec<String> {
        let record = ReflectRecord::from_input(input).unwrap();
        record.fields().iter().map(|f| f.name.clone()).collect()
    }

    #[test]
    fn reflected_names() {
        let input: DeriveInput = parse_quote! {
            #[reflect(rename_all = "PascalCase")]
            struct Level1 {
                alfa: f64,
                #[reflect(rename = "beta")]
                beta: String,
                #[reflect(ignore)]
                cache: u8,
                r#type: i32,
            }
        };
        assert_eq!(names(&input), ["Alfa", "beta", "Type"]);
    }

    #[test]
    fn rejected_shapes() {
        let tuple: DeriveInput = parse_quote!(struct A(i32););
        let unit: DeriveInput = parse_quote!(struct B;);
        let shape: DeriveInput = parse_quote!(enum C { X });
        let borrowed: DeriveInput = parse_quote!(struct D<'a> { x: &'a str });
        for input in [tuple, unit, shape, borrowed] {
            assert!(ReflectRecord::from_input(&input).is_err());
        }
    }

    #[test]
    fn duplicate_names() {
        let input: DeriveInput = parse_quote! {
            #[reflect(rename_all = "PascalCase")]
            struct Clash {
                alfa: f64,
                #[reflect(rename = "Alfa")]
                other: f64,
            }
        };
        assert!(ReflectRecord::from_input(&input).is_err());
    }
}
