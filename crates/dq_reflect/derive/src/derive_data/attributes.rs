//! Provide some tools for parsing `#[reflect(...)]` attributes.

use syn::{Attribute, LitStr};

use crate::REFLECT_ATTRIBUTE_NAME;

// -----------------------------------------------------------------------------
// Rename rule

/// A container-level rule applied to every field identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RenameRule {
    /// `gamma_ray` -> `GammaRay`
    PascalCase,
}

impl RenameRule {
    fn from_lit(lit: &LitStr) -> syn::Result<Self> {
        match lit.value().as_str() {
            "PascalCase" => Ok(Self::PascalCase),
            other => Err(syn::Error::new(
                lit.span(),
                format!("unknown rename rule `{other}`, expected \"PascalCase\""),
            )),
        }
    }

    pub(crate) fn apply(self, ident: &str) -> String {
        match self {
            Self::PascalCase => {
                let mut name = String::with_capacity(ident.len());
                for word in ident.split('_').filter(|word| !word.is_empty()) {
                    let mut chars = word.chars();
                    if let Some(first) = chars.next() {
                        name.extend(first.to_uppercase());
                        name.push_str(chars.as_str());
                    }
                }
                name
            }
        }
    }
}

// -----------------------------------------------------------------------------
// Type attributes

/// Attributes placed on the struct itself.
#[derive(Debug, Default)]
pub(crate) struct TypeAttributes {
    pub rename_all: Option<RenameRule>,
}

impl TypeAttributes {
    pub(crate) fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename_all") {
                    let lit: LitStr = meta.value()?.parse()?;
                    if result.rename_all.is_some() {
                        return Err(meta.error("duplicate `rename_all`"));
                    }
                    result.rename_all = Some(RenameRule::from_lit(&lit)?);
                    Ok(())
                } else {
                    Err(meta.error("unknown container attribute, expected `rename_all`"))
                }
            })?;
        }

        Ok(result)
    }
}

// -----------------------------------------------------------------------------
// Field attributes

/// Attributes placed on one field.
#[derive(Debug, Default)]
pub(crate) struct FieldAttributes {
    pub rename: Option<LitStr>,
    pub ignore: bool,
}

impl FieldAttributes {
    pub(crate) fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    if result.rename.is_some() {
                        return Err(meta.error("duplicate `rename`"));
                    }
                    result.rename = Some(meta.value()?.parse()?);
                    Ok(())
                } else if meta.path.is_ident("ignore") {
                    result.ignore = true;
                    Ok(())
                } else {
                    Err(meta.error("unknown field attribute, expected `rename` or `ignore`"))
                }
            })?;
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::{FieldAttributes, RenameRule, TypeAttributes};
    use syn::parse_quote;

    #[test]
    fn pascal_case() {
        let rule = RenameRule::PascalCase;
        assert_eq!(rule.apply("alfa"), "Alfa");
        assert_eq!(rule.apply("gamma_ray"), "GammaRay");
        assert_eq!(rule.apply("_hidden"), "Hidden");
        assert_eq!(rule.apply("x2_y"), "X2Y");
    }

    #[test]
    fn parse_attributes() {
        let ty: syn::DeriveInput = parse_quote! {
            #[reflect(rename_all = "PascalCase")]
            struct Foo {
                #[reflect(rename = "beta")]
                beta: String,
                #[reflect(ignore)]
                cache: u8,
            }
        };
        let attrs = TypeAttributes::parse(&ty.attrs).unwrap();
        assert_eq!(attrs.rename_all, Some(RenameRule::PascalCase));

        let syn::Data::Struct(data) = ty.data else {
            panic!("struct input");
        };
        let mut fields = data.fields.iter();
        let beta = FieldAttributes::parse(&fields.next().unwrap().attrs).unwrap();
        assert_eq!(beta.rename.unwrap().value(), "beta");
        let cache = FieldAttributes::parse(&fields.next().unwrap().attrs).unwrap();
        assert!(cache.ignore);
    }

    #[test]
    fn rejects_unknown() {
        let attrs: Vec<syn::Attribute> = vec![parse_quote!(#[reflect(rename_all = "kebab-case")])];
        assert!(TypeAttributes::parse(&attrs).is_err());

        let attrs: Vec<syn::Attribute> = vec![parse_quote!(#[reflect(flatten)])];
        assert!(FieldAttributes::parse(&attrs).is_err());
    }
}
