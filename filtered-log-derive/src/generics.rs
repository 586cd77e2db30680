//! Generic type parameter handling and trait bound management.
//!
//! Bounds are added only for generics that appear in fields rendered with
//! `Display`. Skipped fields and fields rendered through `format = "..."` add
//! no bounds.
//!
//! ## PhantomData Handling
//!
//! `PhantomData<T>` fields are skipped when collecting generics, so a marker
//! field never forces `T: Display`:
//!
//! ```ignore
//! #[derive(LogLine)]
//! struct TypedId<T> {
//!     id: String,
//!     #[log_line(skip)]
//!     _marker: PhantomData<T>,
//! }
//! ```

use syn::{parse_quote, Ident};

pub(crate) fn collect_generics_from_type(
    ty: &syn::Type,
    generics: &syn::Generics,
    result: &mut Vec<Ident>,
) {
    match ty {
        syn::Type::Path(path) => {
            if let Some(segment) = path.path.segments.last() {
                if segment.ident == "PhantomData" {
                    return;
                }

                if let syn::PathArguments::AngleBracketed(args) = &segment.arguments {
                    for arg in &args.args {
                        if let syn::GenericArgument::Type(inner_ty) = arg {
                            collect_generics_from_type(inner_ty, generics, result);
                        }
                    }
                }

                for param in generics.type_params() {
                    if segment.ident == param.ident && !result.iter().any(|g| g == &param.ident) {
                        result.push(param.ident.clone());
                    }
                }
            }
        }
        syn::Type::Reference(reference) => {
            collect_generics_from_type(&reference.elem, generics, result);
        }
        syn::Type::Paren(paren) => {
            collect_generics_from_type(&paren.elem, generics, result);
        }
        _ => {}
    }
}

/// Adds `Display` bounds to generic parameters used in displayed fields.
pub(crate) fn add_display_bounds(
    mut generics: syn::Generics,
    used_generics: &[Ident],
) -> syn::Generics {
    for param in generics.type_params_mut() {
        if used_generics.iter().any(|g| g == &param.ident) {
            param.bounds.push(parse_quote!(::core::fmt::Display));
        }
    }
    generics
}

#[cfg(test)]
mod tests {
    use quote::quote;
    use syn::{DeriveInput, Fields};

    use super::*;

    fn field_generics(tokens: proc_macro2::TokenStream) -> Vec<Ident> {
        let input: DeriveInput = syn::parse2(tokens).expect("should parse as DeriveInput");
        let syn::Data::Struct(data) = &input.data else {
            panic!("expected a struct");
        };
        let Fields::Named(fields) = &data.fields else {
            panic!("expected named fields");
        };
        let mut result = Vec::new();
        for field in &fields.named {
            collect_generics_from_type(&field.ty, &input.generics, &mut result);
        }
        result
    }

    #[test]
    fn collects_direct_and_nested_generics() {
        let found = field_generics(quote! {
            struct Row<T, U> {
                a: T,
                b: Box<U>,
                c: String,
            }
        });
        assert_eq!(found, ["T", "U"]);
    }

    #[test]
    fn skips_phantom_data() {
        let found = field_generics(quote! {
            struct Row<T> {
                id: String,
                marker: PhantomData<T>,
            }
        });
        assert!(found.is_empty());
    }

    #[test]
    fn follows_references() {
        let found = field_generics(quote! {
            struct Row<'a, T> {
                value: &'a T,
            }
        });
        assert_eq!(found, ["T"]);
    }
}
