//! Struct-specific `ToLogLine` derivation.
//!
//! This module generates one `key=value` segment per rendered field and
//! collects generic parameters that require `Display` bounds.

use proc_macro2::{Ident, TokenStream};
use quote::{quote, quote_spanned};
use syn::{ext::IdentExt, spanned::Spanned, DataStruct, Fields, Result};

use crate::{field::parse_field_options, generics::collect_generics_from_type};

pub(crate) struct StructDeriveOutput {
    /// Rendered keys, in declaration order.
    pub(crate) keys: Vec<String>,
    /// One statement per rendered field, appending to `line`.
    pub(crate) segments: Vec<TokenStream>,
    pub(crate) display_generics: Vec<Ident>,
}

pub(crate) fn derive_struct(data: DataStruct, generics: &syn::Generics) -> Result<StructDeriveOutput> {
    match data.fields {
        Fields::Named(fields) => derive_named_struct(fields, generics),
        Fields::Unnamed(fields) => Err(syn::Error::new(
            fields.span(),
            "`LogLine` requires named fields; tuple structs have no keys to render",
        )),
        Fields::Unit => Ok(StructDeriveOutput {
            keys: Vec::new(),
            segments: Vec::new(),
            display_generics: Vec::new(),
        }),
    }
}

fn derive_named_struct(
    fields: syn::FieldsNamed,
    generics: &syn::Generics,
) -> Result<StructDeriveOutput> {
    let mut keys = Vec::new();
    let mut segments = Vec::new();
    let mut display_generics = Vec::new();

    for field in fields.named {
        let span = field.span();
        let options = parse_field_options(&field.attrs)?;
        if options.skip {
            continue;
        }

        let ident = field
            .ident
            .ok_or_else(|| syn::Error::new(span, "named field should have an identifier"))?;
        let key = options
            .rename
            .as_ref()
            .map_or_else(|| ident.unraw().to_string(), syn::LitStr::value);
        if keys.contains(&key) {
            return Err(syn::Error::new(
                span,
                format!("duplicate log line key `{key}`"),
            ));
        }

        let value = match &options.format {
            Some(format) => quote_spanned! { span => self.#ident.format(#format) },
            None => {
                collect_generics_from_type(&field.ty, generics, &mut display_generics);
                quote_spanned! { span => &self.#ident }
            }
        };
        let separator = if keys.is_empty() {
            quote! {}
        } else {
            quote! { line.push_str(separator); }
        };

        segments.push(quote_spanned! { span =>
            #separator
            let _ = ::core::write!(line, "{}={}", #key, #value);
        });
        keys.push(key);
    }

    Ok(StructDeriveOutput {
        keys,
        segments,
        display_generics,
    })
}
