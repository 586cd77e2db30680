//! Derive macros for `filtered-log`.
//!
//! This crate generates the rendering code behind `#[derive(LogLine)]`. It:
//! - reads `#[log_line(...)]` container and field attributes
//! - emits a `ToLogLine` implementation that writes `key=value` segments
//!
//! It does **not** redact anything. Redaction happens on the rendered line in
//! the main `filtered-log` crate.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro2::TokenStream;
use proc_macro_crate::{crate_name, FoundCrate};
use quote::{format_ident, quote};
use syn::{parse_macro_input, spanned::Spanned, Data, DeriveInput, Result};

mod container;
mod derive_struct;
mod field;
mod generics;
use container::{parse_container_options, ContainerOptions};
use derive_struct::derive_struct;
use generics::add_display_bounds;

/// Derives `filtered_log::ToLogLine` for structs with named fields.
///
/// Each field renders as `key=value`, in declaration order, with segments
/// joined by `"; "`.
///
/// # Container Attributes
///
/// - `#[log_line(separator = "...")]` - Join segments with this string instead of `"; "`.
///
/// # Field Attributes
///
/// - **No annotation**: The key is the field name and the value is rendered with `Display`.
///
/// - `#[log_line(rename = "key")]`: Use `key` instead of the field name.
///
/// - `#[log_line(format = "...")]`: Render the value with `value.format("...")`, for date and
///   time types such as `chrono::NaiveDateTime`. The field type does not need `Display`.
///
/// - `#[log_line(skip)]`: Leave the field out of the line entirely.
///
/// Tuple structs, enums, and unions are rejected at compile time.
#[proc_macro_derive(LogLine, attributes(log_line))]
pub fn derive_log_line(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Returns the token stream to reference the `filtered-log` crate root.
///
/// Handles crate renaming (e.g., `logs = { package = "filtered-log", ... }`)
/// and internal usage (when derive is used inside `filtered-log` itself).
fn crate_root() -> TokenStream {
    match crate_name("filtered-log") {
        Ok(FoundCrate::Itself) => quote! { crate },
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Err(_) => quote! { ::filtered_log },
    }
}

fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        attrs,
        ..
    } = input;

    let ContainerOptions { separator } = parse_container_options(&attrs)?;

    let crate_root = crate_root();

    let output = match data {
        Data::Struct(data) => derive_struct(data, &generics)?,
        Data::Enum(data) => {
            return Err(syn::Error::new(
                data.enum_token.span(),
                "`LogLine` cannot be derived for enums",
            ));
        }
        Data::Union(data) => {
            return Err(syn::Error::new(
                data.union_token.span(),
                "`LogLine` cannot be derived for unions",
            ));
        }
    };

    let display_generics = add_display_bounds(generics, &output.display_generics);
    let (impl_generics, ty_generics, where_clause) = display_generics.split_for_impl();

    let separator = match separator {
        Some(separator) => quote! { #separator },
        None => quote! { #crate_root::DEFAULT_LINE_SEPARATOR },
    };
    let keys = &output.keys;
    let segments = &output.segments;

    Ok(quote! {
        impl #impl_generics #crate_root::ToLogLine for #ident #ty_generics #where_clause {
            const LOG_LINE_KEYS: &'static [&'static str] = &[#(#keys),*];

            #[allow(unused_imports, unused_mut, unused_variables)]
            fn to_log_line(&self) -> ::std::string::String {
                use ::core::fmt::Write as _;
                let separator: &str = #separator;
                let mut line = ::std::string::String::new();
                #(#segments)*
                line
            }
        }
    })
}
