//! Parsing of `#[log_line(...)]` field attributes.
//!
//! This module maps attribute syntax to rendering decisions and produces
//! structured errors for invalid forms.

use syn::{spanned::Spanned, Attribute, LitStr, Meta, Result};

/// How a single field is rendered.
///
/// | Attribute | Behavior |
/// |-----------|----------|
/// | None | `field=<Display>` |
/// | `rename = "key"` | `key=<Display>` |
/// | `format = "..."` | `field=<value.format("...")>` |
/// | `skip` | Field is not rendered |
#[derive(Clone, Debug, Default)]
pub(crate) struct FieldOptions {
    /// Key override.
    pub(crate) rename: Option<LitStr>,
    /// Format string passed to the value's `format` method.
    pub(crate) format: Option<LitStr>,
    /// Leave the field out of the line.
    pub(crate) skip: bool,
}

fn set_once(target: &mut Option<LitStr>, value: LitStr, name: &str) -> Result<()> {
    if target.is_some() {
        return Err(syn::Error::new(
            value.span(),
            format!("duplicate `{name}` option on the same field"),
        ));
    }
    *target = Some(value);
    Ok(())
}

fn validate_key(key: &LitStr) -> Result<()> {
    let value = key.value();
    if value.is_empty() {
        return Err(syn::Error::new(key.span(), "`rename` must not be empty"));
    }
    if value.contains('=') || value.contains(';') {
        return Err(syn::Error::new(
            key.span(),
            "`rename` must not contain `=` or `;`",
        ));
    }
    Ok(())
}

pub(crate) fn parse_field_options(attrs: &[Attribute]) -> Result<FieldOptions> {
    let mut options = FieldOptions::default();
    for attr in attrs {
        if !attr.path().is_ident("log_line") {
            continue;
        }

        match &attr.meta {
            Meta::List(list) => {
                list.parse_nested_meta(|meta| {
                    if meta.path.is_ident("skip") {
                        if options.skip {
                            return Err(meta.error("duplicate `skip` option on the same field"));
                        }
                        options.skip = true;
                        Ok(())
                    } else if meta.path.is_ident("rename") {
                        let key: LitStr = meta.value()?.parse()?;
                        validate_key(&key)?;
                        set_once(&mut options.rename, key, "rename")
                    } else if meta.path.is_ident("format") {
                        let format: LitStr = meta.value()?.parse()?;
                        set_once(&mut options.format, format, "format")
                    } else {
                        Err(meta.error(format!(
                            "unknown field option `{}`; expected `rename`, `format` or `skip`",
                            meta.path
                                .get_ident()
                                .map_or_else(|| "?".to_string(), ToString::to_string)
                        )))
                    }
                })?;
            }
            Meta::Path(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "expected options, e.g. #[log_line(skip)]",
                ));
            }
            Meta::NameValue(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "name-value syntax is not supported for #[log_line]",
                ));
            }
        }
    }

    if options.skip && (options.rename.is_some() || options.format.is_some()) {
        return Err(syn::Error::new(
            proc_macro2::Span::call_site(),
            "`skip` cannot be combined with `rename` or `format`",
        ));
    }

    Ok(options)
}
