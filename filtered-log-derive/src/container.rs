//! Container-level attribute parsing for `#[derive(LogLine)]`.
//!
//! This module handles attributes on the struct itself, not on fields.

use syn::{Attribute, LitStr, Meta, Result};

/// Options parsed from container-level `#[log_line(...)]` attributes.
#[derive(Clone, Debug, Default)]
pub(crate) struct ContainerOptions {
    /// Overrides the default `"; "` segment separator.
    pub(crate) separator: Option<LitStr>,
}

/// Parses container-level `#[log_line(...)]` attributes.
pub(crate) fn parse_container_options(attrs: &[Attribute]) -> Result<ContainerOptions> {
    let mut options = ContainerOptions::default();

    for attr in attrs {
        if !attr.path().is_ident("log_line") {
            continue;
        }

        match &attr.meta {
            Meta::List(list) => {
                list.parse_nested_meta(|meta| {
                    if meta.path.is_ident("separator") {
                        if options.separator.is_some() {
                            return Err(meta.error("duplicate `separator` option"));
                        }
                        let value: LitStr = meta.value()?.parse()?;
                        if value.value().is_empty() {
                            return Err(syn::Error::new(
                                value.span(),
                                "`separator` must not be empty",
                            ));
                        }
                        options.separator = Some(value);
                        Ok(())
                    } else {
                        Err(meta.error(format!(
                            "unknown container option `{}`; expected `separator`",
                            meta.path
                                .get_ident()
                                .map_or_else(|| "?".to_string(), ToString::to_string)
                        )))
                    }
                })?;
            }
            Meta::Path(path) => {
                return Err(syn::Error::new_spanned(
                    path,
                    "expected options, e.g. #[log_line(separator = \"; \")]",
                ));
            }
            Meta::NameValue(nv) => {
                return Err(syn::Error::new_spanned(
                    nv,
                    "name-value syntax is not supported for container-level #[log_line]",
                ));
            }
        }
    }

    Ok(options)
}
