//! PII redaction for `key=value` log lines.
//!
//! This crate separates:
//! - **Filtering**: which `field=value` segments of a line get their value replaced.
//! - **Formatting**: how a log record becomes a line of text once its message is filtered.
//! - **Logging**: a `slog` logger whose only sink writes formatted, filtered lines.
//!
//! Lines follow one convention: segments of `field=value` joined by a separator
//! (`;` by default). Matching is purely pattern based; a line is never parsed
//! or validated as a grammar.
//!
//! Key rules:
//! - The recognized field set is fixed when a [`FieldFilter`] or
//!   [`RedactingFormatter`] is built, and an empty or malformed set is rejected.
//! - Values of recognized fields are replaced by [`REDACTION`]; everything else
//!   is passed through byte for byte.
//! - Field names match anywhere in the line, so `username=` also matches the
//!   `name` field. Pick field names accordingly.
//!
//! What this crate does:
//! - compiles field names into a single matcher and applies it per message
//! - renders records through `[APP] <logger> <level> <timestamp>: <message>`
//! - builds a leveled `slog` logger writing to one sink (feature `logger`)
//! - hashes and verifies passwords (feature `password`)
//!
//! What it does not do:
//! - classify free text as PII
//! - connect to a database; [`DbSettings`] only reads the connection settings
//!
//! The `LogLine` derive macro lives in `filtered-log-derive` and is re-exported
//! here.

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

pub use filtered_log_derive::LogLine;

// Module declarations
mod config;
mod error;
mod filter;
#[cfg(feature = "logger")]
mod formatter;
mod line;
#[cfg(feature = "logger")]
pub mod logger;
#[cfg(feature = "password")]
pub mod password;
pub mod user;

// Re-exports
pub use config::DbSettings;
pub use error::ConfigError;
pub use filter::{
    filter_datum, FieldFilter, PII_FIELDS, PII_FIELDS_WITH_PHONE, REDACTION, SEPARATOR,
};
#[cfg(feature = "logger")]
pub use formatter::{LogRecord, RedactingFormatter, DEFAULT_TAG};
pub use line::{ToLogLine, DEFAULT_LINE_SEPARATOR};
#[cfg(feature = "logger")]
pub use logger::{build_logger, get_logger, logger_with_formatter, LoggerConfig, LOGGER_NAME};
