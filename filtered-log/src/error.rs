//! Error types for filter and logger configuration.

use thiserror::Error;

/// Errors raised while building a [`crate::FieldFilter`] or anything that owns one.
///
/// Applying a filter never fails; only constructing one does.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No field names were supplied.
    #[error("field list is empty; at least one field name is required")]
    EmptyFieldList,

    /// A field name was the empty string.
    #[error("field list contains an empty field name")]
    EmptyFieldName,

    /// A field name contains a character that would break `field=value` matching.
    #[error("invalid field name `{field}`: {reason}")]
    InvalidFieldName {
        /// The rejected field name.
        field: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The separator cannot delimit `field=value` segments.
    #[error("invalid separator `{0}`")]
    InvalidSeparator(char),

    /// The combined field pattern failed to compile.
    #[error("pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// A required environment variable is not set.
    #[error("environment variable `{0}` is not set")]
    MissingEnv(&'static str),
}
