//! Field-based redaction of `key=value` lines.
//!
//! Filters are pure string transformations. They do not parse a line into
//! segments; they find `field=` for each recognized field and replace
//! everything up to the next separator (or the end of the line).

use std::borrow::Cow;

use regex::{Captures, Regex};

use crate::error::ConfigError;

/// Replacement text for the value of a recognized field.
pub const REDACTION: &str = "***";

/// Delimiter between `key=value` segments.
pub const SEPARATOR: char = ';';

/// Fields redacted by [`crate::get_logger`].
///
/// The user-table driver emits its phone number under `phone`, which is not in
/// this set, so phone numbers pass through. Use [`PII_FIELDS_WITH_PHONE`] to
/// redact them as well.
pub const PII_FIELDS: [&str; 5] = ["name", "email", "phone_number", "ssn", "password"];

/// [`PII_FIELDS`] plus the driver's `phone` key.
pub const PII_FIELDS_WITH_PHONE: [&str; 6] =
    ["name", "email", "phone_number", "phone", "ssn", "password"];

/// A compiled set of field names to redact.
///
/// All fields share one alternation, so a message is scanned once and matches
/// resolve left to right regardless of the order fields were listed in.
#[derive(Clone, Debug)]
pub struct FieldFilter {
    fields: Vec<String>,
    separator: char,
    pattern: Regex,
}

impl FieldFilter {
    /// Validates `fields` and compiles them into a single matcher.
    ///
    /// Field names must be non-empty and must not contain `=` or `separator`.
    /// Regex metacharacters in names are matched literally.
    pub fn new<I, S>(fields: I, separator: char) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if separator == '=' {
            return Err(ConfigError::InvalidSeparator(separator));
        }

        let fields = fields
            .into_iter()
            .map(|field| validate_field(field.as_ref(), separator))
            .collect::<Result<Vec<_>, _>>()?;
        if fields.is_empty() {
            return Err(ConfigError::EmptyFieldList);
        }

        let pattern = compile(&fields, separator)?;

        Ok(Self {
            fields,
            separator,
            pattern,
        })
    }

    /// The recognized field names, in the order they were supplied.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// The segment delimiter this filter stops at.
    pub fn separator(&self) -> char {
        self.separator
    }

    /// Replaces the value of every recognized field in `message` with `redaction`.
    ///
    /// Returns the input borrowed when nothing matched.
    pub fn redact<'m>(&self, redaction: &str, message: &'m str) -> Cow<'m, str> {
        self.pattern
            .replace_all(message, |caps: &Captures<'_>| {
                format!("{}={redaction}", &caps["field"])
            })
    }
}

fn compile<S: AsRef<str>>(fields: &[S], separator: char) -> Result<Regex, regex::Error> {
    let alternation = fields
        .iter()
        .map(|field| regex::escape(field.as_ref()))
        .collect::<Vec<_>>()
        .join("|");
    let value = regex::escape(&separator.to_string());
    Regex::new(&format!("(?P<field>{alternation})=[^{value}]*"))
}

fn validate_field(field: &str, separator: char) -> Result<String, ConfigError> {
    if field.is_empty() {
        return Err(ConfigError::EmptyFieldName);
    }
    if field.contains('=') {
        return Err(ConfigError::InvalidFieldName {
            field: field.to_string(),
            reason: "contains `=`".to_string(),
        });
    }
    if field.contains(separator) {
        return Err(ConfigError::InvalidFieldName {
            field: field.to_string(),
            reason: format!("contains the separator `{separator}`"),
        });
    }
    Ok(field.to_string())
}

/// Obfuscates the values of `fields` in `message`.
///
/// This is the one-shot form of [`FieldFilter::redact`]. It never fails:
/// names that [`FieldFilter::new`] would reject are skipped and the remaining
/// fields are still redacted. If the matcher cannot be built at all, the whole
/// message is replaced by `redaction`.
///
/// ```
/// use filtered_log::filter_datum;
///
/// let line = filter_datum(
///     &["password", "date_of_birth"],
///     "xxx",
///     "name=Bob;password=secret;date_of_birth=12/12/1986;",
///     ';',
/// );
/// assert_eq!(line, "name=Bob;password=xxx;date_of_birth=xxx;");
/// ```
pub fn filter_datum<S>(fields: &[S], redaction: &str, message: &str, separator: char) -> String
where
    S: AsRef<str>,
{
    let fields: Vec<&str> = fields
        .iter()
        .map(AsRef::as_ref)
        .filter(|field| validate_field(field, separator).is_ok())
        .collect();
    if fields.is_empty() {
        return message.to_string();
    }

    match compile(&fields, separator) {
        Ok(pattern) => pattern
            .replace_all(message, |caps: &Captures<'_>| {
                format!("{}={redaction}", &caps["field"])
            })
            .into_owned(),
        Err(_) => redaction.to_string(),
    }
}
