//! Rendering of log records with their message filtered first.
//!
//! Formatting is a pure function of the record: the record is borrowed, the
//! message is filtered into a new string, and the rendered line is returned.

use std::borrow::Cow;

use chrono::{DateTime, Local};
use slog::Level;

use crate::{
    error::ConfigError,
    filter::{FieldFilter, REDACTION, SEPARATOR},
};

/// Tag printed in brackets at the start of every line.
pub const DEFAULT_TAG: &str = "APP";

// Date, time, then milliseconds after a comma.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// The parts of a log event a [`RedactingFormatter`] renders.
#[derive(Clone, Copy, Debug)]
pub struct LogRecord<'a> {
    /// Name of the logger that produced the event.
    pub logger_name: &'a str,
    /// Severity.
    pub level: Level,
    /// When the event was produced.
    pub timestamp: DateTime<Local>,
    /// The unfiltered message.
    pub message: &'a str,
}

impl<'a> LogRecord<'a> {
    /// Creates a record stamped with the current local time.
    pub fn new(logger_name: &'a str, level: Level, message: &'a str) -> Self {
        Self {
            logger_name,
            level,
            timestamp: Local::now(),
            message,
        }
    }

    /// Replaces the timestamp.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }
}

/// Formats records as `[TAG] <logger> <LEVEL> <timestamp>: <message>`, with
/// the values of recognized fields in the message replaced by [`REDACTION`].
///
/// Messages are split on [`SEPARATOR`].
#[derive(Clone, Debug)]
pub struct RedactingFormatter {
    filter: FieldFilter,
    tag: String,
}

impl RedactingFormatter {
    /// Builds a formatter that redacts `fields`.
    ///
    /// Fails for the same inputs as [`FieldFilter::new`].
    pub fn new<I, S>(fields: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self {
            filter: FieldFilter::new(fields, SEPARATOR)?,
            tag: DEFAULT_TAG.to_string(),
        })
    }

    /// Uses `tag` instead of [`DEFAULT_TAG`].
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// The recognized field names.
    pub fn fields(&self) -> &[String] {
        self.filter.fields()
    }

    /// Applies only the redaction step.
    pub fn redact_message<'m>(&self, message: &'m str) -> Cow<'m, str> {
        self.filter.redact(REDACTION, message)
    }

    /// Renders `record` into a single line, without a trailing newline.
    pub fn format(&self, record: &LogRecord<'_>) -> String {
        let message = self.redact_message(record.message);
        let timestamp = record.timestamp.format(TIMESTAMP_FORMAT).to_string();
        format!(
            "[{}] {} {} {timestamp:<15}: {message}",
            self.tag,
            record.logger_name,
            level_name(record.level),
        )
    }
}

fn level_name(level: Level) -> &'static str {
    match level {
        Level::Critical => "CRITICAL",
        Level::Error => "ERROR",
        Level::Warning => "WARNING",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}
