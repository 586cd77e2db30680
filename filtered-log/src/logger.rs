//! A `slog` logger whose single sink writes redacted lines.
//!
//! This module connects [`RedactingFormatter`] with `slog` by providing a
//! [`slog::Drain`] that renders each record through the formatter and writes
//! one line per record to a sink.
//!
//! It is responsible for:
//! - Building loggers that own exactly one sink and no parent, so records are
//!   never forwarded to any other (global) logger.
//! - Discarding records below the configured level before they are formatted.
//! - Keeping sink failures away from callers: a failed write drops the line.
//!
//! [`get_logger`] is the process-wide logger writing to stderr. Code that wants
//! its own handle, or a different sink, calls [`build_logger`] and passes the
//! returned `Logger` down.

use std::{
    fmt,
    io::{self, Write},
    sync::Mutex,
};

use once_cell::sync::OnceCell;
use slog::{o, Discard, Drain, Key, Level, Logger, OwnedKVList, Record, Serializer, KV};

use crate::{
    error::ConfigError,
    filter::PII_FIELDS,
    formatter::{LogRecord, RedactingFormatter, DEFAULT_TAG},
    line::DEFAULT_LINE_SEPARATOR,
};

/// Name of the logger returned by [`get_logger`].
pub const LOGGER_NAME: &str = "user_data";

/// Settings for [`build_logger`].
///
/// The default matches [`get_logger`]: named [`LOGGER_NAME`], level `Info`,
/// redacting [`PII_FIELDS`].
#[derive(Clone, Debug)]
pub struct LoggerConfig {
    name: String,
    level: Level,
    fields: Vec<String>,
    tag: String,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            name: LOGGER_NAME.to_string(),
            level: Level::Info,
            fields: PII_FIELDS.iter().map(ToString::to_string).collect(),
            tag: DEFAULT_TAG.to_string(),
        }
    }
}

impl LoggerConfig {
    /// Sets the name printed after the tag.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the least severe level that is still written.
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Replaces the redacted field set.
    #[must_use]
    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the bracketed tag at the start of each line.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// The logger name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The minimum level.
    pub fn level(&self) -> Level {
        self.level
    }

    /// The redacted field set.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}

/// A [`slog::Drain`] that formats records with a [`RedactingFormatter`] and
/// writes them, one per line, to `W`.
///
/// Key-value pairs attached to a record, followed by those carried by the
/// logger (`o!`), are appended to its message as `key=value` segments, so they
/// go through the same redaction as the message.
pub struct RedactingDrain<W> {
    name: String,
    formatter: RedactingFormatter,
    sink: Mutex<W>,
}

impl<W: Write> RedactingDrain<W> {
    /// Creates a drain writing to `sink`.
    pub fn new(name: impl Into<String>, formatter: RedactingFormatter, sink: W) -> Self {
        Self {
            name: name.into(),
            formatter,
            sink: Mutex::new(sink),
        }
    }
}

impl<W> fmt::Debug for RedactingDrain<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedactingDrain")
            .field("name", &self.name)
            .field("formatter", &self.formatter)
            .finish_non_exhaustive()
    }
}

impl<W: Write> Drain for RedactingDrain<W> {
    type Ok = ();
    type Err = io::Error;

    fn log(&self, record: &Record<'_>, values: &OwnedKVList) -> io::Result<()> {
        let mut segments = SegmentSerializer::default();
        record.kv().serialize(record, &mut segments)?;
        values.serialize(record, &mut segments)?;

        let mut message = record.msg().to_string();
        if !segments.0.is_empty() {
            if !message.is_empty() {
                message.push_str(DEFAULT_LINE_SEPARATOR);
            }
            message.push_str(&segments.0.join(DEFAULT_LINE_SEPARATOR));
        }

        let line = self
            .formatter
            .format(&LogRecord::new(&self.name, record.level(), &message));

        let mut sink = self
            .sink
            .lock()
            .map_err(|_| io::Error::other("log sink lock poisoned"))?;
        writeln!(sink, "{line}")?;
        sink.flush()
    }
}

/// Collects record key-value pairs as `key=value` strings.
#[derive(Default)]
struct SegmentSerializer(Vec<String>);

impl Serializer for SegmentSerializer {
    fn emit_arguments(&mut self, key: Key, val: &fmt::Arguments<'_>) -> slog::Result {
        self.0.push(format!("{key}={val}"));
        Ok(())
    }
}

/// Builds a root logger with one [`RedactingDrain`] writing to `sink`.
///
/// Records below `config.level()` are discarded before formatting. Each call
/// builds an independent logger; nothing is registered globally.
pub fn build_logger<W>(config: LoggerConfig, sink: W) -> Result<Logger, ConfigError>
where
    W: Write + Send + 'static,
{
    let LoggerConfig {
        name,
        level,
        fields,
        tag,
    } = config;

    let formatter = RedactingFormatter::new(&fields)?.with_tag(tag);
    Ok(logger_with_formatter(name, level, formatter, sink))
}

/// Builds a root logger around an already validated `formatter`.
///
/// Same drain and level handling as [`build_logger`], without the field
/// validation step.
pub fn logger_with_formatter<W>(
    name: impl Into<String>,
    level: Level,
    formatter: RedactingFormatter,
    sink: W,
) -> Logger
where
    W: Write + Send + 'static,
{
    let drain = RedactingDrain::new(name, formatter, sink)
        .filter_level(level)
        .ignore_res();

    Logger::root(drain, o!())
}

static USER_DATA_LOGGER: OnceCell<Logger> = OnceCell::new();

/// Returns the process-wide `user_data` logger, building it on first use.
///
/// The logger writes to stderr at level `Info` and above, redacting
/// [`PII_FIELDS`]. Concurrent first calls build it once; every call returns
/// the same logger. If the field set ever failed to compile, the logger
/// discards every record rather than write unredacted lines.
pub fn get_logger() -> &'static Logger {
    USER_DATA_LOGGER.get_or_init(|| match RedactingFormatter::new(PII_FIELDS) {
        Ok(formatter) => logger_with_formatter(LOGGER_NAME, Level::Info, formatter, io::stderr()),
        Err(_) => Logger::root(Discard, o!()),
    })
}
