//! Integration tests for the redacting logger.
//!
//! These tests verify that:
//! - loggers write one formatted, redacted line per record to their sink
//! - records below the configured level never reach the sink
//! - the global logger is built once and shared

#![cfg(feature = "logger")]

use std::{
    io::{self, Write},
    sync::{Arc, Mutex},
    thread,
};

use chrono::{Local, TimeZone};
use filtered_log::{
    build_logger, get_logger, ConfigError, LogRecord, LoggerConfig, RedactingFormatter,
    PII_FIELDS, PII_FIELDS_WITH_PHONE,
};
use slog::{debug, error, info, warn, Level};

// A sink that keeps everything written to it
#[derive(Clone, Default)]
struct CapturingSink {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl CapturingSink {
    fn lines(&self) -> Vec<String> {
        let bytes = self.bytes.lock().unwrap();
        String::from_utf8(bytes.clone())
            .unwrap()
            .lines()
            .map(ToString::to_string)
            .collect()
    }
}

impl Write for CapturingSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// ============================================================================
// Formatter
// ============================================================================

#[test]
fn test_formatter_matches_exact_field_names_only() {
    let formatter = RedactingFormatter::new(["email", "ssn"]).unwrap();
    let record = LogRecord::new("user_data", Level::Info, "email=a@b.com;ssv=000-00-0000");
    let line = formatter.format(&record);

    assert!(line.contains("email=***"));
    assert!(line.contains("ssv=000-00-0000"));
    assert!(!line.contains("a@b.com"));
}

#[test]
fn test_formatter_renders_full_template() {
    let formatter = RedactingFormatter::new(PII_FIELDS).unwrap();
    let timestamp = Local.with_ymd_and_hms(2019, 11, 14, 6, 16, 24).unwrap();
    let record = LogRecord::new(
        "my_logger",
        Level::Info,
        "name=Bob;email=bob@dylan.com;ssn=000-123-0000;password=bobbycool;",
    )
    .with_timestamp(timestamp);

    assert_eq!(
        formatter.format(&record),
        "[APP] my_logger INFO 2019-11-14 06:16:24,000: \
         name=***;email=***;ssn=***;password=***;"
    );
}

#[test]
fn test_formatter_exposes_fields_and_message_step() {
    let formatter = RedactingFormatter::new(PII_FIELDS).unwrap();
    assert_eq!(formatter.fields().len(), 5);
    assert_eq!(formatter.redact_message("ssn=1;ip=2"), "ssn=***;ip=2");
}

// ============================================================================
// Logger
// ============================================================================

#[test]
fn test_debug_is_discarded_and_info_is_written() {
    let sink = CapturingSink::default();
    let logger = build_logger(LoggerConfig::default(), sink.clone()).unwrap();

    debug!(logger, "email=hidden@example.com");
    assert!(sink.lines().is_empty());

    info!(logger, "email=shown@example.com; ip=10.0.0.1");
    let lines = sink.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("[APP] user_data INFO "));
    assert!(lines[0].ends_with(": email=***; ip=10.0.0.1"));
}

#[test]
fn test_each_logger_has_exactly_one_sink() {
    let sink = CapturingSink::default();
    let first = build_logger(LoggerConfig::default(), sink.clone()).unwrap();
    let second = build_logger(LoggerConfig::default(), sink.clone()).unwrap();

    info!(first, "ssn=1");
    assert_eq!(sink.lines().len(), 1);

    info!(second, "ssn=2");
    assert_eq!(sink.lines().len(), 2);

    // Child loggers share the parent's drain rather than adding one
    let child = first.new(slog::o!("component" => "export"));
    info!(child, "ssn=3");
    let lines = sink.lines();
    assert_eq!(lines.len(), 3);
    assert!(lines[2].ends_with(": ssn=***; component=export"));
}

#[test]
fn test_warning_level_name() {
    let sink = CapturingSink::default();
    let logger = build_logger(LoggerConfig::default(), sink.clone()).unwrap();

    warn!(logger, "email=bob@example.com");
    let lines = sink.lines();
    assert!(lines[0].starts_with("[APP] user_data WARNING "));
    assert!(lines[0].ends_with(": email=***"));
}

#[test]
fn test_custom_config_is_applied() {
    let sink = CapturingSink::default();
    let config = LoggerConfig::default()
        .with_name("exports")
        .with_level(Level::Error)
        .with_fields(PII_FIELDS_WITH_PHONE)
        .with_tag("HR");
    let logger = build_logger(config, sink.clone()).unwrap();

    info!(logger, "phone=555-0100");
    assert!(sink.lines().is_empty());

    error!(logger, "phone=555-0100");
    let lines = sink.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("[HR] exports ERROR "));
    assert!(lines[0].ends_with(": phone=***"));
}

#[test]
fn test_invalid_field_config_is_rejected() {
    let config = LoggerConfig::default().with_fields(["email", "bad=name"]);
    let result = build_logger(config, io::sink());
    assert!(matches!(result, Err(ConfigError::InvalidFieldName { .. })));
}

#[test]
fn test_concurrent_writes_stay_on_separate_lines() {
    let sink = CapturingSink::default();
    let logger = build_logger(LoggerConfig::default(), sink.clone()).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let logger = logger.clone();
            thread::spawn(move || {
                for i in 0..25 {
                    info!(logger, "worker={}; ssn=000-00-{:04}", worker, i);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let lines = sink.lines();
    assert_eq!(lines.len(), 100);
    assert!(lines.iter().all(|line| line.ends_with("; ssn=***")));
}

#[test]
fn test_global_logger_is_shared_across_threads() {
    let addresses: Vec<usize> = (0..8)
        .map(|_| thread::spawn(|| std::ptr::from_ref(get_logger()) as usize))
        .collect::<Vec<_>>()
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    assert!(addresses.windows(2).all(|pair| pair[0] == pair[1]));
    assert_eq!(addresses[0], std::ptr::from_ref(get_logger()) as usize);
}
