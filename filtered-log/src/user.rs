//! The user-table row and its log line.
//!
//! Rows come from `SELECT name, email, phone, ssn, password, ip, last_login,
//! user_agent FROM users`. Each row is logged at `Info` as
//! `name=...; email=...; phone=...; ...; user_agent=...`.
//!
//! The row key is `phone`, while [`crate::PII_FIELDS`] lists `phone_number`, so
//! with the default field set phone numbers are written in clear text. Loggers
//! built with [`crate::PII_FIELDS_WITH_PHONE`] redact them.

use std::fmt;

use chrono::NaiveDateTime;

use crate::{filter::FieldFilter, LogLine, ToLogLine, PII_FIELDS_WITH_PHONE, REDACTION, SEPARATOR};

/// One row of the `users` table.
#[derive(Clone, PartialEq, Eq, LogLine)]
pub struct UserRow {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub ssn: String,
    pub password: String,
    pub ip: String,
    #[log_line(format = "%Y-%m-%d %H:%M:%S")]
    pub last_login: NaiveDateTime,
    pub user_agent: String,
}

impl fmt::Debug for UserRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = self.to_log_line();
        match FieldFilter::new(PII_FIELDS_WITH_PHONE, SEPARATOR) {
            Ok(filter) => f
                .debug_tuple("UserRow")
                .field(&filter.redact(REDACTION, &line))
                .finish(),
            Err(_) => f.write_str("UserRow(..)"),
        }
    }
}
