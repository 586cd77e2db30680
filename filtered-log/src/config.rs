//! Database connection settings read from the environment.
//!
//! Only the settings are modeled; no connection is opened here.

use std::{env, fmt};

use crate::error::ConfigError;

const USERNAME_VAR: &str = "PERSONAL_DATA_DB_USERNAME";
const PASSWORD_VAR: &str = "PERSONAL_DATA_DB_PASSWORD";
const HOST_VAR: &str = "PERSONAL_DATA_DB_HOST";
const NAME_VAR: &str = "PERSONAL_DATA_DB_NAME";

/// Credentials and location of the user database.
///
/// `Debug` never prints the password.
#[derive(Clone, PartialEq, Eq)]
pub struct DbSettings {
    /// Login name, `root` when unset.
    pub username: String,
    /// Login password, empty when unset.
    pub password: String,
    /// Server host, `localhost` when unset.
    pub host: String,
    /// Database name, if set.
    pub database: Option<String>,
}

impl Default for DbSettings {
    fn default() -> Self {
        Self {
            username: "root".to_string(),
            password: String::new(),
            host: "localhost".to_string(),
            database: None,
        }
    }
}

impl DbSettings {
    /// Reads `PERSONAL_DATA_DB_USERNAME`, `PERSONAL_DATA_DB_PASSWORD`,
    /// `PERSONAL_DATA_DB_HOST` and `PERSONAL_DATA_DB_NAME`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Like [`DbSettings::from_env`], reading values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            username: lookup(USERNAME_VAR).unwrap_or(defaults.username),
            password: lookup(PASSWORD_VAR).unwrap_or(defaults.password),
            host: lookup(HOST_VAR).unwrap_or(defaults.host),
            database: lookup(NAME_VAR),
        }
    }

    /// The database name, which has no default.
    pub fn database(&self) -> Result<&str, ConfigError> {
        self.database
            .as_deref()
            .ok_or(ConfigError::MissingEnv(NAME_VAR))
    }
}

impl fmt::Debug for DbSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbSettings")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("host", &self.host)
            .field("database", &self.database)
            .finish()
    }
}
