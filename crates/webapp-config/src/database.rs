//! MariaDB connection settings.
//!
//! Resolved from the five `MARIADB_*` keys. On a hosting platform the
//! connection may instead come from a single `DATABASE_URL`, which then
//! takes precedence over the individual fields.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use sqlx::mysql::{MySqlConnectOptions, MySqlSslMode};
use webapp_core::serde::{REDACTED, redacted, redacted_opt};
use webapp_core::{ConfigError, ConfigResult, EnvSnapshot};

use crate::keys;

pub const MYSQL_ENGINE: &str = "django.db.backends.mysql";

#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct DatabaseSettings {
    pub engine: String,
    pub name: String,
    pub user: String,
    #[serde(serialize_with = "redacted")]
    password: String,
    pub host: String,
    pub port: u16,
    #[serde(serialize_with = "redacted_opt")]
    url: Option<String>,
    /// Seconds a connection may be reused; `None` closes it after each request.
    pub conn_max_age: Option<u64>,
    pub ssl_require: bool,
}

impl fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseSettings")
            .field("engine", &self.engine)
            .field("name", &self.name)
            .field("user", &self.user)
            .field("password", &REDACTED)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("url", &self.url.as_ref().map(|_| REDACTED))
            .field("conn_max_age", &self.conn_max_age)
            .field("ssl_require", &self.ssl_require)
            .finish()
    }
}

impl DatabaseSettings {
    pub fn from_env(env: &EnvSnapshot) -> ConfigResult<Self> {
        Ok(Self {
            engine: MYSQL_ENGINE.to_string(),
            name: env.required(keys::MARIADB_DATABASE)?.to_string(),
            user: env.required(keys::MARIADB_USER)?.to_string(),
            password: env.required(keys::MARIADB_PASSWORD)?.to_string(),
            host: env.required(keys::MARIADB_HOST)?.to_string(),
            port: env.port(keys::MARIADB_PORT)?,
            url: None,
            conn_max_age: None,
            ssl_require: false,
        })
    }

    /// Route connections through `url` instead of the individual fields.
    ///
    /// The URL is checked up front so a bad value fails at startup rather
    /// than on first connect. The URL itself is never echoed in the error.
    pub fn with_url(mut self, url: &str, conn_max_age: u64, ssl_require: bool) -> ConfigResult<Self> {
        MySqlConnectOptions::from_str(url)
            .map_err(|e| ConfigError::invalid(keys::DATABASE_URL, REDACTED, e))?;

        self.url = Some(url.to_string());
        self.conn_max_age = Some(conn_max_age);
        self.ssl_require = ssl_require;
        Ok(self)
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Connect options for the ORM's connection layer. Nothing is opened.
    pub fn connect_options(&self) -> ConfigResult<MySqlConnectOptions> {
        let options = match &self.url {
            Some(url) => MySqlConnectOptions::from_str(url)
                .map_err(|e| ConfigError::invalid(keys::DATABASE_URL, REDACTED, e))?,
            None => MySqlConnectOptions::new()
                .host(&self.host)
                .port(self.port)
                .username(&self.user)
                .password(&self.password)
                .database(&self.name),
        };

        Ok(if self.ssl_require {
            options.ssl_mode(MySqlSslMode::Required)
        } else {
            options
        })
    }
}
