//! Logging sinks and per-logger levels.
//!
//! Two handlers exist: the console and an append-mode log file. The root
//! logger writes to both; named loggers can narrow that down. A logger
//! name matches the `target` of a log event by prefix.

use std::fmt;
use std::path::PathBuf;

use serde::{Serialize, Serializer};

pub const DEFAULT_LOG_FILE: &str = "logs/django-app.log";

/// Logger for application code, printed on the console only.
pub const APPS_LOGGER: &str = "apps";
/// Logger for the development server's request lines.
pub const SERVER_LOGGER: &str = "server";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        }
    }

    /// Level in `tracing` filter-directive syntax.
    pub const fn directive(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warn",
            Self::Error | Self::Critical => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for LogLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Handler {
    Console,
    File,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoggerOverride {
    pub name: String,
    pub level: LogLevel,
    pub handlers: Vec<Handler>,
}

impl LoggerOverride {
    pub fn new(name: impl Into<String>, level: LogLevel, handlers: &[Handler]) -> Self {
        Self {
            name: name.into(),
            level,
            handlers: handlers.to_vec(),
        }
    }

    pub fn writes_to(&self, handler: Handler) -> bool {
        self.handlers.contains(&handler)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoggingSettings {
    pub root_level: LogLevel,
    pub root_handlers: Vec<Handler>,
    pub file: PathBuf,
    /// Events below this level never reach the file.
    pub file_level: LogLevel,
    pub loggers: Vec<LoggerOverride>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            root_level: LogLevel::Info,
            root_handlers: vec![Handler::Console, Handler::File],
            file: PathBuf::from(DEFAULT_LOG_FILE),
            file_level: LogLevel::Info,
            loggers: vec![
                LoggerOverride::new(APPS_LOGGER, LogLevel::Info, &[Handler::Console]),
                LoggerOverride::new(SERVER_LOGGER, LogLevel::Info, &[Handler::Console]),
            ],
        }
    }
}

impl LoggingSettings {
    pub fn logger(&self, name: &str) -> Option<&LoggerOverride> {
        self.loggers.iter().find(|l| l.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.root_level, LogLevel::Info);
        assert_eq!(logging.root_handlers, vec![Handler::Console, Handler::File]);
        assert_eq!(logging.file, PathBuf::from("logs/django-app.log"));

        let apps = logging.logger("apps").unwrap();
        assert!(apps.writes_to(Handler::Console));
        assert!(!apps.writes_to(Handler::File));
    }

    #[test]
    fn test_level_names() {
        assert_eq!(LogLevel::Warning.to_string(), "WARNING");
        assert_eq!(LogLevel::Warning.directive(), "warn");
        assert_eq!(LogLevel::Critical.directive(), "error");
        assert!(LogLevel::Debug < LogLevel::Error);
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_value(LoggingSettings::default()).unwrap();
        assert_eq!(json["root_level"], "INFO");
        assert_eq!(json["root_handlers"][1], "file");
        assert_eq!(json["loggers"][0]["name"], "apps");
    }
}
