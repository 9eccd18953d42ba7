//! Webapp Observability Module
//!
//! Installs the process-wide `tracing` subscriber described by
//! [`LoggingSettings`](webapp_config::LoggingSettings):
//! - a console sink and an append-mode file sink
//! - per-logger level overrides expressed as filter directives
//! - a fixed `<time> <logger> <LEVEL> <message>` line format
//!
//! # Examples
//!
//! ```no_run
//! use webapp_config::LoggingSettings;
//! use webapp_observability::init_logging;
//!
//! init_logging(&LoggingSettings::default()).expect("logging already installed");
//! tracing::info!(target: "apps", "ready");
//! ```

pub mod format;
pub mod logging;

pub use format::LineFormat;
pub use logging::{LoggingError, console_directives, file_directives, init_logging};
