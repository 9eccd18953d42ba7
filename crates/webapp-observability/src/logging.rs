use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use webapp_config::{Handler, LogLevel, LoggingSettings};

use crate::format::LineFormat;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to create log directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("log file path {} has no file name", .0.display())]
    InvalidPath(PathBuf),

    #[error("failed to open log file: {0}")]
    Appender(#[from] InitError),

    #[error("invalid log filter: {0}")]
    Filter(#[from] ParseError),

    #[error("a global logger is already installed")]
    AlreadyInitialized,
}

/// Filter directives for one handler.
///
/// The root logger sets the default level (or `off` when it does not write
/// to this handler). Each named logger either gets its own level or is
/// switched off for this handler. `floor` raises every level to at least
/// the handler's own minimum.
fn directives(settings: &LoggingSettings, handler: Handler, floor: LogLevel) -> String {
    let level = |l: LogLevel| l.max(floor).directive();

    let root = if settings.root_handlers.contains(&handler) {
        level(settings.root_level)
    } else {
        "off"
    };

    std::iter::once(root.to_string())
        .chain(settings.loggers.iter().map(|logger| {
            let directive = if logger.writes_to(handler) {
                level(logger.level)
            } else {
                "off"
            };
            format!("{}={}", logger.name, directive)
        }))
        .collect::<Vec<_>>()
        .join(",")
}

pub fn console_directives(settings: &LoggingSettings) -> String {
    directives(settings, Handler::Console, LogLevel::Debug)
}

pub fn file_directives(settings: &LoggingSettings) -> String {
    directives(settings, Handler::File, settings.file_level)
}

fn file_appender(path: &Path) -> Result<RollingFileAppender, LoggingError> {
    let file_name = path
        .file_name()
        .ok_or_else(|| LoggingError::InvalidPath(path.to_path_buf()))?;

    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(|source| LoggingError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    // Rotation::NEVER appends to the exact file name, no date suffix
    Ok(RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy().into_owned())
        .build(dir)?)
}

/// Install the global subscriber: console on stderr plus the log file.
///
/// May only succeed once per process; later calls return
/// [`LoggingError::AlreadyInitialized`].
pub fn init_logging(settings: &LoggingSettings) -> Result<(), LoggingError> {
    let console_filter = EnvFilter::try_new(console_directives(settings))?;
    let file_filter = EnvFilter::try_new(file_directives(settings))?;
    let appender = file_appender(&settings.file)?;

    let console_layer = fmt::layer()
        .event_format(LineFormat)
        .with_writer(io::stderr)
        .with_filter(console_filter);

    let file_layer = fmt::layer()
        .event_format(LineFormat)
        .with_ansi(false)
        .with_writer(appender)
        .with_filter(file_filter);

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|_| LoggingError::AlreadyInitialized)?;

    tracing::debug!(
        file = %settings.file.display(),
        root_level = %settings.root_level,
        "Logging initialized"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use webapp_config::LoggerOverride;

    #[test]
    fn test_default_console_directives() {
        assert_eq!(
            console_directives(&LoggingSettings::default()),
            "info,apps=info,server=info"
        );
    }

    #[test]
    fn test_default_file_directives_exclude_console_only_loggers() {
        assert_eq!(
            file_directives(&LoggingSettings::default()),
            "info,apps=off,server=off"
        );
    }

    #[test]
    fn test_file_level_is_a_floor() {
        let settings = LoggingSettings {
            root_level: LogLevel::Debug,
            file_level: LogLevel::Warning,
            loggers: vec![LoggerOverride::new(
                "audit",
                LogLevel::Info,
                &[Handler::Console, Handler::File],
            )],
            ..LoggingSettings::default()
        };

        assert_eq!(file_directives(&settings), "warn,audit=warn");
        assert_eq!(console_directives(&settings), "debug,audit=info");
    }

    #[test]
    fn test_root_without_file_handler() {
        let settings = LoggingSettings {
            root_handlers: vec![Handler::Console],
            loggers: vec![],
            ..LoggingSettings::default()
        };
        assert_eq!(file_directives(&settings), "off");
    }

    #[test]
    fn test_directives_parse() {
        let settings = LoggingSettings::default();
        assert!(EnvFilter::try_new(console_directives(&settings)).is_ok());
        assert!(EnvFilter::try_new(file_directives(&settings)).is_ok());
    }

    #[test]
    fn test_file_appender_creates_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nested").join("app.log");

        file_appender(&path).unwrap();
        assert!(tmp.path().join("nested").is_dir());
    }

    #[test]
    fn test_file_appender_rejects_directory_path() {
        let err = file_appender(Path::new("/")).unwrap_err();
        assert!(matches!(err, LoggingError::InvalidPath(_)));
    }

    #[test]
    fn test_init_logging_once() {
        let tmp = tempfile::tempdir().unwrap();
        let settings = LoggingSettings {
            file: tmp.path().join("logs").join("django-app.log"),
            ..LoggingSettings::default()
        };

        init_logging(&settings).unwrap();
        tracing::info!(target: "probe", "written to file");
        tracing::info!(target: "apps", "console only");

        let contents = std::fs::read_to_string(&settings.file).unwrap();
        assert!(contents.contains("probe        INFO     written to file"));
        assert!(!contents.contains("console only"));

        assert!(matches!(
            init_logging(&settings),
            Err(LoggingError::AlreadyInitialized)
        ));
    }
}
