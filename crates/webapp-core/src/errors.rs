use std::path::PathBuf;

use thiserror::Error;

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Reasons settings resolution can abort.
///
/// Resolution is all-or-nothing: any of these stops startup before a
/// settings record exists.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required configuration: {key} must be set to a non-empty value")]
    MissingRequired { key: String },

    #[error("invalid value for {key}: {value:?} ({reason})")]
    Invalid {
        key: String,
        value: String,
        reason: String,
    },

    #[error("failed to read env file {}: {source}", path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}

impl ConfigError {
    pub fn missing(key: impl Into<String>) -> Self {
        Self::MissingRequired { key: key.into() }
    }

    pub fn invalid(
        key: impl Into<String>,
        value: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        Self::Invalid {
            key: key.into(),
            value: value.into(),
            reason: reason.to_string(),
        }
    }

    /// The environment key this error is about, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::MissingRequired { key } | Self::Invalid { key, .. } => Some(key),
            Self::EnvFile { .. } => None,
        }
    }
}
