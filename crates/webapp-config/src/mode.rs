use std::fmt;

use serde::{Serialize, Serializer};
use webapp_core::{ConfigResult, EnvSnapshot};

use crate::keys;

/// `APP_ENV` value that selects production behaviour.
pub const PRODUCTION: &str = "production";

/// Deployment mode read once from `APP_ENV`.
///
/// Only the exact value `production` counts as production; every other
/// value keeps its name and behaves as a local/non-production mode.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum DeploymentMode {
    Production,
    NonProduction(String),
}

impl DeploymentMode {
    pub fn from_env(env: &EnvSnapshot) -> ConfigResult<Self> {
        Ok(Self::parse(env.required(keys::APP_ENV)?))
    }

    pub fn parse(value: &str) -> Self {
        if value == PRODUCTION {
            Self::Production
        } else {
            Self::NonProduction(value.to_string())
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Production => PRODUCTION,
            Self::NonProduction(name) => name,
        }
    }
}

impl fmt::Display for DeploymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for DeploymentMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
