use std::fmt;

use serde::Serialize;
use webapp_core::serde::{REDACTED, redacted};
use webapp_core::{ConfigResult, EnvSnapshot};

use crate::keys;

/// Host pattern that accepts every `Host` header.
pub const ANY_HOST: &str = "*";

#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct SecuritySettings {
    #[serde(serialize_with = "redacted")]
    secret_key: String,
    pub debug: bool,
    pub allowed_hosts: Vec<String>,
}

impl fmt::Debug for SecuritySettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecuritySettings")
            .field("secret_key", &REDACTED)
            .field("debug", &self.debug)
            .field("allowed_hosts", &self.allowed_hosts)
            .finish()
    }
}

impl SecuritySettings {
    pub fn new(secret_key: impl Into<String>, debug: bool, allowed_hosts: Vec<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
            debug,
            allowed_hosts,
        }
    }

    /// `SECRET_KEY` and `ALLOWED_HOSTS` are required; `DEBUG` defaults to off.
    pub fn from_env(env: &EnvSnapshot) -> ConfigResult<Self> {
        Ok(Self {
            secret_key: env.required(keys::SECRET_KEY)?.to_string(),
            debug: env.flag_or(keys::DEBUG, false),
            allowed_hosts: env.list(keys::ALLOWED_HOSTS)?,
        })
    }

    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    pub fn allows_any_host(&self) -> bool {
        self.allowed_hosts.iter().any(|h| h == ANY_HOST)
    }
}
