use std::fmt;

use serde::Serialize;
use webapp_core::serde::{REDACTED, redacted};
use webapp_core::{ConfigResult, EnvSnapshot};

use crate::keys;

pub const SMTP_BACKEND: &str = "django.core.mail.backends.smtp.EmailBackend";
pub const DEFAULT_FROM_EMAIL: &str = "info@django-app.com";

#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct EmailSettings {
    pub backend: String,
    pub host: String,
    pub use_tls: bool,
    pub port: u16,
    pub host_user: String,
    #[serde(serialize_with = "redacted")]
    host_password: String,
    pub default_from_email: String,
}

impl fmt::Debug for EmailSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailSettings")
            .field("backend", &self.backend)
            .field("host", &self.host)
            .field("use_tls", &self.use_tls)
            .field("port", &self.port)
            .field("host_user", &self.host_user)
            .field("host_password", &REDACTED)
            .field("default_from_email", &self.default_from_email)
            .finish()
    }
}

impl EmailSettings {
    /// All five `EMAIL_*` keys are required. `EMAIL_USE_TLS` is on only for
    /// the literal `True`.
    pub fn from_env(env: &EnvSnapshot) -> ConfigResult<Self> {
        Ok(Self {
            backend: SMTP_BACKEND.to_string(),
            host: env.required(keys::EMAIL_HOST)?.to_string(),
            use_tls: env.flag(keys::EMAIL_USE_TLS)?,
            port: env.port(keys::EMAIL_PORT)?,
            host_user: env.required(keys::EMAIL_HOST_USER)?.to_string(),
            host_password: env.required(keys::EMAIL_HOST_PASSWORD)?.to_string(),
            default_from_email: DEFAULT_FROM_EMAIL.to_string(),
        })
    }

    pub fn host_password(&self) -> &str {
        &self.host_password
    }
}
