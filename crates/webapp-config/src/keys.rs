//! # Environment Keys
//!
//! Names of the environment variables the settings are resolved from.
//! Sections refer to these constants rather than string literals so a
//! rename happens in one place, and [`ALL`] drives the `keys` command.

pub const APP_ENV: &str = "APP_ENV";
pub const SECRET_KEY: &str = "SECRET_KEY";
pub const DEBUG: &str = "DEBUG";
pub const ALLOWED_HOSTS: &str = "ALLOWED_HOSTS";
pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
pub const TIME_ZONE: &str = "TIME_ZONE";

pub const EMAIL_HOST: &str = "EMAIL_HOST";
pub const EMAIL_USE_TLS: &str = "EMAIL_USE_TLS";
pub const EMAIL_PORT: &str = "EMAIL_PORT";
pub const EMAIL_HOST_USER: &str = "EMAIL_HOST_USER";
pub const EMAIL_HOST_PASSWORD: &str = "EMAIL_HOST_PASSWORD";
pub const DOMAIN: &str = "DOMAIN";

pub const MARIADB_DATABASE: &str = "MARIADB_DATABASE";
pub const MARIADB_USER: &str = "MARIADB_USER";
pub const MARIADB_PASSWORD: &str = "MARIADB_PASSWORD";
pub const MARIADB_HOST: &str = "MARIADB_HOST";
pub const MARIADB_PORT: &str = "MARIADB_PORT";

/// Only consulted in production, by the platform step.
pub const DATABASE_URL: &str = "DATABASE_URL";

/// Description of one consumed environment variable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnvKey {
    pub name: &'static str,
    pub required: bool,
    pub description: &'static str,
}

const fn required(name: &'static str, description: &'static str) -> EnvKey {
    EnvKey {
        name,
        required: true,
        description,
    }
}

const fn optional(name: &'static str, description: &'static str) -> EnvKey {
    EnvKey {
        name,
        required: false,
        description,
    }
}

/// Every key the settings read, in resolution order.
pub const ALL: &[EnvKey] = &[
    required(APP_ENV, "deployment mode; \"production\" skips the local overlay"),
    required(SECRET_KEY, "signing secret for sessions and tokens"),
    optional(DEBUG, "\"True\" enables debug mode (default off)"),
    required(ALLOWED_HOSTS, "space-delimited host names"),
    required(CORS_ALLOWED_ORIGINS, "space-delimited origins, e.g. https://app.example.com"),
    required(TIME_ZONE, "IANA time zone name"),
    required(EMAIL_HOST, "SMTP server host"),
    required(EMAIL_USE_TLS, "\"True\" upgrades SMTP with STARTTLS"),
    required(EMAIL_PORT, "SMTP server port"),
    required(EMAIL_HOST_USER, "SMTP user name"),
    required(EMAIL_HOST_PASSWORD, "SMTP password"),
    required(DOMAIN, "public domain used in outgoing links"),
    required(MARIADB_DATABASE, "database name"),
    required(MARIADB_USER, "database user"),
    required(MARIADB_PASSWORD, "database password"),
    required(MARIADB_HOST, "database host"),
    required(MARIADB_PORT, "database port"),
    optional(DATABASE_URL, "production only: overrides the MARIADB_* connection"),
];

/// Names of the keys resolution cannot do without.
pub fn required_keys() -> impl Iterator<Item = &'static str> {
    ALL.iter().filter(|k| k.required).map(|k| k.name)
}
