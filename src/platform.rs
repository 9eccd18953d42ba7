//! Production adjustments for the hosting platform.
//!
//! Only applied when the deployment mode is production:
//!
//! - a `DATABASE_URL`, when present, replaces the `MARIADB_*` connection,
//!   keeps connections for [`CONN_MAX_AGE`] seconds and requires TLS
//! - every host is allowed; the platform router fronts the app
//! - static files are collected into `<base>/staticfiles` and served from
//!   compressed, hashed copies

use tracing::info;
use webapp_config::assets::COMPRESSED_MANIFEST_STORAGE;
use webapp_config::keys;
use webapp_config::security::ANY_HOST;
use webapp_core::{ConfigResult, EnvSnapshot};

use crate::settings::Settings;

/// Seconds a database connection may be reused.
pub const CONN_MAX_AGE: u64 = 600;

pub const STATIC_ROOT_DIR: &str = "staticfiles";

pub fn apply(mut settings: Settings, env: &EnvSnapshot) -> ConfigResult<Settings> {
    if let Some(url) = env.get(keys::DATABASE_URL).filter(|u| !u.is_empty()) {
        settings.database = settings.database.with_url(url, CONN_MAX_AGE, true)?;
        info!("Database connection taken from DATABASE_URL");
    }

    settings.security.allowed_hosts = vec![ANY_HOST.to_string()];
    settings.assets.static_root = settings.base_dir.join(STATIC_ROOT_DIR);
    settings.assets.staticfiles_storage = Some(COMPRESSED_MANIFEST_STORAGE.to_string());

    Ok(settings)
}
