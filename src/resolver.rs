//! Settings resolution.
//!
//! Resolution layers the environment, then builds the record:
//!
//! 1. `<base>/.env` is overlaid on the initial snapshot
//! 2. `APP_ENV` selects the deployment mode
//! 3. outside production, `<base>/.envs/.local/.mariadb` is overlaid too
//! 4. every section is resolved from the layered snapshot
//! 5. in production, the platform step adjusts the result
//!
//! Missing overlay files are tolerated. A missing required key, a
//! malformed typed value or an unreadable overlay file aborts resolution
//! and no record is produced.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use webapp_config::DeploymentMode;
use webapp_core::{ConfigResult, EnvSnapshot};

use crate::platform;
use crate::settings::Settings;

pub const BASE_ENV_FILE: &str = ".env";

/// Local overlay, relative to the base directory.
pub fn local_overlay_path(base_dir: &Path) -> PathBuf {
    base_dir.join(".envs").join(".local").join(".mariadb")
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolverOptions {
    pub base_dir: PathBuf,
    /// Replaces the default local overlay path when set.
    pub overlay: Option<PathBuf>,
}

impl ResolverOptions {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            overlay: None,
        }
    }

    pub fn with_overlay(mut self, path: impl Into<PathBuf>) -> Self {
        self.overlay = Some(path.into());
        self
    }

    pub fn env_file(&self) -> PathBuf {
        self.base_dir.join(BASE_ENV_FILE)
    }

    pub fn overlay_file(&self) -> PathBuf {
        self.overlay
            .clone()
            .unwrap_or_else(|| local_overlay_path(&self.base_dir))
    }
}

/// Whether one overlay file was found and applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnvFileStatus {
    pub path: PathBuf,
    pub applied: bool,
}

/// A snapshot after overlays, with the mode it selected.
#[derive(Clone, Debug)]
pub struct Layered {
    pub env: EnvSnapshot,
    pub mode: DeploymentMode,
    /// Files in the order they were considered.
    pub files: Vec<EnvFileStatus>,
}

#[derive(Clone, Debug)]
pub struct ConfigResolver {
    options: ResolverOptions,
}

impl ConfigResolver {
    pub fn new(options: ResolverOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    /// Resolve starting from the current process environment.
    pub fn resolve_from_process(&self) -> ConfigResult<Settings> {
        self.resolve(EnvSnapshot::from_process())
    }

    /// Resolve starting from `env`.
    ///
    /// Deterministic: the same snapshot and the same file contents always
    /// produce equal records.
    pub fn resolve(&self, env: EnvSnapshot) -> ConfigResult<Settings> {
        self.resolve_with_files(env).map(|(settings, _)| settings)
    }

    /// Like [`resolve`](Self::resolve), also reporting which overlay files
    /// were applied.
    pub fn resolve_with_files(
        &self,
        env: EnvSnapshot,
    ) -> ConfigResult<(Settings, Vec<EnvFileStatus>)> {
        let Layered { env, mode, files } = self.layer(env)?;

        let settings = Settings::from_env(&env, mode, &self.options.base_dir)?;
        let settings = if settings.mode.is_production() {
            platform::apply(settings, &env)?
        } else {
            settings
        };

        info!(
            mode = %settings.mode,
            debug = settings.security.debug,
            allowed_hosts = settings.security.allowed_hosts.len(),
            "Settings resolved"
        );
        Ok((settings, files))
    }

    /// Apply the overlay files to `env` and read the deployment mode.
    pub fn layer(&self, mut env: EnvSnapshot) -> ConfigResult<Layered> {
        let env_file = self.options.env_file();
        let applied = env.overlay_file(&env_file)?;
        log_env_file(&env_file, applied);
        let mut files = vec![EnvFileStatus {
            path: env_file,
            applied,
        }];

        let mode = DeploymentMode::from_env(&env)?;

        if !mode.is_production() {
            let overlay = self.options.overlay_file();
            let applied = env.overlay_file(&overlay)?;
            log_env_file(&overlay, applied);
            files.push(EnvFileStatus {
                path: overlay,
                applied,
            });
        }

        Ok(Layered { env, mode, files })
    }
}

pub fn log_env_file(path: &Path, applied: bool) {
    if applied {
        debug!(file = %path.display(), "Applied env file");
    } else {
        warn!(file = %path.display(), "Env file not found");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let options = ResolverOptions::new("/srv/app");
        assert_eq!(options.env_file(), PathBuf::from("/srv/app/.env"));
        assert_eq!(
            options.overlay_file(),
            PathBuf::from("/srv/app/.envs/.local/.mariadb")
        );
    }

    #[test]
    fn test_explicit_overlay() {
        let options = ResolverOptions::new("/srv/app").with_overlay("/etc/app/db.env");
        assert_eq!(options.overlay_file(), PathBuf::from("/etc/app/db.env"));
    }

    #[test]
    fn test_layer_reports_missing_files() {
        let resolver = ConfigResolver::new(ResolverOptions::new("/nonexistent"));
        let layered = resolver
            .layer(EnvSnapshot::from_pairs([("APP_ENV", "local")]))
            .unwrap();

        assert_eq!(
            layered.files,
            vec![
                EnvFileStatus {
                    path: PathBuf::from("/nonexistent/.env"),
                    applied: false,
                },
                EnvFileStatus {
                    path: PathBuf::from("/nonexistent/.envs/.local/.mariadb"),
                    applied: false,
                },
            ]
        );
    }

    #[test]
    fn test_layer_requires_app_env() {
        let resolver = ConfigResolver::new(ResolverOptions::new("/nonexistent"));
        let err = resolver.layer(EnvSnapshot::new()).unwrap_err();
        assert_eq!(err.key(), Some("APP_ENV"));
    }
}
