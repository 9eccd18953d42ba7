use std::path::{Path, PathBuf};

use serde::Serialize;
use webapp_config::{
    AppRegistry, AssetSettings, CorsSettings, DatabaseSettings, DeploymentMode, EmailSettings,
    EntryPoints, JwtSettings, LocaleSettings, LoggingSettings, MiddlewareStack, PasswordPolicy,
    RestSettings, SecuritySettings, SiteSettings, TemplateSettings,
};
use webapp_core::{ConfigResult, EnvSnapshot};

/// The resolved, immutable configuration handed to every subsystem.
///
/// Built once by [`ConfigResolver`](crate::resolver::ConfigResolver) and
/// shared afterwards as `Arc<Settings>`. Secrets are redacted from both
/// `Debug` output and serialization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub mode: DeploymentMode,
    pub base_dir: PathBuf,
    pub security: SecuritySettings,
    pub apps: AppRegistry,
    pub middleware: MiddlewareStack,
    pub cors: CorsSettings,
    pub rest: RestSettings,
    pub jwt: JwtSettings,
    pub templates: TemplateSettings,
    pub password_policy: PasswordPolicy,
    pub entry_points: EntryPoints,
    pub locale: LocaleSettings,
    pub assets: AssetSettings,
    pub email: EmailSettings,
    pub site: SiteSettings,
    pub database: DatabaseSettings,
    pub logging: LoggingSettings,
}

impl Settings {
    /// Build every section from an already layered snapshot.
    ///
    /// Sections are read in a fixed order, so the first missing key
    /// reported is deterministic.
    pub fn from_env(env: &EnvSnapshot, mode: DeploymentMode, base_dir: &Path) -> ConfigResult<Self> {
        let security = SecuritySettings::from_env(env)?;
        let cors = CorsSettings::from_env(env)?;
        let locale = LocaleSettings::from_env(env)?;
        let email = EmailSettings::from_env(env)?;
        let site = SiteSettings::from_env(env)?;
        let database = DatabaseSettings::from_env(env)?;

        Ok(Self {
            mode,
            base_dir: base_dir.to_path_buf(),
            jwt: JwtSettings::from_security(&security),
            security,
            apps: AppRegistry::default(),
            middleware: MiddlewareStack::default(),
            cors,
            rest: RestSettings::default(),
            templates: TemplateSettings::for_base_dir(base_dir),
            password_policy: PasswordPolicy::default(),
            entry_points: EntryPoints::default(),
            locale,
            assets: AssetSettings::for_base_dir(base_dir),
            email,
            site,
            database,
            logging: LoggingSettings::default(),
        })
    }
}
