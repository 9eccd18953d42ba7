use serde::Serialize;
use validator::ValidateUrl;
use webapp_core::{ConfigError, ConfigResult, EnvSnapshot};

use crate::keys;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CorsSettings {
    pub allowed_origins: Vec<String>,
}

impl CorsSettings {
    /// Reads the space-delimited `CORS_ALLOWED_ORIGINS`.
    ///
    /// Every origin must be `scheme://host[:port]` with no path.
    pub fn from_env(env: &EnvSnapshot) -> ConfigResult<Self> {
        let allowed_origins = env.list(keys::CORS_ALLOWED_ORIGINS)?;

        for origin in &allowed_origins {
            check_origin(origin)
                .map_err(|reason| ConfigError::invalid(keys::CORS_ALLOWED_ORIGINS, origin, reason))?;
        }

        Ok(Self { allowed_origins })
    }

    pub fn allows(&self, origin: &str) -> bool {
        self.allowed_origins.iter().any(|o| o == origin)
    }
}

fn check_origin(origin: &str) -> Result<(), &'static str> {
    if !origin.to_string().validate_url() {
        return Err("origin is not an absolute URL");
    }
    match origin.split_once("://") {
        Some((_, authority)) if !authority.is_empty() && !authority.contains('/') => Ok(()),
        Some(_) => Err("origin must not contain a path"),
        None => Err("origin is missing a scheme"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cors(value: &str) -> ConfigResult<CorsSettings> {
        CorsSettings::from_env(&EnvSnapshot::from_pairs([("CORS_ALLOWED_ORIGINS", value)]))
    }

    #[test]
    fn test_from_env() {
        let settings = cors("http://localhost:3000 https://app.example.com").unwrap();
        assert_eq!(
            settings.allowed_origins,
            vec!["http://localhost:3000", "https://app.example.com"]
        );
        assert!(settings.allows("http://localhost:3000"));
        assert!(!settings.allows("http://localhost:5173"));
    }

    #[test]
    fn test_missing() {
        assert!(matches!(
            CorsSettings::from_env(&EnvSnapshot::new()),
            Err(ConfigError::MissingRequired { .. })
        ));
    }

    #[test]
    fn test_rejects_bare_host() {
        assert!(matches!(cors("example.com"), Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_rejects_path() {
        assert!(matches!(
            cors("https://example.com/app"),
            Err(ConfigError::Invalid { .. })
        ));
        assert!(matches!(
            cors("https://example.com/"),
            Err(ConfigError::Invalid { .. })
        ));
    }
}
