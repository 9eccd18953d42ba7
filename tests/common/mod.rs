use std::fs;
use std::path::Path;

use tempfile::TempDir;
use webapp::resolver::{ConfigResolver, ResolverOptions, local_overlay_path};
use webapp::webapp_core::EnvSnapshot;

/// Every key a complete non-production setup needs.
pub const FULL_ENV: &[(&str, &str)] = &[
    ("APP_ENV", "local"),
    ("SECRET_KEY", "test_secret_key_for_testing_purposes"),
    ("DEBUG", "True"),
    ("ALLOWED_HOSTS", "localhost 127.0.0.1"),
    (
        "CORS_ALLOWED_ORIGINS",
        "http://localhost:3000 https://app.example.com",
    ),
    ("TIME_ZONE", "Africa/Lagos"),
    ("EMAIL_HOST", "smtp.example.com"),
    ("EMAIL_USE_TLS", "True"),
    ("EMAIL_PORT", "587"),
    ("EMAIL_HOST_USER", "mailer@example.com"),
    ("EMAIL_HOST_PASSWORD", "mail-password"),
    ("DOMAIN", "app.example.com"),
    ("MARIADB_DATABASE", "webapp"),
    ("MARIADB_USER", "webapp"),
    ("MARIADB_PASSWORD", "db-password"),
    ("MARIADB_HOST", "127.0.0.1"),
    ("MARIADB_PORT", "3306"),
];

pub fn full_env() -> EnvSnapshot {
    EnvSnapshot::from_pairs(FULL_ENV.iter().copied())
}

#[allow(dead_code)]
pub fn env_with(overrides: &[(&str, &str)]) -> EnvSnapshot {
    let mut env = full_env();
    for (key, value) in overrides {
        env.set(*key, *value);
    }
    env
}

#[allow(dead_code)]
pub fn env_without(key: &str) -> EnvSnapshot {
    let mut env = full_env();
    env.remove(key);
    env
}

/// Empty project directory: no `.env`, no `.envs/`.
pub fn project_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

#[allow(dead_code)]
pub fn write_env_file(base: &Path, contents: &str) {
    fs::write(base.join(".env"), contents).unwrap();
}

#[allow(dead_code)]
pub fn write_local_overlay(base: &Path, contents: &str) {
    let path = local_overlay_path(base);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

pub fn resolver(base: &Path) -> ConfigResolver {
    ConfigResolver::new(ResolverOptions::new(base))
}
