//! The environment snapshot settings are resolved from.
//!
//! A snapshot starts from the process environment (or explicit pairs) and
//! can be overlaid by dotenv files. Later sources override earlier ones.
//! Once resolution starts the snapshot is only read, through the typed
//! readers below.
//!
//! # Coercion rules
//!
//! - flags are true only for the literal `"True"`; anything else is false
//! - lists are split on whitespace, order preserved, empty items dropped
//! - ports and other numbers are parsed and rejected when malformed

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::errors::{ConfigError, ConfigResult};
use crate::interpolate;

/// Literal that turns a flag on.
pub const TRUE_LITERAL: &str = "True";

/// Ordered name → value map of environment variables.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: BTreeMap<String, String>,
}

impl fmt::Debug for EnvSnapshot {
    // values routinely hold credentials, so only names are printed
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvSnapshot")
            .field("keys", &self.vars.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl EnvSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture the current process environment.
    ///
    /// Variables whose name or value is not valid UTF-8 are skipped.
    pub fn from_process() -> Self {
        Self::from_pairs(
            std::env::vars_os()
                .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?))),
        )
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Set a single variable, returning the value it replaced.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.vars.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.vars.remove(key)
    }

    /// Merge the pairs of a dotenv file on top of this snapshot.
    ///
    /// Returns `Ok(false)` without touching the snapshot when the file does
    /// not exist. A file that exists but cannot be read or parsed is an
    /// error, and in that case nothing from it is applied.
    ///
    /// `$NAME` and `${NAME}` in values refer to earlier lines of the same
    /// file, then to this snapshot. The process environment is never
    /// consulted; unknown names expand to an empty string.
    pub fn overlay_file(&mut self, path: impl AsRef<Path>) -> ConfigResult<bool> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(false);
        }

        let env_file_error = |source| ConfigError::EnvFile {
            path: path.to_path_buf(),
            source,
        };

        let text = std::fs::read_to_string(path)
            .map_err(|e| env_file_error(dotenvy::Error::Io(e)))?;
        let masked = interpolate::mask_references(&text);
        let pairs = dotenvy::from_read_iter(masked.as_bytes())
            .collect::<Result<Vec<(String, String)>, _>>()
            .map_err(env_file_error)?;

        let mut applied: BTreeMap<String, String> = BTreeMap::new();
        for (key, raw) in pairs {
            let value = interpolate::expand(&raw, |name| {
                applied.get(name).or_else(|| self.vars.get(name)).cloned()
            });
            applied.insert(key, value);
        }

        self.vars.extend(applied);
        Ok(true)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.vars.keys().map(String::as_str)
    }

    /// A value that must be present and non-empty.
    pub fn required(&self, key: &str) -> ConfigResult<&str> {
        match self.get(key) {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(ConfigError::missing(key)),
        }
    }

    /// Required flag: `"True"` is true, every other value is false.
    pub fn flag(&self, key: &str) -> ConfigResult<bool> {
        self.required(key).map(|value| value == TRUE_LITERAL)
    }

    /// Optional flag, `default` when absent.
    pub fn flag_or(&self, key: &str, default: bool) -> bool {
        self.get(key)
            .map(|value| value == TRUE_LITERAL)
            .unwrap_or(default)
    }

    /// Required whitespace-delimited list.
    pub fn list(&self, key: &str) -> ConfigResult<Vec<String>> {
        let items: Vec<String> = self
            .required(key)?
            .split_whitespace()
            .map(str::to_string)
            .collect();

        if items.is_empty() {
            return Err(ConfigError::missing(key));
        }
        Ok(items)
    }

    /// Required value parsed with [`FromStr`].
    pub fn parse<T>(&self, key: &str) -> ConfigResult<T>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        let raw = self.required(key)?;
        raw.trim()
            .parse()
            .map_err(|e| ConfigError::invalid(key, raw, e))
    }

    /// Required TCP port.
    pub fn port(&self, key: &str) -> ConfigResult<u16> {
        let port: u16 = self.parse(key)?;
        if port == 0 {
            return Err(ConfigError::invalid(key, "0", "port must be between 1 and 65535"));
        }
        Ok(port)
    }
}

impl<K, V> FromIterator<(K, V)> for EnvSnapshot
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}
