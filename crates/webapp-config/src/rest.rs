//! REST framework wiring and token authentication settings.
//!
//! The REST layer itself is provided by the host; this module only carries
//! the class names it should load and the JWT parameters it should sign and
//! verify tokens with.

use std::fmt;

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Validation};
use serde::Serialize;
use webapp_core::serde::{REDACTED, redacted};

use crate::security::SecuritySettings;

pub const TOKEN_AUTHENTICATION: &str = "rest_framework.authentication.TokenAuthentication";
pub const JWT_AUTHENTICATION: &str = "rest_framework_simplejwt.authentication.JWTAuthentication";

/// Scheme expected in front of the token in the `Authorization` header.
pub const JWT_HEADER_TYPE: &str = "JWT";

/// 5 minutes
pub const DEFAULT_ACCESS_TOKEN_LIFETIME: i64 = 300;
/// 1 day
pub const DEFAULT_REFRESH_TOKEN_LIFETIME: i64 = 86_400;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RestSettings {
    pub default_permission_classes: Vec<String>,
    pub default_authentication_classes: Vec<String>,
}

impl Default for RestSettings {
    fn default() -> Self {
        Self {
            default_permission_classes: vec![TOKEN_AUTHENTICATION.to_string()],
            default_authentication_classes: vec![JWT_AUTHENTICATION.to_string()],
        }
    }
}

#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct JwtSettings {
    pub auth_header_types: Vec<String>,
    pub algorithm: Algorithm,
    /// Seconds
    pub access_token_lifetime: i64,
    /// Seconds
    pub refresh_token_lifetime: i64,
    #[serde(serialize_with = "redacted")]
    signing_key: String,
}

impl fmt::Debug for JwtSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtSettings")
            .field("auth_header_types", &self.auth_header_types)
            .field("algorithm", &self.algorithm)
            .field("access_token_lifetime", &self.access_token_lifetime)
            .field("refresh_token_lifetime", &self.refresh_token_lifetime)
            .field("signing_key", &REDACTED)
            .finish()
    }
}

impl JwtSettings {
    /// Tokens are signed with the application secret key.
    pub fn from_security(security: &SecuritySettings) -> Self {
        Self {
            auth_header_types: vec![JWT_HEADER_TYPE.to_string()],
            algorithm: Algorithm::HS256,
            access_token_lifetime: DEFAULT_ACCESS_TOKEN_LIFETIME,
            refresh_token_lifetime: DEFAULT_REFRESH_TOKEN_LIFETIME,
            signing_key: security.secret_key().to_string(),
        }
    }

    pub fn encoding_key(&self) -> EncodingKey {
        EncodingKey::from_secret(self.signing_key.as_bytes())
    }

    pub fn decoding_key(&self) -> DecodingKey {
        DecodingKey::from_secret(self.signing_key.as_bytes())
    }

    pub fn validation(&self) -> Validation {
        Validation::new(self.algorithm)
    }

    /// Extract the raw token from an `Authorization` header value.
    ///
    /// Returns `None` unless the value is `<type> <token>` with `<type>` one
    /// of the configured header types.
    pub fn token_from_header<'a>(&self, header: &'a str) -> Option<&'a str> {
        let (scheme, token) = header.trim().split_once(' ')?;
        let token = token.trim();
        if token.is_empty() || token.contains(' ') {
            return None;
        }
        self.auth_header_types
            .iter()
            .any(|t| t == scheme)
            .then_some(token)
    }
}
