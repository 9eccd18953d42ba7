//! Ordered middleware stack.
//!
//! The first entry wraps every other one, so it sees the request first and
//! the response last. The default stack lists `Common` twice; the order is
//! kept exactly as declared.

use std::fmt;

use serde::{Serialize, Serializer};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Middleware {
    Cors,
    Common,
    Security,
    WhiteNoise,
    Sessions,
    Csrf,
    Authentication,
    Messages,
    XFrameOptions,
}

impl Middleware {
    /// Dotted path the host framework loads this middleware from.
    pub const fn path(self) -> &'static str {
        match self {
            Self::Cors => "corsheaders.middleware.CorsMiddleware",
            Self::Common => "django.middleware.common.CommonMiddleware",
            Self::Security => "django.middleware.security.SecurityMiddleware",
            Self::WhiteNoise => "whitenoise.middleware.WhiteNoiseMiddleware",
            Self::Sessions => "django.contrib.sessions.middleware.SessionMiddleware",
            Self::Csrf => "django.middleware.csrf.CsrfViewMiddleware",
            Self::Authentication => "django.contrib.auth.middleware.AuthenticationMiddleware",
            Self::Messages => "django.contrib.messages.middleware.MessageMiddleware",
            Self::XFrameOptions => "django.middleware.clickjacking.XFrameOptionsMiddleware",
        }
    }

    /// Whether this middleware only exists inside the host framework, with
    /// no header-level counterpart that can be mounted from here.
    pub const fn is_host_provided(self) -> bool {
        !matches!(self, Self::Cors | Self::Security | Self::XFrameOptions)
    }
}

impl fmt::Display for Middleware {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl Serialize for Middleware {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.path())
    }
}

pub const DEFAULT_ORDER: &[Middleware] = &[
    Middleware::Cors,
    Middleware::Common,
    Middleware::Security,
    Middleware::WhiteNoise,
    Middleware::Sessions,
    Middleware::Common,
    Middleware::Csrf,
    Middleware::Authentication,
    Middleware::Messages,
    Middleware::XFrameOptions,
];

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MiddlewareStack(Vec<Middleware>);

impl Default for MiddlewareStack {
    fn default() -> Self {
        Self(DEFAULT_ORDER.to_vec())
    }
}

impl MiddlewareStack {
    pub fn new(order: Vec<Middleware>) -> Self {
        Self(order)
    }

    /// Outermost first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Middleware> + '_ {
        self.0.iter().copied()
    }

    pub fn paths(&self) -> Vec<&'static str> {
        self.iter().map(Middleware::path).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, middleware: Middleware) -> bool {
        self.0.contains(&middleware)
    }

    /// Index of the first occurrence.
    pub fn position(&self, middleware: Middleware) -> Option<usize> {
        self.0.iter().position(|m| *m == middleware)
    }
}
