//! # Webapp Config
//!
//! Typed settings sections, each resolved from an [`EnvSnapshot`].
//!
//! - [`keys`]: names of every environment variable the settings consume
//! - [`mode`]: deployment mode (production or not)
//! - [`security`]: secret key, debug flag and allowed hosts
//! - [`apps`]: installed application registry
//! - [`middleware`]: ordered middleware stack
//! - [`cors`]: CORS allowed origins
//! - [`rest`]: REST framework classes and JWT settings
//! - [`framework`]: templates, password validators and entry points
//! - [`locale`]: language and time zone
//! - [`assets`]: static and media files
//! - [`email`]: SMTP transport
//! - [`site`]: site identity
//! - [`database`]: MariaDB connection
//! - [`logging`]: log handlers and per-logger levels
//!
//! # Example
//!
//! ```ignore
//! use webapp_config::{CorsSettings, EmailSettings};
//! use webapp_core::EnvSnapshot;
//!
//! let env = EnvSnapshot::from_process();
//! let cors = CorsSettings::from_env(&env)?;
//! let email = EmailSettings::from_env(&env)?;
//! ```
//!
//! [`EnvSnapshot`]: webapp_core::EnvSnapshot

pub mod apps;
pub mod assets;
pub mod cors;
pub mod database;
pub mod email;
pub mod framework;
pub mod keys;
pub mod locale;
pub mod logging;
pub mod middleware;
pub mod mode;
pub mod rest;
pub mod security;
pub mod site;

// Re-export commonly used types at crate root
pub use apps::AppRegistry;
pub use assets::AssetSettings;
pub use cors::CorsSettings;
pub use database::DatabaseSettings;
pub use email::EmailSettings;
pub use framework::{EntryPoints, PasswordPolicy, TemplateSettings};
pub use locale::LocaleSettings;
pub use logging::{Handler, LogLevel, LoggerOverride, LoggingSettings};
pub use middleware::{Middleware, MiddlewareStack};
pub use mode::DeploymentMode;
pub use rest::{JwtSettings, RestSettings};
pub use security::SecuritySettings;
pub use site::SiteSettings;
