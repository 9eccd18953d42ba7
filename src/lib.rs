//! # Webapp
//!
//! Environment-driven settings for a web application backend. At process
//! start the environment is read once (optionally layered from dotenv
//! files), required keys are validated and a single immutable
//! [`Settings`] record is produced. Everything downstream reads from that
//! record.
//!
//! ## Overview
//!
//! - **Resolution**: process environment, then `.env`, then (outside
//!   production) `.envs/.local/.mariadb`; later sources win
//! - **Validation**: every required key must be present and non-empty;
//!   typed values (ports, origins, database URLs) are checked up front
//! - **Production**: a platform step swaps in `DATABASE_URL`, allows every
//!   host and switches static files to compressed manifest storage
//! - **Logging**: console plus `logs/django-app.log`, same line format
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── webapp-core/           # EnvSnapshot, ConfigError, redaction helpers
//! ├── webapp-config/         # one typed section per settings area
//! └── webapp-observability/  # log line format and subscriber setup
//! src/
//! ├── cli/                   # check / show / keys
//! ├── bootstrap.rs           # resolve + install logging
//! ├── mailer.rs              # SMTP transport from email settings
//! ├── platform.rs            # production adjustments
//! ├── resolver.rs            # env layering and resolution
//! ├── router.rs              # middleware stack on an axum router
//! ├── settings.rs            # the Settings record
//! └── state.rs               # shared handle for handlers
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! APP_ENV=local
//! SECRET_KEY=change-me
//! DEBUG=True
//! ALLOWED_HOSTS="localhost 127.0.0.1"
//! CORS_ALLOWED_ORIGINS="http://localhost:3000"
//! TIME_ZONE=UTC
//! # EMAIL_* and MARIADB_* usually live in .envs/.local/.mariadb
//! ```
//!
//! ```bash
//! cargo run -- check
//! cargo run -- show --section database
//! cargo run -- keys --required
//! ```
//!
//! ## Security Considerations
//!
//! - `SECRET_KEY`, `EMAIL_HOST_PASSWORD`, `MARIADB_PASSWORD` and
//!   `DATABASE_URL` never appear in `Debug` output, JSON or logs
//! - `DEBUG` is only enabled by the exact value `True`

pub mod bootstrap;
pub mod cli;
pub mod mailer;
pub mod platform;
pub mod resolver;
pub mod router;
pub mod settings;
pub mod state;

pub use bootstrap::{BootstrapError, bootstrap};
pub use resolver::{ConfigResolver, ResolverOptions};
pub use settings::Settings;
pub use state::AppState;

// Re-export workspace crates for convenience
pub use webapp_config;
pub use webapp_core;
pub use webapp_observability;
