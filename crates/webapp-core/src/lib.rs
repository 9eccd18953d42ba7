//! # Webapp Core
//!
//! Foundational pieces shared by every settings crate:
//!
//! - [`env`]: the environment snapshot and its typed per-key readers
//! - [`errors`]: the configuration error taxonomy
//! - [`serde`]: serialization helpers for secret values
//!
//! # Example
//!
//! ```ignore
//! use webapp_core::EnvSnapshot;
//!
//! let mut env = EnvSnapshot::from_process();
//! env.overlay_file(".env")?;
//!
//! let debug = env.flag_or("DEBUG", false);
//! let hosts = env.list("ALLOWED_HOSTS")?;
//! ```

pub mod env;
pub mod errors;
mod interpolate;
pub mod serde;

// Re-export commonly used types at crate root
pub use env::EnvSnapshot;
pub use errors::{ConfigError, ConfigResult};
