use std::sync::Arc;

use thiserror::Error;
use tracing::info;
use webapp_core::{ConfigError, EnvSnapshot};
use webapp_observability::{LoggingError, init_logging};

use crate::resolver::{ConfigResolver, ResolverOptions, log_env_file};
use crate::settings::Settings;

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Logging(#[from] LoggingError),
}

/// Resolve settings from the process environment, then install logging.
///
/// Runs once at process start. Resolution happens before any log sink
/// exists, so the overlay file outcomes are logged again once it does.
pub fn bootstrap(options: ResolverOptions) -> Result<Arc<Settings>, BootstrapError> {
    let (settings, files) =
        ConfigResolver::new(options).resolve_with_files(EnvSnapshot::from_process())?;
    init_logging(&settings.logging)?;

    for file in &files {
        log_env_file(&file.path, file.applied);
    }

    info!(
        mode = %settings.mode,
        log_file = %settings.logging.file.display(),
        "Bootstrap complete"
    );
    Ok(Arc::new(settings))
}
