use std::sync::Arc;

use crate::settings::Settings;

/// Shared handle passed to request handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(settings: Arc<Settings>) -> Self {
        Self { settings }
    }
}

impl From<Settings> for AppState {
    fn from(settings: Settings) -> Self {
        Self::new(Arc::new(settings))
    }
}
