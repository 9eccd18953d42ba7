use serde::Serialize;
use webapp_core::{ConfigResult, EnvSnapshot};

use crate::keys;

pub const DEFAULT_LANGUAGE_CODE: &str = "en-us";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LocaleSettings {
    pub language_code: String,
    pub time_zone: String,
    pub use_i18n: bool,
    pub use_tz: bool,
}

impl LocaleSettings {
    pub fn from_env(env: &EnvSnapshot) -> ConfigResult<Self> {
        Ok(Self {
            language_code: DEFAULT_LANGUAGE_CODE.to_string(),
            time_zone: env.required(keys::TIME_ZONE)?.to_string(),
            use_i18n: true,
            use_tz: true,
        })
    }
}
