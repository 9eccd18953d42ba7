use serde::Serialize;
use webapp_core::{ConfigResult, EnvSnapshot};

use crate::apps::DEFAULT_SITE_ID;
use crate::keys;

pub const SITE_NAME: &str = "Django App";

/// Public identity used in outgoing emails and links.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SiteSettings {
    pub site_id: u32,
    pub domain: String,
    pub name: String,
}

impl SiteSettings {
    pub fn from_env(env: &EnvSnapshot) -> ConfigResult<Self> {
        Ok(Self {
            site_id: DEFAULT_SITE_ID,
            domain: env.required(keys::DOMAIN)?.to_string(),
            name: SITE_NAME.to_string(),
        })
    }
}
