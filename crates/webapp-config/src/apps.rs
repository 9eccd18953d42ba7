use serde::Serialize;

pub const FRAMEWORK_APPS: &[&str] = &[
    "django.contrib.admin",
    "django.contrib.auth",
    "django.contrib.contenttypes",
    "django.contrib.sessions",
    "django.contrib.messages",
    "django.contrib.staticfiles",
    "django.contrib.sites",
];

pub const THIRD_PARTY_APPS: &[&str] = &[
    "django_extensions",
    "rest_framework",
    "rest_framework.authtoken",
    "djoser",
];

pub const LOCAL_APPS: &[&str] = &["corsheaders"];

pub const DEFAULT_SITE_ID: u32 = 1;

/// Applications the host framework loads, grouped by origin.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AppRegistry {
    pub framework_apps: Vec<String>,
    pub third_party_apps: Vec<String>,
    pub local_apps: Vec<String>,
    pub site_id: u32,
}

impl Default for AppRegistry {
    fn default() -> Self {
        let owned = |apps: &[&str]| apps.iter().map(|a| a.to_string()).collect();
        Self {
            framework_apps: owned(FRAMEWORK_APPS),
            third_party_apps: owned(THIRD_PARTY_APPS),
            local_apps: owned(LOCAL_APPS),
            site_id: DEFAULT_SITE_ID,
        }
    }
}

impl AppRegistry {
    /// Framework, third-party and local apps, in that order.
    pub fn installed_apps(&self) -> impl Iterator<Item = &str> {
        self.framework_apps
            .iter()
            .chain(&self.third_party_apps)
            .chain(&self.local_apps)
            .map(String::as_str)
    }

    pub fn is_installed(&self, app: &str) -> bool {
        self.installed_apps().any(|a| a == app)
    }
}
