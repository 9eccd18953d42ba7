//! Host framework wiring that does not depend on the environment.

use std::path::{Path, PathBuf};

use serde::Serialize;

pub const TEMPLATE_BACKEND: &str = "django.template.backends.django.DjangoTemplates";

pub const CONTEXT_PROCESSORS: &[&str] = &[
    "django.template.context_processors.debug",
    "django.template.context_processors.request",
    "django.contrib.auth.context_processors.auth",
    "django.contrib.messages.context_processors.messages",
];

pub const PASSWORD_VALIDATORS: &[&str] = &[
    "django.contrib.auth.password_validation.UserAttributeSimilarityValidator",
    "django.contrib.auth.password_validation.MinimumLengthValidator",
    "django.contrib.auth.password_validation.CommonPasswordValidator",
    "django.contrib.auth.password_validation.NumericPasswordValidator",
];

/// Directory holding the built frontend, relative to the base directory.
pub const FRONTEND_DIR: &str = "frontend";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TemplateSettings {
    pub backend: String,
    pub dirs: Vec<PathBuf>,
    pub app_dirs: bool,
    pub context_processors: Vec<String>,
}

impl TemplateSettings {
    /// Templates come from `<base>/frontend/build` plus each app's own
    /// template directory.
    pub fn for_base_dir(base_dir: &Path) -> Self {
        Self {
            backend: TEMPLATE_BACKEND.to_string(),
            dirs: vec![base_dir.join(FRONTEND_DIR).join("build")],
            app_dirs: true,
            context_processors: CONTEXT_PROCESSORS.iter().map(|p| p.to_string()).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PasswordPolicy {
    pub validators: Vec<String>,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            validators: PASSWORD_VALIDATORS.iter().map(|v| v.to_string()).collect(),
        }
    }
}

/// Dotted paths the host framework boots from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EntryPoints {
    pub root_urlconf: String,
    pub wsgi_application: String,
    pub default_auto_field: String,
}

impl Default for EntryPoints {
    fn default() -> Self {
        Self {
            root_urlconf: "app.urls".to_string(),
            wsgi_application: "app.wsgi.application".to_string(),
            default_auto_field: "django.db.models.BigAutoField".to_string(),
        }
    }
}
