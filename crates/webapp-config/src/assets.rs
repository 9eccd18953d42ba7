use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::framework::FRONTEND_DIR;

pub const STATIC_URL: &str = "/static/";
pub const MEDIA_URL: &str = "/media/";

/// Static file storage that serves hashed, compressed copies.
pub const COMPRESSED_MANIFEST_STORAGE: &str =
    "whitenoise.storage.CompressedManifestStaticFilesStorage";

/// Static and media file locations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AssetSettings {
    pub static_url: String,
    pub static_root: PathBuf,
    pub staticfiles_dirs: Vec<PathBuf>,
    pub media_url: String,
    pub media_root: PathBuf,
    /// `None` keeps the host framework's default storage.
    pub staticfiles_storage: Option<String>,
}

impl AssetSettings {
    pub fn for_base_dir(base_dir: &Path) -> Self {
        Self {
            static_url: STATIC_URL.to_string(),
            static_root: base_dir.join("static"),
            staticfiles_dirs: vec![base_dir.join(FRONTEND_DIR).join("build").join("static")],
            media_url: MEDIA_URL.to_string(),
            media_root: base_dir.join("media"),
            staticfiles_storage: None,
        }
    }
}
