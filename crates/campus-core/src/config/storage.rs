//! Upload storage configuration.

use serde::{Deserialize, Serialize};

/// Where uploaded resource files live and which ones are accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding uploaded files.
    #[serde(default = "default_upload_dir")]
    pub upload_dir: String,
    /// Lowercase file extensions accepted on upload.
    #[serde(default = "default_allowed_extensions")]
    pub allowed_extensions: Vec<String>,
    /// Maximum upload size in bytes (default 16 MB).
    #[serde(default = "default_max_upload")]
    pub max_upload_size_bytes: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            upload_dir: default_upload_dir(),
            allowed_extensions: default_allowed_extensions(),
            max_upload_size_bytes: default_max_upload(),
        }
    }
}

fn default_upload_dir() -> String {
    "./uploads".to_string()
}

fn default_allowed_extensions() -> Vec<String> {
    [
        "png", "jpg", "jpeg", "gif", "pdf", "doc", "docx", "txt", "ppt", "pptx", "xls", "xlsx",
    ]
    .iter()
    .map(|ext| ext.to_string())
    .collect()
}

fn default_max_upload() -> u64 {
    16_777_216 // 16 MB
}
