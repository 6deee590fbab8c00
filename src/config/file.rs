use crate::utils::error::{Result, TimesaverError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional TOML config carrying defaults for the remote API and the output
/// location. All fields are optional; CLI values always win.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    pub api_base: Option<String>,
    pub model: Option<String>,
    pub output_path: Option<String>,
}

impl FileConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|e| TimesaverError::ConfigError {
            message: format!("invalid TOML config: {}", e),
        })
    }
}
