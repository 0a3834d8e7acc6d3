use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::checksum::BUF_SIZE;
use crate::inputs::DEFAULT_MANIFEST_EXT;
use crate::verify::VerifyOptions;

/// XDG prefix for config and state directories.
pub const APP_PREFIX: &str = "sfvcheck";

/// Global configuration loaded from `~/.config/sfvcheck/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SfvConfig {
    /// Extension (without dot, case-insensitive) that marks a path as a manifest.
    pub manifest_extension: String,
    /// Worker threads per batch (1 = sequential).
    pub jobs: usize,
    /// Read buffer size in bytes when checksumming files.
    #[serde(default = "default_read_buffer_bytes")]
    pub read_buffer_bytes: usize,
}

fn default_read_buffer_bytes() -> usize {
    BUF_SIZE
}

impl Default for SfvConfig {
    fn default() -> Self {
        Self {
            manifest_extension: DEFAULT_MANIFEST_EXT.to_string(),
            jobs: 1,
            read_buffer_bytes: BUF_SIZE,
        }
    }
}

impl SfvConfig {
    /// Batch options, with `jobs` overridden when given (e.g. from `--jobs`).
    pub fn verify_options(&self, jobs: Option<usize>) -> VerifyOptions {
        VerifyOptions {
            jobs: jobs.unwrap_or(self.jobs).max(1),
            buf_size: self.read_buffer_bytes.max(1),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix(APP_PREFIX)?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SfvConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SfvConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: SfvConfig = toml::from_str(&data)?;
    Ok(cfg)
}
