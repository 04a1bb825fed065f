use crate::error::{PassgenError, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CLIPBOARD_TIMEOUT_MS: u64 = 5000;

/// Overrides the directory `config.json` is read from.
pub const CONFIG_DIR_ENV: &str = "PASSGEN_CONFIG_DIR";

/// Configuration for passgen, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PassgenConfig {
    /// Copy to the clipboard unless `--nocp` is given. When false, never copy.
    #[serde(default = "default_copy_to_clipboard")]
    pub copy_to_clipboard: bool,

    /// How long to wait for the clipboard tool before killing it
    #[serde(default = "default_clipboard_timeout_ms")]
    pub clipboard_timeout_ms: u64,
}

fn default_copy_to_clipboard() -> bool {
    true
}

fn default_clipboard_timeout_ms() -> u64 {
    DEFAULT_CLIPBOARD_TIMEOUT_MS
}

impl Default for PassgenConfig {
    fn default() -> Self {
        Self {
            copy_to_clipboard: default_copy_to_clipboard(),
            clipboard_timeout_ms: default_clipboard_timeout_ms(),
        }
    }
}

impl PassgenConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(PassgenError::Io)?;
        let config: PassgenConfig =
            serde_json::from_str(&content).map_err(PassgenError::Serialization)?;
        Ok(config)
    }

    pub fn clipboard_timeout(&self) -> Duration {
        Duration::from_millis(self.clipboard_timeout_ms)
    }
}

/// Directory holding `config.json`: `$PASSGEN_CONFIG_DIR` if set, otherwise
/// the platform's per-user config directory.
pub fn config_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
        return Some(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "passgen", "passgen").map(|dirs| dirs.config_dir().to_path_buf())
}
