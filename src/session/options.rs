use crate::config::{StorageConfig, StorageMode};
use anyhow::{Result, anyhow};
use std::path::{Path, PathBuf};

/// Durable-storage key holding the most recent surface snapshot.
pub const DEFAULT_STATE_KEY: &str = "canvasState";

/// Runtime options derived from configuration for snapshot storage.
#[derive(Debug, Clone)]
pub struct StorageOptions {
    /// Directory holding the state file.
    pub base_dir: PathBuf,
    /// Key name; becomes the state file stem.
    pub key: String,
}

impl StorageOptions {
    /// Creates options with the default key. Intended mainly for tests and
    /// CLI overrides.
    pub fn new(base_dir: PathBuf) -> Self {
        Self {
            base_dir,
            key: DEFAULT_STATE_KEY.to_string(),
        }
    }

    /// Path of the file holding the encoded snapshot value.
    pub fn state_file_path(&self) -> PathBuf {
        self.base_dir.join(format!("{}.b64", self.file_stem()))
    }

    /// Path of the lock file guarding reads and writes.
    pub fn lock_file_path(&self) -> PathBuf {
        self.base_dir.join(format!("{}.lock", self.file_stem()))
    }

    fn file_stem(&self) -> String {
        sanitize_identifier(&self.key)
    }
}

/// Build runtime storage options from configuration values.
pub fn options_from_config(storage_cfg: &StorageConfig, config_dir: &Path) -> Result<StorageOptions> {
    let base_dir = match storage_cfg.storage {
        StorageMode::Auto => {
            let root = dirs::data_dir().unwrap_or_else(|| config_dir.to_path_buf());
            root.join("inkpad")
        }
        StorageMode::Config => config_dir.to_path_buf(),
        StorageMode::Custom => {
            let raw = storage_cfg.custom_directory.as_ref().ok_or_else(|| {
                anyhow!("storage.custom_directory must be set when storage = \"custom\"")
            })?;
            let expanded = expand_tilde(raw);
            if expanded.as_os_str().is_empty() {
                return Err(anyhow!("storage.custom_directory resolved to an empty path"));
            }
            expanded
        }
    };

    let mut options = StorageOptions::new(base_dir);
    if !storage_cfg.key.is_empty() {
        options.key = storage_cfg.key.clone();
    }

    Ok(options)
}

pub(crate) fn sanitize_identifier(raw: &str) -> String {
    if raw.is_empty() {
        return "default".to_string();
    }

    raw.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
