//! Configuration file support for inkpad.
//!
//! This module handles loading and validating user settings from the
//! configuration file located at `~/.config/inkpad/config.toml`. Settings
//! include pen defaults, the eraser background color, snapshot storage
//! location, and the export directory.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::{ColorSpec, StorageMode};
pub use types::{DrawingConfig, ExportConfig, StorageConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure containing all user settings.
///
/// This is the root type that gets deserialized from the TOML file. All
/// fields have defaults and will use those if not specified.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "black"
/// default_width = 5.0
/// default_line_cap = "round"
/// background_color = "#ffffff"
///
/// [storage]
/// storage = "auto"
///
/// [export]
/// directory = "~/Pictures/Inkpad"
/// ```
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Pen defaults and background color
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Persisted snapshot storage location
    #[serde(default)]
    pub storage: StorageConfig,

    /// Export destination
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Validates and clamps configuration values to acceptable ranges.
    ///
    /// Only load-time defaults are validated here; the runtime tool setters
    /// intentionally pass values through untouched.
    fn validate_and_clamp(&mut self) {
        // Default width: 1.0 - 50.0
        if !(1.0..=50.0).contains(&self.drawing.default_width) {
            log::warn!(
                "Invalid default_width {:.1}, clamping to 1.0-50.0 range",
                self.drawing.default_width
            );
            self.drawing.default_width = self.drawing.default_width.clamp(1.0, 50.0);
        }

        // An empty storage key would produce an unusable state file name
        if self.storage.key.trim().is_empty() {
            log::warn!("Empty storage key, falling back to the default");
            self.storage.key = crate::session::DEFAULT_STATE_KEY.to_string();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/inkpad/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined
    /// (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the directory holding the configuration file.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("inkpad");
        Ok(config_dir)
    }

    /// Loads configuration from file, or returns defaults if not found.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }
}
