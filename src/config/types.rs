//! Configuration type definitions.

use serde::{Deserialize, Serialize};

use super::enums::{ColorSpec, StorageMode};
use crate::draw::LineCap;

/// Drawing-related settings.
///
/// Controls the pen defaults when the pad first opens and the fixed
/// background color the eraser paints with. Users change pen values at
/// runtime through the UI controls.
#[derive(Debug, Serialize, Deserialize)]
pub struct DrawingConfig {
    /// Default pen color - a named color, `#rrggbb`, `rgb(r, g, b)`, or an
    /// RGB array like `[255, 0, 0]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default pen width in pixels (valid range: 1.0 - 50.0)
    #[serde(default = "default_width")]
    pub default_width: f64,

    /// Default line-cap style (butt, round, or square)
    #[serde(default)]
    pub default_line_cap: LineCap,

    /// Background color used by the eraser
    #[serde(default = "default_background")]
    pub background_color: ColorSpec,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_width: default_width(),
            default_line_cap: LineCap::default(),
            background_color: default_background(),
        }
    }
}

/// Snapshot storage settings.
#[derive(Debug, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Where the persisted snapshot lives (auto, config, or custom)
    #[serde(default = "default_storage_mode")]
    pub storage: StorageMode,

    /// Directory used when `storage = "custom"`; supports a leading `~/`
    #[serde(default)]
    pub custom_directory: Option<String>,

    /// Durable key the snapshot is stored under
    #[serde(default = "default_state_key")]
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            storage: default_storage_mode(),
            custom_directory: None,
            key: default_state_key(),
        }
    }
}

/// Export settings.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ExportConfig {
    /// Directory receiving `drawing.png`; defaults to `<pictures>/Inkpad`
    #[serde(default)]
    pub directory: Option<String>,
}

fn default_color() -> ColorSpec {
    ColorSpec::Text("black".to_string())
}

fn default_background() -> ColorSpec {
    ColorSpec::Text("white".to_string())
}

fn default_width() -> f64 {
    5.0
}

fn default_storage_mode() -> StorageMode {
    StorageMode::Auto
}

fn default_state_key() -> String {
    crate::session::DEFAULT_STATE_KEY.to_string()
}
