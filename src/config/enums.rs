//! Configuration enum types.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::draw::{Color, color::*};
use crate::util;

/// Color specification - either a color string or RGB values.
///
/// # Examples
/// ```toml
/// # Named color or hex string
/// default_color = "black"
/// background_color = "#ffffff"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Color string: a predefined name, `#rrggbb`, or `rgb(r, g, b)`
    Text(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Strings go through [`util::parse_color`]; unparseable values default
    /// to black with a warning. RGB arrays are converted from 0-255 range to
    /// 0.0-1.0 range with full opacity.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Text(text) => util::parse_color(text).unwrap_or_else(|| {
                warn!("Unknown color '{}', using black", text);
                BLACK
            }),
            ColorSpec::Rgb([r, g, b]) => Color::from_rgb8(*r, *g, *b),
        }
    }
}

/// Where the persisted snapshot file lives.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum StorageMode {
    /// Platform data directory (default)
    Auto,
    /// Next to the configuration file
    Config,
    /// A user-specified directory (requires `custom_directory`)
    Custom,
}
