//! RGBA color type and the preset swatch palette.

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use inkpad::draw::Color;
/// let red = Color::rgb(1.0, 0.0, 0.0);
/// let semi_transparent_blue = Color { r: 0.0, g: 0.0, b: 1.0, a: 0.5 };
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a fully opaque color from RGB components in the 0.0-1.0 range.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Creates a fully opaque color from 8-bit RGB components.
    ///
    /// Used by the color-string parser for `#RRGGBB` and `rgb(r, g, b)` input.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }
}

// ============================================================================
// Preset Swatch Palette
// ============================================================================

/// Preset swatch: black (also the default pen color)
pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

/// Preset swatch: red
pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);

/// Preset swatch: green
pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);

/// Preset swatch: blue
pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);

/// Preset swatch: yellow
pub const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);

/// Preset swatch: orange
pub const ORANGE: Color = Color::rgb(1.0, 0.5, 0.0);

/// Preset swatch: pink/magenta
pub const PINK: Color = Color::rgb(1.0, 0.0, 1.0);

/// Preset swatch: white (also the default eraser/background color)
pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

/// Fully transparent - the cleared-surface pixel value
pub const TRANSPARENT: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.0,
};
