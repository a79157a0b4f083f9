//! Color-string parsing helpers.
//!
//! UI controls hand the pad colors in three textual forms: named colors
//! ("red"), color-picker hex values ("#rrggbb"), and computed swatch styles
//! ("rgb(255, 0, 0)"). [`parse_color`] accepts all three.

use crate::draw::{Color, color::*};

/// Maps color name strings to Color values.
///
/// Used by the configuration system and the swatch buttons.
///
/// # Supported Names (case-insensitive)
/// - "black", "red", "green", "blue", "yellow", "orange", "pink", "white"
///
/// # Returns
/// - `Some(Color)` if the name matches a predefined color
/// - `None` if the name is not recognized
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "black" => Some(BLACK),
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        _ => None,
    }
}

/// Parses a color string in any of the accepted forms.
///
/// Accepts `#rrggbb` / `#rgb` hex notation, `rgb(r, g, b)` with 0-255
/// components, and the predefined color names.
pub fn parse_color(value: &str) -> Option<Color> {
    let value = value.trim();
    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex(hex);
    }
    if let Some(body) = value
        .strip_prefix("rgb(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        return parse_rgb_components(body);
    }
    name_to_color(value)
}

fn parse_hex(hex: &str) -> Option<Color> {
    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::from_rgb8(r, g, b))
        }
        3 => {
            // Shorthand: each nibble doubled (#f0a -> #ff00aa)
            let expand = |i: usize| {
                u8::from_str_radix(&hex[i..i + 1], 16)
                    .ok()
                    .map(|v| v << 4 | v)
            };
            Some(Color::from_rgb8(expand(0)?, expand(1)?, expand(2)?))
        }
        _ => None,
    }
}

fn parse_rgb_components(body: &str) -> Option<Color> {
    let mut parts = body.split(',').map(|p| p.trim().parse::<u8>());
    let r = parts.next()?.ok()?;
    let g = parts.next()?.ok()?;
    let b = parts.next()?.ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Color::from_rgb8(r, g, b))
}
