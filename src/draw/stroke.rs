//! Cairo-based stroke segment rendering.
//!
//! Freehand input is rendered as a chain of independent line segments, one
//! per pointer sample: each segment is stroked on its own rather than being
//! accumulated into a continuous path, so joins between samples come from
//! the cap style, not from path joins. A zero-length segment paints the cap
//! shape alone, which is how the initial press dot is produced (butt caps
//! render nothing there - that mirrors the platform semantics and is left
//! uninterpreted).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::color::Color;
use super::surface::Surface;

/// Line-cap style applied to both ends of every stroke segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    /// Squared end exactly at the segment endpoint
    Butt,
    /// Semicircular end centered on the endpoint (default)
    Round,
    /// Squared end extending half the line width past the endpoint
    Square,
}

impl LineCap {
    /// Maps to the equivalent Cairo cap style.
    pub fn to_cairo(self) -> cairo::LineCap {
        match self {
            LineCap::Butt => cairo::LineCap::Butt,
            LineCap::Round => cairo::LineCap::Round,
            LineCap::Square => cairo::LineCap::Square,
        }
    }
}

impl Default for LineCap {
    fn default() -> Self {
        LineCap::Round
    }
}

impl FromStr for LineCap {
    type Err = UnknownLineCap;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "butt" => Ok(LineCap::Butt),
            "round" => Ok(LineCap::Round),
            "square" => Ok(LineCap::Square),
            _ => Err(UnknownLineCap(s.to_string())),
        }
    }
}

impl fmt::Display for LineCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
            LineCap::Square => "square",
        };
        f.write_str(name)
    }
}

/// Error for unrecognized line-cap selector values.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown line cap '{0}' (expected butt, round, or square)")]
pub struct UnknownLineCap(pub String);

/// Resolved pen settings for one segment draw.
///
/// Captured from the tool state at draw time; eraser mode substitutes the
/// background color before this struct is built.
#[derive(Debug, Clone, Copy)]
pub struct SegmentStyle {
    /// Stroke color
    pub color: Color,
    /// Line width in pixels, passed through unvalidated
    pub width: f64,
    /// Cap style for both segment ends
    pub cap: LineCap,
}

/// Strokes one line segment from `(x1, y1)` to `(x2, y2)` onto the surface.
///
/// Rendering has no error channel; a failed stroke simply leaves pixels
/// unchanged.
pub fn draw_segment(surface: &Surface, x1: f64, y1: f64, x2: f64, y2: f64, style: &SegmentStyle) {
    let Ok(ctx) = surface.context() else {
        return;
    };

    ctx.set_line_width(style.width);
    ctx.set_line_cap(style.cap.to_cairo());
    ctx.set_source_rgba(style.color.r, style.color.g, style.color.b, style.color.a);

    ctx.move_to(x1, y1);
    ctx.line_to(x2, y2);
    let _ = ctx.stroke();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::BLACK;

    fn style(width: f64, cap: LineCap) -> SegmentStyle {
        SegmentStyle {
            color: BLACK,
            width,
            cap,
        }
    }

    #[test]
    fn segment_paints_band_around_centerline() {
        let mut surface = Surface::new(64, 32).unwrap();
        draw_segment(&surface, 10.0, 10.0, 50.0, 10.0, &style(5.0, LineCap::Butt));

        // Inside the 5px band centered on y=10
        assert_eq!(surface.pixel_at(30, 10), Some((255, 0, 0, 0)));
        assert_eq!(surface.pixel_at(30, 9), Some((255, 0, 0, 0)));
        assert_eq!(surface.pixel_at(30, 11), Some((255, 0, 0, 0)));
        // Well outside the band
        assert_eq!(surface.pixel_at(30, 20), Some((0, 0, 0, 0)));
        assert_eq!(surface.pixel_at(5, 10), Some((0, 0, 0, 0)));
    }

    #[test]
    fn zero_length_segment_draws_round_cap_dot() {
        let mut surface = Surface::new(16, 16).unwrap();
        draw_segment(&surface, 8.0, 8.0, 8.0, 8.0, &style(6.0, LineCap::Round));
        assert_eq!(surface.pixel_at(8, 8), Some((255, 0, 0, 0)));
    }

    #[test]
    fn zero_length_butt_segment_draws_nothing() {
        let mut surface = Surface::new(16, 16).unwrap();
        draw_segment(&surface, 8.0, 8.0, 8.0, 8.0, &style(6.0, LineCap::Butt));
        assert_eq!(surface.pixel_at(8, 8), Some((0, 0, 0, 0)));
    }

    #[test]
    fn line_cap_round_trips_through_str() {
        for cap in [LineCap::Butt, LineCap::Round, LineCap::Square] {
            assert_eq!(cap.to_string().parse::<LineCap>().unwrap(), cap);
        }
        assert!("bevel".parse::<LineCap>().is_err());
    }
}
