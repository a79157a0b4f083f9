//! Pen/eraser tool selection and stroke parameters.

use crate::draw::{Color, LineCap, SegmentStyle};
use crate::util;

/// Whether strokes paint with the selected color or with the background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolMode {
    /// Draw with the currently selected color (default)
    Pen,
    /// Draw with the background color, visually erasing content
    Eraser,
}

/// Currently selected stroke parameters.
///
/// Setters apply values verbatim - width and cap are not validated, matching
/// the pass-through semantics of the UI controls they mirror. The one rule
/// encoded here is that picking a color always switches back to pen mode,
/// while picking the eraser leaves the selected color untouched so pen mode
/// can restore it later.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolState {
    /// Selected stroke color (kept while erasing)
    pub color: Color,
    /// Stroke width in pixels, unvalidated
    pub width: f64,
    /// Line-cap style for segment ends
    pub cap: LineCap,
    /// Pen or eraser
    pub mode: ToolMode,
}

impl ToolState {
    /// Creates a pen-mode tool state with the given parameters.
    pub fn new(color: Color, width: f64, cap: LineCap) -> Self {
        Self {
            color,
            width,
            cap,
            mode: ToolMode::Pen,
        }
    }

    /// Selects a color and forces pen mode.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
        self.mode = ToolMode::Pen;
    }

    /// Selects a color given as a UI string (named, `#rrggbb`, or
    /// `rgb(r, g, b)` - the forms swatch buttons and color pickers produce).
    ///
    /// Returns `false` and leaves the state untouched when the string does
    /// not parse.
    pub fn set_color_str(&mut self, value: &str) -> bool {
        match util::parse_color(value) {
            Some(color) => {
                self.set_color(color);
                true
            }
            None => {
                log::warn!("ignoring unparseable color '{}'", value);
                false
            }
        }
    }

    /// Switches to eraser mode; the selected color is unchanged.
    pub fn set_eraser(&mut self) {
        self.mode = ToolMode::Eraser;
    }

    /// Sets the stroke width. No validation; zero and negative values pass
    /// through uninterpreted.
    pub fn set_width(&mut self, width: f64) {
        self.width = width;
    }

    /// Sets the line-cap style.
    pub fn set_line_cap(&mut self, cap: LineCap) {
        self.cap = cap;
    }

    /// Resolves the style for the next segment draw.
    ///
    /// Eraser mode forces `background` regardless of the selected color.
    pub fn segment_style(&self, background: Color) -> SegmentStyle {
        SegmentStyle {
            color: match self.mode {
                ToolMode::Pen => self.color,
                ToolMode::Eraser => background,
            },
            width: self.width,
            cap: self.cap,
        }
    }
}
