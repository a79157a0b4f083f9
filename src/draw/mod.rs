//! Rendering primitives for the drawing pad (Cairo-based).
//!
//! This module defines the core drawing types:
//! - [`Color`]: RGBA color representation with the preset swatch palette
//! - [`Surface`]: the ARGB32 raster buffer the user draws on
//! - [`LineCap`] and [`SegmentStyle`]: per-segment stroke configuration
//! - [`draw_segment`]: the single rendering operation of the pad

pub mod color;
pub mod stroke;
pub mod surface;

// Re-export commonly used types at module level
pub use color::Color;
pub use stroke::{LineCap, SegmentStyle, draw_segment};
pub use surface::Surface;

// Re-export the swatch palette for public API
pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, TRANSPARENT, WHITE, YELLOW};
