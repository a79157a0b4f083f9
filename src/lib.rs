//! Library exports for the inkpad drawing core.
//!
//! Exposes the raster surface, tool state, history stack, and persistence
//! subsystems so that embedding applications (or the bundled CLI) can drive
//! the pad through the abstract input-event interface without depending on
//! any concrete UI toolkit.

pub mod config;
pub mod draw;
pub mod export;
pub mod history;
pub mod input;
pub mod session;
pub mod util;

pub use config::Config;
pub use input::CanvasState;
