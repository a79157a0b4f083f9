//! Canvas state: the owning context and its event handlers.

mod actions;
mod core;
mod pointer;

pub use self::core::{CanvasState, StrokeState};
