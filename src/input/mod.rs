//! Input handling: abstract pointer events, tool selection, and the canvas
//! state machine that turns them into raster mutations.

pub mod events;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::{InputEvent, InputSource, PointerEvent, TouchPoint};
pub use state::{CanvasState, StrokeState};
pub use tool::{ToolMode, ToolState};
