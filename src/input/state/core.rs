//! The owning drawing context and its stroke state machine.

use anyhow::{Context as _, Result};

use crate::config::Config;
use crate::draw::{Color, Surface};
use crate::history::HistoryStack;
use crate::input::tool::ToolState;
use crate::session::SnapshotStore;

/// Per-stroke state machine.
///
/// `Idle` is both the initial and the terminal state between strokes:
/// `Idle --press--> Drawing --move*--> Drawing --release--> Idle`.
/// There is no paused or cancelled state; a frontend that never delivers a
/// release leaves the state in `Drawing` until the next press resets the
/// stroke cursor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StrokeState {
    /// No pointer or touch is down
    Idle,
    /// A stroke is active; holds the last sampled surface-local point
    Drawing {
        /// Last sampled X coordinate
        last_x: f64,
        /// Last sampled Y coordinate
        last_y: f64,
    },
}

/// Owning context for the whole drawing pad.
///
/// Holds the raster surface, tool state, undo history, background color, and
/// the snapshot store, and processes all UI events. Everything runs
/// synchronously in response to discrete events; there is no concurrent
/// access to any of this state.
pub struct CanvasState<S: SnapshotStore> {
    pub(super) surface: Surface,
    /// Currently selected pen parameters
    pub tool: ToolState,
    pub(super) history: HistoryStack,
    pub(super) store: S,
    pub(super) background: Color,
    pub(super) state: StrokeState,
}

impl<S: SnapshotStore> CanvasState<S> {
    /// Creates a pad with the given surface dimensions and restores any
    /// previously persisted drawing from the store.
    pub fn new(
        width: i32,
        height: i32,
        tool: ToolState,
        background: Color,
        store: S,
    ) -> Result<Self> {
        let surface =
            Surface::new(width, height).context("failed to create the drawing surface")?;
        let mut canvas = Self {
            surface,
            tool,
            history: HistoryStack::new(),
            store,
            background,
            state: StrokeState::Idle,
        };
        canvas.restore()?;
        Ok(canvas)
    }

    /// Creates a pad with tool defaults taken from the configuration.
    pub fn with_config(config: &Config, width: i32, height: i32, store: S) -> Result<Self> {
        let drawing = &config.drawing;
        let tool = ToolState::new(
            drawing.default_color.to_color(),
            drawing.default_width,
            drawing.default_line_cap,
        );
        Self::new(width, height, tool, drawing.background_color.to_color(), store)
    }

    /// The drawing surface.
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Mutable surface access (pixel readback needs it).
    pub fn surface_mut(&mut self) -> &mut Surface {
        &mut self.surface
    }

    /// The undo history.
    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    /// The snapshot store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The background color the eraser paints with.
    pub fn background(&self) -> Color {
        self.background
    }

    /// Whether a stroke is currently active.
    pub fn is_drawing(&self) -> bool {
        matches!(self.state, StrokeState::Drawing { .. })
    }

    /// Updates the surface's top-left corner in layout space, used to map
    /// device pointer coordinates to surface-local ones.
    pub fn set_origin(&mut self, x: f64, y: f64) {
        self.surface.set_origin(x, y);
    }
}
