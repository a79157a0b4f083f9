use anyhow::{Context as _, Result};

use super::{CanvasState, StrokeState};
use crate::draw;
use crate::input::events::PointerEvent;
use crate::session::{SnapshotStore, encode_surface};

impl<S: SnapshotStore> CanvasState<S> {
    /// Processes a pointer or touch press.
    ///
    /// Captures the pre-stroke history snapshot first (synchronously, so the
    /// entry reflects strictly pre-stroke pixels), then enters the drawing
    /// state and performs the initial draw at the press location - a
    /// zero-length segment that renders as a cap-shaped dot.
    pub fn on_press(&mut self, event: &PointerEvent) -> Result<()> {
        let Some((device_x, device_y)) = event.primary() else {
            return Ok(());
        };
        let (x, y) = self.surface.to_local(device_x, device_y);

        let snapshot =
            encode_surface(&self.surface).context("failed to capture pre-stroke snapshot")?;
        self.history.push(snapshot);

        self.state = StrokeState::Drawing { last_x: x, last_y: y };
        self.apply_segment(x, y)
    }

    /// Processes pointer or touch motion.
    ///
    /// No-op while idle (guard, not error). Otherwise draws one independent
    /// segment from the last sampled point to the new one and persists.
    pub fn on_motion(&mut self, event: &PointerEvent) -> Result<()> {
        if !self.is_drawing() {
            return Ok(());
        }
        let Some((device_x, device_y)) = event.primary() else {
            return Ok(());
        };
        let (x, y) = self.surface.to_local(device_x, device_y);
        self.apply_segment(x, y)
    }

    /// Processes pointer or touch release: ends the stroke and drops the
    /// stroke cursor so the next stroke does not connect to this one.
    pub fn on_release(&mut self) {
        self.state = StrokeState::Idle;
    }

    fn apply_segment(&mut self, x: f64, y: f64) -> Result<()> {
        let (x1, y1) = match self.state {
            StrokeState::Drawing { last_x, last_y } => (last_x, last_y),
            StrokeState::Idle => (x, y),
        };

        let style = self.tool.segment_style(self.background);
        draw::draw_segment(&self.surface, x1, y1, x, y, &style);

        self.state = StrokeState::Drawing { last_x: x, last_y: y };
        self.persist()
    }

    /// Writes the current surface to the store as the persisted snapshot.
    pub(super) fn persist(&mut self) -> Result<()> {
        let snapshot = encode_surface(&self.surface).context("failed to encode the surface")?;
        self.store
            .save(&snapshot)
            .context("failed to persist the surface snapshot")?;
        Ok(())
    }
}
