use anyhow::{Context as _, Result};
use std::path::{Path, PathBuf};

use super::CanvasState;
use crate::export::{ExportError, export_drawing};
use crate::input::events::{InputEvent, InputSource};
use crate::session::{SnapshotStore, decode_snapshot};

impl<S: SnapshotStore> CanvasState<S> {
    /// Resizes the surface to its container's new dimensions.
    ///
    /// Recreating the raster buffer discards its pixels, so the persisted
    /// snapshot is restored immediately afterwards. Zero-sized containers
    /// yield a degenerate surface, not an error.
    pub fn on_resize(&mut self, width: i32, height: i32) -> Result<()> {
        self.surface
            .resize(width, height)
            .context("failed to resize the drawing surface")?;
        self.restore()
    }

    /// Restores the persisted snapshot onto the surface.
    ///
    /// An absent snapshot is the normal empty case and leaves the surface
    /// blank. Decoding happens synchronously, so a resize arriving later can
    /// never be overwritten by a stale restore.
    pub fn restore(&mut self) -> Result<()> {
        let Some(saved) = self
            .store
            .load()
            .context("failed to read the persisted snapshot")?
        else {
            return Ok(());
        };

        let image =
            decode_snapshot(&saved).context("failed to decode the persisted snapshot")?;
        self.surface
            .paint_image(&image)
            .context("failed to paint the restored snapshot")?;
        Ok(())
    }

    /// Undoes the most recent stroke.
    ///
    /// Pops the latest pre-stroke snapshot, repaints the surface from it,
    /// and updates the persisted snapshot to match. With an empty history
    /// this is a no-op: surface and persisted snapshot stay untouched.
    /// Popped entries are discarded permanently; there is no redo.
    pub fn undo(&mut self) -> Result<()> {
        let Some(entry) = self.history.pop() else {
            log::debug!("undo requested with empty history; nothing to do");
            return Ok(());
        };

        let image = decode_snapshot(&entry).context("failed to decode the undo snapshot")?;
        self.surface
            .paint_image(&image)
            .context("failed to paint the undo snapshot")?;
        self.persist()
    }

    /// Clears the drawing: surface back to transparent, history emptied,
    /// persisted snapshot key removed.
    pub fn clear(&mut self) -> Result<()> {
        self.surface
            .clear()
            .context("failed to clear the drawing surface")?;
        self.history.clear();
        self.store
            .remove()
            .context("failed to remove the persisted snapshot")?;
        Ok(())
    }

    /// Exports the current surface to `<directory>/drawing.png`.
    pub fn export(&self, directory: &Path) -> Result<PathBuf, ExportError> {
        export_drawing(self.surface.image(), directory)
    }

    /// Dispatches one abstract UI event to the matching handler.
    pub fn handle_event(&mut self, event: InputEvent) -> Result<()> {
        match event {
            InputEvent::Press(pointer) => self.on_press(&pointer),
            InputEvent::Move(pointer) => self.on_motion(&pointer),
            InputEvent::Release => {
                self.on_release();
                Ok(())
            }
            InputEvent::Resize { width, height } => self.on_resize(width, height),
        }
    }

    /// Drains an input source, dispatching every event in order.
    pub fn run<I: InputSource>(&mut self, source: &mut I) -> Result<()> {
        while let Some(event) = source.next_event() {
            self.handle_event(event)?;
        }
        Ok(())
    }
}
