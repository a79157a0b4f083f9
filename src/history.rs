//! Undo history for the drawing surface.
//!
//! Each entry is a full encoded surface snapshot captured immediately before
//! a stroke begins, so popping one restores the surface to its exact
//! pre-stroke pixels. The stack is unbounded; popped entries are discarded
//! permanently and the whole stack empties on explicit clear.

/// Ordered stack of encoded pre-stroke snapshots, most recent last.
#[derive(Debug, Default)]
pub struct HistoryStack {
    entries: Vec<String>,
}

impl HistoryStack {
    /// Creates an empty history stack.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends a snapshot taken before a new stroke.
    pub fn push(&mut self, snapshot: String) {
        self.entries.push(snapshot);
    }

    /// Removes and returns the most recent snapshot, if any.
    ///
    /// Returned entries are gone for good; there is no redo.
    pub fn pop(&mut self) -> Option<String> {
        self.entries.pop()
    }

    /// Discards all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of stored snapshots.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the stack holds no snapshots.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
