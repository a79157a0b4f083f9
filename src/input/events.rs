//! Generic input event types for cross-toolkit compatibility.
//!
//! UI frontends map their native pointer/touch/resize notifications to these
//! events and feed them to [`CanvasState`](super::CanvasState), either one
//! at a time through `handle_event` or in bulk through an [`InputSource`].

/// One active touch contact in device coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    /// Horizontal device coordinate
    pub x: f64,
    /// Vertical device coordinate
    pub y: f64,
}

/// A positioned pointer sample from either a mouse or a touch screen.
///
/// Touch events may carry several contacts; only the first active one drives
/// the stroke. An empty touch list has no usable position and is ignored by
/// the handlers (guard, not error).
#[derive(Debug, Clone, PartialEq)]
pub enum PointerEvent {
    /// Mouse pointer position in device coordinates
    Mouse { x: f64, y: f64 },
    /// Active touch contacts, first one primary
    Touch { touches: Vec<TouchPoint> },
}

impl PointerEvent {
    /// Convenience constructor for a mouse sample.
    pub fn mouse(x: f64, y: f64) -> Self {
        Self::Mouse { x, y }
    }

    /// Convenience constructor for a touch sample.
    pub fn touch(points: &[(f64, f64)]) -> Self {
        Self::Touch {
            touches: points.iter().map(|&(x, y)| TouchPoint { x, y }).collect(),
        }
    }

    /// The device position driving the stroke: the mouse position, or the
    /// first active touch point. `None` for an empty touch list.
    pub fn primary(&self) -> Option<(f64, f64)> {
        match self {
            Self::Mouse { x, y } => Some((*x, *y)),
            Self::Touch { touches } => touches.first().map(|t| (t.x, t.y)),
        }
    }
}

/// A discrete UI event delivered to the drawing core.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Pointer or touch went down; starts a stroke
    Press(PointerEvent),
    /// Pointer or touch moved; extends the active stroke (no-op when idle)
    Move(PointerEvent),
    /// Pointer or touch lifted; ends the stroke
    Release,
    /// The surface's container changed size
    Resize { width: i32, height: i32 },
}

/// Abstract source of input events, so the core can be driven without a
/// concrete UI toolkit.
pub trait InputSource {
    /// The next pending event, or `None` when the source is drained.
    fn next_event(&mut self) -> Option<InputEvent>;
}

/// Any event iterator works as a source (handy for tests and replays).
impl<I> InputSource for I
where
    I: Iterator<Item = InputEvent>,
{
    fn next_event(&mut self) -> Option<InputEvent> {
        self.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_prefers_first_touch() {
        let event = PointerEvent::touch(&[(3.0, 4.0), (9.0, 9.0)]);
        assert_eq!(event.primary(), Some((3.0, 4.0)));
    }

    #[test]
    fn empty_touch_list_has_no_primary() {
        assert_eq!(PointerEvent::touch(&[]).primary(), None);
        assert_eq!(PointerEvent::mouse(1.0, 2.0).primary(), Some((1.0, 2.0)));
    }
}
