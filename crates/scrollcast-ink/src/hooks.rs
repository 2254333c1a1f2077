//! Host collaborator interface.
//!
//! The engine reports gesture outcomes through this trait instead of
//! reaching into app-global services; the host passes its implementation
//! into [`InkCanvas::with_hooks`](crate::canvas::InkCanvas::with_hooks).
//! Persistence may be asynchronous on the host side - commits are
//! append-only, so the engine never waits on them before accepting the
//! next gesture.

use crate::stroke::Stroke;

/// Callbacks fired by the ink engine. All methods default to no-ops so
/// hosts implement only what they need.
pub trait InkHooks {
    /// A pen or highlighter gesture finished and `stroke` was appended
    /// to the store.
    fn on_stroke_committed(&mut self, stroke: &Stroke) {
        let _ = stroke;
    }

    /// An eraser gesture is about to start, before any mutation.
    /// Lets the host snapshot state for its own undo bookkeeping.
    fn on_before_erase(&mut self) {}

    /// An erase pass structurally changed the stroke store (repaint).
    fn on_strokes_changed(&mut self) {}

    /// The number of contacted pointers changed (accepted or not).
    /// Used by the host for multi-touch gesture arbitration.
    fn on_pointer_count_changed(&mut self, count: usize) {
        let _ = count;
    }
}

/// Hooks implementation that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHooks;

impl InkHooks for NoopHooks {}
