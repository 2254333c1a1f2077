//! Read-only render description handed to the drawing surface.

use crate::color::InkColor;
use crate::stroke::{Stroke, StrokeKind};
use kurbo::Point;

/// The live, not-yet-committed stroke of the current gesture, with the
/// width/color/kind it will commit with.
#[derive(Debug, Clone, Copy)]
pub struct PreviewStroke<'a> {
    pub points: &'a [Point],
    pub width: f64,
    pub color: InkColor,
    pub kind: StrokeKind,
}

/// Eraser overlay circle, shown while an eraser gesture is active.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EraserCursor {
    pub center: Point,
    pub radius: f64,
}

/// Everything the renderer needs for one frame: committed strokes in
/// draw order, the live preview line, and the eraser cursor. Purely a
/// data-to-visual mapping; no drawing or erasing logic belongs here.
///
/// Borrowed from the canvas, so the borrow checker enforces that a
/// snapshot is never read across a mutation - the exclusion a
/// multi-threaded port would need a lock for.
#[derive(Debug, Clone, Copy)]
pub struct RenderSnapshot<'a> {
    pub strokes: &'a [Stroke],
    pub preview: Option<PreviewStroke<'a>>,
    pub eraser: Option<EraserCursor>,
}
