//! Eraser engine: radius-based stroke cutting.

use crate::geometry::segment_distance;
use crate::store::{StoreEdit, StrokeStore};
use crate::stroke::Stroke;
use kurbo::Point;

/// Erase around `center`: every stroke with a segment within `radius`
/// is cut once at that segment's start.
///
/// Strokes are scanned back-to-front (most recently drawn first) and
/// each stroke takes at most one cut per call; as the pointer keeps
/// moving, successive calls continue to eat into the surviving
/// fragments. The cut point itself is consumed: the head keeps the
/// points strictly before it, the tail starts at the segment's end
/// point, and a fragment with fewer than two points is dropped rather
/// than kept as a degenerate stroke.
///
/// Returns `true` only when the store was structurally changed, so a
/// call over an already-clear region is a no-op.
pub fn erase_at(store: &mut StrokeStore, center: Point, radius: f64) -> bool {
    let mut edits = Vec::new();

    for index in (0..store.len()).rev() {
        let stroke = &store.strokes()[index];
        if !stroke.is_valid() {
            continue;
        }

        if let Some((segment, head, tail)) = cut_stroke(stroke, center, radius) {
            log::debug!(
                "eraser cut stroke {} at segment {} (head {:?}, tail {:?})",
                stroke.id(),
                segment,
                head.as_ref().map(Stroke::len),
                tail.as_ref().map(Stroke::len),
            );
            edits.push(StoreEdit { index, head, tail });
        }
    }

    if edits.is_empty() {
        false
    } else {
        store.apply_edits(edits);
        true
    }
}

/// Find the first segment of `stroke` within `radius` of `center` and
/// split there. Returns the segment index plus the surviving fragments,
/// or `None` when no segment is in reach.
fn cut_stroke(
    stroke: &Stroke,
    center: Point,
    radius: f64,
) -> Option<(usize, Option<Stroke>, Option<Stroke>)> {
    let points = &stroke.points;

    for i in 0..points.len() - 1 {
        if segment_distance(center, points[i], points[i + 1]) > radius {
            continue;
        }

        // Cut at the segment's start: points[i] is consumed.
        let head = (i >= 2).then(|| stroke.fragment(points[..i].to_vec()));
        let tail = (points.len() - (i + 1) >= 2).then(|| stroke.fragment(points[i + 1..].to_vec()));
        return Some((i, head, tail));
    }

    None
}
