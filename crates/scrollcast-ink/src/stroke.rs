//! Committed stroke records.

use crate::color::InkColor;
use crate::geometry;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique stroke identifier.
pub type StrokeId = Uuid;

/// What a stroke was drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum StrokeKind {
    #[default]
    Pen,
    Highlighter,
    /// Transient rubbing trail some hosts render while erasing.
    /// Never committed by the engine itself.
    EraserPreview,
}

/// A committed polyline annotation.
///
/// Immutable once in the store; the eraser replaces a stroke wholesale
/// with its fragments rather than editing points in place. Fragments get
/// fresh ids but inherit width, color and kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stroke {
    pub(crate) id: StrokeId,
    /// Points in draw order. A valid stroke has at least two.
    pub points: Vec<Point>,
    /// Stroke width in canvas units, clamped to >= 1.
    pub width: f64,
    /// Stroke color.
    pub color: InkColor,
    /// Pen, highlighter or eraser preview.
    pub kind: StrokeKind,
}

impl Stroke {
    /// Minimum allowed stroke width.
    pub const MIN_WIDTH: f64 = 1.0;

    /// Create a stroke with a fresh id.
    pub fn new(points: Vec<Point>, width: f64, color: InkColor, kind: StrokeKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            points,
            width: width.max(Self::MIN_WIDTH),
            color,
            kind,
        }
    }

    /// Build an eraser fragment: same width/color/kind, fresh id.
    pub fn fragment(&self, points: Vec<Point>) -> Self {
        Self::new(points, self.width, self.color, self.kind)
    }

    pub fn id(&self) -> StrokeId {
        self.id
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// A stroke needs at least two points to describe a segment.
    pub fn is_valid(&self) -> bool {
        self.points.len() >= 2
    }

    /// Bounding box of the point run, `None` for an empty stroke.
    pub fn bounds(&self) -> Option<Rect> {
        geometry::polyline_bounds(&self.points)
    }

    /// Check whether `point` lies within `tolerance` of any segment,
    /// accounting for the stroke's own width.
    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        if self.points.len() < 2 {
            return false;
        }

        let reach = tolerance + self.width / 2.0;
        self.points
            .windows(2)
            .any(|pair| geometry::segment_distance(point, pair[0], pair[1]) <= reach)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pen(points: Vec<Point>) -> Stroke {
        Stroke::new(points, 2.0, InkColor::black(), StrokeKind::Pen)
    }

    #[test]
    fn test_width_clamp() {
        let stroke = Stroke::new(Vec::new(), 0.25, InkColor::black(), StrokeKind::Pen);
        assert!((stroke.width - Stroke::MIN_WIDTH).abs() < f64::EPSILON);
    }

    #[test]
    fn test_validity() {
        assert!(!pen(vec![Point::new(0.0, 0.0)]).is_valid());
        assert!(pen(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]).is_valid());
    }

    #[test]
    fn test_fragment_inherits_style() {
        let stroke = Stroke::new(
            vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)],
            4.0,
            InkColor::new(10, 20, 30, 255),
            StrokeKind::Highlighter,
        );
        let frag = stroke.fragment(vec![Point::new(0.0, 0.0), Point::new(5.0, 0.0)]);

        assert_ne!(frag.id(), stroke.id());
        assert!((frag.width - stroke.width).abs() < f64::EPSILON);
        assert_eq!(frag.color, stroke.color);
        assert_eq!(frag.kind, stroke.kind);
    }

    #[test]
    fn test_hit_test() {
        let stroke = pen(vec![Point::new(0.0, 0.0), Point::new(100.0, 0.0)]);
        assert!(stroke.hit_test(Point::new(50.0, 4.0), 5.0));
        assert!(!stroke.hit_test(Point::new(50.0, 20.0), 5.0));
    }

    #[test]
    fn test_bounds() {
        let stroke = pen(vec![Point::new(5.0, -2.0), Point::new(15.0, 8.0)]);
        let bounds = stroke.bounds().unwrap();
        assert!((bounds.x0 - 5.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 8.0).abs() < f64::EPSILON);
    }
}
