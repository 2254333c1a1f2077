//! Geometry utilities for stroke hit testing and eraser cuts.

use kurbo::{Point, Rect, Vec2};

/// Minimum distance from `p` to the segment `ab`.
///
/// Uses the standard clamped projection: the projection parameter
/// `t = dot(ap, ab) / |ab|²` is clamped to `[0, 1]` so endpoints are
/// handled correctly. A zero-length segment degrades to the distance
/// to `a` (projection parameter 0), never dividing by zero.
pub fn segment_distance(p: Point, a: Point, b: Point) -> f64 {
    let line_vec = Vec2::new(b.x - a.x, b.y - a.y);
    let point_vec = Vec2::new(p.x - a.x, p.y - a.y);

    let line_len_sq = line_vec.hypot2();
    if line_len_sq < f64::EPSILON {
        return point_vec.hypot();
    }

    let t = (point_vec.dot(line_vec) / line_len_sq).clamp(0.0, 1.0);
    let projection = Point::new(a.x + t * line_vec.x, a.y + t * line_vec.y);

    ((p.x - projection.x).powi(2) + (p.y - projection.y).powi(2)).sqrt()
}

/// Axis-aligned bounding box of a point run, `None` when empty.
pub fn polyline_bounds(points: &[Point]) -> Option<Rect> {
    let first = points.first()?;

    let mut min_x = first.x;
    let mut min_y = first.y;
    let mut max_x = first.x;
    let mut max_y = first.y;

    for point in &points[1..] {
        min_x = min_x.min(point.x);
        min_y = min_y.min(point.y);
        max_x = max_x.max(point.x);
        max_y = max_y.max(point.y);
    }

    Some(Rect::new(min_x, min_y, max_x, max_y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_interior_projection() {
        let d = segment_distance(
            Point::new(50.0, 10.0),
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
        );
        assert!((d - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_distance_clamps_to_endpoints() {
        // Projection falls before the start of the segment
        let d = segment_distance(
            Point::new(-30.0, 40.0),
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
        );
        assert!((d - 50.0).abs() < 1e-9);

        // And past the end
        let d = segment_distance(
            Point::new(103.0, 4.0),
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
        );
        assert!((d - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_distance_zero_length_segment() {
        let a = Point::new(5.0, 5.0);
        let d = segment_distance(Point::new(8.0, 9.0), a, a);
        assert!((d - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_bounds() {
        let bounds = polyline_bounds(&[
            Point::new(10.0, 20.0),
            Point::new(-5.0, 40.0),
            Point::new(30.0, 0.0),
        ])
        .unwrap();

        assert!((bounds.x0 - -5.0).abs() < f64::EPSILON);
        assert!((bounds.y0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 30.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bounds_empty() {
        assert!(polyline_bounds(&[]).is_none());
    }
}
