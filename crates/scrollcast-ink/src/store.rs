//! Ordered stroke storage with splice edits and undo history.

use crate::stroke::Stroke;
use serde::{Deserialize, Serialize};

/// Maximum number of undo states to keep.
const MAX_UNDO_HISTORY: usize = 50;

/// One eraser-induced splice at a single index.
///
/// The stroke at `index` is replaced by `head` (or removed when `head`
/// is `None`) and `tail` is inserted immediately after, preserving the
/// relative z-order of the surviving fragments. Both fragments must be
/// valid strokes (>= 2 points) or absent.
#[derive(Debug, Clone)]
pub struct StoreEdit {
    pub index: usize,
    pub head: Option<Stroke>,
    pub tail: Option<Stroke>,
}

/// Owns the committed strokes of one page, in draw order
/// (index order = z-order, back to front).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StrokeStore {
    strokes: Vec<Stroke>,
    /// Undo history stack.
    #[serde(skip)]
    undo_stack: Vec<Vec<Stroke>>,
    /// Redo history stack.
    #[serde(skip)]
    redo_stack: Vec<Vec<Stroke>>,
}

impl StrokeStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a committed stroke. Invalid strokes (fewer than two
    /// points) are dropped, never stored.
    pub fn push(&mut self, stroke: Stroke) {
        if !stroke.is_valid() {
            log::debug!("dropping degenerate stroke with {} point(s)", stroke.len());
            return;
        }
        self.strokes.push(stroke);
    }

    /// Strokes in draw order.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn get(&self, index: usize) -> Option<&Stroke> {
        self.strokes.get(index)
    }

    pub fn clear(&mut self) {
        self.strokes.clear();
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Apply a batch of splice edits collected during an eraser scan.
    ///
    /// Edits must arrive in descending index order (the order the
    /// eraser scans in) so that earlier indices stay valid while later
    /// ones are spliced.
    pub fn apply_edits(&mut self, edits: Vec<StoreEdit>) {
        debug_assert!(edits.windows(2).all(|pair| pair[0].index > pair[1].index));

        for edit in edits {
            debug_assert!(edit.head.as_ref().map_or(true, Stroke::is_valid));
            debug_assert!(edit.tail.as_ref().map_or(true, Stroke::is_valid));

            match (edit.head, edit.tail) {
                (Some(head), Some(tail)) => {
                    self.strokes[edit.index] = head;
                    self.strokes.insert(edit.index + 1, tail);
                }
                (Some(head), None) => {
                    self.strokes[edit.index] = head;
                }
                (None, Some(tail)) => {
                    self.strokes[edit.index] = tail;
                }
                (None, None) => {
                    self.strokes.remove(edit.index);
                }
            }
        }
    }

    /// Push current state to the undo stack (call before mutating).
    pub fn push_undo(&mut self) {
        self.undo_stack.push(self.strokes.clone());
        self.redo_stack.clear();

        if self.undo_stack.len() > MAX_UNDO_HISTORY {
            self.undo_stack.remove(0);
        }
    }

    /// Undo the last change. Returns false if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        if let Some(snapshot) = self.undo_stack.pop() {
            self.redo_stack.push(std::mem::replace(&mut self.strokes, snapshot));
            true
        } else {
            false
        }
    }

    /// Redo the last undone change. Returns false if there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        if let Some(snapshot) = self.redo_stack.pop() {
            self.undo_stack.push(std::mem::replace(&mut self.strokes, snapshot));
            true
        } else {
            false
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Serialize the stored strokes to JSON for the host's persistence
    /// layer. The on-disk format remains the host's concern.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a store from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::InkColor;
    use crate::stroke::StrokeKind;
    use kurbo::Point;

    fn pen(points: Vec<Point>) -> Stroke {
        Stroke::new(points, 2.0, InkColor::black(), StrokeKind::Pen)
    }

    fn line(x0: f64, x1: f64) -> Stroke {
        pen(vec![Point::new(x0, 0.0), Point::new(x1, 0.0)])
    }

    #[test]
    fn test_push_keeps_draw_order() {
        let mut store = StrokeStore::new();
        let a = line(0.0, 10.0);
        let b = line(20.0, 30.0);
        let (id_a, id_b) = (a.id(), b.id());

        store.push(a);
        store.push(b);

        assert_eq!(store.len(), 2);
        assert_eq!(store.strokes()[0].id(), id_a);
        assert_eq!(store.strokes()[1].id(), id_b);
    }

    #[test]
    fn test_push_drops_degenerate_stroke() {
        let mut store = StrokeStore::new();
        store.push(pen(vec![Point::new(0.0, 0.0)]));
        assert!(store.is_empty());
    }

    #[test]
    fn test_split_edit_preserves_z_order() {
        let mut store = StrokeStore::new();
        let original = line(0.0, 100.0);
        let above = line(0.0, 50.0);
        let id_above = above.id();
        store.push(original);
        store.push(above);

        let head = store.strokes()[0].fragment(vec![Point::new(0.0, 0.0), Point::new(40.0, 0.0)]);
        let tail = store.strokes()[0].fragment(vec![Point::new(60.0, 0.0), Point::new(100.0, 0.0)]);
        store.apply_edits(vec![StoreEdit {
            index: 0,
            head: Some(head),
            tail: Some(tail),
        }]);

        assert_eq!(store.len(), 3);
        // Tail sits right after the head, the unrelated stroke stays on top.
        assert!((store.strokes()[0].points[1].x - 40.0).abs() < f64::EPSILON);
        assert!((store.strokes()[1].points[0].x - 60.0).abs() < f64::EPSILON);
        assert_eq!(store.strokes()[2].id(), id_above);
    }

    #[test]
    fn test_remove_edit() {
        let mut store = StrokeStore::new();
        store.push(line(0.0, 10.0));
        store.apply_edits(vec![StoreEdit {
            index: 0,
            head: None,
            tail: None,
        }]);
        assert!(store.is_empty());
    }

    #[test]
    fn test_descending_batch() {
        let mut store = StrokeStore::new();
        store.push(line(0.0, 10.0));
        store.push(line(20.0, 30.0));
        store.push(line(40.0, 50.0));

        // Remove top, split bottom; middle index must survive untouched.
        let head = store.strokes()[0].fragment(vec![Point::new(0.0, 0.0), Point::new(4.0, 0.0)]);
        store.apply_edits(vec![
            StoreEdit {
                index: 2,
                head: None,
                tail: None,
            },
            StoreEdit {
                index: 0,
                head: Some(head),
                tail: None,
            },
        ]);

        assert_eq!(store.len(), 2);
        assert!((store.strokes()[1].points[0].x - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_undo_redo() {
        let mut store = StrokeStore::new();

        store.push_undo();
        store.push(line(0.0, 10.0));
        assert_eq!(store.len(), 1);
        assert!(store.can_undo());

        assert!(store.undo());
        assert!(store.is_empty());
        assert!(store.can_redo());

        assert!(store.redo());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_new_change_clears_redo() {
        let mut store = StrokeStore::new();

        store.push_undo();
        store.push(line(0.0, 10.0));
        store.undo();
        assert!(store.can_redo());

        store.push_undo();
        store.push(line(20.0, 30.0));
        assert!(!store.can_redo());
    }

    #[test]
    fn test_json_round_trip() {
        let mut store = StrokeStore::new();
        store.push(line(0.0, 10.0));

        let json = store.to_json().unwrap();
        let restored = StrokeStore::from_json(&json).unwrap();

        assert_eq!(restored.len(), 1);
        assert_eq!(restored.strokes()[0].id(), store.strokes()[0].id());
    }
}
