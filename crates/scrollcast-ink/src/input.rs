//! Pointer event types for unified touch/stylus handling.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Host-assigned identifier for one pointer contact.
pub type PointerId = u64;

/// The device a pointer contact came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceKind {
    Finger,
    Stylus,
}

impl DeviceKind {
    pub fn is_stylus(self) -> bool {
        self == DeviceKind::Stylus
    }
}

/// Pointer event stream consumed by the engine. Positions are in
/// canvas-local coordinates; the host applies any view transform first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PointerEvent {
    Down {
        id: PointerId,
        position: Point,
        device: DeviceKind,
    },
    Move {
        id: PointerId,
        position: Point,
    },
    Up {
        id: PointerId,
    },
    /// The platform aborted the gesture (palm rejection, app switch).
    /// Never commits a stroke.
    Cancel {
        id: PointerId,
    },
}
