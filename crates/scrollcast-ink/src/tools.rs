//! Tool selection and per-frame drawing settings.

use crate::color::InkColor;
use crate::stroke::{Stroke, StrokeKind};
use serde::{Deserialize, Serialize};

/// Width multiplier applied to highlighter strokes at commit time.
pub const HIGHLIGHTER_WIDTH_FACTOR: f64 = 1.35;

/// Active drawing tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ToolKind {
    #[default]
    Pen,
    Highlighter,
    Eraser,
}

impl ToolKind {
    /// The stroke kind a commit with this tool produces.
    /// The eraser never commits strokes.
    pub fn stroke_kind(self) -> Option<StrokeKind> {
        match self {
            ToolKind::Pen => Some(StrokeKind::Pen),
            ToolKind::Highlighter => Some(StrokeKind::Highlighter),
            ToolKind::Eraser => None,
        }
    }

    pub fn is_eraser(self) -> bool {
        self == ToolKind::Eraser
    }
}

/// Drawing configuration owned by the host and read by the engine on
/// every event. The host updates it freely between gestures (tool
/// palette, color picker, stylus-only toggle).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSettings {
    /// Currently selected tool.
    pub tool: ToolKind,
    /// Stroke color for new strokes.
    pub color: InkColor,
    /// Base stroke width in canvas units.
    pub width: f64,
    /// Eraser reach in canvas units.
    pub eraser_radius: f64,
    /// When set, finger contacts never draw or erase; they still count
    /// toward the pointer total for pinch-zoom arbitration.
    pub stylus_only: bool,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            tool: ToolKind::Pen,
            color: InkColor::black(),
            width: 3.0,
            eraser_radius: 12.0,
            stylus_only: false,
        }
    }
}

impl ToolSettings {
    /// Effective stroke width for the current tool (highlighter strokes
    /// are widened by [`HIGHLIGHTER_WIDTH_FACTOR`]).
    pub fn effective_width(&self) -> f64 {
        let width = match self.tool {
            ToolKind::Highlighter => self.width * HIGHLIGHTER_WIDTH_FACTOR,
            _ => self.width,
        };
        width.max(Stroke::MIN_WIDTH)
    }
}
