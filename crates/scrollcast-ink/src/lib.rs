//! ScrollCast Ink Engine
//!
//! Platform-agnostic freehand stroke capture and eraser-intersection core
//! for the ScrollCast annotation layer. The host application feeds pointer
//! events into an [`InkCanvas`] and renders the [`RenderSnapshot`] it
//! produces; persistence, PDF rendering, and all UI chrome live outside
//! this crate.

pub mod canvas;
pub mod color;
pub mod eraser;
pub mod geometry;
pub mod hooks;
pub mod input;
pub mod snapshot;
pub mod store;
pub mod stroke;
pub mod tools;

pub use canvas::{CaptureState, InkCanvas, PointerSession};
pub use color::{ColorParseError, InkColor};
pub use eraser::erase_at;
pub use hooks::{InkHooks, NoopHooks};
pub use input::{DeviceKind, PointerEvent, PointerId};
pub use snapshot::{EraserCursor, PreviewStroke, RenderSnapshot};
pub use store::{StoreEdit, StrokeStore};
pub use stroke::{Stroke, StrokeId, StrokeKind};
pub use tools::{ToolKind, ToolSettings, HIGHLIGHTER_WIDTH_FACTOR};
