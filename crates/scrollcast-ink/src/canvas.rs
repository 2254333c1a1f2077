//! Pointer session tracking and the capture state machine.

use crate::eraser::erase_at;
use crate::hooks::{InkHooks, NoopHooks};
use crate::input::{DeviceKind, PointerEvent, PointerId};
use crate::snapshot::{EraserCursor, PreviewStroke, RenderSnapshot};
use crate::store::StrokeStore;
use crate::stroke::Stroke;
use crate::tools::ToolSettings;
use kurbo::Point;
use std::collections::HashMap;

/// Per-pointer contact state. Created on down, destroyed on up/cancel.
#[derive(Debug, Clone, Copy)]
pub struct PointerSession {
    /// Last known position.
    pub position: Point,
    /// Whether this contact may draw or erase. Fingers are not accepted
    /// while stylus-only mode is on, but are still tracked for the
    /// pointer count.
    pub accepted: bool,
    /// Whether the contact came from a stylus.
    pub stylus: bool,
}

/// Lifecycle of one capture session (first accepted down to commit or
/// discard).
///
/// `Idle` is re-entered only when the accepted-pointer count returns to
/// zero. Any transition to two or more accepted pointers discards the
/// capture without commit and cedes the gesture to the host's
/// pan/zoom handling; the session then stays `Discarded` until every
/// accepted pointer lifts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureState {
    #[default]
    Idle,
    /// A pen or highlighter preview line is being captured.
    Drawing,
    /// An eraser gesture is active.
    Erasing,
    /// Multi-touch took over; nothing will commit this session.
    Discarded,
}

/// The annotation ink engine: routes pointer events to stroke capture
/// or erasing and owns the committed strokes of the current page.
///
/// Single-threaded and event-driven: the host delivers pointer events
/// in arrival order on its UI loop and takes a [`RenderSnapshot`]
/// between events.
pub struct InkCanvas {
    store: StrokeStore,
    sessions: HashMap<PointerId, PointerSession>,
    /// Live, uncommitted point run of the current gesture.
    preview: Vec<Point>,
    eraser_center: Option<Point>,
    state: CaptureState,
    /// Per-frame drawing configuration, owned by the host.
    pub settings: ToolSettings,
    hooks: Box<dyn InkHooks>,
}

impl Default for InkCanvas {
    fn default() -> Self {
        Self::new(ToolSettings::default())
    }
}

impl InkCanvas {
    /// Create a canvas that reports to nobody.
    pub fn new(settings: ToolSettings) -> Self {
        Self::with_hooks(settings, Box::new(NoopHooks))
    }

    /// Create a canvas wired to the host's collaborator interface.
    pub fn with_hooks(settings: ToolSettings, hooks: Box<dyn InkHooks>) -> Self {
        Self {
            store: StrokeStore::new(),
            sessions: HashMap::new(),
            preview: Vec::new(),
            eraser_center: None,
            state: CaptureState::Idle,
            settings,
            hooks,
        }
    }

    pub fn store(&self) -> &StrokeStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut StrokeStore {
        &mut self.store
    }

    pub fn state(&self) -> CaptureState {
        self.state
    }

    /// Number of contacted pointers, accepted or not.
    pub fn pointer_count(&self) -> usize {
        self.sessions.len()
    }

    /// Number of pointers allowed to draw or erase.
    pub fn accepted_count(&self) -> usize {
        self.sessions.values().filter(|s| s.accepted).count()
    }

    /// Dispatch one pointer event.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down {
                id,
                position,
                device,
            } => self.on_pointer_down(id, position, device),
            PointerEvent::Move { id, position } => self.on_pointer_move(id, position),
            PointerEvent::Up { id } => self.on_pointer_up(id),
            PointerEvent::Cancel { id } => self.on_pointer_cancel(id),
        }
    }

    /// A pointer touched down.
    pub fn on_pointer_down(&mut self, id: PointerId, position: Point, device: DeviceKind) {
        let accepted = !(self.settings.stylus_only && !device.is_stylus());
        self.sessions.insert(
            id,
            PointerSession {
                position,
                accepted,
                stylus: device.is_stylus(),
            },
        );
        let count = self.sessions.len();
        self.hooks.on_pointer_count_changed(count);

        if !accepted {
            log::trace!("pointer {id} suppressed (stylus-only mode)");
            return;
        }

        match self.accepted_count() {
            1 if self.state == CaptureState::Idle => {
                if self.settings.tool.is_eraser() {
                    self.hooks.on_before_erase();
                    self.store.push_undo();
                    self.eraser_center = Some(position);
                    self.state = CaptureState::Erasing;
                } else {
                    self.preview.clear();
                    self.preview.push(position);
                    self.state = CaptureState::Drawing;
                }
                log::trace!("capture started: {:?}", self.state);
            }
            n if n >= 2 => self.discard_capture(),
            _ => {}
        }
    }

    /// A pointer moved.
    pub fn on_pointer_move(&mut self, id: PointerId, position: Point) {
        let Some(session) = self.sessions.get_mut(&id) else {
            return;
        };
        session.position = position;
        if !session.accepted {
            return;
        }

        match self.accepted_count() {
            1 => match self.state {
                CaptureState::Erasing => {
                    self.eraser_center = Some(position);
                    if erase_at(&mut self.store, position, self.settings.eraser_radius) {
                        self.hooks.on_strokes_changed();
                    }
                }
                CaptureState::Drawing => self.preview.push(position),
                CaptureState::Idle | CaptureState::Discarded => {}
            },
            n if n >= 2 => self.discard_capture(),
            _ => {}
        }
    }

    /// A pointer lifted. Commits the preview line when this was a
    /// single-pointer pen/highlighter gesture with more than one point.
    pub fn on_pointer_up(&mut self, id: PointerId) {
        let Some(session) = self.sessions.remove(&id) else {
            return;
        };
        self.hooks.on_pointer_count_changed(self.sessions.len());

        if !session.accepted {
            return;
        }

        if self.state == CaptureState::Drawing && self.preview.len() > 1 {
            self.commit_preview();
        }

        self.end_capture();
    }

    /// The platform aborted a gesture. Identical cleanup to pointer-up
    /// but never commits.
    pub fn on_pointer_cancel(&mut self, id: PointerId) {
        let Some(session) = self.sessions.remove(&id) else {
            return;
        };
        self.hooks.on_pointer_count_changed(self.sessions.len());

        if !session.accepted {
            return;
        }

        log::trace!("pointer {id} cancelled, capture aborted");
        self.end_capture();
    }

    /// Render-ready view of the current frame.
    pub fn snapshot(&self) -> RenderSnapshot<'_> {
        let preview = (self.state == CaptureState::Drawing && !self.preview.is_empty())
            .then(|| PreviewStroke {
                points: &self.preview,
                width: self.settings.effective_width(),
                color: self.settings.color,
                kind: self.settings.tool.stroke_kind().unwrap_or_default(),
            });

        let eraser = self.eraser_center.map(|center| EraserCursor {
            center,
            radius: self.settings.eraser_radius,
        });

        RenderSnapshot {
            strokes: self.store.strokes(),
            preview,
            eraser,
        }
    }

    /// Turn the preview line into a committed stroke.
    fn commit_preview(&mut self) {
        let Some(kind) = self.settings.tool.stroke_kind() else {
            return;
        };

        let points = std::mem::take(&mut self.preview);
        let stroke = Stroke::new(
            points,
            self.settings.effective_width(),
            self.settings.color,
            kind,
        );

        self.store.push_undo();
        self.store.push(stroke.clone());
        log::debug!("committed {:?} stroke with {} points", kind, stroke.len());
        self.hooks.on_stroke_committed(&stroke);
    }

    /// Two or more accepted pointers: drop the preview and cede the
    /// gesture to multi-touch handling.
    fn discard_capture(&mut self) {
        if self.state != CaptureState::Discarded {
            log::trace!("capture discarded: multi-touch took over");
        }
        self.preview.clear();
        self.eraser_center = None;
        self.state = CaptureState::Discarded;
    }

    /// Cleanup after an accepted pointer left the screen.
    fn end_capture(&mut self) {
        self.preview.clear();
        self.eraser_center = None;
        if self.accepted_count() == 0 {
            self.state = CaptureState::Idle;
        }
    }
}
