//! Per-subsystem gesture state machine.
//!
//! One [`DragContext`] is created per drag-and-drop subsystem and shared
//! (via `Arc`) by every source and target attached to it; it is the only
//! link between them. The context tracks at most one active gesture with an
//! explicit state value instead of nullable fields, so a half-populated
//! "dragging" state is unrepresentable.
//!
//! ## State Transitions
//!
//! ```text
//! Idle     -> Dragging   (begin_drag - a source's start event)
//! Dragging -> Idle       (complete_drop - a drop on any target)
//! Dragging -> Idle       (cancel_drag - the owning source's end event)
//! Dragging -> Dragging   (begin_drag - a second start replaces the gesture)
//! ```
//!
//! Transitions never overlap a user callback: handlers copy what they need
//! out of the context, run the host's callbacks with no lock held, then
//! transition.

use crate::platform::ElementHandle;
use crate::source::SourceState;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, warn};

/// Gesture state held by a [`DragContext`].
#[derive(Default)]
pub(crate) enum GestureState {
    /// No gesture in flight
    #[default]
    Idle,
    /// A gesture is in flight, started by `source` on `element`
    Dragging {
        source: Arc<SourceState>,
        element: ElementHandle,
    },
}

impl GestureState {
    fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}

/// Tracks the single active drag gesture of one drag-and-drop subsystem.
///
/// Sources and targets attached to the same context participate in the same
/// gestures; separate contexts are fully isolated from one another, so
/// independent subsystems (and tests) cannot leak state into each other.
#[derive(Default)]
pub struct DragContext {
    state: Mutex<GestureState>,
}

impl DragContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a gesture is currently in flight
    pub fn is_dragging(&self) -> bool {
        self.state.lock().is_dragging()
    }

    /// Element currently being dragged, if a gesture is in flight
    pub fn active_element(&self) -> Option<ElementHandle> {
        match &*self.state.lock() {
            GestureState::Dragging { element, .. } => Some(element.clone()),
            GestureState::Idle => None,
        }
    }

    /// Open a gesture. A gesture already in flight is replaced: the platform
    /// has necessarily moved on to the new one, and the superseded source's
    /// end event fails the ownership check in [`cancel_drag`](Self::cancel_drag).
    pub(crate) fn begin_drag(&self, source: Arc<SourceState>, element: ElementHandle) {
        let mut state = self.state.lock();
        if state.is_dragging() {
            warn!("drag started while another gesture was active; replacing it");
        }
        debug!(element = ?element, "drag gesture started");
        *state = GestureState::Dragging { source, element };
    }

    /// Close the gesture after a drop has been delivered.
    pub(crate) fn complete_drop(&self) {
        let mut state = self.state.lock();
        if state.is_dragging() {
            debug!("drag gesture completed by drop");
            *state = GestureState::Idle;
        } else {
            debug!("drop completed with no gesture in flight");
        }
    }

    /// Close the gesture as cancelled, but only if `source` still owns it.
    /// Returns whether the transition happened.
    pub(crate) fn cancel_drag(&self, source: &Arc<SourceState>) -> bool {
        let mut state = self.state.lock();
        let owned = match &*state {
            GestureState::Dragging { source: active, .. } => Arc::ptr_eq(active, source),
            GestureState::Idle => return false,
        };
        if !owned {
            debug!("ignoring end event from a superseded gesture");
            return false;
        }
        debug!("drag gesture cancelled");
        *state = GestureState::Idle;
        true
    }

    /// Whether `source` owns the gesture currently in flight
    pub(crate) fn owns_gesture(&self, source: &Arc<SourceState>) -> bool {
        match &*self.state.lock() {
            GestureState::Dragging { source: active, .. } => Arc::ptr_eq(active, source),
            GestureState::Idle => false,
        }
    }

    /// Copy of the active gesture, for the drop path
    pub(crate) fn active_gesture(&self) -> Option<(Arc<SourceState>, ElementHandle)> {
        match &*self.state.lock() {
            GestureState::Dragging { source, element } => Some((source.clone(), element.clone())),
            GestureState::Idle => None,
        }
    }
}
