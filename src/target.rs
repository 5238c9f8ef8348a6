//! Drop targets: elements that accept gestures.
//!
//! A [`DropTarget`] wraps one or more host elements as drop zones. Enter
//! and over handlers negotiate acceptance with the platform (an unaccepted
//! element never receives the drop); the drop handler reads the payload out
//! of the transfer carrier, notifies the target's callback and then the
//! originating source's, and closes the gesture.

use crate::context::DragContext;
use crate::effects::DropEffect;
use crate::error::{ConfigError, ConfigResult};
use crate::platform::{
    DragEvent, DragEventKind, ElementHandle, IntoElements, Subscription, Transfer,
};
use crate::types::{AcceptPredicate, DropCallback, DropPayload, DropRecord, ElementCallback};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Configuration for [`DropTarget::attach`].
pub struct TargetConfig {
    effect: DropEffect,
    on_enter: Option<AcceptPredicate>,
    on_leave: Option<ElementCallback>,
    on_drop: Option<DropCallback>,
}

impl TargetConfig {
    /// A target reporting `effect` as its intended drop operation.
    pub fn new(effect: DropEffect) -> Self {
        Self {
            effect,
            on_enter: None,
            on_leave: None,
            on_drop: None,
        }
    }

    /// Acceptance predicate consulted on drag-enter. Without one the target
    /// accepts every gesture; with one, only gestures it returns `true` for.
    pub fn on_enter(mut self, predicate: impl Fn(&ElementHandle) -> bool + 'static) -> Self {
        self.on_enter = Some(Arc::new(predicate));
        self
    }

    /// Invoked with the left element when the pointer leaves mid-gesture.
    pub fn on_leave(mut self, callback: impl Fn(&ElementHandle) + 'static) -> Self {
        self.on_leave = Some(Arc::new(callback));
        self
    }

    /// Invoked with the drop record when a gesture drops on this target.
    pub fn on_drop(mut self, callback: impl Fn(&DropRecord) + 'static) -> Self {
        self.on_drop = Some(Arc::new(callback));
        self
    }
}

/// Late-bindable callback slots.
#[derive(Default)]
struct TargetCallbacks {
    on_enter: Option<AcceptPredicate>,
    on_leave: Option<ElementCallback>,
    on_drop: Option<DropCallback>,
}

struct TargetState {
    effect: DropEffect,
    callbacks: Mutex<TargetCallbacks>,
}

/// A set of elements wrapped as drop zones.
///
/// Returned by [`attach`](Self::attach); dropping it deregisters the event
/// handlers.
pub struct DropTarget {
    state: Arc<TargetState>,
    _subscriptions: Vec<Subscription>,
}

impl std::fmt::Debug for DropTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DropTarget")
            .field("effect", &self.state.effect)
            .finish()
    }
}

impl DropTarget {
    /// Wrap `elements` as drop zones on `context`.
    ///
    /// Fails with [`ConfigError::NoElements`] on an empty collection,
    /// before any handler is attached.
    pub fn attach(
        context: &Arc<DragContext>,
        elements: impl IntoElements,
        config: TargetConfig,
    ) -> ConfigResult<Self> {
        let elements = elements.into_elements();
        if elements.is_empty() {
            return Err(ConfigError::NoElements);
        }

        let TargetConfig {
            effect,
            on_enter,
            on_leave,
            on_drop,
        } = config;
        let state = Arc::new(TargetState {
            effect,
            callbacks: Mutex::new(TargetCallbacks {
                on_enter,
                on_leave,
                on_drop,
            }),
        });

        let mut subscriptions = Vec::with_capacity(elements.len() * 4);
        for element in &elements {
            subscriptions.push(element.subscribe(DragEventKind::Enter, {
                let state = Arc::clone(&state);
                Box::new(move |event| handle_enter(&state, event))
            }));
            subscriptions.push(element.subscribe(DragEventKind::Leave, {
                let state = Arc::clone(&state);
                Box::new(move |event| handle_leave(&state, event))
            }));
            subscriptions.push(element.subscribe(DragEventKind::Over, Box::new(handle_over)));
            subscriptions.push(element.subscribe(DragEventKind::Drop, {
                let context = Arc::clone(context);
                let state = Arc::clone(&state);
                Box::new(move |event| handle_drop(&context, &state, event))
            }));
        }
        debug!(elements = elements.len(), effect = %effect, "attached drop target");

        Ok(Self {
            state,
            _subscriptions: subscriptions,
        })
    }

    /// Bind or replace the acceptance predicate.
    pub fn set_on_enter(&self, predicate: impl Fn(&ElementHandle) -> bool + 'static) {
        self.state.callbacks.lock().on_enter = Some(Arc::new(predicate));
    }

    /// Bind or replace the leave callback.
    pub fn set_on_leave(&self, callback: impl Fn(&ElementHandle) + 'static) {
        self.state.callbacks.lock().on_leave = Some(Arc::new(callback));
    }

    /// Bind or replace the drop callback.
    pub fn set_on_drop(&self, callback: impl Fn(&DropRecord) + 'static) {
        self.state.callbacks.lock().on_drop = Some(Arc::new(callback));
    }
}

/// Negotiate acceptance: publish the intended effect, then consult the
/// predicate. Accepting is what makes a later drop deliverable.
fn handle_enter(state: &TargetState, event: &DragEvent) {
    let Some(transfer) = event.transfer() else {
        warn!(element = ?event.element(), "enter event delivered without a transfer carrier");
        return;
    };

    transfer.set_drop_effect(state.effect.as_str());

    let on_enter = state.callbacks.lock().on_enter.clone();
    match on_enter {
        None => event.accept(),
        Some(predicate) => {
            if predicate(event.element()) {
                event.accept();
            }
        }
    }
}

fn handle_leave(state: &TargetState, event: &DragEvent) {
    let on_leave = state.callbacks.lock().on_leave.clone();
    if let Some(on_leave) = on_leave {
        on_leave(event.element());
    }
}

/// Over fires repeatedly while hovering; every occurrence must be accepted,
/// or the platform reverts to rejecting the drop.
fn handle_over(event: &DragEvent) {
    trace!(element = ?event.element(), "drag over");
    event.accept();
}

/// Deliver the payload: target callback first, then the originating
/// source's, both with the same record; the gesture is closed last.
fn handle_drop(context: &DragContext, state: &TargetState, event: &DragEvent) {
    let Some(transfer) = event.transfer() else {
        warn!(element = ?event.element(), "drop event delivered without a transfer carrier");
        return;
    };

    let gesture = context.active_gesture();
    let record = DropRecord {
        from: gesture.as_ref().map(|(_, element)| element.clone()),
        to: event.element().clone(),
        data: read_payload(transfer),
    };

    let on_drop = state.callbacks.lock().on_drop.clone();
    if let Some(on_drop) = on_drop {
        on_drop(&record);
    }
    if let Some((source, _)) = gesture {
        source.notify_drop(&record);
        context.complete_drop();
    }
}

/// Read every available kind out of the carrier; exactly one kind
/// degenerates to the bare value.
fn read_payload(transfer: &dyn Transfer) -> DropPayload {
    DropPayload::from_entries(transfer.kinds().into_iter().map(|kind| {
        let value = transfer.data(&kind).unwrap_or_default();
        (kind, value)
    }))
}
