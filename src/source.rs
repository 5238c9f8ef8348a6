//! Drag sources: elements that originate gestures.
//!
//! A [`DragSource`] wraps one or more host elements as drag origins. Its
//! start handler publishes the configured effects, drag image, and data
//! items into the transfer carrier and opens the gesture in the shared
//! context; its end handler detects a gesture no drop consumed and fires
//! the cancellation callback. Dropping the `DragSource` detaches both
//! handlers and unmarks the elements.

use crate::context::DragContext;
use crate::effects::AllowedEffects;
use crate::error::{ConfigError, ConfigResult};
use crate::platform::{DragEvent, DragEventKind, ElementHandle, IntoElements, Subscription};
use crate::types::{DataItem, DragView, DropCallback, DropRecord, ElementCallback, IntoDataItems};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, warn};

/// Configuration for [`DragSource::attach`].
///
/// All fields are optional; an unconfigured source drags with no data, the
/// `"none"` effect token, and the platform's default drag image.
#[derive(Default)]
pub struct SourceConfig {
    data: Vec<DataItem>,
    effects: AllowedEffects,
    view: Option<DragView>,
    on_start: Option<ElementCallback>,
    on_cancel: Option<ElementCallback>,
    on_drop: Option<DropCallback>,
}

impl SourceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Data items to publish into the transfer carrier on drag-start. A
    /// plain string is shorthand for an item under the `"text"` kind.
    pub fn data(mut self, data: impl IntoDataItems) -> Self {
        self.data = data.into_data_items();
        self
    }

    /// Transfer effects this source allows.
    pub fn effects(mut self, effects: impl Into<AllowedEffects>) -> Self {
        self.effects = effects.into();
        self
    }

    /// Custom drag image.
    pub fn view(mut self, view: DragView) -> Self {
        self.view = Some(view);
        self
    }

    /// Invoked with the dragged element when a gesture starts.
    pub fn on_start(mut self, callback: impl Fn(&ElementHandle) + 'static) -> Self {
        self.on_start = Some(Arc::new(callback));
        self
    }

    /// Invoked with the dragged element when a gesture ends without a drop.
    pub fn on_cancel(mut self, callback: impl Fn(&ElementHandle) + 'static) -> Self {
        self.on_cancel = Some(Arc::new(callback));
        self
    }

    /// Invoked with the drop record when a target consumes the gesture.
    pub fn on_drop(mut self, callback: impl Fn(&DropRecord) + 'static) -> Self {
        self.on_drop = Some(Arc::new(callback));
        self
    }
}

/// Late-bindable callback slots.
#[derive(Default)]
pub(crate) struct SourceCallbacks {
    pub(crate) on_start: Option<ElementCallback>,
    pub(crate) on_cancel: Option<ElementCallback>,
    pub(crate) on_drop: Option<DropCallback>,
}

/// Shared state of one attached source.
///
/// The gesture context holds it while a drag from this source is in flight;
/// its identity is what makes gesture ownership checkable.
pub(crate) struct SourceState {
    token: String,
    data: Vec<DataItem>,
    view: Option<DragView>,
    callbacks: Mutex<SourceCallbacks>,
}

impl SourceState {
    pub(crate) fn new(
        token: String,
        data: Vec<DataItem>,
        view: Option<DragView>,
        callbacks: SourceCallbacks,
    ) -> Self {
        Self {
            token,
            data,
            view,
            callbacks: Mutex::new(callbacks),
        }
    }

    /// Invoke the source's drop callback, if bound. Called by the target
    /// drop handler after the target's own callback has run.
    pub(crate) fn notify_drop(&self, record: &DropRecord) {
        let on_drop = self.callbacks.lock().on_drop.clone();
        if let Some(on_drop) = on_drop {
            on_drop(record);
        }
    }
}

/// A set of elements wrapped as drag origins.
///
/// Returned by [`attach`](Self::attach); dropping it deregisters the event
/// handlers and unmarks the elements as drag origins.
pub struct DragSource {
    state: Arc<SourceState>,
    elements: Vec<ElementHandle>,
    _subscriptions: Vec<Subscription>,
}

impl std::fmt::Debug for DragSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragSource")
            .field("elements", &self.elements.len())
            .finish()
    }
}

impl DragSource {
    /// Wrap `elements` as drag origins on `context`.
    ///
    /// Fails with [`ConfigError::NoElements`] on an empty collection,
    /// before any element is marked or any handler attached.
    pub fn attach(
        context: &Arc<DragContext>,
        elements: impl IntoElements,
        config: SourceConfig,
    ) -> ConfigResult<Self> {
        let elements = elements.into_elements();
        if elements.is_empty() {
            return Err(ConfigError::NoElements);
        }

        let SourceConfig {
            data,
            effects,
            view,
            on_start,
            on_cancel,
            on_drop,
        } = config;
        let state = Arc::new(SourceState::new(
            effects.token(),
            data,
            view,
            SourceCallbacks {
                on_start,
                on_cancel,
                on_drop,
            },
        ));

        let mut subscriptions = Vec::with_capacity(elements.len() * 2);
        for element in &elements {
            element.set_drag_origin(true);
            subscriptions.push(element.subscribe(DragEventKind::Start, {
                let context = Arc::clone(context);
                let state = Arc::clone(&state);
                Box::new(move |event| handle_start(&context, &state, event))
            }));
            subscriptions.push(element.subscribe(DragEventKind::End, {
                let context = Arc::clone(context);
                let state = Arc::clone(&state);
                Box::new(move |event| handle_end(&context, &state, event))
            }));
        }
        debug!(elements = elements.len(), token = %state.token, "attached drag source");

        Ok(Self {
            state,
            elements,
            _subscriptions: subscriptions,
        })
    }

    /// Bind or replace the start callback.
    pub fn set_on_start(&self, callback: impl Fn(&ElementHandle) + 'static) {
        self.state.callbacks.lock().on_start = Some(Arc::new(callback));
    }

    /// Bind or replace the cancellation callback.
    pub fn set_on_cancel(&self, callback: impl Fn(&ElementHandle) + 'static) {
        self.state.callbacks.lock().on_cancel = Some(Arc::new(callback));
    }

    /// Bind or replace the drop callback.
    pub fn set_on_drop(&self, callback: impl Fn(&DropRecord) + 'static) {
        self.state.callbacks.lock().on_drop = Some(Arc::new(callback));
    }
}

impl Drop for DragSource {
    fn drop(&mut self) {
        for element in &self.elements {
            element.set_drag_origin(false);
        }
    }
}

/// Publish the source's configuration into the carrier and open the gesture.
fn handle_start(context: &DragContext, state: &Arc<SourceState>, event: &DragEvent) {
    let Some(transfer) = event.transfer() else {
        warn!(element = ?event.element(), "start event delivered without a transfer carrier");
        return;
    };

    transfer.set_allowed_effects(&state.token);
    if let Some(view) = &state.view {
        transfer.set_drag_image(&view.element, view.offset.0, view.offset.1);
    }
    for item in &state.data {
        transfer.set_data(&item.kind, &item.value);
    }

    context.begin_drag(Arc::clone(state), event.element().clone());

    let on_start = state.callbacks.lock().on_start.clone();
    if let Some(on_start) = on_start {
        on_start(event.element());
    }
}

/// Detect a gesture no drop consumed and cancel it.
///
/// The platform delivers an end event whether or not a drop occurred; a
/// gesture this source still owns at that point was not consumed. End
/// events from a superseded or already-closed gesture fail the ownership
/// check and are ignored.
fn handle_end(context: &DragContext, state: &Arc<SourceState>, event: &DragEvent) {
    if !context.owns_gesture(state) {
        return;
    }

    let on_cancel = state.callbacks.lock().on_cancel.clone();
    if let Some(on_cancel) = on_cancel {
        on_cancel(event.element());
    }
    context.cancel_drag(state);
}
