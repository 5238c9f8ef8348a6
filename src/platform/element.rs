//! Element capability contract.

use crate::platform::{DragEvent, DragEventKind, Subscription};
use std::fmt;
use std::sync::Arc;

/// Handler invoked by the host each time a subscribed event kind is
/// delivered on an element.
pub type EventHandler = Box<dyn Fn(&DragEvent)>;

/// Shared handle to a host UI element.
pub type ElementHandle = Arc<dyn Element>;

/// A host UI element that can participate in drag gestures.
///
/// Both operations take `&self`: handles are shared, and handlers run on
/// the platform's single event thread, so implementations use interior
/// mutability.
pub trait Element: fmt::Debug {
    /// Mark or unmark this element as a valid drag origin.
    fn set_drag_origin(&self, draggable: bool);

    /// Register a handler for one event kind. Dropping the returned
    /// [`Subscription`] deregisters it.
    fn subscribe(&self, kind: DragEventKind, handler: EventHandler) -> Subscription;
}

/// One-or-many conversion for element arguments.
///
/// A bare element becomes a singleton set; collections keep their order.
pub trait IntoElements {
    fn into_elements(self) -> Vec<ElementHandle>;
}

impl IntoElements for ElementHandle {
    fn into_elements(self) -> Vec<ElementHandle> {
        vec![self]
    }
}

impl IntoElements for &ElementHandle {
    fn into_elements(self) -> Vec<ElementHandle> {
        vec![self.clone()]
    }
}

impl<E: Element + 'static> IntoElements for Arc<E> {
    fn into_elements(self) -> Vec<ElementHandle> {
        let handle: ElementHandle = self;
        vec![handle]
    }
}

impl<E: Element + 'static> IntoElements for &Arc<E> {
    fn into_elements(self) -> Vec<ElementHandle> {
        let handle: ElementHandle = self.clone();
        vec![handle]
    }
}

impl IntoElements for Vec<ElementHandle> {
    fn into_elements(self) -> Vec<ElementHandle> {
        self
    }
}

impl IntoElements for &[ElementHandle] {
    fn into_elements(self) -> Vec<ElementHandle> {
        self.to_vec()
    }
}
