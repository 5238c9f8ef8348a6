//! Per-event record delivered to subscribed handlers.

use crate::platform::{ElementHandle, Transfer, TransferHandle};
use std::cell::Cell;
use std::fmt;

/// The six event kinds of a native drag gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DragEventKind {
    /// A gesture started on a source element
    Start,
    /// The pointer entered a target element mid-gesture
    Enter,
    /// The pointer left a target element mid-gesture
    Leave,
    /// The pointer is hovering a target element; fires repeatedly
    Over,
    /// The gesture ended with a drop on a target element
    Drop,
    /// The gesture ended, with or without a drop; delivered to the source
    End,
}

/// One delivered drag event.
///
/// Built by the host for each native event. Start, enter, and drop events
/// carry the transfer carrier; leave, over, and end events do not need it.
pub struct DragEvent {
    element: ElementHandle,
    transfer: Option<TransferHandle>,
    accepted: Cell<bool>,
}

impl DragEvent {
    pub fn new(element: ElementHandle, transfer: Option<TransferHandle>) -> Self {
        Self {
            element,
            transfer,
            accepted: Cell::new(false),
        }
    }

    /// Element the event was delivered on
    pub fn element(&self) -> &ElementHandle {
        &self.element
    }

    /// Transfer carrier accompanying the event, if the host supplied one
    pub fn transfer(&self) -> Option<&dyn Transfer> {
        self.transfer.as_deref()
    }

    /// Suppress the platform's default behavior, signaling that the handler
    /// accepts the operation. Hosts read the flag back after dispatch.
    pub fn accept(&self) {
        self.accepted.set(true);
    }

    /// Whether [`accept`](Self::accept) was called during dispatch
    pub fn is_accepted(&self) -> bool {
        self.accepted.get()
    }
}

impl fmt::Debug for DragEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragEvent")
            .field("element", &self.element)
            .field("has_transfer", &self.transfer.is_some())
            .field("accepted", &self.accepted.get())
            .finish()
    }
}
