//! RAII guard for event subscriptions.

use std::fmt;

/// Deregistration guard returned by
/// [`Element::subscribe`](crate::platform::Element::subscribe).
///
/// Dropping the guard removes the handler from the element. Call
/// [`detach`](Subscription::detach) to keep the handler registered for the
/// element's remaining lifetime instead.
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Wrap the host's deregistration action.
    pub fn new(unsubscribe: impl FnOnce() + 'static) -> Self {
        Self {
            unsubscribe: Some(Box::new(unsubscribe)),
        }
    }

    /// Keep the handler registered; the guard becomes inert.
    pub fn detach(mut self) {
        self.unsubscribe = None;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.unsubscribe.is_some())
            .finish()
    }
}
