//! Shared data model for drag gestures.
//!
//! These are the plain types that flow between sources, targets, and host
//! callbacks: the data items a source publishes into the transfer carrier,
//! the optional custom drag view, and the payload and record delivered on
//! drop.

use crate::constants::{DEFAULT_VIEW_OFFSET, TEXT_KIND};
use crate::platform::ElementHandle;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

// ============================================================================
// Data Items
// ============================================================================

/// One keyed entry a source publishes into the transfer carrier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataItem {
    /// Carrier data kind this item is written under (e.g. `"text"`)
    pub kind: String,
    /// String value written into the carrier
    pub value: String,
}

impl DataItem {
    pub fn new(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value: value.into(),
        }
    }

    /// Shorthand for an item under the `"text"` kind
    pub fn text(value: impl Into<String>) -> Self {
        Self::new(TEXT_KIND, value)
    }
}

impl From<&str> for DataItem {
    fn from(value: &str) -> Self {
        Self::text(value)
    }
}

impl From<String> for DataItem {
    fn from(value: String) -> Self {
        Self::text(value)
    }
}

impl From<(&str, &str)> for DataItem {
    fn from((kind, value): (&str, &str)) -> Self {
        Self::new(kind, value)
    }
}

impl From<(String, String)> for DataItem {
    fn from((kind, value): (String, String)) -> Self {
        Self::new(kind, value)
    }
}

/// One-or-many conversion for the `data` configuration field.
///
/// A bare item (or plain string) becomes a singleton sequence; collections
/// keep their order.
pub trait IntoDataItems {
    fn into_data_items(self) -> Vec<DataItem>;
}

impl IntoDataItems for DataItem {
    fn into_data_items(self) -> Vec<DataItem> {
        vec![self]
    }
}

impl IntoDataItems for &str {
    fn into_data_items(self) -> Vec<DataItem> {
        vec![self.into()]
    }
}

impl IntoDataItems for String {
    fn into_data_items(self) -> Vec<DataItem> {
        vec![self.into()]
    }
}

impl<T: Into<DataItem>> IntoDataItems for Vec<T> {
    fn into_data_items(self) -> Vec<DataItem> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T: Into<DataItem>, const N: usize> IntoDataItems for [T; N] {
    fn into_data_items(self) -> Vec<DataItem> {
        self.into_iter().map(Into::into).collect()
    }
}

// ============================================================================
// Drag View
// ============================================================================

/// Custom drag image shown while a gesture is in flight.
#[derive(Clone, Debug)]
pub struct DragView {
    /// Element rendered as the drag image
    pub element: ElementHandle,
    /// Offset of the image from the pointer, in pixels
    pub offset: (f32, f32),
}

impl DragView {
    pub fn new(element: ElementHandle) -> Self {
        Self {
            element,
            offset: DEFAULT_VIEW_OFFSET,
        }
    }

    pub fn with_offset(mut self, x: f32, y: f32) -> Self {
        self.offset = (x, y);
        self
    }
}

// ============================================================================
// Drop Payload
// ============================================================================

/// Data delivered to drop callbacks, read back out of the transfer carrier.
///
/// A carrier holding exactly one data kind degenerates to the bare value;
/// anything else is a mapping keyed by kind. Serialization is untagged so
/// the single-kind case round-trips as a plain string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DropPayload {
    /// Exactly one data kind was available
    Value(String),
    /// Zero or several data kinds, keyed by kind
    Map(BTreeMap<String, String>),
}

impl DropPayload {
    /// Build a payload from carrier entries, collapsing the single-entry
    /// case to the bare value.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut map: BTreeMap<String, String> = entries.into_iter().collect();
        if map.len() == 1 {
            if let Some((_, value)) = map.pop_first() {
                return Self::Value(value);
            }
        }
        Self::Map(map)
    }

    /// The bare value, if the payload is the single-kind case
    pub fn as_value(&self) -> Option<&str> {
        match self {
            Self::Value(value) => Some(value),
            Self::Map(_) => None,
        }
    }

    /// The keyed mapping, if the payload is the multi-kind case
    pub fn as_map(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            Self::Value(_) => None,
            Self::Map(map) => Some(map),
        }
    }
}

// ============================================================================
// Drop Record
// ============================================================================

/// Event record delivered to the target's and then the source's `on_drop`.
#[derive(Clone, Debug)]
pub struct DropRecord {
    /// Element the gesture started from; `None` when the drag did not
    /// originate from a tracked source (e.g. dragged in from outside)
    pub from: Option<ElementHandle>,
    /// Element the drop landed on
    pub to: ElementHandle,
    /// Payload read from the transfer carrier
    pub data: DropPayload,
}

// ============================================================================
// Callbacks
// ============================================================================

/// Callback invoked with a gesture element.
pub(crate) type ElementCallback = Arc<dyn Fn(&ElementHandle)>;

/// Acceptance predicate consulted on drag-enter.
pub(crate) type AcceptPredicate = Arc<dyn Fn(&ElementHandle) -> bool>;

/// Callback invoked with the drop record.
pub(crate) type DropCallback = Arc<dyn Fn(&DropRecord)>;
