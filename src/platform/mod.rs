//! Capability traits the host platform implements.
//!
//! The crate never depends on a concrete UI or event system. A host adapts
//! its native drag-and-drop machinery by implementing [`Element`] for its UI
//! handles and [`Transfer`] for its data-transfer carrier, then delivering
//! [`DragEvent`]s to the subscribed handlers in the platform's natural order
//! for a gesture: start, then enter/leave/over, then drop or end.
//!
//! ## Modules
//!
//! - `element` - element capability marking and event subscription
//! - `event` - per-event record passed to handlers
//! - `subscription` - RAII deregistration guard
//! - `transfer` - transfer carrier contract

mod element;
mod event;
mod subscription;
mod transfer;

pub use element::{Element, ElementHandle, EventHandler, IntoElements};
pub use event::{DragEvent, DragEventKind};
pub use subscription::Subscription;
pub use transfer::{Transfer, TransferHandle};
