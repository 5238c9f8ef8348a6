//! Platform-agnostic drag-and-drop coordination.
//!
//! This crate wraps a host platform's native drag-and-drop event contract in
//! two independently constructible entities: a [`DragSource`] that publishes
//! data and allowed effects when a gesture starts, and a [`DropTarget`] that
//! negotiates acceptance and delivers the dropped payload. The two are tied
//! together only by a shared [`DragContext`], which tracks the single active
//! gesture of one drag-and-drop subsystem.
//!
//! ## Architecture
//!
//! ```text
//! host platform (event delivery + transfer carrier)
//!         |
//!         v
//!   platform::Element / Transfer / DragEvent        capability traits
//!         |
//!   source::DragSource -- context::DragContext -- target::DropTarget
//!         |                      |                       |
//!   effects::AllowedEffects  GestureState          types::DropPayload
//! ```
//!
//! ## A gesture, end to end
//!
//! 1. The platform delivers a start event on a source element. The source
//!    writes its effect token, drag image, and data items into the transfer
//!    carrier, opens the gesture in the context, and fires `on_start`.
//! 2. Enter and over events on target elements negotiate acceptance with the
//!    platform; over events are accepted on every occurrence.
//! 3. A drop event builds the payload from the carrier, notifies the
//!    target's `on_drop` and then the originating source's `on_drop` with
//!    the same record, and closes the gesture.
//! 4. An end event that arrives while the gesture is still open means no
//!    drop consumed it: the source fires `on_cancel` and closes the gesture.
//!
//! ## Modules
//!
//! - `constants` - protocol vocabulary shared across the crate
//! - `context` - per-subsystem gesture state machine
//! - `effects` - drop effect vocabulary and allowed-effects token encoding
//! - `error` - configuration error types
//! - `platform` - capability traits the host implements
//! - `source` - draggable element wrapper
//! - `target` - drop zone wrapper
//! - `types` - shared data model (data items, payloads, drop records)

pub mod constants;
pub mod context;
pub mod effects;
pub mod error;
pub mod platform;
pub mod source;
pub mod target;
pub mod types;

pub use context::DragContext;
pub use effects::{AllowedEffects, DropEffect};
pub use error::{ConfigError, ConfigResult};
pub use platform::{
    DragEvent, DragEventKind, Element, ElementHandle, EventHandler, IntoElements, Subscription,
    Transfer, TransferHandle,
};
pub use source::{DragSource, SourceConfig};
pub use target::{DropTarget, TargetConfig};
pub use types::{DataItem, DragView, DropPayload, DropRecord, IntoDataItems};
