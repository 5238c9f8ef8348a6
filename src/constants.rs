//! Crate-wide constants.
//!
//! Centralizes the protocol vocabulary shared between the effect encoding,
//! the source/target handlers, and tests.

// ============================================================================
// Transfer Data Kinds
// ============================================================================

/// Data kind a plain-string data item is written under
pub const TEXT_KIND: &str = "text";

// ============================================================================
// Effect Tokens
// ============================================================================

/// Allowed-effects token for an empty effect set
pub const EFFECT_TOKEN_NONE: &str = "none";

/// Allowed-effects token for the full move/copy/link set
pub const EFFECT_TOKEN_ALL: &str = "all";

// ============================================================================
// Drag View
// ============================================================================

/// Default x/y offset of a custom drag image from the pointer
pub const DEFAULT_VIEW_OFFSET: (f32, f32) = (0.0, 0.0);
