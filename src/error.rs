//! Error types for source and target configuration.
//!
//! Runtime drag handling has no failure modes of its own: callback panics
//! propagate to the event dispatcher untouched, and protocol misuse is
//! logged rather than raised.

use thiserror::Error;

/// Errors that can occur while building a drag source or drop target
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Effect name outside the move/copy/link vocabulary
    #[error("unknown effect \"{name}\" (expected \"move\", \"copy\", or \"link\")")]
    UnknownEffect { name: String },

    /// Attach was given an empty element collection
    #[error("no elements supplied")]
    NoElements,
}

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
