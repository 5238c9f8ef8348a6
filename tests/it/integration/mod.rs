//! Integration tests for humandrag.
//!
//! These tests drive complete gestures through the in-memory test platform
//! and verify the coordination between sources, the gesture context, and
//! targets.

mod cancel_flow_tests;
