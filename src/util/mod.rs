//! Shared utilities.

/// Fixed-rate tick clock.
pub mod frame_timing;
