//! Frame-to-frame support systems.

/// Viewport resize handling for the camera projection.
pub mod viewport;
