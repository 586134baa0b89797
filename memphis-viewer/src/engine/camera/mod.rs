//! Camera systems for the live scene.
//!
//! Pointer-driven drift with exponential damping, plus a damped drag-orbit
//! helper. Both step once per rendered frame.

/// Pointer offset tracking and the per-frame drift controller.
pub mod drift_camera;

/// Damped drag-orbit rotation about the look-at point.
pub mod orbit_drag;
