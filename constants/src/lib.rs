//! Shared tuning constants for the viewer.
//!
//! Camera dynamics, scene dressing values, and asset paths live here so the
//! engine modules and tests read from a single source.

/// Camera drift and drag-orbit tuning.
pub mod camera_settings;

/// Asset path configuration.
pub mod path;

/// Scene dressing: background colour and environment light intensity.
pub mod scene_settings;
