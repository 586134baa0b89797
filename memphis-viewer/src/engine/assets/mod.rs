//! Asset configuration and handle management for the viewer.

/// Viewer manifest naming the two streamed asset paths.
pub mod manifest;

/// Handles and orchestration flags for the tracked assets.
pub mod viewer_assets;
