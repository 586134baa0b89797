//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration, the reveal state
//! machine, and plugin initialisation for both native and WASM targets.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Creates the main app with the loading chain, the reveal choreography,
/// and the live camera systems.
pub mod app_setup;

/// Reveal state machine and the one-shot Loading to Live transition.
pub mod app_state;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration for web targets and vsync settings.
pub mod window_config;
