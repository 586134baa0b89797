//! Asset loading orchestration for the viewer.
//!
//! Manages the load pipeline from manifest parsing through streaming
//! progress aggregation to the one-shot reveal signal.

/// Streaming-loader polling that feeds per-asset events to the tracker.
pub mod asset_loader;

/// Manifest loading that kicks off the two tracked asset loads.
pub mod manifest_loader;

/// Progress surface: bar, percentage label, and failure notice.
pub mod overlay;

/// Per-asset load slots, aggregate percentage, and the ready signal.
pub mod tracker;
