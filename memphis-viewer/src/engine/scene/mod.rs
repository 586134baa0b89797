//! Scene content systems: environment lighting and the streamed model.

/// Environment light probe application once decoded.
pub mod environment;

/// Model scene spawning, shadow flags, and the reveal choreography.
pub mod model;
