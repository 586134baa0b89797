use bevy::prelude::*;

/// Background clear colour (#2D2E32).
pub const BACKGROUND_COLOUR: Color = Color::srgb(0.176, 0.180, 0.196);

/// Intensity applied to the environment light probe once decoded.
pub const ENVIRONMENT_INTENSITY: f32 = 900.0;
