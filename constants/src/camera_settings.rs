use bevy::prelude::*;

/// Scalar converting raw pointer pixels into camera-target units.
pub const POINTER_SENSITIVITY: f32 = 0.002;

/// Per-frame blend factor of the drift low-pass filter.
pub const DRIFT_DAMPING: f32 = 0.05;

/// Per-frame blend factor of the drag-orbit helper.
pub const ORBIT_DAMPING: f32 = 0.05;

/// Radians of orbit rotation per pixel of drag.
pub const ORBIT_ROTATE_SENSITIVITY: f32 = 0.005;

/// Drag pitch is clamped to keep the camera off the poles.
pub const ORBIT_PITCH_LIMIT: f32 = 1.55;

/// Horizontal gain mapping smoothed drift onto camera position.
pub const DRIFT_GAIN_X: f32 = 5.0;

/// Vertical gain mapping smoothed drift onto camera position.
pub const DRIFT_GAIN_Y: f32 = 2.0;

/// Resting camera height once the scene is live.
pub const CAMERA_BASE_HEIGHT: f32 = 25.0;

/// Camera distance along Z from the scene origin.
pub const CAMERA_DISTANCE: f32 = 22.0;

pub const FIELD_OF_VIEW_DEG: f32 = 40.0;
pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 200.0;

/// Fixed point the camera aims at every frame.
pub const LOOK_AT_POINT: Vec3 = Vec3::new(0.0, 5.0, 0.0);
