use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::engine::camera::orbit_drag::OrbitDrag;
use constants::camera_settings::{
    CAMERA_BASE_HEIGHT, CAMERA_DISTANCE, DRIFT_DAMPING, DRIFT_GAIN_X, DRIFT_GAIN_Y, LOOK_AT_POINT,
    POINTER_SENSITIVITY,
};

/// Latest pointer position relative to the window centre, in pixels.
/// Most-recent-wins; no history is kept.
#[derive(Resource, Default)]
pub struct PointerOffset {
    pub offset: Vec2,
}

/// Smoothed drift state, stepped once per rendered frame.
#[derive(Resource, Default)]
pub struct CameraDrift {
    pub current: Vec2,
}

impl CameraDrift {
    /// First-order low-pass toward `target`. The blend factor is applied
    /// once per frame and is not scaled by delta time.
    pub fn step_toward(&mut self, target: Vec2) -> Vec2 {
        self.current += (target - self.current) * DRIFT_DAMPING;
        self.current
    }
}

/// Camera position for a given smoothed drift value.
pub fn drift_camera_position(current: Vec2) -> Vec3 {
    Vec3::new(
        current.x * DRIFT_GAIN_X,
        CAMERA_BASE_HEIGHT + current.y * DRIFT_GAIN_Y,
        CAMERA_DISTANCE,
    )
}

/// Window-centre-relative offset for a cursor position.
pub fn centre_relative(position: Vec2, width: f32, height: f32) -> Vec2 {
    position - Vec2::new(width, height) * 0.5
}

// The conversion samples the window size at event time, so a resize only
// affects subsequent events.
pub fn track_pointer_offset(
    mut cursor_moved: EventReader<CursorMoved>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut pointer: ResMut<PointerOffset>,
) {
    let Ok(window) = windows.single() else {
        return;
    };

    for cursor in cursor_moved.read() {
        pointer.offset = centre_relative(cursor.position, window.width(), window.height());
    }
}

// Runs once per rendered frame, decoupled from pointer event frequency.
pub fn camera_drift_controller(
    pointer: Res<PointerOffset>,
    mut drift: ResMut<CameraDrift>,
    orbit: Res<OrbitDrag>,
    mut cameras: Query<&mut Transform, With<Camera3d>>,
) {
    let Ok(mut camera_transform) = cameras.single_mut() else {
        return;
    };

    let target = pointer.offset * POINTER_SENSITIVITY;
    let current = drift.step_toward(target);

    camera_transform.translation = orbit.rotate_about_target(drift_camera_position(current));
    // Orientation is recomputed from scratch each frame; no drift
    // accumulates in it.
    camera_transform.look_at(LOOK_AT_POINT, Vec3::Y);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-5,
            "{actual} not close to {expected}"
        );
    }

    #[test]
    fn first_tick_moves_five_percent_toward_target() {
        let mut drift = CameraDrift::default();
        let current = drift.step_toward(Vec2::new(1.0, -2.0));

        assert_close(current.x, 0.05);
        assert_close(current.y, -0.1);
    }

    #[test]
    fn second_tick_follows_exponential_decay() {
        let mut drift = CameraDrift::default();
        drift.step_toward(Vec2::new(1.0, -2.0));
        let current = drift.step_toward(Vec2::new(1.0, -2.0));

        assert_close(current.x, 0.0975);
        assert_close(current.y, -0.195);
    }

    #[test]
    fn converges_to_a_held_target() {
        let mut drift = CameraDrift::default();
        let target = Vec2::new(3.0, -7.0);
        for _ in 0..400 {
            drift.step_toward(target);
        }

        assert!((drift.current - target).length() < 1e-3);
    }

    #[test]
    fn zero_target_keeps_camera_at_rest() {
        let mut drift = CameraDrift::default();
        for _ in 0..10 {
            drift.step_toward(Vec2::ZERO);
        }

        assert_eq!(drift.current, Vec2::ZERO);
        assert_eq!(
            drift_camera_position(drift.current),
            Vec3::new(0.0, CAMERA_BASE_HEIGHT, CAMERA_DISTANCE)
        );
    }

    #[test]
    fn position_mapping_applies_gains_and_base_height() {
        let position = drift_camera_position(Vec2::new(1.0, 1.0));
        assert_eq!(position, Vec3::new(5.0, 27.0, CAMERA_DISTANCE));
    }

    #[test]
    fn centre_relative_offsets_are_signed() {
        assert_eq!(
            centre_relative(Vec2::new(960.0, 540.0), 1920.0, 1080.0),
            Vec2::ZERO
        );
        assert_eq!(
            centre_relative(Vec2::new(0.0, 0.0), 1920.0, 1080.0),
            Vec2::new(-960.0, -540.0)
        );
        assert_eq!(
            centre_relative(Vec2::new(1920.0, 1080.0), 1920.0, 1080.0),
            Vec2::new(960.0, 540.0)
        );
    }
}
