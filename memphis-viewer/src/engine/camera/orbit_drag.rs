use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;

use constants::camera_settings::{
    LOOK_AT_POINT, ORBIT_DAMPING, ORBIT_PITCH_LIMIT, ORBIT_ROTATE_SENSITIVITY,
};

/// Damped drag-rotation helper. Rotation only; zoom stays disabled.
#[derive(Resource, Default)]
pub struct OrbitDrag {
    pub yaw: f32,
    pub pitch: f32,
    pub target_yaw: f32,
    pub target_pitch: f32,
}

impl OrbitDrag {
    /// Damp the applied angles toward the drag targets. Per-frame blend,
    /// same coefficient as the drift filter.
    pub fn step(&mut self) {
        self.yaw += (self.target_yaw - self.yaw) * ORBIT_DAMPING;
        self.pitch += (self.target_pitch - self.pitch) * ORBIT_DAMPING;
    }

    /// Rotate a camera position about the look-at point by the damped
    /// angles.
    pub fn rotate_about_target(&self, position: Vec3) -> Vec3 {
        let rotation = Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0);
        LOOK_AT_POINT + rotation * (position - LOOK_AT_POINT)
    }
}

// Left-drag steers the rotation targets; the damped angles chase them in
// the frame loop.
pub fn orbit_drag_controller(
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut orbit: ResMut<OrbitDrag>,
) {
    let mouse_delta: Vec2 = mouse_motion.read().map(|motion| motion.delta).sum();

    if mouse_button.pressed(MouseButton::Left) && mouse_delta != Vec2::ZERO {
        orbit.target_yaw -= mouse_delta.x * ORBIT_ROTATE_SENSITIVITY;
        orbit.target_pitch -= mouse_delta.y * ORBIT_ROTATE_SENSITIVITY;
        orbit.target_pitch = orbit
            .target_pitch
            .clamp(-ORBIT_PITCH_LIMIT, ORBIT_PITCH_LIMIT);
    }

    orbit.step();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_converges_on_drag_targets() {
        let mut orbit = OrbitDrag {
            target_yaw: 1.2,
            target_pitch: -0.4,
            ..Default::default()
        };
        for _ in 0..400 {
            orbit.step();
        }

        assert!((orbit.yaw - 1.2).abs() < 1e-3);
        assert!((orbit.pitch + 0.4).abs() < 1e-3);
    }

    #[test]
    fn zero_angles_leave_position_unchanged() {
        let orbit = OrbitDrag::default();
        let position = Vec3::new(0.0, 25.0, 22.0);
        assert_eq!(orbit.rotate_about_target(position), position);
    }

    #[test]
    fn half_turn_yaw_mirrors_about_the_look_at_point() {
        let orbit = OrbitDrag {
            yaw: std::f32::consts::PI,
            ..Default::default()
        };
        let rotated = orbit.rotate_about_target(Vec3::new(0.0, 5.0, 22.0));

        assert!((rotated - Vec3::new(0.0, 5.0, -22.0)).length() < 1e-4);
    }

    #[test]
    fn rotation_preserves_distance_to_the_look_at_point() {
        let orbit = OrbitDrag {
            yaw: 0.7,
            pitch: -0.3,
            ..Default::default()
        };
        let position = Vec3::new(2.5, 26.0, 22.0);
        let rotated = orbit.rotate_about_target(position);

        let before = (position - LOOK_AT_POINT).length();
        let after = (rotated - LOOK_AT_POINT).length();
        assert!((before - after).abs() < 1e-4);
    }
}
