use bevy::prelude::*;
use bevy::window::WindowResized;

// Aspect follows the viewport; the render surface itself is resized by the
// windowing backend. No other state changes on resize.
pub fn handle_viewport_resize(
    mut resize_events: EventReader<WindowResized>,
    mut projections: Query<&mut Projection, With<Camera3d>>,
) {
    for event in resize_events.read() {
        if event.height <= 0.0 {
            continue;
        }

        let aspect = event.width / event.height;
        for mut projection in &mut projections {
            if let Projection::Perspective(perspective) = &mut *projection {
                perspective.aspect_ratio = aspect;
            }
        }
    }
}
