use bevy::pbr::prelude::EnvironmentMapLight;
use bevy::prelude::*;

use crate::engine::assets::viewer_assets::ViewerAssets;
use crate::engine::loading::tracker::{LoadTracker, TrackedAsset};
use constants::scene_settings::ENVIRONMENT_INTENSITY;

// Attach the probe to the camera as soon as it decodes. The model scene
// stays hidden until both assets are in; the light does not.
pub fn apply_environment_when_ready(
    mut assets: ResMut<ViewerAssets>,
    tracker: Res<LoadTracker>,
    mut commands: Commands,
    cameras: Query<Entity, With<Camera3d>>,
) {
    if assets.environment_applied || !tracker.slot(TrackedAsset::Environment).loaded {
        return;
    }

    for camera in &cameras {
        commands.entity(camera).insert(EnvironmentMapLight {
            diffuse_map: assets.environment.clone(),
            specular_map: assets.environment.clone(),
            intensity: ENVIRONMENT_INTENSITY,
            ..default()
        });
    }

    assets.environment_applied = true;
    println!("✓ Environment light probe applied");
}
