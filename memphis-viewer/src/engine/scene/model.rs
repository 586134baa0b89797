use bevy::gltf::Gltf;
use bevy::pbr::{NotShadowCaster, NotShadowReceiver};
use bevy::prelude::*;

use crate::engine::assets::viewer_assets::ViewerAssets;
use crate::engine::loading::tracker::{LoadTracker, TrackedAsset};

/// Root of the spawned model scene, hidden until the reveal.
#[derive(Component)]
pub struct ModelRoot;

// Spawn the decoded default scene under a hidden root once streaming
// finishes.
pub fn spawn_model_when_ready(
    mut assets: ResMut<ViewerAssets>,
    tracker: Res<LoadTracker>,
    gltfs: Res<Assets<Gltf>>,
    mut commands: Commands,
) {
    if assets.model_spawned || !tracker.slot(TrackedAsset::Model).loaded {
        return;
    }

    let Some(gltf) = gltfs.get(&assets.model) else {
        return;
    };
    let Some(scene) = gltf
        .default_scene
        .clone()
        .or_else(|| gltf.scenes.first().cloned())
    else {
        warn!("Scene model contains no scenes; nothing to spawn");
        assets.model_spawned = true;
        return;
    };

    commands.spawn((
        SceneRoot(scene),
        Transform::default(),
        Visibility::Hidden,
        ModelRoot,
    ));
    assets.model_spawned = true;
    println!("✓ Scene model spawned, awaiting reveal");
}

// Every mesh both casts and receives shadows; strip any opt-out markers
// carried in from the asset.
pub fn flag_shadow_meshes(mut commands: Commands, meshes: Query<Entity, Added<Mesh3d>>) {
    for entity in &meshes {
        commands
            .entity(entity)
            .remove::<NotShadowCaster>()
            .remove::<NotShadowReceiver>();
    }
}

// Reveal choreography. The state machine enters Live exactly once, so this
// runs exactly once.
pub fn reveal_scene(mut roots: Query<&mut Visibility, With<ModelRoot>>) {
    for mut visibility in &mut roots {
        *visibility = Visibility::Visible;
    }
    println!("→ Scene revealed, frame loop live");
}
