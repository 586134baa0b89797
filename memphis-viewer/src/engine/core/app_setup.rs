use bevy::asset::AssetMetaCheck;
use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

// Crate engine modules
use crate::engine::assets::manifest::ViewerManifest;
use crate::engine::assets::viewer_assets::ViewerAssets;
use crate::engine::camera::drift_camera::{
    CameraDrift, PointerOffset, camera_drift_controller, track_pointer_offset,
};
use crate::engine::camera::orbit_drag::{OrbitDrag, orbit_drag_controller};
use crate::engine::core::app_state::{RevealState, transition_to_live};
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::asset_loader::drive_asset_loading;
use crate::engine::loading::manifest_loader::{ManifestLoader, poll_manifest, start_loading};
use crate::engine::loading::overlay::{
    despawn_loading_overlay, spawn_loading_overlay, update_loading_overlay,
};
use crate::engine::loading::tracker::LoadTracker;
use crate::engine::scene::environment::apply_environment_when_ready;
use crate::engine::scene::model::{flag_shadow_meshes, reveal_scene, spawn_model_when_ready};
use crate::engine::systems::viewport::handle_viewport_resize;

use constants::camera_settings::{
    CAMERA_DISTANCE, FAR_PLANE, FIELD_OF_VIEW_DEG, LOOK_AT_POINT, NEAR_PLANE,
};
use constants::scene_settings::BACKGROUND_COLOUR;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<RevealState>()
        // Registers ViewerManifest as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<ViewerManifest>::new(&["json"]))
        .insert_resource(ClearColor(BACKGROUND_COLOUR));

    // Initialise resources early
    app.init_resource::<LoadTracker>()
        .init_resource::<ManifestLoader>()
        .init_resource::<ViewerAssets>()
        .init_resource::<PointerOffset>()
        .init_resource::<CameraDrift>()
        .init_resource::<OrbitDrag>();

    // State-based system scheduling. The loading chain keeps per-asset
    // event order: progress, completion, and failure for one asset are
    // observed by a single system in arrival order.
    app.add_systems(Startup, (setup, start_loading).chain())
        .add_systems(
            Update,
            (
                // Loading phase systems
                poll_manifest,
                drive_asset_loading,
                apply_environment_when_ready,
                spawn_model_when_ready,
                update_loading_overlay,
                transition_to_live,
            )
                .chain()
                .run_if(in_state(RevealState::Loading)),
        )
        .add_systems(
            OnEnter(RevealState::Live),
            (despawn_loading_overlay, reveal_scene).chain(),
        );

    // Runtime systems - only run once the scene is revealed.
    app.add_systems(
        Update,
        (orbit_drag_controller, camera_drift_controller)
            .chain()
            .run_if(in_state(RevealState::Live)),
    );

    // Input and viewport systems run on all frames.
    app.add_systems(
        Update,
        (track_pointer_offset, flag_shadow_meshes, handle_viewport_resize),
    );

    app
}

// Startup system that only handles basic scene dressing.
fn setup(mut commands: Commands) {
    spawn_viewer_camera(&mut commands);
    spawn_lighting(&mut commands);
    spawn_loading_overlay(&mut commands);
}

fn spawn_viewer_camera(commands: &mut Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: FIELD_OF_VIEW_DEG.to_radians(),
            near: NEAR_PLANE,
            far: FAR_PLANE,
            ..default()
        }),
        Tonemapping::AcesFitted,
        Transform::from_xyz(0.0, 0.0, CAMERA_DISTANCE).looking_at(LOOK_AT_POINT, Vec3::Y),
    ));
}

fn spawn_lighting(commands: &mut Commands) {
    commands.spawn((
        DirectionalLight {
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::ZYX,
            0.0,
            1.0,
            -std::f32::consts::FRAC_PI_4,
        )),
    ));
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
