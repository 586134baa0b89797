use bevy::gltf::Gltf;
use bevy::prelude::*;

/// Handles for the two tracked assets plus orchestration flags.
///
/// Handles start as defaults and are assigned once the manifest names the
/// paths; `started` gates the polling systems until then.
#[derive(Resource, Default)]
pub struct ViewerAssets {
    pub environment: Handle<Image>,
    pub model: Handle<Gltf>,
    pub started: bool,
    pub environment_applied: bool,
    pub model_spawned: bool,
}
