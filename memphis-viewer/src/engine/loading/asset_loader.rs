use bevy::asset::LoadState;
use bevy::gltf::Gltf;
use bevy::prelude::*;

use crate::engine::assets::viewer_assets::ViewerAssets;
use crate::engine::loading::overlay::spawn_environment_failure_notice;
use crate::engine::loading::tracker::{LoadTracker, TrackedAsset};

// Poll the streaming loader and feed per-asset events to the tracker.
// A single chained system observes both assets, so progress, completion,
// and failure for one asset arrive at the tracker in order.
pub fn drive_asset_loading(
    mut tracker: ResMut<LoadTracker>,
    mut commands: Commands,
    assets: Res<ViewerAssets>,
    asset_server: Res<AssetServer>,
    gltfs: Res<Assets<Gltf>>,
) {
    if !assets.started {
        return;
    }

    match asset_server.get_load_state(&assets.environment) {
        Some(LoadState::Loaded) => {
            if !tracker.slot(TrackedAsset::Environment).loaded {
                println!("✓ Environment light probe decoded");
            }
            tracker.report_complete(TrackedAsset::Environment);
        }
        Some(LoadState::Failed(err)) => {
            if !tracker.slot(TrackedAsset::Environment).failed {
                error!("Environment light probe failed to load: {err}");
                spawn_environment_failure_notice(&mut commands);
                tracker.report_failure(TrackedAsset::Environment);
            }
        }
        _ => {}
    }

    match asset_server.get_load_state(&assets.model) {
        Some(LoadState::Failed(err)) => {
            // Log-only: no on-screen notice for the model asset.
            if !tracker.slot(TrackedAsset::Model).failed {
                error!("Scene model failed to load: {err}");
                tracker.report_failure(TrackedAsset::Model);
            }
        }
        _ => {
            if asset_server.is_loaded_with_dependencies(&assets.model) {
                if !tracker.slot(TrackedAsset::Model).loaded {
                    println!("✓ Scene model loaded with dependencies");
                }
                tracker.report_complete(TrackedAsset::Model);
            } else if let Some(gltf) = gltfs.get(&assets.model) {
                let (loaded, total) = count_loaded_sub_assets(gltf, &asset_server);
                tracker.report_progress(TrackedAsset::Model, loaded, total);
            }
        }
    }
}

// Decoded sub-asset counts stand in for the byte ratio the streaming
// loader itself does not expose.
fn count_loaded_sub_assets(gltf: &Gltf, asset_server: &AssetServer) -> (u64, u64) {
    let sub_assets = gltf
        .scenes
        .iter()
        .map(|handle| handle.id().untyped())
        .chain(gltf.meshes.iter().map(|handle| handle.id().untyped()))
        .chain(gltf.materials.iter().map(|handle| handle.id().untyped()))
        .chain(gltf.nodes.iter().map(|handle| handle.id().untyped()));

    let mut loaded = 0u64;
    let mut total = 0u64;
    for id in sub_assets {
        total += 1;
        if matches!(asset_server.get_load_state(id), Some(LoadState::Loaded)) {
            loaded += 1;
        }
    }

    (loaded, total)
}
