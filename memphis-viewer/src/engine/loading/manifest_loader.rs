use bevy::prelude::*;

use crate::engine::assets::manifest::ViewerManifest;
use crate::engine::assets::viewer_assets::ViewerAssets;
use constants::path::MANIFEST_PATH;

#[derive(Resource, Default)]
pub struct ManifestLoader {
    handle: Option<Handle<ViewerManifest>>,
}

// Start the loading process
pub fn start_loading(mut manifest_loader: ResMut<ManifestLoader>, asset_server: Res<AssetServer>) {
    manifest_loader.handle = Some(asset_server.load(MANIFEST_PATH));
}

// Begin the two tracked loads once the manifest names their paths.
pub fn poll_manifest(
    manifest_loader: Res<ManifestLoader>,
    manifests: Res<Assets<ViewerManifest>>,
    mut assets: ResMut<ViewerAssets>,
    asset_server: Res<AssetServer>,
) {
    if assets.started {
        return;
    }

    if let Some(ref handle) = manifest_loader.handle {
        if let Some(manifest) = manifests.get(handle) {
            println!("✓ Viewer manifest loaded");
            assets.environment = asset_server.load(&manifest.environment);
            assets.model = asset_server.load(&manifest.model);
            assets.started = true;
        }
    }
}
