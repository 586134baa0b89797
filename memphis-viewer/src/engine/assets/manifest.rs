use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Viewer manifest as a Bevy asset. Mirrors the JSON structure exactly.
///
/// Names the environment light probe and the scene model, relative to the
/// asset root. Configuration only; the manifest itself is not a tracked
/// asset.
#[derive(Asset, Debug, Clone, Serialize, Deserialize, TypePath)]
pub struct ViewerManifest {
    pub environment: String,
    pub model: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialises_viewer_manifest() {
        let manifest: ViewerManifest = serde_json::from_str(
            r#"{ "environment": "environment/light.ktx2", "model": "models/memphis.glb" }"#,
        )
        .expect("manifest JSON should parse");

        assert_eq!(manifest.environment, "environment/light.ktx2");
        assert_eq!(manifest.model, "models/memphis.glb");
    }

    #[test]
    fn rejects_manifest_missing_model() {
        let result: Result<ViewerManifest, _> =
            serde_json::from_str(r#"{ "environment": "environment/light.ktx2" }"#);
        assert!(result.is_err());
    }
}
