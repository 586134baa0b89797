/// Viewer manifest naming the streamed asset paths, relative to `assets/`.
pub const MANIFEST_PATH: &str = "viewer.json";
