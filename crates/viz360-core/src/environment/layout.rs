//! On-disk layout of the public asset tree and the public URLs stored in records.
//!
//! ```text
//! <public>/environments.json
//! <public>/img/<id>/            light layers + FINAL.png
//! <public>/presets/<id>/viewerState.json
//! ```

use std::path::{Path, PathBuf};

pub const REGISTRY_FILE_NAME: &str = "environments.json";
pub const PRESET_FILE_NAME: &str = "viewerState.json";
pub const IMG_DIR_NAME: &str = "img";
pub const PRESETS_DIR_NAME: &str = "presets";
/// Composite render used as thumbnail; never a light layer.
pub const FINAL_IMAGE_NAME: &str = "FINAL.png";

#[derive(Debug, Clone)]
pub struct PublicLayout {
    root: PathBuf,
}

impl PublicLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn registry_path(&self) -> PathBuf {
        self.root.join(REGISTRY_FILE_NAME)
    }

    pub fn img_root(&self) -> PathBuf {
        self.root.join(IMG_DIR_NAME)
    }

    pub fn img_dir(&self, env_id: &str) -> PathBuf {
        self.img_root().join(env_id)
    }

    pub fn preset_dir(&self, env_id: &str) -> PathBuf {
        self.root.join(PRESETS_DIR_NAME).join(env_id)
    }

    pub fn preset_file(&self, env_id: &str) -> PathBuf {
        self.preset_dir(env_id).join(PRESET_FILE_NAME)
    }

    /// Map a public URL path such as `/img/sala` onto the asset tree.
    pub fn resolve_public(&self, public_path: &str) -> PathBuf {
        self.root.join(public_path.trim_start_matches('/'))
    }
}

pub fn public_img_path(env_id: &str) -> String {
    format!("/{}/{}", IMG_DIR_NAME, env_id)
}

pub fn public_preset_path(env_id: &str) -> String {
    format!("/{}/{}/{}", PRESETS_DIR_NAME, env_id, PRESET_FILE_NAME)
}

pub fn public_thumbnail_path(env_id: &str) -> String {
    format!("/{}/{}/{}", IMG_DIR_NAME, env_id, FINAL_IMAGE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_paths() {
        assert_eq!(public_img_path("sala-2"), "/img/sala-2");
        assert_eq!(
            public_preset_path("sala-2"),
            "/presets/sala-2/viewerState.json"
        );
        assert_eq!(public_thumbnail_path("sala-2"), "/img/sala-2/FINAL.png");
    }

    #[test]
    fn test_resolve_public_matches_layout() {
        let layout = PublicLayout::new("/srv/site/public");
        assert_eq!(
            layout.resolve_public(&public_img_path("cozinha")),
            layout.img_dir("cozinha")
        );
        assert_eq!(
            layout.resolve_public(&public_preset_path("cozinha")),
            layout.preset_file("cozinha")
        );
        assert_eq!(
            layout.registry_path(),
            Path::new("/srv/site/public/environments.json")
        );
    }
}
