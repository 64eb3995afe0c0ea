//! Scanning environment image directories.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

use super::label::is_image_file;
use super::layout::FINAL_IMAGE_NAME;

/// Extensions listed in `manifest.json` (case-insensitive).
pub const MANIFEST_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "avif"];
pub const MANIFEST_FILE_NAME: &str = "manifest.json";

/// Sorted names of regular files in `dir` accepted by `keep`.
fn file_names<F>(dir: &Path, keep: F) -> Result<Vec<String>>
where
    F: Fn(&str) -> bool,
{
    let entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;
    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        if !entry.path().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            tracing::debug!(path = %entry.path().display(), "Skipping non UTF-8 file name");
            continue;
        };
        if keep(&name) {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

/// Light layers: recognized images except the final composite, sorted ascending.
pub fn list_light_images(dir: &Path) -> Result<Vec<String>> {
    file_names(dir, |name| is_image_file(name) && name != FINAL_IMAGE_NAME)
}

/// Every recognized image in `dir`, the final composite included.
pub fn count_images(dir: &Path) -> Result<usize> {
    Ok(file_names(dir, is_image_file)?.len())
}

fn is_manifest_image(name: &str) -> bool {
    name.rsplit_once('.').is_some_and(|(_, ext)| {
        MANIFEST_EXTENSIONS
            .iter()
            .any(|known| ext.eq_ignore_ascii_case(known))
    })
}

/// Write `manifest.json` listing the images in `dir`.
///
/// Returns `None` (and writes nothing) when the directory has no images.
pub fn write_image_manifest(dir: &Path) -> Result<Option<usize>> {
    let images = file_names(dir, is_manifest_image)?;
    if images.is_empty() {
        return Ok(None);
    }
    let path = dir.join(MANIFEST_FILE_NAME);
    let data = serde_json::to_string_pretty(&images).map_err(|source| Error::Serialize {
        what: "image manifest",
        source,
    })?;
    fs::write(&path, data).map_err(|e| Error::io(&path, e))?;
    Ok(Some(images.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"").unwrap();
    }

    #[test]
    fn test_list_light_images_filters_and_sorts() {
        let tmp = tempfile::tempdir().unwrap();
        for name in ["b.png", "a.jpg", "FINAL.png", "notes.txt", "C.jpeg"] {
            touch(tmp.path(), name);
        }
        fs::create_dir(tmp.path().join("sub.png")).unwrap();

        let images = list_light_images(tmp.path()).unwrap();
        assert_eq!(images, vec!["C.jpeg", "a.jpg", "b.png"]);
        assert_eq!(count_images(tmp.path()).unwrap(), 4);
    }

    #[test]
    fn test_list_light_images_missing_dir_is_error() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(list_light_images(&tmp.path().join("missing")).is_err());
    }

    #[test]
    fn test_write_image_manifest() {
        let tmp = tempfile::tempdir().unwrap();
        assert_eq!(write_image_manifest(tmp.path()).unwrap(), None);
        assert!(!tmp.path().join(MANIFEST_FILE_NAME).exists());

        for name in ["b.avif", "FINAL.png", "a.webp", "viewerState.json"] {
            touch(tmp.path(), name);
        }
        assert_eq!(write_image_manifest(tmp.path()).unwrap(), Some(3));
        let content = fs::read_to_string(tmp.path().join(MANIFEST_FILE_NAME)).unwrap();
        let listed: Vec<String> = serde_json::from_str(&content).unwrap();
        assert_eq!(listed, vec!["FINAL.png", "a.webp", "b.avif"]);
    }
}
