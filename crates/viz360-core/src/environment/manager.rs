//! Environment Registry Manager: register, unregister and list environments.
//!
//! Registration provisions `img/<id>` and `presets/<id>`, writes a default
//! viewer state when none exists, then appends the registry record. Directory
//! and preset creation happen before the duplicate check and are not undone
//! when the id is already registered.
//!
//! Unregistration only ever edits the registry; asset directories are left
//! for the user to delete.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::{ClassificationConfig, PathsConfig};
use crate::error::{Error, Result};
use crate::observability;

use super::images::{count_images, list_light_images, write_image_manifest};
use super::label::DaylightClassifier;
use super::layout::PublicLayout;
use super::naming::{title_case, validate_name};
use super::registry::{EnvironmentRecord, Registry, RegistryStore};
use super::viewer_state::{write_if_absent, PresetWrite, ViewerState};

/// What happened to the registry during [`EnvironmentManager::register`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryChange {
    Added(EnvironmentRecord),
    AlreadyRegistered,
}

#[derive(Debug, Clone)]
pub struct RegisterOutcome {
    pub env_id: String,
    pub img_dir: PathBuf,
    pub preset_dir: PathBuf,
    pub preset_file: PathBuf,
    pub preset: PresetWrite,
    pub registry: RegistryChange,
    /// Light images found, in preset order.
    pub images: Vec<String>,
}

impl RegisterOutcome {
    pub fn no_images(&self) -> bool {
        self.images.is_empty()
    }
}

/// Details shown to the user before a record is removed.
#[derive(Debug, Clone)]
pub struct RemovalPlan {
    pub record: EnvironmentRecord,
    pub img_dir: PathBuf,
    pub preset_dir: PathBuf,
}

/// Capability asked to approve a removal.
pub trait ConfirmRemoval {
    fn confirm(&mut self, plan: &RemovalPlan) -> std::io::Result<bool>;
}

impl<F> ConfirmRemoval for F
where
    F: FnMut(&RemovalPlan) -> bool,
{
    fn confirm(&mut self, plan: &RemovalPlan) -> std::io::Result<bool> {
        Ok(self(plan))
    }
}

/// Approves every removal (`remove --force`).
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

impl ConfirmRemoval for AlwaysConfirm {
    fn confirm(&mut self, _plan: &RemovalPlan) -> std::io::Result<bool> {
        Ok(true)
    }
}

#[derive(Debug, Clone)]
pub enum UnregisterOutcome {
    NotFound { env_id: String },
    Declined { env_id: String },
    Removed {
        record: EnvironmentRecord,
        /// Directories left on disk for manual cleanup.
        kept_dirs: Vec<PathBuf>,
    },
}

/// Filesystem view of one registry record.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentStatus {
    #[serde(flatten)]
    pub record: EnvironmentRecord,
    pub img_dir_exists: bool,
    /// Images in the directory (final composite included); `None` when absent.
    pub image_count: Option<usize>,
    pub preset_exists: bool,
    pub thumbnail_exists: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestReport {
    pub env_id: String,
    /// `None` when the directory held no images and nothing was written.
    pub images: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct EnvironmentManager {
    layout: PublicLayout,
    store: RegistryStore,
    classifier: DaylightClassifier,
}

impl EnvironmentManager {
    pub fn new(layout: PublicLayout, classifier: DaylightClassifier) -> Self {
        let store = RegistryStore::new(layout.registry_path());
        Self {
            layout,
            store,
            classifier,
        }
    }

    /// Manager over the configured public dir (`override_dir` wins).
    pub fn from_config(override_dir: Option<&str>) -> Self {
        let paths = PathsConfig::with_override(override_dir);
        let classification = ClassificationConfig::from_env();
        Self::new(
            PublicLayout::new(paths.public_dir),
            DaylightClassifier::from_config(&classification),
        )
    }

    pub fn layout(&self) -> &PublicLayout {
        &self.layout
    }

    pub fn store(&self) -> &RegistryStore {
        &self.store
    }

    pub fn register(&self, name: &str) -> Result<RegisterOutcome> {
        let env_id = validate_name(name)?;
        let img_dir = self.layout.img_dir(&env_id);
        let preset_dir = self.layout.preset_dir(&env_id);
        let preset_file = self.layout.preset_file(&env_id);

        create_dir(&img_dir)?;
        create_dir(&preset_dir)?;

        let images = list_light_images(&img_dir)?;
        tracing::debug!(env_id = %env_id, images = images.len(), "Scanned light images");

        let state = ViewerState::synthesize(&images, &self.classifier);
        let preset = write_if_absent(&preset_file, &state)?;
        match preset {
            PresetWrite::Created => {
                tracing::info!(env_id = %env_id, path = %preset_file.display(), "Created viewer state");
                observability::audit_preset_created(&env_id, &preset_file, state.light_count());
            }
            PresetWrite::AlreadyExists => {
                tracing::info!(env_id = %env_id, path = %preset_file.display(), "Viewer state exists, left untouched");
            }
        }

        let mut registry = self.store.load()?;
        let registry_change = if registry.contains(&env_id) {
            tracing::warn!(env_id = %env_id, "Environment already registered");
            RegistryChange::AlreadyRegistered
        } else {
            let record = EnvironmentRecord::new(env_id.clone(), title_case(name));
            registry.insert(record.clone());
            self.store.save(&registry)?;
            observability::audit_environment_registered(&env_id, &record.name, images.len());
            RegistryChange::Added(record)
        };

        Ok(RegisterOutcome {
            env_id,
            img_dir,
            preset_dir,
            preset_file,
            preset,
            registry: registry_change,
            images,
        })
    }

    pub fn unregister(
        &self,
        name: &str,
        confirm: &mut dyn ConfirmRemoval,
    ) -> Result<UnregisterOutcome> {
        let env_id = validate_name(name)?;
        let mut registry = self.store.load()?;

        let Some(record) = registry.find(&env_id).cloned() else {
            return Ok(UnregisterOutcome::NotFound { env_id });
        };

        let plan = RemovalPlan {
            record,
            img_dir: self.layout.img_dir(&env_id),
            preset_dir: self.layout.preset_dir(&env_id),
        };
        if !confirm.confirm(&plan).map_err(Error::Confirmation)? {
            observability::audit_removal_declined(&env_id);
            return Ok(UnregisterOutcome::Declined { env_id });
        }

        registry.remove(&env_id);
        self.store.save(&registry)?;
        observability::audit_environment_unregistered(
            &env_id,
            &[plan.img_dir.as_path(), plan.preset_dir.as_path()],
        );
        tracing::info!(env_id = %env_id, "Removed environment from registry");

        Ok(UnregisterOutcome::Removed {
            record: plan.record,
            kept_dirs: vec![plan.img_dir, plan.preset_dir],
        })
    }

    /// Read-only status of every record, in registry order.
    pub fn list(&self) -> Result<Vec<EnvironmentStatus>> {
        let registry = self.store.load()?;
        registry
            .records()
            .iter()
            .map(|record| self.status_of(record))
            .collect()
    }

    fn status_of(&self, record: &EnvironmentRecord) -> Result<EnvironmentStatus> {
        let img_dir = self.layout.resolve_public(&record.img_path);
        let img_dir_exists = img_dir.is_dir();
        let image_count = if img_dir_exists {
            Some(count_images(&img_dir)?)
        } else {
            None
        };
        Ok(EnvironmentStatus {
            record: record.clone(),
            img_dir_exists,
            image_count,
            preset_exists: self.layout.resolve_public(&record.preset_path).is_file(),
            thumbnail_exists: self.layout.resolve_public(&record.thumbnail).is_file(),
        })
    }

    /// Write `manifest.json` for one environment, or for every directory under
    /// `img/` when `name` is `None`.
    pub fn write_manifests(&self, name: Option<&str>) -> Result<Vec<ManifestReport>> {
        let env_ids = match name {
            Some(name) => vec![validate_name(name)?],
            None => self.env_dirs()?,
        };
        let mut reports = Vec::with_capacity(env_ids.len());
        for env_id in env_ids {
            let dir = self.layout.img_dir(&env_id);
            let images = if dir.is_dir() {
                write_image_manifest(&dir)?
            } else {
                tracing::warn!(env_id = %env_id, path = %dir.display(), "Image directory missing");
                None
            };
            reports.push(ManifestReport { env_id, images });
        }
        Ok(reports)
    }

    fn env_dirs(&self) -> Result<Vec<String>> {
        let root = self.layout.img_root();
        if !root.is_dir() {
            return Ok(Vec::new());
        }
        let mut ids = Vec::new();
        for entry in fs::read_dir(&root).map_err(|e| Error::io(&root, e))? {
            let entry = entry.map_err(|e| Error::io(&root, e))?;
            if entry.path().is_dir() {
                if let Some(id) = entry.file_name().to_str() {
                    ids.push(id.to_string());
                }
            }
        }
        ids.sort();
        Ok(ids)
    }

    /// Registry as currently stored.
    pub fn registry(&self) -> Result<Registry> {
        self.store.load()
    }
}

fn create_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager(root: &Path) -> EnvironmentManager {
        EnvironmentManager::new(PublicLayout::new(root), DaylightClassifier::default())
    }

    #[test]
    fn test_register_rejects_invalid_name_before_side_effects() {
        let tmp = tempfile::tempdir().unwrap();
        let m = manager(tmp.path());
        assert!(matches!(m.register("a/b"), Err(Error::InvalidName { .. })));
        assert!(!tmp.path().join("img").exists());
        assert!(!tmp.path().join("environments.json").exists());
    }

    #[test]
    fn test_confirmation_error_propagates() {
        struct Broken;
        impl ConfirmRemoval for Broken {
            fn confirm(&mut self, _plan: &RemovalPlan) -> std::io::Result<bool> {
                Err(std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "closed"))
            }
        }
        let tmp = tempfile::tempdir().unwrap();
        let m = manager(tmp.path());
        m.register("Sala").unwrap();
        let err = m.unregister("Sala", &mut Broken).unwrap_err();
        assert!(matches!(err, Error::Confirmation(_)));
        assert_eq!(m.registry().unwrap().len(), 1);
    }

    #[test]
    fn test_write_manifests_for_all_dirs() {
        let tmp = tempfile::tempdir().unwrap();
        let m = manager(tmp.path());
        m.register("Sala").unwrap();
        m.register("Cozinha").unwrap();
        fs::write(m.layout().img_dir("sala").join("a.png"), b"").unwrap();

        let reports = m.write_manifests(None).unwrap();
        let summary: Vec<(&str, Option<usize>)> = reports
            .iter()
            .map(|r| (r.env_id.as_str(), r.images))
            .collect();
        assert_eq!(summary, vec![("cozinha", None), ("sala", Some(1))]);
        assert!(m.layout().img_dir("sala").join("manifest.json").exists());
        assert!(!m.layout().img_dir("cozinha").join("manifest.json").exists());
    }

    #[test]
    fn test_write_manifests_missing_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let reports = manager(tmp.path()).write_manifests(Some("Nada")).unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].env_id, "nada");
        assert_eq!(reports[0].images, None);
    }
}
