//! The registry document: `environments.json`, an ordered JSON array of
//! environment records keyed by `id`.
//!
//! Loads and saves are whole-file. A missing file is an empty registry; a file
//! that does not parse is fatal.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::layout::{public_img_path, public_preset_path, public_thumbnail_path};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentRecord {
    pub id: String,
    pub name: String,
    pub img_path: String,
    pub preset_path: String,
    pub thumbnail: String,
}

impl EnvironmentRecord {
    /// Record with the conventional public paths for `id`.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            img_path: public_img_path(&id),
            preset_path: public_preset_path(&id),
            thumbnail: public_thumbnail_path(&id),
            name: name.into(),
            id,
        }
    }
}

/// Records in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Registry {
    records: Vec<EnvironmentRecord>,
}

impl Registry {
    pub fn new(records: Vec<EnvironmentRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[EnvironmentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&EnvironmentRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Append unless a record with the same id exists. Returns whether it was added.
    pub fn insert(&mut self, record: EnvironmentRecord) -> bool {
        if self.contains(&record.id) {
            return false;
        }
        self.records.push(record);
        true
    }

    /// Remove every record with `id`, returning the first one removed.
    pub fn remove(&mut self, id: &str) -> Option<EnvironmentRecord> {
        let idx = self.records.iter().position(|r| r.id == id)?;
        let removed = self.records.remove(idx);
        self.records.retain(|r| r.id != id);
        Some(removed)
    }
}

/// File-backed store for the registry document.
#[derive(Debug, Clone)]
pub struct RegistryStore {
    path: PathBuf,
}

impl RegistryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Registry> {
        if !self.path.exists() {
            return Ok(Registry::default());
        }
        let content = fs::read_to_string(&self.path).map_err(|e| Error::io(&self.path, e))?;
        serde_json::from_str(&content).map_err(|source| Error::MalformedRegistry {
            path: self.path.clone(),
            source,
        })
    }

    pub fn save(&self, registry: &Registry) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        let data = serde_json::to_string_pretty(registry).map_err(|source| Error::Serialize {
            what: "registry",
            source,
        })?;
        fs::write(&self.path, data).map_err(|e| Error::io(&self.path, e))?;
        tracing::debug!(path = %self.path.display(), records = registry.len(), "Saved registry");
        Ok(())
    }
}
