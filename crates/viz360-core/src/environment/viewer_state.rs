//! Default viewer-state preset synthesized from an environment's light images.
//!
//! The preset is written once. Afterwards it belongs to the viewer, which adds
//! hotspots, portals and light points; nothing here rewrites an existing file.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

use super::label::{sanitize_label, DaylightClassifier};

/// Initial slider value for every light and for the daylight master.
pub const DEFAULT_INTENSITY: u32 = 50;
/// `values` key of the ambient daylight master control.
pub const DAYLIGHT_KEY: &str = "__daylight";

/// Per-light descriptor. Wire names are the ones the viewer reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightState {
    #[serde(rename = "nome")]
    pub label: String,
    #[serde(rename = "estado")]
    pub enabled: bool,
    #[serde(rename = "dimmerizavel")]
    pub dimmable: bool,
    #[serde(rename = "valor")]
    pub value: u32,
    /// Spatial points placed in the viewer; opaque here.
    #[serde(rename = "pontos", default)]
    pub points: Vec<Value>,
}

impl LightState {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            enabled: true,
            dimmable: false,
            value: DEFAULT_INTENSITY,
            points: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerState {
    /// Keyed in image order, daylight master last.
    pub values: IndexMap<String, u32>,
    pub lights_state: IndexMap<String, LightState>,
    #[serde(default)]
    pub hotspots: Vec<Value>,
    #[serde(default)]
    pub portals: Vec<Value>,
    #[serde(default)]
    pub debug_click: bool,
    #[serde(default)]
    pub show_final: bool,
    #[serde(default)]
    pub daylight_targets: Vec<String>,
}

impl ViewerState {
    /// Build the default preset for `images`, iterated in the given order.
    pub fn synthesize(images: &[String], classifier: &DaylightClassifier) -> Self {
        let mut values = IndexMap::with_capacity(images.len() + 1);
        let mut lights_state = IndexMap::with_capacity(images.len());
        let mut daylight_targets = Vec::new();

        for image in images {
            let label = sanitize_label(image);
            values.insert(image.clone(), DEFAULT_INTENSITY);
            if classifier.is_daylight(&label) {
                daylight_targets.push(image.clone());
            }
            lights_state.insert(image.clone(), LightState::new(label));
        }
        values.insert(DAYLIGHT_KEY.to_string(), DEFAULT_INTENSITY);

        Self {
            values,
            lights_state,
            hotspots: Vec::new(),
            portals: Vec::new(),
            debug_click: false,
            show_final: false,
            daylight_targets,
        }
    }

    pub fn light_count(&self) -> usize {
        self.lights_state.len()
    }
}

/// Result of [`write_if_absent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PresetWrite {
    Created,
    AlreadyExists,
}

/// Write `state` to `path` unless a file is already there.
pub fn write_if_absent(path: &Path, state: &ViewerState) -> Result<PresetWrite> {
    if path.exists() {
        return Ok(PresetWrite::AlreadyExists);
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    let data = serde_json::to_string_pretty(state).map_err(|source| Error::Serialize {
        what: "viewer state",
        source,
    })?;
    fs::write(path, data).map_err(|e| Error::io(path, e))?;
    Ok(PresetWrite::Created)
}
