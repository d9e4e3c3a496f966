// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Persisted labelling results.
//!
//! Results are stored per frame index as a rectangle list plus an
//! optional event name. Import is strict at the file and record level
//! but lenient per rectangle: an entry of wrong arity or with
//! non-integer components is dropped with a warning instead of failing
//! the whole load.

use crate::models::rect::Rect;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

/// The labelling outcome of one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FrameRecord {
    pub rois: Vec<[i32; 4]>,
    pub event: Option<String>,
}

impl FrameRecord {
    /// Build a record from editor-exported rectangles and an event.
    pub fn new(rois: Vec<[i32; 4]>, event: Option<String>) -> Self {
        Self { rois, event }
    }

    /// True when there is neither a rectangle nor an event to keep.
    pub fn is_empty(&self) -> bool {
        self.rois.is_empty() && self.event.is_none()
    }

    /// The rectangles as value types.
    pub fn rects(&self) -> Vec<Rect> {
        self.rois.iter().map(|a| Rect::from_array(*a)).collect()
    }
}

/// All labelled frames of one video, ordered by frame index.
pub type ResultsStore = BTreeMap<u32, FrameRecord>;

/// Wire form of a record: rectangles arrive as arbitrary JSON values
/// and are validated entry by entry.
#[derive(Debug, Deserialize)]
struct RawFrameRecord {
    #[serde(default)]
    rois: Vec<Value>,
    #[serde(default)]
    event: Option<String>,
}

/// Validate one persisted rectangle entry.
///
/// Accepts exactly four integer components within `i32` range; anything
/// else is rejected.
fn sanitize_entry(value: &Value) -> Option<[i32; 4]> {
    let items = value.as_array()?;
    if items.len() != 4 {
        return None;
    }

    let mut out = [0i32; 4];
    for (slot, item) in out.iter_mut().zip(items) {
        *slot = item.as_i64().and_then(|n| i32::try_from(n).ok())?;
    }
    Some(out)
}

fn sanitize(frame: u32, raw: RawFrameRecord) -> FrameRecord {
    let mut rois = Vec::with_capacity(raw.rois.len());
    for value in &raw.rois {
        match sanitize_entry(value) {
            Some(roi) => rois.push(roi),
            None => log::warn!("frame {}: dropping malformed roi entry {}", frame, value),
        }
    }
    FrameRecord { rois, event: raw.event }
}

fn sanitize_all(raw: BTreeMap<u32, RawFrameRecord>) -> ResultsStore {
    raw.into_iter()
        .map(|(frame, record)| (frame, sanitize(frame, record)))
        .collect()
}

/// Parse results from a JSON document.
pub fn results_from_json_str(text: &str) -> Result<ResultsStore> {
    let raw: BTreeMap<u32, RawFrameRecord> = serde_json::from_str(text)?;
    Ok(sanitize_all(raw))
}

/// Parse results from a YAML document.
pub fn results_from_yaml_str(text: &str) -> Result<ResultsStore> {
    let raw: BTreeMap<u32, RawFrameRecord> = serde_yaml::from_str(text)?;
    Ok(sanitize_all(raw))
}

/// Import results from a JSON file.
pub fn import_json(path: &Path) -> Result<ResultsStore> {
    let text = std::fs::read_to_string(path)?;
    let store = results_from_json_str(&text)?;
    log::info!("loaded results for {} frames from {}", store.len(), path.display());
    Ok(store)
}

/// Import results from a YAML file.
pub fn import_yaml(path: &Path) -> Result<ResultsStore> {
    let text = std::fs::read_to_string(path)?;
    let store = results_from_yaml_str(&text)?;
    log::info!("loaded results for {} frames from {}", store.len(), path.display());
    Ok(store)
}

/// Export results to a JSON file.
pub fn export_json(store: &ResultsStore, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(store)?;
    std::fs::write(path, json)?;
    log::info!("saved results for {} frames to {}", store.len(), path.display());
    Ok(())
}

/// Export results to a YAML file.
pub fn export_yaml(store: &ResultsStore, path: &Path) -> Result<()> {
    let yaml = serde_yaml::to_string(store)?;
    std::fs::write(path, yaml)?;
    log::info!("saved results for {} frames to {}", store.len(), path.display());
    Ok(())
}
