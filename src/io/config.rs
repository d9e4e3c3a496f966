// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Operator configuration.
//!
//! The config file carries the working frame dimensions and the ordered
//! list of event names the operator can attach to a frame.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Labelling configuration loaded from the operator's config JSON.
///
/// Extra keys in the file (renderer settings and the like) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelConfig {
    pub width: u32,
    pub height: u32,
    pub events: Vec<String>,
}

impl LabelConfig {
    /// Parse a configuration from a JSON document.
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Load the configuration from a JSON file.
pub fn load_config(path: &Path) -> Result<LabelConfig> {
    let text = std::fs::read_to_string(path)?;
    let config = LabelConfig::from_json_str(&text)?;
    log::info!(
        "loaded config: {}x{}, {} events",
        config.width,
        config.height,
        config.events.len()
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let text = r#"{"width": 640, "height": 480, "events": ["car_in", "car_out"]}"#;
        let config = LabelConfig::from_json_str(text).unwrap();
        assert_eq!(config.width, 640);
        assert_eq!(config.events, vec!["car_in", "car_out"]);
    }

    #[test]
    fn test_unknown_keys_tolerated() {
        let text = r#"{"width": 10, "height": 10, "events": [], "window_name": "x"}"#;
        assert!(LabelConfig::from_json_str(text).is_ok());
    }

    #[test]
    fn test_missing_fields_rejected() {
        assert!(LabelConfig::from_json_str(r#"{"width": 10}"#).is_err());
    }
}
