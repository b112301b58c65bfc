use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::gestures::GestureController;
use crate::mapper::CoordinateMapper;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub tracking: TrackingConfig,
    pub screen: ScreenConfig,
    pub pointer: PointerConfig,
    pub overlay: OverlayConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackingConfig {
    /// Raise for asymmetric eyelids, lower when wearing glasses
    pub wink_threshold: f64,
    /// Virtual box margin, 0.0 - 0.5
    pub margin: f64,
    pub clicks_enabled: bool,
}

/// Overrides for the detected display size
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointerConfig {
    /// Stop when the cursor is parked in the top-left corner
    pub fail_safe: bool,
    pub dry_run: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    pub frame_width: u32,
    pub frame_height: u32,
    pub box_color_hex: String, // e.g. "#00FF00"
    pub dot_size: u32,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            wink_threshold: GestureController::DEFAULT_WINK_THRESHOLD,
            margin: CoordinateMapper::DEFAULT_MARGIN,
            clicks_enabled: true,
        }
    }
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self {
            fail_safe: true,
            dry_run: false,
        }
    }
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            frame_width: 640,
            frame_height: 480,
            box_color_hex: "#00FF00".to_string(),
            dot_size: 2,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tracking: TrackingConfig::default(),
            screen: ScreenConfig::default(),
            pointer: PointerConfig::default(),
            overlay: OverlayConfig::default(),
        }
    }
}

impl AppConfig {
    pub const DEFAULT_PATH: &'static str = "irisflow.json";

    /// Load from `path`, falling back to defaults when the file is missing
    /// or unreadable as config. The file is always written back so that
    /// newly added fields show up in it.
    pub fn load(path: &Path) -> Result<Self> {
        let config = if path.exists() {
            let content = fs::read_to_string(path)?;
            match serde_json::from_str::<AppConfig>(&content) {
                Ok(c) => {
                    log::info!("Loaded configuration from {}", path.display());
                    c
                }
                Err(e) => {
                    log::error!("Error parsing config {}: {}. Loading defaults.", path.display(), e);
                    Self::default()
                }
            }
        } else {
            log::info!("Configuration file not found. Creating default at {}", path.display());
            Self::default()
        };

        config.save(path)?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_writes_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("irisflow.json");
        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(path.exists());
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("irisflow.json");
        fs::write(&path, r#"{"tracking":{"wink_threshold":0.25},"screen":{"width":1280}}"#).unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.tracking.wink_threshold, 0.25);
        assert_eq!(config.tracking.margin, CoordinateMapper::DEFAULT_MARGIN);
        assert_eq!(config.screen.width, Some(1280));
        assert_eq!(config.screen.height, None);
        assert!(config.pointer.fail_safe);

        // Written back with every field present
        let saved: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert!(saved["overlay"]["frame_width"].is_number());
    }

    #[test]
    fn broken_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("irisflow.json");
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(AppConfig::load(&path).unwrap(), AppConfig::default());
    }
}
