//! Classifier settings and their persistence
//!
//! Saves and loads [`ClassifierSettings`] to/from a JSON file in the user's
//! configuration directory.
//!
//! # Error Handling
//!
//! [`load_settings`] and [`save_settings`] return [`CoreResult`]. The
//! convenience [`load_or_default`] logs the failure and falls back to
//! defaults, so a broken file never stops classification.

use super::error::{CoreError, CoreResult};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// Tunables for the heuristic and for change-event debouncing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierSettings {
    /// Insert the device-pixel-ratio / screen-size tier between the native
    /// query and the touch fallback
    pub resolution_tiers: bool,
    /// Minimum device pixel ratio treated as a high-density touch screen
    pub dpr_threshold: f64,
    /// Widest viewport (px) still classified as a small screen
    pub small_max_width: u32,
    /// Widest viewport (px) still classified as a medium screen
    pub medium_max_width: u32,
    /// Quiescence delay before a burst of resize events re-classifies
    pub debounce_ms: u64,
}

impl Default for ClassifierSettings {
    fn default() -> Self {
        Self {
            resolution_tiers: false,
            dpr_threshold: 2.0,
            small_max_width: 1023,
            medium_max_width: 1280,
            debounce_ms: 250,
        }
    }
}

impl ClassifierSettings {
    /// Settings with the resolution tier switched on
    pub fn with_resolution_tiers() -> Self {
        Self {
            resolution_tiers: true,
            ..Self::default()
        }
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Reject values that would make the screen tiers meaningless
    pub fn validate(&self) -> CoreResult<()> {
        if self.small_max_width >= self.medium_max_width {
            return Err(CoreError::InvalidSettings {
                message: format!(
                    "small_max_width ({}) must be below medium_max_width ({})",
                    self.small_max_width, self.medium_max_width
                ),
            });
        }
        if !self.dpr_threshold.is_finite() || self.dpr_threshold <= 0.0 {
            return Err(CoreError::InvalidSettings {
                message: format!("dpr_threshold must be positive, got {}", self.dpr_threshold),
            });
        }
        Ok(())
    }
}

/// Resolve the settings file path
///
/// Returns `settings.json` in the user's configuration directory, or a local
/// `settings.json` if no config directory can be determined.
pub fn settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("org", "pointer-accuracy", "pointer-accuracy") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        PathBuf::from(SETTINGS_FILENAME)
    }
}

/// Read and validate settings from `path`
pub fn load_settings(path: &Path) -> CoreResult<ClassifierSettings> {
    let contents = fs::read_to_string(path)?;
    let settings: ClassifierSettings = serde_json::from_str(&contents)?;
    settings.validate()?;
    info!("[SETTINGS] Loaded settings from {:?}", path);
    Ok(settings)
}

/// Load settings from `path`, falling back to defaults on any failure
pub fn load_or_default(path: &Path) -> ClassifierSettings {
    if !path.exists() {
        info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path);
        return ClassifierSettings::default();
    }
    match load_settings(path) {
        Ok(settings) => settings,
        Err(e) => {
            warn!(
                "[SETTINGS] Failed to load settings file at {:?}: {}. Using defaults.",
                path, e
            );
            ClassifierSettings::default()
        }
    }
}

/// Write settings to `path` as pretty JSON, creating parent directories
pub fn save_settings(settings: &ClassifierSettings, path: &Path) -> CoreResult<()> {
    settings.validate()?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    info!("[SETTINGS] Saved settings to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_follow_touch_only_heuristic() {
        let settings = ClassifierSettings::default();
        assert!(!settings.resolution_tiers);
        assert_eq!(settings.dpr_threshold, 2.0);
        assert_eq!(settings.small_max_width, 1023);
        assert_eq!(settings.medium_max_width, 1280);
        assert_eq!(settings.debounce(), Duration::from_millis(250));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_overlapping_breakpoints() {
        let settings = ClassifierSettings {
            small_max_width: 1280,
            ..ClassifierSettings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(CoreError::InvalidSettings { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_bad_dpr_threshold() {
        for dpr_threshold in [0.0, -1.0, f64::NAN] {
            let settings = ClassifierSettings {
                dpr_threshold,
                ..ClassifierSettings::default()
            };
            assert!(settings.validate().is_err(), "accepted {dpr_threshold}");
        }
    }

    #[test]
    fn test_partial_document_fills_defaults() {
        let settings: ClassifierSettings =
            serde_json::from_str(r#"{"resolution_tiers": true}"#).unwrap();
        assert_eq!(settings, ClassifierSettings::with_resolution_tiers());
    }

    #[test]
    fn test_settings_path_ends_with_filename() {
        assert!(settings_path().ends_with(SETTINGS_FILENAME));
    }
}
