//! Controller configuration
//!
//! Every field has a default matching the server-rendered templates, so an
//! empty JSON object (or no file at all) yields a working configuration.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::Breakpoints;

/// Default alert shown when a form is submitted with empty required fields
pub const DEFAULT_REQUIRED_FIELDS_ALERT: &str = "Bitte fülle alle Pflichtfelder aus.";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    pub navigation: NavigationConfig,
    pub notifications: NotificationConfig,
    pub theme: ThemeConfig,
    pub forms: FormConfig,
    pub search: SearchConfig,
    pub breakpoints: Breakpoints,
}

impl ControllerConfig {
    /// Parses a JSON document; missing fields use their defaults.
    pub fn from_json_str(json: &str) -> CoreResult<Self> {
        serde_json::from_str(json).map_err(|e| CoreError::ConfigError(e.to_string()))
    }

    /// Loads from a JSON file; a missing file yields the defaults.
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| CoreError::ConfigError(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&content)
    }
}

/// Side panel wiring
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub panel_id: String,
    pub toggle_id: String,
    pub overlay_id: String,
    /// Class on the panel while open
    pub open_class: String,
    /// Class on the overlay while hidden
    pub overlay_hidden_class: String,
    /// Delay before re-reading the viewport after an orientation change
    pub orientation_settle_ms: u64,
}

impl NavigationConfig {
    pub fn orientation_settle(&self) -> Duration {
        Duration::from_millis(self.orientation_settle_ms)
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            panel_id: "sidebar".to_string(),
            toggle_id: "mobile-menu-btn".to_string(),
            overlay_id: "sidebar-overlay".to_string(),
            open_class: "open".to_string(),
            overlay_hidden_class: "hidden".to_string(),
            orientation_settle_ms: 100,
        }
    }
}

/// Flash message lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// An element carrying any of these classes is a message candidate
    pub message_classes: Vec<String>,
    /// Time a message stays fully visible
    pub display_ms: u64,
    /// Opacity transition length; the element is detached when it ends
    pub fade_ms: u64,
}

impl NotificationConfig {
    pub fn display(&self) -> Duration {
        Duration::from_millis(self.display_ms)
    }

    pub fn fade(&self) -> Duration {
        Duration::from_millis(self.fade_ms)
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        let message_classes = [
            "bg-red-100",
            "bg-green-100",
            "bg-yellow-100",
            "bg-blue-100",
            "bg-red-900",
            "bg-green-900",
            "bg-yellow-900",
            "bg-blue-900",
        ]
        .iter()
        .map(ToString::to_string)
        .collect();

        Self {
            message_classes,
            display_ms: 5000,
            fade_ms: 500,
        }
    }
}

/// Theme preference wiring
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub toggle_id: String,
    pub storage_key: String,
    /// Class on the root element while dark
    pub dark_class: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            toggle_id: "theme-toggle".to_string(),
            storage_key: "theme".to_string(),
            dark_class: "dark".to_string(),
        }
    }
}

/// Required-field gating
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Class marking an empty required field
    pub invalid_class: String,
    pub alert_message: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            invalid_class: "border-red-500".to_string(),
            alert_message: DEFAULT_REQUIRED_FIELDS_ALERT.to_string(),
        }
    }
}

/// Search input debounce
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// `name` attribute of search text inputs
    pub input_name: String,
    pub debounce_ms: u64,
}

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            input_name: "search".to_string(),
            debounce_ms: 300,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_yields_defaults() {
        let config = ControllerConfig::from_json_str("{}").unwrap();
        assert_eq!(config, ControllerConfig::default());
        assert_eq!(config.notifications.display(), Duration::from_millis(5000));
        assert_eq!(config.notifications.fade(), Duration::from_millis(500));
        assert_eq!(config.notifications.message_classes.len(), 8);
    }

    #[test]
    fn test_partial_override() {
        let config = ControllerConfig::from_json_str(
            r#"{"navigation": {"panel_id": "nav"}, "breakpoints": {"narrow_max_width": 640}}"#,
        )
        .unwrap();
        assert_eq!(config.navigation.panel_id, "nav");
        assert_eq!(config.navigation.toggle_id, "mobile-menu-btn");
        assert_eq!(config.breakpoints.narrow_max_width, 640);
        assert_eq!(config.breakpoints.mobile_max_dimension, 1024);
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let err = ControllerConfig::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, CoreError::ConfigError(_)));
        assert!(!err.is_expected());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("coach-manager-missing-config-test.json");
        let config = ControllerConfig::load(&path).unwrap();
        assert_eq!(config, ControllerConfig::default());
    }
}
