//! Game settings and preferences
//!
//! Persisted as JSON next to the score data; an unreadable file falls back
//! to defaults.

use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::platform::store::atomic_rename;

/// How the frog's horizontal position is driven
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ControlMode {
    /// The body follows the pointer's x coordinate
    Pointer,
    /// Fixed steps while a move key is held
    #[default]
    Keys,
}

impl ControlMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ControlMode::Pointer => "Pointer",
            ControlMode::Keys => "Keys",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pointer" | "mouse" => Some(ControlMode::Pointer),
            "keys" | "keyboard" => Some(ControlMode::Keys),
            _ => None,
        }
    }
}

/// Player preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Horizontal control scheme
    pub control: ControlMode,
    /// Jump straight from the title screen into a round
    pub skip_instructions: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            control: ControlMode::Keys,
            skip_instructions: false,
        }
    }
}

impl Settings {
    /// Load from a JSON file; any failure yields defaults
    pub fn load(path: &Path) -> Self {
        if let Ok(text) = fs::read_to_string(path) {
            if let Ok(settings) = serde_json::from_str(&text) {
                log::info!("Loaded settings from {}", path.display());
                return settings;
            }
        }
        log::info!("Using default settings");
        Self::default()
    }

    /// Save as pretty JSON with an atomic replace
    pub fn save(&self, path: &Path) -> Result<()> {
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(self)?)?;
        atomic_rename(&tmp, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_mode_names() {
        assert_eq!(ControlMode::from_str("pointer"), Some(ControlMode::Pointer));
        assert_eq!(ControlMode::from_str("KEYBOARD"), Some(ControlMode::Keys));
        assert_eq!(ControlMode::from_str("gamepad"), None);
        assert_eq!(ControlMode::Keys.as_str(), "Keys");
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let settings = Settings::load(Path::new("/nonexistent/settings.json"));
        assert_eq!(settings.control, ControlMode::Keys);
        assert!(!settings.skip_instructions);
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = std::env::temp_dir().join(format!("frog-snap-settings-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings.json");

        let settings = Settings {
            control: ControlMode::Pointer,
            skip_instructions: true,
        };
        settings.save(&path).unwrap();

        let loaded = Settings::load(&path);
        assert_eq!(loaded.control, ControlMode::Pointer);
        assert!(loaded.skip_instructions);
        let _ = fs::remove_dir_all(dir);
    }
}
