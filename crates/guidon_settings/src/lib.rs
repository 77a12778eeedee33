//! guidon_settings: Editor settings and persisted preferences.
//!
//! Owns the two configuration inputs of the overlay: the tab-stop width
//! the tokenization pass reads on every scanner invocation, and the
//! persisted on/off toggle applied at the pipeline level. The scanner
//! itself never sees the toggle.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Per-editor settings consulted by the tokenization pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorSettings {
    /// Number of columns in one indentation unit.
    pub space_units: u32,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self { space_units: 4 }
    }
}

impl EditorSettings {
    /// Settings with an explicit tab-stop width.
    pub fn new(space_units: u32) -> Self {
        Self { space_units }
    }

    /// The tab-stop width, clamped to at least 1.
    ///
    /// The scanner requires a positive width; the clamp lives here so no
    /// call site can hand it zero.
    #[inline]
    pub fn space_units(&self) -> u32 {
        self.space_units.max(1)
    }
}

/// Persisted user preferences for the overlay.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    /// Whether indent guides are drawn.
    pub enabled: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self { enabled: false }
    }
}

impl Preferences {
    /// Flip the enabled state, returning the new value.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }
}

/// Errors from loading or saving preferences.
#[derive(Debug, Error)]
pub enum PreferencesError {
    #[error("failed to access preferences file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed preferences: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse preferences from a JSON string.
pub fn parse_preferences(content: &str) -> Result<Preferences, serde_json::Error> {
    serde_json::from_str(content)
}

/// Load preferences from a JSON file.
pub fn load_preferences_file(path: impl AsRef<Path>) -> Result<Preferences, PreferencesError> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse_preferences(&content)?)
}

/// Save preferences to a JSON file.
pub fn save_preferences_file(
    path: impl AsRef<Path>,
    prefs: &Preferences,
) -> Result<(), PreferencesError> {
    let content = serde_json::to_string_pretty(prefs)?;
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(EditorSettings::default().space_units(), 4);
        assert!(!Preferences::default().enabled);
    }

    #[test]
    fn test_space_units_clamped_to_one() {
        assert_eq!(EditorSettings::new(0).space_units(), 1);
        assert_eq!(EditorSettings::new(1).space_units(), 1);
        assert_eq!(EditorSettings::new(8).space_units(), 8);
    }

    #[test]
    fn test_toggle() {
        let mut prefs = Preferences::default();
        assert!(prefs.toggle());
        assert!(prefs.enabled);
        assert!(!prefs.toggle());
        assert!(!prefs.enabled);
    }

    #[test]
    fn test_parse_preferences() {
        let prefs = parse_preferences(r#"{ "enabled": true }"#).unwrap();
        assert!(prefs.enabled);

        // Missing fields fall back to defaults
        let prefs = parse_preferences("{}").unwrap();
        assert!(!prefs.enabled);

        assert!(parse_preferences("not json").is_err());
    }

    #[test]
    fn test_settings_round_trip() {
        let settings = EditorSettings::new(2);
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(json, r#"{"spaceUnits":2}"#);
        let back: EditorSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.space_units(), 2);
    }

    #[test]
    fn test_preferences_file_round_trip() {
        let path = std::env::temp_dir().join("guidon_prefs_round_trip.json");
        let mut prefs = Preferences::default();
        prefs.toggle();
        save_preferences_file(&path, &prefs).unwrap();
        let back = load_preferences_file(&path).unwrap();
        assert!(back.enabled);
        std::fs::remove_file(&path).unwrap();
    }
}
