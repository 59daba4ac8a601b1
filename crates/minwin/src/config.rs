//! Window configuration
//!
//! Configuration for the single window this library manages: client-area
//! dimensions, title, and the background color used by the clear path.
//! Supports TOML loading with validated defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::WindowError;

/// Window creation parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Client-area width in pixels
    pub width: u32,
    /// Client-area height in pixels
    pub height: u32,
    /// Window title
    pub title: String,
    /// Background color as an RGB triple, used when clearing the window
    pub background: [u8; 3],
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "minwin window".to_string(),
            background: [0, 0, 0],
        }
    }
}

impl WindowConfig {
    /// Create a configuration with the given dimensions and title
    pub fn new(width: u32, height: u32, title: impl Into<String>) -> Self {
        Self {
            width,
            height,
            title: title.into(),
            ..Self::default()
        }
    }

    /// Parse a configuration from a TOML string
    pub fn from_toml_str(contents: &str) -> Result<Self, WindowError> {
        let config: Self =
            toml::from_str(contents).map_err(|e| WindowError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a TOML file
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, WindowError> {
        let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            WindowError::Config(format!("{}: {}", path.as_ref().display(), e))
        })?;
        Self::from_toml_str(&contents)
    }

    /// Check that the configuration describes a creatable window
    pub fn validate(&self) -> Result<(), WindowError> {
        if self.width == 0 || self.height == 0 {
            return Err(WindowError::Config(format!(
                "window dimensions must be non-zero (got {}x{})",
                self.width, self.height
            )));
        }
        if self.title.is_empty() {
            return Err(WindowError::Config("window title must not be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = WindowConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.width, 800);
        assert_eq!(config.height, 600);
        assert_eq!(config.background, [0, 0, 0]);
    }

    #[test]
    fn zero_dimensions_rejected() {
        let config = WindowConfig::new(0, 600, "test");
        assert!(matches!(config.validate(), Err(WindowError::Config(_))));
    }

    #[test]
    fn empty_title_rejected() {
        let config = WindowConfig::new(640, 480, "");
        assert!(matches!(config.validate(), Err(WindowError::Config(_))));
    }

    #[test]
    fn parses_toml_with_defaults_filled_in() {
        let config = WindowConfig::from_toml_str(
            r#"
            width = 1024
            title = "toml window"
            "#,
        )
        .unwrap();
        assert_eq!(config.width, 1024);
        assert_eq!(config.height, 600);
        assert_eq!(config.title, "toml window");
    }

    #[test]
    fn toml_round_trip() {
        let config = WindowConfig::new(320, 240, "round trip");
        let serialized = toml::to_string(&config).unwrap();
        let parsed = WindowConfig::from_toml_str(&serialized).unwrap();
        assert_eq!(parsed.width, 320);
        assert_eq!(parsed.height, 240);
        assert_eq!(parsed.title, "round trip");
    }

    #[test]
    fn invalid_toml_reports_config_error() {
        let result = WindowConfig::from_toml_str("width = \"wide\"");
        assert!(matches!(result, Err(WindowError::Config(_))));
    }
}
