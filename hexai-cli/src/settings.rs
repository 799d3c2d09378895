//! Configuration file handling
//!
//! One JSON file carries both the engine settings and the glyphs used to
//! draw the board. Every field is optional.

use std::path::Path;

use anyhow::{Context, Result};
use hexai_core::EngineConfig;
use serde::{Deserialize, Serialize};

/// Glyphs used by the text renderer
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub blue: char,
    pub red: char,
    pub empty: char,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            blue: 'X',
            red: 'O',
            empty: '.',
        }
    }
}

impl DisplayConfig {
    fn validate(&self) -> Result<()> {
        let glyphs = [self.blue, self.red, self.empty];
        anyhow::ensure!(
            glyphs.iter().all(|c| !c.is_whitespace()),
            "display glyphs must not be whitespace"
        );
        anyhow::ensure!(
            self.blue != self.red && self.blue != self.empty && self.red != self.empty,
            "display glyphs must be distinct"
        );
        Ok(())
    }
}

/// Complete front-end configuration
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub engine: EngineConfig,
    pub display: DisplayConfig,
}

impl AppConfig {
    /// Load from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_json(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        Ok(config)
    }

    /// Parse and validate JSON text
    pub fn from_json(content: &str) -> Result<Self> {
        let config: AppConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.engine.validate()?;
        self.display.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_is_default() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_sections() {
        let config =
            AppConfig::from_json(r##"{"engine": {"depth": 3}, "display": {"red": "#"}}"##).unwrap();
        assert_eq!(config.engine.depth, 3);
        assert!(!config.engine.parallel);
        assert_eq!(config.display.red, '#');
        assert_eq!(config.display.blue, 'X');
    }

    #[test]
    fn test_rejects_clashing_glyphs() {
        let err = AppConfig::from_json(r#"{"display": {"blue": "O"}}"#).unwrap_err();
        assert!(err.to_string().contains("distinct"));
    }

    #[test]
    fn test_rejects_deep_search() {
        assert!(AppConfig::from_json(r#"{"engine": {"depth": 99}}"#).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = AppConfig::load(Path::new("/nonexistent/hexai.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
