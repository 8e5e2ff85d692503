//! Configuration loading from question.toml

use hotspot_ui::{ContentData, QuestionParams};
use serde::Deserialize;
use std::path::Path;

/// Root configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub question: QuestionParams,
}

/// Content identity and host-side data
#[derive(Debug, Clone, Deserialize)]
pub struct ContentConfig {
    #[serde(default)]
    pub id: u32,
    /// Metadata title
    pub title: Option<String>,
    /// Directory authored asset paths are relative to
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,
    /// State saved by an earlier session
    pub previous_state: Option<serde_json::Value>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            id: 0,
            title: None,
            assets_dir: default_assets_dir(),
            previous_state: None,
        }
    }
}

fn default_assets_dir() -> String {
    ".".to_string()
}

impl ContentConfig {
    pub fn content_data(&self) -> ContentData {
        ContentData {
            title: self.title.clone(),
            previous_state: self.previous_state.clone(),
        }
    }
}

/// Layout of the host page
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutConfig {
    /// Width offered to the question in pixels
    #[serde(default = "default_container_width")]
    pub container_width: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            container_width: default_container_width(),
        }
    }
}

fn default_container_width() -> f32 {
    640.0
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::Io(e.to_string()))?;

        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::Parse(e.to_string()))?;

        if !config.question.background_image.has_path() {
            log::warn!("Config has no background image path");
        }
        log::info!(
            "Loaded question {} with {} hotspots",
            config.content.id,
            config.question.hotspots.len()
        );
        Ok(config)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}
