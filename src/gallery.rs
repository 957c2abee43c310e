use crate::modal::ActiveImage;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Id of the `<script type="application/json">` block holding the config.
pub const CONFIG_ELEMENT_ID: &str = "lightbox-config";

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct GalleryImage {
    pub src: String,
    #[serde(default)]
    pub alt: String,
}

impl GalleryImage {
    pub fn to_active(&self) -> ActiveImage {
        ActiveImage::new(self.src.clone(), self.alt.clone())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LightboxConfig {
    #[serde(default)]
    pub images: Vec<GalleryImage>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            images: Vec::new(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config element #{0} not found")]
    MissingElement(String),
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown log level: {0}")]
    UnknownLogLevel(String),
}

impl LightboxConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read the config from the JSON block embedded in the host page.
    pub fn load_from_document(document: &web_sys::Document, id: &str) -> Result<Self, ConfigError> {
        let json = document
            .get_element_by_id(id)
            .and_then(|el| el.text_content())
            .ok_or_else(|| ConfigError::MissingElement(id.to_string()))?;
        Self::from_json(&json)
    }

    pub fn level(&self) -> Result<tracing::Level, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::UnknownLogLevel(self.log_level.clone()))
    }
}
