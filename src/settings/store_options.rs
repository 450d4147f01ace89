use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::models::error::Result;

fn default_section_name() -> String {
    "default".to_string()
}

/// Which part of an `option = value` line is stored as the value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueCapture {
    /// Trimmed text after the first `=`
    #[default]
    RightHandSide,
    /// Trimmed text of the entire line, key and `=` included
    WholeLine,
}

/// Construction-time settings for a [`ConfigStore`](crate::ConfigStore)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreOptions {
    /// Name of the protected section whose options every section sees
    pub default_section: String,
    pub value_capture: ValueCapture,
}

impl Default for StoreOptions {
    fn default() -> Self {
        StoreOptions {
            default_section: default_section_name(),
            value_capture: ValueCapture::default(),
        }
    }
}

impl StoreOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_section(mut self, name: &str) -> Self {
        self.default_section = name.to_string();
        self
    }

    pub fn with_value_capture(mut self, capture: ValueCapture) -> Self {
        self.value_capture = capture;
        self
    }

    /// Parse options from TOML text; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let options: StoreOptions = toml::from_str(content)?;
        log::debug!(
            "Loaded store options: default section '{}', value capture {:?}",
            options.default_section,
            options.value_capture
        );
        Ok(options)
    }

    /// Read and parse a TOML options file
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}
