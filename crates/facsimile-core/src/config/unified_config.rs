//! Top-level configuration file structure

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::PrinterConfiguration;

/// Section-based configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UnifiedConfig {
    /// Printer configuration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub printer: Option<PrinterConfiguration>,
}

impl UnifiedConfig {
    /// Load configuration from file
    ///
    /// Supports JSON (`.json`) and TOML (`.toml`) formats.
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let ext = path.extension().and_then(|e| e.to_str());

        match ext {
            Some("json") => Ok(serde_json::from_str(&content)?),
            Some("toml") => Ok(toml::from_str(&content)?),
            _ => Err("Unsupported file extension (expected .json or .toml)".into()),
        }
    }

    /// Get printer configuration with defaults
    pub fn printer_config(&self) -> PrinterConfiguration {
        self.printer.clone().unwrap_or_default()
    }

    /// JSON Schema of the configuration file
    pub fn json_schema() -> serde_json::Value {
        serde_json::to_value(schemars::schema_for!(UnifiedConfig)).unwrap_or_default()
    }
}
