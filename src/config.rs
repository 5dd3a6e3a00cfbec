//! Export configuration.
//!
//! Every field has a default, so an empty document (or no document at all)
//! yields a working configuration. Files may be YAML or JSON:
//!
//! ```yaml
//! base_package: com.acme.shop
//! unpaired_leg_policy: skip
//! datasource:
//!   database: shop
//!   server_port: 9090
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::{ExportError, Result};

/// Stroke colour the editor gives association-class shapes.
pub const DEFAULT_ASSOCIATION_CLASS_COLOR: &str = "#feb663";

/// What to do with one leg of a reified many-to-many whose sibling is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnpairedLegPolicy {
    /// Abort the whole export with [`ExportError::UnpairedLeg`].
    #[default]
    Fail,
    /// Drop the leg and continue.
    Skip,
    /// Keep the leg as a plain relationship with a single multiplicity.
    Plain,
}

/// Top-level export configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Java package the generated sources live under.
    pub base_package: String,
    /// Stroke colour that flags a class shape as an association class.
    pub association_class_color: String,
    /// Character joining two class titles in an intermediate class title.
    pub intermediate_separator: char,
    pub unpaired_leg_policy: UnpairedLegPolicy,
    pub xmi: XmiOptions,
    pub datasource: DatasourceOptions,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            base_package: "com.example.project".to_string(),
            association_class_color: DEFAULT_ASSOCIATION_CLASS_COLOR.to_string(),
            intermediate_separator: '_',
            unpaired_leg_policy: UnpairedLegPolicy::Fail,
            xmi: XmiOptions::default(),
            datasource: DatasourceOptions::default(),
        }
    }
}

/// Names and ids written into the interchange document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct XmiOptions {
    pub model_name: String,
    pub package_id: String,
    pub package_name: String,
    pub diagram_id: String,
    pub diagram_local_id: u32,
}

impl Default for XmiOptions {
    fn default() -> Self {
        Self {
            model_name: "EA_Model".to_string(),
            package_id: "carpetaPrincipal".to_string(),
            package_name: "Domain Objects".to_string(),
            diagram_id: "EAID_BAE75F5F_1D59_47c7_BAFB_1AEA07247773".to_string(),
            diagram_local_id: 40,
        }
    }
}

/// Settings rendered into the generated README's `application.properties`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DatasourceOptions {
    pub application_name: String,
    pub host: String,
    pub port: u16,
    pub database: String,
    pub username: String,
    pub password: String,
    pub server_port: u16,
}

impl Default for DatasourceOptions {
    fn default() -> Self {
        Self {
            application_name: "project".to_string(),
            host: "localhost".to_string(),
            port: 5432,
            database: "project".to_string(),
            username: "postgres".to_string(),
            password: "changeme".to_string(),
            server_port: 8081,
        }
    }
}

impl ExportConfig {
    /// Parse a YAML document.
    pub fn from_yaml_str(input: &str) -> Result<Self> {
        serde_yaml::from_str(input).map_err(|e| ExportError::config(format!("Invalid YAML: {e}")))
    }

    /// Parse a JSON document.
    pub fn from_json_str(input: &str) -> Result<Self> {
        serde_json::from_str(input).map_err(|e| ExportError::config(format!("Invalid JSON: {e}")))
    }

    /// Load from a file, picking the parser from the extension.
    /// Anything that is not `.json` is read as YAML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let config = if is_json {
            Self::from_json_str(&content)?
        } else {
            Self::from_yaml_str(&content)?
        };
        tracing::debug!("Loaded export config from {}", path.display());
        Ok(config)
    }
}
