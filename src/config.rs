use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub const CONFIG_FILE: &str = "config.yaml";

/// Project settings read from `.erpstage/config.yaml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Currency for accounts added without one
    pub default_currency: String,
    /// Payment terms for partners added without any
    pub default_payment_terms: String,
    /// Unit of measure for items added without one
    pub default_uom: String,
    /// Export target, relative to the project root
    pub export_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_currency: "USD".to_string(),
            default_payment_terms: "Net 30".to_string(),
            default_uom: "PCS".to_string(),
            export_dir: PathBuf::from("exports"),
        }
    }
}

impl Config {
    /// Load from the project directory. A missing file means defaults.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let path = project_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let text = fs::read_to_string(&path)?;
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let config = serde_yaml::from_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn write(&self, project_dir: &Path) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        fs::write(project_dir.join(CONFIG_FILE), yaml)?;
        Ok(())
    }
}
