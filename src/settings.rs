//! Persistence of safe contexts as a YAML settings file
//!
//! ```yaml
//! contexts:
//!   - name: prod-.*
//!     isRegex: true
//!     commands: [delete, apply]
//!     stats:
//!       canceledCount: 2
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::rules::{ContextRule, Registry};

/// On-disk layout of the settings file
#[derive(Debug, Default, Serialize, Deserialize)]
struct SettingsDocument {
    #[serde(default)]
    contexts: Vec<ContextRule>,
}

/// Reads and writes the settings file at a fixed path
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the registry; a missing file yields an empty registry
    pub fn load(&self) -> Result<Registry> {
        log::debug!("loading settings from {}", self.path.display());
        if !self.path.exists() {
            return Ok(Registry::new());
        }

        let content = std::fs::read_to_string(&self.path).map_err(|source| Error::ReadSettings {
            path: self.path.clone(),
            source,
        })?;
        if content.trim().is_empty() {
            return Ok(Registry::new());
        }

        let document: SettingsDocument =
            serde_yml::from_str(&content).map_err(|source| Error::ParseSettings {
                path: self.path.clone(),
                source,
            })?;
        Ok(Registry::from_rules(document.contexts))
    }

    /// Write the registry, replacing the file's previous content
    pub fn save(&self, registry: &Registry) -> Result<()> {
        log::debug!("saving settings to {}", self.path.display());
        let document = SettingsDocument {
            contexts: registry.rules().to_vec(),
        };
        let content =
            serde_yml::to_string(&document).map_err(|source| Error::SerializeSettings { source })?;
        std::fs::write(&self.path, content).map_err(|source| Error::WriteSettings {
            path: self.path.clone(),
            source,
        })
    }
}
