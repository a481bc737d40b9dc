//! File locations used by kubesafe
//!
//! All locations are resolved once at start-up into an immutable [`Paths`]
//! value that is passed to whatever needs it.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Overrides the settings file location
pub const SETTINGS_ENV: &str = "KUBESAFE_CONFIG";

/// Log level for kubesafe's own diagnostics
pub const LOG_ENV: &str = "KUBESAFE_LOG";

/// Standard kubectl variable listing kubeconfig files
pub const KUBECONFIG_ENV: &str = "KUBECONFIG";

/// Settings file used by older releases, still honoured when present
pub const LEGACY_SETTINGS_FILE: &str = ".kubesafe.yaml";

/// Resolved file locations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    /// Safe context settings (YAML)
    pub settings: PathBuf,
    /// Kubeconfig used to find the active context
    pub kubeconfig: PathBuf,
}

impl Paths {
    /// Resolve locations from the environment and the user's directories
    pub fn discover() -> Result<Self> {
        let home = dirs::home_dir().ok_or(Error::MissingHomeDir)?;

        let settings = match std::env::var_os(SETTINGS_ENV).filter(|v| !v.is_empty()) {
            Some(path) => PathBuf::from(path),
            None => {
                let config_dir = dirs::config_dir().ok_or(Error::MissingConfigDir)?;
                settings_path(&home, &config_dir)?
            }
        };
        let kubeconfig = kubeconfig_path(std::env::var_os(KUBECONFIG_ENV), &home);

        log::debug!(
            "settings at {}, kubeconfig at {}",
            settings.display(),
            kubeconfig.display()
        );
        Ok(Self {
            settings,
            kubeconfig,
        })
    }
}

/// Pick the legacy `~/.kubesafe.yaml` if it exists, otherwise
/// `<config_dir>/kubesafe/config.yaml`, creating the directory.
pub fn settings_path(home: &Path, config_dir: &Path) -> Result<PathBuf> {
    let legacy = home.join(LEGACY_SETTINGS_FILE);
    if legacy.exists() {
        return Ok(legacy);
    }

    let dir = config_dir.join("kubesafe");
    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|source| Error::CreateSettingsDir {
            path: dir.clone(),
            source,
        })?;
    }
    Ok(dir.join("config.yaml"))
}

/// First non-empty entry of `KUBECONFIG`, falling back to `~/.kube/config`
pub fn kubeconfig_path(kubeconfig_env: Option<OsString>, home: &Path) -> PathBuf {
    kubeconfig_env
        .and_then(|value| std::env::split_paths(&value).find(|p| !p.as_os_str().is_empty()))
        .unwrap_or_else(|| home.join(".kube").join("config"))
}

/// Parse the `KUBESAFE_LOG` value; unknown or missing values mean `warn`
pub fn log_level(value: Option<&str>) -> log::LevelFilter {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(log::LevelFilter::Warn)
}
