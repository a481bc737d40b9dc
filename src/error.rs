//! Error types for kubesafe
//!
//! Registry, prompt and persistence failures all surface through [`Error`].
//! Malformed stored patterns are not errors: they are logged and never match.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used across the crate
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("context {name:?} is already included in safe contexts")]
    DuplicateContext { name: String },

    #[error("context {name:?} not found")]
    ContextNotFound { name: String },

    #[error("no contexts are available")]
    NoContextsAvailable,

    #[error("context {name:?} is not available")]
    ContextUnavailable { name: String },

    #[error("prompt failed: {message}")]
    Prompt { message: String },

    #[error("error reading settings file {}: {source}", .path.display())]
    ReadSettings { path: PathBuf, source: io::Error },

    #[error("error writing settings file {}: {source}", .path.display())]
    WriteSettings { path: PathBuf, source: io::Error },

    #[error("error unmarshalling settings file {}: {source}", .path.display())]
    ParseSettings {
        path: PathBuf,
        source: serde_yml::Error,
    },

    #[error("error marshalling settings: {source}")]
    SerializeSettings { source: serde_yml::Error },

    #[error("error creating settings directory {}: {source}", .path.display())]
    CreateSettingsDir { path: PathBuf, source: io::Error },

    #[error("error reading kubeconfig {}: {source}", .path.display())]
    ReadKubeconfig { path: PathBuf, source: io::Error },

    #[error("error parsing kubeconfig {}: {source}", .path.display())]
    ParseKubeconfig {
        path: PathBuf,
        source: serde_yml::Error,
    },

    #[error("could not find home directory")]
    MissingHomeDir,

    #[error("could not find user config directory")]
    MissingConfigDir,
}

impl Error {
    /// Wrap a terminal I/O failure raised while prompting the user
    pub fn prompt(err: impl std::fmt::Display) -> Self {
        Error::Prompt {
            message: err.to_string(),
        }
    }
}
