//! Safe context rules for kubesafe
//!
//! A rule ties a context name (literal or pattern) to the commands that need
//! confirmation on it, together with its cancellation counter.

pub mod pattern;
pub mod registry;

use serde::{Deserialize, Serialize};

pub use registry::Registry;

/// Commands offered as protected when a new safe context is added
pub const DEFAULT_PROTECTED_COMMANDS: &[&str] = &[
    // kubectl
    "delete",
    "patch",
    "exec",
    "apply",
    "create",
    "run",
    "port-forward",
    "edit",
    // helm
    "install",
    "upgrade",
    "rollback",
    "uninstall",
];

/// Per-context statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextStats {
    /// Protected commands the user refused to run (or that were auto-blocked)
    #[serde(rename = "canceledCount", default)]
    pub canceled_count: u64,
}

/// A configured safe context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextRule {
    /// Literal context name or pattern
    pub name: String,

    /// Classification cached at creation time; authoritative once persisted
    #[serde(rename = "isRegex", default)]
    is_regex: bool,

    /// Sub-commands requiring confirmation
    #[serde(rename = "commands", default)]
    pub protected_commands: Vec<String>,

    #[serde(default)]
    pub stats: ContextStats,
}

impl ContextRule {
    /// Create a rule, classifying `name` once
    pub fn new<S: Into<String>>(name: impl Into<String>, protected_commands: Vec<S>) -> Self {
        let name = name.into();
        let is_regex = pattern::is_pattern(&name);
        Self {
            name,
            is_regex,
            protected_commands: protected_commands.into_iter().map(Into::into).collect(),
            stats: ContextStats::default(),
        }
    }

    /// Create a rule protecting the default command set
    pub fn with_defaults(name: impl Into<String>) -> Self {
        Self::new(name, DEFAULT_PROTECTED_COMMANDS.to_vec())
    }

    pub fn is_regex(&self) -> bool {
        self.is_regex
    }

    /// Check whether `command` needs confirmation under this rule
    pub fn is_protected(&self, command: &str) -> bool {
        self.protected_commands.iter().any(|c| c == command)
    }

    pub fn canceled_count(&self) -> u64 {
        self.stats.canceled_count
    }

    /// Record one user-initiated (or auto-blocked) cancellation
    pub fn record_cancellation(&mut self) {
        self.stats.canceled_count = self.stats.canceled_count.saturating_add(1);
    }
}
