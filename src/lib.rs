//! kubesafe - a safety net for kubectl, helm and friends
//!
//! Wraps a cluster CLI and asks for confirmation before protected commands
//! run against a safe context.
//!
//! # Features
//!
//! - **Safe contexts**: literal context names or regex patterns (`prod-.*`)
//! - **Two-phase resolution**: exact names first, then patterns in insertion order
//! - **Protected commands**: per-context list of sub-commands needing confirmation
//! - **Non-interactive mode**: `--no-interactive` refuses protected commands outright
//! - **Statistics**: per-context count of canceled commands
//!
//! # Example
//!
//! ```
//! use kubesafe::{decide, parser::partition, ContextRule, Registry};
//! use kubesafe::parser::args::WRAPPER_FLAGS;
//!
//! let mut registry = Registry::new();
//! registry.add_rule(ContextRule::new("prod-.*", vec!["delete"])).unwrap();
//!
//! let argv: Vec<String> = ["kubectl", "delete", "pod", "web"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//! let invocation = partition(&argv, WRAPPER_FLAGS).unwrap();
//!
//! let decision = decide(&registry, "prod-eu", &invocation);
//! assert_eq!(decision.context(), Some("prod-eu"));
//! assert!(decide(&registry, "dev", &invocation).is_forward());
//! ```

pub mod admin;
pub mod config;
pub mod engine;
pub mod error;
pub mod output;
pub mod parser;
pub mod prompt;
pub mod rules;
pub mod settings;
pub mod stats;

// Re-exports for convenience
pub use config::Paths;
pub use engine::{decide, Interceptor};
pub use error::{Error, Result};
pub use output::{Decision, Outcome};
pub use rules::{ContextRule, Registry};
pub use settings::SettingsStore;
