//! Active context lookup from a kubeconfig file
//!
//! Only the fields kubesafe needs are parsed: the current context and the
//! namespace attached to each named context.

use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::Path;

use crate::error::{Error, Result};

/// Namespace used when neither flags nor the kubeconfig set one
pub const DEFAULT_NAMESPACE: &str = "default";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Kubeconfig {
    #[serde(rename = "current-context", default)]
    pub current_context: String,

    #[serde(default)]
    contexts: Option<Vec<NamedContext>>,
}

#[derive(Debug, Clone, Deserialize)]
struct NamedContext {
    name: String,
    #[serde(default)]
    context: Option<ContextDetails>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ContextDetails {
    #[serde(default)]
    namespace: Option<String>,
}

/// The context and namespace a wrapped command will run against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespacedContext {
    pub namespace: String,
    pub context: String,
}

impl Kubeconfig {
    /// Load and parse the kubeconfig at `path`
    pub fn load(path: &Path) -> Result<Self> {
        log::debug!("loading kubeconfig from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|source| Error::ReadKubeconfig {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content).map_err(|source| Error::ParseKubeconfig {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse kubeconfig content
    pub fn from_yaml(content: &str) -> std::result::Result<Self, serde_yml::Error> {
        serde_yml::from_str(content)
    }

    fn contexts(&self) -> &[NamedContext] {
        self.contexts.as_deref().unwrap_or_default()
    }

    /// Names of all contexts defined in the kubeconfig, sorted
    pub fn available_contexts(&self) -> BTreeSet<String> {
        self.contexts().iter().map(|c| c.name.clone()).collect()
    }

    fn namespace_of(&self, context: &str) -> Option<&str> {
        self.contexts()
            .iter()
            .find(|c| c.name == context)
            .and_then(|c| c.context.as_ref())
            .and_then(|d| d.namespace.as_deref())
            .filter(|ns| !ns.is_empty())
    }

    /// Resolve the context and namespace, honouring `--context` and
    /// `--namespace` overrides in the wrapped command's arguments
    pub fn namespaced_context(&self, args: &[String]) -> NamespacedContext {
        let context = flag_value(args, "--context")
            .unwrap_or(self.current_context.as_str())
            .to_string();

        let namespace = flag_value(args, "--namespace")
            .or_else(|| self.namespace_of(&context))
            .unwrap_or(DEFAULT_NAMESPACE)
            .to_string();

        NamespacedContext { namespace, context }
    }
}

/// Value of `flag` given either as `--flag value` or `--flag=value`
fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == flag {
            return iter.next().map(String::as_str).filter(|v| !v.is_empty());
        }
        if let Some(value) = arg.strip_prefix(flag).and_then(|rest| rest.strip_prefix('=')) {
            if !value.is_empty() {
                return Some(value);
            }
        }
    }
    None
}
