//! Administrative commands: adding, listing and removing safe contexts
//!
//! These operate on an in-memory [`Registry`]; the caller persists it.

use std::collections::BTreeSet;

use crate::error::{Error, Result};
use crate::prompt::Prompter;
use crate::rules::{pattern, ContextRule, Registry, DEFAULT_PROTECTED_COMMANDS};

/// Chooses the context name for a new safe context
pub struct ContextSelector<'a> {
    registry: &'a Registry,
    available: &'a BTreeSet<String>,
    requested: Option<&'a str>,
}

impl<'a> ContextSelector<'a> {
    pub fn new(
        registry: &'a Registry,
        available: &'a BTreeSet<String>,
        requested: Option<&'a str>,
    ) -> Self {
        Self {
            registry,
            available,
            requested,
        }
    }

    /// Validate the requested name, or let the user pick an unprotected
    /// kubeconfig context
    pub fn select(&self, prompter: &dyn Prompter) -> Result<String> {
        if let Some(name) = self.requested {
            self.validate(name)?;
            return Ok(name.to_string());
        }

        let selectable = self.selectable();
        if selectable.is_empty() {
            return Err(Error::NoContextsAvailable);
        }
        prompter.select_one(&selectable, "Select a context to add: ")
    }

    /// Available contexts not already covered by a rule, sorted
    pub fn selectable(&self) -> Vec<String> {
        self.available
            .iter()
            .filter(|c| !self.registry.contains(c))
            .cloned()
            .collect()
    }

    fn validate(&self, name: &str) -> Result<()> {
        // Patterns need not name an existing context
        if pattern::is_pattern(name) {
            return Ok(());
        }
        if !self.available.contains(name) {
            return Err(Error::ContextUnavailable {
                name: name.to_string(),
            });
        }
        if self.registry.contains(name) {
            return Err(Error::DuplicateContext {
                name: name.to_string(),
            });
        }
        Ok(())
    }
}

/// Ask which of the default commands to protect
pub fn select_protected_commands(prompter: &dyn Prompter) -> Result<Vec<String>> {
    let options: Vec<String> = DEFAULT_PROTECTED_COMMANDS
        .iter()
        .map(|c| c.to_string())
        .collect();
    prompter.select_many(&options, "Select protected commands")
}

/// Add a safe context, returning the stored rule's name
pub fn add_context(
    registry: &mut Registry,
    available: &BTreeSet<String>,
    requested: Option<&str>,
    prompter: &dyn Prompter,
) -> Result<String> {
    let name = ContextSelector::new(registry, available, requested).select(prompter)?;
    let commands = select_protected_commands(prompter)?;
    let rule = ContextRule::new(name, commands);
    let name = rule.name.clone();
    registry.add_rule(rule)?;
    log::info!("added safe context {name:?}");
    Ok(name)
}

/// Remove a safe context by name, or one picked by the user.
///
/// Returns `None` if there is nothing to remove.
pub fn remove_context(
    registry: &mut Registry,
    requested: Option<&str>,
    prompter: &dyn Prompter,
) -> Result<Option<String>> {
    if registry.is_empty() {
        return Ok(None);
    }
    let name = match requested {
        Some(name) => name.to_string(),
        None => {
            let names: Vec<String> = registry.rules().iter().map(|r| r.name.clone()).collect();
            prompter.select_one(&names, "Select a context to remove: ")?
        }
    };
    registry.remove_rule(&name)?;
    log::info!("removed safe context {name:?}");
    Ok(Some(name))
}

/// Render all safe contexts with their protected commands
pub fn list_contexts(registry: &Registry) -> String {
    if registry.is_empty() {
        return "No safe contexts saved\n".to_string();
    }
    let mut out = String::new();
    for rule in registry.rules() {
        out.push_str(&rule.name);
        out.push('\n');
        for command in &rule.protected_commands {
            out.push_str(&format!("  - {command}\n"));
        }
    }
    out
}
