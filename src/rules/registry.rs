//! Registry of safe contexts with two-phase resolution
//!
//! Lookup first tries the exact-name index, then walks the compiled pattern
//! rules in insertion order. An exact match always wins over a pattern.

use std::collections::HashMap;

use super::pattern::CompiledPattern;
use super::ContextRule;
use crate::error::{Error, Result};

/// In-memory set of safe context rules
#[derive(Debug, Clone, Default)]
pub struct Registry {
    rules: Vec<ContextRule>,
    /// Stored rule name -> position in `rules`
    exact: HashMap<String, usize>,
    /// Pattern rules in insertion order
    patterns: Vec<CompiledPattern>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Hydrate a registry from persisted rules, keeping their order
    pub fn from_rules(rules: Vec<ContextRule>) -> Self {
        let mut registry = Self {
            rules,
            exact: HashMap::new(),
            patterns: Vec::new(),
        };
        registry.reindex();
        registry
    }

    fn reindex(&mut self) {
        self.exact.clear();
        self.patterns.clear();
        for (position, rule) in self.rules.iter().enumerate() {
            index_rule(&mut self.exact, &mut self.patterns, rule, position);
        }
    }

    fn resolve_position(&self, context: &str) -> Option<usize> {
        if let Some(&position) = self.exact.get(context) {
            return Some(position);
        }
        self.patterns
            .iter()
            .find(|p| p.is_match(context))
            .map(|p| p.position)
    }

    /// Find the rule governing `context`, if any
    pub fn resolve(&self, context: &str) -> Option<&ContextRule> {
        let rule = self.resolve_position(context).map(|i| &self.rules[i]);
        log::debug!(
            "context {context:?} resolved to {:?}",
            rule.map(|r| r.name.as_str())
        );
        rule
    }

    /// Mutable variant of [`Registry::resolve`], used to update statistics
    pub fn resolve_mut(&mut self, context: &str) -> Option<&mut ContextRule> {
        let position = self.resolve_position(context)?;
        self.rules.get_mut(position)
    }

    /// Check if some rule governs `context`
    pub fn contains(&self, context: &str) -> bool {
        self.resolve_position(context).is_some()
    }

    /// Append a rule
    ///
    /// Fails with [`Error::DuplicateContext`] if the name already resolves.
    pub fn add_rule(&mut self, rule: ContextRule) -> Result<()> {
        if self.contains(&rule.name) {
            return Err(Error::DuplicateContext { name: rule.name });
        }
        let position = self.rules.len();
        index_rule(&mut self.exact, &mut self.patterns, &rule, position);
        self.rules.push(rule);
        Ok(())
    }

    /// Remove every rule stored under exactly `name`, returning the first
    ///
    /// A pattern rule is only removed by its stored pattern string, never by a
    /// name it happens to match.
    pub fn remove_rule(&mut self, name: &str) -> Result<ContextRule> {
        let Some(&position) = self.exact.get(name) else {
            return Err(Error::ContextNotFound {
                name: name.to_string(),
            });
        };
        let removed = self.rules.remove(position);
        self.rules.retain(|rule| rule.name != name);
        self.reindex();
        Ok(removed)
    }

    /// Rules in insertion order
    pub fn rules(&self) -> &[ContextRule] {
        &self.rules
    }

    pub fn into_rules(self) -> Vec<ContextRule> {
        self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

fn index_rule(
    exact: &mut HashMap<String, usize>,
    patterns: &mut Vec<CompiledPattern>,
    rule: &ContextRule,
    position: usize,
) {
    // First stored entry wins for hand-edited files with duplicate names
    exact.entry(rule.name.clone()).or_insert(position);
    if rule.is_regex() {
        if let Some(compiled) = CompiledPattern::compile(&rule.name, position) {
            patterns.push(compiled);
        }
    }
}

impl PartialEq for Registry {
    fn eq(&self, other: &Self) -> bool {
        self.rules == other.rules
    }
}
