//! Literal-vs-pattern classification for context names
//!
//! A context name containing any regex metacharacter that also compiles as a
//! regex is treated as a pattern. Everything else is a literal name. Note that
//! a literal context such as `my.cluster` is therefore classified as a pattern.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches any character with special meaning in a regular expression
static METACHARACTERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.*+?^${}()|\[\]\\]").expect("metacharacter class must compile"));

/// Decide whether `name` should be treated as a pattern. Never fails.
pub fn is_pattern(name: &str) -> bool {
    if !METACHARACTERS.is_match(name) {
        return false;
    }
    Regex::new(name).is_ok()
}

/// Unanchored search of `value` against `pattern`.
///
/// A pattern that does not compile matches nothing.
pub fn matches(pattern: &str, value: &str) -> bool {
    match Regex::new(pattern) {
        Ok(re) => re.is_match(value),
        Err(_) => false,
    }
}

/// A pattern rule's regex, compiled once when the registry index is built
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    regex: Regex,
    /// Position of the owning rule in the registry
    pub(crate) position: usize,
}

impl CompiledPattern {
    /// Compile `pattern` for the rule at `position`.
    ///
    /// Returns `None` for malformed patterns so they drop out of the index.
    pub fn compile(pattern: &str, position: usize) -> Option<Self> {
        match Regex::new(pattern) {
            Ok(regex) => Some(Self { regex, position }),
            Err(e) => {
                log::warn!("ignoring safe context pattern {pattern:?}: {e}");
                None
            }
        }
    }

    pub fn is_match(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}
