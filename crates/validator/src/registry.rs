//! Rule registry
//!
//! Maps rule names to [`Rule`]s. A validator owns one registry, seeded with
//! the built-ins; callers extend or override it by name.

use std::collections::HashMap;

use crate::rule::Rule;
use crate::rules;

/// Name-keyed rule table. The last registration under a name wins.
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    rules: HashMap<String, Rule>,
}

impl RuleRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in rules.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for (name, rule) in rules::builtins() {
            registry.register(name, rule);
        }
        registry
    }

    /// Registers `rule` under `name`, replacing any previous rule.
    pub fn register(&mut self, name: impl Into<String>, rule: Rule) -> &mut Self {
        let name = name.into();
        if self.rules.contains_key(&name) {
            tracing::debug!(rule = %name, "replacing registered rule");
        }
        self.rules.insert(name, rule);
        self
    }

    /// Looks up a rule by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.get(name)
    }

    /// Returns true if a rule is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Registered rule names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no rule is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::RuleOptions;
    use serde_json::json;

    #[test]
    fn builtins_are_registered() {
        let registry = RuleRegistry::with_builtins();
        assert_eq!(
            registry.names(),
            ["array", "boolean", "number", "required", "string"]
        );
    }

    #[test]
    fn last_registration_wins() {
        let mut registry = RuleRegistry::with_builtins();
        registry.register("required", Rule::new(|_, _, _| true).with_message("custom"));

        let rule = registry.get("required").unwrap();
        assert!(rule.check(&json!({}), "missing", &RuleOptions::new()));
        assert_eq!(rule.message("missing", &RuleOptions::new()), "custom");
        assert_eq!(registry.len(), 5);
    }

    #[test]
    fn unknown_name_is_absent() {
        let registry = RuleRegistry::new();
        assert!(registry.is_empty());
        assert!(!registry.contains("string"));
        assert!(registry.get("string").is_none());
    }
}
