//! Ruleset implementations and the ruleset registry.
//!
//! A ruleset is one published set of monster-construction rules, exposed as
//! an immutable question catalog. Rulesets are registered once at startup
//! and shared read-only across sessions.

mod core;

pub use self::core::{CoreRuleset, CORE_RULESET_ID};

use std::sync::Arc;

use crate::questionnaire::Catalog;

/// One set of monster-construction rules.
pub trait Ruleset: Send + Sync {
    /// Unique identifier, stamped onto built monsters (e.g. "core").
    fn ruleset_id(&self) -> &str;

    /// Human-readable name shown in ruleset pickers.
    fn display_name(&self) -> &str;

    /// The ruleset's question catalog.
    fn catalog(&self) -> &Catalog;
}

/// Registry of available rulesets.
pub struct RulesetRegistry {
    rulesets: Vec<Arc<dyn Ruleset>>,
}

impl Default for RulesetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl RulesetRegistry {
    /// Create a new registry with all built-in rulesets.
    pub fn new() -> Self {
        let mut registry = Self {
            rulesets: Vec::new(),
        };
        registry.register(Arc::new(CoreRuleset::new()));
        registry
    }

    /// Create an empty registry without built-in rulesets.
    pub fn empty() -> Self {
        Self {
            rulesets: Vec::new(),
        }
    }

    /// Register a ruleset.
    pub fn register(&mut self, ruleset: Arc<dyn Ruleset>) {
        self.rulesets.push(ruleset);
    }

    /// Get a ruleset by its ID.
    pub fn get(&self, ruleset_id: &str) -> Option<Arc<dyn Ruleset>> {
        self.rulesets
            .iter()
            .find(|r| r.ruleset_id() == ruleset_id)
            .cloned()
    }

    /// List all registered rulesets with their display names.
    pub fn list(&self) -> Vec<(&str, &str)> {
        self.rulesets
            .iter()
            .map(|r| (r.ruleset_id(), r.display_name()))
            .collect()
    }
}
