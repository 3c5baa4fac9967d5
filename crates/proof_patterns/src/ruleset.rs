//! Named collections of compiled rules and their JSON configuration.
//!
//! Pattern strings live in configuration; side conditions are code and are
//! attached after loading with [`RuleSet::set_condition`].
//!
//! ```json
//! {
//!   "name": "natural_deduction",
//!   "rules": [
//!     { "name": "and_intro", "premises": ["A", "B"], "conclusion": "and(A, B)" },
//!     { "name": "top", "conclusion": "true" }
//!   ]
//! }
//! ```

use std::path::Path;

use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::formula::Formula;
use crate::outcome::{RuleOutcome, Verdict};
use crate::rule::{PatternRule, RuleDefinition};
use crate::substitution::Substitution;

/// The on-disk form of a rule set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSetConfig {
    /// Name of this rule set
    #[serde(default)]
    pub name: String,
    /// Description
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Rule definitions, in order
    #[serde(default)]
    pub rules: Vec<RuleDefinition>,
}

/// A collection of compiled rules addressed by name.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    /// Name of this rule set
    pub name: String,
    /// Description
    pub description: String,
    rules: IndexMap<String, PatternRule>,
}

impl RuleSet {
    /// Create a new empty rule set
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            rules: IndexMap::new(),
        }
    }

    /// Compiles every definition. Fails on the first malformed pattern or
    /// repeated name.
    pub fn from_config(config: RuleSetConfig) -> Result<Self> {
        let mut set = RuleSet::new(config.name);
        set.description = config.description;
        for definition in config.rules {
            set.add(PatternRule::from_definition(definition)?)?;
        }
        debug!("Loaded rule set '{}' with {} rule(s)", set.name, set.len());
        Ok(set)
    }

    /// Compiles a list of definitions into an unnamed rule set.
    pub fn from_definitions(definitions: impl IntoIterator<Item = RuleDefinition>) -> Result<Self> {
        Self::from_config(RuleSetConfig {
            rules: definitions.into_iter().collect(),
            ..Default::default()
        })
    }

    /// Parses a [`RuleSetConfig`] from JSON and compiles it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: RuleSetConfig = serde_json::from_str(json)?;
        Self::from_config(config)
    }

    /// Reads and compiles a JSON rule set file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading rule set from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Definitions of all rules, without side conditions.
    pub fn to_config(&self) -> RuleSetConfig {
        RuleSetConfig {
            name: self.name.clone(),
            description: self.description.clone(),
            rules: self.rules.values().map(|r| r.definition().clone()).collect(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.to_config()).map_err(Error::from)
    }

    /// Add a rule to the set
    pub fn add(&mut self, rule: PatternRule) -> Result<()> {
        if self.rules.contains_key(rule.name()) {
            return Err(Error::DuplicateRule(rule.name().to_string()));
        }
        self.rules.insert(rule.name().to_string(), rule);
        Ok(())
    }

    /// Attaches a side condition to the rule called `name`.
    pub fn set_condition<F, V>(&mut self, name: &str, condition: F) -> Result<()>
    where
        F: Fn(&Substitution) -> V + Send + Sync + 'static,
        V: Into<Verdict>,
    {
        let rule = self
            .rules
            .get_mut(name)
            .ok_or_else(|| Error::UnknownRule(name.to_string()))?;
        rule.set_condition(condition);
        Ok(())
    }

    /// Find a rule by name
    pub fn get(&self, name: &str) -> Option<&PatternRule> {
        self.rules.get(name)
    }

    /// Checks one rule by name. An unknown name is an error; a failed match
    /// is [`RuleOutcome::NoMatch`].
    pub fn check(
        &self,
        name: &str,
        premises: &[Option<&Formula>],
        conclusion: &Formula,
    ) -> Result<RuleOutcome> {
        let rule = self
            .get(name)
            .ok_or_else(|| Error::UnknownRule(name.to_string()))?;
        Ok(rule.check(premises, conclusion))
    }

    /// Rule names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PatternRule> {
        self.rules.values()
    }

    /// Count of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
