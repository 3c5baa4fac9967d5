//! Variable bindings built while matching a formula against a pattern.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::formula::Formula;

/// A mapping from pattern-variable name to the formula it was bound to.
///
/// A substitution lives for exactly one matching attempt. Each permutation
/// tried by a rule checker starts from a fresh one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Substitution {
    bindings: IndexMap<String, Formula>,
}

impl Substitution {
    /// Create an empty substitution
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `var` to `formula` if it is unbound. Returns `false` when the
    /// variable is already bound to a structurally different formula.
    pub fn bind(&mut self, var: &str, formula: &Formula) -> bool {
        match self.bindings.get(var) {
            Some(bound) => bound.same(formula),
            None => {
                self.bindings.insert(var.to_string(), formula.clone());
                true
            }
        }
    }

    /// Get a bound formula
    pub fn get(&self, var: &str) -> Option<&Formula> {
        self.bindings.get(var)
    }

    /// Check if a variable is bound
    pub fn is_bound(&self, var: &str) -> bool {
        self.bindings.contains_key(var)
    }

    /// Number of bound variables
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterates over bindings in the order they were made.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Formula)> {
        self.bindings.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Replaces every bound variable leaf of `pattern` by its binding.
    /// Unbound variables are left in place.
    pub fn apply(&self, pattern: &Formula) -> Formula {
        match pattern {
            Formula::Variable(name) => self
                .bindings
                .get(name)
                .cloned()
                .unwrap_or_else(|| pattern.clone()),
            Formula::Compound { kind, args } => Formula::Compound {
                kind: kind.clone(),
                args: args.iter().map(|a| self.apply(a)).collect(),
            },
        }
    }
}

impl std::ops::Index<&str> for Substitution {
    type Output = Formula;

    /// Panics if `var` is unbound. Use [`Substitution::get`] otherwise.
    fn index(&self, var: &str) -> &Formula {
        &self.bindings[var]
    }
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (var, formula)) in self.bindings.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} := {}", var, formula)?;
        }
        write!(f, "}}")
    }
}
