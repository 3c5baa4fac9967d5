//! Inference rules compiled from pattern strings.
//!
//! A [`PatternRule`] holds the parsed premise and conclusion patterns of a
//! named rule and an optional side condition. [`PatternRule::check`] decides
//! whether candidate premises and a candidate conclusion instantiate it.
//!
//! Two- and three-premise rules are treated as unordered in their premises:
//! every assignment of the supplied premises to the premise patterns is tried
//! in a fixed order, each from a fresh [`Substitution`].

use std::fmt;
use std::sync::Arc;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::formula::Formula;
use crate::matcher::match_formula;
use crate::outcome::{RuleOutcome, Verdict};
use crate::parser::parse;
use crate::substitution::Substitution;

/// A side condition evaluated on the final substitution of a full match.
pub type Condition = Arc<dyn Fn(&Substitution) -> Verdict + Send + Sync>;

/// Premise orders tried for two-premise rules.
const PAIR_ORDERS: [[usize; 2]; 2] = [[0, 1], [1, 0]];

/// Premise orders tried for three-premise rules, in this exact order.
const TRIPLE_ORDERS: [[usize; 3]; 6] = [
    [0, 1, 2],
    [0, 2, 1],
    [1, 0, 2],
    [1, 2, 0],
    [2, 0, 1],
    [2, 1, 0],
];

/// The serializable description of a rule: its name and pattern strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDefinition {
    /// Unique rule name, reported in every outcome.
    pub name: String,
    /// Premise patterns, in slot order.
    #[serde(default)]
    pub premises: Vec<String>,
    /// Conclusion pattern.
    pub conclusion: String,
    /// Human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl RuleDefinition {
    pub fn new(name: impl Into<String>, premises: &[&str], conclusion: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            premises: premises.iter().map(|p| p.to_string()).collect(),
            conclusion: conclusion.into(),
            description: None,
        }
    }
}

/// A compiled inference rule.
#[derive(Clone)]
pub struct PatternRule {
    definition: RuleDefinition,
    premises: Vec<Formula>,
    conclusion: Formula,
    condition: Option<Condition>,
}

impl PatternRule {
    /// Compiles a rule without a side condition.
    ///
    /// Every pattern is parsed here; a malformed pattern is reported now,
    /// never on first use.
    pub fn new(name: impl Into<String>, premises: &[&str], conclusion: &str) -> Result<Self> {
        Self::from_definition(RuleDefinition::new(name, premises, conclusion))
    }

    /// Starts a [`RuleBuilder`].
    pub fn builder(name: impl Into<String>) -> RuleBuilder {
        RuleBuilder::new(name)
    }

    /// Compiles a rule from its definition.
    pub fn from_definition(definition: RuleDefinition) -> Result<Self> {
        if definition.name.trim().is_empty() {
            return Err(Error::InvalidRule("rule name cannot be empty".to_string()));
        }

        let premises = definition
            .premises
            .iter()
            .map(|p| parse(p))
            .collect::<Result<Vec<_>>>()
            .map_err(|e| e.in_rule(&definition.name))?;
        let conclusion = parse(&definition.conclusion).map_err(|e| e.in_rule(&definition.name))?;

        debug!(
            "Compiled rule {} with {} premise(s)",
            definition.name,
            premises.len()
        );

        Ok(Self {
            definition,
            premises,
            conclusion,
            condition: None,
        })
    }

    /// Attaches a side condition, replacing any previous one.
    ///
    /// The closure may return a [`Verdict`] or a plain `bool`.
    pub fn with_condition<F, V>(mut self, condition: F) -> Self
    where
        F: Fn(&Substitution) -> V + Send + Sync + 'static,
        V: Into<Verdict>,
    {
        self.set_condition(condition);
        self
    }

    pub(crate) fn set_condition<F, V>(&mut self, condition: F)
    where
        F: Fn(&Substitution) -> V + Send + Sync + 'static,
        V: Into<Verdict>,
    {
        self.condition = Some(Arc::new(move |sub: &Substitution| -> Verdict {
            condition(sub).into()
        }));
    }

    pub fn name(&self) -> &str {
        &self.definition.name
    }

    /// Number of premise patterns.
    pub fn arity(&self) -> usize {
        self.premises.len()
    }

    pub fn premises(&self) -> &[Formula] {
        &self.premises
    }

    pub fn conclusion(&self) -> &Formula {
        &self.conclusion
    }

    pub fn has_condition(&self) -> bool {
        self.condition.is_some()
    }

    /// The definition this rule was compiled from.
    pub fn definition(&self) -> &RuleDefinition {
        &self.definition
    }

    /// Checks whether `premises` and `conclusion` instantiate this rule.
    ///
    /// `premises` is aligned with the premise patterns; `None` marks an
    /// omitted premise and makes this a partial check, in which the side
    /// condition is not evaluated. A list shorter than the arity is padded
    /// with omitted premises; a longer one never matches.
    pub fn check(&self, premises: &[Option<&Formula>], conclusion: &Formula) -> RuleOutcome {
        let name = self.name();
        let arity = self.arity();

        if premises.len() > arity {
            debug!(
                "Rule {} expects {} premise(s), got {}",
                name,
                arity,
                premises.len()
            );
            return RuleOutcome::no_match(name);
        }

        let mut slots = premises.to_vec();
        slots.resize(arity, None);
        let is_partial = slots.iter().any(Option::is_none);

        for order in alignments(arity) {
            trace!("Rule {}: trying premise order {:?}", name, order);
            let aligned = order.iter().map(|&i| slots[i]);
            if let Some(outcome) = self.attempt(aligned, conclusion, is_partial) {
                return outcome;
            }
        }

        RuleOutcome::no_match(name)
    }

    /// One alignment, with its own substitution.
    fn attempt<'f>(
        &self,
        aligned: impl Iterator<Item = Option<&'f Formula>>,
        conclusion: &Formula,
        is_partial: bool,
    ) -> Option<RuleOutcome> {
        let mut sub = Some(Substitution::new());
        for (premise, pattern) in aligned.zip(&self.premises) {
            if let Some(premise) = premise {
                sub = match_formula(premise, pattern, sub);
            }
        }
        let sub = match_formula(conclusion, &self.conclusion, sub)?;

        match &self.condition {
            Some(condition) if !is_partial => {
                let outcome = condition(&sub).into_outcome(self.name());
                if outcome.is_none() {
                    debug!("Side condition of rule {} rejected {}", self.name(), sub);
                }
                outcome
            }
            _ => Some(RuleOutcome::success(self.name())),
        }
    }
}

impl fmt::Debug for PatternRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternRule")
            .field("name", &self.definition.name)
            .field("premises", &self.premises)
            .field("conclusion", &self.conclusion)
            .field("condition", &self.condition.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// Premise orders to try for a rule of the given arity.
///
/// Only two- and three-premise rules are permuted; every other arity gets
/// the identity order alone.
fn alignments(arity: usize) -> Vec<Vec<usize>> {
    match arity {
        2 => PAIR_ORDERS.iter().map(|o| o.to_vec()).collect(),
        3 => TRIPLE_ORDERS.iter().map(|o| o.to_vec()).collect(),
        n => vec![(0..n).collect()],
    }
}

/// A builder for creating `PatternRule`s using a fluent API.
pub struct RuleBuilder {
    definition: RuleDefinition,
    condition: Option<Condition>,
}

impl RuleBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            definition: RuleDefinition::new(name, &[], ""),
            condition: None,
        }
    }

    /// Appends a premise pattern.
    pub fn premise(mut self, pattern: impl Into<String>) -> Self {
        self.definition.premises.push(pattern.into());
        self
    }

    /// Sets the conclusion pattern.
    pub fn conclusion(mut self, pattern: impl Into<String>) -> Self {
        self.definition.conclusion = pattern.into();
        self
    }

    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.definition.description = Some(desc.into());
        self
    }

    /// Sets the side condition.
    pub fn when<F, V>(mut self, condition: F) -> Self
    where
        F: Fn(&Substitution) -> V + Send + Sync + 'static,
        V: Into<Verdict>,
    {
        self.condition = Some(Arc::new(move |sub: &Substitution| -> Verdict {
            condition(sub).into()
        }));
        self
    }

    /// Parses all patterns and returns the compiled rule.
    pub fn build(self) -> Result<PatternRule> {
        if self.definition.conclusion.trim().is_empty() {
            return Err(Error::InvalidRule(format!(
                "{}: missing conclusion pattern",
                self.definition.name
            )));
        }
        let mut rule = PatternRule::from_definition(self.definition)?;
        rule.condition = self.condition;
        Ok(rule)
    }
}
