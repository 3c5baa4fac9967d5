//! Fixed-arity wrappers around [`PatternRule`].
//!
//! Each wrapper compiles its patterns once and forwards to
//! [`PatternRule::check`] with a premise list of its own arity.

use crate::error::Result;
use crate::formula::Formula;
use crate::outcome::{RuleOutcome, Verdict};
use crate::rule::PatternRule;
use crate::substitution::Substitution;

/// A rule without premises.
#[derive(Debug, Clone)]
pub struct Axiom(PatternRule);

impl Axiom {
    pub fn new(name: impl Into<String>, conclusion: &str) -> Result<Self> {
        PatternRule::new(name, &[], conclusion).map(Self)
    }

    pub fn check(&self, conclusion: &Formula) -> RuleOutcome {
        self.0.check(&[], conclusion)
    }
}

/// A one-premise rule.
#[derive(Debug, Clone)]
pub struct Rule1(PatternRule);

impl Rule1 {
    pub fn new(name: impl Into<String>, premise: &str, conclusion: &str) -> Result<Self> {
        PatternRule::new(name, &[premise], conclusion).map(Self)
    }

    pub fn check(&self, p1: Option<&Formula>, conclusion: &Formula) -> RuleOutcome {
        self.0.check(&[p1], conclusion)
    }
}

/// A two-premise rule. Premise order does not matter.
#[derive(Debug, Clone)]
pub struct Rule2(PatternRule);

impl Rule2 {
    pub fn new(
        name: impl Into<String>,
        premise1: &str,
        premise2: &str,
        conclusion: &str,
    ) -> Result<Self> {
        PatternRule::new(name, &[premise1, premise2], conclusion).map(Self)
    }

    pub fn check(
        &self,
        p1: Option<&Formula>,
        p2: Option<&Formula>,
        conclusion: &Formula,
    ) -> RuleOutcome {
        self.0.check(&[p1, p2], conclusion)
    }
}

/// A three-premise rule. Premise order does not matter.
#[derive(Debug, Clone)]
pub struct Rule3(PatternRule);

impl Rule3 {
    pub fn new(
        name: impl Into<String>,
        premise1: &str,
        premise2: &str,
        premise3: &str,
        conclusion: &str,
    ) -> Result<Self> {
        PatternRule::new(name, &[premise1, premise2, premise3], conclusion).map(Self)
    }

    pub fn check(
        &self,
        p1: Option<&Formula>,
        p2: Option<&Formula>,
        p3: Option<&Formula>,
        conclusion: &Formula,
    ) -> RuleOutcome {
        self.0.check(&[p1, p2, p3], conclusion)
    }
}

macro_rules! impl_common {
    ($($adapter:ident),*) => {$(
        impl $adapter {
            /// Attaches a side condition.
            pub fn when<F, V>(self, condition: F) -> Self
            where
                F: Fn(&Substitution) -> V + Send + Sync + 'static,
                V: Into<Verdict>,
            {
                Self(self.0.with_condition(condition))
            }

            /// The underlying rule.
            pub fn rule(&self) -> &PatternRule {
                &self.0
            }
        }

        impl From<$adapter> for PatternRule {
            fn from(adapter: $adapter) -> Self {
                adapter.0
            }
        }
    )*};
}

impl_common!(Axiom, Rule1, Rule2, Rule3);
