//! Proof Patterns - Inference Rule Matching for Logical Formulas
//!
//! This crate decides whether a set of premise formulas and a conclusion
//! formula instantiate a named inference rule given as pattern strings.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Rule Set                              │
//! │          JSON definitions │ named lookup │ conditions        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │          Arity Adapters (Axiom, Rule1..Rule3)         │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! │                           │                                  │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │                   Pattern Rule                        │   │
//! │  │  Premise Permutations │ Partial Checks │ Verdicts    │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! │                           │                                  │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │                Structural Matcher                     │   │
//! │  │        Formula │ Pattern │ Substitution               │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use proof_patterns::{Formula, PatternRule, RuleOutcome};
//!
//! let and_intro = PatternRule::new("and_intro", &["A", "B"], "and(A, B)").unwrap();
//!
//! let p: Formula = "p".parse().unwrap();
//! let q: Formula = "q".parse().unwrap();
//! let conclusion: Formula = "and(p, q)".parse().unwrap();
//!
//! // Premise order does not matter for two-premise rules.
//! let outcome = and_intro.check(&[Some(&q), Some(&p)], &conclusion);
//! assert_eq!(outcome, RuleOutcome::success("and_intro"));
//! ```

pub mod adapters;
pub mod error;
pub mod formula;
pub mod matcher;
pub mod outcome;
pub mod parser;
pub mod rule;
pub mod ruleset;
pub mod substitution;

// Re-exports
pub use adapters::{Axiom, Rule1, Rule2, Rule3};
pub use error::{Error, Result};
pub use formula::Formula;
pub use matcher::{match_formula, match_pattern, Mismatch};
pub use outcome::{RuleOutcome, Verdict};
pub use parser::parse;
pub use rule::{Condition, PatternRule, RuleBuilder, RuleDefinition};
pub use ruleset::{RuleSet, RuleSetConfig};
pub use substitution::Substitution;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
