//! One-way structural matching of a formula against a pattern.
//!
//! Only variables of the pattern are bound; the concrete formula is taken
//! as-is. Matching is a single fail-fast descent with no backtracking.

use std::fmt;

use log::trace;

use crate::formula::Formula;
use crate::substitution::Substitution;

/// Why a formula failed to match a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mismatch {
    /// Operator kinds differ.
    KindClash { formula: String, pattern: String },
    /// Same kind, different number of arguments.
    ArityClash { formula: usize, pattern: usize },
    /// A variable in the formula faced a compound pattern.
    AtomAgainstCompound { atom: String, kind: String },
    /// A pattern variable occurs twice with different formulas.
    InconsistentBinding { var: String },
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mismatch::KindClash { formula, pattern } => {
                write!(f, "different kind: {} vs {}", formula, pattern)
            }
            Mismatch::ArityClash { formula, pattern } => {
                write!(f, "different arity: {} vs {}", formula, pattern)
            }
            Mismatch::AtomAgainstCompound { atom, kind } => {
                write!(f, "atom {} cannot match a {} pattern", atom, kind)
            }
            Mismatch::InconsistentBinding { var } => {
                write!(f, "variable {} already bound to another formula", var)
            }
        }
    }
}

/// Matches `formula` against `pattern`, extending `sub`.
///
/// Passing `None` returns `None`, so several calls can be chained and an
/// early failure short-circuits the rest:
///
/// ```rust
/// use proof_patterns::{match_formula, Formula, Substitution};
///
/// let p: Formula = "imply(A, B)".parse().unwrap();
/// let q: Formula = "A".parse().unwrap();
/// let f1: Formula = "imply(x, y)".parse().unwrap();
/// let f2: Formula = "x".parse().unwrap();
///
/// let sub = match_formula(&f1, &p, Some(Substitution::new()));
/// let sub = match_formula(&f2, &q, sub).unwrap();
/// assert_eq!(sub["B"].to_string(), "y");
/// ```
///
/// The substitution is taken by value: on failure it is dropped and the
/// caller has nothing partial to observe.
pub fn match_formula(
    formula: &Formula,
    pattern: &Formula,
    sub: Option<Substitution>,
) -> Option<Substitution> {
    let mut sub = sub?;
    match match_into(formula, pattern, &mut sub) {
        Ok(()) => Some(sub),
        Err(mismatch) => {
            trace!("{} does not match {}: {}", formula, pattern, mismatch);
            None
        }
    }
}

/// Matches `formula` against `pattern` starting from an empty substitution.
pub fn match_pattern(formula: &Formula, pattern: &Formula) -> Option<Substitution> {
    match_formula(formula, pattern, Some(Substitution::new()))
}

/// Recursive step. `sub` may be left partially extended on error; callers
/// must discard it.
pub(crate) fn match_into(
    formula: &Formula,
    pattern: &Formula,
    sub: &mut Substitution,
) -> Result<(), Mismatch> {
    match (formula, pattern) {
        (_, Formula::Variable(var)) => {
            if sub.bind(var, formula) {
                Ok(())
            } else {
                Err(Mismatch::InconsistentBinding { var: var.clone() })
            }
        }
        (Formula::Variable(atom), Formula::Compound { kind, .. }) => {
            Err(Mismatch::AtomAgainstCompound {
                atom: atom.clone(),
                kind: kind.clone(),
            })
        }
        (
            Formula::Compound { kind: fk, args: fa },
            Formula::Compound { kind: pk, args: pa },
        ) => {
            if fk != pk {
                return Err(Mismatch::KindClash {
                    formula: fk.clone(),
                    pattern: pk.clone(),
                });
            }
            if fa.len() != pa.len() {
                return Err(Mismatch::ArityClash {
                    formula: fa.len(),
                    pattern: pa.len(),
                });
            }
            for (f, p) in fa.iter().zip(pa) {
                match_into(f, p, sub)?;
            }
            Ok(())
        }
    }
}
