//! The formula model shared by concrete formulas and rule patterns.
//!
//! A formula is a finite tree: leaves are named variables, inner nodes carry
//! an operator kind and an ordered list of arguments. The same type is used
//! for patterns, where variable leaves act as matching holes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::parser;

/// Nullary kinds that are written without parentheses.
pub const CONSTANTS: [&str; 2] = ["true", "false"];

/// A logical formula or pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Formula {
    /// An atomic named leaf.
    Variable(String),
    /// An operator node with ordered children.
    Compound {
        /// Operator or connective identity, e.g. `and`, `imply`.
        kind: String,
        /// Children, in order.
        args: Vec<Formula>,
    },
}

impl Formula {
    /// Creates a variable leaf.
    pub fn var(name: impl Into<String>) -> Self {
        Formula::Variable(name.into())
    }

    /// Creates a compound node.
    pub fn compound(kind: impl Into<String>, args: Vec<Formula>) -> Self {
        Formula::Compound {
            kind: kind.into(),
            args,
        }
    }

    /// Creates a nullary compound, e.g. `true`.
    pub fn constant(kind: impl Into<String>) -> Self {
        Self::compound(kind, Vec::new())
    }

    /// Returns `true` if this formula is a variable leaf.
    pub fn is_variable(&self) -> bool {
        matches!(self, Formula::Variable(_))
    }

    /// Returns the operator kind of a compound node.
    pub fn kind(&self) -> Option<&str> {
        match self {
            Formula::Variable(_) => None,
            Formula::Compound { kind, .. } => Some(kind),
        }
    }

    /// Returns the children of this formula (empty for variables).
    pub fn args(&self) -> &[Formula] {
        match self {
            Formula::Variable(_) => &[],
            Formula::Compound { args, .. } => args,
        }
    }

    /// Number of children.
    pub fn arity(&self) -> usize {
        self.args().len()
    }

    /// Structural equality.
    pub fn same(&self, other: &Formula) -> bool {
        self == other
    }

    /// Total number of nodes in the tree.
    pub fn size(&self) -> usize {
        1 + self.args().iter().map(Formula::size).sum::<usize>()
    }

    /// Names of all variable leaves, in first-occurrence order.
    pub fn variables(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_variables(&mut out);
        out
    }

    fn collect_variables<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Formula::Variable(name) => {
                if !out.contains(&name.as_str()) {
                    out.push(name);
                }
            }
            Formula::Compound { args, .. } => {
                for arg in args {
                    arg.collect_variables(out);
                }
            }
        }
    }
}

/// Writes the pattern notation read by [`parser::parse`].
///
/// Output parses back to the same formula only when every variable name is a
/// valid identifier other than `true` or `false`. `Formula::var("true")`
/// prints as `true`, which parses to the nullary compound.
impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formula::Variable(name) => write!(f, "{}", name),
            Formula::Compound { kind, args } if args.is_empty() => {
                if CONSTANTS.contains(&kind.as_str()) {
                    write!(f, "{}", kind)
                } else {
                    write!(f, "{}()", kind)
                }
            }
            Formula::Compound { kind, args } => {
                write!(f, "{}(", kind)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
        }
    }
}

impl FromStr for Formula {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse(s)
    }
}
