//! Parser for the pattern notation.
//!
//! ```text
//! formula := IDENT
//!          | IDENT '(' [ formula { ',' formula } ] ')'
//! ```
//!
//! A bare identifier is a variable, except `true` and `false` which are
//! nullary compounds. `kind()` is an explicit nullary compound.

use std::iter::Peekable;
use std::str::CharIndices;

use crate::error::{Error, Result};
use crate::formula::{Formula, CONSTANTS};

/// Maximum nesting depth accepted by the parser.
pub const MAX_DEPTH: usize = 512;

/// Parses a formula or pattern from its textual notation.
pub fn parse(text: &str) -> Result<Formula> {
    let mut parser = Parser {
        text,
        chars: text.char_indices().peekable(),
    };
    let formula = parser.formula(0)?;
    parser.skip_ws();
    match parser.chars.next() {
        None => Ok(formula),
        Some((pos, c)) => Err(Error::parse(
            pos,
            format!("unexpected '{}' after end of formula", c),
        )),
    }
}

struct Parser<'a> {
    text: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl Parser<'_> {
    fn position(&mut self) -> usize {
        self.chars
            .peek()
            .map(|&(pos, _)| pos)
            .unwrap_or(self.text.len())
    }

    fn skip_ws(&mut self) {
        while let Some(&(_, c)) = self.chars.peek() {
            if c.is_whitespace() {
                self.chars.next();
            } else {
                break;
            }
        }
    }

    fn read_ident(&mut self) -> Result<String> {
        self.skip_ws();
        let start = self.position();
        let mut ident = String::new();
        while let Some(&(_, c)) = self.chars.peek() {
            if is_ident_char(c) {
                ident.push(c);
                self.chars.next();
            } else {
                break;
            }
        }
        if ident.is_empty() {
            return Err(match self.chars.peek() {
                Some(&(pos, c)) => Error::parse(pos, format!("expected identifier, found '{}'", c)),
                None => Error::parse(start, "expected identifier, found end of input"),
            });
        }
        Ok(ident)
    }

    fn eat(&mut self, expected: char) -> bool {
        self.skip_ws();
        if matches!(self.chars.peek(), Some(&(_, c)) if c == expected) {
            self.chars.next();
            true
        } else {
            false
        }
    }

    fn formula(&mut self, depth: usize) -> Result<Formula> {
        if depth > MAX_DEPTH {
            let pos = self.position();
            return Err(Error::parse(pos, "formula nested too deeply"));
        }

        let ident = self.read_ident()?;
        if !self.eat('(') {
            if CONSTANTS.contains(&ident.as_str()) {
                return Ok(Formula::constant(ident));
            }
            return Ok(Formula::Variable(ident));
        }

        let mut args = Vec::new();
        if self.eat(')') {
            return Ok(Formula::compound(ident, args));
        }
        loop {
            args.push(self.formula(depth + 1)?);
            if self.eat(',') {
                continue;
            }
            if self.eat(')') {
                break;
            }
            let pos = self.position();
            return Err(match self.chars.peek() {
                Some(&(_, c)) => Error::parse(pos, format!("expected ',' or ')', found '{}'", c)),
                None => Error::parse(pos, format!("unclosed '(' after '{}'", ident)),
            });
        }
        Ok(Formula::compound(ident, args))
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '\''
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_variable() {
        assert_eq!(parse("A").unwrap(), Formula::var("A"));
        assert_eq!(parse("  p'  ").unwrap(), Formula::var("p'"));
    }

    #[test]
    fn test_parse_constants() {
        assert_eq!(parse("true").unwrap(), Formula::constant("true"));
        assert_eq!(parse("false").unwrap(), Formula::constant("false"));
        assert_eq!(parse("bot()").unwrap(), Formula::constant("bot"));
    }

    #[test]
    fn test_parse_nested() {
        let f = parse("imply(and(A, B), or(A,not(C)))").unwrap();
        assert_eq!(f.kind(), Some("imply"));
        assert_eq!(f.arity(), 2);
        assert_eq!(f.to_string(), "imply(and(A, B), or(A, not(C)))");
    }

    #[test]
    fn test_display_round_trip() {
        for text in ["f(A, B, C)", "and(p, q)", "true", "box(diamond(x))", "k()"] {
            let f = parse(text).unwrap();
            assert_eq!(parse(&f.to_string()).unwrap(), f);
        }
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse(""), Err(Error::Parse { position: 0, .. })));
        assert!(matches!(parse("and(A,"), Err(Error::Parse { .. })));
        assert!(matches!(parse("and(A B)"), Err(Error::Parse { position: 6, .. })));
        assert!(matches!(parse("A)"), Err(Error::Parse { position: 1, .. })));
        assert!(matches!(parse("and(,A)"), Err(Error::Parse { position: 4, .. })));
    }

    #[test]
    fn test_depth_limit() {
        let deep = format!("{}x{}", "n(".repeat(MAX_DEPTH + 2), ")".repeat(MAX_DEPTH + 2));
        assert!(parse(&deep).is_err());

        let ok = format!("{}x{}", "n(".repeat(10), ")".repeat(10));
        assert!(parse(&ok).is_ok());
    }
}
