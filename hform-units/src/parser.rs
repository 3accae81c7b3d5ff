//! Unit expression parser
//!
//! Grammar:
//!
//! ```text
//! expr     := term (('*' | '/') term)*
//! term     := atom ('**' exponent)?
//! atom     := symbol digits? | digits | '(' expr ')'
//! exponent := '-'? digits | '(' '-'? digits ')'
//! ```
//!
//! Digits written directly after a symbol are an exponent (`m2` is `m**2`).
//! Whitespace between tokens is ignored.

use crate::registry;
use crate::{Dimension, Result, UnitError};

/// Scale and dimension of a parsed expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Parsed {
    pub factor: f64,
    pub dimension: Dimension,
}

impl Parsed {
    const ONE: Parsed = Parsed {
        factor: 1.0,
        dimension: Dimension::NONE,
    };

    fn mul(self, rhs: Parsed) -> Option<Parsed> {
        Parsed::checked(self.factor * rhs.factor, self.dimension.checked_mul(rhs.dimension)?)
    }

    fn div(self, rhs: Parsed) -> Option<Parsed> {
        Parsed::checked(self.factor / rhs.factor, self.dimension.checked_div(rhs.dimension)?)
    }

    fn powi(self, n: i32) -> Option<Parsed> {
        Parsed::checked(self.factor.powi(n), self.dimension.checked_powi(n)?)
    }

    /// A scale that over- or underflows `f64` cannot be converted.
    fn checked(factor: f64, dimension: Dimension) -> Option<Parsed> {
        (factor.is_finite() && factor != 0.0).then_some(Parsed { factor, dimension })
    }
}

pub(crate) fn parse(expr: &str) -> Result<Parsed> {
    let mut parser = Parser {
        expr,
        chars: expr.chars().collect(),
        pos: 0,
    };

    let parsed = parser.expr()?;
    parser.skip_ws();
    if parser.pos < parser.chars.len() {
        return Err(parser.error(format!("unexpected {:?}", parser.chars[parser.pos])));
    }
    hform_log::trace!("parsed unit {:?} as {:?}", expr, parsed);
    Ok(parsed)
}

struct Parser<'a> {
    expr: &'a str,
    chars: Vec<char>,
    pos: usize,
}

impl Parser<'_> {
    fn error(&self, message: impl Into<String>) -> UnitError {
        UnitError::Syntax {
            expr: self.expr.to_string(),
            message: message.into(),
        }
    }

    fn out_of_range(&self) -> UnitError {
        self.error("exponent or scale out of range")
    }

    fn skip_ws(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_power(&self) -> bool {
        self.chars.get(self.pos) == Some(&'*') && self.chars.get(self.pos + 1) == Some(&'*')
    }

    fn expr(&mut self) -> Result<Parsed> {
        let mut value = self.term()?;
        loop {
            self.skip_ws();
            match self.peek() {
                Some('*') if !self.peek_power() => {
                    self.pos += 1;
                    let rhs = self.term()?;
                    value = value.mul(rhs).ok_or_else(|| self.out_of_range())?;
                }
                Some('/') => {
                    self.pos += 1;
                    let rhs = self.term()?;
                    value = value.div(rhs).ok_or_else(|| self.out_of_range())?;
                }
                _ => return Ok(value),
            }
        }
    }

    fn term(&mut self) -> Result<Parsed> {
        let atom = self.atom()?;
        self.skip_ws();
        if self.peek_power() {
            self.pos += 2;
            let n = self.exponent()?;
            return atom.powi(n).ok_or_else(|| self.out_of_range());
        }
        Ok(atom)
    }

    fn atom(&mut self) -> Result<Parsed> {
        self.skip_ws();
        match self.peek() {
            Some('(') => {
                self.pos += 1;
                let inner = self.expr()?;
                self.skip_ws();
                if self.peek() != Some(')') {
                    return Err(self.error("missing ')'"));
                }
                self.pos += 1;
                Ok(inner)
            }
            Some(c) if c.is_ascii_digit() => {
                let n = self.digits()?;
                Ok(Parsed {
                    factor: n as f64,
                    ..Parsed::ONE
                })
            }
            Some(c) if is_symbol_char(c) => {
                let start = self.pos;
                while self.peek().is_some_and(is_symbol_char) {
                    self.pos += 1;
                }
                let symbol: String = self.chars[start..self.pos].iter().collect();
                let def = registry::lookup(&symbol).ok_or(UnitError::UnknownUnit(symbol))?;
                let unit = Parsed {
                    factor: def.factor,
                    dimension: def.dimension,
                };
                if self.peek().is_some_and(|c| c.is_ascii_digit()) {
                    let n = self.digits()?;
                    return unit.powi(n).ok_or_else(|| self.out_of_range());
                }
                Ok(unit)
            }
            Some(c) => Err(self.error(format!("unexpected {c:?}"))),
            None => Err(self.error("unit expected")),
        }
    }

    fn exponent(&mut self) -> Result<i32> {
        self.skip_ws();
        let parenthesized = self.peek() == Some('(');
        if parenthesized {
            self.pos += 1;
            self.skip_ws();
        }
        let negative = self.peek() == Some('-');
        if negative {
            self.pos += 1;
        }
        let n = self.digits()?;
        if parenthesized {
            self.skip_ws();
            if self.peek() != Some(')') {
                return Err(self.error("missing ')'"));
            }
            self.pos += 1;
        }
        Ok(if negative { -n } else { n })
    }

    fn digits(&mut self) -> Result<i32> {
        let start = self.pos;
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.pos += 1;
        }
        if start == self.pos {
            return Err(self.error("digits expected"));
        }
        let text: String = self.chars[start..self.pos].iter().collect();
        text.parse()
            .map_err(|_| self.error(format!("number out of range: {text}")))
    }
}

fn is_symbol_char(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}
