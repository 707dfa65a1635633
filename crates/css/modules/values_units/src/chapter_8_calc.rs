//! CSS Values & Units Level 3 — §8.1 Mathematical Expressions: `calc()`
//! Spec: <https://www.w3.org/TR/css-values-3/#calc-notation>
//!
//! A small expression tree whose `Display` output is the serialized form. The
//! tree never reassociates or adds parentheses on its own: every grouping in
//! the output is an explicit [`CalcExpr::Parenthesized`] or
//! [`CalcExpr::Calc`] node, so rendered strings are stable byte-for-byte.
//!
//! ```text
//! expr    := '0' | number | percentage | length
//!          | expr ' + ' expr | expr ' - ' expr | expr ' * ' expr
//!          | '(' expr ')' | 'calc(' expr ')'
//! ```

use crate::{CssLength, Number, Percentage};
use core::fmt;

/// A `calc()`-compatible arithmetic expression.
#[derive(Clone, Debug, PartialEq)]
pub enum CalcExpr {
    /// Literal `0`, valid as both a length and a number.
    Zero,
    /// Unit-less number
    Number(Number),
    /// Percentage of the containing dimension
    Percentage(Percentage),
    /// Author length token
    Length(CssLength),
    /// `lhs + rhs`
    Sum(Box<Self>, Box<Self>),
    /// `lhs - rhs`
    Difference(Box<Self>, Box<Self>),
    /// `lhs * rhs`
    Product(Box<Self>, Box<Self>),
    /// `(inner)`
    Parenthesized(Box<Self>),
    /// `calc(inner)`
    Calc(Box<Self>),
}

impl CalcExpr {
    /// Number leaf.
    #[inline]
    pub fn number(value: f64) -> Self {
        Self::Number(Number(value))
    }

    /// Integral number leaf (spans, offsets).
    #[inline]
    pub fn count(value: usize) -> Self {
        Self::Number(Number::from_count(value))
    }

    /// Percentage leaf.
    #[inline]
    pub fn percentage(value: f64) -> Self {
        Self::Percentage(Percentage(value))
    }

    /// Length leaf.
    #[inline]
    pub fn length(length: CssLength) -> Self {
        Self::Length(length)
    }

    /// `lhs + rhs`
    pub fn sum(lhs: Self, rhs: Self) -> Self {
        Self::Sum(Box::new(lhs), Box::new(rhs))
    }

    /// `lhs - rhs`
    pub fn difference(lhs: Self, rhs: Self) -> Self {
        Self::Difference(Box::new(lhs), Box::new(rhs))
    }

    /// `lhs * rhs`
    pub fn product(lhs: Self, rhs: Self) -> Self {
        Self::Product(Box::new(lhs), Box::new(rhs))
    }

    /// Wrap in parentheses.
    pub fn parenthesized(self) -> Self {
        Self::Parenthesized(Box::new(self))
    }

    /// Wrap in `calc()`.
    pub fn calc(self) -> Self {
        Self::Calc(Box::new(self))
    }
}

impl fmt::Display for CalcExpr {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zero => formatter.write_str("0"),
            Self::Number(number) => fmt::Display::fmt(number, formatter),
            Self::Percentage(percentage) => fmt::Display::fmt(percentage, formatter),
            Self::Length(length) => fmt::Display::fmt(length, formatter),
            Self::Sum(lhs, rhs) => write!(formatter, "{lhs} + {rhs}"),
            Self::Difference(lhs, rhs) => write!(formatter, "{lhs} - {rhs}"),
            Self::Product(lhs, rhs) => write!(formatter, "{lhs} * {rhs}"),
            Self::Parenthesized(inner) => write!(formatter, "({inner})"),
            Self::Calc(inner) => write!(formatter, "calc({inner})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Serialization follows the tree exactly, without implicit grouping.
    #[test]
    fn test_display_is_literal() {
        let gutter = CalcExpr::length(CssLength::normalize("4"));
        let base = CalcExpr::difference(
            CalcExpr::percentage(50.0),
            CalcExpr::product(gutter.clone(), CalcExpr::number(0.5)).parenthesized(),
        )
        .parenthesized();
        assert_eq!(base.to_string(), "(50% - (4px * 0.5))");

        let span = CalcExpr::product(CalcExpr::count(2), CalcExpr::sum(base, gutter));
        assert_eq!(span.to_string(), "2 * (50% - (4px * 0.5)) + 4px");
        assert_eq!(span.calc().to_string(), "calc(2 * (50% - (4px * 0.5)) + 4px)");
    }

    /// Zero renders bare.
    #[test]
    fn test_zero() {
        assert_eq!(CalcExpr::Zero.to_string(), "0");
        assert_eq!(CalcExpr::count(0).to_string(), "0");
        assert_eq!(CalcExpr::number(-0.0).to_string(), "0");
    }
}
