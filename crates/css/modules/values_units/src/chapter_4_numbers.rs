//! CSS Values & Units Level 3 — §4 Numbers
//! Spec: <https://www.w3.org/TR/css-values-3/#numeric-types>
//!
//! Also hosts `<ratio>` (Media Queries §3.7 / Values 4 §5.7), which is built
//! from two `<number>` components.

use crate::ParseError;
use core::fmt;
use cssparser::{Parser, ParserInput, Token};

/// A CSS <number>
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Number(pub f64);

impl Number {
    /// Wrap an integral count (span, offset) as a number.
    #[inline]
    pub fn from_count(count: usize) -> Self {
        Self(count as f64)
    }
}

impl fmt::Display for Number {
    /// Shortest round-trip representation, without a trailing `.0` for
    /// integral values and without a sign on zero.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value.is_infinite() {
            return formatter.write_str(if value > 0.0 { "infinity" } else { "-infinity" });
        }
        if value == 0.0 {
            return formatter.write_str("0");
        }
        write!(formatter, "{value}")
    }
}

/// Parse a leading CSS <number> (§4.2), taking the numeric part of a
/// dimension or percentage as well (`4px` yields `4`, `50%` yields `50`).
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the next token is not numeric.
pub fn parse_number(input: &mut Parser<'_, '_>) -> Result<Number, ParseError> {
    match input.next() {
        Ok(
            &Token::Number {
                value, int_value, ..
            }
            | &Token::Dimension {
                value, int_value, ..
            },
        ) => Ok(Number(token_value(value, int_value))),
        Ok(&Token::Percentage {
            unit_value,
            int_value,
            ..
        }) => Ok(Number(
            int_value.map_or_else(|| f64::from(unit_value) * 100.0, f64::from),
        )),
        _ => Err(ParseError::UnexpectedToken),
    }
}

/// Integer tokens keep their exact value; others widen from the tokenizer's
/// `f32`.
fn token_value(value: f32, int_value: Option<i32>) -> f64 {
    int_value.map_or_else(|| f64::from(value), f64::from)
}

/// Parse the leading number of `text`, ignoring leading whitespace and
/// anything after the first token.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when `text` does not start with a
/// number.
pub fn parse_number_prefix(text: &str) -> Result<f64, ParseError> {
    let mut parser_input = ParserInput::new(text);
    let mut parser = Parser::new(&mut parser_input);
    parse_number(&mut parser).map(|number| number.0)
}

/// A CSS <ratio>: `width:height`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ratio {
    /// Leading component
    pub width: f64,
    /// Trailing component
    pub height: f64,
}

impl Ratio {
    /// Width divided by height. A zero height yields an infinite ratio.
    #[inline]
    pub fn value(self) -> f64 {
        self.width / self.height
    }
}

/// Parse a `width:height` ratio.
///
/// The input must split on `:` into exactly two parts. A part without a
/// leading number counts as NaN, which makes the whole ratio NaN.
///
/// # Errors
/// Returns `ParseError::InvalidRatio` when there are not exactly two parts.
pub fn parse_ratio(input: &str) -> Result<Ratio, ParseError> {
    let mut parts = input.split(':');
    let (Some(width), Some(height), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(ParseError::InvalidRatio);
    };
    Ok(Ratio {
        width: parse_number_prefix(width).unwrap_or(f64::NAN),
        height: parse_number_prefix(height).unwrap_or(f64::NAN),
    })
}
