//! CSS Values & Units Level 3 — §6 Dimensions (length tokens)
//! Spec: <https://www.w3.org/TR/css-values-3/#lengths>
//!
//! Lengths here stay textual: they are spliced verbatim into `calc()`
//! expressions and resolved by whoever renders them.

use crate::ParseError;
use core::fmt;
use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

/// Unit assumed for unit-less input.
pub const DEFAULT_UNIT: &str = "px";

/// A length token as written by the author, with a unit guaranteed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CssLength(String);

impl CssLength {
    /// Append `px` unless `raw` already ends in a unit or `%`.
    pub fn normalize(raw: &str) -> Self {
        if has_trailing_unit(raw) {
            Self(raw.to_owned())
        } else {
            Self(format!("{raw}{DEFAULT_UNIT}"))
        }
    }

    /// Normalize `raw` and require the result to be usable inside `calc()`.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidLength` when the normalized token does not
    /// match [`is_calc_allowed_length`].
    pub fn parse_calc_allowed(raw: &str) -> Result<Self, ParseError> {
        let length = Self::normalize(raw);
        if length.is_calc_allowed() {
            Ok(length)
        } else {
            Err(ParseError::InvalidLength)
        }
    }

    /// Check the token against the calc-allowed grammar.
    #[inline]
    pub fn is_calc_allowed(&self) -> bool {
        is_calc_allowed_length(&self.0)
    }

    /// The normalized token.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CssLength {
    /// One pixel.
    fn default() -> Self {
        Self(format!("1{DEFAULT_UNIT}"))
    }
}

impl fmt::Display for CssLength {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

/// True when `raw` ends with at least one ASCII letter or `%`.
#[inline]
pub fn has_trailing_unit(raw: &str) -> bool {
    raw.chars()
        .next_back()
        .is_some_and(|last| last.is_ascii_alphabetic() || last == '%')
}

/// Calc-allowed length grammar, ASCII digits only.
const CALC_ALLOWED_LENGTH_PATTERN: &str = r"^-?\d+((\.\d+)?[A-Za-z%$]?)+$";

static CALC_ALLOWED_LENGTH: LazyLock<Option<Regex>> = LazyLock::new(|| {
    RegexBuilder::new(CALC_ALLOWED_LENGTH_PATTERN)
        .unicode(false)
        .build()
        .ok()
});

/// Match the calc-allowed length grammar:
///
/// ```text
/// -? digit+ ( ( '.' digit+ )? [A-Za-z%$]? )+
/// ```
///
/// i.e. an optional minus, an integer part, then any run of fractional parts
/// and single unit characters. Digits may only follow a `.`.
pub fn is_calc_allowed_length(raw: &str) -> bool {
    CALC_ALLOWED_LENGTH
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(raw))
}
