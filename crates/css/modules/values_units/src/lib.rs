//! CSS Values and Units Module Level 3 — value types used by the grid-list layout.
//! Spec: <https://www.w3.org/TR/css-values-3/>

#![forbid(unsafe_code)]

// Per-chapter modules mirroring the spec table of contents.
// Each module documents functions with references to the exact spec section.
pub mod chapter_4_numbers;
pub mod chapter_5_percentages;
pub mod chapter_6_dimensions;
pub mod chapter_8_calc;

// Re-exports for ergonomic access from other crates.
pub use chapter_4_numbers::{Number, Ratio, parse_number, parse_number_prefix, parse_ratio};
pub use chapter_5_percentages::Percentage;
pub use chapter_6_dimensions::{CssLength, has_trailing_unit, is_calc_allowed_length};
pub use chapter_8_calc::CalcExpr;

/// Parse error for Values & Units parsing utilities in this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The next token did not match the expected grammar.
    UnexpectedToken,
    /// A length token is not usable inside a `calc()` expression.
    InvalidLength,
    /// A `<ratio>` did not split into exactly two components.
    InvalidRatio,
}
