//! Style properties written by the tile stylers and the sinks that receive them.

use css_values_units::CalcExpr;
use std::collections::BTreeMap;

/// Style properties the grid list sets on tiles and on its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleProperty {
    Left,
    Right,
    Top,
    Width,
    Height,
    MarginTop,
    PaddingTop,
    PaddingBottom,
}

impl StyleProperty {
    /// DOM (camelCase) property name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Width => "width",
            Self::Height => "height",
            Self::MarginTop => "marginTop",
            Self::PaddingTop => "paddingTop",
            Self::PaddingBottom => "paddingBottom",
        }
    }

    /// CSS (kebab-case) property name.
    pub fn css_name(self) -> &'static str {
        match self {
            Self::MarginTop => "margin-top",
            Self::PaddingTop => "padding-top",
            Self::PaddingBottom => "padding-bottom",
            Self::Left | Self::Right | Self::Top | Self::Width | Self::Height => self.name(),
        }
    }
}

/// Receiver of "set a named style property" instructions.
///
/// `None` clears the property.
pub trait StyleSink {
    /// Set or clear a single property.
    fn set_style(&mut self, property: StyleProperty, value: Option<CalcExpr>);
}

/// Inline style declarations, kept in property order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InlineStyle {
    declarations: BTreeMap<StyleProperty, CalcExpr>,
}

impl InlineStyle {
    /// Current value of `property`, if set.
    pub fn get(&self, property: StyleProperty) -> Option<&CalcExpr> {
        self.declarations.get(&property)
    }

    /// Rendered value of `property`, if set.
    pub fn value(&self, property: StyleProperty) -> Option<String> {
        self.get(property).map(ToString::to_string)
    }

    /// Number of properties set.
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Whether no property is set.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Iterate over the set properties.
    pub fn iter(&self) -> impl Iterator<Item = (StyleProperty, &CalcExpr)> {
        self.declarations
            .iter()
            .map(|(property, value)| (*property, value))
    }

    /// Serialize as a `style` attribute body: `left: 0; width: calc(...)`.
    pub fn to_css_text(&self) -> String {
        self.iter()
            .map(|(property, value)| format!("{}: {value}", property.css_name()))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl StyleSink for InlineStyle {
    fn set_style(&mut self, property: StyleProperty, value: Option<CalcExpr>) {
        match value {
            Some(expr) => {
                self.declarations.insert(property, expr);
            }
            None => {
                self.declarations.remove(&property);
            }
        }
    }
}
