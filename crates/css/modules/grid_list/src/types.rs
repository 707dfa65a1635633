//! Tile and position type definitions.

use crate::style::{InlineStyle, StyleProperty, StyleSink};
use css_values_units::CalcExpr;
use serde::{Deserialize, Serialize};

/// Anything the coordinator can place: a rectangle `colspan` columns wide and
/// `rowspan` rows tall. Both spans are at least 1.
pub trait Tile {
    /// Number of columns covered.
    fn colspan(&self) -> usize;
    /// Number of rows covered.
    fn rowspan(&self) -> usize;
}

/// Cell a tile's top-left corner was placed in (0-indexed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TilePosition {
    /// Row index
    pub row: usize,
    /// Column index
    pub col: usize,
}

impl TilePosition {
    /// Create a new tile position.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Inline text direction of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Left to right
    #[default]
    Ltr,
    /// Right to left
    Rtl,
}

impl Direction {
    /// Property that carries the column offset: `left` for ltr, `right` for rtl.
    pub fn leading_edge(self) -> StyleProperty {
        match self {
            Self::Ltr => StyleProperty::Left,
            Self::Rtl => StyleProperty::Right,
        }
    }
}

/// Round a user-supplied span to a whole number of tracks, never below 1.
pub fn coerce_span(value: f64) -> usize {
    if value.is_finite() && value >= 1.0 {
        value.round() as usize
    } else {
        1
    }
}

/// A grid tile with its span and the inline style the stylers write into.
#[derive(Debug, Clone)]
pub struct GridTile<NodeId = usize> {
    /// Node identifier (generic to support different node ID types)
    pub node_id: NodeId,
    colspan: usize,
    rowspan: usize,
    style: InlineStyle,
}

impl<NodeId> GridTile<NodeId> {
    /// Create a 1x1 tile with the given node ID.
    pub fn new(node_id: NodeId) -> Self {
        Self {
            node_id,
            colspan: 1,
            rowspan: 1,
            style: InlineStyle::default(),
        }
    }

    /// Builder-style span setter; values are coerced with [`coerce_span`].
    #[must_use]
    pub fn with_span(mut self, colspan: f64, rowspan: f64) -> Self {
        self.set_colspan(colspan);
        self.set_rowspan(rowspan);
        self
    }

    /// Set the column span from user input.
    pub fn set_colspan(&mut self, value: f64) {
        self.colspan = coerce_span(value);
    }

    /// Set the row span from user input.
    pub fn set_rowspan(&mut self, value: f64) {
        self.rowspan = coerce_span(value);
    }

    /// Styles applied by the last layout pass.
    pub fn style(&self) -> &InlineStyle {
        &self.style
    }
}

impl<NodeId> Tile for GridTile<NodeId> {
    fn colspan(&self) -> usize {
        self.colspan
    }

    fn rowspan(&self) -> usize {
        self.rowspan
    }
}

impl<NodeId> StyleSink for GridTile<NodeId> {
    fn set_style(&mut self, property: StyleProperty, value: Option<CalcExpr>) {
        self.style.set_style(property, value);
    }
}
