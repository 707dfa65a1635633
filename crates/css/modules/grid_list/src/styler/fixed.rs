//! Fixed mode: every row has the same literal height.

use super::{GridMetrics, RowStyles};
use crate::error::GridListError;
use crate::style::{StyleProperty, StyleSink};
use crate::types::Tile;
use css_values_units::{CalcExpr, CssLength};

/// Rows of a literal height such as `"100px"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedTileStyler {
    fixed_row_height: CssLength,
}

impl FixedTileStyler {
    /// Store the row height, adding `px` when it has no unit.
    pub fn new(row_height: &str) -> Self {
        Self {
            fixed_row_height: CssLength::normalize(row_height),
        }
    }

    /// Normalized row height.
    pub fn row_height(&self) -> &CssLength {
        &self.fixed_row_height
    }

    fn height(&self) -> CalcExpr {
        CalcExpr::length(self.fixed_row_height.clone())
    }
}

impl RowStyles for FixedTileStyler {
    fn init(&mut self, _metrics: &GridMetrics) -> Result<(), GridListError> {
        match CssLength::parse_calc_allowed(self.fixed_row_height.as_str()) {
            Ok(length) => {
                self.fixed_row_height = length;
                Ok(())
            }
            Err(_) => {
                log::warn!("Rejected fixed row height {:?}", self.fixed_row_height.as_str());
                Err(GridListError::InvalidFixedRowHeight {
                    value: self.fixed_row_height.to_string(),
                })
            }
        }
    }

    fn set_row_styles<T: Tile + StyleSink>(
        &self,
        metrics: &GridMetrics,
        tile: &mut T,
        row_index: usize,
        _percent_width: f64,
        _gutter_width: f64,
    ) {
        let height = self.height();
        let rowspan = tile.rowspan();
        tile.set_style(
            StyleProperty::Top,
            Some(metrics.tile_position(&height, row_index)),
        );
        tile.set_style(
            StyleProperty::Height,
            Some(metrics.tile_size(&height, rowspan).calc()),
        );
    }

    fn computed_height(&self, metrics: &GridMetrics) -> Option<(StyleProperty, CalcExpr)> {
        let height = self.height();
        Some((
            StyleProperty::Height,
            CalcExpr::sum(metrics.tile_span(&height), metrics.gutter_span()).calc(),
        ))
    }

    fn reset<S: StyleSink, T: StyleSink>(&self, container: &mut S, tiles: &mut [T]) {
        container.set_style(StyleProperty::Height, None);
        for tile in tiles {
            tile.set_style(StyleProperty::Top, None);
            tile.set_style(StyleProperty::Height, None);
        }
    }
}
