//! Fit mode: rows divide the container's own height evenly.

use super::{GridMetrics, RowStyles};
use crate::style::{StyleProperty, StyleSink};
use crate::types::Tile;

/// Rows sharing the height the container was given from outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FitTileStyler;

impl RowStyles for FitTileStyler {
    fn set_row_styles<T: Tile + StyleSink>(
        &self,
        metrics: &GridMetrics,
        tile: &mut T,
        row_index: usize,
        _percent_width: f64,
        _gutter_width: f64,
    ) {
        let rows = metrics.rows() as f64;
        let percent_height_per_tile = 100.0 / metrics.rowspan() as f64;
        let gutter_height_per_tile = (rows - 1.0) / rows;
        let base_tile_height =
            metrics.base_tile_size(percent_height_per_tile, gutter_height_per_tile);
        let rowspan = tile.rowspan();

        tile.set_style(
            StyleProperty::Top,
            Some(metrics.tile_position(&base_tile_height, row_index)),
        );
        tile.set_style(
            StyleProperty::Height,
            Some(metrics.tile_size(&base_tile_height, rowspan).calc()),
        );
    }

    fn reset<S: StyleSink, T: StyleSink>(&self, _container: &mut S, tiles: &mut [T]) {
        for tile in tiles {
            tile.set_style(StyleProperty::Top, None);
            tile.set_style(StyleProperty::Height, None);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::placement::TileCoordinator;
    use crate::style::{InlineStyle, StyleProperty, StyleSink};
    use crate::styler::TileStyler;
    use crate::types::{Direction, GridTile};
    use css_values_units::CalcExpr;

    /// Rows split 100% of the container.
    ///
    /// # Panics
    /// Panics if placement fails or assertions fail.
    #[test]
    fn test_fit_styles() {
        let mut tiles: Vec<GridTile> = (0..3).map(GridTile::new).collect();
        let mut tracker = TileCoordinator::new();
        assert_eq!(tracker.update(2, &tiles), Ok(()));

        let mut styler = TileStyler::fit();
        assert_eq!(styler.init("2px", &tracker, 2, Direction::Ltr), Ok(()));
        let positions = tracker.positions().to_vec();
        for (tile, position) in tiles.iter_mut().zip(&positions) {
            styler.set_style(tile, position.row, position.col);
        }

        let third = tiles[2].style();
        assert_eq!(
            third.value(StyleProperty::Top).as_deref(),
            Some("calc(((50% - (2px * 0.5)) + 2px) * 1)")
        );
        assert_eq!(
            third.value(StyleProperty::Height).as_deref(),
            Some("calc(((50% - (2px * 0.5)) * 1) + (0 * 2px))")
        );
        assert_eq!(styler.computed_height(), None);
    }

    /// A tall tile on the last row shrinks every row.
    ///
    /// # Panics
    /// Panics if placement fails or assertions fail.
    #[test]
    fn test_fit_uses_total_rowspan() {
        let mut tiles = vec![GridTile::new(0), GridTile::new(1).with_span(1.0, 4.0)];
        let mut tracker = TileCoordinator::new();
        assert_eq!(tracker.update(2, &tiles), Ok(()));
        assert_eq!((tracker.row_count(), tracker.rowspan()), (1, 4));

        let mut styler = TileStyler::fit();
        assert_eq!(styler.init("1px", &tracker, 2, Direction::Ltr), Ok(()));
        styler.set_style(&mut tiles[1], 0, 1);
        assert_eq!(
            tiles[1].style().value(StyleProperty::Height).as_deref(),
            Some("calc(((25% - (1px * 0)) * 4) + (3 * 1px))")
        );
    }

    /// Reset leaves the container untouched.
    #[test]
    fn test_fit_reset() {
        let styler = TileStyler::fit();
        let mut container = InlineStyle::default();
        container.set_style(StyleProperty::Height, Some(CalcExpr::Zero));
        let mut tiles = vec![GridTile::new(0)];
        tiles[0].set_style(StyleProperty::Top, Some(CalcExpr::Zero));

        styler.reset(&mut container, &mut tiles);
        assert_eq!(container.len(), 1);
        assert!(tiles[0].style().is_empty());
    }
}
