//! Ratio mode: row height keeps a fixed aspect ratio to the column width.
//!
//! Vertical styles go through `margin-top`/`padding-top` because percentage
//! margins and paddings resolve against the container width.

use super::{GridMetrics, RowStyles};
use crate::error::GridListError;
use crate::style::{StyleProperty, StyleSink};
use crate::types::Tile;
use css_values_units::{CalcExpr, parse_ratio};

/// Rows whose height is the column width divided by a `width:height` ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioTileStyler {
    row_height_ratio: f64,
}

impl RatioTileStyler {
    /// Parse a `"width:height"` ratio such as `"4:3"`.
    ///
    /// # Errors
    /// Returns `GridListError::InvalidRatio` unless `value` splits on `:` into
    /// exactly two parts. Parts without a leading number give a NaN ratio.
    pub fn new(value: &str) -> Result<Self, GridListError> {
        match parse_ratio(value) {
            Ok(ratio) => Ok(Self {
                row_height_ratio: ratio.value(),
            }),
            Err(_) => {
                log::warn!("Rejected row height ratio {value:?}");
                Err(GridListError::InvalidRatio {
                    value: value.to_owned(),
                })
            }
        }
    }

    /// Width divided by height.
    pub fn row_height_ratio(&self) -> f64 {
        self.row_height_ratio
    }

    fn base_tile_height(
        &self,
        metrics: &GridMetrics,
        percent_width: f64,
        gutter_width: f64,
    ) -> CalcExpr {
        let percent_height_per_tile = percent_width / self.row_height_ratio;
        metrics.base_tile_size(percent_height_per_tile, gutter_width)
    }
}

impl RowStyles for RatioTileStyler {
    fn set_row_styles<T: Tile + StyleSink>(
        &self,
        metrics: &GridMetrics,
        tile: &mut T,
        row_index: usize,
        percent_width: f64,
        gutter_width: f64,
    ) {
        let base_tile_height = self.base_tile_height(metrics, percent_width, gutter_width);
        let rowspan = tile.rowspan();
        tile.set_style(
            StyleProperty::MarginTop,
            Some(metrics.tile_position(&base_tile_height, row_index)),
        );
        tile.set_style(
            StyleProperty::PaddingTop,
            Some(metrics.tile_size(&base_tile_height, rowspan).calc()),
        );
    }

    fn computed_height(&self, metrics: &GridMetrics) -> Option<(StyleProperty, CalcExpr)> {
        let base_tile_height = self.base_tile_height(
            metrics,
            metrics.percent_width_per_tile(),
            metrics.gutter_fraction_per_tile(),
        );
        Some((
            StyleProperty::PaddingBottom,
            CalcExpr::sum(metrics.tile_span(&base_tile_height), metrics.gutter_span()).calc(),
        ))
    }

    fn reset<S: StyleSink, T: StyleSink>(&self, container: &mut S, tiles: &mut [T]) {
        container.set_style(StyleProperty::PaddingBottom, None);
        for tile in tiles {
            tile.set_style(StyleProperty::MarginTop, None);
            tile.set_style(StyleProperty::PaddingTop, None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::TileCoordinator;
    use crate::style::InlineStyle;
    use crate::styler::TileStyler;
    use crate::types::{Direction, GridTile};

    /// A two-part ratio divides width by height.
    #[test]
    fn test_parse_ratio() {
        let ratio = RatioTileStyler::new("4:3").map(|styler| styler.row_height_ratio());
        assert_eq!(ratio, Ok(4.0 / 3.0));
    }

    /// Anything but two parts is rejected with the input in the message.
    #[test]
    fn test_invalid_ratio() {
        for value in ["4", "4:3:2", "1:2:"] {
            let result = RatioTileStyler::new(value);
            assert_eq!(
                result,
                Err(GridListError::InvalidRatio {
                    value: value.to_owned()
                })
            );
        }
        let message = RatioTileStyler::new("4:3:2")
            .err()
            .map(|error| error.to_string())
            .unwrap_or_default();
        assert!(message.contains("\"4:3:2\""));
    }

    /// Non-numeric parts still build a styler; the NaN ratio reaches the output.
    ///
    /// # Panics
    /// Panics if placement fails or assertions fail.
    #[test]
    fn test_non_numeric_ratio_is_nan() {
        for value in ["x:y", "4:", ":"] {
            let ratio = RatioTileStyler::new(value).map(|styler| styler.row_height_ratio());
            assert!(ratio.is_ok_and(f64::is_nan), "{value} should parse to NaN");
        }

        let mut tiles = vec![GridTile::new(0), GridTile::new(1)];
        let mut tracker = TileCoordinator::new();
        assert_eq!(tracker.update(2, &tiles), Ok(()));
        let Ok(mut styler) = TileStyler::ratio("x:y") else {
            return;
        };
        assert_eq!(styler.init("2px", &tracker, 2, Direction::Ltr), Ok(()));
        styler.set_style(&mut tiles[1], 0, 1);
        assert_eq!(
            tiles[1].style().value(StyleProperty::PaddingTop).as_deref(),
            Some("calc(((NaN% - (2px * 0.5)) * 1) + (0 * 2px))")
        );
    }

    /// Tiles are offset with margins and sized with padding.
    ///
    /// # Panics
    /// Panics if placement fails or assertions fail.
    #[test]
    fn test_ratio_styles() {
        let mut tiles: Vec<GridTile> = (0..3).map(GridTile::new).collect();
        let mut tracker = TileCoordinator::new();
        assert_eq!(tracker.update(2, &tiles), Ok(()));

        let Ok(mut styler) = TileStyler::ratio("2:1") else {
            return;
        };
        assert_eq!(styler.init("2px", &tracker, 2, Direction::Ltr), Ok(()));
        let positions = tracker.positions().to_vec();
        for (tile, position) in tiles.iter_mut().zip(&positions) {
            styler.set_style(tile, position.row, position.col);
        }

        let third = tiles[2].style();
        assert_eq!(
            third.value(StyleProperty::MarginTop).as_deref(),
            Some("calc(((25% - (2px * 0.5)) + 2px) * 1)")
        );
        assert_eq!(
            third.value(StyleProperty::PaddingTop).as_deref(),
            Some("calc(((25% - (2px * 0.5)) * 1) + (0 * 2px))")
        );
        assert_eq!(third.get(StyleProperty::Top), None);

        let computed = styler
            .computed_height()
            .map(|(property, value)| (property.name(), value.to_string()));
        assert_eq!(
            computed,
            Some((
                "paddingBottom",
                "calc(2 * ((25% - (2px * 0.5)) * 1) + (0 * 2px) + 2px * (2 - 1))".to_owned()
            ))
        );

        let mut container = InlineStyle::default();
        container.set_style(StyleProperty::PaddingBottom, Some(CalcExpr::Zero));
        styler.reset(&mut container, &mut tiles);
        assert!(container.is_empty());
        assert_eq!(tiles[2].style().get(StyleProperty::MarginTop), None);
        assert_eq!(tiles[2].style().get(StyleProperty::PaddingTop), None);
    }
}
