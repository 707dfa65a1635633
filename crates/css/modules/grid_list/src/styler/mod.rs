//! Tile stylers.
//!
//! A styler turns the coordinator's `(row, col)` positions into position and
//! size expressions for each tile, and an optional sizing expression for the
//! container. Nothing here knows pixel sizes: everything is expressed as
//! percentages of the container plus gutter terms and left to `calc()`.
//!
//! Horizontal styles are the same in every mode. Vertical styles depend on the
//! row-height mode:
//!
//! ```text
//! rowHeight = "fit"     -> Fit    rows split the container's own height
//! rowHeight = "w:h"     -> Ratio  rows keep an aspect ratio to the column width
//! rowHeight = <length>  -> Fixed  rows have a literal height
//! ```

mod fit;
mod fixed;
mod ratio;

pub use fit::FitTileStyler;
pub use fixed::FixedTileStyler;
pub use ratio::RatioTileStyler;

use crate::error::GridListError;
use crate::placement::TileCoordinator;
use crate::style::{StyleProperty, StyleSink};
use crate::types::{Direction, Tile};
use css_values_units::{CalcExpr, CssLength};

/// Row height keyword selecting [`FitTileStyler`].
pub const FIT_KEYWORD: &str = "fit";

/// Grid-wide numbers a styler snapshots in `init`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridMetrics {
    gutter_size: CssLength,
    rows: usize,
    rowspan: usize,
    cols: usize,
    direction: Direction,
}

impl Default for GridMetrics {
    fn default() -> Self {
        Self {
            gutter_size: CssLength::default(),
            rows: 1,
            rowspan: 1,
            cols: 1,
            direction: Direction::Ltr,
        }
    }
}

impl GridMetrics {
    /// Normalized gutter length.
    pub fn gutter_size(&self) -> &CssLength {
        &self.gutter_size
    }

    /// Rows touched by the coordinator.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Rows spanned, including tiles hanging past the last row.
    pub fn rowspan(&self) -> usize {
        self.rowspan
    }

    /// Column count.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Text direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Width of one column as a percentage of the container.
    pub fn percent_width_per_tile(&self) -> f64 {
        100.0 / self.cols as f64
    }

    /// Share of the total horizontal gutter each column gives up.
    pub fn gutter_fraction_per_tile(&self) -> f64 {
        self.cols.saturating_sub(1) as f64 / self.cols as f64
    }

    fn gutter(&self) -> CalcExpr {
        CalcExpr::length(self.gutter_size.clone())
    }

    /// `(<size_percent>% - (<gutter> * <gutter_fraction>))`: one cell after
    /// taking out its share of the gutters.
    pub fn base_tile_size(&self, size_percent: f64, gutter_fraction: f64) -> CalcExpr {
        CalcExpr::difference(
            CalcExpr::percentage(size_percent),
            CalcExpr::product(self.gutter(), CalcExpr::number(gutter_fraction)).parenthesized(),
        )
        .parenthesized()
    }

    /// `0` for the first track, else `calc((<base> + <gutter>) * <offset>)`.
    pub fn tile_position(&self, base_size: &CalcExpr, offset: usize) -> CalcExpr {
        if offset == 0 {
            return CalcExpr::Zero;
        }
        CalcExpr::product(
            CalcExpr::sum(base_size.clone(), self.gutter()).parenthesized(),
            CalcExpr::count(offset),
        )
        .calc()
    }

    /// `(<base> * <span>) + (<span - 1> * <gutter>)`, not wrapped in `calc()`.
    pub fn tile_size(&self, base_size: &CalcExpr, span: usize) -> CalcExpr {
        CalcExpr::sum(
            CalcExpr::product(base_size.clone(), CalcExpr::count(span)).parenthesized(),
            CalcExpr::product(CalcExpr::count(span.saturating_sub(1)), self.gutter())
                .parenthesized(),
        )
    }

    /// `<gutter> * (<rowspan> - 1)`
    pub fn gutter_span(&self) -> CalcExpr {
        CalcExpr::product(
            self.gutter(),
            CalcExpr::difference(CalcExpr::count(self.rowspan), CalcExpr::count(1))
                .parenthesized(),
        )
    }

    /// `<rowspan> * <tile_size(tile_height, 1)>`
    pub fn tile_span(&self, tile_height: &CalcExpr) -> CalcExpr {
        CalcExpr::product(
            CalcExpr::count(self.rowspan),
            self.tile_size(tile_height, 1),
        )
    }
}

/// Vertical policy of one row-height mode.
trait RowStyles {
    /// Validate mode-specific settings once the grid metrics are known.
    fn init(&mut self, _metrics: &GridMetrics) -> Result<(), GridListError> {
        Ok(())
    }

    fn set_row_styles<T: Tile + StyleSink>(
        &self,
        metrics: &GridMetrics,
        tile: &mut T,
        row_index: usize,
        percent_width: f64,
        gutter_width: f64,
    );

    /// Container property and value needed to size the list, if any.
    fn computed_height(&self, _metrics: &GridMetrics) -> Option<(StyleProperty, CalcExpr)> {
        None
    }

    /// Clear every property this mode writes.
    fn reset<S: StyleSink, T: StyleSink>(&self, container: &mut S, tiles: &mut [T]);
}

/// Row-height mode of a [`TileStyler`].
#[derive(Debug, Clone, PartialEq)]
pub enum RowHeightMode {
    /// Literal row height
    Fixed(FixedTileStyler),
    /// Row height derived from the column width
    Ratio(RatioTileStyler),
    /// Rows share the container height
    Fit(FitTileStyler),
}

/// Computes tile and container styles for one row-height mode.
#[derive(Debug, Clone, PartialEq)]
pub struct TileStyler {
    metrics: GridMetrics,
    mode: RowHeightMode,
}

impl TileStyler {
    fn with_mode(mode: RowHeightMode) -> Self {
        Self {
            metrics: GridMetrics::default(),
            mode,
        }
    }

    /// Fixed mode with a literal row height (`"100px"`, `"10"`).
    pub fn fixed(row_height: &str) -> Self {
        Self::with_mode(RowHeightMode::Fixed(FixedTileStyler::new(row_height)))
    }

    /// Ratio mode from a `"width:height"` string.
    ///
    /// # Errors
    /// Returns `GridListError::InvalidRatio` for a malformed ratio.
    pub fn ratio(value: &str) -> Result<Self, GridListError> {
        RatioTileStyler::new(value).map(|styler| Self::with_mode(RowHeightMode::Ratio(styler)))
    }

    /// Fit mode.
    pub fn fit() -> Self {
        Self::with_mode(RowHeightMode::Fit(FitTileStyler))
    }

    /// Pick the mode for a `rowHeight` setting: `"fit"`, a ratio containing
    /// `:`, or otherwise a fixed length.
    ///
    /// # Errors
    /// Returns `GridListError::InvalidRatio` for a malformed ratio.
    pub fn for_row_height(row_height: &str) -> Result<Self, GridListError> {
        if row_height == FIT_KEYWORD {
            Ok(Self::fit())
        } else if row_height.contains(':') {
            Self::ratio(row_height)
        } else {
            Ok(Self::fixed(row_height))
        }
    }

    /// Row-height mode.
    pub fn mode(&self) -> &RowHeightMode {
        &self.mode
    }

    /// Metrics from the last `init`.
    pub fn metrics(&self) -> &GridMetrics {
        &self.metrics
    }

    /// Snapshot the grid metrics for the coming `set_style` calls.
    ///
    /// # Errors
    /// Returns `GridListError::MissingColumns` for a zero column count and
    /// `GridListError::InvalidFixedRowHeight` when a fixed row height is not a
    /// usable length.
    pub fn init(
        &mut self,
        gutter_size: &str,
        tracker: &TileCoordinator,
        num_columns: usize,
        direction: Direction,
    ) -> Result<(), GridListError> {
        if num_columns == 0 {
            return Err(GridListError::MissingColumns);
        }
        self.metrics = GridMetrics {
            gutter_size: CssLength::normalize(gutter_size),
            rows: tracker.row_count(),
            rowspan: tracker.rowspan(),
            cols: num_columns,
            direction,
        };
        match &mut self.mode {
            RowHeightMode::Fixed(styler) => styler.init(&self.metrics)?,
            RowHeightMode::Ratio(styler) => styler.init(&self.metrics)?,
            RowHeightMode::Fit(styler) => styler.init(&self.metrics)?,
        }
        tracing::debug!(
            "Tile styler init: {:?}, gutter {}, {} cols, {} rows, rowspan {}",
            self.mode,
            self.metrics.gutter_size,
            self.metrics.cols,
            self.metrics.rows,
            self.metrics.rowspan
        );
        Ok(())
    }

    /// See [`GridMetrics::base_tile_size`].
    pub fn base_tile_size(&self, size_percent: f64, gutter_fraction: f64) -> CalcExpr {
        self.metrics.base_tile_size(size_percent, gutter_fraction)
    }

    /// See [`GridMetrics::tile_position`].
    pub fn tile_position(&self, base_size: &CalcExpr, offset: usize) -> CalcExpr {
        self.metrics.tile_position(base_size, offset)
    }

    /// See [`GridMetrics::tile_size`].
    pub fn tile_size(&self, base_size: &CalcExpr, span: usize) -> CalcExpr {
        self.metrics.tile_size(base_size, span)
    }

    /// See [`GridMetrics::gutter_span`].
    pub fn gutter_span(&self) -> CalcExpr {
        self.metrics.gutter_span()
    }

    /// See [`GridMetrics::tile_span`].
    pub fn tile_span(&self, tile_height: &CalcExpr) -> CalcExpr {
        self.metrics.tile_span(tile_height)
    }

    /// Write position and size of a tile placed at `(row_index, col_index)`.
    pub fn set_style<T: Tile + StyleSink>(&self, tile: &mut T, row_index: usize, col_index: usize) {
        let percent_width_per_tile = self.metrics.percent_width_per_tile();
        let gutter_width_fraction_per_tile = self.metrics.gutter_fraction_per_tile();

        self.set_col_styles(
            tile,
            col_index,
            percent_width_per_tile,
            gutter_width_fraction_per_tile,
        );
        self.set_row_styles(
            tile,
            row_index,
            percent_width_per_tile,
            gutter_width_fraction_per_tile,
        );
    }

    /// Horizontal offset (on the leading edge) and width.
    pub fn set_col_styles<T: Tile + StyleSink>(
        &self,
        tile: &mut T,
        col_index: usize,
        percent_width: f64,
        gutter_width: f64,
    ) {
        let base_tile_width = self.base_tile_size(percent_width, gutter_width);
        let side = self.metrics.direction.leading_edge();
        let colspan = tile.colspan();

        tile.set_style(side, Some(self.tile_position(&base_tile_width, col_index)));
        tile.set_style(
            StyleProperty::Width,
            Some(self.tile_size(&base_tile_width, colspan).calc()),
        );
    }

    /// Vertical offset and height, per row-height mode.
    pub fn set_row_styles<T: Tile + StyleSink>(
        &self,
        tile: &mut T,
        row_index: usize,
        percent_width: f64,
        gutter_width: f64,
    ) {
        let metrics = &self.metrics;
        match &self.mode {
            RowHeightMode::Fixed(styler) => {
                styler.set_row_styles(metrics, tile, row_index, percent_width, gutter_width);
            }
            RowHeightMode::Ratio(styler) => {
                styler.set_row_styles(metrics, tile, row_index, percent_width, gutter_width);
            }
            RowHeightMode::Fit(styler) => {
                styler.set_row_styles(metrics, tile, row_index, percent_width, gutter_width);
            }
        }
    }

    /// Container property and value needed to size the list. `None` in fit
    /// mode, where the container brings its own height.
    pub fn computed_height(&self) -> Option<(StyleProperty, CalcExpr)> {
        match &self.mode {
            RowHeightMode::Fixed(styler) => styler.computed_height(&self.metrics),
            RowHeightMode::Ratio(styler) => styler.computed_height(&self.metrics),
            RowHeightMode::Fit(styler) => styler.computed_height(&self.metrics),
        }
    }

    /// Clear the vertical styles this mode applied, before switching modes.
    pub fn reset<S: StyleSink, T: StyleSink>(&self, container: &mut S, tiles: &mut [T]) {
        match &self.mode {
            RowHeightMode::Fixed(styler) => styler.reset(container, tiles),
            RowHeightMode::Ratio(styler) => styler.reset(container, tiles),
            RowHeightMode::Fit(styler) => styler.reset(container, tiles),
        }
    }
}
