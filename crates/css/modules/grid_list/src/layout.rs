//! Grid-list layout pass.
//!
//! A pass always runs from scratch:
//! 1. Place tiles with the [`TileCoordinator`]
//! 2. Snapshot grid metrics into the [`TileStyler`]
//! 3. Write position and size styles onto every tile
//! 4. Size the container when the row-height mode needs it

use crate::config::{DEFAULT_GUTTER_SIZE, DEFAULT_ROW_HEIGHT, GridListConfig};
use crate::error::GridListError;
use crate::placement::TileCoordinator;
use crate::style::{InlineStyle, StyleSink};
use crate::styler::TileStyler;
use crate::types::{Direction, GridTile, TilePosition, coerce_span};

/// A list of tiles laid out on a fixed number of columns.
#[derive(Debug, Clone)]
pub struct GridList<NodeId = usize> {
    cols: Option<usize>,
    gutter_size: String,
    row_height: Option<String>,
    direction: Direction,
    tiles: Vec<GridTile<NodeId>>,
    coordinator: TileCoordinator,
    styler: Option<TileStyler>,
    style: InlineStyle,
}

impl<NodeId> Default for GridList<NodeId> {
    fn default() -> Self {
        Self {
            cols: None,
            gutter_size: DEFAULT_GUTTER_SIZE.to_owned(),
            row_height: None,
            direction: Direction::Ltr,
            tiles: Vec::new(),
            coordinator: TileCoordinator::new(),
            styler: None,
            style: InlineStyle::default(),
        }
    }
}

impl<NodeId> GridList<NodeId> {
    /// Create an empty grid list with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of columns, once set.
    pub fn cols(&self) -> Option<usize> {
        self.cols
    }

    /// Set the column count from user input, rounded and at least 1.
    pub fn set_cols(&mut self, value: f64) {
        self.cols = Some(coerce_span(value));
    }

    /// Gutter as configured (not normalized).
    pub fn gutter_size(&self) -> &str {
        &self.gutter_size
    }

    /// Set the space between tiles.
    pub fn set_gutter_size(&mut self, value: &str) {
        value.clone_into(&mut self.gutter_size);
    }

    /// Row height as configured.
    pub fn row_height(&self) -> Option<&str> {
        self.row_height.as_deref()
    }

    /// Set the row height and switch the styling mode.
    ///
    /// Styles written by the previous mode are cleared from the container
    /// and the tiles. Setting the current value again is a no-op.
    ///
    /// # Errors
    /// Returns `GridListError::InvalidRatio` for a malformed ratio; the
    /// previous setting is kept.
    pub fn set_row_height(&mut self, value: &str) -> Result<(), GridListError> {
        if self.row_height.as_deref() == Some(value) {
            return Ok(());
        }
        let styler = TileStyler::for_row_height(value)?;
        self.replace_styler(styler);
        self.row_height = Some(value.to_owned());
        Ok(())
    }

    fn replace_styler(&mut self, styler: TileStyler) {
        if let Some(previous) = self.styler.take() {
            previous.reset(&mut self.style, &mut self.tiles);
        }
        self.styler = Some(styler);
    }

    /// Text direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Set the text direction.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Append a tile.
    pub fn push_tile(&mut self, tile: GridTile<NodeId>) {
        self.tiles.push(tile);
    }

    /// Tiles in layout order.
    pub fn tiles(&self) -> &[GridTile<NodeId>] {
        &self.tiles
    }

    /// Mutable access to the tiles, e.g. to change spans between passes.
    pub fn tiles_mut(&mut self) -> &mut Vec<GridTile<NodeId>> {
        &mut self.tiles
    }

    /// Container styles written by the last pass.
    pub fn style(&self) -> &InlineStyle {
        &self.style
    }

    /// Tile positions from the last pass.
    pub fn positions(&self) -> &[TilePosition] {
        self.coordinator.positions()
    }

    /// Coordinator state from the last pass.
    pub fn coordinator(&self) -> &TileCoordinator {
        &self.coordinator
    }

    /// Current styler, if a pass ran or a row height was set.
    pub fn styler(&self) -> Option<&TileStyler> {
        self.styler.as_ref()
    }

    /// Run a full layout pass.
    ///
    /// # Errors
    /// Returns `GridListError::MissingColumns` when no column count is set,
    /// `GridListError::OversizedTile` when a tile is wider than the grid, and
    /// `GridListError::InvalidFixedRowHeight` for a malformed fixed height.
    pub fn layout_tiles(&mut self) -> Result<(), GridListError> {
        let Some(cols) = self.cols else {
            return Err(GridListError::MissingColumns);
        };
        if self.styler.is_none() {
            self.styler = Some(TileStyler::for_row_height(DEFAULT_ROW_HEIGHT)?);
        }

        self.coordinator.update(cols, &self.tiles)?;

        let Some(styler) = self.styler.as_mut() else {
            return Ok(());
        };
        styler.init(&self.gutter_size, &self.coordinator, cols, self.direction)?;

        for (tile, position) in self.tiles.iter_mut().zip(self.coordinator.positions()) {
            styler.set_style(tile, position.row, position.col);
        }

        if let Some((property, value)) = styler.computed_height() {
            self.style.set_style(property, Some(value));
        }

        tracing::debug!(
            "Grid list laid out {} tiles: {} cols, {} rows, container style {:?}",
            self.tiles.len(),
            cols,
            self.coordinator.row_count(),
            self.style.to_css_text()
        );
        Ok(())
    }
}

impl GridList<usize> {
    /// Build a grid list from a configuration; tile node ids are their
    /// indices in `config.tiles`.
    ///
    /// # Errors
    /// Returns `GridListError::InvalidRatio` for a malformed ratio row height.
    pub fn from_config(config: &GridListConfig) -> Result<Self, GridListError> {
        let mut list = Self::new();
        if let Some(cols) = config.cols {
            list.set_cols(cols);
        }
        list.set_gutter_size(&config.gutter_size);
        list.set_direction(config.direction);
        if let Some(row_height) = &config.row_height {
            list.set_row_height(row_height)?;
        }
        for (index, tile) in config.tiles.iter().enumerate() {
            list.push_tile(GridTile::new(index).with_span(tile.colspan, tile.rowspan));
        }
        Ok(list)
    }
}
