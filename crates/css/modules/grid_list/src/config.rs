//! Declarative grid-list configuration.
//!
//! Mirrors the inputs of a grid-list element so a whole list can be described
//! in JSON (or any other serde format):
//!
//! ```json
//! { "cols": 3, "gutterSize": "4px", "rowHeight": "4:3", "direction": "rtl",
//!   "tiles": [{ "colspan": 2 }, { "rowspan": 2 }] }
//! ```

use crate::types::Direction;
use serde::{Deserialize, Serialize};

/// Gutter used when none is configured.
pub const DEFAULT_GUTTER_SIZE: &str = "1px";

/// Row height used when none is configured.
pub const DEFAULT_ROW_HEIGHT: &str = "1:1";

/// Grid-list settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridListConfig {
    /// Number of columns; rounded and clamped to at least 1.
    pub cols: Option<f64>,
    /// Space between tiles; unit-less values are pixels.
    pub gutter_size: String,
    /// `"fit"`, a `"w:h"` ratio, or a length. `None` means a 1:1 ratio.
    pub row_height: Option<String>,
    /// Text direction.
    pub direction: Direction,
    /// Tiles in layout order.
    pub tiles: Vec<TileConfig>,
}

impl Default for GridListConfig {
    fn default() -> Self {
        Self {
            cols: None,
            gutter_size: DEFAULT_GUTTER_SIZE.to_owned(),
            row_height: None,
            direction: Direction::Ltr,
            tiles: Vec::new(),
        }
    }
}

/// Spans of one tile, as given by the author.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileConfig {
    /// Columns covered.
    pub colspan: f64,
    /// Rows covered.
    pub rowspan: f64,
}

impl Default for TileConfig {
    fn default() -> Self {
        Self {
            colspan: 1.0,
            rowspan: 1.0,
        }
    }
}
