//! Grid list layout
//!
//! Lays out an ordered list of tiles on a fixed number of columns, the way a
//! material-style grid list does: tiles are packed greedily in input order,
//! then every tile gets `calc()` position and size expressions built from
//! percentages of the container and the gutter length. Rows are sized in one
//! of three modes: a fixed length, a width:height ratio, or a share of the
//! container height.

// Tile and position types
mod types;
pub use types::{Direction, GridTile, Tile, TilePosition, coerce_span};

// Style properties and sinks
mod style;
pub use style::{InlineStyle, StyleProperty, StyleSink};

// Errors
mod error;
pub use error::GridListError;

// Tile placement algorithm
mod placement;
pub use placement::{Occupancy, TileCoordinator, place_tiles};

// Row-height modes and style expressions
mod styler;
pub use styler::{
    FIT_KEYWORD, FitTileStyler, FixedTileStyler, GridMetrics, RatioTileStyler, RowHeightMode,
    TileStyler,
};

// Configuration
mod config;
pub use config::{DEFAULT_GUTTER_SIZE, DEFAULT_ROW_HEIGHT, GridListConfig, TileConfig};

// Layout pass
mod layout;
pub use layout::GridList;

pub use css_values_units::{CalcExpr, CssLength};
