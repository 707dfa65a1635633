//! Errors raised by a grid-list layout pass.
//!
//! All of them are configuration errors: they abort the pass and are returned
//! to the caller, there is no degraded layout.

use thiserror::Error;

/// Errors raised while configuring or laying out a grid list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GridListError {
    /// A tile is wider than the grid.
    #[error("grid-list: tile with colspan {colspan} is wider than grid with cols=\"{columns}\"")]
    OversizedTile { colspan: usize, columns: usize },
    /// A fixed row height is not a usable length.
    #[error("grid-list: invalid value \"{value}\" set as rowHeight")]
    InvalidFixedRowHeight { value: String },
    /// A ratio row height does not have exactly two numeric parts.
    #[error("grid-list: invalid ratio given for row-height: \"{value}\"")]
    InvalidRatio { value: String },
    /// No column count was configured.
    #[error("grid-list: must pass in number of columns")]
    MissingColumns,
}
