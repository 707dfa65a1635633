//! Placement invariants over random tile lists.

use css_grid_list::{GridTile, Tile, TileCoordinator};
use proptest::prelude::*;

/// Column count plus tiles that all fit in it.
fn arb_grid() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1usize..=8).prop_flat_map(|cols| {
        let tile = (1..=cols, 1usize..=4);
        (Just(cols), prop::collection::vec(tile, 0..40))
    })
}

fn build_tiles(spans: &[(usize, usize)]) -> Vec<GridTile> {
    spans
        .iter()
        .enumerate()
        .map(|(index, &(colspan, rowspan))| {
            GridTile::new(index).with_span(colspan as f64, rowspan as f64)
        })
        .collect()
}

proptest! {
    /// No two placed tiles cover the same cell, and none crosses the last column.
    #[test]
    fn prop_no_overlap_within_bounds((cols, spans) in arb_grid()) {
        let tiles = build_tiles(&spans);
        let mut coordinator = TileCoordinator::new();
        prop_assert!(coordinator.update(cols, &tiles).is_ok());

        let positions = coordinator.positions();
        prop_assert_eq!(positions.len(), tiles.len());

        for (tile, position) in tiles.iter().zip(positions) {
            prop_assert!(position.col + tile.colspan() <= cols);
        }

        for (first_index, (first, first_pos)) in tiles.iter().zip(positions).enumerate() {
            for (second, second_pos) in tiles.iter().zip(positions).skip(first_index + 1) {
                let cols_overlap = first_pos.col < second_pos.col + second.colspan()
                    && second_pos.col < first_pos.col + first.colspan();
                let rows_overlap = first_pos.row < second_pos.row + second.rowspan()
                    && second_pos.row < first_pos.row + first.rowspan();
                prop_assert!(
                    !(cols_overlap && rows_overlap),
                    "tiles overlap: {:?} and {:?}",
                    first_pos,
                    second_pos
                );
            }
        }
    }

    /// Placement never moves backwards: later tiles start at or after earlier ones.
    #[test]
    fn prop_reading_order((cols, spans) in arb_grid()) {
        let tiles = build_tiles(&spans);
        let mut coordinator = TileCoordinator::new();
        prop_assert!(coordinator.update(cols, &tiles).is_ok());

        for pair in coordinator.positions().windows(2) {
            prop_assert!((pair[0].row, pair[0].col) < (pair[1].row, pair[1].col));
        }
    }

    /// Row count is one past the last row used, and rowspan covers every tile.
    #[test]
    fn prop_row_counts((cols, spans) in arb_grid()) {
        let tiles = build_tiles(&spans);
        let mut coordinator = TileCoordinator::new();
        prop_assert!(coordinator.update(cols, &tiles).is_ok());

        let positions = coordinator.positions();
        let last_row = positions.iter().map(|position| position.row).max().unwrap_or(0);
        prop_assert_eq!(coordinator.row_count(), last_row + 1);

        let bottom = tiles
            .iter()
            .zip(positions)
            .map(|(tile, position)| position.row + tile.rowspan())
            .max()
            .unwrap_or(1);
        prop_assert_eq!(coordinator.rowspan(), bottom.max(1));
    }

    /// Identical input gives identical output, also on a reused coordinator.
    #[test]
    fn prop_deterministic((cols, spans) in arb_grid()) {
        let tiles = build_tiles(&spans);
        let mut first = TileCoordinator::new();
        let mut second = TileCoordinator::new();
        prop_assert!(first.update(cols, &tiles).is_ok());
        prop_assert!(second.update(cols, &tiles).is_ok());
        prop_assert_eq!(first.positions(), second.positions());

        let before = (first.positions().to_vec(), first.row_count(), first.rowspan());
        prop_assert!(first.update(cols, &tiles).is_ok());
        prop_assert_eq!(before, (first.positions().to_vec(), first.row_count(), first.rowspan()));
    }
}
