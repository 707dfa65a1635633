//! Criterion benchmarks for a full grid-list layout pass.
//!
//! Measures tile placement on its own and placement plus styling for each
//! row-height mode, over a grid of mixed tile sizes.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use css_grid_list::{GridList, GridTile, TileCoordinator};
use std::hint::black_box;

/// Build `count` tiles cycling through a few span shapes.
fn mixed_tiles(count: usize) -> Vec<GridTile> {
    const SHAPES: [(f64, f64); 5] = [(1.0, 1.0), (2.0, 1.0), (1.0, 2.0), (3.0, 2.0), (1.0, 1.0)];
    (0..count)
        .map(|index| {
            let (colspan, rowspan) = SHAPES[index % SHAPES.len()];
            GridTile::new(index).with_span(colspan, rowspan)
        })
        .collect()
}

fn bench_placement(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("tile_placement");
    for count in [16, 64, 256] {
        let tiles = mixed_tiles(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &tiles, |bencher, tiles| {
            let mut coordinator = TileCoordinator::new();
            bencher.iter(|| {
                let placed = coordinator.update(6, black_box(tiles));
                black_box((placed, coordinator.rowspan()));
            });
        });
    }
    group.finish();
}

fn bench_layout_modes(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("grid_list_layout");
    for row_height in ["100px", "4:3", "fit"] {
        let mut grid = GridList::new();
        grid.set_cols(6.0);
        grid.set_gutter_size("4px");
        if grid.set_row_height(row_height).is_err() {
            continue;
        }
        for tile in mixed_tiles(64) {
            grid.push_tile(tile);
        }
        group.bench_function(BenchmarkId::from_parameter(row_height), |bencher| {
            bencher.iter(|| {
                let laid_out = grid.layout_tiles();
                black_box((laid_out, grid.style().len()));
            });
        });
    }
    group.finish();
}

criterion_group!(layout_benches, bench_placement, bench_layout_modes);
criterion_main!(layout_benches);
