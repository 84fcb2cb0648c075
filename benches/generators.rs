use criterion::{criterion_group, criterion_main, Criterion};

use mazecarve::generators::{binary_tree, growing_tree, SelectionPolicy};
use mazecarve::grids::medium_rect_grid;
use mazecarve::renderers::{wall_segments, RenderOptions};
use mazecarve::units::{ColumnsCount, RowsCount};

fn bench_binary_tree_32(c: &mut Criterion) {
    let mut grid = medium_rect_grid(RowsCount(32), ColumnsCount(32)).expect("grid");
    let mut rng = rand::weak_rng();
    c.bench_function("binary_tree_32x32_u16", move |b| {
        b.iter(|| binary_tree(&mut grid, &mut rng).expect("carve"))
    });
}

fn bench_growing_tree_newest_32(c: &mut Criterion) {
    let mut grid = medium_rect_grid(RowsCount(32), ColumnsCount(32)).expect("grid");
    let mut rng = rand::weak_rng();
    c.bench_function("growing_tree_newest_32x32_u16", move |b| {
        b.iter(|| growing_tree(&mut grid, &mut rng, &SelectionPolicy::Newest).expect("carve"))
    });
}

fn bench_growing_tree_random_32(c: &mut Criterion) {
    let mut grid = medium_rect_grid(RowsCount(32), ColumnsCount(32)).expect("grid");
    let mut rng = rand::weak_rng();
    c.bench_function("growing_tree_random_32x32_u16", move |b| {
        b.iter(|| growing_tree(&mut grid, &mut rng, &SelectionPolicy::Random).expect("carve"))
    });
}

fn bench_wall_segments_32(c: &mut Criterion) {
    let mut grid = medium_rect_grid(RowsCount(32), ColumnsCount(32)).expect("grid");
    let mut rng = rand::weak_rng();
    growing_tree(&mut grid, &mut rng, &SelectionPolicy::Newest).expect("carve");
    let options = RenderOptions { wall_thickness: 2.0, ..RenderOptions::default() };
    c.bench_function("wall_segments_32x32_thick", move |b| {
        b.iter(|| wall_segments(&grid, &options))
    });
}

criterion_group!(benches,
                 bench_binary_tree_32,
                 bench_growing_tree_newest_32,
                 bench_growing_tree_random_32,
                 bench_wall_segments_32);
criterion_main!(benches);
