// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_quadtree::{QuadTree, QuadTreeConfig};

use rstar::RTree;
use rstar::primitives::Rectangle;

fn gen_grid_rects(n: usize, cell: f64) -> Vec<understory_quadtree::Rectangle> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let x0 = x as f64 * cell;
            let y0 = y as f64 * cell;
            out.push(understory_quadtree::Rectangle::new(x0, y0, cell * 0.5, cell * 0.5).unwrap());
        }
    }
    out
}

fn to_rstar_rects(v: &[understory_quadtree::Rectangle]) -> Vec<Rectangle<[f64; 2]>> {
    v.iter()
        .map(|r| Rectangle::from_corners([r.x(), r.y()], [r.max_x(), r.max_y()]))
        .collect()
}

fn bench_point_lookup_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("point_lookup_compare_f64");
    for &n in &[32usize, 64] {
        let cell = 1024.0 / n as f64;
        let rects = gen_grid_rects(n, cell);
        let config = QuadTreeConfig::default()
            .with_boundary(understory_quadtree::Rectangle::new(0.0, 0.0, 1024.0, 1024.0).unwrap())
            .with_max_depth(8);
        group.throughput(Throughput::Elements((n * n) as u64));

        group.bench_function(format!("understory_build_find_n{}", n), |b| {
            b.iter_batched(
                || QuadTree::with_config(config),
                |mut tree| {
                    for r in &rects {
                        let _ = tree.insert_rect(*r);
                    }
                    let hits = rects
                        .iter()
                        .filter(|r| tree.find(r.x(), r.y()).is_some())
                        .count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_build_find_bulk_n{}", n), |b| {
            b.iter_batched(
                || to_rstar_rects(&rects),
                |rectangles| {
                    let tree = RTree::bulk_load(rectangles);
                    let hits = rects
                        .iter()
                        .filter(|r| tree.locate_all_at_point(&[r.x(), r.y()]).next().is_some())
                        .count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_point_lookup_compare);
criterion_main!(benches);
