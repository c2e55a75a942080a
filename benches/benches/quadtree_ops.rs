// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_quadtree::{QuadTree, QuadTreeConfig, Rectangle};

const WORLD: f64 = 1024.0;

fn world_config(max_depth: usize) -> QuadTreeConfig {
    QuadTreeConfig::default()
        .with_boundary(Rectangle::new(0.0, 0.0, WORLD, WORLD).unwrap())
        .with_max_depth(max_depth)
}

fn gen_grid_rects(n: usize, cell: f64) -> Vec<Rectangle> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let x0 = x as f64 * cell;
            let y0 = y as f64 * cell;
            out.push(Rectangle::new(x0, y0, cell * 0.5, cell * 0.5).unwrap());
        }
    }
    out
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_random_rects(count: usize, size: f64) -> Vec<Rectangle> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| {
            let x0 = rng.next_f64() * (WORLD - size);
            let y0 = rng.next_f64() * (WORLD - size);
            Rectangle::new(x0, y0, size, size).unwrap()
        })
        .collect()
}

fn build(config: QuadTreeConfig, rects: &[Rectangle]) -> QuadTree {
    let mut tree = QuadTree::with_config(config);
    for r in rects {
        let _ = tree.insert_rect(*r);
    }
    tree
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for &n in &[16usize, 32, 64] {
        let rects = gen_grid_rects(n, WORLD / n as f64);
        group.throughput(Throughput::Elements((n * n) as u64));
        for &depth in &[1usize, 8] {
            group.bench_function(format!("grid_n{}_depth{}", n, depth), |b| {
                b.iter_batched(
                    || QuadTree::with_config(world_config(depth)),
                    |mut tree| {
                        for r in &rects {
                            let _ = tree.insert_rect(*r);
                        }
                        black_box(tree.len());
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

fn bench_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("find");
    let rects = gen_random_rects(4096, 4.0);
    group.throughput(Throughput::Elements(rects.len() as u64));
    for &depth in &[1usize, 4, 8] {
        let tree = build(world_config(depth), &rects);
        group.bench_function(format!("random_4096_depth{}", depth), |b| {
            b.iter(|| {
                let mut hits = 0_usize;
                for r in &rects {
                    if tree.find(r.x(), r.y()).is_some() {
                        hits += 1;
                    }
                }
                black_box(hits);
            })
        });
    }
    group.finish();
}

fn bench_delete_reinsert(c: &mut Criterion) {
    let mut group = c.benchmark_group("delete_reinsert");
    let rects = gen_random_rects(2048, 4.0);
    let base = build(world_config(8), &rects);
    group.bench_function("random_2048_depth8", |b| {
        b.iter_batched(
            || base.clone(),
            |mut tree| {
                for r in rects.iter().take(256) {
                    let _ = tree.delete(r.x(), r.y());
                    let _ = tree.insert_rect(*r);
                }
                black_box(tree.len());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_insert, bench_find, bench_delete_reinsert);
criterion_main!(benches);
