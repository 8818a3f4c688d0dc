// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use understory_quadtree::{QuadTree, QuadTreeConfig, QuadTreeElement};

#[derive(Clone, Copy, Debug)]
struct Item {
    id: u32,
    bounds: Rect,
}

impl QuadTreeElement for Item {
    type Id = u32;

    fn id(&self) -> &u32 {
        &self.id
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

const WORLD: Rect = Rect::new(0.0, 0.0, 2048.0, 2048.0);

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

fn gen_grid_items(n: usize, cell: f64) -> Vec<Item> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let x0 = x as f64 * cell;
            let y0 = y as f64 * cell;
            out.push(Item {
                id: out.len() as u32,
                bounds: Rect::new(x0 + 1.0, y0 + 1.0, x0 + cell - 1.0, y0 + cell - 1.0),
            });
        }
    }
    out
}

fn gen_random_items(count: usize, size: f64) -> Vec<Item> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|i| {
            let x0 = rng.next_f64() * (WORLD.width() - size);
            let y0 = rng.next_f64() * (WORLD.height() - size);
            Item {
                id: i as u32,
                bounds: Rect::new(x0, y0, x0 + size, y0 + size),
            }
        })
        .collect()
}

fn build(items: &[Item]) -> QuadTree<Item> {
    let mut tree = QuadTree::new(WORLD);
    for item in items {
        let _ = tree.insert(*item);
    }
    tree
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for &n in &[32usize, 64, 128] {
        let items = gen_grid_items(n, 2048.0 / n as f64);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("grid_n{}", n), |b| {
            b.iter_batched(
                || QuadTree::<Item>::new(WORLD),
                |mut tree| {
                    for item in &items {
                        let _ = tree.insert(*item);
                    }
                    black_box(tree.len());
                },
                BatchSize::SmallInput,
            )
        });
    }
    let items = gen_random_items(10_000, 12.0);
    group.throughput(Throughput::Elements(items.len() as u64));
    group.bench_function("random_10k_depth6", |b| {
        let config = QuadTreeConfig::default().with_max_depth(6);
        b.iter_batched(
            || QuadTree::<Item>::with_config(WORLD, config).unwrap(),
            |mut tree| {
                for item in &items {
                    let _ = tree.insert(*item);
                }
                black_box(tree.node_count());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("query");
    let items = gen_random_items(10_000, 12.0);
    let tree = build(&items);
    let mut rng = Rng::new(0xBADC_F00D_1234_5678);
    let points: Vec<Point> = (0..256)
        .map(|_| Point::new(rng.next_f64() * 2048.0, rng.next_f64() * 2048.0))
        .collect();

    group.throughput(Throughput::Elements(points.len() as u64));
    group.bench_function("point_256", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for &pt in &points {
                tree.visit_point(pt, |_| hits += 1);
            }
            black_box(hits);
        })
    });

    for &side in &[64.0, 256.0, 1024.0] {
        let query = Rect::new(512.0, 512.0, 512.0 + side, 512.0 + side);
        group.throughput(Throughput::Elements(1));
        group.bench_function(format!("rect_{}", side), |b| {
            b.iter(|| {
                let hits = tree.search_rect(query).count();
                black_box(hits);
            })
        });
    }
    group.finish();
}

fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove");
    let items = gen_random_items(4_096, 8.0);
    group.throughput(Throughput::Elements(items.len() as u64));
    group.bench_function("remove_all_4k", |b| {
        b.iter_batched(
            || build(&items),
            |mut tree| {
                for item in &items {
                    let _ = tree.remove(item);
                }
                black_box(tree.node_count());
            },
            BatchSize::LargeInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_insert, bench_queries, bench_remove);
criterion_main!(benches);
