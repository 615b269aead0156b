// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use canopy_quadtree::QuadTree;
use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Rect;

const WORLD: Rect = Rect::new(0.0, 0.0, 2000.0, 2000.0);

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

fn gen_random_rects(count: usize, rect_w: f64, rect_h: f64) -> Vec<(Rect, u32)> {
    let mut out = Vec::with_capacity(count);
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    for i in 0..count {
        let x0 = rng.next_f64() * (WORLD.width() - rect_w);
        let y0 = rng.next_f64() * (WORLD.height() - rect_h);
        out.push((Rect::new(x0, y0, x0 + rect_w, y0 + rect_h), i as u32));
    }
    out
}

fn gen_query_rects(count: usize, size: f64) -> Vec<Rect> {
    let mut out = Vec::with_capacity(count);
    let mut rng = Rng::new(0xBADC_F00D_1234_5678);
    for _ in 0..count {
        let x0 = rng.next_f64() * (WORLD.width() - size);
        let y0 = rng.next_f64() * (WORLD.height() - size);
        out.push(Rect::new(x0, y0, x0 + size, y0 + size));
    }
    out
}

fn build_tree(rects: &[(Rect, u32)]) -> QuadTree<(Rect, u32)> {
    let mut tree = QuadTree::new(WORLD);
    for r in rects.iter().copied() {
        tree.insert(r);
    }
    tree
}

fn overlaps(a: Rect, b: Rect) -> bool {
    a.x0 <= b.x1 && b.x0 <= a.x1 && a.y0 <= b.y1 && b.y0 <= a.y1
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for &n in &[1024usize, 4096, 16384] {
        let rects = gen_random_rects(n, 12.0, 12.0);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("build_n{}", n), |b| {
            b.iter_batched(
                || rects.clone(),
                |rects| black_box(build_tree(&rects)),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_retrieve(c: &mut Criterion) {
    let mut group = c.benchmark_group("retrieve");
    for &n in &[1024usize, 4096, 16384] {
        let rects = gen_random_rects(n, 12.0, 12.0);
        let queries = gen_query_rects(256, 64.0);
        let tree = build_tree(&rects);
        group.bench_function(format!("candidates_filtered_n{}", n), |b| {
            b.iter(|| {
                let mut total = 0usize;
                for &q in &queries {
                    total += tree
                        .retrieve(q)
                        .iter()
                        .filter(|(r, _)| overlaps(*r, q))
                        .count();
                }
                black_box(total);
            })
        });
    }
    group.finish();
}

fn bench_query_intersecting(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_intersecting");
    for &n in &[1024usize, 4096, 16384] {
        let rects = gen_random_rects(n, 12.0, 12.0);
        let queries = gen_query_rects(256, 64.0);
        let tree = build_tree(&rects);
        group.bench_function(format!("overlap_n{}", n), |b| {
            b.iter(|| {
                let mut total = 0usize;
                for &q in &queries {
                    total += tree.query_intersecting(q).len();
                }
                black_box(total);
            })
        });
    }
    group.finish();
}

fn bench_linear_scan_baseline(c: &mut Criterion) {
    let mut group = c.benchmark_group("linear_scan");
    for &n in &[1024usize, 4096, 16384] {
        let rects = gen_random_rects(n, 12.0, 12.0);
        let queries = gen_query_rects(256, 64.0);
        group.bench_function(format!("overlap_n{}", n), |b| {
            b.iter(|| {
                let mut total = 0usize;
                for &q in &queries {
                    total += rects.iter().filter(|(r, _)| overlaps(*r, q)).count();
                }
                black_box(total);
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_insert,
    bench_retrieve,
    bench_query_intersecting,
    bench_linear_scan_baseline,
);
criterion_main!(benches);
