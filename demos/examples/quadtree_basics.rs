// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadtree basics.
//!
//! Insert a handful of bounded entities, run a candidate lookup, and apply
//! the caller-side precise overlap test.
//!
//! Run:
//! - `cargo run -p canopy_demos --example quadtree_basics`

use canopy_quadtree::QuadTree;
use kurbo::Rect;

fn overlaps(a: Rect, b: Rect) -> bool {
    a.x0 <= b.x1 && b.x0 <= a.x1 && a.y0 <= b.y1 && b.y0 <= a.y1
}

fn main() {
    // A 400x400 world with a small per-node capacity so splits show up early.
    let mut tree = QuadTree::with_limits(Rect::new(0.0, 0.0, 400.0, 400.0), 2, 6);

    let entities = [
        (Rect::new(20.0, 20.0, 60.0, 60.0), "crate"),
        (Rect::new(300.0, 40.0, 340.0, 80.0), "barrel"),
        (Rect::new(50.0, 300.0, 90.0, 340.0), "cart"),
        (Rect::new(310.0, 310.0, 350.0, 350.0), "anvil"),
        // Straddles the center, so it stays at the root.
        (Rect::new(180.0, 180.0, 220.0, 220.0), "fountain"),
    ];
    for e in entities {
        tree.insert(e);
    }

    println!("tree: {tree:?}");
    println!("total entities: {}", tree.len());

    // Candidate lookup around the top-left corner.
    let query = Rect::new(0.0, 0.0, 100.0, 100.0);
    let candidates = tree.retrieve(query);
    println!(
        "candidates for {query:?}: {:?}",
        candidates.iter().map(|(_, name)| *name).collect::<Vec<_>>()
    );

    // The candidate set may over-approximate; filter precisely.
    let hits: Vec<&str> = candidates
        .iter()
        .filter(|(bounds, _)| overlaps(*bounds, query))
        .map(|(_, name)| *name)
        .collect();
    println!("precise hits: {hits:?}");
    assert_eq!(hits, ["crate"], "only the crate overlaps the corner query");

    // The overlap query visits every quadrant the band touches.
    let band = Rect::new(0.0, 170.0, 400.0, 230.0);
    let across: Vec<&str> = tree
        .query_intersecting(band)
        .iter()
        .map(|(_, name)| *name)
        .collect();
    println!("intersecting the center band: {across:?}");
}
