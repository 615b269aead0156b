// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bucket inspection.
//!
//! Fill a tree until it splits a few levels deep, then list every bucket's
//! bounds and occupancy and locate the bucket a probe region maps to. This is
//! the walk a debug overlay would draw.
//!
//! Run:
//! - `cargo run -p canopy_demos --example quadtree_buckets`

use canopy_quadtree::QuadTree;
use kurbo::Rect;

fn main() {
    let mut tree = QuadTree::with_limits(Rect::new(0.0, 0.0, 256.0, 256.0), 3, 5);

    // A diagonal of small boxes plus one spanning box that never leaves the
    // root.
    for i in 0..24 {
        let t = f64::from(i) * 10.0;
        tree.insert((Rect::new(t, t, t + 6.0, t + 6.0), i));
    }
    tree.insert((Rect::new(100.0, 100.0, 160.0, 160.0), 99));

    for node in tree.nodes() {
        if node.items().is_empty() && !node.is_leaf() {
            continue;
        }
        let kind = if node.is_leaf() { "leaf" } else { "node" };
        println!(
            "{:indent$}{kind} depth {} {:?} holds {} item(s)",
            "",
            node.depth(),
            node.bounds(),
            node.items().len(),
            indent = node.depth() * 2,
        );
    }
    println!("buckets: {}, entities: {}", tree.nodes().len(), tree.len());

    // Which bucket is responsible for a probe region?
    let probe = Rect::new(40.0, 40.0, 44.0, 44.0);
    let bucket = tree.leaf_for(probe);
    println!(
        "probe {probe:?} maps to the depth-{} bucket {:?}",
        bucket.depth(),
        bucket.bounds()
    );
    assert!(
        bucket.depth() > 0,
        "a small probe away from the midlines lands below the root"
    );

    // After a clear the tree is a single empty bucket again.
    tree.clear();
    assert!(tree.is_leaf() && tree.is_empty());
    println!("after clear: {} bucket(s), {} entities", tree.nodes().len(), tree.len());
}
