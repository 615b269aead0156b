// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=canopy_quadtree --heading-base-level=0

//! Canopy Quadtree: a Kurbo-native adaptive quadtree over a bounded world.
//!
//! Canopy Quadtree is a reusable building block for broad-phase spatial
//! lookup of rectangle-bounded entities within a fixed-size region.
//!
//! - Insert axis-aligned bounded elements; leaves split into four quadrants
//!   when they exceed a capacity threshold, down to a depth ceiling.
//! - Look up candidate sets, exact overlap sets, and the bucket node a region
//!   maps to.
//! - Enumerate every bucket for capacity planning or debugging, and reset the
//!   whole tree in one call.
//!
//! It is Kurbo-native the way a scene tree is: the world, every bucket, and
//! every stored element describe themselves with [`kurbo::Rect`]. Elements are
//! polymorphic over the single [`Bounded`] capability, resolved at compile
//! time; `(Rect, payload)` pairs implement it out of the box so callers can
//! index lightweight handles into their own storage.
//!
//! # Example
//!
//! ```rust
//! use canopy_quadtree::QuadTree;
//! use kurbo::Rect;
//!
//! // Index a 200x200 world, storing ids alongside their bounds.
//! let mut tree = QuadTree::new(Rect::new(0.0, 0.0, 200.0, 200.0));
//! tree.insert((Rect::new(10.0, 10.0, 30.0, 30.0), 1_u32));
//! tree.insert((Rect::new(150.0, 150.0, 170.0, 170.0), 2_u32));
//! tree.insert((Rect::new(90.0, 90.0, 110.0, 110.0), 3_u32));
//!
//! // Candidate lookup followed by the caller's precise overlap test.
//! let query = Rect::new(0.0, 0.0, 50.0, 50.0);
//! let hits: Vec<u32> = tree
//!     .retrieve(query)
//!     .into_iter()
//!     .filter(|(r, _)| r.intersect(query).area() > 0.0)
//!     .map(|&(_, id)| id)
//!     .collect();
//! assert_eq!(hits, [1]);
//! ```
//!
//! Exhaustive overlap search is a distinct operation that visits every
//! quadrant the query touches:
//!
//! ```rust
//! use canopy_quadtree::QuadTree;
//! use kurbo::Rect;
//!
//! let mut tree = QuadTree::new(Rect::new(0.0, 0.0, 200.0, 200.0));
//! tree.insert((Rect::new(10.0, 10.0, 30.0, 30.0), 1_u32));
//! // Straddles the center, so it is held at the root.
//! tree.insert((Rect::new(90.0, 90.0, 110.0, 110.0), 2_u32));
//!
//! let band = Rect::new(0.0, 95.0, 200.0, 105.0);
//! let ids: Vec<u32> = tree.query_intersecting(band).iter().map(|(_, id)| *id).collect();
//! assert_eq!(ids, [2]);
//! ```
//!
//! ## Retrieve vs. overlap search
//!
//! [`QuadTree::retrieve`] follows the *single* descent path its query
//! classifies into and unions the elements held along it. That makes it a
//! bucket lookup: cheap, but a query spanning several quadrants stops early
//! and ancestor-held elements in the result may not overlap the query at all.
//! [`QuadTree::query_intersecting`] is the general overlap query; the two are
//! intentionally separate operations.
//!
//! ## API overview
//!
//! - [`QuadTree`]: one node of the index; the root is simply the node at
//!   depth zero, and all operations are recursive over it.
//! - [`Bounded`]: the capability stored element types implement.
//! - [`Quadrant`]: the fixed numbering and geometry of a node's four
//!   subdivisions.
//!
//! Key operations:
//! - [`QuadTree::insert`] — add an element, splitting and redistributing as
//!   capacity demands.
//! - [`QuadTree::retrieve`] — single-path candidate set.
//! - [`QuadTree::query_intersecting`] — exact overlap set.
//! - [`QuadTree::leaf_for`] — the most specific bucket for a region.
//! - [`QuadTree::nodes`] / [`QuadTree::clear`] — enumerate or reset the
//!   subtree.
//!
//! ## Limits and edge behavior
//!
//! A leaf splits when its direct count exceeds `max_items` *and* its depth is
//! below `max_depth`; a node at the ceiling accumulates elements without
//! bound. Elements lying exactly on a midline, spanning several quadrants, or
//! falling outside the world rectangle are held at the deepest node whose
//! bounds still classify them, which may be the root. Nothing is ever
//! silently dropped or duplicated.
//!
//! Mutation requires `&mut` access; shared references allow concurrent reads
//! and nothing else, so all serialization of writers is the caller's and the
//! compiler's business. Float inputs are assumed finite (no NaNs).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod tree;
pub mod types;

pub use tree::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_ITEMS, QuadTree};
pub use types::{Bounded, Quadrant};
