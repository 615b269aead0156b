// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core quadtree implementation: structure, insertion and splitting, queries.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::mem;
use kurbo::Rect;

use crate::types::{Bounded, Quadrant, rects_intersect};

/// Default capacity threshold above which a leaf attempts to split.
pub const DEFAULT_MAX_ITEMS: usize = 8;

/// Default depth ceiling beyond which a node never splits.
pub const DEFAULT_MAX_DEPTH: usize = 8;

/// An adaptive spatial index over a bounded rectangular world.
///
/// The structure is recursively self-similar: every node is itself a
/// `QuadTree`, and the root is simply the node at depth zero. A node holds the
/// elements that do not fit entirely inside any single child quadrant; once a
/// leaf exceeds its capacity (and is still below the depth ceiling) it splits
/// into four children tiling its bounds and pushes fitting elements down.
///
/// Elements are never rejected. One whose bounds lie outside the tree's world
/// rectangle classifies as "no fit" at the root and is simply held there.
///
/// Coordinates are assumed finite (no NaNs); degenerate rectangles are not
/// validated and classify as "no fit" in practice.
pub struct QuadTree<T> {
    depth: usize,
    bounds: Rect,
    max_items: usize,
    max_depth: usize,
    items: Vec<T>,
    children: Option<Box<[QuadTree<T>; 4]>>,
}

impl<T> core::fmt::Debug for QuadTree<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("QuadTree")
            .field("depth", &self.depth)
            .field("bounds", &self.bounds)
            .field("items", &self.items.len())
            .field("split", &self.children.is_some())
            .finish_non_exhaustive()
    }
}

impl<T> QuadTree<T> {
    /// Create an empty root covering `bounds`, with the default capacity and
    /// depth limits ([`DEFAULT_MAX_ITEMS`], [`DEFAULT_MAX_DEPTH`]).
    pub fn new(bounds: Rect) -> Self {
        Self::with_limits(bounds, DEFAULT_MAX_ITEMS, DEFAULT_MAX_DEPTH)
    }

    /// Create an empty root covering `bounds` with explicit limits.
    ///
    /// `max_items` is the per-node count above which a leaf splits;
    /// `max_depth` is the depth past which a node accumulates items without
    /// ever splitting (the capacity threshold is advisory there).
    pub fn with_limits(bounds: Rect, max_items: usize, max_depth: usize) -> Self {
        Self::child(0, bounds, max_items, max_depth)
    }

    fn child(depth: usize, bounds: Rect, max_items: usize, max_depth: usize) -> Self {
        Self {
            depth,
            bounds,
            max_items,
            max_depth,
            items: Vec::new(),
            children: None,
        }
    }

    /// The rectangle this node is responsible for.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Distance from the root; the root is depth `0`.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The per-node capacity threshold, inherited unchanged by descendants.
    pub fn max_items(&self) -> usize {
        self.max_items
    }

    /// The depth ceiling, inherited unchanged by descendants.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// The elements held directly by this node, in insertion order.
    ///
    /// Order carries no query semantics. For a split node these are exactly
    /// the elements that do not fit any single child quadrant.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The four children, or `None` for a leaf. Children are indexed by
    /// [`Quadrant::index`].
    pub fn children(&self) -> Option<&[Self; 4]> {
        self.children.as_deref()
    }

    /// Total number of elements in this subtree.
    pub fn len(&self) -> usize {
        let mut n = self.items.len();
        if let Some(children) = self.children.as_deref() {
            for child in children {
                n += child.len();
            }
        }
        n
    }

    /// Whether the subtree holds no elements at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Classify `rect` against this node's bounds.
    ///
    /// Returns the single child quadrant that would fully contain `rect`, or
    /// `None` if the rectangle straddles a midline or exceeds the bounds.
    /// Defined for leaves too; the answer describes where the rectangle
    /// *would* go after a split.
    pub fn classify(&self, rect: Rect) -> Option<Quadrant> {
        Quadrant::classify(self.bounds, rect)
    }

    /// Collect candidate elements for a query rectangle.
    ///
    /// Follows the single descent path the query classifies into and returns
    /// the elements held at every node along it. This is a **candidate set**,
    /// not an overlap filter: ancestors hold elements that are only known not
    /// to fit a single quadrant, so callers must run their own precise
    /// geometric test on the result. A query spanning multiple quadrants
    /// classifies as "no fit" and stops at the current node.
    ///
    /// For an exhaustive overlap search use
    /// [`query_intersecting`](Self::query_intersecting) instead.
    pub fn retrieve(&self, query: Rect) -> Vec<&T> {
        let mut out = Vec::new();
        self.retrieve_into(query, &mut out);
        out
    }

    fn retrieve_into<'a>(&'a self, query: Rect, out: &mut Vec<&'a T>) {
        if let (Some(children), Some(q)) = (self.children.as_deref(), self.classify(query)) {
            children[q.index()].retrieve_into(query, out);
        }
        out.extend(self.items.iter());
    }

    /// The most specific node whose bounds fully contain `rect`.
    ///
    /// Descends by the same single-path classification as
    /// [`retrieve`](Self::retrieve) until reaching a leaf or a node whose
    /// children reject the rectangle. Useful for locating the bucket a region
    /// maps to.
    pub fn leaf_for(&self, rect: Rect) -> &Self {
        match (self.children.as_deref(), self.classify(rect)) {
            (Some(children), Some(q)) => children[q.index()].leaf_for(rect),
            _ => self,
        }
    }

    /// Every node in this subtree, children before parents.
    ///
    /// Each node appears exactly once; callers must not rely on the order
    /// beyond that.
    pub fn nodes(&self) -> Vec<&Self> {
        let mut out = Vec::new();
        self.nodes_into(&mut out);
        out
    }

    fn nodes_into<'a>(&'a self, out: &mut Vec<&'a Self>) {
        if let Some(children) = self.children.as_deref() {
            for child in children {
                child.nodes_into(out);
            }
        }
        out.push(self);
    }

    /// Remove every element and discard all children, returning this node to
    /// an empty leaf. Bounds and limits are unchanged.
    pub fn clear(&mut self) {
        self.items.clear();
        self.children = None;
    }

    /// Convert this leaf into an internal node with four empty children
    /// tiling its bounds. Redistribution of held items is the caller's job.
    fn split(&mut self) {
        debug_assert!(self.children.is_none(), "split on an already-split node");
        let depth = self.depth + 1;
        self.children = Some(Box::new(Quadrant::ALL.map(|q| {
            Self::child(depth, q.child_rect(self.bounds), self.max_items, self.max_depth)
        })));
    }
}

impl<T: Bounded> QuadTree<T> {
    /// Insert one element into the subtree rooted at this node.
    ///
    /// Always succeeds. An internal node delegates the element to the child
    /// quadrant that fully contains it; otherwise the element is held here.
    /// When a node's direct count exceeds `max_items` and its depth is below
    /// `max_depth`, it splits (if still a leaf) and re-homes every held
    /// element that now fits a single child quadrant, preserving the order of
    /// those that stay.
    pub fn insert(&mut self, item: T) {
        if let Some(children) = self.children.as_deref_mut() {
            if let Some(q) = Quadrant::classify(self.bounds, item.bounds()) {
                children[q.index()].insert(item);
                return;
            }
        }
        self.items.push(item);
        if self.items.len() > self.max_items && self.depth < self.max_depth {
            if self.children.is_none() {
                self.split();
            }
            if let Some(children) = self.children.as_deref_mut() {
                let mut kept = Vec::new();
                for item in mem::take(&mut self.items) {
                    match Quadrant::classify(self.bounds, item.bounds()) {
                        Some(q) => children[q.index()].insert(item),
                        None => kept.push(item),
                    }
                }
                self.items = kept;
            }
        }
    }

    /// Collect every element whose bounds intersect `query`.
    ///
    /// Unlike [`retrieve`](Self::retrieve) this is a true overlap search: it
    /// visits every child whose bounds intersect the query, wherever the
    /// query straddles quadrants, and filters each held element precisely.
    /// Edges are treated as closed, so rectangles that merely touch count as
    /// intersecting.
    pub fn query_intersecting(&self, query: Rect) -> Vec<&T> {
        let mut out = Vec::new();
        self.query_intersecting_into(query, &mut out);
        out
    }

    fn query_intersecting_into<'a>(&'a self, query: Rect, out: &mut Vec<&'a T>) {
        for item in &self.items {
            if rects_intersect(item.bounds(), query) {
                out.push(item);
            }
        }
        if let Some(children) = self.children.as_deref() {
            for child in children {
                if rects_intersect(child.bounds, query) {
                    child.query_intersecting_into(query, out);
                }
            }
        }
    }
}
