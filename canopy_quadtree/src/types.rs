// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element capability and quadrant geometry.

use kurbo::Rect;

/// Capability for types stored in a [`QuadTree`](crate::QuadTree): expose an
/// axis-aligned rectangle describing the element's spatial extent.
///
/// The tree places no other constraint on elements — no ordering, no equality.
/// Elements that look identical are stored independently. Callers typically
/// store small handle types (ids or `(Rect, payload)` pairs) and keep the real
/// data elsewhere.
pub trait Bounded {
    /// The element's axis-aligned bounding rectangle.
    fn bounds(&self) -> Rect;
}

impl Bounded for Rect {
    fn bounds(&self) -> Rect {
        *self
    }
}

/// Bounds paired with an arbitrary payload, the common handle idiom.
impl<P> Bounded for (Rect, P) {
    fn bounds(&self) -> Rect {
        self.0
    }
}

/// One of the four equal subdivisions of a node's bounds.
///
/// The numbering is fixed and matches the split geometry exactly:
/// 0 = top-right, 1 = top-left, 2 = bottom-left, 3 = bottom-right, where
/// "top" is the half with the smaller `y` (y grows downward, following
/// [`Rect`]'s convention) and "left"/"right" partition by `x` at the
/// horizontal midpoint.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Upper-right quadrant (x above the midpoint, y below it).
    TopRight = 0,
    /// Upper-left quadrant.
    TopLeft = 1,
    /// Lower-left quadrant.
    BottomLeft = 2,
    /// Lower-right quadrant.
    BottomRight = 3,
}

impl Quadrant {
    /// All quadrants in index order.
    pub const ALL: [Self; 4] = [
        Self::TopRight,
        Self::TopLeft,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    /// The quadrant's child-array index, `0..=3`.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The sub-rectangle this quadrant occupies within `bounds`.
    ///
    /// The four quadrant rectangles share edges at `bounds.center()` and tile
    /// `bounds` exactly, without gap or overlap.
    pub fn child_rect(self, bounds: Rect) -> Rect {
        let c = bounds.center();
        match self {
            Self::TopRight => Rect::new(c.x, bounds.y0, bounds.x1, c.y),
            Self::TopLeft => Rect::new(bounds.x0, bounds.y0, c.x, c.y),
            Self::BottomLeft => Rect::new(bounds.x0, c.y, c.x, bounds.y1),
            Self::BottomRight => Rect::new(c.x, c.y, bounds.x1, bounds.y1),
        }
    }

    /// Classify `rect` against `bounds`: the single quadrant that fully
    /// contains `rect`, or `None` if no quadrant does.
    ///
    /// A rectangle is in the left half iff it starts inside `bounds` and ends
    /// strictly before the vertical midline; in the right half iff it starts
    /// strictly past the midline and ends inside `bounds`. The vertical halves
    /// are the same rules on `y`. The strict/non-strict asymmetry makes a
    /// rectangle lying exactly on a midline deterministically `None` — it can
    /// never be attributed to two quadrants or flip between them on
    /// reclassification.
    ///
    /// `None` also covers rectangles extending past `bounds` itself. Assumes
    /// finite coordinates (no NaNs).
    pub fn classify(bounds: Rect, rect: Rect) -> Option<Self> {
        let c = bounds.center();
        let in_left = rect.x0 >= bounds.x0 && rect.x1 < c.x;
        let in_right = rect.x0 > c.x && rect.x1 <= bounds.x1;
        let in_top = rect.y0 >= bounds.y0 && rect.y1 < c.y;
        let in_bottom = rect.y0 > c.y && rect.y1 <= bounds.y1;
        match (in_left, in_right, in_top, in_bottom) {
            (false, true, true, false) => Some(Self::TopRight),
            (true, false, true, false) => Some(Self::TopLeft),
            (true, false, false, true) => Some(Self::BottomLeft),
            (false, true, false, true) => Some(Self::BottomRight),
            _ => None,
        }
    }
}

/// Whether two rectangles intersect, treating edges as closed (rectangles
/// that merely touch still intersect).
pub(crate) fn rects_intersect(a: Rect, b: Rect) -> bool {
    a.x0 <= b.x1 && b.x0 <= a.x1 && a.y0 <= b.y1 && b.y0 <= a.y1
}
