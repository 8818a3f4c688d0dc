// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Region primitives: intersection, containment, and quadrant subdivision.
//!
//! Regions are plain [`kurbo::Rect`]s with `y0` as the top edge. Two conventions
//! are used throughout the tree:
//!
//! - Rectangle intersection is boundary-inclusive: rectangles that only share an
//!   edge or a corner intersect.
//! - Point containment is half-open: `x0 <= x < x1` and `y0 <= y < y1`, matching
//!   [`Rect::contains`].
//!
//! [`quadrants`] splits at the exact center, so the four quadrants share their
//! inner edges. Under the inclusive rule an element touching an inner edge
//! intersects both neighbors and is therefore kept at the coarser node.

use bitflags::bitflags;
use kurbo::{Point, Rect};

/// One of the four quadrants of a region.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Minimum x, minimum y.
    TopLeft,
    /// Maximum x, minimum y.
    TopRight,
    /// Minimum x, maximum y.
    BottomLeft,
    /// Maximum x, maximum y.
    BottomRight,
}

impl Quadrant {
    /// All quadrants in traversal order.
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    /// Position of this quadrant in [`Quadrant::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::TopLeft => 0,
            Self::TopRight => 1,
            Self::BottomLeft => 2,
            Self::BottomRight => 3,
        }
    }

    /// Short label used by the tree dump.
    pub const fn label(self) -> &'static str {
        match self {
            Self::TopLeft => "TL",
            Self::TopRight => "TR",
            Self::BottomLeft => "BL",
            Self::BottomRight => "BR",
        }
    }

    /// The single-bit set for this quadrant.
    #[inline]
    pub const fn flag(self) -> Quadrants {
        match self {
            Self::TopLeft => Quadrants::TOP_LEFT,
            Self::TopRight => Quadrants::TOP_RIGHT,
            Self::BottomLeft => Quadrants::BOTTOM_LEFT,
            Self::BottomRight => Quadrants::BOTTOM_RIGHT,
        }
    }
}

bitflags! {
    /// A set of quadrants.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Quadrants: u8 {
        /// [`Quadrant::TopLeft`].
        const TOP_LEFT     = 0b0001;
        /// [`Quadrant::TopRight`].
        const TOP_RIGHT    = 0b0010;
        /// [`Quadrant::BottomLeft`].
        const BOTTOM_LEFT  = 0b0100;
        /// [`Quadrant::BottomRight`].
        const BOTTOM_RIGHT = 0b1000;
    }
}

impl Quadrants {
    /// Quadrants whose region intersects `bounds`.
    ///
    /// `regions` must be in [`Quadrant::ALL`] order.
    pub fn intersecting(regions: &[Rect; 4], bounds: &Rect) -> Self {
        Quadrant::ALL
            .iter()
            .zip(regions)
            .filter(|(_, r)| intersects(r, bounds))
            .fold(Self::empty(), |acc, (q, _)| acc | q.flag())
    }

    /// Iterate the quadrants in this set in [`Quadrant::ALL`] order.
    pub fn quadrants(self) -> impl Iterator<Item = Quadrant> {
        Quadrant::ALL.into_iter().filter(move |q| self.contains(q.flag()))
    }
}

/// Where an element goes relative to a subdivided node.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Placement {
    /// No child region intersects the element.
    None,
    /// Exactly one child region intersects the element.
    Single(Quadrant),
    /// Two or more child regions intersect the element.
    Multiple,
}

impl From<Quadrants> for Placement {
    fn from(mask: Quadrants) -> Self {
        let mut it = mask.quadrants();
        match (it.next(), it.next()) {
            (None, _) => Self::None,
            (Some(q), None) => Self::Single(q),
            (Some(_), Some(_)) => Self::Multiple,
        }
    }
}

/// Boundary-inclusive rectangle intersection.
///
/// ```
/// use kurbo::Rect;
/// use understory_quadtree::region::intersects;
///
/// let a = Rect::new(0.0, 0.0, 10.0, 10.0);
/// assert!(intersects(&a, &Rect::new(5.0, 5.0, 15.0, 15.0)));
/// assert!(intersects(&a, &Rect::new(10.0, 0.0, 20.0, 10.0)));
/// assert!(!intersects(&a, &Rect::new(11.0, 0.0, 20.0, 10.0)));
/// ```
#[inline]
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    a.x0 <= b.x1 && a.x1 >= b.x0 && a.y0 <= b.y1 && a.y1 >= b.y0
}

/// Half-open point containment.
#[inline]
pub fn contains_point(region: &Rect, pt: Point) -> bool {
    region.contains(pt)
}

/// Split `region` at its center into quadrants, in [`Quadrant::ALL`] order.
pub fn quadrants(region: &Rect) -> [Rect; 4] {
    let c = region.center();
    [
        Rect::new(region.x0, region.y0, c.x, c.y),
        Rect::new(c.x, region.y0, region.x1, c.y),
        Rect::new(region.x0, c.y, c.x, region.y1),
        Rect::new(c.x, c.y, region.x1, region.y1),
    ]
}

/// The quadrant of `region` with the given position.
pub fn quadrant(region: &Rect, q: Quadrant) -> Rect {
    quadrants(region)[q.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quadrants_tile_parent() {
        let r = Rect::new(0.0, 0.0, 100.0, 60.0);
        let [tl, tr, bl, br] = quadrants(&r);
        assert_eq!(tl, Rect::new(0.0, 0.0, 50.0, 30.0));
        assert_eq!(tr, Rect::new(50.0, 0.0, 100.0, 30.0));
        assert_eq!(bl, Rect::new(0.0, 30.0, 50.0, 60.0));
        assert_eq!(br, Rect::new(50.0, 30.0, 100.0, 60.0));
        for q in [tl, tr, bl, br] {
            assert_eq!(q.width(), r.width() * 0.5);
            assert_eq!(q.height(), r.height() * 0.5);
        }
    }

    #[test]
    fn center_point_belongs_to_exactly_one_quadrant() {
        let r = Rect::new(0.0, 0.0, 7.0, 3.0);
        let qs = quadrants(&r);
        let c = r.center();
        let owners: usize = qs.iter().filter(|q| contains_point(q, c)).count();
        assert_eq!(owners, 1);
        assert!(contains_point(&qs[Quadrant::BottomRight.index()], c));
    }

    #[test]
    fn point_containment_is_half_open() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(contains_point(&r, Point::new(0.0, 0.0)));
        assert!(!contains_point(&r, Point::new(10.0, 5.0)));
        assert!(!contains_point(&r, Point::new(5.0, 10.0)));
    }

    #[test]
    fn intersection_is_symmetric_and_inclusive() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let corner = Rect::new(10.0, 10.0, 12.0, 12.0);
        assert!(intersects(&a, &corner));
        assert!(intersects(&corner, &a));
        let apart = Rect::new(10.5, 0.0, 12.0, 1.0);
        assert!(!intersects(&a, &apart));
        assert!(!intersects(&apart, &a));
    }

    #[test]
    fn placement_from_mask() {
        let regions = quadrants(&Rect::new(0.0, 0.0, 100.0, 100.0));

        let inside_tl = Rect::new(10.0, 10.0, 20.0, 20.0);
        let mask = Quadrants::intersecting(&regions, &inside_tl);
        assert_eq!(mask, Quadrants::TOP_LEFT);
        assert_eq!(
            Placement::from(mask),
            Placement::Single(Quadrant::TopLeft)
        );

        // Touching the vertical midline reaches into the right half too.
        let on_midline = Rect::new(40.0, 60.0, 50.0, 70.0);
        let mask = Quadrants::intersecting(&regions, &on_midline);
        assert_eq!(mask, Quadrants::BOTTOM_LEFT | Quadrants::BOTTOM_RIGHT);
        assert_eq!(Placement::from(mask), Placement::Multiple);

        let center = Rect::new(45.0, 45.0, 55.0, 55.0);
        assert_eq!(
            Quadrants::intersecting(&regions, &center),
            Quadrants::all()
        );

        assert_eq!(Placement::from(Quadrants::empty()), Placement::None);
    }

    #[test]
    fn quadrant_order_and_labels() {
        let labels: [&str; 4] = Quadrant::ALL.map(Quadrant::label);
        assert_eq!(labels, ["TL", "TR", "BL", "BR"]);
        for (i, q) in Quadrant::ALL.into_iter().enumerate() {
            assert_eq!(q.index(), i);
        }
        let r = Rect::new(0.0, 0.0, 8.0, 8.0);
        assert_eq!(quadrant(&r, Quadrant::TopRight), Rect::new(4.0, 0.0, 8.0, 4.0));
        let set = Quadrants::TOP_RIGHT | Quadrants::BOTTOM_LEFT;
        let qs: alloc::vec::Vec<_> = set.quadrants().collect();
        assert_eq!(qs, [Quadrant::TopRight, Quadrant::BottomLeft]);
    }
}
