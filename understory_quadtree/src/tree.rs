// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The region quadtree.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;

use kurbo::{Point, Rect};
use tracing::{debug, trace};

use crate::config::{ConfigError, QuadTreeConfig};
use crate::dump::TreeDump;
use crate::node::{Arena, NodeIdx};
use crate::region::{Placement, contains_point, intersects};

/// An element that can be stored in a [`QuadTree`].
///
/// Elements are compared by identity when removed and located by their bounds.
/// The bounds of an element must not change while it is stored in a tree.
pub trait QuadTreeElement {
    /// Identity type. Two elements with equal ids are the same element.
    type Id: PartialEq + ?Sized;

    /// Stable identity of this element.
    fn id(&self) -> &Self::Id;

    /// Axis-aligned bounding box of this element.
    fn bounds(&self) -> Rect;
}

/// Outcome of [`QuadTree::insert`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Insertion {
    /// Stored in the bucket of a node at `depth` (the root is depth 0).
    Stored {
        /// Depth of the owning node.
        depth: usize,
    },
    /// The element's bounds do not intersect the tree region; nothing was stored.
    OutOfBounds,
    /// The element intersects a node at `depth` but none of its children, which
    /// can only happen when floating-point boundaries disagree. Nothing was stored.
    Dropped {
        /// Depth of the node where routing stopped.
        depth: usize,
    },
}

impl Insertion {
    /// True if the element is now held by the tree.
    #[inline]
    pub fn is_stored(self) -> bool {
        matches!(self, Self::Stored { .. })
    }
}

/// A region quadtree over elements with axis-aligned bounds.
///
/// Each element is stored once, in the deepest node whose children cannot
/// claim it unambiguously: an element that intersects two or more child
/// quadrants stays in the parent's bucket. Nodes subdivide lazily on the first
/// insertion that needs it and collapse again once their whole subtree is empty.
///
/// ```
/// use kurbo::{Point, Rect};
/// use understory_quadtree::{QuadTree, QuadTreeElement};
///
/// #[derive(Clone, Debug)]
/// struct Sprite {
///     id: u32,
///     bounds: Rect,
/// }
///
/// impl QuadTreeElement for Sprite {
///     type Id = u32;
///     fn id(&self) -> &u32 {
///         &self.id
///     }
///     fn bounds(&self) -> Rect {
///         self.bounds
///     }
/// }
///
/// let mut tree = QuadTree::new(Rect::new(0.0, 0.0, 100.0, 100.0));
/// let sprite = Sprite { id: 1, bounds: Rect::new(10.0, 10.0, 20.0, 20.0) };
/// assert!(tree.insert(sprite.clone()).is_stored());
///
/// let hits: Vec<_> = tree.search_point(Point::new(15.0, 15.0)).map(|s| s.id).collect();
/// assert_eq!(hits, [1]);
///
/// assert!(tree.remove(&sprite));
/// assert!(!tree.remove(&sprite));
/// assert_eq!(tree.node_count(), 1);
/// ```
#[derive(Clone)]
pub struct QuadTree<E> {
    arena: Arena<E>,
    root: NodeIdx,
    config: QuadTreeConfig,
    len: usize,
}

impl<E: QuadTreeElement> QuadTree<E> {
    /// Create an empty tree covering `region` with the default configuration.
    pub fn new(region: Rect) -> Self {
        Self::from_parts(region, QuadTreeConfig::default())
    }

    /// Create an empty tree covering `region`, validating `config` first.
    pub fn with_config(region: Rect, config: QuadTreeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_parts(region, config))
    }

    fn from_parts(region: Rect, config: QuadTreeConfig) -> Self {
        debug!(
            ?region,
            minimum_quad_size = config.minimum_quad_size,
            max_depth = config.max_depth,
            "creating quadtree"
        );
        let (arena, root) = Arena::with_root(region);
        Self {
            arena,
            root,
            config,
            len: 0,
        }
    }

    /// The region covered by the root node.
    pub fn region(&self) -> Rect {
        self.arena.node(self.root).region
    }

    /// The subdivision limits of this tree.
    pub fn config(&self) -> QuadTreeConfig {
        self.config
    }

    /// Number of stored elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if no element is stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of live nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.arena.live()
    }

    /// Depth of the deepest live node (0 for a tree that never subdivided).
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self.root, 0_usize)];
        while let Some((idx, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            if let Some(children) = self.arena.node(idx).children {
                stack.extend(children.into_iter().map(|c| (c, depth + 1)));
            }
        }
        deepest
    }

    /// Insert an element.
    ///
    /// Starting at the root, each node either keeps the element (it has reached
    /// the minimum size or the maximum depth, or the element straddles two or
    /// more of its quadrants) or hands it to the single child that intersects it.
    pub fn insert(&mut self, element: E) -> Insertion {
        let bounds = element.bounds();
        debug_assert!(!bounds.is_nan(), "element bounds must not be NaN");

        let min = self.config.minimum_quad_size;
        let mut idx = self.root;
        let mut depth = 0_usize;
        loop {
            let node = self.arena.node(idx);
            if !intersects(&node.region, &bounds) {
                return Insertion::OutOfBounds;
            }
            let small = node.region.width() <= min && node.region.height() <= min;
            if small || depth >= self.config.max_depth {
                return self.store(idx, depth, element);
            }

            let (children, created) = self.arena.subdivide(idx);
            if created {
                trace!(depth, region = ?self.arena.node(idx).region, "subdivided node");
            }
            match Placement::from(self.arena.intersecting_children(children, &bounds)) {
                Placement::Multiple => return self.store(idx, depth, element),
                Placement::Single(q) => {
                    idx = children[q.index()];
                    depth += 1;
                }
                Placement::None => {
                    trace!(depth, ?bounds, "no child intersects element; dropped");
                    return Insertion::Dropped { depth };
                }
            }
        }
    }

    fn store(&mut self, idx: NodeIdx, depth: usize, element: E) -> Insertion {
        self.arena.node_mut(idx).bucket.push(element);
        self.len += 1;
        Insertion::Stored { depth }
    }

    /// Visit elements whose bounds contain the point.
    ///
    /// Containment is half-open on both the node regions and the element bounds.
    pub fn visit_point<'a, F: FnMut(&'a E)>(&'a self, pt: Point, f: F) {
        self.visit(
            |region| contains_point(region, pt),
            |bounds| contains_point(bounds, pt),
            f,
        );
    }

    /// Visit elements whose bounds intersect `rect` (boundary-inclusive).
    pub fn visit_rect<'a, F: FnMut(&'a E)>(&'a self, rect: Rect, f: F) {
        self.visit(
            |region| intersects(region, &rect),
            |bounds| intersects(bounds, &rect),
            f,
        );
    }

    /// Elements whose bounds contain the point, in traversal order.
    pub fn search_point(&self, pt: Point) -> impl Iterator<Item = &E> + '_ {
        let mut out = Vec::new();
        self.visit_point(pt, |e| out.push(e));
        out.into_iter()
    }

    /// Elements whose bounds intersect `rect`, in traversal order.
    pub fn search_rect(&self, rect: Rect) -> impl Iterator<Item = &E> + '_ {
        let mut out = Vec::new();
        self.visit_rect(rect, |e| out.push(e));
        out.into_iter()
    }

    /// Every stored element, in traversal order.
    pub fn iter(&self) -> impl Iterator<Item = &E> + '_ {
        let mut out = Vec::with_capacity(self.len);
        self.visit(|_| true, |_| true, |e| out.push(e));
        out.into_iter()
    }

    /// Pre-order walk: a node's own bucket first, then TL, TR, BL, BR.
    fn visit<'a, N, M, F>(&'a self, node_matches: N, element_matches: M, mut f: F)
    where
        N: Fn(&Rect) -> bool,
        M: Fn(&Rect) -> bool,
        F: FnMut(&'a E),
    {
        let mut stack = vec![self.root];
        while let Some(idx) = stack.pop() {
            let node = self.arena.node(idx);
            if !node_matches(&node.region) {
                continue;
            }
            for e in &node.bucket {
                if element_matches(&e.bounds()) {
                    f(e);
                }
            }
            if let Some(children) = node.children {
                stack.extend(children.into_iter().rev());
            }
        }
    }

    /// Remove the element with the same id as `element`.
    ///
    /// Returns `true` if an element was removed.
    pub fn remove(&mut self, element: &E) -> bool {
        self.take(element).is_some()
    }

    /// Remove and return the element with the same id as `element`.
    ///
    /// The search descends only into nodes whose region contains the center of
    /// `element.bounds()`, checking each node's bucket before its children. An
    /// element whose center lies outside the tree region cannot be found, even
    /// if its bounds overlap the region.
    pub fn take(&mut self, element: &E) -> Option<E> {
        let center = element.bounds().center();
        let (holder, removed) = self.take_from(self.root, element.id(), center)?;
        self.len -= 1;
        self.collapse_upward(holder);
        Some(removed)
    }

    fn take_from(&mut self, idx: NodeIdx, id: &E::Id, center: Point) -> Option<(NodeIdx, E)> {
        let node = self.arena.node_mut(idx);
        if !contains_point(&node.region, center) {
            return None;
        }
        if let Some(e) = node.bucket.remove_first(|e| e.id() == id) {
            return Some((idx, e));
        }
        let children = node.children?;
        children
            .into_iter()
            .find_map(|c| self.take_from(c, id, center))
    }

    /// Revert emptied subtrees to leaves, walking up from `idx`.
    ///
    /// A quartet is dropped only when all four children are empty leaves. The
    /// walk stops at the first node that keeps children or elements.
    fn collapse_upward(&mut self, mut idx: NodeIdx) {
        loop {
            if !self.arena.node(idx).is_leaf() {
                if !self.arena.all_children_empty(idx) {
                    return;
                }
                self.arena.collapse(idx);
                trace!(region = ?self.arena.node(idx).region, "collapsed node");
            }
            let node = self.arena.node(idx);
            if !node.bucket.is_empty() {
                return;
            }
            match node.parent {
                Some(parent) => idx = parent,
                None => return,
            }
        }
    }

    /// Remove every element and subdivision. The region and config are kept.
    pub fn clear(&mut self) {
        self.arena.reset(self.root);
        self.len = 0;
    }

    /// A depth-first textual rendering of the tree shape.
    pub fn dump(&self) -> TreeDump<'_, E> {
        TreeDump::new(self)
    }

    pub(crate) fn arena(&self) -> &Arena<E> {
        &self.arena
    }

    pub(crate) fn root(&self) -> NodeIdx {
        self.root
    }
}

impl<E> Debug for QuadTree<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("QuadTree")
            .field("config", &self.config)
            .field("nodes", &self.arena.live())
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}
