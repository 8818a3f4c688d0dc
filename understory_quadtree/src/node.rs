// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arena-allocated tree nodes.

use alloc::vec::Vec;
use kurbo::Rect;

use crate::bucket::Bucket;
use crate::region::{Quadrant, Quadrants, quadrants};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeIdx(usize);

impl NodeIdx {
    const fn new(i: usize) -> Self {
        Self(i)
    }

    pub(crate) const fn get(self) -> usize {
        self.0
    }
}

#[derive(Clone, Debug)]
pub(crate) struct QuadNode<E> {
    pub(crate) region: Rect,
    pub(crate) bucket: Bucket<E>,
    /// TL, TR, BL, BR. Either all four exist or none do.
    pub(crate) children: Option<[NodeIdx; 4]>,
    /// Back-link used only to walk upward during collapse.
    pub(crate) parent: Option<NodeIdx>,
}

impl<E> QuadNode<E> {
    fn new(region: Rect, parent: Option<NodeIdx>) -> Self {
        Self {
            region,
            bucket: Bucket::new(),
            children: None,
            parent,
        }
    }

    #[inline]
    pub(crate) fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Childless with an empty bucket.
    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.is_leaf() && self.bucket.is_empty()
    }

    #[inline]
    pub(crate) fn child(&self, q: Quadrant) -> Option<NodeIdx> {
        self.children.map(|c| c[q.index()])
    }
}

/// Node storage with slot recycling.
#[derive(Clone, Debug)]
pub(crate) struct Arena<E> {
    slots: Vec<Option<QuadNode<E>>>,
    free_list: Vec<usize>,
}

impl<E> Arena<E> {
    pub(crate) fn with_root(region: Rect) -> (Self, NodeIdx) {
        let mut arena = Self {
            slots: Vec::new(),
            free_list: Vec::new(),
        };
        let root = arena.alloc(QuadNode::new(region, None));
        (arena, root)
    }

    fn alloc(&mut self, node: QuadNode<E>) -> NodeIdx {
        if let Some(i) = self.free_list.pop() {
            self.slots[i] = Some(node);
            NodeIdx::new(i)
        } else {
            self.slots.push(Some(node));
            NodeIdx::new(self.slots.len() - 1)
        }
    }

    fn free(&mut self, idx: NodeIdx) {
        if let Some(slot) = self.slots.get_mut(idx.get())
            && slot.take().is_some()
        {
            self.free_list.push(idx.get());
        }
    }

    /// Live node at `idx`.
    ///
    /// Indices handed out by the tree always refer to live nodes; a stale index
    /// is an internal bug.
    #[inline]
    pub(crate) fn node(&self, idx: NodeIdx) -> &QuadNode<E> {
        self.slots[idx.get()]
            .as_ref()
            .expect("live quadtree node")
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, idx: NodeIdx) -> &mut QuadNode<E> {
        self.slots[idx.get()]
            .as_mut()
            .expect("live quadtree node")
    }

    /// Number of live nodes.
    pub(crate) fn live(&self) -> usize {
        self.slots.len() - self.free_list.len()
    }

    /// Give `idx` its four children unless it already has them.
    ///
    /// Returns the quartet and whether it was created by this call.
    pub(crate) fn subdivide(&mut self, idx: NodeIdx) -> ([NodeIdx; 4], bool) {
        if let Some(children) = self.node(idx).children {
            return (children, false);
        }
        let regions = quadrants(&self.node(idx).region);
        let children = regions.map(|r| self.alloc(QuadNode::new(r, Some(idx))));
        self.node_mut(idx).children = Some(children);
        (children, true)
    }

    /// Quadrants of `idx` whose child region intersects `bounds`.
    pub(crate) fn intersecting_children(&self, children: [NodeIdx; 4], bounds: &Rect) -> Quadrants {
        let regions = children.map(|c| self.node(c).region);
        Quadrants::intersecting(&regions, bounds)
    }

    /// True when every child of `idx` is absent or empty.
    pub(crate) fn all_children_empty(&self, idx: NodeIdx) -> bool {
        Quadrant::ALL
            .iter()
            .map(|&q| self.node(idx).child(q))
            .fold(true, |acc, child| {
                acc && child.is_none_or(|c| self.node(c).is_empty())
            })
    }

    /// Drop the children of `idx`, reverting it to a leaf.
    ///
    /// The children must be empty leaves.
    pub(crate) fn collapse(&mut self, idx: NodeIdx) {
        if let Some(children) = self.node_mut(idx).children.take() {
            for c in children {
                debug_assert!(self.node(c).is_empty(), "collapsing a non-empty child");
                self.free(c);
            }
        }
    }

    /// Drop every node except `root` and empty its bucket.
    pub(crate) fn reset(&mut self, root: NodeIdx) {
        let region = self.node(root).region;
        self.slots.clear();
        self.free_list.clear();
        let new_root = self.alloc(QuadNode::new(region, None));
        debug_assert_eq!(new_root, root, "root keeps slot zero");
    }
}
