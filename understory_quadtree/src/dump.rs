// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Depth-first textual rendering of a tree's shape.

use core::fmt;

use kurbo::Rect;

use crate::node::NodeIdx;
use crate::region::{Quadrant, Quadrants};
use crate::tree::{QuadTree, QuadTreeElement};

/// [`Display`](fmt::Display) adapter returned by [`QuadTree::dump`].
///
/// Each node is one line: its region, the bounds of the elements in its own
/// bucket, and the set of child quadrants whose subtree holds anything.
/// Children follow their parent, indented by two spaces per level.
///
/// ```text
/// (0, 0)-(4, 4) elements=[] populated=TL
///   ├── TL: (0, 0)-(2, 2) elements=[(0.5, 0.5)-(1, 1)] populated=-
///   ├── TR: (2, 0)-(4, 2) elements=[] populated=-
///   ├── BL: (0, 2)-(2, 4) elements=[] populated=-
///   └── BR: (2, 2)-(4, 4) elements=[] populated=-
/// ```
pub struct TreeDump<'a, E> {
    tree: &'a QuadTree<E>,
}

impl<E> fmt::Debug for TreeDump<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeDump").finish_non_exhaustive()
    }
}

impl<'a, E: QuadTreeElement> TreeDump<'a, E> {
    pub(crate) fn new(tree: &'a QuadTree<E>) -> Self {
        Self { tree }
    }

    fn write_node(
        &self,
        f: &mut fmt::Formatter<'_>,
        idx: NodeIdx,
        level: usize,
        label: Option<Quadrant>,
    ) -> fmt::Result {
        let arena = self.tree.arena();
        let node = arena.node(idx);

        for _ in 0..level {
            f.write_str("  ")?;
        }
        match label {
            Some(Quadrant::BottomRight) => write!(f, "└── BR: ")?,
            Some(q) => write!(f, "├── {}: ", q.label())?,
            None => {}
        }
        write_rect(f, &node.region)?;

        f.write_str(" elements=[")?;
        for (i, e) in node.bucket.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write_rect(f, &e.bounds())?;
        }
        f.write_str("] populated=")?;

        let populated = Quadrant::ALL
            .into_iter()
            .filter(|&q| node.child(q).is_some_and(|c| !arena.node(c).is_empty()))
            .fold(Quadrants::empty(), |acc, q| acc | q.flag());
        if populated.is_empty() {
            f.write_str("-")?;
        } else {
            for (i, q) in populated.quadrants().enumerate() {
                if i > 0 {
                    f.write_str("|")?;
                }
                f.write_str(q.label())?;
            }
        }
        f.write_str("\n")?;

        if let Some(children) = node.children {
            for (q, c) in Quadrant::ALL.into_iter().zip(children) {
                self.write_node(f, c, level + 1, Some(q))?;
            }
        }
        Ok(())
    }
}

fn write_rect(f: &mut fmt::Formatter<'_>, r: &Rect) -> fmt::Result {
    write!(f, "({}, {})-({}, {})", r.x0, r.y0, r.x1, r.y1)
}

impl<E: QuadTreeElement> fmt::Display for TreeDump<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_node(f, self.tree.root(), 0, None)
    }
}
