// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Quadtree: a Kurbo-native region quadtree.
//!
//! Understory Quadtree indexes elements with axis-aligned bounds for point and rectangle queries.
//!
//! - Insert elements that expose an identity and a bounding [`kurbo::Rect`].
//! - Query by point or intersecting rectangle.
//! - Remove by identity; subtrees that become empty collapse back into leaves.
//!
//! Nodes subdivide lazily into four equal quadrants. An element is stored once, at the
//! coarsest node whose children cannot claim it unambiguously: if it intersects two or more
//! quadrants it stays with the parent. Subdivision stops at [`QuadTreeConfig::max_depth`] or
//! once a node is no larger than [`QuadTreeConfig::minimum_quad_size`] in both dimensions.
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_quadtree::{Insertion, QuadTree, QuadTreeElement};
//!
//! struct Label {
//!     name: &'static str,
//!     bounds: Rect,
//! }
//!
//! impl QuadTreeElement for Label {
//!     type Id = str;
//!     fn id(&self) -> &str {
//!         self.name
//!     }
//!     fn bounds(&self) -> Rect {
//!         self.bounds
//!     }
//! }
//!
//! let mut tree = QuadTree::new(Rect::new(0.0, 0.0, 100.0, 100.0));
//! tree.insert(Label { name: "a", bounds: Rect::new(10.0, 10.0, 20.0, 20.0) });
//! // Straddles the center, so it stays at the root.
//! let placed = tree.insert(Label { name: "b", bounds: Rect::new(40.0, 40.0, 60.0, 60.0) });
//! assert_eq!(placed, Insertion::Stored { depth: 0 });
//!
//! let hits: Vec<_> = tree.search_rect(Rect::new(15.0, 15.0, 45.0, 45.0)).map(|l| l.name).collect();
//! assert_eq!(hits, ["b", "a"]);
//!
//! let probe = Label { name: "a", bounds: Rect::new(10.0, 10.0, 20.0, 20.0) };
//! assert!(tree.remove(&probe));
//! assert_eq!(tree.search_point(Point::new(15.0, 15.0)).count(), 0);
//! ```
//!
//! ## Boundary conventions
//!
//! Rectangle intersection is boundary-inclusive and point containment is half-open; see
//! [`region`] for the details and their effect on placement.
//!
//! Removal locates an element by the center of its bounds, so an element whose center lies
//! outside the tree region cannot be removed even though it overlaps the region.
//!
//! ## Features
//!
//! - `std` *(default)*: forwards to Kurbo's `std` feature.
//! - `libm`: forwards to Kurbo's `libm` feature for `no_std` builds.
//! - `serde`: `Serialize`/`Deserialize` for [`QuadTreeConfig`].
//! - `sync`: `SyncQuadTree`, a mutex-guarded tree for sharing across threads.
//!
//! ### Float semantics
//!
//! This crate assumes no NaNs for floating-point coordinates. Debug builds may assert.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod bucket;
pub mod config;
pub mod dump;
mod node;
pub mod region;
#[cfg(feature = "sync")]
pub mod sync;
pub mod tree;

pub use bucket::Bucket;
pub use config::{ConfigError, QuadTreeConfig};
pub use dump::TreeDump;
pub use region::{Placement, Quadrant, Quadrants};
#[cfg(feature = "sync")]
pub use sync::SyncQuadTree;
pub use tree::{Insertion, QuadTree, QuadTreeElement};
