// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A mutex-guarded quadtree for sharing across threads.

use alloc::vec::Vec;

use kurbo::{Point, Rect};
use parking_lot::Mutex;

use crate::config::{ConfigError, QuadTreeConfig};
use crate::tree::{Insertion, QuadTree, QuadTreeElement};

/// A [`QuadTree`] behind a single lock.
///
/// Every call holds the lock for its whole duration, so at most one operation
/// runs at a time. Queries return clones so no borrow outlives the lock.
///
/// ```
/// use std::sync::Arc;
/// use kurbo::{Point, Rect};
/// use understory_quadtree::{QuadTreeElement, SyncQuadTree};
///
/// #[derive(Clone)]
/// struct Pin(u64, Point);
///
/// impl QuadTreeElement for Pin {
///     type Id = u64;
///     fn id(&self) -> &u64 {
///         &self.0
///     }
///     fn bounds(&self) -> Rect {
///         Rect::from_center_size(self.1, (1.0, 1.0))
///     }
/// }
///
/// let tree = Arc::new(SyncQuadTree::new(Rect::new(0.0, 0.0, 64.0, 64.0)));
/// let handles: Vec<_> = (0..4_u64)
///     .map(|i| {
///         let tree = Arc::clone(&tree);
///         std::thread::spawn(move || {
///             tree.insert(Pin(i, Point::new(8.0 + 16.0 * i as f64, 8.0)));
///         })
///     })
///     .collect();
/// for h in handles {
///     h.join().unwrap();
/// }
/// assert_eq!(tree.len(), 4);
/// assert_eq!(tree.search_point(Point::new(24.0, 8.0)).len(), 1);
/// ```
pub struct SyncQuadTree<E> {
    inner: Mutex<QuadTree<E>>,
}

impl<E> core::fmt::Debug for SyncQuadTree<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SyncQuadTree").finish_non_exhaustive()
    }
}

impl<E: QuadTreeElement> SyncQuadTree<E> {
    /// Create an empty tree covering `region` with the default configuration.
    pub fn new(region: Rect) -> Self {
        Self::from(QuadTree::new(region))
    }

    /// Create an empty tree covering `region`, validating `config` first.
    pub fn with_config(region: Rect, config: QuadTreeConfig) -> Result<Self, ConfigError> {
        QuadTree::with_config(region, config).map(Self::from)
    }

    /// See [`QuadTree::insert`].
    pub fn insert(&self, element: E) -> Insertion {
        self.inner.lock().insert(element)
    }

    /// See [`QuadTree::remove`].
    pub fn remove(&self, element: &E) -> bool {
        self.inner.lock().remove(element)
    }

    /// See [`QuadTree::take`].
    pub fn take(&self, element: &E) -> Option<E> {
        self.inner.lock().take(element)
    }

    /// See [`QuadTree::len`].
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// See [`QuadTree::is_empty`].
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// See [`QuadTree::clear`].
    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    /// Run `f` with shared access to the tree.
    pub fn with<R>(&self, f: impl FnOnce(&QuadTree<E>) -> R) -> R {
        f(&self.inner.lock())
    }

    /// Run `f` with exclusive access to the tree.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut QuadTree<E>) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// Unwrap the inner tree.
    pub fn into_inner(self) -> QuadTree<E> {
        self.inner.into_inner()
    }
}

impl<E: QuadTreeElement + Clone> SyncQuadTree<E> {
    /// See [`QuadTree::search_point`].
    pub fn search_point(&self, pt: Point) -> Vec<E> {
        self.inner.lock().search_point(pt).cloned().collect()
    }

    /// See [`QuadTree::search_rect`].
    pub fn search_rect(&self, rect: Rect) -> Vec<E> {
        self.inner.lock().search_rect(rect).cloned().collect()
    }
}

impl<E> From<QuadTree<E>> for SyncQuadTree<E> {
    fn from(tree: QuadTree<E>) -> Self {
        Self {
            inner: Mutex::new(tree),
        }
    }
}
