// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered element container held directly at one tree node.

use alloc::vec::Vec;
use core::fmt::Debug;

/// Ordered, mutable list of elements with predicate-based removal.
///
/// Insertion order is preserved by every operation, including removals.
///
/// ```
/// use understory_quadtree::Bucket;
///
/// let mut b: Bucket<u32> = [1, 2, 3, 2].into_iter().collect();
/// assert_eq!(b.remove_first(|v| *v == 2), Some(2));
/// assert_eq!(b.remove_all(|v| *v > 1), [3, 2]);
/// assert_eq!(b.iter().copied().collect::<Vec<_>>(), [1]);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Bucket<E> {
    items: Vec<E>,
}

impl<E> Default for Bucket<E> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<E: Debug> Debug for Bucket<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(&self.items).finish()
    }
}

impl<E> Bucket<E> {
    /// Create an empty bucket.
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append an element at the end.
    #[inline]
    pub fn push(&mut self, element: E) {
        self.items.push(element);
    }

    /// Remove and return the first element matching `pred`.
    pub fn remove_first<F: FnMut(&E) -> bool>(&mut self, pred: F) -> Option<E> {
        let pos = self.items.iter().position(pred)?;
        Some(self.items.remove(pos))
    }

    /// Remove and return every element matching `pred`, in bucket order.
    pub fn remove_all<F: FnMut(&E) -> bool>(&mut self, mut pred: F) -> Vec<E> {
        let (removed, kept): (Vec<E>, Vec<E>) = self.items.drain(..).partition(|e| pred(e));
        self.items = kept;
        removed
    }

    /// Remove and return the first element.
    pub fn pop_front(&mut self) -> Option<E> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.items.remove(0))
        }
    }

    /// Remove and return the last element.
    pub fn pop_back(&mut self) -> Option<E> {
        self.items.pop()
    }

    /// Remove every element, returning them in order.
    pub fn clear(&mut self) -> Vec<E> {
        core::mem::take(&mut self.items)
    }

    /// First element, if any.
    pub fn first(&self) -> Option<&E> {
        self.items.first()
    }

    /// Last element, if any.
    pub fn last(&self) -> Option<&E> {
        self.items.last()
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if the bucket holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate elements in insertion order.
    pub fn iter(&self) -> core::slice::Iter<'_, E> {
        self.items.iter()
    }
}

impl<E> FromIterator<E> for Bucket<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<E> Extend<E> for Bucket<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<'a, E> IntoIterator for &'a Bucket<E> {
    type Item = &'a E;
    type IntoIter = core::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<E> IntoIterator for Bucket<E> {
    type Item = E;
    type IntoIter = alloc::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
