//! Doubly-linked list over a slab arena.
//!
//! Nodes live in a [`slab::Slab`] owned by the list and refer to their
//! neighbours by slot [`Link`]. The slab is the sole owner of every node;
//! `prev` and `next` are plain back- and forward-references used for
//! traversal and O(1) relinking, never for lifetime management.
//!
//! # Invariants
//!
//! - `len == 0` ⟺ `head` is `NONE` ⟺ `tail` is `NONE`
//! - walking `next` from `head` reaches `tail` after `len - 1` steps
//! - walking `prev` from `tail` reaches `head` after `len - 1` steps
//! - for every node `n` with a successor, `n.next.prev == n`
//!
//! # Example
//!
//! ```
//! use linear_collections::DoublyLinkedList;
//!
//! let mut list: DoublyLinkedList<i32> = [10, 30, 20].into_iter().collect();
//! list.push(0);
//! list.push_back(40);
//! assert_eq!(list.to_string(), "[0 <-> 10 <-> 30 <-> 20 <-> 40]");
//!
//! assert_eq!(list.pop(), Ok(0));
//! assert_eq!(list.pop_back(), Ok(40));
//!
//! list.bubble_sort(|v| *v);
//! assert_eq!(list.to_string(), "[10 <-> 20 <-> 30]");
//! ```

use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;

use log::trace;
use slab::Slab;

use crate::node::DoubleNode;
use crate::{Error, Linear, Link, Result};

/// A doubly-linked list.
///
/// # Type Parameters
///
/// - `T`: Element type
/// - `L`: Link width (default `u32`); bounds the number of live nodes
pub struct DoublyLinkedList<T, L: Link = u32> {
    nodes: Slab<DoubleNode<T, L>>,
    head: L,
    tail: L,
    len: usize,
}

impl<T, L: Link> Default for DoublyLinkedList<T, L> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Core operations
// =============================================================================

impl<T, L: Link> DoublyLinkedList<T, L> {
    /// Creates an empty list.
    #[inline]
    pub fn new() -> Self {
        Self {
            nodes: Slab::new(),
            head: L::NONE,
            tail: L::NONE,
            len: 0,
        }
    }

    /// Creates an empty list with room for `capacity` nodes before the
    /// arena reallocates.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            head: L::NONE,
            tail: L::NONE,
            len: 0,
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    fn node(&self, link: L) -> &DoubleNode<T, L> {
        &self.nodes[link.slot()]
    }

    #[inline]
    fn node_mut(&mut self, link: L) -> &mut DoubleNode<T, L> {
        &mut self.nodes[link.slot()]
    }

    /// Places `value` in the arena as an unlinked node.
    ///
    /// # Panics
    ///
    /// Panics if the arena slot cannot be encoded in `L`.
    fn alloc(&mut self, value: T) -> L {
        let entry = self.nodes.vacant_entry();
        let slot = entry.key();
        assert!(L::fits(slot), "list exceeds link capacity");
        entry.insert(DoubleNode::new(value));
        L::from_slot(slot)
    }

    /// Inserts `item` at the front. O(1).
    #[inline]
    pub fn push(&mut self, item: T) {
        let link = self.alloc(item);
        self.link_front(link);
    }

    /// Inserts `item` at the back. O(1).
    #[inline]
    pub fn push_back(&mut self, item: T) {
        let link = self.alloc(item);
        self.link_back(link);
    }

    /// Removes and returns the front element. O(1).
    ///
    /// # Errors
    ///
    /// [`Error::Underflow`] if the list is empty.
    #[inline]
    pub fn pop(&mut self) -> Result<T> {
        if self.head.is_none() {
            return Err(Error::underflow("list"));
        }
        Ok(self.unlink(self.head))
    }

    /// Removes and returns the back element. O(1).
    ///
    /// # Errors
    ///
    /// [`Error::Underflow`] if the list is empty.
    #[inline]
    pub fn pop_back(&mut self) -> Result<T> {
        if self.tail.is_none() {
            return Err(Error::underflow("list"));
        }
        Ok(self.unlink(self.tail))
    }

    /// Returns a reference to the front element.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        if self.head.is_none() {
            None
        } else {
            Some(&self.node(self.head).value)
        }
    }

    /// Returns a reference to the back element.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        if self.tail.is_none() {
            None
        } else {
            Some(&self.node(self.tail).value)
        }
    }

    /// Returns the element at `index` without removing it. O(n).
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`] unless `index < len`.
    #[inline]
    pub fn find_at(&self, index: usize) -> Result<&T> {
        let link = self.link_at(index)?;
        Ok(&self.node(link).value)
    }

    /// Exchanges the values at positions `i` and `j`.
    ///
    /// Only adjacent positions (`|i - j| == 1`) are accepted; node identity
    /// is unchanged, only the values move.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if the positions are not adjacent or
    /// either one is out of bounds.
    pub fn swap(&mut self, i: usize, j: usize) -> Result<()> {
        let (lo, hi) = if i <= j { (i, j) } else { (j, i) };
        if hi - lo != 1 || hi >= self.len {
            return Err(Error::InvalidArgument {
                reason: "swap positions must be adjacent and in bounds",
            });
        }

        let first = self.link_at(lo)?;
        let second = self.node(first).next;
        self.swap_values(first, second);
        trace!("swapped list positions {lo} and {hi}");
        Ok(())
    }

    /// Sorts the list ascending by `key` with bubble sort. O(n²).
    ///
    /// Adjacent values are exchanged in place; node identities do not move.
    /// Equal keys are never exchanged, so the sort is stable.
    pub fn bubble_sort<K, F>(&mut self, mut key: F)
    where
        K: PartialOrd,
        F: FnMut(&T) -> K,
    {
        if self.len < 2 {
            return;
        }

        for pass in 0..self.len {
            let mut current = self.head;
            let mut exchanges = 0usize;
            for _ in 0..self.len - pass - 1 {
                let next = self.node(current).next;
                if key(&self.node(current).value) > key(&self.node(next).value) {
                    self.swap_values(current, next);
                    exchanges += 1;
                }
                current = next;
            }
            trace!("bubble sort pass {pass}: {exchanges} exchanges");
        }
    }

    /// Removes and returns the element at `index`. O(n) to reach it, O(1)
    /// to unlink.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`] unless `index < len`.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        let link = self.link_at(index)?;
        Ok(self.unlink(link))
    }

    /// Removes and returns the first element matching `pred`.
    ///
    /// Returns `None` if nothing matches; the list is unchanged.
    pub fn remove_first<P>(&mut self, pred: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        let link = self.position(pred)?;
        trace!("removing node in slot {} by predicate", link.slot());
        Some(self.unlink(link))
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = L::NONE;
        self.tail = L::NONE;
        self.len = 0;
    }

    // ========================================================================
    // Link surgery
    // ========================================================================

    fn link_front(&mut self, link: L) {
        let head = self.head;
        let node = self.node_mut(link);
        node.next = head;
        node.prev = L::NONE;

        if head.is_some() {
            self.node_mut(head).prev = link;
        } else {
            self.tail = link;
        }

        self.head = link;
        self.len += 1;
    }

    fn link_back(&mut self, link: L) {
        let tail = self.tail;
        let node = self.node_mut(link);
        node.prev = tail;
        node.next = L::NONE;

        if tail.is_some() {
            self.node_mut(tail).next = link;
        } else {
            self.head = link;
        }

        self.tail = link;
        self.len += 1;
    }

    fn link_before(&mut self, before: L, link: L) {
        let prev = self.node(before).prev;
        let node = self.node_mut(link);
        node.next = before;
        node.prev = prev;

        self.node_mut(before).prev = link;

        if prev.is_some() {
            self.node_mut(prev).next = link;
        } else {
            self.head = link;
        }

        self.len += 1;
    }

    /// Detaches `link` from its neighbours and releases its slot.
    fn unlink(&mut self, link: L) -> T {
        let DoubleNode { value, prev, next } = self.nodes.remove(link.slot());

        if prev.is_some() {
            self.node_mut(prev).next = next;
        } else {
            self.head = next;
        }

        if next.is_some() {
            self.node_mut(next).prev = prev;
        } else {
            self.tail = prev;
        }

        self.len -= 1;
        value
    }

    fn swap_values(&mut self, a: L, b: L) {
        if let Some((x, y)) = self.nodes.get2_mut(a.slot(), b.slot()) {
            core::mem::swap(&mut x.value, &mut y.value);
        }
    }

    fn link_at(&self, index: usize) -> Result<L> {
        if index >= self.len {
            return Err(Error::out_of_bounds(index, self.len));
        }

        let mut link = self.head;
        for _ in 0..index {
            link = self.node(link).next;
        }
        Ok(link)
    }

    /// Returns the link of the first node whose value matches `pred`.
    pub(crate) fn position<P>(&self, mut pred: P) -> Option<L>
    where
        P: FnMut(&T) -> bool,
    {
        let mut link = self.head;
        while link.is_some() {
            let node = self.node(link);
            if pred(&node.value) {
                return Some(link);
            }
            link = node.next;
        }
        None
    }

    /// Inserts `value` immediately before the node at `before`, relinking
    /// both neighbours. O(1).
    pub(crate) fn splice_before(&mut self, before: L, value: T) {
        let link = self.alloc(value);
        self.link_before(before, link);
        trace!(
            "spliced slot {} before slot {}",
            link.slot(),
            before.slot()
        );
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    /// Returns an iterator over references, front to back.
    ///
    /// The iterator is double-ended: `.rev()` walks the `prev` links from
    /// the tail.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, L> {
        Iter {
            nodes: &self.nodes,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    /// Returns an iterator over mutable references, front to back.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T, L> {
        IterMut {
            nodes: &mut self.nodes,
            front: self.head,
            back: self.tail,
            remaining: self.len,
            _marker: PhantomData,
        }
    }
}

impl<T: PartialEq, L: Link> DoublyLinkedList<T, L> {
    /// Returns the first element equal to `value`. O(n).
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if no element matches.
    pub fn find(&self, value: &T) -> Result<&T> {
        self.iter().find(|v| *v == value).ok_or(Error::NotFound)
    }
}

impl<T: Clone, L: Link> Clone for DoublyLinkedList<T, L> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug, L: Link> fmt::Debug for DoublyLinkedList<T, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display, L: Link> fmt::Display for DoublyLinkedList<T, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" <-> ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

/// Appends in iteration order.
impl<T, L: Link> FromIterator<T> for DoublyLinkedList<T, L> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut list = Self::with_capacity(iter.size_hint().0);
        list.extend(iter);
        list
    }
}

impl<T, L: Link> Extend<T> for DoublyLinkedList<T, L> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T: PartialEq, L: Link> Linear<T> for DoublyLinkedList<T, L> {
    type Query = T;

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn insert(&mut self, item: T) {
        self.push_back(item);
    }

    #[inline]
    fn remove(&mut self) -> Result<T> {
        self.pop_back()
    }

    #[inline]
    fn find(&self, key: &T) -> Result<&T> {
        DoublyLinkedList::find(self, key)
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over references to list elements.
pub struct Iter<'a, T, L: Link> {
    nodes: &'a Slab<DoubleNode<T, L>>,
    front: L,
    back: L,
    remaining: usize,
}

impl<'a, T, L: Link> Iterator for Iter<'a, T, L> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let nodes = self.nodes;
        let node = &nodes[self.front.slot()];
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, L: Link> DoubleEndedIterator for Iter<'_, T, L> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let nodes = self.nodes;
        let node = &nodes[self.back.slot()];
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T, L: Link> ExactSizeIterator for Iter<'_, T, L> {}
impl<T, L: Link> FusedIterator for Iter<'_, T, L> {}

impl<T, L: Link> Clone for Iter<'_, T, L> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

/// Iterator over mutable references to list elements.
pub struct IterMut<'a, T, L: Link> {
    nodes: &'a mut Slab<DoubleNode<T, L>>,
    front: L,
    back: L,
    remaining: usize,
    _marker: PhantomData<&'a mut T>,
}

impl<'a, T, L: Link> Iterator for IterMut<'a, T, L> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let node = &mut self.nodes[self.front.slot()];
        self.front = node.next;
        self.remaining -= 1;

        // Safety: each slot is yielded at most once (`remaining` counts the
        // nodes between `front` and `back` inclusive), so no two returned
        // references alias, and the slab is mutably borrowed for 'a.
        Some(unsafe { &mut *(&mut node.value as *mut T) })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, L: Link> DoubleEndedIterator for IterMut<'_, T, L> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let node = &mut self.nodes[self.back.slot()];
        self.back = node.prev;
        self.remaining -= 1;

        // Safety: see `next`.
        Some(unsafe { &mut *(&mut node.value as *mut T) })
    }
}

impl<T, L: Link> ExactSizeIterator for IterMut<'_, T, L> {}
impl<T, L: Link> FusedIterator for IterMut<'_, T, L> {}

impl<'a, T, L: Link> IntoIterator for &'a DoublyLinkedList<T, L> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, L>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, L: Link> IntoIterator for &'a mut DoublyLinkedList<T, L> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T, L>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Owning iterator, front to back.
pub struct IntoIter<T, L: Link> {
    list: DoublyLinkedList<T, L>,
}

impl<T, L: Link> Iterator for IntoIter<T, L> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T, L: Link> DoubleEndedIterator for IntoIter<T, L> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back().ok()
    }
}

impl<T, L: Link> ExactSizeIterator for IntoIter<T, L> {}
impl<T, L: Link> FusedIterator for IntoIter<T, L> {}

impl<T, L: Link> IntoIterator for DoublyLinkedList<T, L> {
    type Item = T;
    type IntoIter = IntoIter<T, L>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

// =============================================================================
// Test support
// =============================================================================

#[cfg(test)]
impl<T, L: Link> DoublyLinkedList<T, L> {
    /// Walks the chain both ways and panics on any broken invariant.
    pub(crate) fn assert_links(&self) {
        assert_eq!(self.len, self.nodes.len(), "len disagrees with arena");
        assert_eq!(self.len == 0, self.head.is_none());
        assert_eq!(self.len == 0, self.tail.is_none());
        if self.len == 0 {
            return;
        }

        assert!(self.node(self.head).prev.is_none(), "head has a prev");
        assert!(self.node(self.tail).next.is_none(), "tail has a next");

        let mut forward = 0;
        let mut link = self.head;
        let mut last = L::NONE;
        while link.is_some() {
            let node = self.node(link);
            assert!(node.prev == last, "broken back-reference");
            last = link;
            link = node.next;
            forward += 1;
        }
        assert!(last == self.tail, "forward walk did not end at tail");
        assert_eq!(forward, self.len);

        let mut backward = 0;
        let mut link = self.tail;
        while link.is_some() {
            link = self.node(link).prev;
            backward += 1;
        }
        assert_eq!(backward, self.len);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values<T: Copy, L: Link>(list: &DoublyLinkedList<T, L>) -> Vec<T> {
        list.iter().copied().collect()
    }

    fn values_rev<T: Copy, L: Link>(list: &DoublyLinkedList<T, L>) -> Vec<T> {
        list.iter().rev().copied().collect()
    }

    #[test]
    fn new_list_is_empty() {
        let list: DoublyLinkedList<u64> = DoublyLinkedList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(list.front().is_none());
        assert!(list.back().is_none());
        list.assert_links();
    }

    #[test]
    fn push_into_empty_sets_head_and_tail() {
        let mut list: DoublyLinkedList<u64> = DoublyLinkedList::new();
        list.push(1);
        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.back(), Some(&1));
        list.assert_links();

        let mut list: DoublyLinkedList<u64> = DoublyLinkedList::new();
        list.push_back(1);
        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.back(), Some(&1));
        list.assert_links();
    }

    #[test]
    fn push_both_ends() {
        let mut list: DoublyLinkedList<i32> = [10, 30, 20].into_iter().collect();
        list.push(0);
        list.push_back(40);

        assert_eq!(values(&list), vec![0, 10, 30, 20, 40]);
        assert_eq!(values_rev(&list), vec![40, 20, 30, 10, 0]);
        list.assert_links();

        assert_eq!(list.pop(), Ok(0));
        assert_eq!(list.pop_back(), Ok(40));
        assert_eq!(values(&list), vec![10, 30, 20]);
        list.assert_links();
    }

    #[test]
    fn pop_singleton_clears_both_ends() {
        let mut list: DoublyLinkedList<u64> = DoublyLinkedList::new();
        list.push(7);
        assert_eq!(list.pop(), Ok(7));
        list.assert_links();

        list.push_back(8);
        assert_eq!(list.pop_back(), Ok(8));
        list.assert_links();
    }

    #[test]
    fn pop_empty_underflows() {
        let mut list: DoublyLinkedList<u64> = DoublyLinkedList::new();
        assert_eq!(list.pop(), Err(Error::Underflow { structure: "list" }));
        assert_eq!(list.pop_back(), Err(Error::Underflow { structure: "list" }));
    }

    #[test]
    fn find_at_and_find() {
        let list: DoublyLinkedList<_> = ["a", "b", "c"].into_iter().collect();
        assert_eq!(list.find_at(0), Ok(&"a"));
        assert_eq!(list.find_at(2), Ok(&"c"));
        assert_eq!(
            list.find_at(3),
            Err(Error::IndexOutOfBounds { index: 3, len: 3 })
        );
        assert_eq!(list.find(&"b"), Ok(&"b"));
        assert_eq!(list.find(&"z"), Err(Error::NotFound));
    }

    #[test]
    fn swap_adjacent_either_order() {
        let mut list: DoublyLinkedList<_> = [1, 2, 3, 4].into_iter().collect();
        list.swap(1, 2).unwrap();
        assert_eq!(values(&list), vec![1, 3, 2, 4]);
        list.swap(3, 2).unwrap();
        assert_eq!(values(&list), vec![1, 3, 4, 2]);
        list.assert_links();
    }

    #[test]
    fn swap_rejects_non_adjacent_and_out_of_range() {
        let mut list: DoublyLinkedList<_> = [1, 2, 3].into_iter().collect();
        for (i, j) in [(0, 2), (1, 1), (2, 3), (5, 6), (usize::MAX, 0)] {
            assert!(
                matches!(list.swap(i, j), Err(Error::InvalidArgument { .. })),
                "swap({i}, {j}) should fail"
            );
        }
        assert_eq!(values(&list), vec![1, 2, 3]);
    }

    #[test]
    fn swap_keeps_node_identity() {
        let mut list: DoublyLinkedList<_> = [1, 2].into_iter().collect();
        let head = list.head;
        let tail = list.tail;
        list.swap(0, 1).unwrap();
        assert!(list.head == head && list.tail == tail);
        assert_eq!(values(&list), vec![2, 1]);
    }

    #[test]
    fn bubble_sort_orders_by_key() {
        let mut list: DoublyLinkedList<i32> = [5, 1, 4, 2, 3].into_iter().collect();
        list.bubble_sort(|v| *v);
        assert_eq!(values(&list), vec![1, 2, 3, 4, 5]);
        list.assert_links();

        list.bubble_sort(|v| -*v);
        assert_eq!(values(&list), vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn bubble_sort_is_stable() {
        let mut list: DoublyLinkedList<(u8, char)> =
            [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')].into_iter().collect();
        list.bubble_sort(|pair| pair.0);
        assert_eq!(values(&list), vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }

    #[test]
    fn bubble_sort_small_lists_are_noops() {
        let mut empty: DoublyLinkedList<i32> = DoublyLinkedList::new();
        empty.bubble_sort(|v| *v);
        assert!(empty.is_empty());

        let mut one: DoublyLinkedList<i32> = [9].into_iter().collect();
        one.bubble_sort(|v| *v);
        assert_eq!(values(&one), vec![9]);
    }

    #[test]
    fn remove_at_middle_and_ends() {
        let mut list: DoublyLinkedList<_> = [1, 2, 3, 4, 5].into_iter().collect();
        assert_eq!(list.remove_at(2), Ok(3));
        list.assert_links();
        assert_eq!(list.remove_at(0), Ok(1));
        list.assert_links();
        assert_eq!(list.remove_at(2), Ok(5));
        list.assert_links();
        assert_eq!(values(&list), vec![2, 4]);
        assert_eq!(
            list.remove_at(2),
            Err(Error::IndexOutOfBounds { index: 2, len: 2 })
        );
    }

    #[test]
    fn remove_first_by_predicate() {
        let mut list: DoublyLinkedList<_> = [1, 2, 3, 2].into_iter().collect();
        assert_eq!(list.remove_first(|v| *v == 2), Some(2));
        assert_eq!(values(&list), vec![1, 3, 2]);
        assert_eq!(list.remove_first(|v| *v == 9), None);
        assert_eq!(list.len(), 3);
        list.assert_links();
    }

    #[test]
    fn splice_before_head_and_interior() {
        let mut list: DoublyLinkedList<_> = [10, 30].into_iter().collect();
        let thirty = list.position(|v| *v == 30).unwrap();
        list.splice_before(thirty, 20);
        assert_eq!(values(&list), vec![10, 20, 30]);
        list.assert_links();

        let head = list.head;
        list.splice_before(head, 0);
        assert_eq!(values(&list), vec![0, 10, 20, 30]);
        assert_eq!(values_rev(&list), vec![30, 20, 10, 0]);
        list.assert_links();
    }

    #[test]
    fn slots_are_reused() {
        let mut list: DoublyLinkedList<u64> = DoublyLinkedList::with_capacity(4);
        for i in 0..4 {
            list.push_back(i);
        }
        list.pop().unwrap();
        list.push_back(99);
        // Slot 0 was freed by the pop and handed back out.
        assert_eq!(list.tail.slot(), 0);
        assert_eq!(values(&list), vec![1, 2, 3, 99]);
        list.assert_links();
    }

    #[test]
    fn iter_meets_in_the_middle() {
        let list: DoublyLinkedList<_> = (1..=4).collect();
        let mut iter = list.iter();
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&4));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next_back(), Some(&3));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn iter_mut_updates_in_place() {
        let mut list: DoublyLinkedList<_> = (1..=3).collect();
        for v in list.iter_mut() {
            *v *= 10;
        }
        assert_eq!(values(&list), vec![10, 20, 30]);

        if let Some(last) = list.iter_mut().next_back() {
            *last = 0;
        }
        assert_eq!(values(&list), vec![10, 20, 0]);
    }

    #[test]
    fn into_iter_both_ends() {
        let list: DoublyLinkedList<_> = (1..=4).collect();
        let mut iter = list.into_iter();
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next_back(), Some(4));
        assert_eq!(iter.len(), 2);
    }

    #[test]
    fn clear_then_reuse() {
        let mut list: DoublyLinkedList<_> = (0..5).collect();
        list.clear();
        list.assert_links();
        list.push(1);
        assert_eq!(values(&list), vec![1]);
        list.assert_links();
    }

    #[test]
    fn linear_inserts_at_back_removes_from_back() {
        let mut list: DoublyLinkedList<u8> = DoublyLinkedList::new();
        Linear::insert(&mut list, 1);
        Linear::insert(&mut list, 2);
        assert_eq!(values(&list), vec![1, 2]);
        assert_eq!(Linear::remove(&mut list), Ok(2));
        assert_eq!(Linear::find(&list, &1), Ok(&1));
    }

    #[test]
    fn display_and_debug() {
        let list: DoublyLinkedList<_> = [1, 2].into_iter().collect();
        assert_eq!(list.to_string(), "[1 <-> 2]");
        assert_eq!(format!("{list:?}"), "[1, 2]");
    }

    #[test]
    fn narrow_links() {
        let mut list: DoublyLinkedList<u8, u16> = DoublyLinkedList::new();
        for i in 0..100 {
            list.push_back(i);
        }
        assert_eq!(list.len(), 100);
        assert_eq!(list.find_at(99), Ok(&99));
        list.assert_links();
    }
}
