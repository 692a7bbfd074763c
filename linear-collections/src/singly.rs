//! Singly-linked list with a head-owned node chain.
//!
//! Each node owns the next one through a `Box`, so the whole chain is owned
//! transitively by `head`. Pushing and popping at the front are O(1);
//! positional and keyed lookups walk the chain.
//!
//! # Example
//!
//! ```
//! use linear_collections::SinglyLinkedList;
//!
//! let mut list: SinglyLinkedList<u32> = [10, 20, 30].into_iter().collect();
//! list.push(0);
//!
//! assert_eq!(list.to_string(), "[0 -> 10 -> 20 -> 30]");
//! assert_eq!(list.pop(), Ok(0));
//! assert_eq!(list.find_at(1), Ok(&20));
//! ```

use core::fmt;
use core::iter::FusedIterator;

use crate::node::Node;
use crate::{Error, Linear, Result};

/// A singly-linked list.
///
/// Invariant: `len` equals the number of nodes reachable from `head`, and
/// `len == 0` exactly when `head` is `None`.
pub struct SinglyLinkedList<T> {
    head: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SinglyLinkedList<T> {
    /// Creates an empty list.
    #[inline]
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
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

    /// Inserts `item` at the front. O(1).
    #[inline]
    pub fn push(&mut self, item: T) {
        self.head = Some(Node::new(item, self.head.take()));
        self.len += 1;
    }

    /// Removes and returns the front element. O(1).
    ///
    /// # Errors
    ///
    /// [`Error::Underflow`] if the list is empty.
    #[inline]
    pub fn pop(&mut self) -> Result<T> {
        let node = self.head.take().ok_or(Error::underflow("list"))?;
        let Node { value, next } = *node;
        self.head = next;
        self.len -= 1;
        Ok(value)
    }

    /// Returns a reference to the front element.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    /// Returns the element at `index` without removing it. O(n).
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`] unless `index < len`.
    pub fn find_at(&self, index: usize) -> Result<&T> {
        if index >= self.len {
            return Err(Error::out_of_bounds(index, self.len));
        }
        self.iter()
            .nth(index)
            .ok_or(Error::out_of_bounds(index, self.len))
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        // Unroll so a long chain doesn't recurse through Box drops.
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
        self.len = 0;
    }

    /// Returns an iterator over references, front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }
}

impl<T: PartialEq> SinglyLinkedList<T> {
    /// Returns the first element equal to `key`. O(n).
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if no element matches.
    pub fn find(&self, key: &T) -> Result<&T> {
        self.iter().find(|value| *value == key).ok_or(Error::NotFound)
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

/// Builds a list that preserves iteration order: the first yielded item
/// becomes the head.
impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        let mut cursor = &mut list.head;
        for item in iter {
            cursor = &mut cursor.insert(Node::new(item, None)).next;
            list.len += 1;
        }
        list
    }
}

impl<T: PartialEq> Linear<T> for SinglyLinkedList<T> {
    type Query = T;

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn insert(&mut self, item: T) {
        self.push(item);
    }

    #[inline]
    fn remove(&mut self) -> Result<T> {
        self.pop()
    }

    #[inline]
    fn find(&self, key: &T) -> Result<&T> {
        SinglyLinkedList::find(self, key)
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over references to list elements.
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        self.remaining -= 1;
        Some(&node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            next: self.next,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator, front to back.
pub struct IntoIter<T> {
    list: SinglyLinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
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

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for SinglyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_list_is_empty() {
        let list: SinglyLinkedList<u64> = SinglyLinkedList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(list.front().is_none());
    }

    #[test]
    fn push_prepends() {
        let mut list = SinglyLinkedList::new();
        list.push(1);
        list.push(2);
        list.push(3);

        assert_eq!(list.len(), 3);
        assert_eq!(list.front(), Some(&3));
        let values: Vec<_> = list.iter().copied().collect();
        assert_eq!(values, vec![3, 2, 1]);
    }

    #[test]
    fn pop_returns_front() {
        let mut list = SinglyLinkedList::new();
        list.push(1);
        list.push(2);

        assert_eq!(list.pop(), Ok(2));
        assert_eq!(list.len(), 1);
        assert_eq!(list.pop(), Ok(1));
        assert!(list.is_empty());
    }

    #[test]
    fn pop_empty_underflows() {
        let mut list: SinglyLinkedList<u64> = SinglyLinkedList::new();
        assert_eq!(list.pop(), Err(Error::Underflow { structure: "list" }));
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn from_iter_keeps_order() {
        let list: SinglyLinkedList<_> = [10, 20, 30].into_iter().collect();
        assert_eq!(list.len(), 3);
        assert_eq!(list.to_string(), "[10 -> 20 -> 30]");
    }

    #[test]
    fn push_then_pop_walkthrough() {
        let mut list: SinglyLinkedList<_> = [10, 20, 30].into_iter().collect();
        list.push(0);
        assert_eq!(list.to_string(), "[0 -> 10 -> 20 -> 30]");
        assert_eq!(list.pop(), Ok(0));
        assert_eq!(list.find_at(1), Ok(&20));
    }

    #[test]
    fn find_at_bounds() {
        let list: SinglyLinkedList<_> = ['a', 'b', 'c'].into_iter().collect();
        assert_eq!(list.find_at(0), Ok(&'a'));
        assert_eq!(list.find_at(2), Ok(&'c'));
        assert_eq!(
            list.find_at(3),
            Err(Error::IndexOutOfBounds { index: 3, len: 3 })
        );
    }

    #[test]
    fn find_by_key() {
        let list: SinglyLinkedList<_> = ["x", "y", "z"].into_iter().collect();
        assert_eq!(list.find(&"y"), Ok(&"y"));
        assert_eq!(list.find(&"w"), Err(Error::NotFound));
    }

    #[test]
    fn linear_inserts_and_removes_at_front() {
        let mut list = SinglyLinkedList::new();
        Linear::insert(&mut list, 1);
        Linear::insert(&mut list, 2);
        assert_eq!(Linear::remove(&mut list), Ok(2));
        assert!(!Linear::is_full(&list));
        assert_eq!(Linear::len(&list), 1);
    }

    #[test]
    fn clear_resets() {
        let mut list: SinglyLinkedList<_> = (0..10).collect();
        list.clear();
        assert!(list.is_empty());
        assert!(list.front().is_none());
        list.push(5);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn long_chain_drops_without_recursion() {
        let list: SinglyLinkedList<_> = (0..200_000u32).collect();
        assert_eq!(list.len(), 200_000);
        drop(list);
    }

    #[test]
    fn into_iter_drains_front_to_back() {
        let list: SinglyLinkedList<_> = [1, 2, 3].into_iter().collect();
        let values: Vec<_> = list.into_iter().collect();
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn iter_is_exact_size() {
        let list: SinglyLinkedList<_> = (0..5).collect();
        let mut iter = list.iter();
        assert_eq!(iter.len(), 5);
        iter.next();
        assert_eq!(iter.len(), 4);
    }

    #[test]
    fn clone_is_deep() {
        let mut a: SinglyLinkedList<_> = [1, 2].into_iter().collect();
        let b = a.clone();
        a.push(0);
        assert_eq!(format!("{b:?}"), "[1, 2]");
        assert_eq!(format!("{a:?}"), "[0, 1, 2]");
    }
}
